use serde::{Deserialize, Serialize};

/// Top-level linkstash settings container.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LinkstashSettings {
    pub fetch: FetchSettings,
    pub storage: StorageSettings,
}

/// Outbound page retrieval.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FetchSettings {
    pub timeout_secs: u64,
    pub user_agent: String,
    pub max_redirects: usize,
    /// Skip TLS certificate and hostname checks. Off unless explicitly enabled.
    pub accept_invalid_certs: bool,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            timeout_secs: 5,
            user_agent: format!(
                "linkstash/{} (+bookmark title fetcher)",
                env!("CARGO_PKG_VERSION")
            ),
            max_redirects: 10,
            accept_invalid_certs: false,
        }
    }
}

/// Where the bookmark database lives.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StorageSettings {
    /// File name inside the data directory, or an absolute path.
    pub database_file: String,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            database_file: "linkstash.db".to_string(),
        }
    }
}
