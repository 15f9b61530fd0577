use thiserror::Error;

// === FetchError ===

/// Errors raised while retrieving a remote page.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The HTTP client could not be constructed from the fetch settings.
    #[error("Fetch client error: {0}")]
    Client(String),
    /// The URL could not be parsed or uses an unsupported scheme.
    #[error("Invalid fetch url: {0}")]
    InvalidUrl(String),
    /// The remote server did not answer within the configured timeout.
    #[error("Fetch timed out: {0}")]
    Timeout(String),
    /// DNS, TLS, connection or protocol failure.
    #[error("Fetch transport error: {0}")]
    Transport(String),
    /// The final response after redirects was not a success.
    #[error("Fetch returned status {0}")]
    Status(u16),
    /// The response carried no body.
    #[error("Fetch returned an empty body")]
    EmptyBody,
}

// === StoreError ===

/// Errors related to bookmark persistence.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Another bookmark already uses this link.
    #[error("Link already stored: {0}")]
    DuplicateLink(String),
    /// Links are required; the schema default of `''` is never stored.
    #[error("Bookmark link must not be empty")]
    EmptyLink,
    /// No bookmark has the given id.
    #[error("Bookmark not found: {0}")]
    NotFound(i64),
    /// Database operation failed.
    #[error("Bookmark database error: {0}")]
    DatabaseError(String),
}

impl From<rusqlite::Error> for StoreError {
    fn from(e: rusqlite::Error) -> Self {
        StoreError::DatabaseError(e.to_string())
    }
}

// === DispatchError ===

/// Everything that can turn a command into an error response.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// A required parameter was missing or empty.
    #[error("missing {0}")]
    Validation(&'static str),
    /// A parameter was present but malformed.
    #[error("invalid {field}: {value}")]
    InvalidParam { field: &'static str, value: String },
    /// The page could not be retrieved and `force` was not set.
    #[error("could not fetch")]
    Fetch(#[source] FetchError),
    /// The store rejected the mutation.
    #[error(transparent)]
    Store(#[from] StoreError),
    /// The action name is not one the dispatcher knows.
    #[error("invalid action: {0}")]
    InvalidAction(String),
    /// Anything else; still answered with a diagnostic response.
    #[error("internal error: {0}")]
    Internal(String),
}

// === SettingsError ===

/// Errors related to settings management.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing settings.
    #[error("Settings I/O error: {0}")]
    IoError(String),
    /// Failed to serialize or deserialize settings.
    #[error("Settings serialization error: {0}")]
    SerializationError(String),
    /// The provided settings key is invalid.
    #[error("Invalid settings key: {0}")]
    InvalidKey(String),
    /// The provided settings value is invalid.
    #[error("Invalid settings value: {0}")]
    InvalidValue(String),
}
