//! Wire records exchanged with the front end.
//!
//! A request is a flat bag of optional string parameters keyed by name. Front
//! ends built on HTML forms send everything as strings, while JSON clients
//! tend to send numbers and booleans for `id` and `force`, so every parameter
//! is accepted as any JSON scalar and normalised to its string form.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::bookmark::TagLink;

/// One named action with its parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Request {
    #[serde(deserialize_with = "scalar_param")]
    pub action: Option<String>,
    #[serde(deserialize_with = "scalar_param")]
    pub id: Option<String>,
    #[serde(deserialize_with = "scalar_param")]
    pub url: Option<String>,
    #[serde(deserialize_with = "scalar_param")]
    pub link: Option<String>,
    #[serde(deserialize_with = "scalar_param")]
    pub title: Option<String>,
    #[serde(deserialize_with = "scalar_param")]
    pub force: Option<String>,
}

impl Request {
    pub fn new(action: &str) -> Self {
        Self {
            action: Some(action.to_string()),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: impl ToString) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn with_url(mut self, url: &str) -> Self {
        self.url = Some(url.to_string());
        self
    }

    pub fn with_link(mut self, link: &str) -> Self {
        self.link = Some(link.to_string());
        self
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn with_force(mut self, force: bool) -> Self {
        self.force = Some(if force { "1" } else { "0" }.to_string());
        self
    }
}

fn scalar_param<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(Value::Bool(b)) => Some(if b { "1" } else { "0" }.to_string()),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(other) => Some(other.to_string()),
    })
}

/// The recognised actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Add,
    Delete,
    SetTitle,
    SetLink,
}

impl Action {
    /// Case-insensitive lookup; `None` for anything unknown.
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "add" => Some(Action::Add),
            "delete" => Some(Action::Delete),
            "settitle" => Some(Action::SetTitle),
            "setlink" => Some(Action::SetLink),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Add => "add",
            Action::Delete => "delete",
            Action::SetTitle => "settitle",
            Action::SetLink => "setlink",
        }
    }
}

/// Flat response record. `result` and `error` are always present and always
/// opposite; the remaining fields echo whatever the action touched.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub result: bool,
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Echo of the requested id, or `false` when none was given.
    pub id: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<TagLink>>,
}

impl Response {
    /// A response that has not succeeded yet, echoing the requested id.
    pub fn pending(id: Option<&str>) -> Self {
        Self {
            result: false,
            error: true,
            message: None,
            id: id
                .map(|s| Value::String(s.to_string()))
                .unwrap_or(Value::Bool(false)),
            url: None,
            force: None,
            link: None,
            title: None,
            raw_title: None,
            tags: None,
        }
    }

    pub fn succeed(mut self) -> Self {
        self.result = true;
        self.error = false;
        self.message = None;
        self
    }

    pub fn fail(mut self, message: impl Into<String>) -> Self {
        let message = message.into();
        self.result = false;
        self.error = true;
        self.message = Some(if message.is_empty() {
            "unknown error".to_string()
        } else {
            message
        });
        self
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| {
            format!(
                r#"{{"result":false,"error":true,"message":"serialization error: {}"}}"#,
                e.to_string().replace('"', "'")
            )
        })
    }
}
