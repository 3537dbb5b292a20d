use serde::{Deserialize, Serialize};

/// Client diagnostic forwarded to the host's log sink
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateLogRequest {
    pub source: String, // "client" or "server"
    pub category: String,
    pub message: String,
}

impl CreateLogRequest {
    pub fn client(category: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            source: "client".to_string(),
            category: category.into(),
            message: message.into(),
        }
    }
}
