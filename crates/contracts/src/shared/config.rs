use serde::{Deserialize, Serialize};

/// Default address of the reference inference server
pub const DEFAULT_CLASSIFIER_BASE_URL: &str = "http://127.0.0.1:8000";

/// Runtime configuration handed to the browser client by the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub classifier_base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CLASSIFIER_BASE_URL)
    }
}

impl ClientConfig {
    pub fn new(classifier_base_url: impl Into<String>) -> Self {
        Self {
            classifier_base_url: classifier_base_url.into(),
        }
    }

    /// `POST` target for multipart classification requests
    pub fn predict_url(&self) -> String {
        self.endpoint("predict")
    }

    /// Root of the classifier service, answers 2xx while it is up
    pub fn health_url(&self) -> String {
        self.endpoint("")
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.classifier_base_url.trim_end_matches('/'), path)
    }
}
