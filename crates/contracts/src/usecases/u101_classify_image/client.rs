use async_trait::async_trait;

use super::errors::{ClassificationRequestError, ClassifyError};
use super::form::MultipartForm;
use crate::domain::a001_uploaded_image::BinaryFile;
use crate::domain::a002_classification_result::ClassificationResult;
use crate::shared::config::ClientConfig;

/// Longest body excerpt kept in a status error
const BODY_EXCERPT_CHARS: usize = 200;

/// Raw HTTP answer as seen by the client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a multipart body somewhere. `Err` means no HTTP response arrived.
#[async_trait(?Send)]
pub trait ClassifierTransport {
    async fn post_multipart(
        &self,
        url: &str,
        form: MultipartForm,
    ) -> Result<TransportResponse, String>;
}

/// One attempt per call: no retry, no timeout, no backoff
pub struct ClassificationClient<T: ClassifierTransport> {
    config: ClientConfig,
    transport: T,
}

impl<T: ClassifierTransport> ClassificationClient<T> {
    pub fn new(config: ClientConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    #[cfg(test)]
    pub(crate) fn transport(&self) -> &T {
        &self.transport
    }

    pub async fn classify(&self, file: BinaryFile) -> Result<ClassificationResult, ClassifyError> {
        let form = MultipartForm::single_file(file);
        let response = self
            .transport
            .post_multipart(&self.config.predict_url(), form)
            .await
            .map_err(ClassificationRequestError::Network)?;

        Ok(interpret_response(response)?)
    }
}

pub fn interpret_response(
    response: TransportResponse,
) -> Result<ClassificationResult, ClassificationRequestError> {
    if !response.is_success() {
        return Err(ClassificationRequestError::Status {
            status: response.status,
            body: response.body.chars().take(BODY_EXCERPT_CHARS).collect(),
        });
    }

    ClassificationResult::from_json(&response.body)
        .map_err(|e| ClassificationRequestError::InvalidJson(e.to_string()))
}

#[cfg(test)]
pub(crate) mod fake {
    use super::*;
    use std::cell::RefCell;

    /// Returns a canned answer and records every call
    pub struct FakeTransport {
        answer: Result<TransportResponse, String>,
        pub calls: RefCell<Vec<(String, MultipartForm)>>,
    }

    impl FakeTransport {
        pub fn replying(status: u16, body: &str) -> Self {
            Self {
                answer: Ok(TransportResponse {
                    status,
                    body: body.to_string(),
                }),
                calls: RefCell::new(Vec::new()),
            }
        }

        pub fn unreachable(reason: &str) -> Self {
            Self {
                answer: Err(reason.to_string()),
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    #[async_trait(?Send)]
    impl ClassifierTransport for FakeTransport {
        async fn post_multipart(
            &self,
            url: &str,
            form: MultipartForm,
        ) -> Result<TransportResponse, String> {
            self.calls.borrow_mut().push((url.to_string(), form));
            self.answer.clone()
        }
    }
}
