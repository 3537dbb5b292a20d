use thiserror::Error;

use crate::domain::a001_uploaded_image::DataUrlError;

/// Failure of the single classify request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassificationRequestError {
    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("response is not valid JSON: {0}")]
    InvalidJson(String),
}

/// Everything that can go wrong between picking a file and showing a result
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassifyError {
    #[error("`{mime}` is not an image, only image files can be classified")]
    InvalidFileType { mime: String },

    #[error("could not read the file: {0}")]
    FileRead(String),

    #[error("preview is malformed: {0}")]
    MalformedPreview(#[from] DataUrlError),

    #[error("classification request failed: {0}")]
    ClassificationRequest(#[from] ClassificationRequestError),

    #[error("no image is staged")]
    NothingStaged,

    #[error("a classification request is already in progress")]
    SubmissionInFlight,
}
