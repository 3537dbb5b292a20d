pub mod client;
pub mod errors;
pub mod form;
pub mod session;

pub use client::{ClassificationClient, ClassifierTransport, TransportResponse};
pub use errors::{ClassificationRequestError, ClassifyError};
pub use form::{FilePart, MultipartForm, FILE_FIELD};
pub use session::{ClassifySession, ReadTicket, SessionPhase, Submission};

use crate::usecases::common::UseCaseMetadata;

pub struct ClassifyImage;

impl UseCaseMetadata for ClassifyImage {
    fn usecase_index() -> &'static str {
        "u101"
    }

    fn usecase_name() -> &'static str {
        "classify_image"
    }

    fn display_name() -> &'static str {
        "Classify a fashion item"
    }

    fn description() -> &'static str {
        "Drop or pick an image of a clothing item and let the model name it"
    }
}
