//! Page-level state of the classification flow.
//!
//! One value owns both the staged image and the result so the result can
//! never outlive the image it was computed for. Reads and requests are
//! started and completed in two steps; completions carry the ticket or
//! generation they were started with and are dropped when superseded.

use uuid::Uuid;

use super::errors::ClassifyError;
use crate::domain::a001_uploaded_image::{BinaryFile, FileDescriptor, UploadedImage};
use crate::domain::a002_classification_result::ClassificationResult;

/// Handle of one started file read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadTicket(u64);

/// A request that has been started for a given staged image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub generation: u64,
    pub file: BinaryFile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Idle,
    ImageStaged,
    Submitting,
    ResultReady,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassifySession {
    id: Uuid,
    staged: Option<UploadedImage>,
    result: Option<ClassificationResult>,
    error: Option<ClassifyError>,
    /// Bumped whenever the staged slot changes
    generation: u64,
    latest_ticket: u64,
    /// Generation of the request currently awaiting a response
    in_flight: Option<u64>,
}

impl Default for ClassifySession {
    fn default() -> Self {
        Self::new()
    }
}

impl ClassifySession {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            staged: None,
            result: None,
            error: None,
            generation: 0,
            latest_ticket: 0,
            in_flight: None,
        }
    }

    /// Correlation id for diagnostics
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn staged(&self) -> Option<&UploadedImage> {
        self.staged.as_ref()
    }

    pub fn result(&self) -> Option<&ClassificationResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&ClassifyError> {
        self.error.as_ref()
    }

    /// A request is awaiting its response, possibly for an image that has
    /// since been replaced
    pub fn is_submitting(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn can_submit(&self) -> bool {
        self.staged.is_some() && self.in_flight.is_none()
    }

    pub fn phase(&self) -> SessionPhase {
        if self.staged.is_none() {
            SessionPhase::Idle
        } else if self.is_submitting() {
            SessionPhase::Submitting
        } else if self.result.is_some() {
            SessionPhase::ResultReady
        } else {
            SessionPhase::ImageStaged
        }
    }

    /// Start staging a file. A non-image leaves the session untouched.
    pub fn begin_acquire(&mut self, file: &FileDescriptor) -> Result<ReadTicket, ClassifyError> {
        if !file.is_image() {
            return Err(ClassifyError::InvalidFileType {
                mime: file.mime.clone(),
            });
        }
        self.latest_ticket += 1;
        Ok(ReadTicket(self.latest_ticket))
    }

    /// Stage the image read for `ticket`. Returns `false` when a later
    /// acquisition or a removal superseded it.
    pub fn complete_acquire(&mut self, ticket: ReadTicket, image: UploadedImage) -> bool {
        if ticket.0 != self.latest_ticket {
            return false;
        }
        self.staged = Some(image);
        self.generation += 1;
        self.result = None;
        self.error = None;
        true
    }

    /// Record a failed read unless it was superseded
    pub fn fail_acquire(&mut self, ticket: ReadTicket, error: ClassifyError) -> bool {
        if ticket.0 != self.latest_ticket {
            return false;
        }
        self.error = Some(error);
        true
    }

    /// Explicit removal: clears everything and orphans pending reads and requests
    pub fn remove(&mut self) {
        self.staged = None;
        self.result = None;
        self.error = None;
        self.generation += 1;
        self.latest_ticket += 1;
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Decode the staged preview and mark a request in flight.
    ///
    /// At most one request is in flight per session, whichever image it was
    /// started for. A malformed preview is recorded as the session error;
    /// precondition failures (`NothingStaged`, `SubmissionInFlight`) are only
    /// returned.
    pub fn begin_submit(&mut self) -> Result<Submission, ClassifyError> {
        let staged = self.staged.as_ref().ok_or(ClassifyError::NothingStaged)?;
        if self.in_flight.is_some() {
            return Err(ClassifyError::SubmissionInFlight);
        }

        let file = match staged.to_binary_file() {
            Ok(file) => file,
            Err(e) => {
                let error = ClassifyError::from(e);
                self.error = Some(error.clone());
                return Err(error);
            }
        };

        self.error = None;
        self.in_flight = Some(self.generation);
        Ok(Submission {
            generation: self.generation,
            file,
        })
    }

    /// Apply the outcome of the request started for `generation`.
    /// Returns `false` when the image it was made for is gone.
    ///
    /// A failure keeps the previous result and the staged image.
    pub fn complete_submit(
        &mut self,
        generation: u64,
        outcome: Result<ClassificationResult, ClassifyError>,
    ) -> bool {
        if self.in_flight == Some(generation) {
            self.in_flight = None;
        }
        if generation != self.generation || self.staged.is_none() {
            return false;
        }

        match outcome {
            Ok(result) => {
                self.result = Some(result);
                self.error = None;
            }
            Err(error) => self.error = Some(error),
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::u101_classify_image::client::fake::FakeTransport;
    use crate::usecases::u101_classify_image::{ClassificationClient, ClassificationRequestError};
    use crate::shared::config::ClientConfig;
    use serde_json::json;

    fn descriptor(name: &str, mime: &str) -> FileDescriptor {
        FileDescriptor::new(name, mime, 4)
    }

    fn image(name: &str, bytes: &[u8]) -> UploadedImage {
        UploadedImage::from_bytes(name, "image/png", bytes)
    }

    fn staged_session(name: &str, bytes: &[u8]) -> ClassifySession {
        let mut session = ClassifySession::new();
        let ticket = session.begin_acquire(&descriptor(name, "image/png")).unwrap();
        assert!(session.complete_acquire(ticket, image(name, bytes)));
        session
    }

    #[test]
    fn test_non_image_leaves_session_untouched() {
        let mut session = staged_session("a.png", b"aaaa");
        let before = session.clone();

        for mime in ["text/plain", "application/pdf", "", "image/"] {
            let err = session
                .begin_acquire(&descriptor("notes.txt", mime))
                .unwrap_err();
            assert_eq!(
                err,
                ClassifyError::InvalidFileType {
                    mime: mime.to_string()
                }
            );
        }
        assert_eq!(session, before);
    }

    #[test]
    fn test_latest_started_read_wins_either_order() {
        // B completes last
        let mut session = ClassifySession::new();
        let a = session.begin_acquire(&descriptor("a.png", "image/png")).unwrap();
        let b = session.begin_acquire(&descriptor("b.png", "image/png")).unwrap();
        assert!(!session.complete_acquire(a, image("a.png", b"aaaa")));
        assert!(session.complete_acquire(b, image("b.png", b"bbbb")));
        assert_eq!(session.staged().unwrap().file_name, "b.png");

        // A completes last
        let mut session = ClassifySession::new();
        let a = session.begin_acquire(&descriptor("a.png", "image/png")).unwrap();
        let b = session.begin_acquire(&descriptor("b.png", "image/png")).unwrap();
        assert!(session.complete_acquire(b, image("b.png", b"bbbb")));
        assert!(!session.complete_acquire(a, image("a.png", b"aaaa")));

        let staged = session.staged().unwrap();
        assert_eq!(staged.file_name, "b.png");
        assert_eq!(staged.to_binary_file().unwrap().bytes, b"bbbb");
    }

    #[test]
    fn test_new_image_clears_previous_result() {
        let mut session = staged_session("a.png", b"aaaa");
        let submission = session.begin_submit().unwrap();
        assert!(session.complete_submit(
            submission.generation,
            Ok(ClassificationResult::new(json!({"predicted_class": "Bag"})))
        ));
        assert_eq!(session.phase(), SessionPhase::ResultReady);

        let ticket = session.begin_acquire(&descriptor("b.png", "image/png")).unwrap();
        // the old result stays visible until the new image is actually staged
        assert_eq!(session.phase(), SessionPhase::ResultReady);
        assert!(session.complete_acquire(ticket, image("b.png", b"bbbb")));
        assert_eq!(session.result(), None);
        assert_eq!(session.phase(), SessionPhase::ImageStaged);
    }

    #[test]
    fn test_removal_blocks_submit_and_pending_reads() {
        let mut session = staged_session("a.png", b"aaaa");
        let pending = session.begin_acquire(&descriptor("b.png", "image/png")).unwrap();

        session.remove();
        assert_eq!(session.phase(), SessionPhase::Idle);
        assert_eq!(session.begin_submit(), Err(ClassifyError::NothingStaged));
        assert_eq!(session.error(), None);

        assert!(!session.complete_acquire(pending, image("b.png", b"bbbb")));
        assert!(session.staged().is_none());
    }

    #[test]
    fn test_single_request_in_flight() {
        let mut session = staged_session("a.png", b"aaaa");
        let first = session.begin_submit().unwrap();
        assert_eq!(session.phase(), SessionPhase::Submitting);
        assert_eq!(session.begin_submit(), Err(ClassifyError::SubmissionInFlight));
        assert!(!session.can_submit());

        assert!(session.complete_submit(
            first.generation,
            Ok(ClassificationResult::new(json!({"label": "shoe"})))
        ));
        assert!(session.can_submit());
    }

    #[test]
    fn test_one_request_per_session_across_images() {
        let mut session = staged_session("a.png", b"aaaa");
        let for_a = session.begin_submit().unwrap();

        let ticket = session.begin_acquire(&descriptor("b.png", "image/png")).unwrap();
        assert!(session.complete_acquire(ticket, image("b.png", b"bbbb")));

        // the request for a.png is still pending
        assert!(session.is_submitting());
        assert!(!session.can_submit());
        assert_eq!(session.begin_submit(), Err(ClassifyError::SubmissionInFlight));
        assert_eq!(session.error(), None);

        // its response is dropped but frees the slot
        assert!(!session.complete_submit(
            for_a.generation,
            Ok(ClassificationResult::new(json!({"label": "for a"})))
        ));
        assert_eq!(session.result(), None);
        assert!(!session.is_submitting());
        assert_eq!(session.phase(), SessionPhase::ImageStaged);

        let for_b = session.begin_submit().unwrap();
        assert_eq!(for_b.file.bytes, b"bbbb");
        assert!(session.complete_submit(
            for_b.generation,
            Ok(ClassificationResult::new(json!({"label": "for b"})))
        ));
        assert_eq!(session.result().unwrap().label(), Some("for b"));
    }

    #[test]
    fn test_response_after_removal_is_dropped() {
        let mut session = staged_session("a.png", b"aaaa");
        let pending = session.begin_submit().unwrap();

        session.remove();
        assert!(!session.complete_submit(
            pending.generation,
            Ok(ClassificationResult::new(json!({"label": "late"})))
        ));
        assert_eq!(session.phase(), SessionPhase::Idle);
        assert_eq!(session.result(), None);
        assert!(!session.is_submitting());
    }

    #[test]
    fn test_malformed_preview_is_recorded() {
        let mut session = ClassifySession::new();
        let ticket = session.begin_acquire(&descriptor("a.png", "image/png")).unwrap();
        let mut broken = image("a.png", b"aaaa");
        broken.preview_url = "data:image/png;base64,***".to_string();
        assert!(session.complete_acquire(ticket, broken));

        let err = session.begin_submit().unwrap_err();
        assert!(matches!(err, ClassifyError::MalformedPreview(_)));
        assert_eq!(session.error(), Some(&err));
        assert!(!session.is_submitting());
    }

    #[tokio::test]
    async fn test_malformed_preview_never_reaches_transport() {
        let client = ClassificationClient::new(
            ClientConfig::default(),
            FakeTransport::replying(200, "{}"),
        );

        for broken in ["", "no scheme", "data:image/png,AAAA", "data:image/png;base64,!!!"] {
            let mut session = ClassifySession::new();
            let ticket = session.begin_acquire(&descriptor("a.png", "image/png")).unwrap();
            let mut corrupted = image("a.png", b"aaaa");
            corrupted.preview_url = broken.to_string();
            assert!(session.complete_acquire(ticket, corrupted));

            // the client is only reached with a decoded submission
            if let Ok(submission) = session.begin_submit() {
                let outcome = client.classify(submission.file).await;
                session.complete_submit(submission.generation, outcome);
            }
            assert!(
                matches!(session.error(), Some(ClassifyError::MalformedPreview(_))),
                "{broken}"
            );
            assert!(session.can_submit());
        }
        assert!(client.transport().calls.borrow().is_empty());
    }

    #[test]
    fn test_failed_read_is_recorded_for_latest_only() {
        let mut session = ClassifySession::new();
        let a = session.begin_acquire(&descriptor("a.png", "image/png")).unwrap();
        let b = session.begin_acquire(&descriptor("b.png", "image/png")).unwrap();

        assert!(!session.fail_acquire(a, ClassifyError::FileRead("stale".into())));
        assert_eq!(session.error(), None);
        assert!(session.fail_acquire(b, ClassifyError::FileRead("denied".into())));
        assert_eq!(session.error(), Some(&ClassifyError::FileRead("denied".into())));

        session.dismiss_error();
        assert_eq!(session.error(), None);
    }

    #[tokio::test]
    async fn test_server_error_keeps_staged_image() {
        let mut session = staged_session("a.png", b"aaaa");
        let staged_before = session.staged().cloned();

        let client = ClassificationClient::new(
            ClientConfig::default(),
            FakeTransport::replying(500, "boom"),
        );
        let submission = session.begin_submit().unwrap();
        let outcome = client.classify(submission.file).await;
        assert!(session.complete_submit(submission.generation, outcome));

        assert_eq!(session.result(), None);
        assert_eq!(session.staged().cloned(), staged_before);
        assert_eq!(
            session.error(),
            Some(&ClassifyError::ClassificationRequest(
                ClassificationRequestError::Status {
                    status: 500,
                    body: "boom".to_string()
                }
            ))
        );
        assert_eq!(session.phase(), SessionPhase::ImageStaged);
    }

    #[tokio::test]
    async fn test_full_flow_success() {
        let mut session = ClassifySession::new();
        let ticket = session
            .begin_acquire(&descriptor("boot.png", "image/png"))
            .unwrap();
        assert!(session.complete_acquire(ticket, image("boot.png", b"boot bytes")));

        let client = ClassificationClient::new(
            ClientConfig::default(),
            FakeTransport::replying(200, r#"{"predicted_class":"Ankle boot","confidence":0.88}"#),
        );
        let submission = session.begin_submit().unwrap();
        assert_eq!(submission.file.bytes, b"boot bytes");

        let outcome = client.classify(submission.file).await;
        assert!(session.complete_submit(submission.generation, outcome));

        let result = session.result().unwrap();
        assert_eq!(result.label(), Some("Ankle boot"));
        assert_eq!(result.confidence_percent().as_deref(), Some("88.0%"));
        assert_eq!(session.phase(), SessionPhase::ResultReady);
    }
}
