//! Classify Image - View Model

use super::api::{describe_file, read_file_bytes, BrowserTransport};
use crate::shared::client_log::report_error;
use contracts::domain::a001_uploaded_image::UploadedImage;
use contracts::domain::a002_classification_result::ClassificationResult;
use contracts::shared::config::ClientConfig;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u101_classify_image::{
    ClassificationClient, ClassifyError, ClassifyImage, ClassifySession, SessionPhase,
};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const NOTICE_TIMEOUT_MS: u32 = 5000;

#[derive(Clone, Copy)]
pub struct ClassifyVm {
    pub session: RwSignal<ClassifySession>,
    /// Transient message for rejected input; never part of the session
    pub notice: RwSignal<Option<String>>,
    pub dragging: RwSignal<bool>,
}

impl ClassifyVm {
    pub fn new() -> Self {
        Self {
            session: RwSignal::new(ClassifySession::new()),
            notice: RwSignal::new(None),
            dragging: RwSignal::new(false),
        }
    }

    pub fn staged(&self) -> Option<UploadedImage> {
        self.session.with(|s| s.staged().cloned())
    }

    pub fn result(&self) -> Option<ClassificationResult> {
        self.session.with(|s| s.result().cloned())
    }

    pub fn has_image(&self) -> bool {
        self.session.with(|s| s.staged().is_some())
    }

    pub fn phase(&self) -> SessionPhase {
        self.session.with(|s| s.phase())
    }

    pub fn is_submitting(&self) -> bool {
        self.phase() == SessionPhase::Submitting
    }

    /// Modifier class of the page for the current phase
    pub fn phase_class(&self) -> &'static str {
        match self.phase() {
            SessionPhase::Idle => "classify--idle",
            SessionPhase::ImageStaged => "classify--staged",
            SessionPhase::Submitting => "classify--submitting",
            SessionPhase::ResultReady => "classify--result",
        }
    }

    pub fn can_submit(&self) -> bool {
        self.session.with(|s| s.can_submit())
    }

    /// Notice first, then the session error
    pub fn error_message(&self) -> Option<String> {
        self.notice
            .get()
            .or_else(|| self.session.with(|s| s.error().map(|e| e.to_string())))
    }

    pub fn dismiss(&self) {
        self.notice.set(None);
        self.session.update(|s| s.dismiss_error());
    }

    /// Validate, read and stage a picked or dropped file
    pub fn stage_file(&self, file: web_sys::File) {
        let descriptor = describe_file(&file);

        // A ticket bump alone changes nothing visible
        let ticket = match self
            .session
            .try_update_untracked(|s| s.begin_acquire(&descriptor))
        {
            Some(Ok(ticket)) => ticket,
            Some(Err(err)) => {
                log::warn!("Rejected {}: {}", descriptor.name, err);
                self.show_notice(err.to_string());
                return;
            }
            None => return,
        };
        self.notice.set(None);

        let session = self.session;
        spawn_local(async move {
            match read_file_bytes(&file).await {
                Ok(bytes) => {
                    let image = UploadedImage::from_bytes(
                        descriptor.name.clone(),
                        descriptor.mime.clone(),
                        &bytes,
                    );
                    let staged = session
                        .try_update(|s| s.complete_acquire(ticket, image))
                        .unwrap_or(false);
                    if staged {
                        log::debug!("Staged {} ({} bytes)", descriptor.name, bytes.len());
                    } else {
                        log::debug!("Read of {} superseded", descriptor.name);
                    }
                }
                Err(e) => {
                    report_error(
                        &ClassifyImage::full_name(),
                        &format!("reading {} failed: {}", descriptor.name, e),
                    );
                    session.try_update(|s| s.fail_acquire(ticket, ClassifyError::FileRead(e)));
                }
            }
        });
    }

    pub fn remove(&self) {
        self.notice.set(None);
        self.session.update(|s| s.remove());
    }

    /// Send the staged image to the classifier
    pub fn submit(&self, config: ClientConfig) {
        let submission = match self.session.try_update(|s| s.begin_submit()) {
            Some(Ok(submission)) => submission,
            Some(Err(err @ ClassifyError::MalformedPreview(_))) => {
                report_error(&ClassifyImage::full_name(), &err.to_string());
                return;
            }
            Some(Err(err)) => {
                log::warn!("Submit ignored: {}", err);
                return;
            }
            None => return,
        };

        let session = self.session;
        let session_id = self.session.with_untracked(|s| s.id());
        let generation = submission.generation;

        spawn_local(async move {
            let client = ClassificationClient::new(config, BrowserTransport);
            let outcome = client.classify(submission.file).await;

            match &outcome {
                Ok(result) => log::info!(
                    "Classified as {} ({})",
                    result.label().unwrap_or("<no label>"),
                    result.confidence_percent().unwrap_or_default()
                ),
                Err(err) => report_error(
                    &ClassifyImage::full_name(),
                    &format!("session {} via {}: {}", session_id, client.config().predict_url(), err),
                ),
            }

            let applied = session
                .try_update(|s| s.complete_submit(generation, outcome))
                .unwrap_or(false);
            if !applied {
                log::debug!("Response for superseded image {} dropped", generation);
            }
        });
    }

    fn show_notice(&self, message: String) {
        self.notice.set(Some(message.clone()));

        let notice = self.notice;
        spawn_local(async move {
            TimeoutFuture::new(NOTICE_TIMEOUT_MS).await;
            if notice.try_get_untracked().flatten().as_deref() == Some(message.as_str()) {
                let _ = notice.try_set(None);
            }
        });
    }
}
