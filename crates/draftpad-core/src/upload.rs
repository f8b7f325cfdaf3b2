//! Drag-and-drop image upload lifecycle.
//!
//! A drop carrying exactly one file starts an upload. While it is in flight
//! the body field is disabled and the status shows "uploading". On success
//! the image's markdown is injected at the cursor as it is *when the
//! response arrives*; on failure the user is alerted with the server's
//! text. Either way the field is re-enabled and the status cleared.
//!
//! ```text
//! Idle -> AwaitingDrop -> Uploading -> Succeeded -> Idle
//!                                   \-> Failed    -> Idle
//! ```

use std::cell::Cell;
use std::future::{self, Future};

use bytes::Bytes;

use crate::config::UploadConfig;
use crate::error::UploadError;
use crate::http::UploadTransport;
use crate::inject::inject_image_markdown;
use crate::platform::{CsrfSource, Notifier, StatusPresenter};
use crate::text::TextSurface;

/// Controller lifecycle state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LifecycleState {
    #[default]
    Idle,
    /// A drop arrived and is being checked.
    AwaitingDrop,
    Uploading,
    Succeeded,
    Failed,
}

/// State of a single upload job.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UploadState {
    Pending,
    InFlight,
    Succeeded,
    Failed,
}

/// A file taken from a drop event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DroppedFile {
    pub name: String,
    /// MIME type reported by the browser, if any.
    pub mime_type: Option<String>,
    pub data: Bytes,
}

impl DroppedFile {
    pub fn new(name: impl Into<String>, data: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            mime_type: None,
            data: data.into(),
        }
    }

    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }
}

/// One upload, from accepted drop to terminal state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadJob {
    pub file: DroppedFile,
    pub state: UploadState,
    pub result_url: Option<String>,
    pub error_message: Option<String>,
}

impl UploadJob {
    pub fn new(file: DroppedFile) -> Self {
        Self {
            file,
            state: UploadState::Pending,
            result_url: None,
            error_message: None,
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file.name
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self.state, UploadState::Succeeded | UploadState::Failed)
    }
}

/// Why a drop did not start an upload. Never shown to the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rejection {
    NoFiles,
    TooManyFiles(usize),
    /// Another upload is still in flight.
    Busy,
}

/// Accept a drop payload only if it holds exactly one file.
pub fn accept_files<F>(mut files: Vec<F>) -> Result<F, Rejection> {
    match files.len() {
        0 => Err(Rejection::NoFiles),
        1 => Ok(files.remove(0)),
        n => Err(Rejection::TooManyFiles(n)),
    }
}

/// Owns the upload lifecycle for one text surface.
///
/// At most one job exists at a time. Drops arriving while a job is in
/// flight are rejected, not queued.
pub struct UploadController<S, T, P, N, C> {
    surface: S,
    transport: T,
    status: P,
    notifier: N,
    csrf: C,
    config: UploadConfig,
    state: Cell<LifecycleState>,
}

impl<S, T, P, N, C> UploadController<S, T, P, N, C>
where
    S: TextSurface,
    T: UploadTransport,
    P: StatusPresenter,
    N: Notifier,
    C: CsrfSource,
{
    pub fn new(surface: S, transport: T, status: P, notifier: N, csrf: C) -> Self {
        Self {
            surface,
            transport,
            status,
            notifier,
            csrf,
            config: UploadConfig::default(),
            state: Cell::new(LifecycleState::Idle),
        }
    }

    /// Use the page's upload settings, including the failure alert prefix.
    pub fn with_config(mut self, config: UploadConfig) -> Self {
        self.config = config;
        self
    }

    pub fn state(&self) -> LifecycleState {
        self.state.get()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Handle a drop: accept it, upload, and update the page.
    ///
    /// Returns the job in its terminal state, or `None` when the drop was
    /// rejected. Rejections are silent.
    pub async fn handle_drop(&self, files: Vec<DroppedFile>) -> Option<UploadJob> {
        self.handle_drop_with(files, |file| future::ready(Ok(file)))
            .await
    }

    /// Like `handle_drop`, for payloads whose contents are loaded lazily.
    ///
    /// `load` only runs for an accepted drop, so rejected multi-file drops
    /// never read any file. A load failure is reported like a failed upload.
    pub async fn handle_drop_with<F, L, Fut>(&self, files: Vec<F>, load: L) -> Option<UploadJob>
    where
        L: FnOnce(F) -> Fut,
        Fut: Future<Output = Result<DroppedFile, UploadError>>,
    {
        if self.state.get() != LifecycleState::Idle {
            tracing::debug!(reason = ?Rejection::Busy, "ignoring drop");
            return None;
        }

        self.state.set(LifecycleState::AwaitingDrop);
        let candidate = match accept_files(files) {
            Ok(candidate) => candidate,
            Err(reason) => {
                tracing::debug!(?reason, "ignoring drop");
                self.state.set(LifecycleState::Idle);
                return None;
            }
        };

        match load(candidate).await {
            Ok(file) => Some(self.run(UploadJob::new(file)).await),
            Err(err) => {
                tracing::warn!(error = %err, "could not load dropped file");
                self.notifier.notify(&self.failure_message(&err));
                self.state.set(LifecycleState::Idle);
                None
            }
        }
    }

    fn failure_message(&self, err: &UploadError) -> String {
        self.config.failure_message(err.user_message())
    }

    async fn run(&self, mut job: UploadJob) -> UploadJob {
        self.state.set(LifecycleState::Uploading);
        job.state = UploadState::InFlight;

        // Busy UI goes up before the request, so it always precedes the outcome.
        self.surface.set_disabled(true);
        self.status.show_busy();

        let token = self.csrf.csrf_token();
        match self.transport.upload(&job.file, &token).await {
            Ok(uploaded) => {
                self.state.set(LifecycleState::Succeeded);
                let injection = inject_image_markdown(&self.surface, &job.file.name, &uploaded.url);
                tracing::info!(
                    name = %job.file.name,
                    url = %uploaded.url,
                    at = injection.at,
                    "image uploaded"
                );
                job.state = UploadState::Succeeded;
                job.result_url = Some(uploaded.url);
            }
            Err(err) => {
                self.state.set(LifecycleState::Failed);
                tracing::warn!(name = %job.file.name, error = %err, "image upload failed");
                self.notifier.notify(&self.failure_message(&err));
                job.state = UploadState::Failed;
                job.error_message = Some(err.user_message().to_string());
            }
        }

        self.surface.set_disabled(false);
        self.status.show_idle();
        self.state.set(LifecycleState::Idle);
        job
    }
}
