//! Debounced autosave of the post being written.
//!
//! Every keystroke in the body replaces the pending save with a fresh one,
//! so a snapshot is only sent once typing pauses. The pending save is a
//! single owned handle: scheduling drops (and so cancels) the previous one.

use std::future::Future;

use crate::error::UploadError;
use crate::platform::CsrfSource;

/// Title and body of the post at save time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub title: String,
    pub body: String,
}

impl Snapshot {
    /// Build a snapshot, substituting `untitled` for an empty title.
    pub fn new(title: &str, body: &str, untitled: &str) -> Self {
        let title = if title.is_empty() { untitled } else { title };
        Self {
            title: title.to_string(),
            body: body.to_string(),
        }
    }
}

/// Persists snapshots to the backend.
pub trait SnapshotTransport {
    fn save_snapshot(
        &self,
        snapshot: &Snapshot,
        csrf_token: &str,
    ) -> impl Future<Output = Result<(), UploadError>>;
}

/// The one pending debounced operation, if any.
///
/// `H` is a timer handle that cancels its timer when dropped, such as
/// `gloo_timers::callback::Timeout`.
#[derive(Debug)]
pub struct PendingOperation<H> {
    current: Option<H>,
}

impl<H> Default for PendingOperation<H> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<H> PendingOperation<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `handle` the pending operation, cancelling the previous one.
    pub fn schedule(&mut self, handle: H) {
        if self.current.replace(handle).is_some() {
            tracing::trace!("replaced pending operation");
        }
    }

    /// Cancel the pending operation, if any.
    pub fn cancel(&mut self) {
        self.current = None;
    }

    pub fn is_pending(&self) -> bool {
        self.current.is_some()
    }
}

/// Send one snapshot, logging the outcome.
pub async fn save_snapshot<T, C>(transport: &T, csrf: &C, snapshot: &Snapshot) -> Result<(), UploadError>
where
    T: SnapshotTransport + ?Sized,
    C: CsrfSource + ?Sized,
{
    tracing::debug!(title = %snapshot.title, len = snapshot.body.len(), "saving snapshot");
    let token = csrf.csrf_token();
    match transport.save_snapshot(snapshot, &token).await {
        Ok(()) => {
            tracing::info!(title = %snapshot.title, "snapshot saved");
            Ok(())
        }
        Err(err) => {
            tracing::warn!(error = %err, "snapshot save failed");
            Err(err)
        }
    }
}
