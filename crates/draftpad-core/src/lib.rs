//! draftpad-core: Pure Rust logic for the blog admin page, without DOM dependencies.
//!
//! This crate provides:
//! - `TextSurface` trait for the editable body field, and the rope-backed `DraftBuffer`
//! - Markdown image injection at the cursor
//! - Drag event suppression filter
//! - `UploadController` - the drag-and-drop upload lifecycle, generic over its UI seams
//! - `HttpTransport` - reqwest-backed uploads and autosave snapshots
//! - Autosave debounce handle, publication date shortcuts, CSRF lookup, config

pub mod autosave;
pub mod config;
pub mod csrf;
pub mod error;
pub mod guard;
pub mod http;
pub mod inject;
pub mod platform;
pub mod publish_date;
pub mod text;
pub mod types;
pub mod upload;

pub use autosave::{PendingOperation, Snapshot, SnapshotTransport, save_snapshot};
pub use config::{AutosaveConfig, DraftpadConfig, PublishDateConfig, UploadConfig};
pub use csrf::{CSRF_FIELD_NAME, CSRF_HEADER, find_csrf_token};
pub use error::{ConfigError, UploadError};
pub use guard::{DragEventKind, SuppressibleEvent, suppress};
pub use http::{HttpTransport, UploadTransport, Uploaded};
pub use inject::{MarkdownImageRef, inject_image_markdown};
pub use platform::{CsrfSource, Notifier, StaticCsrf, StatusPresenter};
pub use publish_date::PublishDateAction;
pub use text::{DraftBuffer, TextSurface};
pub use types::{Injection, SelectionRange};
pub use upload::{
    DroppedFile, LifecycleState, Rejection, UploadController, UploadJob, UploadState,
    accept_files,
};
