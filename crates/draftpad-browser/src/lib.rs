//! Browser DOM layer for draftpad.
//!
//! This crate provides `web_sys` implementations of the core traits and
//! mounts the admin page features onto existing markup. It assumes a
//! `wasm32-unknown-unknown` target environment.
//!
//! # Architecture
//!
//! - `surface`: `<textarea>` as a `TextSurface`, with UTF-16 offset conversion
//! - `guard`: drag event suppression listeners
//! - `status`: status/toggle elements and `alert` notifications
//! - `csrf`: token scan over the page's inputs
//! - `files`: reading files out of drop events
//! - `uploader`, `autosave`, `publish_date`: mountable page features
//!
//! # Re-exports
//!
//! This crate re-exports `draftpad-core` for convenience, so consumers
//! only need to depend on `draftpad-browser`.

// Re-export core crate
pub use draftpad_core;
pub use draftpad_core::*;

pub mod autosave;
pub mod csrf;
pub mod dom;
pub mod error;
pub mod files;
pub mod guard;
pub mod publish_date;
pub mod status;
pub mod surface;
pub mod uploader;

pub use autosave::Autosave;
pub use csrf::{DomCsrf, read_csrf_token};
pub use error::DomError;
pub use guard::{DomEvent, DropZoneGuard};
pub use publish_date::PublishDateShortcut;
pub use status::{AlertNotifier, DomStatus};
pub use surface::TextAreaSurface;
pub use uploader::{BrowserUploadController, Uploader};
