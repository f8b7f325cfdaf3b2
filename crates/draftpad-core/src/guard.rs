//! Drag-and-drop suppression filter for the body field.
//!
//! Browsers navigate to a file dropped onto a page unless every drag event
//! has its default action prevented. The guard stops all seven drag event
//! kinds on the text surface, regardless of upload state.

use std::fmt;
use std::str::FromStr;

/// Drag-related DOM event kinds the guard suppresses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DragEventKind {
    Drag,
    DragStart,
    DragEnd,
    DragOver,
    DragEnter,
    DragLeave,
    Drop,
}

impl DragEventKind {
    pub const ALL: [DragEventKind; 7] = [
        DragEventKind::Drag,
        DragEventKind::DragStart,
        DragEventKind::DragEnd,
        DragEventKind::DragOver,
        DragEventKind::DragEnter,
        DragEventKind::DragLeave,
        DragEventKind::Drop,
    ];

    /// The DOM event type string.
    pub fn as_str(&self) -> &'static str {
        match self {
            DragEventKind::Drag => "drag",
            DragEventKind::DragStart => "dragstart",
            DragEventKind::DragEnd => "dragend",
            DragEventKind::DragOver => "dragover",
            DragEventKind::DragEnter => "dragenter",
            DragEventKind::DragLeave => "dragleave",
            DragEventKind::Drop => "drop",
        }
    }
}

impl fmt::Display for DragEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when parsing an event type that is not a drag event.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("not a drag event type: {0}")]
pub struct NotDragEvent(pub String);

impl FromStr for DragEventKind {
    type Err = NotDragEvent;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DragEventKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| NotDragEvent(s.to_string()))
    }
}

/// An event whose default action and propagation can be stopped.
pub trait SuppressibleEvent {
    fn prevent_default(&self);
    fn stop_propagation(&self);
}

/// Prevent the default action and stop propagation. Never fails.
pub fn suppress<E: SuppressibleEvent + ?Sized>(event: &E) {
    event.prevent_default();
    event.stop_propagation();
}
