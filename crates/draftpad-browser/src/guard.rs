//! Drag event suppression on the body field.

use draftpad_core::{DragEventKind, SuppressibleEvent, suppress};
use gloo_events::{EventListener, EventListenerOptions};
use web_sys::EventTarget;

/// Wrapper letting core's suppression filter act on a DOM event.
pub struct DomEvent<'a>(pub &'a web_sys::Event);

impl SuppressibleEvent for DomEvent<'_> {
    fn prevent_default(&self) {
        self.0.prevent_default();
    }

    fn stop_propagation(&self) {
        self.0.stop_propagation();
    }
}

/// Keeps the browser from navigating to files dropped on the target.
///
/// Installs one listener per drag event kind. Dropping the guard removes
/// them; call `forget` to keep them for the life of the page.
pub struct DropZoneGuard {
    listeners: Vec<EventListener>,
}

impl DropZoneGuard {
    /// Install the guard. Install it before any other drag handler on the
    /// target so it runs first.
    pub fn install(target: &EventTarget) -> Self {
        let listeners = DragEventKind::ALL
            .iter()
            .map(|kind| {
                // Must be non-passive, or preventDefault is ignored.
                EventListener::new_with_options(
                    target,
                    kind.as_str(),
                    EventListenerOptions::enable_prevent_default(),
                    |event| suppress(&DomEvent(event)),
                )
            })
            .collect();
        tracing::debug!("drop zone guard installed");
        Self { listeners }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Leak the listeners so they outlive this value.
    pub fn forget(self) {
        for listener in self.listeners {
            listener.forget();
        }
    }
}
