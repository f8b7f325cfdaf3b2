//! Status element, toggle element and alert notifications.

use draftpad_core::{Notifier, StatusPresenter, UploadConfig};
use web_sys::{Document, HtmlElement};

use crate::dom::element_by_id;
use crate::error::DomError;

/// Reflects upload state into the page's status and toggle elements.
#[derive(Clone, Debug)]
pub struct DomStatus {
    status: HtmlElement,
    toggle: Option<HtmlElement>,
    busy_message: String,
}

impl DomStatus {
    /// Look up the status element (required) and toggle element (optional).
    pub fn from_config(document: &Document, config: &UploadConfig) -> Result<Self, DomError> {
        let status: HtmlElement = element_by_id(document, &config.status_id)?;
        let toggle = element_by_id::<HtmlElement>(document, &config.toggle_id).ok();
        if toggle.is_none() {
            tracing::debug!(id = %config.toggle_id, "no toggle element on page");
        }
        let this = Self {
            status,
            toggle,
            busy_message: config.busy_message.clone(),
        };
        this.set_color(&config.status_color);
        Ok(this)
    }

    fn set_color(&self, color: &str) {
        if let Err(e) = self.status.style().set_property("color", color) {
            tracing::warn!("failed to style status element: {:?}", e);
        }
    }

    /// Show the toggle element, marking drag-and-drop as available.
    pub fn reveal(&self) {
        if let Some(toggle) = &self.toggle {
            if let Err(e) = toggle.style().set_property("display", "inline") {
                tracing::warn!("failed to show toggle element: {:?}", e);
            }
        }
    }
}

impl StatusPresenter for DomStatus {
    fn show_busy(&self) {
        self.reveal();
        self.status.set_inner_text(&self.busy_message);
    }

    fn show_idle(&self) {
        self.status.set_inner_text("");
    }
}

/// `window.alert` notifier.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlertNotifier;

impl Notifier for AlertNotifier {
    fn notify(&self, message: &str) {
        let Some(window) = web_sys::window() else {
            tracing::warn!(message, "no window to alert on");
            return;
        };
        if let Err(e) = window.alert_with_message(message) {
            tracing::warn!("alert failed: {:?}", e);
        }
    }
}
