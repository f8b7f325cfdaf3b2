//! Platform abstraction traits for UI side effects.
//!
//! These traits define the interface between the upload lifecycle and the
//! page it runs on (browser DOM, a native shell, or test fakes). The
//! controller only ever talks to the page through them.

/// Reflects upload state into UI affordances.
pub trait StatusPresenter {
    /// Show the "uploading" indication.
    fn show_busy(&self);

    /// Clear the status indication.
    fn show_idle(&self);
}

/// Blocking, alert-style user notification.
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// Source of the anti-forgery token sent with state-changing requests.
///
/// Read on every request, so a token rotated by the page is picked up.
pub trait CsrfSource {
    /// The current token. An empty string is a valid, if degenerate, token.
    fn csrf_token(&self) -> String;
}

/// A token known up front.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StaticCsrf(pub String);

impl CsrfSource for StaticCsrf {
    fn csrf_token(&self) -> String {
        self.0.clone()
    }
}

impl<T: StatusPresenter + ?Sized> StatusPresenter for &T {
    fn show_busy(&self) {
        (**self).show_busy()
    }

    fn show_idle(&self) {
        (**self).show_idle()
    }
}

impl<T: Notifier + ?Sized> Notifier for &T {
    fn notify(&self, message: &str) {
        (**self).notify(message)
    }
}

impl<T: CsrfSource + ?Sized> CsrfSource for &T {
    fn csrf_token(&self) -> String {
        (**self).csrf_token()
    }
}
