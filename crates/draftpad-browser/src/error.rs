//! Errors raised while wiring the page.

use miette::Diagnostic;
use wasm_bindgen::{JsCast, JsValue};

/// DOM lookup or setup failure.
#[derive(thiserror::Error, Debug, Diagnostic)]
pub enum DomError {
    #[error("no global window")]
    #[diagnostic(code(draftpad::dom::window))]
    NoWindow,

    #[error("window has no document")]
    #[diagnostic(code(draftpad::dom::document))]
    NoDocument,

    #[error("no element matches `{0}`")]
    #[diagnostic(
        code(draftpad::dom::missing),
        help("check the selector or element id in the draftpad config")
    )]
    MissingElement(String),

    #[error("`{0}` is not the expected element type")]
    #[diagnostic(code(draftpad::dom::element_type))]
    WrongElement(String),

    #[error(transparent)]
    #[diagnostic_source]
    Config(#[from] draftpad_core::ConfigError),

    #[error("javascript error: {0}")]
    #[diagnostic(code(draftpad::dom::js))]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::Js(js_error_message(&value))
    }
}

/// Best-effort readable text for a thrown JS value.
pub fn js_error_message(value: &JsValue) -> String {
    if let Some(s) = value.as_string() {
        return s;
    }
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    format!("{value:?}")
}
