//! CSRF token read from the page's hidden form field.

use draftpad_core::{CsrfSource, find_csrf_token};
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

/// Scans the document's `input` elements for the token on every call.
#[derive(Clone, Copy, Debug, Default)]
pub struct DomCsrf;

impl CsrfSource for DomCsrf {
    fn csrf_token(&self) -> String {
        read_csrf_token()
    }
}

/// Current token value, or an empty string if the page has none.
pub fn read_csrf_token() -> String {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return String::new();
    };
    let Ok(node_list) = document.query_selector_all("input") else {
        return String::new();
    };

    let inputs = (0..node_list.length())
        .filter_map(|i| node_list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlInputElement>().ok())
        .map(|input| (input.name(), input.value()));
    find_csrf_token(inputs)
}
