//! Small DOM lookup helpers.

use url::Url;
use wasm_bindgen::JsCast;

use crate::error::DomError;

pub fn window() -> Result<web_sys::Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

pub fn document() -> Result<web_sys::Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}

/// Find an element by id and cast it to `T`.
pub fn element_by_id<T: JsCast>(document: &web_sys::Document, id: &str) -> Result<T, DomError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| DomError::MissingElement(format!("#{id}")))?
        .dyn_into::<T>()
        .map_err(|_| DomError::WrongElement(format!("#{id}")))
}

/// First element matching `selector`, cast to `T`.
pub fn query<T: JsCast>(document: &web_sys::Document, selector: &str) -> Result<T, DomError> {
    document
        .query_selector(selector)?
        .ok_or_else(|| DomError::MissingElement(selector.to_string()))?
        .dyn_into::<T>()
        .map_err(|_| DomError::WrongElement(selector.to_string()))
}

/// The page's own url, used to resolve relative endpoints.
pub fn page_url() -> Result<Url, DomError> {
    let href = window()?.location().href()?;
    Url::parse(&href).map_err(|source| {
        DomError::Config(draftpad_core::ConfigError::InvalidUrl {
            field: "location.href",
            source,
        })
    })
}
