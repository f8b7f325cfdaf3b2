//! Page entry points.

use draftpad_browser::dom::page_url;
use draftpad_browser::{
    Autosave, DomError, DraftpadConfig, HttpTransport, PublishDateShortcut, Uploader,
    read_csrf_token,
};
use wasm_bindgen::prelude::*;

fn to_js(err: DomError) -> JsError {
    JsError::new(&err.to_string())
}

/// Deserialize an optional, possibly partial, config object.
fn parse_config(value: JsValue) -> Result<DraftpadConfig, JsError> {
    if value.is_undefined() || value.is_null() {
        return Ok(DraftpadConfig::default());
    }
    let config: DraftpadConfig = serde_wasm_bindgen::from_value(value)
        .map_err(|e| JsError::new(&format!("Invalid draftpad config: {}", e)))?;
    config
        .validate()
        .map_err(|e| JsError::new(&e.to_string()))?;
    Ok(config)
}

fn transport(config: &DraftpadConfig) -> Result<HttpTransport, JsError> {
    let base = page_url().map_err(to_js)?;
    HttpTransport::from_config(config, Some(&base)).map_err(|e| JsError::new(&e.to_string()))
}

/// Enable drag-and-drop image upload on the body textarea.
#[wasm_bindgen(js_name = mountUploader)]
pub fn mount_uploader(config: JsValue) -> Result<(), JsError> {
    let config = parse_config(config)?;
    let uploader = Uploader::mount(&config.upload, transport(&config)?).map_err(to_js)?;
    uploader.forget();
    Ok(())
}

/// Save a snapshot of title and body once typing in the body pauses.
#[wasm_bindgen(js_name = mountAutosave)]
pub fn mount_autosave(config: JsValue) -> Result<(), JsError> {
    let config = parse_config(config)?;
    let autosave = Autosave::mount(&config.autosave, transport(&config)?).map_err(to_js)?;
    autosave.forget();
    Ok(())
}

/// Add the publication date shortcut. Returns whether a link was added.
#[wasm_bindgen(js_name = mountPublishDate)]
pub fn mount_publish_date(config: JsValue) -> Result<bool, JsError> {
    let config = parse_config(config)?;
    match PublishDateShortcut::mount(&config.publish_date).map_err(to_js)? {
        Some(shortcut) => {
            shortcut.forget();
            Ok(true)
        }
        None => Ok(false),
    }
}

/// Mount every admin page feature with one config.
///
/// Features whose markup is missing from the page are skipped with a
/// warning rather than failing the others.
#[wasm_bindgen(js_name = mountAdmin)]
pub fn mount_admin(config: JsValue) -> Result<(), JsError> {
    let config = parse_config(config)?;
    let transport = transport(&config)?;

    match PublishDateShortcut::mount(&config.publish_date) {
        Ok(shortcut) => shortcut.into_iter().for_each(PublishDateShortcut::forget),
        Err(e) => tracing::warn!("publish date shortcut not mounted: {}", e),
    }
    match Uploader::mount(&config.upload, transport.clone()) {
        Ok(uploader) => uploader.forget(),
        Err(e) => tracing::warn!("uploader not mounted: {}", e),
    }
    match Autosave::mount(&config.autosave, transport) {
        Ok(autosave) => autosave.forget(),
        Err(e) => tracing::warn!("autosave not mounted: {}", e),
    }
    Ok(())
}

/// The page's CSRF token, or an empty string.
#[wasm_bindgen(js_name = getCsrf)]
pub fn get_csrf() -> String {
    read_csrf_token()
}
