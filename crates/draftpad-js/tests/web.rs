//! WASM browser tests for the page entry points.
//!
//! Run with: `wasm-pack test --headless --firefox` or `--chrome`

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

use draftpad_js::{get_csrf, mount_publish_date};
use web_sys::{HtmlElement, HtmlInputElement};

fn add<T: JsCast>(tag: &str) -> T {
    let doc = web_sys::window().unwrap().document().unwrap();
    let el = doc.create_element(tag).unwrap();
    doc.body().unwrap().append_child(&el).unwrap();
    el.unchecked_into()
}

#[wasm_bindgen_test]
fn test_publish_date_set_today() {
    let input: HtmlInputElement = add("input");
    input.set_name("published_at");
    let container: HtmlElement = add("span");
    container.set_id("set-today");

    assert!(mount_publish_date(JsValue::UNDEFINED).map_err(JsValue::from).unwrap());
    assert!(container.inner_text().contains("set to today"));

    container.click();
    let value = input.value();
    assert_eq!(value.len(), 10);
    assert_eq!(&value[4..5], "-");

    input.remove();
    container.remove();
}

#[wasm_bindgen_test]
fn test_get_csrf_without_token_is_empty() {
    assert_eq!(get_csrf(), "");
}
