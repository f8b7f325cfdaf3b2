//! WASM bindings for draftpad.
//!
//! The admin page loads this module and calls the `mount*` functions once
//! its markup is in place. Each takes an optional config object; omitted
//! fields fall back to the defaults matching the stock admin templates.
//!
//! ```js
//! import init, { mountAdmin } from "./draftpad_js.js";
//! await init();
//! mountAdmin({ publishDate: { isCreateOp: true } });
//! ```

mod page;

pub use page::*;

use wasm_bindgen::prelude::*;

/// Initialize panic hook and console logging.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    // A host may already have installed a subscriber.
    let _ = tracing_wasm::try_set_as_global_default();
}
