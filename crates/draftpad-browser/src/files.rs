//! Extracting files from a drop event.

use draftpad_core::{DroppedFile, UploadError};
use js_sys::Uint8Array;
use wasm_bindgen_futures::JsFuture;
use web_sys::{DragEvent, File};

use crate::error::js_error_message;

/// File handles carried by a drop, without reading their contents.
pub fn dropped_files(event: &DragEvent) -> Vec<File> {
    let Some(files) = event.data_transfer().and_then(|dt| dt.files()) else {
        return Vec::new();
    };
    (0..files.length()).filter_map(|i| files.get(i)).collect()
}

/// Read a dropped file's contents.
pub async fn read_file(file: File) -> Result<DroppedFile, UploadError> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| UploadError::Read(js_error_message(&e)))?;
    let data = Uint8Array::new(&buffer).to_vec();

    let mime_type = file.type_();
    let dropped = DroppedFile::new(file.name(), data);
    Ok(if mime_type.is_empty() {
        dropped
    } else {
        dropped.with_mime_type(mime_type)
    })
}
