//! Local thumbnail derivation via `FileReader`.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{File, FileReader, ProgressEvent};

use crate::types::{AppError, AppResult};

/// Read `file` into a base64 data URL, invoking `on_done` once finished.
///
/// The read is fire-and-forget: this returns as soon as the read has
/// started, and `on_done` runs later on the event loop. `on_done` receives
/// `None` when the reader finishes without a usable string result.
pub fn read_as_data_url(
    file: &File,
    on_done: impl FnOnce(Option<String>) + 'static,
) -> AppResult<()> {
    let reader = FileReader::new()
        .map_err(|e| AppError::Preview(format!("Failed to create FileReader: {:?}", e)))?;

    let state = reader.clone();
    let onloadend = Closure::once(move |_: ProgressEvent| {
        let data_url = state.result().ok().and_then(|value| value.as_string());
        on_done(data_url);
    });
    reader.set_onloadend(Some(onloadend.as_ref().unchecked_ref()));
    // The closure must outlive this function; the browser keeps the
    // reference through the reader's event handler slot.
    onloadend.forget();

    reader
        .read_as_data_url(file)
        .map_err(|e| AppError::Preview(format!("Failed to start preview read: {:?}", e)))
}
