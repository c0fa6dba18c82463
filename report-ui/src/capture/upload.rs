use report_core::item::EncodedImage;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{File, FileReader};

/// Reads a user-selected image file into the same data-URL form the
/// camera produces. `on_loaded` fires once when the read completes.
pub fn read_image(file: File, on_loaded: impl FnOnce(EncodedImage) + 'static) -> Result<(), String> {
    let reader = FileReader::new().map_err(|e| format!("file reader unavailable: {e:?}"))?;

    let reader_in_cb = reader.clone();
    let on_load = Closure::once_into_js(move || {
        let Ok(value) = reader_in_cb.result() else {
            return;
        };
        if let Some(url) = value.as_string() {
            on_loaded(EncodedImage::new(url));
        }
    });
    reader.set_onload(Some(on_load.unchecked_ref()));

    reader
        .read_as_data_url(&file)
        .map_err(|e| format!("file read failed: {e:?}"))
}
