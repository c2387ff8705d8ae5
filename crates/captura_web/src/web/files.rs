use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Single-file drop target: only item 0 of the drop is considered, any
/// extra files in the same gesture are ignored.
pub(super) fn first_dropped_file(ev: &web_sys::DragEvent) -> Option<web_sys::File> {
    ev.data_transfer()?.files()?.item(0)
}

pub(super) fn first_selected_file(input: &web_sys::HtmlInputElement) -> Option<web_sys::File> {
    input.files()?.item(0)
}

/// Decode a file into a `data:` URL via FileReader.
///
/// The browser offers no way to abort a read in flight; staleness is
/// handled by the session's decode ticket, not here.
pub(super) async fn read_file_data_url(file: web_sys::File) -> Result<String, String> {
    let promise = file_reader_data_url_promise(&file)?;
    let v = wasm_bindgen_futures::JsFuture::from(promise)
        .await
        .map_err(|_| "file: read failed".to_string())?;

    v.as_string()
        .ok_or_else(|| "file: expected a data URL string".to_string())
}

/// Wrap a FileReader in a promise. Handlers are attached before the read
/// starts so no completion can slip past them.
fn file_reader_data_url_promise(file: &web_sys::File) -> Result<js_sys::Promise, String> {
    let reader =
        web_sys::FileReader::new().map_err(|_| "file: FileReader::new failed".to_string())?;

    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        let reject_load = reject.clone();
        let reader_done = reader.clone();
        let onload = Closure::wrap(Box::new(move |_ev: web_sys::ProgressEvent| {
            match reader_done.result() {
                Ok(v) if !v.is_null() && !v.is_undefined() => {
                    let _ = resolve.call1(&JsValue::UNDEFINED, &v);
                }
                _ => {
                    let _ = reject_load.call1(
                        &JsValue::UNDEFINED,
                        &JsValue::from_str("file: missing result"),
                    );
                }
            }
        }) as Box<dyn FnMut(_)>);
        reader.set_onload(Some(onload.as_ref().unchecked_ref()));
        onload.forget();

        let onerror = Closure::wrap(Box::new(move |_ev: web_sys::ProgressEvent| {
            let _ = reject.call1(&JsValue::UNDEFINED, &JsValue::from_str("file: read error"));
        }) as Box<dyn FnMut(_)>);
        reader.set_onerror(Some(onerror.as_ref().unchecked_ref()));
        onerror.forget();
    });

    reader
        .read_as_data_url(file)
        .map_err(|_| "file: read_as_data_url failed".to_string())?;

    Ok(promise)
}
