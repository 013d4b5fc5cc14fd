use js_sys::{Array, Reflect, Uint8Array};
use platform_io::{IoCause, OpenOutcome, OpenResponse, SaveOutcome, SaveResponse};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FileSystemFileHandle, FileSystemWritableFileStream};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = ["window", "__TAURI__", "core"])]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = window, js_name = showOpenFilePicker)]
    async fn show_open_file_picker() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = window, js_name = showSaveFilePicker)]
    async fn show_save_file_picker() -> Result<JsValue, JsValue>;
}

#[derive(Serialize)]
struct SaveArgs<'a> {
    data: &'a [u8],
}

fn js_error_message(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

pub(crate) fn host_transport_present() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    Reflect::get(&window, &JsValue::from_str("__TAURI__"))
        .map(|value| !value.is_undefined() && !value.is_null())
        .unwrap_or(false)
}

pub(crate) async fn host_open() -> OpenOutcome {
    let raw = match invoke("io_open", JsValue::UNDEFINED).await {
        Ok(value) => value,
        Err(err) => {
            return OpenOutcome::Failed(IoCause::transport(format!(
                "io_open invoke rejected: {}",
                js_error_message(&err)
            )))
        }
    };
    match serde_wasm_bindgen::from_value::<OpenResponse>(raw) {
        Ok(response) => response.into(),
        Err(err) => OpenOutcome::Failed(IoCause::transport(format!(
            "malformed io_open response: {err}"
        ))),
    }
}

pub(crate) async fn host_save(data: &[u8]) -> SaveOutcome {
    let args = match serde_wasm_bindgen::to_value(&SaveArgs { data }) {
        Ok(args) => args,
        Err(err) => {
            return SaveOutcome::Failed(IoCause::transport(format!(
                "io_save arguments did not serialize: {err}"
            )))
        }
    };
    let raw = match invoke("io_save", args).await {
        Ok(value) => value,
        Err(err) => {
            return SaveOutcome::Failed(IoCause::transport(format!(
                "io_save invoke rejected: {}",
                js_error_message(&err)
            )))
        }
    };
    match serde_wasm_bindgen::from_value::<SaveResponse>(raw) {
        Ok(response) => response.into(),
        Err(err) => SaveOutcome::Failed(IoCause::transport(format!(
            "malformed io_save response: {err}"
        ))),
    }
}

pub(crate) async fn picker_open() -> OpenOutcome {
    // The picker rejects on dismissal; only failures after a handle exists count as errors.
    let handles = match show_open_file_picker().await {
        Ok(value) => value,
        Err(_) => return OpenOutcome::Canceled,
    };
    let first = Array::from(&handles).get(0);
    if first.is_undefined() || first.is_null() {
        return OpenOutcome::Empty;
    }
    let handle: FileSystemFileHandle = match first.dyn_into() {
        Ok(handle) => handle,
        Err(_) => return OpenOutcome::Empty,
    };
    match read_handle(&handle).await {
        Ok(bytes) => OpenOutcome::Loaded(bytes),
        Err(err) => OpenOutcome::Failed(IoCause::read(js_error_message(&err))),
    }
}

pub(crate) async fn picker_save(data: &[u8]) -> SaveOutcome {
    let handle = match show_save_file_picker().await {
        Ok(value) => value,
        Err(_) => return SaveOutcome::Canceled,
    };
    let handle: FileSystemFileHandle = match handle.dyn_into() {
        Ok(handle) => handle,
        Err(err) => return SaveOutcome::Failed(IoCause::write(js_error_message(&err))),
    };
    match write_handle(&handle, data).await {
        Ok(()) => SaveOutcome::Saved,
        Err(err) => SaveOutcome::Failed(IoCause::write(js_error_message(&err))),
    }
}

async fn read_handle(handle: &FileSystemFileHandle) -> Result<Vec<u8>, JsValue> {
    let file: File = JsFuture::from(handle.get_file()).await?.dyn_into()?;
    let buffer = JsFuture::from(file.array_buffer()).await?;
    Ok(Uint8Array::new(&buffer).to_vec())
}

async fn write_handle(handle: &FileSystemFileHandle, data: &[u8]) -> Result<(), JsValue> {
    let writable: FileSystemWritableFileStream =
        JsFuture::from(handle.create_writable()).await?.dyn_into()?;
    let array = Uint8Array::from(data);
    JsFuture::from(writable.write_with_buffer_source(&array)?).await?;
    JsFuture::from(writable.close()).await?;
    Ok(())
}
