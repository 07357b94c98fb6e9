//! Hidden-input upload picker reading the chosen source file as text.

use prover_host::{FileUpload, UploadPickerFuture, UploadPickerService};

#[cfg(target_arch = "wasm32")]
use futures::channel::oneshot;
#[cfg(target_arch = "wasm32")]
use std::{cell::RefCell, rc::Rc};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen_futures::JsFuture;

#[derive(Debug, Clone, Copy, Default)]
/// Browser upload picker backed by a transient `<input type="file">`.
pub struct WebUploadPickerService;

impl UploadPickerService for WebUploadPickerService {
    fn pick_source_file<'a>(&'a self) -> UploadPickerFuture<'a, Result<FileUpload, String>> {
        Box::pin(async move { pick_source_file().await })
    }
}

#[cfg(not(target_arch = "wasm32"))]
async fn pick_source_file() -> Result<FileUpload, String> {
    Err("upload picking is only available when compiled for wasm32".to_string())
}

#[cfg(target_arch = "wasm32")]
async fn pick_source_file() -> Result<FileUpload, String> {
    let file = await_file_choice().await?;
    let name = file.name();

    // Blob.text() resolves with the file decoded as UTF-8, which is the only
    // encoding the backend accepts for source uploads.
    let text = JsFuture::from(file.text())
        .await
        .map_err(|err| format!("failed to read source file: {err:?}"))?
        .as_string()
        .ok_or_else(|| "source file did not decode as text".to_string())?;

    Ok(FileUpload {
        file_name: name,
        text,
    })
}

/// Creates a detached file input, clicks it, and resolves with the choice.
///
/// The input is removed again once the change event fires; a dismissed
/// chooser never fires it, so the sender side stays parked in the closure and
/// the receiver reports cancellation when the closure is dropped.
#[cfg(target_arch = "wasm32")]
async fn await_file_choice() -> Result<web_sys::File, String> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| "document unavailable".to_string())?;
    let input = document
        .create_element("input")
        .map_err(|err| format!("failed to create file input: {err:?}"))?
        .dyn_into::<web_sys::HtmlInputElement>()
        .map_err(|_| "failed to cast file input".to_string())?;
    input.set_type("file");
    input.set_hidden(true);
    if let Some(body) = document.body() {
        let _ = body.append_child(&input);
    }

    let (resolve, choice) = resolve_once::<Result<web_sys::File, String>>();
    let chooser = input.clone();
    let on_change = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(move |_| {
        resolve(
            chooser
                .files()
                .and_then(|files| files.get(0))
                .ok_or_else(|| "no source file selected".to_string()),
        );
    }));
    input.set_onchange(Some(on_change.as_ref().unchecked_ref()));
    input.click();

    let file = choice
        .await
        .map_err(|_| "file picker was cancelled".to_string())??;
    input.remove();
    on_change.forget();
    Ok(file)
}

/// One-shot resolver callable from a `FnMut` event closure.
///
/// Extra invocations after the first are ignored.
#[cfg(target_arch = "wasm32")]
fn resolve_once<T>() -> (impl Fn(T), oneshot::Receiver<T>) {
    let (tx, rx) = oneshot::channel::<T>();
    let slot = Rc::new(RefCell::new(Some(tx)));
    let resolve = move |value: T| {
        if let Some(tx) = slot.borrow_mut().take() {
            let _ = tx.send(value);
        }
    };
    (resolve, rx)
}
