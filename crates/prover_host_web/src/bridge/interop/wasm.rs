use prover_host::NewFileRequest;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::endpoints::{self, CSRF_HEADER};

pub async fn get_text(url: &str) -> Result<String, String> {
    let init = web_sys::RequestInit::new();
    init.set_method("GET");
    run_fetch(url, &init).await
}

pub async fn post_form(url: &str, body: &str) -> Result<String, String> {
    let init = web_sys::RequestInit::new();
    init.set_method("POST");
    init.set_body(&JsValue::from_str(body));
    init.set_headers(
        mutation_headers(Some("application/x-www-form-urlencoded"))?.as_ref(),
    );
    run_fetch(url, &init).await
}

pub async fn post_new_file(url: &str, request: &NewFileRequest) -> Result<String, String> {
    let form = web_sys::FormData::new()
        .map_err(|err| format!("failed to build form data: {err:?}"))?;
    form.append_with_str("name", &request.name)
        .and_then(|_| form.append_with_str("description", &request.description))
        .and_then(|_| {
            form.append_with_str("parent_dir", &endpoints::parent_field(request.parent))
        })
        .map_err(|err| format!("failed to append form field: {err:?}"))?;

    let parts = js_sys::Array::new();
    parts.push(&JsValue::from_str(&request.upload.text));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("text/plain");
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)
        .map_err(|err| format!("failed to build upload blob: {err:?}"))?;
    form.append_with_blob_and_filename("file", &blob, &request.upload.file_name)
        .map_err(|err| format!("failed to append upload: {err:?}"))?;

    // Content type stays unset so the browser supplies the multipart boundary.
    let init = web_sys::RequestInit::new();
    init.set_method("POST");
    init.set_body(form.as_ref());
    init.set_headers(mutation_headers(None)?.as_ref());
    run_fetch(url, &init).await
}

pub async fn post_empty(url: &str) -> Result<String, String> {
    let init = web_sys::RequestInit::new();
    init.set_method("POST");
    init.set_headers(mutation_headers(None)?.as_ref());
    run_fetch(url, &init).await
}

fn window() -> Result<web_sys::Window, String> {
    web_sys::window().ok_or_else(|| "window unavailable".to_string())
}

fn mutation_headers(content_type: Option<&str>) -> Result<web_sys::Headers, String> {
    let headers =
        web_sys::Headers::new().map_err(|err| format!("failed to build headers: {err:?}"))?;
    if let Some(content_type) = content_type {
        headers
            .set("Content-Type", content_type)
            .map_err(|err| format!("failed to set content type: {err:?}"))?;
    }
    if let Some(token) = csrf_token() {
        headers
            .set(CSRF_HEADER, &token)
            .map_err(|err| format!("failed to set csrf header: {err:?}"))?;
    }
    Ok(headers)
}

fn csrf_token() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let cookies = document
        .dyn_into::<web_sys::HtmlDocument>()
        .ok()?
        .cookie()
        .ok()?;
    endpoints::csrf_token_from_cookies(&cookies)
}

async fn run_fetch(url: &str, init: &web_sys::RequestInit) -> Result<String, String> {
    let request = web_sys::Request::new_with_str_and_init(url, init)
        .map_err(|err| format!("failed to build request: {err:?}"))?;
    let response = JsFuture::from(window()?.fetch_with_request(&request))
        .await
        .map_err(|err| format!("request to {url} failed: {err:?}"))?
        .dyn_into::<web_sys::Response>()
        .map_err(|_| "fetch resolved with a non-response value".to_string())?;

    let text_promise = response
        .text()
        .map_err(|err| format!("failed to read response body: {err:?}"))?;
    let text = JsFuture::from(text_promise)
        .await
        .map_err(|err| format!("failed to read response body: {err:?}"))?
        .as_string()
        .unwrap_or_default();

    if response.ok() {
        Ok(text)
    } else if text.is_empty() {
        Err(format!(
            "request to {url} failed with status {}",
            response.status()
        ))
    } else {
        // Raw server error text is surfaced verbatim to the caller.
        Err(text)
    }
}
