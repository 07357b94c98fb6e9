//! Shared transport interop for the backend bridge.
//!
//! Routes calls to target-specific implementations while preserving a uniform
//! API for the bridge domain functions.

use prover_host::NewFileRequest;

#[cfg(not(target_arch = "wasm32"))]
mod non_wasm;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
use non_wasm as imp;
#[cfg(target_arch = "wasm32")]
use wasm as imp;

pub async fn get_text(url: &str) -> Result<String, String> {
    imp::get_text(url).await
}

pub async fn post_form(url: &str, body: &str) -> Result<String, String> {
    imp::post_form(url, body).await
}

pub async fn post_new_file(url: &str, request: &NewFileRequest) -> Result<String, String> {
    imp::post_new_file(url, request).await
}

pub async fn post_empty(url: &str) -> Result<String, String> {
    imp::post_empty(url).await
}
