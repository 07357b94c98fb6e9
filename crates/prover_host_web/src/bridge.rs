//! HTTP bridge for the prover backend endpoints.
//!
//! Domain functions here parse and shape payloads; raw transport lives in
//! `interop`, which routes to a `wasm32` fetch implementation or a non-wasm
//! stub. Backend error responses pass through as their raw text.

mod interop;

use prover_host::{
    DirectoryId, DirectoryListing, FileDocument, FileId, NewDirectoryRequest, NewFileRequest,
};

use crate::endpoints;

pub(crate) async fn fetch_listing(
    scope: Option<DirectoryId>,
) -> Result<DirectoryListing, String> {
    let text = interop::get_text(&endpoints::listing_url(scope)).await?;
    serde_json::from_str(&text).map_err(|err| format!("malformed listing payload: {err}"))
}

pub(crate) async fn fetch_file_content(file: FileId) -> Result<FileDocument, String> {
    let text = interop::get_text(&endpoints::file_content_url(file)).await?;
    serde_json::from_str(&text).map_err(|err| format!("malformed file payload: {err}"))
}

pub(crate) async fn post_create_directory(request: &NewDirectoryRequest) -> Result<(), String> {
    interop::post_form(
        endpoints::ADD_DIRECTORY_URL,
        &endpoints::directory_form_body(request),
    )
    .await
    .map(|_| ())
}

pub(crate) async fn post_create_file(request: &NewFileRequest) -> Result<(), String> {
    interop::post_new_file(endpoints::ADD_FILE_URL, request)
        .await
        .map(|_| ())
}

pub(crate) async fn post_delete_directory(directory: DirectoryId) -> Result<(), String> {
    interop::post_empty(&endpoints::delete_directory_url(directory))
        .await
        .map(|_| ())
}

pub(crate) async fn post_delete_file(file: FileId) -> Result<(), String> {
    interop::post_empty(&endpoints::delete_file_url(file))
        .await
        .map(|_| ())
}

pub(crate) async fn post_prove_file(file: FileId) -> Result<(), String> {
    interop::post_empty(&endpoints::prove_url(file))
        .await
        .map(|_| ())
}
