//! Browser (`wasm32`) implementations of [`prover_host`] service contracts.
//!
//! This crate is the concrete browser-side wiring layer for the prover
//! backend: fetch-based API transport with CSRF echoing, blocking dialogs,
//! and the upload file picker. Transport glue lives under `bridge/` with a
//! `wasm32` implementation and a non-wasm stub.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod adapters;
pub mod api;
mod bridge;
pub mod dialogs;
pub mod endpoints;
pub mod picker;

pub use adapters::{
    build_host_services, dialog_service, host_strategy_name, prover_api_service,
    upload_picker_service,
};
pub use api::WebProverApiService;
pub use dialogs::WebDialogService;
pub use picker::WebUploadPickerService;
