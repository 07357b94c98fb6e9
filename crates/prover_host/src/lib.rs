//! Typed host-domain contracts shared by the workbench runtime and browser adapters.
//!
//! This crate is the API-first boundary for the prover backend and the browser
//! environment. It exposes the wire-level data model, the backend service
//! trait, dialog and upload-picker contracts, and in-memory adapters used by
//! native tests. Concrete browser adapters live in `prover_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod dialogs;
pub mod host;
pub mod memory;
pub mod picker;
pub mod service;
pub mod types;

pub use dialogs::{DialogEvent, DialogService, MemoryDialogService, NoopDialogService};
pub use host::{HostServices, HostStrategy};
pub use memory::MemoryProverApi;
pub use picker::{
    MemoryUploadPickerService, NoopUploadPickerService, UploadPickerFuture, UploadPickerService,
};
pub use service::{NoopProverApiService, ProverApiFuture, ProverApiService};
pub use types::{
    DirectoryEntry, DirectoryId, DirectoryListing, FileDocument, FileEntry, FileId, FileUpload,
    NewDirectoryRequest, NewFileRequest, Section, SectionStatus, SectionTone,
};
