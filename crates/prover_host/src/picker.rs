//! Upload-picker contract for choosing the source file to submit.

use std::{future::Future, pin::Pin};

use crate::types::FileUpload;

/// Object-safe boxed future used by [`UploadPickerService`].
pub type UploadPickerFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service that lets the user pick a source file for upload.
pub trait UploadPickerService {
    /// Opens the picker and resolves with the chosen file's name and text.
    fn pick_source_file<'a>(&'a self) -> UploadPickerFuture<'a, Result<FileUpload, String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op picker for unsupported targets.
pub struct NoopUploadPickerService;

impl UploadPickerService for NoopUploadPickerService {
    fn pick_source_file<'a>(&'a self) -> UploadPickerFuture<'a, Result<FileUpload, String>> {
        Box::pin(async { Err("upload picker unavailable".to_string()) })
    }
}

#[derive(Debug, Clone, Default)]
/// Scripted picker for native tests.
pub struct MemoryUploadPickerService {
    upload: Option<FileUpload>,
}

impl MemoryUploadPickerService {
    /// Creates a picker that always resolves with `upload`.
    pub fn with_upload(upload: FileUpload) -> Self {
        Self {
            upload: Some(upload),
        }
    }
}

impl UploadPickerService for MemoryUploadPickerService {
    fn pick_source_file<'a>(&'a self) -> UploadPickerFuture<'a, Result<FileUpload, String>> {
        Box::pin(async move {
            self.upload
                .clone()
                .ok_or_else(|| "no file selected".to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn scripted_picker_resolves_with_its_upload() {
        let picker = MemoryUploadPickerService::with_upload(FileUpload {
            file_name: "sort.c".to_string(),
            text: "int main(void) {}".to_string(),
        });
        let upload = block_on(picker.pick_source_file()).expect("upload");
        assert_eq!(upload.file_name, "sort.c");

        let empty = MemoryUploadPickerService::default();
        assert!(block_on(empty.pick_source_file()).is_err());
    }
}
