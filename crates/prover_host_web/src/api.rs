//! Browser prover API service backed by the fetch bridge.

use prover_host::{
    DirectoryId, DirectoryListing, FileDocument, FileId, NewDirectoryRequest, NewFileRequest,
    ProverApiFuture, ProverApiService,
};

#[derive(Debug, Clone, Copy, Default)]
/// Browser prover API adapter speaking the backend HTTP contract over fetch.
pub struct WebProverApiService;

impl ProverApiService for WebProverApiService {
    fn list_directory<'a>(
        &'a self,
        scope: Option<DirectoryId>,
    ) -> ProverApiFuture<'a, Result<DirectoryListing, String>> {
        Box::pin(async move { crate::bridge::fetch_listing(scope).await })
    }

    fn file_content<'a>(
        &'a self,
        file: FileId,
    ) -> ProverApiFuture<'a, Result<FileDocument, String>> {
        Box::pin(async move { crate::bridge::fetch_file_content(file).await })
    }

    fn create_directory<'a>(
        &'a self,
        request: &'a NewDirectoryRequest,
    ) -> ProverApiFuture<'a, Result<(), String>> {
        Box::pin(async move { crate::bridge::post_create_directory(request).await })
    }

    fn create_file<'a>(
        &'a self,
        request: &'a NewFileRequest,
    ) -> ProverApiFuture<'a, Result<(), String>> {
        Box::pin(async move { crate::bridge::post_create_file(request).await })
    }

    fn delete_directory<'a>(
        &'a self,
        directory: DirectoryId,
    ) -> ProverApiFuture<'a, Result<(), String>> {
        Box::pin(async move { crate::bridge::post_delete_directory(directory).await })
    }

    fn delete_file<'a>(&'a self, file: FileId) -> ProverApiFuture<'a, Result<(), String>> {
        Box::pin(async move { crate::bridge::post_delete_file(file).await })
    }

    fn prove_file<'a>(&'a self, file: FileId) -> ProverApiFuture<'a, Result<(), String>> {
        Box::pin(async move { crate::bridge::post_prove_file(file).await })
    }
}
