//! Prover backend service contract and no-op adapter.

use std::{future::Future, pin::Pin};

use crate::types::{
    DirectoryId, DirectoryListing, FileDocument, FileId, NewDirectoryRequest, NewFileRequest,
};

/// Object-safe boxed future used by [`ProverApiService`] async methods.
pub type ProverApiFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service for the prover backend HTTP API.
///
/// Errors carry the raw server response text; callers surface write failures
/// verbatim and only log read failures.
pub trait ProverApiService {
    /// Lists the contents of a directory scope; `None` targets the root.
    fn list_directory<'a>(
        &'a self,
        scope: Option<DirectoryId>,
    ) -> ProverApiFuture<'a, Result<DirectoryListing, String>>;

    /// Fetches the full document payload for a file.
    fn file_content<'a>(
        &'a self,
        file: FileId,
    ) -> ProverApiFuture<'a, Result<FileDocument, String>>;

    /// Creates a directory under the requested parent scope.
    fn create_directory<'a>(
        &'a self,
        request: &'a NewDirectoryRequest,
    ) -> ProverApiFuture<'a, Result<(), String>>;

    /// Creates a file from an uploaded source under the requested parent scope.
    fn create_file<'a>(
        &'a self,
        request: &'a NewFileRequest,
    ) -> ProverApiFuture<'a, Result<(), String>>;

    /// Deletes a directory and, transitively, everything below it.
    fn delete_directory<'a>(
        &'a self,
        directory: DirectoryId,
    ) -> ProverApiFuture<'a, Result<(), String>>;

    /// Deletes a single file.
    fn delete_file<'a>(&'a self, file: FileId) -> ProverApiFuture<'a, Result<(), String>>;

    /// Runs the server-side proving action for a file and persists its
    /// sections and result for a later [`ProverApiService::file_content`].
    fn prove_file<'a>(&'a self, file: FileId) -> ProverApiFuture<'a, Result<(), String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op prover API adapter for unsupported targets and baseline tests.
pub struct NoopProverApiService;

impl NoopProverApiService {
    fn unavailable(op: &str) -> String {
        format!("prover backend unavailable: {op}")
    }
}

impl ProverApiService for NoopProverApiService {
    fn list_directory<'a>(
        &'a self,
        _scope: Option<DirectoryId>,
    ) -> ProverApiFuture<'a, Result<DirectoryListing, String>> {
        Box::pin(async { Err(Self::unavailable("list_directory")) })
    }

    fn file_content<'a>(
        &'a self,
        _file: FileId,
    ) -> ProverApiFuture<'a, Result<FileDocument, String>> {
        Box::pin(async { Err(Self::unavailable("file_content")) })
    }

    fn create_directory<'a>(
        &'a self,
        _request: &'a NewDirectoryRequest,
    ) -> ProverApiFuture<'a, Result<(), String>> {
        Box::pin(async { Err(Self::unavailable("create_directory")) })
    }

    fn create_file<'a>(
        &'a self,
        _request: &'a NewFileRequest,
    ) -> ProverApiFuture<'a, Result<(), String>> {
        Box::pin(async { Err(Self::unavailable("create_file")) })
    }

    fn delete_directory<'a>(
        &'a self,
        _directory: DirectoryId,
    ) -> ProverApiFuture<'a, Result<(), String>> {
        Box::pin(async { Err(Self::unavailable("delete_directory")) })
    }

    fn delete_file<'a>(&'a self, _file: FileId) -> ProverApiFuture<'a, Result<(), String>> {
        Box::pin(async { Err(Self::unavailable("delete_file")) })
    }

    fn prove_file<'a>(&'a self, _file: FileId) -> ProverApiFuture<'a, Result<(), String>> {
        Box::pin(async { Err(Self::unavailable("prove_file")) })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn noop_prover_api_reports_unavailable() {
        let api = NoopProverApiService;
        let api_obj: &dyn ProverApiService = &api;

        let err = block_on(api_obj.list_directory(None)).expect_err("list should fail");
        assert!(err.contains("list_directory"));
        let err = block_on(api_obj.prove_file(FileId(3))).expect_err("prove should fail");
        assert!(err.contains("prove_file"));
    }
}
