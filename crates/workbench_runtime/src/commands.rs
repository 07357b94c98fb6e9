//! Awaited mutation flows: create, delete, and prove.
//!
//! Each command confirms with the user where required, awaits the backend
//! call, surfaces raw server error text through the dialog service on
//! failure, and dispatches the completion action that makes the reducer
//! refresh the affected panel. Forms await the returned flag to decide
//! whether to reset their fields.

use leptos::{logging, SignalGetUntracked};
use prover_host::{DirectoryId, FileId, FileUpload, NewDirectoryRequest, NewFileRequest};

use crate::{reducer::WorkbenchAction, runtime_context::WorkbenchRuntimeContext};

/// Creates a directory under the current scope.
///
/// Returns `true` on success so the create form can reset its fields; on
/// failure the raw server error text is alerted and the fields are kept.
pub async fn create_directory(
    runtime: WorkbenchRuntimeContext,
    name: String,
    description: String,
) -> bool {
    let parent = runtime.state.get_untracked().current_directory();
    let request = NewDirectoryRequest {
        name,
        description,
        parent,
    };
    let host = runtime.host.get_value();
    match host.services().api.create_directory(&request).await {
        Ok(()) => {
            runtime.dispatch_action(WorkbenchAction::DirectoryCreated);
            true
        }
        Err(err) => {
            host.services().dialogs.alert(&err);
            false
        }
    }
}

/// Opens the upload picker and returns the chosen source file.
///
/// Cancellation and read failures are logged, not alerted; the form simply
/// keeps its previous selection.
pub async fn choose_upload(runtime: WorkbenchRuntimeContext) -> Option<FileUpload> {
    let host = runtime.host.get_value();
    match host.services().uploads.pick_source_file().await {
        Ok(upload) => Some(upload),
        Err(err) => {
            logging::warn!("upload selection failed: {err}");
            None
        }
    }
}

/// Creates a file under the current scope from a previously picked upload.
///
/// Submitting without a picked upload surfaces the same message the backend
/// answers with, instead of sending a request that cannot carry a file part.
pub async fn create_file(
    runtime: WorkbenchRuntimeContext,
    name: String,
    description: String,
    upload: Option<FileUpload>,
) -> bool {
    let host = runtime.host.get_value();
    let Some(upload) = upload else {
        host.services().dialogs.alert("No file was submitted.");
        return false;
    };
    let parent = runtime.state.get_untracked().current_directory();
    let request = NewFileRequest {
        name,
        description,
        parent,
        upload,
    };
    match host.services().api.create_file(&request).await {
        Ok(()) => {
            runtime.dispatch_action(WorkbenchAction::FileCreated);
            true
        }
        Err(err) => {
            host.services().dialogs.alert(&err);
            false
        }
    }
}

/// Deletes a directory and everything under it after interactive confirmation.
pub async fn delete_directory(
    runtime: WorkbenchRuntimeContext,
    directory: DirectoryId,
    name: &str,
) {
    let host = runtime.host.get_value();
    let prompt = format!("Delete directory \"{name}\" and everything inside it?");
    if !host.services().dialogs.confirm(&prompt) {
        return;
    }
    match host.services().api.delete_directory(directory).await {
        Ok(()) => runtime.dispatch_action(WorkbenchAction::DirectoryDeleted { directory }),
        Err(err) => host.services().dialogs.alert(&err),
    }
}

/// Deletes a file after interactive confirmation.
pub async fn delete_file(runtime: WorkbenchRuntimeContext, file: FileId, name: &str) {
    let host = runtime.host.get_value();
    let prompt = format!("Delete file \"{name}\"?");
    if !host.services().dialogs.confirm(&prompt) {
        return;
    }
    match host.services().api.delete_file(file).await {
        Ok(()) => runtime.dispatch_action(WorkbenchAction::FileDeleted { file }),
        Err(err) => host.services().dialogs.alert(&err),
    }
}

/// Runs the prover over the open file and reloads its sections on completion.
///
/// Fire-and-forget from the user's perspective: no progress indication, the
/// single awaited response is the whole run.
pub async fn prove_file(runtime: WorkbenchRuntimeContext, file: FileId) {
    let host = runtime.host.get_value();
    match host.services().api.prove_file(file).await {
        Ok(()) => {
            host.services().dialogs.notify("Proving finished.");
            runtime.dispatch_action(WorkbenchAction::FileProved { file });
        }
        Err(err) => host.services().dialogs.alert(&err),
    }
}
