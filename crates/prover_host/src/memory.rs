//! In-memory prover backend used by native tests.

use std::{cell::RefCell, rc::Rc};

use crate::{
    service::{ProverApiFuture, ProverApiService},
    types::{
        DirectoryEntry, DirectoryId, DirectoryListing, FileDocument, FileEntry, FileId,
        NewDirectoryRequest, NewFileRequest, Section, SectionStatus,
    },
};

#[derive(Debug, Clone)]
struct MemoryDirectory {
    id: DirectoryId,
    name: String,
    parent: Option<DirectoryId>,
}

#[derive(Debug, Clone)]
struct MemoryFile {
    id: FileId,
    name: String,
    parent: Option<DirectoryId>,
    body: String,
    sections: Vec<Section>,
    result: String,
}

#[derive(Debug, Default)]
struct MemoryTree {
    next_directory_id: u64,
    next_file_id: u64,
    directories: Vec<MemoryDirectory>,
    files: Vec<MemoryFile>,
}

impl MemoryTree {
    fn delete_directory_recursive(&mut self, directory: DirectoryId) {
        let children: Vec<DirectoryId> = self
            .directories
            .iter()
            .filter(|dir| dir.parent == Some(directory))
            .map(|dir| dir.id)
            .collect();
        for child in children {
            self.delete_directory_recursive(child);
        }
        self.files.retain(|file| file.parent != Some(directory));
        self.directories.retain(|dir| dir.id != directory);
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory directory/file tree implementing [`ProverApiService`].
///
/// Mirrors the backend semantics the client depends on: parent-scoped
/// listings, recursive directory deletion, and a proving action that replaces
/// a file's sections and result for later `file_content` reads.
pub struct MemoryProverApi {
    inner: Rc<RefCell<MemoryTree>>,
}

impl MemoryProverApi {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a directory and returns its id.
    pub fn insert_directory(&self, name: &str, parent: Option<DirectoryId>) -> DirectoryId {
        let mut tree = self.inner.borrow_mut();
        tree.next_directory_id += 1;
        let id = DirectoryId(tree.next_directory_id);
        tree.directories.push(MemoryDirectory {
            id,
            name: name.to_string(),
            parent,
        });
        id
    }

    /// Seeds a file and returns its id.
    pub fn insert_file(&self, name: &str, parent: Option<DirectoryId>, body: &str) -> FileId {
        let mut tree = self.inner.borrow_mut();
        tree.next_file_id += 1;
        let id = FileId(tree.next_file_id);
        tree.files.push(MemoryFile {
            id,
            name: name.to_string(),
            parent,
            body: body.to_string(),
            sections: Vec::new(),
            result: String::new(),
        });
        id
    }
}

impl ProverApiService for MemoryProverApi {
    fn list_directory<'a>(
        &'a self,
        scope: Option<DirectoryId>,
    ) -> ProverApiFuture<'a, Result<DirectoryListing, String>> {
        Box::pin(async move {
            let tree = self.inner.borrow();
            Ok(DirectoryListing {
                directories: tree
                    .directories
                    .iter()
                    .filter(|dir| dir.parent == scope)
                    .map(|dir| DirectoryEntry {
                        id: dir.id,
                        name: dir.name.clone(),
                    })
                    .collect(),
                files: tree
                    .files
                    .iter()
                    .filter(|file| file.parent == scope)
                    .map(|file| FileEntry {
                        id: file.id,
                        name: file.name.clone(),
                    })
                    .collect(),
            })
        })
    }

    fn file_content<'a>(
        &'a self,
        file: FileId,
    ) -> ProverApiFuture<'a, Result<FileDocument, String>> {
        Box::pin(async move {
            let tree = self.inner.borrow();
            let found = tree
                .files
                .iter()
                .find(|candidate| candidate.id == file)
                .ok_or_else(|| format!("file not found: {}", file.0))?;
            Ok(FileDocument {
                name: found.name.clone(),
                body: found.body.clone(),
                sections: found.sections.clone(),
                result: found.result.clone(),
            })
        })
    }

    fn create_directory<'a>(
        &'a self,
        request: &'a NewDirectoryRequest,
    ) -> ProverApiFuture<'a, Result<(), String>> {
        Box::pin(async move {
            if request.name.trim().is_empty() {
                return Err("This field is required.".to_string());
            }
            self.insert_directory(&request.name, request.parent);
            Ok(())
        })
    }

    fn create_file<'a>(
        &'a self,
        request: &'a NewFileRequest,
    ) -> ProverApiFuture<'a, Result<(), String>> {
        Box::pin(async move {
            if request.name.trim().is_empty() {
                return Err("This field is required.".to_string());
            }
            if request.upload.file_name.is_empty() {
                return Err("No file was submitted.".to_string());
            }
            self.insert_file(&request.name, request.parent, &request.upload.text);
            Ok(())
        })
    }

    fn delete_directory<'a>(
        &'a self,
        directory: DirectoryId,
    ) -> ProverApiFuture<'a, Result<(), String>> {
        Box::pin(async move {
            let mut tree = self.inner.borrow_mut();
            if !tree.directories.iter().any(|dir| dir.id == directory) {
                return Err(format!("directory not found: {}", directory.0));
            }
            tree.delete_directory_recursive(directory);
            Ok(())
        })
    }

    fn delete_file<'a>(&'a self, file: FileId) -> ProverApiFuture<'a, Result<(), String>> {
        Box::pin(async move {
            let mut tree = self.inner.borrow_mut();
            let before = tree.files.len();
            tree.files.retain(|candidate| candidate.id != file);
            if tree.files.len() == before {
                return Err(format!("file not found: {}", file.0));
            }
            Ok(())
        })
    }

    fn prove_file<'a>(&'a self, file: FileId) -> ProverApiFuture<'a, Result<(), String>> {
        Box::pin(async move {
            let mut tree = self.inner.borrow_mut();
            let found = tree
                .files
                .iter_mut()
                .find(|candidate| candidate.id == file)
                .ok_or_else(|| format!("file not found: {}", file.0))?;
            found.sections = vec![Section {
                status: SectionStatus::Valid,
                category: "procedure".to_string(),
                body: format!("Goal {}\nProved by Alt-Ergo.", found.name),
            }];
            found.result = "Proved goals: 1 / 1".to_string();
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn listings_are_scoped_to_the_requested_parent() {
        let api = MemoryProverApi::new();
        let lemmas = api.insert_directory("lemmas", None);
        api.insert_directory("drafts", Some(lemmas));
        api.insert_file("sort.c", None, "int main(void) {}");
        api.insert_file("rev.c", Some(lemmas), "");

        let root = block_on(api.list_directory(None)).expect("root listing");
        assert_eq!(root.directories.len(), 1);
        assert_eq!(root.files.len(), 1);
        assert_eq!(root.files[0].name, "sort.c");

        let nested = block_on(api.list_directory(Some(lemmas))).expect("nested listing");
        assert_eq!(nested.directories[0].name, "drafts");
        assert_eq!(nested.files[0].name, "rev.c");
    }

    #[test]
    fn deleting_a_directory_removes_its_subtree() {
        let api = MemoryProverApi::new();
        let outer = api.insert_directory("outer", None);
        let inner = api.insert_directory("inner", Some(outer));
        api.insert_file("deep.c", Some(inner), "");
        let kept = api.insert_file("kept.c", None, "");

        block_on(api.delete_directory(outer)).expect("delete");

        let root = block_on(api.list_directory(None)).expect("root listing");
        assert!(root.directories.is_empty());
        assert_eq!(root.files.len(), 1);
        assert_eq!(root.files[0].id, kept);
        assert!(block_on(api.file_content(kept)).is_ok());
    }

    #[test]
    fn proving_replaces_sections_and_result() {
        let api = MemoryProverApi::new();
        let file = api.insert_file("sort.c", None, "int main(void) {}");

        let before = block_on(api.file_content(file)).expect("content");
        assert!(before.sections.is_empty());
        assert!(before.result.is_empty());

        block_on(api.prove_file(file)).expect("prove");

        let after = block_on(api.file_content(file)).expect("content");
        assert_eq!(after.sections.len(), 1);
        assert_eq!(after.sections[0].status, SectionStatus::Valid);
        assert!(after.result.contains("Proved goals"));
    }

    #[test]
    fn create_requests_validate_their_fields() {
        let api = MemoryProverApi::new();

        let err = block_on(api.create_directory(&NewDirectoryRequest {
            name: "  ".to_string(),
            description: String::new(),
            parent: None,
        }))
        .expect_err("blank name");
        assert_eq!(err, "This field is required.");

        block_on(api.create_file(&NewFileRequest {
            name: "sort.c".to_string(),
            description: String::new(),
            parent: None,
            upload: crate::types::FileUpload {
                file_name: "sort.c".to_string(),
                text: "int main(void) {}".to_string(),
            },
        }))
        .expect("create file");
        let root = block_on(api.list_directory(None)).expect("listing");
        assert_eq!(root.files.len(), 1);
    }
}
