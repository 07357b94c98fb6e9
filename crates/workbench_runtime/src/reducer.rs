//! Pure state transitions for the workbench, expressed as a reducer.
//!
//! Every user gesture and every completed backend call is an
//! [`WorkbenchAction`]. [`reduce_workbench`] applies the action to the state
//! and returns the [`RuntimeEffect`]s the host must execute; it never touches
//! the network or the DOM itself.

use prover_host::{DirectoryId, DirectoryListing, FileDocument, FileId};
use thiserror::Error;

use crate::model::{MiddlePanel, Tab, WorkbenchState};

#[derive(Debug, Clone, PartialEq)]
/// Inputs accepted by the workbench reducer.
pub enum WorkbenchAction {
    /// Push a child directory and display its contents.
    EnterDirectory(DirectoryId),
    /// Pop the navigation stack and display the parent scope.
    LeaveDirectory,
    /// Re-fetch the listing for the current scope.
    RefreshListing,
    /// A listing fetch completed for the given scope.
    ListingLoaded {
        /// Scope the fetch was issued for.
        scope: Option<DirectoryId>,
        /// Fetched listing payload.
        listing: DirectoryListing,
    },
    /// Open a file in the content panel.
    OpenFile(FileId),
    /// Close the open file and clear the content panel.
    CloseFile,
    /// A document fetch completed for the given file.
    DocumentLoaded {
        /// File the fetch was issued for.
        file: FileId,
        /// Fetched document payload.
        document: FileDocument,
    },
    /// A directory was created in the current scope.
    DirectoryCreated,
    /// A file was created in the current scope.
    FileCreated,
    /// A directory was deleted.
    DirectoryDeleted {
        /// Deleted directory.
        directory: DirectoryId,
    },
    /// A file was deleted.
    FileDeleted {
        /// Deleted file.
        file: FileId,
    },
    /// A proving run finished for the given file.
    FileProved {
        /// Proved file.
        file: FileId,
    },
    /// Switch the active result-category tab.
    ChangeTab(Tab),
    /// Switch the visible middle panel.
    ShowPanel(MiddlePanel),
    /// Expand or collapse one section's detail block.
    ToggleSection {
        /// Zero-based section index within the open document.
        index: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Side effects the host must execute after a successful reduction.
pub enum RuntimeEffect {
    /// Fetch the listing for a scope and dispatch `ListingLoaded`.
    FetchListing {
        /// Directory scope; `None` is the root.
        scope: Option<DirectoryId>,
    },
    /// Fetch a file's document and dispatch `DocumentLoaded`.
    FetchDocument {
        /// File to fetch.
        file: FileId,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Rejected reductions; the state is left untouched when these occur.
pub enum ReducerError {
    /// A section toggle arrived while no document was open.
    #[error("no document is open")]
    NoOpenDocument,
    /// A section toggle named an index past the end of the document.
    #[error("section index {index} is out of range (document has {len} sections)")]
    SectionOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of sections in the open document.
        len: usize,
    },
}

/// Applies one action to the workbench state.
///
/// Completion actions carry the scope or file they were fetched for; when
/// that no longer matches the current state the payload is stale and is
/// dropped without touching the state. This is what makes rapid navigation
/// safe: only the response for the scope the user is actually looking at
/// ever lands.
pub fn reduce_workbench(
    state: &mut WorkbenchState,
    action: WorkbenchAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    match action {
        WorkbenchAction::EnterDirectory(directory) => {
            state.nav_stack.push(directory);
            Ok(vec![RuntimeEffect::FetchListing {
                scope: Some(directory),
            }])
        }
        WorkbenchAction::LeaveDirectory => {
            // Leaving the root scope is a no-op, not an error.
            if state.nav_stack.pop().is_none() {
                return Ok(Vec::new());
            }
            Ok(vec![RuntimeEffect::FetchListing {
                scope: state.current_directory(),
            }])
        }
        WorkbenchAction::RefreshListing => Ok(vec![RuntimeEffect::FetchListing {
            scope: state.current_directory(),
        }]),
        WorkbenchAction::ListingLoaded { scope, listing } => {
            if scope != state.current_directory() {
                return Ok(Vec::new());
            }
            state.listing = listing;
            Ok(Vec::new())
        }
        WorkbenchAction::OpenFile(file) => {
            state.middle_panel = MiddlePanel::Content;
            if state.open_file == Some(file) {
                return Ok(Vec::new());
            }
            state.open_file = Some(file);
            state.document = None;
            state.expanded_sections.clear();
            Ok(vec![RuntimeEffect::FetchDocument { file }])
        }
        WorkbenchAction::CloseFile => {
            state.open_file = None;
            state.document = None;
            state.expanded_sections.clear();
            Ok(Vec::new())
        }
        WorkbenchAction::DocumentLoaded { file, document } => {
            if state.open_file != Some(file) {
                return Ok(Vec::new());
            }
            state.document = Some(document);
            Ok(Vec::new())
        }
        // Creation keeps the form panel visible so several entries can be
        // created back to back; the form itself resets in the view layer.
        WorkbenchAction::DirectoryCreated | WorkbenchAction::FileCreated => {
            Ok(vec![RuntimeEffect::FetchListing {
                scope: state.current_directory(),
            }])
        }
        // Deleting the displayed scope itself only happens from the parent's
        // listing, so the stack never contains the deleted id; a refresh of
        // the current scope is all that is needed.
        WorkbenchAction::DirectoryDeleted { directory: _ } => {
            Ok(vec![RuntimeEffect::FetchListing {
                scope: state.current_directory(),
            }])
        }
        WorkbenchAction::FileDeleted { file } => {
            if state.open_file == Some(file) {
                state.open_file = None;
                state.document = None;
                state.expanded_sections.clear();
            }
            Ok(vec![RuntimeEffect::FetchListing {
                scope: state.current_directory(),
            }])
        }
        WorkbenchAction::FileProved { file } => {
            // The proved file may have been closed while the run was in
            // flight; only refetch when its document is still displayed.
            if state.open_file != Some(file) {
                return Ok(Vec::new());
            }
            Ok(vec![RuntimeEffect::FetchDocument { file }])
        }
        WorkbenchAction::ChangeTab(tab) => {
            state.active_tab = tab;
            Ok(Vec::new())
        }
        WorkbenchAction::ShowPanel(panel) => {
            state.middle_panel = panel;
            Ok(Vec::new())
        }
        WorkbenchAction::ToggleSection { index } => {
            let document = state.document.as_ref().ok_or(ReducerError::NoOpenDocument)?;
            let len = document.sections.len();
            if index >= len {
                return Err(ReducerError::SectionOutOfRange { index, len });
            }
            if !state.expanded_sections.remove(&index) {
                state.expanded_sections.insert(index);
            }
            Ok(Vec::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use prover_host::{DirectoryEntry, FileEntry, Section, SectionStatus};

    use super::*;

    fn listing_with_file(file: FileId) -> DirectoryListing {
        DirectoryListing {
            directories: vec![DirectoryEntry {
                id: DirectoryId(3),
                name: "lemmas".to_string(),
            }],
            files: vec![FileEntry {
                id: file,
                name: "sort.c".to_string(),
            }],
        }
    }

    fn document_with_sections(count: usize) -> FileDocument {
        FileDocument {
            name: "sort.c".to_string(),
            body: "int main(void) { return 0; }".to_string(),
            sections: (0..count)
                .map(|index| Section {
                    status: SectionStatus::Valid,
                    category: "procedure".to_string(),
                    body: format!("Goal g{index}\nProved."),
                })
                .collect(),
            result: "Proved goals: 1 / 1".to_string(),
        }
    }

    fn reduce(state: &mut WorkbenchState, action: WorkbenchAction) -> Vec<RuntimeEffect> {
        reduce_workbench(state, action).expect("reduction succeeds")
    }

    #[test]
    fn navigation_stack_tracks_enter_and_leave() {
        let mut state = WorkbenchState::default();

        let effects = reduce(&mut state, WorkbenchAction::EnterDirectory(DirectoryId(5)));
        assert_eq!(
            effects,
            vec![RuntimeEffect::FetchListing {
                scope: Some(DirectoryId(5))
            }]
        );

        let effects = reduce(&mut state, WorkbenchAction::EnterDirectory(DirectoryId(9)));
        assert_eq!(
            effects,
            vec![RuntimeEffect::FetchListing {
                scope: Some(DirectoryId(9))
            }]
        );
        assert_eq!(state.nav_stack, vec![DirectoryId(5), DirectoryId(9)]);

        let effects = reduce(&mut state, WorkbenchAction::LeaveDirectory);
        assert_eq!(
            effects,
            vec![RuntimeEffect::FetchListing {
                scope: Some(DirectoryId(5))
            }]
        );

        let effects = reduce(&mut state, WorkbenchAction::LeaveDirectory);
        assert_eq!(effects, vec![RuntimeEffect::FetchListing { scope: None }]);
        assert!(state.at_root());
    }

    #[test]
    fn leaving_the_root_scope_does_nothing() {
        let mut state = WorkbenchState::default();
        let effects = reduce(&mut state, WorkbenchAction::LeaveDirectory);
        assert_eq!(effects, Vec::new());
        assert_eq!(state, WorkbenchState::default());
    }

    #[test]
    fn refresh_targets_the_current_scope() {
        let mut state = WorkbenchState::default();
        assert_eq!(
            reduce(&mut state, WorkbenchAction::RefreshListing),
            vec![RuntimeEffect::FetchListing { scope: None }]
        );

        reduce(&mut state, WorkbenchAction::EnterDirectory(DirectoryId(2)));
        assert_eq!(
            reduce(&mut state, WorkbenchAction::RefreshListing),
            vec![RuntimeEffect::FetchListing {
                scope: Some(DirectoryId(2))
            }]
        );
    }

    #[test]
    fn listing_for_a_departed_scope_is_dropped() {
        let mut state = WorkbenchState::default();
        reduce(&mut state, WorkbenchAction::EnterDirectory(DirectoryId(5)));
        reduce(&mut state, WorkbenchAction::EnterDirectory(DirectoryId(9)));

        // Response for the first scope arrives after the second was entered.
        let stale = reduce(
            &mut state,
            WorkbenchAction::ListingLoaded {
                scope: Some(DirectoryId(5)),
                listing: listing_with_file(FileId(1)),
            },
        );
        assert_eq!(stale, Vec::new());
        assert!(state.listing.is_empty());

        let fresh = listing_with_file(FileId(2));
        reduce(
            &mut state,
            WorkbenchAction::ListingLoaded {
                scope: Some(DirectoryId(9)),
                listing: fresh.clone(),
            },
        );
        assert_eq!(state.listing, fresh);
    }

    #[test]
    fn opening_a_file_is_idempotent_by_id() {
        let mut state = WorkbenchState::default();

        let effects = reduce(&mut state, WorkbenchAction::OpenFile(FileId(7)));
        assert_eq!(effects, vec![RuntimeEffect::FetchDocument { file: FileId(7) }]);
        assert_eq!(state.open_file, Some(FileId(7)));
        assert_eq!(state.document, None);

        // Re-opening the same file issues no second fetch.
        let effects = reduce(&mut state, WorkbenchAction::OpenFile(FileId(7)));
        assert_eq!(effects, Vec::new());

        // A different file clears the previous document and fetches anew.
        reduce(
            &mut state,
            WorkbenchAction::DocumentLoaded {
                file: FileId(7),
                document: document_with_sections(2),
            },
        );
        reduce(&mut state, WorkbenchAction::ToggleSection { index: 1 });
        let effects = reduce(&mut state, WorkbenchAction::OpenFile(FileId(8)));
        assert_eq!(effects, vec![RuntimeEffect::FetchDocument { file: FileId(8) }]);
        assert_eq!(state.document, None);
        assert!(state.expanded_sections.is_empty());
    }

    #[test]
    fn opening_a_file_returns_to_the_content_panel() {
        let mut state = WorkbenchState::default();
        reduce(
            &mut state,
            WorkbenchAction::ShowPanel(MiddlePanel::CreateDirectory),
        );
        reduce(&mut state, WorkbenchAction::OpenFile(FileId(1)));
        assert_eq!(state.middle_panel, MiddlePanel::Content);
    }

    #[test]
    fn closing_a_file_clears_state_without_fetching() {
        let mut state = WorkbenchState::default();
        reduce(&mut state, WorkbenchAction::OpenFile(FileId(7)));
        reduce(
            &mut state,
            WorkbenchAction::DocumentLoaded {
                file: FileId(7),
                document: document_with_sections(1),
            },
        );
        reduce(&mut state, WorkbenchAction::ToggleSection { index: 0 });

        let effects = reduce(&mut state, WorkbenchAction::CloseFile);
        assert_eq!(effects, Vec::new());
        assert_eq!(state.open_file, None);
        assert_eq!(state.document, None);
        assert!(state.expanded_sections.is_empty());
    }

    #[test]
    fn document_for_a_closed_or_replaced_file_is_dropped() {
        let mut state = WorkbenchState::default();
        reduce(&mut state, WorkbenchAction::OpenFile(FileId(7)));
        reduce(&mut state, WorkbenchAction::OpenFile(FileId(8)));

        // The slow response for the first file must not clobber the second.
        let effects = reduce(
            &mut state,
            WorkbenchAction::DocumentLoaded {
                file: FileId(7),
                document: document_with_sections(1),
            },
        );
        assert_eq!(effects, Vec::new());
        assert_eq!(state.document, None);

        reduce(
            &mut state,
            WorkbenchAction::DocumentLoaded {
                file: FileId(8),
                document: document_with_sections(3),
            },
        );
        assert_eq!(
            state.document.as_ref().map(|doc| doc.sections.len()),
            Some(3)
        );
    }

    #[test]
    fn creation_refreshes_the_scope_and_keeps_the_form_visible() {
        let mut state = WorkbenchState::default();
        reduce(&mut state, WorkbenchAction::EnterDirectory(DirectoryId(4)));
        reduce(
            &mut state,
            WorkbenchAction::ShowPanel(MiddlePanel::CreateFile),
        );

        let effects = reduce(&mut state, WorkbenchAction::FileCreated);
        assert_eq!(
            effects,
            vec![RuntimeEffect::FetchListing {
                scope: Some(DirectoryId(4))
            }]
        );
        assert_eq!(state.middle_panel, MiddlePanel::CreateFile);

        reduce(
            &mut state,
            WorkbenchAction::ShowPanel(MiddlePanel::CreateDirectory),
        );
        let effects = reduce(&mut state, WorkbenchAction::DirectoryCreated);
        assert_eq!(
            effects,
            vec![RuntimeEffect::FetchListing {
                scope: Some(DirectoryId(4))
            }]
        );
        assert_eq!(state.middle_panel, MiddlePanel::CreateDirectory);
    }

    #[test]
    fn deleting_the_open_file_closes_it_and_refreshes() {
        let mut state = WorkbenchState::default();
        reduce(&mut state, WorkbenchAction::OpenFile(FileId(7)));
        reduce(
            &mut state,
            WorkbenchAction::DocumentLoaded {
                file: FileId(7),
                document: document_with_sections(1),
            },
        );

        let effects = reduce(&mut state, WorkbenchAction::FileDeleted { file: FileId(7) });
        assert_eq!(effects, vec![RuntimeEffect::FetchListing { scope: None }]);
        assert_eq!(state.open_file, None);
        assert_eq!(state.document, None);
    }

    #[test]
    fn deleting_another_file_leaves_the_open_document_alone() {
        let mut state = WorkbenchState::default();
        reduce(&mut state, WorkbenchAction::OpenFile(FileId(7)));
        reduce(
            &mut state,
            WorkbenchAction::DocumentLoaded {
                file: FileId(7),
                document: document_with_sections(1),
            },
        );

        let effects = reduce(&mut state, WorkbenchAction::FileDeleted { file: FileId(9) });
        assert_eq!(effects, vec![RuntimeEffect::FetchListing { scope: None }]);
        assert_eq!(state.open_file, Some(FileId(7)));
        assert!(state.document.is_some());
    }

    #[test]
    fn directory_deletion_refreshes_the_current_scope() {
        let mut state = WorkbenchState::default();
        reduce(&mut state, WorkbenchAction::EnterDirectory(DirectoryId(2)));

        let effects = reduce(
            &mut state,
            WorkbenchAction::DirectoryDeleted {
                directory: DirectoryId(6),
            },
        );
        assert_eq!(
            effects,
            vec![RuntimeEffect::FetchListing {
                scope: Some(DirectoryId(2))
            }]
        );
    }

    #[test]
    fn proving_refetches_only_a_still_open_file() {
        let mut state = WorkbenchState::default();
        reduce(&mut state, WorkbenchAction::OpenFile(FileId(7)));

        let effects = reduce(&mut state, WorkbenchAction::FileProved { file: FileId(7) });
        assert_eq!(effects, vec![RuntimeEffect::FetchDocument { file: FileId(7) }]);

        reduce(&mut state, WorkbenchAction::CloseFile);
        let effects = reduce(&mut state, WorkbenchAction::FileProved { file: FileId(7) });
        assert_eq!(effects, Vec::new());
    }

    #[test]
    fn every_tab_is_reachable() {
        let mut state = WorkbenchState::default();
        for tab in Tab::ALL {
            let effects = reduce(&mut state, WorkbenchAction::ChangeTab(tab));
            assert_eq!(effects, Vec::new());
            assert_eq!(state.active_tab, tab);
        }
    }

    #[test]
    fn section_toggles_are_independent_and_self_inverse() {
        let mut state = WorkbenchState::default();
        reduce(&mut state, WorkbenchAction::OpenFile(FileId(7)));
        reduce(
            &mut state,
            WorkbenchAction::DocumentLoaded {
                file: FileId(7),
                document: document_with_sections(3),
            },
        );

        reduce(&mut state, WorkbenchAction::ToggleSection { index: 0 });
        reduce(&mut state, WorkbenchAction::ToggleSection { index: 2 });
        assert!(state.is_section_expanded(0));
        assert!(!state.is_section_expanded(1));
        assert!(state.is_section_expanded(2));

        reduce(&mut state, WorkbenchAction::ToggleSection { index: 0 });
        assert!(!state.is_section_expanded(0));
        assert!(state.is_section_expanded(2));
    }

    #[test]
    fn section_toggle_requires_an_open_document_in_range() {
        let mut state = WorkbenchState::default();
        assert_eq!(
            reduce_workbench(&mut state, WorkbenchAction::ToggleSection { index: 0 }),
            Err(ReducerError::NoOpenDocument)
        );

        reduce(&mut state, WorkbenchAction::OpenFile(FileId(7)));
        reduce(
            &mut state,
            WorkbenchAction::DocumentLoaded {
                file: FileId(7),
                document: document_with_sections(2),
            },
        );
        assert_eq!(
            reduce_workbench(&mut state, WorkbenchAction::ToggleSection { index: 2 }),
            Err(ReducerError::SectionOutOfRange { index: 2, len: 2 })
        );
        // The failed toggle left the expansion set untouched.
        assert!(state.expanded_sections.is_empty());
    }
}
