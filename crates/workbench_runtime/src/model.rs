//! Encapsulated view-state for the workbench shell.

use std::collections::BTreeSet;

use prover_host::{DirectoryId, DirectoryListing, FileDocument, FileId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Fixed set of result-category tabs in the content panel.
pub enum Tab {
    /// Prover overview tab.
    Provers,
    /// Verification-condition sections tab.
    Vcs,
    /// Proving result summary tab.
    Result,
}

impl Tab {
    /// Every tab, in display order.
    pub const ALL: [Tab; 3] = [Tab::Provers, Tab::Vcs, Tab::Result];

    /// User-facing tab label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Provers => "Provers",
            Self::Vcs => "VCs",
            Self::Result => "Result",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Mutually exclusive views occupying the main region of the UI.
pub enum MiddlePanel {
    /// File content view with tabs and sections.
    Content,
    /// Create-directory form.
    CreateDirectory,
    /// Create-file upload form.
    CreateFile,
}

#[derive(Debug, Clone, PartialEq)]
/// Complete view state owned by the workbench runtime.
///
/// Root scope is represented by an empty navigation stack and "no open file"
/// by `open_file == None`; neither uses a sentinel value. Nothing here is
/// persisted, a page reload starts from [`WorkbenchState::default`].
pub struct WorkbenchState {
    /// Path of entered directories; the top is the displayed scope.
    pub nav_stack: Vec<DirectoryId>,
    /// Listing currently rendered in the navigation panel.
    pub listing: DirectoryListing,
    /// Identifier of the file currently open, if any.
    pub open_file: Option<FileId>,
    /// Fetched payload for the open file; `None` while loading or closed.
    pub document: Option<FileDocument>,
    /// Indices of sections whose detail block is expanded.
    pub expanded_sections: BTreeSet<usize>,
    /// Active result-category tab.
    pub active_tab: Tab,
    /// Visible middle panel.
    pub middle_panel: MiddlePanel,
}

impl Default for WorkbenchState {
    fn default() -> Self {
        Self {
            nav_stack: Vec::new(),
            listing: DirectoryListing::default(),
            open_file: None,
            document: None,
            expanded_sections: BTreeSet::new(),
            active_tab: Tab::Provers,
            middle_panel: MiddlePanel::Content,
        }
    }
}

impl WorkbenchState {
    /// Displayed directory scope; `None` means root.
    pub fn current_directory(&self) -> Option<DirectoryId> {
        self.nav_stack.last().copied()
    }

    /// Returns `true` when the root scope is displayed.
    pub fn at_root(&self) -> bool {
        self.nav_stack.is_empty()
    }

    /// Returns `true` when the section's detail block is expanded.
    pub fn is_section_expanded(&self, index: usize) -> bool {
        self.expanded_sections.contains(&index)
    }
}
