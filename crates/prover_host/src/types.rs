//! Wire-level data model for the prover backend JSON contract.

use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
/// Opaque server-assigned identifier for a directory.
pub struct DirectoryId(pub u64);

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
/// Opaque server-assigned identifier for a file.
pub struct FileId(pub u64);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Child directory row returned by a listing request.
pub struct DirectoryEntry {
    /// Directory identifier.
    pub id: DirectoryId,
    /// Display name.
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Child file row returned by a listing request.
pub struct FileEntry {
    /// File identifier.
    pub id: FileId,
    /// Display name.
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
/// Contents of one directory scope as reported by the backend.
///
/// Listings are ephemeral: every fetch fully replaces the previous one and
/// nothing is cached across fetches.
pub struct DirectoryListing {
    /// Child directories, in server order.
    pub directories: Vec<DirectoryEntry>,
    /// Child files, in server order.
    pub files: Vec<FileEntry>,
}

impl DirectoryListing {
    /// Returns `true` when the scope contains no entries at all.
    pub fn is_empty(&self) -> bool {
        self.directories.is_empty() && self.files.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Verification outcome attached to a review section.
///
/// The backend parses statuses out of raw prover output and reports them
/// capitalized (`Valid`, `Unknown`); the aliases accept both spellings. Only
/// the valid and unknown outcomes are distinguished by the UI, every other
/// value (including `invalid`) renders with the negative tone.
pub enum SectionStatus {
    /// The section's goal was proved.
    #[serde(alias = "Valid")]
    Valid,
    /// The prover could not decide the goal.
    #[serde(alias = "Unknown")]
    Unknown,
    /// Any other outcome, including explicit invalidity.
    #[serde(other)]
    Invalid,
}

impl SectionStatus {
    /// Stable lowercase label shown in the section header.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Valid => "valid",
            Self::Unknown => "unknown",
            Self::Invalid => "invalid",
        }
    }

    /// Color tone used when rendering the section.
    pub const fn tone(self) -> SectionTone {
        match self {
            Self::Valid => SectionTone::Affirmative,
            Self::Unknown => SectionTone::Caution,
            Self::Invalid => SectionTone::Negative,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Visual tone derived from a [`SectionStatus`].
pub enum SectionTone {
    /// Affirmative (proved) color.
    Affirmative,
    /// Caution (undecided) color.
    Caution,
    /// Negative (failed/other) color.
    Negative,
}

impl SectionTone {
    /// Stable CSS class for the tone.
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Affirmative => "section-valid",
            Self::Caution => "section-unknown",
            Self::Negative => "section-invalid",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One status-tagged, collapsible fragment of a file's verification output.
pub struct Section {
    /// Verification outcome for the section.
    pub status: SectionStatus,
    /// Category label (procedure, lemma, assertion, ...).
    pub category: String,
    /// Section text; the first line is the header, the rest is detail.
    pub body: String,
}

impl Section {
    /// First line of the body, rendered in the clickable header block.
    pub fn header_line(&self) -> &str {
        self.body.lines().next().unwrap_or("")
    }

    /// Remaining lines of the body, rendered in the collapsible detail block.
    pub fn detail(&self) -> &str {
        self.body
            .split_once('\n')
            .map(|(_, rest)| rest)
            .unwrap_or("")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
/// Full payload for one file as returned by `file_content`.
pub struct FileDocument {
    /// Program name.
    pub name: String,
    /// Raw source text, shown in the editable content surface.
    pub body: String,
    /// Ordered review sections from the last proving run.
    pub sections: Vec<Section>,
    /// Prover result summary from the last proving run.
    pub result: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Payload for creating a directory under the current scope.
pub struct NewDirectoryRequest {
    /// Directory name.
    pub name: String,
    /// Optional free-form description.
    pub description: String,
    /// Parent directory; `None` targets the root scope.
    pub parent: Option<DirectoryId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Source file chosen through the upload picker.
pub struct FileUpload {
    /// Original file name of the picked source file.
    pub file_name: String,
    /// UTF-8 text content of the picked source file.
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Payload for creating a file (multipart upload) under the current scope.
pub struct NewFileRequest {
    /// File display name.
    pub name: String,
    /// Optional free-form description.
    pub description: String,
    /// Parent directory; `None` targets the root scope.
    pub parent: Option<DirectoryId>,
    /// Uploaded source file.
    pub upload: FileUpload,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn listing_deserializes_from_backend_shape() {
        let listing: DirectoryListing = serde_json::from_value(json!({
            "directories": [{"id": 4, "name": "lemmas"}],
            "files": [{"id": 9, "name": "sort.c"}],
        }))
        .expect("listing");

        assert_eq!(listing.directories[0].id, DirectoryId(4));
        assert_eq!(listing.files[0].name, "sort.c");
        assert!(!listing.is_empty());
        assert!(DirectoryListing::default().is_empty());
    }

    #[test]
    fn section_status_maps_unrecognized_values_to_invalid() {
        let valid: SectionStatus = serde_json::from_value(json!("valid")).expect("valid");
        let unknown: SectionStatus = serde_json::from_value(json!("unknown")).expect("unknown");
        let invalid: SectionStatus = serde_json::from_value(json!("invalid")).expect("invalid");
        let other: SectionStatus =
            serde_json::from_value(json!("counterexample")).expect("counterexample");

        assert_eq!(valid, SectionStatus::Valid);
        assert_eq!(unknown, SectionStatus::Unknown);
        assert_eq!(invalid, SectionStatus::Invalid);
        assert_eq!(other, SectionStatus::Invalid);
    }

    #[test]
    fn section_status_accepts_the_capitalized_backend_spelling() {
        let valid: SectionStatus = serde_json::from_value(json!("Valid")).expect("Valid");
        let unknown: SectionStatus = serde_json::from_value(json!("Unknown")).expect("Unknown");

        assert_eq!(valid, SectionStatus::Valid);
        assert_eq!(valid.tone(), SectionTone::Affirmative);
        assert_eq!(unknown, SectionStatus::Unknown);
        assert_eq!(unknown.tone(), SectionTone::Caution);
    }

    #[test]
    fn section_status_tone_is_independent_of_category() {
        assert_eq!(SectionStatus::Valid.tone(), SectionTone::Affirmative);
        assert_eq!(SectionStatus::Unknown.tone(), SectionTone::Caution);
        assert_eq!(SectionStatus::Invalid.tone(), SectionTone::Negative);
        assert_eq!(SectionTone::Caution.css_class(), "section-unknown");
    }

    #[test]
    fn section_body_splits_into_header_and_detail() {
        let section = Section {
            status: SectionStatus::Valid,
            category: "assertion".to_string(),
            body: "Goal sorted_post\nProved by Alt-Ergo.\nTime 0.02s.".to_string(),
        };
        assert_eq!(section.header_line(), "Goal sorted_post");
        assert_eq!(section.detail(), "Proved by Alt-Ergo.\nTime 0.02s.");

        let single_line = Section {
            status: SectionStatus::Unknown,
            category: "lemma".to_string(),
            body: "Goal only".to_string(),
        };
        assert_eq!(single_line.header_line(), "Goal only");
        assert_eq!(single_line.detail(), "");
    }

    #[test]
    fn file_document_deserializes_from_backend_shape() {
        let document: FileDocument = serde_json::from_value(json!({
            "name": "sort.c",
            "body": "int main(void) { return 0; }",
            "sections": [
                {"status": "valid", "category": "procedure", "body": "Goal main\nProved."}
            ],
            "result": "Proved goals: 1 / 1",
        }))
        .expect("document");

        assert_eq!(document.sections.len(), 1);
        assert_eq!(document.sections[0].status, SectionStatus::Valid);
        assert_eq!(document.result, "Proved goals: 1 / 1");
    }
}
