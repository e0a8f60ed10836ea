use serde::Serialize;

use super::work_type::WorkType;

/// Deterministic folder-creation plan for one completed answer set. Computed
/// once per session and never mutated; regenerating from the same answers
/// yields a byte-identical plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FolderPlan {
    pub work_type: WorkType,
    /// Case/project root folder.
    pub base_path: String,
    /// Subfolder receiving this document.
    pub target_subfolder: String,
    /// `base_path` joined with `target_subfolder`.
    pub full_path: String,
    /// Every folder to provision: parents, base and the complete standard
    /// checklist for the work type, independent of this document's subfolder.
    pub standard_folders: Vec<String>,
    pub canonical_filename: String,
}
