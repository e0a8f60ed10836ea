pub mod flow;
mod folder_plan;
mod outcome;
pub mod patterns;
mod question;
pub mod sanitize;
mod session;
pub mod synthesis;
pub mod validation;
mod work_type;

pub use flow::FlowError;
pub use folder_plan::FolderPlan;
pub use outcome::{ExtractedValue, ExtractionOutcome, ValidationOutcome};
pub use question::{ConditionalNext, NextStep, QuestionSpec, ValidationRule};
pub use session::Session;
pub use synthesis::SynthesisError;
pub use work_type::WorkType;
