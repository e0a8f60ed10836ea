mod extraction;
mod intake_service;
mod prompts;

pub use extraction::ExtractionService;
pub use intake_service::{IntakeError, IntakeService, SubmitOutcome};
