mod error;
mod generate_path;
mod health;
mod questions;
mod upload;

pub use error::{intake_error_response, ErrorResponse};
pub use generate_path::generate_path_handler;
pub use health::health_handler;
pub use questions::{answer_question_handler, start_questions_handler};
pub use upload::upload_handler;
