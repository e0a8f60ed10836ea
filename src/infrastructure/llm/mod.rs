mod gemini_client;
mod mock_classifier;

pub use gemini_client::GeminiClassifier;
pub use mock_classifier::MockClassifier;
