use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::application::ports::{ClassifierClient, ClassifierError};

/// Scripted classifier for tests: replies are handed out in order and the
/// received prompts are recorded.
pub struct MockClassifier {
    replies: Mutex<VecDeque<String>>,
    prompts: Mutex<Vec<String>>,
}

impl MockClassifier {
    pub fn with_replies(replies: &[&str]) -> Self {
        Self {
            replies: Mutex::new(replies.iter().map(|r| (*r).to_string()).collect()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn received_prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ClassifierClient for MockClassifier {
    async fn classify(&self, prompt: &str) -> Result<String, ClassifierError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| ClassifierError::ApiRequestFailed("no scripted reply".to_string()))
    }
}
