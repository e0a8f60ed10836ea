use std::sync::Arc;

use crate::application::ports::{ArchiveStore, ClassifierClient};
use crate::application::services::IntakeService;
use crate::presentation::config::Settings;

pub struct AppState<C, A>
where
    C: ClassifierClient,
    A: ArchiveStore,
{
    pub intake_service: Arc<IntakeService<C>>,
    pub archive_store: Arc<A>,
    pub settings: Settings,
}

impl<C, A> Clone for AppState<C, A>
where
    C: ClassifierClient,
    A: ArchiveStore,
{
    fn clone(&self) -> Self {
        Self {
            intake_service: Arc::clone(&self.intake_service),
            archive_store: Arc::clone(&self.archive_store),
            settings: self.settings.clone(),
        }
    }
}
