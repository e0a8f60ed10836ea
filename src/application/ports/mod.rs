mod archive_store;
mod classifier_client;
mod session_store;

pub use archive_store::{ArchiveStore, ArchiveStoreError, StoredFile};
pub use classifier_client::{ClassifierClient, ClassifierError, AMBIGUOUS_SENTINEL};
pub use session_store::{SessionStore, SessionStoreError};
