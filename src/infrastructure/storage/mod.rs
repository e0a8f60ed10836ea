mod dropbox_store;
mod mock_store;

pub use dropbox_store::DropboxArchiveStore;
pub use mock_store::MockArchiveStore;
