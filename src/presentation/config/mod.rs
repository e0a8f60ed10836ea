mod settings;

pub use settings::{
    ClassifierSettings, DropboxSettings, LoggingSettings, ServerSettings, Settings,
};
