/// Configuration for tracing initialization.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub environment: String,
    pub level: String,
    pub json_format: bool,
}

impl TracingConfig {
    /// The environment name comes from `APP_ENV`; the base level and output
    /// format are decided by the caller (normally `Settings`).
    pub fn from_env(level: String, json_format: bool) -> Self {
        Self {
            environment: std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
            level,
            json_format,
        }
    }
}
