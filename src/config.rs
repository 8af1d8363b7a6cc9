use leptos::config::{get_configuration, LeptosOptions};

use crate::error::ServerError;

pub const DEFAULT_LOG_FILTER: &str = "bapoos=info,tower_http=info";

/// Everything the server reads at startup
pub struct ServerConfig {
    pub leptos_options: LeptosOptions,
    pub log_filter: String,
}

impl ServerConfig {
    /// Reads `.env`, the `[package.metadata.leptos]` table and `LEPTOS_*` overrides.
    pub fn load() -> Result<Self, ServerError> {
        dotenvy::dotenv().ok();

        let conf = get_configuration(None).map_err(|e| ServerError::Config(e.to_string()))?;
        let log_filter =
            std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string());

        Ok(Self {
            leptos_options: conf.leptos_options,
            log_filter,
        })
    }
}
