// ABOUTME: Configuration module for the ds-slides application
// ABOUTME: Provides configuration settings and environment variable handling

use crate::server::ServeOptions;
use std::env;

/// Global configuration for the application
pub struct Config {
    pub host: String,
    pub port: u16,
    pub ws_port: Option<u16>,
    pub embed_assets: bool,
    pub theme_css: Option<String>,
    pub theme_js: Option<String>,
    pub watch_debounce_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            ws_port: None,
            embed_assets: true,
            theme_css: None,
            theme_js: None,
            watch_debounce_ms: 500,
        }
    }
}

impl Config {
    /// Create a new configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let host = env::var("DS_SLIDES_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("DS_SLIDES_PORT")
            .ok()
            .and_then(|s| s.parse::<u16>().ok())
            .unwrap_or(5000);
        let ws_port = env::var("DS_SLIDES_WS_PORT")
            .ok()
            .and_then(|s| s.parse::<u16>().ok());
        let embed_assets = env::var("DS_SLIDES_EMBED_ASSETS")
            .ok()
            .map(|s| s.to_lowercase() != "false")
            .unwrap_or(true);
        let theme_css = env::var("DS_SLIDES_THEME_CSS").ok();
        let theme_js = env::var("DS_SLIDES_THEME_JS").ok();
        let watch_debounce_ms = env::var("DS_SLIDES_WATCH_DEBOUNCE_MS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(500);

        Self {
            host,
            port,
            ws_port,
            embed_assets,
            theme_css,
            theme_js,
            watch_debounce_ms,
        }
    }

    /// Get serve options with defaults from this config.
    /// Explicit arguments (CLI flags) override environment values; the
    /// sync port falls back to the HTTP port plus one.
    pub fn get_serve_options(
        &self,
        host: Option<String>,
        port: Option<u16>,
        ws_port: Option<u16>,
    ) -> ServeOptions {
        let port = port.unwrap_or(self.port);
        ServeOptions {
            host: host.unwrap_or_else(|| self.host.clone()),
            port,
            ws_port: ws_port.or(self.ws_port).unwrap_or(port + 1),
        }
    }
}
