// ABOUTME: Theme asset handling for the ds-slides application
// ABOUTME: Handles local and remote CSS and JavaScript theme files

use crate::errors::{Result, SlidesError};
use log::info;
use reqwest::blocking::Client;
use std::fs;
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Kind of theme asset being rendered into the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Css,
    Js,
}

/// A CSS or JavaScript theme file that can be either local or remote.
#[derive(Debug, Clone)]
pub struct ThemeAsset {
    pub path: String,
    pub is_remote: bool,
}

impl ThemeAsset {
    /// Create a new ThemeAsset from a path string.
    /// The path can be either a local file path or an http(s) URL.
    pub fn new(path: &str) -> Self {
        let is_remote = Url::parse(path)
            .map(|url| matches!(url.scheme(), "http" | "https"))
            .unwrap_or(false);
        Self {
            path: path.to_string(),
            is_remote,
        }
    }

    /// Get the content of the asset, fetching remote URLs and reading
    /// local files from disk.
    pub fn content(&self) -> Result<String> {
        if self.is_remote {
            self.fetch_remote_content()
        } else {
            self.read_local_content()
        }
    }

    /// Fetch content from a remote URL with retry capability
    fn fetch_remote_content(&self) -> Result<String> {
        info!("Fetching remote theme asset: {}", self.path);

        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(SlidesError::FetchError)?;

        // Try up to 3 times with increasing backoff
        let mut retry_delay = 1000;
        let mut last_error = None;

        for attempt in 1..=3 {
            match client.get(&self.path).send() {
                Ok(response) => {
                    if response.status().is_success() {
                        return response.text().map_err(SlidesError::FetchError);
                    }
                    let status = response.status();
                    last_error = Some(SlidesError::ValidationError(format!(
                        "HTTP error: {}",
                        status
                    )));
                }
                Err(e) => {
                    last_error = Some(SlidesError::FetchError(e));
                }
            }

            info!(
                "Fetch attempt {} failed, retrying in {} ms",
                attempt, retry_delay
            );
            std::thread::sleep(Duration::from_millis(retry_delay));
            retry_delay *= 2;
        }

        Err(last_error.unwrap_or_else(|| {
            SlidesError::ValidationError("Unknown error fetching theme asset".to_string())
        }))
    }

    /// Read content from a local file
    fn read_local_content(&self) -> Result<String> {
        info!("Reading local theme asset: {}", self.path);
        let path = Path::new(&self.path);
        if !path.exists() {
            return Err(SlidesError::PathNotFoundError(path.to_path_buf()));
        }

        fs::read_to_string(path).map_err(SlidesError::FileReadError)
    }

    /// Generate the HTML tag for the asset, either embedding its content
    /// or referencing it. Remote assets are always referenced; local
    /// assets are embedded when `embed` is true.
    pub fn tag(&self, kind: AssetKind, embed: bool) -> Result<String> {
        if self.is_remote || !embed {
            Ok(match kind {
                AssetKind::Css => format!(r#"<link rel="stylesheet" href="{}">"#, self.path),
                AssetKind::Js => format!(r#"<script src="{}"></script>"#, self.path),
            })
        } else {
            let content = self.content()?;
            Ok(match kind {
                AssetKind::Css => format!("<style>{}</style>", content),
                AssetKind::Js => format!("<script>{}</script>", content),
            })
        }
    }
}
