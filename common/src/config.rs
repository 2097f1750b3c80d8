//! Client-side endpoint configuration.
//!
//! All paths default to the same origin the page was served from, which is how
//! the generator server mounts them. `api_base` lets the page talk to a server
//! on another origin.

use serde::Deserialize;

/// Upload limit enforced by the generator server (16 MiB).
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 16 * 1024 * 1024;

/// Specification formats the generator server accepts.
pub const ACCEPTED_EXTENSIONS: &[&str] = &["json", "yaml", "yml"];

#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct ClientConfig {
    /// Scheme, host and port prefix. Empty means same origin.
    pub api_base: String,
    pub generate_path: String,
    pub download_path: String,
    /// Files above this size are refused before any request is made.
    /// `None` leaves the check to the server.
    pub max_upload_bytes: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            generate_path: "/generate".to_string(),
            download_path: "/download".to_string(),
            max_upload_bytes: Some(DEFAULT_MAX_UPLOAD_BYTES),
        }
    }
}

impl ClientConfig {
    /// Reads a configuration object. Missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let config: ClientConfig = serde_json::from_str(json)?;
        let api_base = config.api_base.clone();
        Ok(config.with_api_base(api_base))
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        let api_base: String = api_base.into();
        self.api_base = api_base.trim_end_matches('/').to_string();
        self
    }

    pub fn generate_url(&self) -> String {
        format!("{}{}", self.api_base, self.generate_path)
    }

    /// URL of a stored artifact. The filename is encoded as a single path
    /// segment, so `/`, `?`, `#` and spaces cannot escape it.
    pub fn download_url(&self, filename: &str) -> String {
        format!(
            "{}{}/{}",
            self.api_base,
            self.download_path.trim_end_matches('/'),
            urlencoding::encode(filename)
        )
    }

    /// Value for the file input's `accept` attribute.
    pub fn accept_attribute() -> String {
        ACCEPTED_EXTENSIONS
            .iter()
            .map(|ext| format!(".{}", ext))
            .collect::<Vec<_>>()
            .join(",")
    }
}
