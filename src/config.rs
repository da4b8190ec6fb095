use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

#[cfg(target_arch = "wasm32")]
const EMBEDDED_CONFIG_ID: &str = "tunegrid-config";
#[cfg(not(target_arch = "wasm32"))]
const NATIVE_SERVER_URL: &str = "http://127.0.0.1:5000";

pub const DEFAULT_ART_URL: &str = "/static/covers/default_art.png";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid client settings: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Client settings. Nothing here is persisted; every field has a default and
/// the page may override any of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientSettings {
    /// Base URL of the media server. Empty means same origin.
    pub server_url: String,
    /// Delay before the catalog is re-read after an upload batch.
    pub refresh_delay_ms: u64,
    /// Status poll interval in seconds; 0 disables polling.
    pub status_poll_secs: u32,
    /// Art URL the server uses to mean "no custom art".
    pub default_art_url: String,
    pub allowed_extensions: Vec<String>,
    pub accept_legacy_catalog: bool,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            server_url: String::new(),
            refresh_delay_ms: 300,
            status_poll_secs: 5,
            default_art_url: DEFAULT_ART_URL.to_string(),
            allowed_extensions: ["mp3", "wav", "flac", "m4a"]
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
            accept_legacy_catalog: true,
        }
    }
}

impl ClientSettings {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn refresh_delay(&self) -> Duration {
        Duration::from_millis(self.refresh_delay_ms)
    }

    pub fn status_poll_interval(&self) -> Option<Duration> {
        (self.status_poll_secs > 0).then(|| Duration::from_secs(self.status_poll_secs as u64))
    }

    /// Settings for this page: the embedded `#tunegrid-config` JSON if any,
    /// with the server defaulting to the page origin.
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        use tracing::warn;

        let document = web_sys::window().and_then(|w| w.document());
        let embedded = document
            .as_ref()
            .and_then(|doc| doc.get_element_by_id(EMBEDDED_CONFIG_ID))
            .and_then(|el| el.text_content());

        let mut settings = match embedded.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => Self::from_json(raw).unwrap_or_else(|err| {
                warn!("ignoring embedded config: {err}");
                Self::default()
            }),
            _ => Self::default(),
        };

        if settings.server_url.trim().is_empty() {
            // reqwest on wasm needs absolute URLs.
            if let Some(origin) = web_sys::window().and_then(|w| w.location().origin().ok()) {
                settings.server_url = origin;
            }
        }
        settings
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self {
            server_url: NATIVE_SERVER_URL.to_string(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let settings =
            ClientSettings::from_json(r#"{"refresh_delay_ms": 1200, "status_poll_secs": 0}"#)
                .unwrap();
        assert_eq!(settings.refresh_delay(), Duration::from_millis(1200));
        assert_eq!(settings.status_poll_interval(), None);
        assert_eq!(settings.default_art_url, DEFAULT_ART_URL);
        assert_eq!(settings.allowed_extensions.len(), 4);
        assert!(settings.accept_legacy_catalog);
    }

    #[test]
    fn defaults_match_server_contract() {
        let settings = ClientSettings::default();
        assert_eq!(settings.refresh_delay(), Duration::from_millis(300));
        assert_eq!(settings.status_poll_interval(), Some(Duration::from_secs(5)));
    }

    #[test]
    fn rejects_wrong_types() {
        assert!(ClientSettings::from_json(r#"{"refresh_delay_ms": "soon"}"#).is_err());
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn native_load_points_at_local_server() {
        assert_eq!(ClientSettings::load().server_url, NATIVE_SERVER_URL);
    }
}
