//! Where the backend is expected to live.
//!
//! Intended for saving to a settings file eventually. For now the default
//! reads from an env var, falling back to the local dev address.

use serde::Deserialize;
use serde::Serialize;

/// Env var that overrides the backend base URL.
pub const BACKEND_URL_VAR: &str = "CAPSTONE_MDA_BACKEND_URL";

const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Backend endpoint preferences.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct BackendPrefs {
    base_url: String,
}

impl Default for BackendPrefs {
    fn default() -> Self {
        let base_url =
            std::env::var(BACKEND_URL_VAR).unwrap_or_else(|_| DEFAULT_BASE_URL.to_owned());
        Self { base_url }
    }
}

impl BackendPrefs {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The projects listing endpoint, the target of the connectivity probe.
    pub fn projects_url(&self) -> String {
        format!("{}/projects", self.base_url.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projects_url_appends_endpoint() {
        let prefs = BackendPrefs::with_base_url("http://localhost:8000");
        assert_eq!(prefs.projects_url(), "http://localhost:8000/projects");
    }

    #[test]
    fn trailing_slash_does_not_double_up() {
        let prefs = BackendPrefs::with_base_url("http://localhost:8000/");
        assert_eq!(prefs.projects_url(), "http://localhost:8000/projects");
    }
}
