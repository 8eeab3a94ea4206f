//! Stored company settings (settings.json) parsing.
//!
//! The settings record is written by the admin console; this side only
//! ever reads it. Key names are fixed by that producer.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{EmblemError, Result};

/// Company settings loaded from settings.json.
///
/// Every field is optional; a fresh install carries none of them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Chosen accent colour as a hex string, e.g. `#0f766e`.
    pub primary_color: Option<String>,

    /// Path to the uploaded company logo image.
    pub company_logo: Option<PathBuf>,

    /// Display name shown alongside the logo.
    pub company_name: Option<String>,
}

impl Settings {
    /// Load settings from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| EmblemError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read settings: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse settings from a JSON string.
    pub fn parse(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| EmblemError::Settings {
            message: format!("Invalid settings: {}", e),
            help: Some("Expected a JSON object like {\"primaryColor\": \"#0f766e\"}".to_string()),
        })
    }

    /// Get the stored accent, trimmed, treating empty strings as absent.
    pub fn effective_accent(&self) -> Option<&str> {
        self.primary_color
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_object() {
        let settings = Settings::parse("{}").unwrap();

        assert!(settings.primary_color.is_none());
        assert!(settings.company_logo.is_none());
        assert!(settings.company_name.is_none());
    }

    #[test]
    fn test_parse_full_settings() {
        let json = r##"{
            "primaryColor": "#0f766e",
            "companyLogo": "uploads/logo.png",
            "companyName": "Reyes & Calloway LLP"
        }"##;
        let settings = Settings::parse(json).unwrap();

        assert_eq!(settings.primary_color.as_deref(), Some("#0f766e"));
        assert_eq!(settings.company_logo, Some(PathBuf::from("uploads/logo.png")));
        assert_eq!(settings.company_name.as_deref(), Some("Reyes & Calloway LLP"));
    }

    #[test]
    fn test_parse_tolerates_unknown_keys() {
        let json = r##"{"primaryColor": "#336699", "chatGreeting": "Hello"}"##;
        let settings = Settings::parse(json).unwrap();

        assert_eq!(settings.primary_color.as_deref(), Some("#336699"));
    }

    #[test]
    fn test_parse_malformed() {
        assert!(Settings::parse("").is_err());
        assert!(Settings::parse("{not json").is_err());
        assert!(Settings::parse("[1, 2, 3]").is_err());
    }

    #[test]
    fn test_effective_accent_filters_blanks() {
        let mut settings = Settings::default();
        assert_eq!(settings.effective_accent(), None);

        settings.primary_color = Some(String::new());
        assert_eq!(settings.effective_accent(), None);

        settings.primary_color = Some("   ".to_string());
        assert_eq!(settings.effective_accent(), None);

        settings.primary_color = Some(" #b91c1c ".to_string());
        assert_eq!(settings.effective_accent(), Some("#b91c1c"));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Settings::load(&dir.path().join("settings.json"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let settings = Settings {
            primary_color: Some("#7c3aed".to_string()),
            company_logo: None,
            company_name: Some("Harbour Legal".to_string()),
        };
        std::fs::write(&path, serde_json::to_string_pretty(&settings).unwrap()).unwrap();

        let loaded = Settings::load(&path).unwrap();
        assert_eq!(loaded.primary_color.as_deref(), Some("#7c3aed"));
        assert_eq!(loaded.company_name.as_deref(), Some("Harbour Legal"));
    }
}
