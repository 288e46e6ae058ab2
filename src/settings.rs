/*!
 * Static configuration embedded at compile time
 */

use serde::Deserialize;

use crate::error::Result;

// Embed the settings file directly in the binary at compile time
const SETTINGS_JSON: &str = include_str!("../settings.json");

/// Name suffixes of files presumed to hold credentials or keys
pub const SENSITIVE_EXTENSIONS: &[&str] = &[".pem", ".key", ".p12", ".pfx", ".cert", ".crt", ".csr"];

/// Name prefix of dotenv-style files
pub const DOTENV_PREFIX: &str = ".env";

/// Immutable lists loaded once at startup
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Names (or simple globs) that are always skipped
    pub ignore: Vec<String>,

    /// Extensions, without the dot, whose content is never embedded
    #[serde(rename = "onlyContext")]
    pub only_context: Vec<String>,
}

impl Settings {
    /// Parse the embedded `settings.json`
    pub fn load() -> Result<Self> {
        Self::from_json(SETTINGS_JSON)
    }

    /// Parse settings from a JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Whether `ext` belongs to the context-only set
    pub fn is_context_only(&self, ext: &str) -> bool {
        self.only_context.iter().any(|e| e == ext)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_settings_parse() {
        let settings = Settings::load().unwrap();
        assert!(settings.ignore.iter().any(|n| n == ".git"));
        assert!(settings.is_context_only("png"));
        assert!(!settings.is_context_only("rs"));
    }

    #[test]
    fn malformed_settings_are_rejected() {
        assert!(Settings::from_json("{\"ignore\": []}").is_err());
    }
}
