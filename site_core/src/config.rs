//! Site manifest.
//!
//! A small TOML document embedded into the frontend at compile time. Parsing
//! it is a fail-fast startup step; there is nothing sensible to render
//! without it.

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid site manifest: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct SiteMeta {
    pub name: String,
    pub tagline: String,
    pub version: String,
    pub repository: String,
    pub crate_name: String,
}

impl SiteMeta {
    pub fn from_toml_str(manifest: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(manifest)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_complete_manifest() {
        let meta = SiteMeta::from_toml_str(
            r#"
            name = "Basel UI"
            tagline = "Composable components for MoonZoon"
            version = "0.1.0"
            repository = "https://github.com/baselui/baselui"
            crate_name = "moonzoon-baselui"
            "#,
        )
        .unwrap();
        assert_eq!(meta.name, "Basel UI");
        assert_eq!(meta.crate_name, "moonzoon-baselui");
    }

    #[test]
    fn missing_fields_fail_parsing() {
        assert!(SiteMeta::from_toml_str("name = \"Basel UI\"").is_err());
    }
}
