//! Configuration for the button preview binary.
//!
//! Loads configuration from environment variables.

use std::env;

use crate::validate::ValidationMode;

/// Preview configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// How strictly the showcase buttons are validated
    pub validation: ValidationMode,

    /// Pretty-print the JSON output
    pub pretty: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Unknown values fall back to the defaults (permissive, pretty).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let validation = env::var("BUTTON_VALIDATION")
            .ok()
            .and_then(|s| s.parse::<ValidationMode>().ok())
            .unwrap_or_default();

        let pretty = env::var("BUTTON_PREVIEW_PRETTY")
            .map(|s| parse_flag(&s))
            .unwrap_or(true);

        Self { validation, pretty }
    }
}

fn parse_flag(s: &str) -> bool {
    matches!(s.trim().to_lowercase().as_str(), "1" | "true" | "yes" | "on")
}
