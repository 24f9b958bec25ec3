use std::env;
use tracing::{debug, warn};

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// JSON file holding the lifestyle program catalog. `None` selects the
    /// built-in standard catalog.
    pub program_catalog_path: Option<String>,
    pub pretty_json: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup so callers (and tests)
    /// are not tied to the process environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let program_catalog_path = lookup("PROGRAM_CATALOG_PATH")
            .map(|path| path.trim().to_string())
            .filter(|path| !path.is_empty());

        if program_catalog_path.is_none() {
            debug!("PROGRAM_CATALOG_PATH not set, using the standard program catalog");
        }

        let pretty_json = match lookup("ANALYSIS_PRETTY_JSON") {
            Some(raw) => parse_flag(&raw).unwrap_or_else(|| {
                warn!("ANALYSIS_PRETTY_JSON has unrecognised value {:?}, using false", raw);
                false
            }),
            None => false,
        };

        Self {
            program_catalog_path,
            pretty_json,
        }
    }

    pub fn uses_custom_catalog(&self) -> bool {
        self.program_catalog_path.is_some()
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
