//! API key lookup

use std::env;

/// Environment variables checked for the Gemini API key, in order
pub const API_KEY_VARS: [&str; 2] = ["GOOGLE_API_KEY", "GEMINI_API_KEY"];

/// Read the API key from the environment
///
/// Blank values are treated as unset.
pub fn api_key_from_env() -> Option<String> {
    API_KEY_VARS.iter().find_map(|var| {
        env::var(var)
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    })
}

/// Whether an API key is available
pub fn credential_configured() -> bool {
    api_key_from_env().is_some()
}
