//! Runtime configuration for the guessing-game server.

use once_cell::sync::Lazy;
use std::env;

#[derive(Debug)]
pub struct Settings {
    /// Guesses allowed per game before the session closes.
    pub max_guesses: u32,
    /// Access-token lifetime (minutes).
    pub token_ttl_minutes: i64,
}

impl Settings {
    fn from_env() -> Self {
        let max_guesses = env::var("MAX_GUESSES")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(8);

        let token_ttl_minutes = env::var("TOKEN_TTL_MINUTES")
            .ok()
            .and_then(|v| v.parse::<i64>().ok())
            .unwrap_or(24 * 60); // 1 day default

        Settings {
            max_guesses,
            token_ttl_minutes,
        }
    }
}

static SETTINGS: Lazy<Settings> = Lazy::new(Settings::from_env);

pub fn settings() -> &'static Settings {
    &SETTINGS
}
