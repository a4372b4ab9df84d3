use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
///
/// Provider API keys are optional at startup: a missing key does not prevent
/// the process from booting, it makes every call through that provider fail
/// into the endpoint's documented error or fallback path.
#[derive(Debug, Clone)]
pub struct Config {
    pub groq_api_key: String,
    pub rapidapi_key: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            groq_api_key: optional_env("GROQ_API_KEY"),
            rapidapi_key: optional_env("RAPIDAPI_KEY"),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

// Missing keys are reported after logging is initialized, in main.
fn optional_env(key: &str) -> String {
    match std::env::var(key) {
        Ok(value) if !value.trim().is_empty() => value,
        _ => String::new(),
    }
}
