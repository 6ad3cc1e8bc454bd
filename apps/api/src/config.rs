use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
///
/// The provider credential is intentionally optional: the service boots
/// without it so `/health` can report the misconfiguration, and the analyze
/// endpoint refuses requests until it is set.
#[derive(Debug, Clone)]
pub struct Config {
    pub anthropic_api_key: Option<String>,
    pub static_index: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            anthropic_api_key: std::env::var("ANTHROPIC_API_KEY")
                .ok()
                .filter(|k| !k.trim().is_empty()),
            static_index: std::env::var("STATIC_INDEX")
                .unwrap_or_else(|_| "static/index.html".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

#[cfg(test)]
impl Config {
    /// Fixed config for handler tests — no .env lookup, no real credential.
    pub fn for_tests(api_key: Option<&str>) -> Self {
        Config {
            anthropic_api_key: api_key.map(str::to_string),
            static_index: "static/index.html".to_string(),
            port: 8080,
            rust_log: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Config;

    #[test]
    fn test_for_tests_carries_key() {
        let config = Config::for_tests(Some("sk-ant-api03-abcdef"));
        assert_eq!(
            config.anthropic_api_key.as_deref(),
            Some("sk-ant-api03-abcdef")
        );
        assert!(Config::for_tests(None).anthropic_api_key.is_none());
    }
}
