use std::env;
use std::time::Duration;

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;
const GEMINI_MODEL: &str = "gemini-pro";
const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const GEMINI_TIMEOUT_SECS: u64 = 30;
const PING_MESSAGE: &str = "ping";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub ping_message: String,
    pub gemini: GeminiConfig,
}

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// Without a key every generation request goes straight to the fallback synthesizer.
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: GEMINI_MODEL.to_string(),
            base_url: GEMINI_BASE_URL.to_string(),
            timeout: Duration::from_secs(GEMINI_TIMEOUT_SECS),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: HOST.to_string(),
            port: PORT,
            environment: "development".to_string(),
            ping_message: PING_MESSAGE.to_string(),
            gemini: GeminiConfig::default(),
        }
    }
}

impl AppConfig {
    /// Read settings from the environment, keeping defaults for anything unset or unparseable
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            host: env::var("HOST").unwrap_or(defaults.host),
            port: env::var("PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.port),
            environment: env::var("RUST_ENV").unwrap_or(defaults.environment),
            ping_message: env::var("PING_MESSAGE").unwrap_or(defaults.ping_message),
            gemini: GeminiConfig {
                api_key: env::var("GEMINI_API_KEY")
                    .ok()
                    .map(|k| k.trim().to_string())
                    .filter(|k| !k.is_empty()),
                model: env::var("GEMINI_MODEL").unwrap_or(defaults.gemini.model),
                base_url: env::var("GEMINI_BASE_URL")
                    .map(|u| u.trim_end_matches('/').to_string())
                    .unwrap_or(defaults.gemini.base_url),
                timeout: env::var("GEMINI_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .map(Duration::from_secs)
                    .unwrap_or(defaults.gemini.timeout),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const KEYS: [&str; 8] = [
        "HOST",
        "PORT",
        "RUST_ENV",
        "PING_MESSAGE",
        "GEMINI_API_KEY",
        "GEMINI_MODEL",
        "GEMINI_BASE_URL",
        "GEMINI_TIMEOUT_SECS",
    ];

    fn clear_env() {
        for key in KEYS {
            env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn test_defaults_when_unset() {
        clear_env();
        let config = AppConfig::from_env();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.ping_message, "ping");
        assert!(config.gemini.api_key.is_none());
        assert_eq!(config.gemini.model, "gemini-pro");
        assert_eq!(config.gemini.timeout, Duration::from_secs(30));
    }

    #[test]
    #[serial]
    fn test_reads_overrides_and_ignores_garbage() {
        clear_env();
        env::set_var("PORT", "not-a-port");
        env::set_var("GEMINI_API_KEY", "  ");
        env::set_var("GEMINI_BASE_URL", "http://127.0.0.1:9999/");
        env::set_var("GEMINI_TIMEOUT_SECS", "5");
        env::set_var("PING_MESSAGE", "pong");

        let config = AppConfig::from_env();
        assert_eq!(config.port, 8080);
        assert!(config.gemini.api_key.is_none());
        assert_eq!(config.gemini.base_url, "http://127.0.0.1:9999");
        assert_eq!(config.gemini.timeout, Duration::from_secs(5));
        assert_eq!(config.ping_message, "pong");

        clear_env();
    }
}
