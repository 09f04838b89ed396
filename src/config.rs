use anyhow::{anyhow, Context, Result};
use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-pro";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Process configuration, read once at startup.
#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub model: String,
    pub api_base: String,
    pub host: String,
    pub port: u16,
    pub request_timeout: Duration,
    pub temperature: Option<f32>,
    pub top_p: Option<f32>,
    pub max_tokens: Option<u32>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_key = get("GEMINI_API_KEY")
            .ok_or_else(|| anyhow!("GEMINI_API_KEY must be set"))?;

        let timeout_secs = parse_opt::<u64>(&get, "REQUEST_TIMEOUT_SECS")?
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Ok(Self {
            api_key,
            model: get("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            api_base: get("GEMINI_API_BASE")
                .map(|base| base.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            host: get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: parse_opt(&get, "PORT")?.unwrap_or(DEFAULT_PORT),
            request_timeout: Duration::from_secs(timeout_secs),
            temperature: parse_opt(&get, "TEMPERATURE")?,
            top_p: parse_opt(&get, "TOP_P")?,
            max_tokens: parse_opt(&get, "MAX_TOKENS")?,
        })
    }
}

fn parse_opt<T>(get: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    get(key)
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .with_context(|| format!("invalid value for {}: {:?}", key, raw))
        })
        .transpose()
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("api_base", &self.api_base)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("request_timeout", &self.request_timeout)
            .field("temperature", &self.temperature)
            .field("top_p", &self.top_p)
            .field("max_tokens", &self.max_tokens)
            .finish()
    }
}
