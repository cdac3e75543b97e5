use axum::http::HeaderValue;
use nonzero_ext::nonzero;
use std::net::SocketAddr;
use std::num::NonZeroU32;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} has an invalid value {value:?}: {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub environment: String, // for dev its 'development' and for prod anything else
    pub admin_token: Option<String>, // bearer secret for reading the contact inbox
    pub frontend_origin: Option<HeaderValue>, // cors origin, any origin when unset
    pub contact_rate_limit_per_minute: NonZeroU32,
    pub trust_forwarded_for: bool, // only behind a proxy that overwrites X-Forwarded-For
    pub sentry_dsn: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: "database.db".to_string(),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            environment: "development".to_string(),
            admin_token: None,
            frontend_origin: None,
            contact_rate_limit_per_minute: nonzero!(5u32),
            trust_forwarded_for: false,
            sentry_dsn: None,
        }
    }
}

impl AppConfig {
    /// Reads the configuration from the process environment. Call
    /// `dotenvy::dotenv()` first if a `.env` file should be honoured.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`AppConfig::from_env`] but with an injectable variable source.
    /// Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let defaults = Self::default();

        let bind_addr = match get("BIND_ADDR") {
            Some(value) => value.parse().map_err(|e: std::net::AddrParseError| ConfigError::Invalid {
                name: "BIND_ADDR",
                value: value.clone(),
                reason: e.to_string(),
            })?,
            None => defaults.bind_addr,
        };

        let frontend_origin = match get("FRONTEND_URL") {
            Some(value) => Some(HeaderValue::from_str(value.trim_end_matches('/')).map_err(|e| {
                ConfigError::Invalid {
                    name: "FRONTEND_URL",
                    value: value.clone(),
                    reason: e.to_string(),
                }
            })?),
            None => None,
        };

        let contact_rate_limit_per_minute = match get("CONTACT_RATE_LIMIT_PER_MINUTE") {
            Some(value) => value
                .parse::<NonZeroU32>()
                .map_err(|e| ConfigError::Invalid {
                    name: "CONTACT_RATE_LIMIT_PER_MINUTE",
                    value: value.clone(),
                    reason: e.to_string(),
                })?,
            None => defaults.contact_rate_limit_per_minute,
        };

        let trust_forwarded_for = match get("TRUST_FORWARDED_FOR") {
            Some(value) => parse_flag(&value).ok_or_else(|| ConfigError::Invalid {
                name: "TRUST_FORWARDED_FOR",
                value: value.clone(),
                reason: "expected true or false".to_string(),
            })?,
            None => defaults.trust_forwarded_for,
        };

        Ok(Self {
            database_url: get("DATABASE_URL").unwrap_or(defaults.database_url),
            bind_addr,
            environment: get("ENVIRONMENT").unwrap_or(defaults.environment),
            admin_token: get("CONTACT_ADMIN_TOKEN"),
            frontend_origin,
            contact_rate_limit_per_minute,
            trust_forwarded_for,
            sentry_dsn: get("SENTRY_DSN"),
        })
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
