use std::str::FromStr;

use sqlx::postgres::PgSslMode;

/// Deployment environment, read from `APP_ENV`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Environment {
    Production,
    #[default]
    Development,
}

impl Environment {
    /// `production` (case-insensitive) selects [`Environment::Production`];
    /// anything else, including an unset variable, is development.
    pub fn from_value(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.trim().eq_ignore_ascii_case("production") => Environment::Production,
            _ => Environment::Development,
        }
    }

    pub fn is_production(self) -> bool {
        self == Environment::Production
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} has an invalid value '{value}': {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Connection settings for the project store.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Connection string. When absent the driver's `PG*` defaults apply.
    pub url: Option<String>,
    pub environment: Environment,
    pub max_connections: u32,
    /// How long a query waits for a free connection before failing.
    pub acquire_timeout_secs: u64,
    /// Explicit TLS mode; overrides the environment policy when set.
    pub ssl_mode_override: Option<PgSslMode>,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            environment: Environment::default(),
            max_connections: 10,
            acquire_timeout_secs: 5,
            ssl_mode_override: None,
        }
    }
}

impl DatabaseConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                         | Default        |
    /// |---------------------------------|----------------|
    /// | `DATABASE_URL`                  | unset          |
    /// | `APP_ENV`                       | `development`  |
    /// | `DATABASE_MAX_CONNECTIONS`      | `10`           |
    /// | `DATABASE_ACQUIRE_TIMEOUT_SECS` | `5`            |
    /// | `DATABASE_SSL_MODE`             | unset          |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Same as [`DatabaseConfig::from_env`] but reads through `lookup`.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let url = lookup("DATABASE_URL").filter(|v| !v.trim().is_empty());
        let environment = Environment::from_value(lookup("APP_ENV").as_deref());
        let max_connections = parse_var(
            "DATABASE_MAX_CONNECTIONS",
            lookup("DATABASE_MAX_CONNECTIONS"),
            defaults.max_connections,
        )?;
        let acquire_timeout_secs = parse_var(
            "DATABASE_ACQUIRE_TIMEOUT_SECS",
            lookup("DATABASE_ACQUIRE_TIMEOUT_SECS"),
            defaults.acquire_timeout_secs,
        )?;
        let ssl_mode_override = lookup("DATABASE_SSL_MODE")
            .filter(|v| !v.trim().is_empty())
            .map(|v| {
                PgSslMode::from_str(v.trim()).map_err(|e| ConfigError::Invalid {
                    var: "DATABASE_SSL_MODE",
                    value: v.clone(),
                    reason: e.to_string(),
                })
            })
            .transpose()?;

        Ok(Self {
            url,
            environment,
            max_connections,
            acquire_timeout_secs,
            ssl_mode_override,
        })
    }

    /// TLS mode for connections.
    ///
    /// Production verifies the server certificate and host name; every other
    /// environment uses TLS opportunistically without verification.
    pub fn ssl_mode(&self) -> PgSslMode {
        if let Some(mode) = self.ssl_mode_override {
            return mode;
        }
        if self.environment.is_production() {
            PgSslMode::VerifyFull
        } else {
            PgSslMode::Prefer
        }
    }
}

fn parse_var<T>(var: &'static str, value: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match value {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            var,
            value: raw.clone(),
            reason: e.to_string(),
        }),
    }
}
