//! Client configuration resolved from build-time environment variables.
//!
//! The WASM bundle has no process environment at runtime, so values are
//! captured with `option_env!` when the crate is compiled and parsed into
//! a typed [`ClientConfig`] once at app start.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE: &str = "";
pub const DEFAULT_LOGIN_REDIRECT_DELAY_MS: u32 = 2_000;
pub const DEFAULT_TOAST_DURATION_MS: u32 = 4_000;

/// Configuration value that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("config parse failed: {key}={value:?} is not a valid duration in milliseconds")]
    InvalidDuration { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix for every API path, without a trailing slash. Empty means same origin.
    pub api_base: String,
    /// Pause between a completed registration and the jump to `/login`.
    pub login_redirect_delay_ms: u32,
    /// How long a toast stays visible before auto-dismissing.
    pub toast_duration_ms: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_owned(),
            login_redirect_delay_ms: DEFAULT_LOGIN_REDIRECT_DELAY_MS,
            toast_duration_ms: DEFAULT_TOAST_DURATION_MS,
        }
    }
}

impl ClientConfig {
    /// Build typed config from the build-time environment.
    ///
    /// Optional:
    /// - `PAWCARE_API_BASE`: API origin, default same origin
    /// - `PAWCARE_LOGIN_REDIRECT_DELAY_MS`: default 2000
    /// - `PAWCARE_TOAST_DURATION_MS`: default 4000
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a duration variable is set but not a `u32`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| match key {
            "PAWCARE_API_BASE" => option_env!("PAWCARE_API_BASE"),
            "PAWCARE_LOGIN_REDIRECT_DELAY_MS" => option_env!("PAWCARE_LOGIN_REDIRECT_DELAY_MS"),
            "PAWCARE_TOAST_DURATION_MS" => option_env!("PAWCARE_TOAST_DURATION_MS"),
            _ => None,
        })
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a duration value is present but unparseable.
    pub fn from_lookup<'a, F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<&'a str>,
    {
        let api_base = lookup("PAWCARE_API_BASE")
            .map(str::trim)
            .unwrap_or(DEFAULT_API_BASE)
            .trim_end_matches('/')
            .to_owned();
        let login_redirect_delay_ms = parse_millis(
            "PAWCARE_LOGIN_REDIRECT_DELAY_MS",
            lookup("PAWCARE_LOGIN_REDIRECT_DELAY_MS"),
            DEFAULT_LOGIN_REDIRECT_DELAY_MS,
        )?;
        let toast_duration_ms =
            parse_millis("PAWCARE_TOAST_DURATION_MS", lookup("PAWCARE_TOAST_DURATION_MS"), DEFAULT_TOAST_DURATION_MS)?;

        Ok(Self { api_base, login_redirect_delay_ms, toast_duration_ms })
    }

    /// Join `path` onto the configured API base.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.api_base)
    }
}

fn parse_millis(key: &'static str, raw: Option<&str>, default: u32) -> Result<u32, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(default),
        Some(value) => value
            .parse::<u32>()
            .map_err(|_| ConfigError::InvalidDuration { key, value: value.to_owned() }),
    }
}
