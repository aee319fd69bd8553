//! Startup configuration read from the environment.

use std::time::Duration;

use wakeup_audio::AudioConfig;

use crate::error::AppError;

const DEFAULT_SAVE_KEY: &str = "ali_wake_up_state_v3";

/// Server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// `PostgreSQL` URL; snapshots stay in memory when absent.
    pub database_url: Option<String>,
    pub host: String,
    pub port: u16,
    /// Key the game is saved under.
    pub save_key: String,
    /// Upper bound on waiting for a sound effect to finish.
    pub sfx_timeout: Duration,
    /// Upper bound on waiting for playback to start.
    pub playback_timeout: Duration,
}

impl AppConfig {
    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a numeric variable does not parse.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads the configuration through `lookup`, which returns the value of
    /// a variable or `None` when it is unset.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a numeric variable does not parse.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let defaults = AudioConfig::default();
        Ok(Self {
            database_url: lookup("DATABASE_URL").filter(|url| !url.trim().is_empty()),
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_owned()),
            port: parse_or(&lookup, "PORT", 3000)?,
            save_key: lookup("WAKEUP_SAVE_KEY").unwrap_or_else(|| DEFAULT_SAVE_KEY.to_owned()),
            sfx_timeout: millis_or(&lookup, "WAKEUP_SFX_TIMEOUT_MS", defaults.sfx_timeout)?,
            playback_timeout: millis_or(
                &lookup,
                "WAKEUP_PLAYBACK_TIMEOUT_MS",
                defaults.playback_timeout,
            )?,
        })
    }

    /// The audio configuration with this config's timeouts applied.
    #[must_use]
    pub fn audio(&self) -> AudioConfig {
        AudioConfig {
            sfx_timeout: self.sfx_timeout,
            playback_timeout: self.playback_timeout,
            ..AudioConfig::default()
        }
    }
}

fn parse_or<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
    default: T,
) -> Result<T, AppError>
where
    T::Err: std::fmt::Display,
{
    match lookup(name) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| AppError::Config(format!("{name} must be a valid number: {e}"))),
    }
}

fn millis_or(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
    default: Duration,
) -> Result<Duration, AppError> {
    let fallback = u64::try_from(default.as_millis()).unwrap_or(u64::MAX);
    parse_or(lookup, name, fallback).map(Duration::from_millis)
}
