use crate::retry::RetryConfig;
use crate::submission::SimulatedSubmitter;
use crate::whatsapp;
use anyhow::{Context, Result};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    // WhatsApp hand-off
    pub whatsapp_number: String,

    // Translations (bundled tables when unset)
    pub locales_dir: Option<PathBuf>,

    // Language preference slot
    pub preference_file: PathBuf,

    // Submission channel
    pub submit_delay: Duration,
    pub submit_attempts: u32,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            whatsapp_number: std::env::var("MESSU_WHATSAPP_NUMBER")
                .unwrap_or_else(|_| whatsapp::DEFAULT_NUMBER.to_string()),

            locales_dir: std::env::var("MESSU_LOCALES_DIR").ok().map(PathBuf::from),

            preference_file: std::env::var("MESSU_PREFERENCE_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".messu/preferences.json")),

            submit_delay: Duration::from_millis(parse_var("MESSU_SUBMIT_DELAY_MS", 1500)?),
            submit_attempts: parse_var("MESSU_SUBMIT_ATTEMPTS", 3)?,
        })
    }

    /// The submission channel, waiting the configured delay.
    pub fn submitter(&self) -> SimulatedSubmitter {
        SimulatedSubmitter::new(self.submit_delay)
    }

    /// Submission retry policy with the configured number of attempts.
    pub fn retry(&self) -> RetryConfig {
        RetryConfig {
            max_attempts: self.submit_attempts,
            ..RetryConfig::submission()
        }
    }
}

/// Parse an optional numeric variable; set but unparseable is an error.
fn parse_var<T: std::str::FromStr>(name: &str, default: T) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .with_context(|| format!("{} must be a number, got '{}'", name, value)),
        Err(_) => Ok(default),
    }
}
