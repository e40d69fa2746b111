use crate::{
    api::ApiClient,
    config::ConfigStore,
    views::format::{parse_locale, TimestampFormatter},
};
use anyhow::{anyhow, Context, Result};
use chrono::Locale;
use std::time::Duration;

/// Options shared by every subcommand.
#[derive(Debug, Clone)]
pub struct GlobalArgs {
    pub base_url: String,
    pub timeout: Duration,
    pub locale: Locale,
}

impl GlobalArgs {
    /// # Errors
    /// Returns an error if the locale name is unknown.
    pub fn new(base_url: String, timeout_secs: u64, locale: &str) -> Result<Self> {
        let locale = parse_locale(locale).map_err(|e| anyhow!(e))?;
        Ok(Self {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
            locale,
        })
    }

    /// Builds an API client over a fresh config store seeded with `base_url`.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn client(&self) -> Result<ApiClient> {
        ApiClient::with_timeout(ConfigStore::new(self.base_url.clone()), self.timeout)
            .context("failed to build HTTP client")
    }

    #[must_use]
    pub fn formatter(&self) -> TimestampFormatter {
        TimestampFormatter::new(self.locale)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_global_args() {
        let args = GlobalArgs::new("http://localhost:5000".to_string(), 3, "de_DE").unwrap();
        assert_eq!(args.timeout, Duration::from_secs(3));
        assert_eq!(args.locale, Locale::de_DE);

        let client = args.client().unwrap();
        assert_eq!(client.config().get(), "http://localhost:5000");
    }

    #[test]
    fn test_unknown_locale() {
        let err = GlobalArgs::new("http://localhost:5000".to_string(), 3, "xx_NOPE").unwrap_err();
        assert!(err.to_string().contains("xx_NOPE"));
    }
}
