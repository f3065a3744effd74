//! Client configuration and default resolution

use crate::types::{Currency, Language};
use crate::{PayriffError, Result};
use std::env;
use std::time::Duration;

/// Production API endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.payriff.com/api/v3";

/// Environment variable holding the merchant secret key
pub const SECRET_KEY_ENV: &str = "PAYRIFF_SECRET_KEY";

/// Environment variable holding the default callback URL
pub const CALLBACK_URL_ENV: &str = "PAYRIFF_CALLBACK_URL";

/// Client configuration
///
/// Every field is optional; [`crate::Client::new`] resolves the unset ones to
/// their defaults once, at construction.
#[derive(Clone, Default)]
pub struct Config {
    /// Base URL of the gateway API
    pub base_url: Option<String>,
    /// Merchant secret key, sent verbatim as the `Authorization` header
    pub secret_key: Option<String>,
    /// Callback URL used when a request does not carry its own
    pub callback_url: Option<String>,
    /// Payment page language used when a request does not set one
    pub language: Option<Language>,
    /// Currency used when a request does not set one
    pub currency: Option<Currency>,
    /// Request timeout applied to the HTTP client, none by default
    pub timeout: Option<Duration>,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("base_url", &self.base_url)
            .field("secret_key", &self.secret_key.as_ref().map(|_| "<redacted>"))
            .field("callback_url", &self.callback_url)
            .field("language", &self.language)
            .field("currency", &self.currency)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Config {
    /// Create an empty config, every field resolved to its default
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a config with secret key and callback URL read from
    /// `PAYRIFF_SECRET_KEY` and `PAYRIFF_CALLBACK_URL`
    pub fn from_env() -> Self {
        Self {
            secret_key: non_empty_var(SECRET_KEY_ENV),
            callback_url: non_empty_var(CALLBACK_URL_ENV),
            ..Self::default()
        }
    }

    /// Set the base URL
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the secret key
    pub fn with_secret_key(mut self, key: impl Into<String>) -> Self {
        self.secret_key = Some(key.into());
        self
    }

    /// Set the default callback URL
    pub fn with_callback_url(mut self, url: impl Into<String>) -> Self {
        self.callback_url = Some(url.into());
        self
    }

    /// Set the default language
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }

    /// Set the default currency
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = Some(currency);
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if let Some(url) = &self.base_url {
            if url.is_empty() {
                return Err(PayriffError::config("Base URL cannot be empty"));
            }

            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(PayriffError::config(
                    "Base URL must start with http:// or https://",
                ));
            }

            url::Url::parse(url)
                .map_err(|e| PayriffError::config(format!("Invalid base URL: {}", e)))?;
        }

        Ok(())
    }

    /// Replace every unset field with its default
    pub fn resolve(self) -> Result<ResolvedConfig> {
        self.validate()?;

        let secret_key = self.secret_key.unwrap_or_default();
        if secret_key.is_empty() {
            tracing::warn!("payriff secret key is empty, requests will be rejected");
        }

        Ok(ResolvedConfig {
            base_url: self
                .base_url
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            secret_key,
            callback_url: self.callback_url.filter(|url| !url.is_empty()),
            language: self.language.unwrap_or_default(),
            currency: self.currency.unwrap_or_default(),
            timeout: self.timeout,
        })
    }
}

/// Configuration with every default applied
#[derive(Clone)]
pub struct ResolvedConfig {
    pub base_url: String,
    pub secret_key: String,
    pub callback_url: Option<String>,
    pub language: Language,
    pub currency: Currency,
    pub timeout: Option<Duration>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            secret_key: String::new(),
            callback_url: None,
            language: Language::Az,
            currency: Currency::Azn,
            timeout: None,
        }
    }
}

impl std::fmt::Debug for ResolvedConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolvedConfig")
            .field("base_url", &self.base_url)
            .field("secret_key", &"<redacted>")
            .field("callback_url", &self.callback_url)
            .field("language", &self.language)
            .field("currency", &self.currency)
            .field("timeout", &self.timeout)
            .finish()
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.is_empty())
}
