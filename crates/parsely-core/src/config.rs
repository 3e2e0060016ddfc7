/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! Configuration management for the Parse.ly client

use crate::error::{Error, Result};
use dotenvy::dotenv;
use serde::Deserialize;
use std::env;
use std::fmt;

/// Main configuration struct for the Parse.ly client
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
  /// Parse.ly API key (the site domain, e.g. `arstechnica.com`)
  pub api_key: String,

  /// Shared secret for the analytics endpoints
  pub secret: Option<String>,

  /// Request timeout in seconds
  pub timeout_secs: u64,

  /// Base URL for the Parse.ly API
  pub base_url: String,
}

impl Config {
  /// Create a config with default values for everything but the key
  pub fn new(api_key: impl Into<String>) -> Self {
    Config {
      api_key: api_key.into(),
      secret: None,
      timeout_secs: crate::DEFAULT_TIMEOUT_SECS,
      base_url: crate::PARSELY_BASE_URL.to_string(),
    }
  }

  /// Load configuration from environment variables
  ///
  /// Reads a `.env` file first if one is present. Only `PARSELY_API_KEY` is
  /// required.
  pub fn from_env() -> Result<Self> {
    dotenv().ok();

    let api_key =
      env::var("PARSELY_API_KEY").map_err(|_| Error::ApiKey("PARSELY_API_KEY not set".to_string()))?;

    let secret = env::var("PARSELY_SECRET").ok().filter(|s| !s.is_empty());

    let timeout_secs = env::var("PARSELY_TIMEOUT_SECS")
      .unwrap_or_else(|_| crate::DEFAULT_TIMEOUT_SECS.to_string())
      .parse()
      .map_err(|_| Error::Config("Invalid PARSELY_TIMEOUT_SECS".to_string()))?;

    let base_url =
      env::var("PARSELY_BASE_URL").unwrap_or_else(|_| crate::PARSELY_BASE_URL.to_string());

    Config { api_key, secret, timeout_secs, base_url }.validated()
  }

  /// Set the shared secret
  pub fn with_secret(mut self, secret: impl Into<String>) -> Self {
    self.secret = Some(secret.into());
    self
  }

  /// Point the client at a different API root (useful for mock servers)
  pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
    self.base_url = base_url.into();
    self
  }

  /// Override the request timeout
  pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
    self.timeout_secs = timeout_secs;
    self
  }

  /// Check the values a client cannot work without
  pub fn validated(self) -> Result<Self> {
    if self.api_key.trim().is_empty() {
      return Err(Error::ApiKey("API key is empty".to_string()));
    }
    if self.timeout_secs == 0 {
      return Err(Error::Config("timeout must be at least one second".to_string()));
    }
    url::Url::parse(&self.base_url)
      .map_err(|e| Error::Config(format!("Invalid base URL {}: {}", self.base_url, e)))?;
    Ok(self)
  }
}

impl fmt::Debug for Config {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Config")
      .field("api_key", &self.api_key)
      .field("secret", &self.secret.as_ref().map(|_| "***"))
      .field("timeout_secs", &self.timeout_secs)
      .field("base_url", &self.base_url)
      .finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_defaults() {
    let config = Config::new("arstechnica.com");
    assert_eq!(config.api_key, "arstechnica.com");
    assert_eq!(config.secret, None);
    assert_eq!(config.timeout_secs, 30);
    assert_eq!(config.base_url, crate::PARSELY_BASE_URL);
  }

  #[test]
  fn test_builders() {
    let config = Config::new("example.com")
      .with_secret("s3cret")
      .with_base_url("http://localhost:8080")
      .with_timeout_secs(5);
    assert_eq!(config.secret.as_deref(), Some("s3cret"));
    assert_eq!(config.base_url, "http://localhost:8080");
    assert_eq!(config.timeout_secs, 5);
    assert!(config.validated().is_ok());
  }

  #[test]
  fn test_validated_rejects_bad_values() {
    assert!(matches!(Config::new("  ").validated(), Err(Error::ApiKey(_))));
    assert!(matches!(Config::new("k").with_timeout_secs(0).validated(), Err(Error::Config(_))));
    assert!(matches!(Config::new("k").with_base_url("not a url").validated(), Err(Error::Config(_))));
  }

  #[test]
  fn test_debug_hides_secret() {
    let shown = format!("{:?}", Config::new("arstechnica.com").with_secret("s3cret"));
    assert!(shown.contains("arstechnica.com"));
    assert!(shown.contains("***"));
    assert!(!shown.contains("s3cret"));
  }
}
