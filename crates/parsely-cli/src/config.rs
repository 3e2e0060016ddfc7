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

use anyhow::{Context, Result};
use clap::Args;
use parsely_core::Config;
use std::fmt;

/// Credential and endpoint overrides; each falls back to its environment variable
#[derive(Args, Clone, Default)]
pub struct CredentialArgs {
  /// Parse.ly API key
  #[arg(long, env = "PARSELY_API_KEY", global = true, hide_env_values = true)]
  pub api_key: Option<String>,

  /// Parse.ly API secret
  #[arg(long, env = "PARSELY_SECRET", global = true, hide_env_values = true)]
  pub secret: Option<String>,

  /// API root
  #[arg(long, env = "PARSELY_BASE_URL", global = true)]
  pub base_url: Option<String>,

  /// Request timeout in seconds
  #[arg(long, env = "PARSELY_TIMEOUT_SECS", global = true)]
  pub timeout_secs: Option<u64>,
}

impl fmt::Debug for CredentialArgs {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("CredentialArgs")
      .field("api_key", &self.api_key)
      .field("secret", &self.secret.as_ref().map(|_| "***"))
      .field("base_url", &self.base_url)
      .field("timeout_secs", &self.timeout_secs)
      .finish()
  }
}

/// Build the client configuration from flags, then the environment
pub fn load(args: &CredentialArgs) -> Result<Config> {
  let api_key = args
    .api_key
    .clone()
    .context("PARSELY_API_KEY environment variable not set and --api-key not given")?;

  let mut config = Config::new(api_key);
  if let Some(secret) = &args.secret {
    config = config.with_secret(secret.clone());
  }
  if let Some(base_url) = &args.base_url {
    config = config.with_base_url(base_url.clone());
  }
  if let Some(timeout_secs) = args.timeout_secs {
    config = config.with_timeout_secs(timeout_secs);
  }

  Ok(config.validated()?)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_load_applies_overrides() {
    let args = CredentialArgs {
      api_key: Some("arstechnica.com".to_string()),
      secret: Some("s3cret".to_string()),
      base_url: Some("http://localhost:9000/v2".to_string()),
      timeout_secs: Some(5),
    };
    let config = load(&args).unwrap();
    assert_eq!(config.api_key, "arstechnica.com");
    assert_eq!(config.secret.as_deref(), Some("s3cret"));
    assert_eq!(config.base_url, "http://localhost:9000/v2");
    assert_eq!(config.timeout_secs, 5);
  }

  #[test]
  fn test_load_requires_api_key() {
    assert!(load(&CredentialArgs::default()).is_err());
  }

  #[test]
  fn test_debug_hides_secret() {
    let args = CredentialArgs { secret: Some("s3cret".to_string()), ..Default::default() };
    let shown = format!("{:?}", args);
    assert!(shown.contains("***"));
    assert!(!shown.contains("s3cret"));
  }
}
