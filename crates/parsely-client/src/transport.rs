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

//! HTTP transport layer for Parse.ly API requests

use parsely_core::{Config, Endpoint, Error, Result};
use parsely_models::{ApiErrorBody, Envelope};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, error, instrument};
use url::Url;

/// Query parameters of a single request, credentials excluded
pub type Params = HashMap<String, String>;

/// HTTP transport layer for making requests to the Parse.ly API
///
/// Holds the connection pool and the credential pair. Every call performs
/// exactly one GET; there are no retries.
pub struct Transport {
  client: Client,
  base_url: Url,
  api_key: String,
  secret: Option<String>,
  timeout: Duration,
}

impl Transport {
  /// Create a new transport instance
  pub fn new(config: &Config) -> Result<Self> {
    let config = config.clone().validated()?;
    let timeout = Duration::from_secs(config.timeout_secs);

    let client = Client::builder()
      .timeout(timeout)
      .user_agent(concat!("parsely-client/", env!("CARGO_PKG_VERSION")))
      .build()
      .map_err(|e| Error::Http(format!("Failed to create HTTP client: {}", e)))?;

    let base_url = Url::parse(&config.base_url)
      .map_err(|e| Error::Config(format!("Invalid base URL: {}", e)))?;

    Ok(Self { client, base_url, api_key: config.api_key, secret: config.secret, timeout })
  }

  /// GET `endpoint` and deserialize the whole body
  #[instrument(skip(self, params), fields(endpoint = %endpoint))]
  pub async fn get<T>(&self, endpoint: Endpoint, params: Params) -> Result<T>
  where
    T: DeserializeOwned,
  {
    let url = self.build_url(&endpoint, &params)?;
    debug!("Making request to: {}", redact(&url));

    let response = self
      .client
      .get(url)
      .send()
      .await
      .map_err(|e| Error::Http(format!("Request failed: {}", e)))?;

    let status = response.status();
    let text = response
      .text()
      .await
      .map_err(|e| Error::Http(format!("Failed to read response body: {}", e)))?;

    debug!("Response status {} with body length {} bytes", status, text.len());

    check_api_error(status, &text)?;

    serde_json::from_str::<T>(&text).map_err(|e| {
      error!("Failed to parse JSON response for {}: {}", endpoint, e);
      Error::Parse(format!("Failed to parse response: {}. Response: {}", e, snippet(&text, 200)))
    })
  }

  /// GET `endpoint` and unwrap the `data` member of the envelope
  pub async fn get_data<T>(&self, endpoint: Endpoint, params: Params) -> Result<T>
  where
    T: DeserializeOwned,
  {
    let envelope: Envelope<T> = self.get(endpoint, params).await?;
    Ok(envelope.data)
  }

  /// Build the full URL for an API request
  ///
  /// Path segments are percent-encoded and query pairs are emitted in key
  /// order, credentials first.
  pub fn build_url(&self, endpoint: &Endpoint, params: &Params) -> Result<Url> {
    let mut url = self.base_url.clone();
    url
      .path_segments_mut()
      .map_err(|_| Error::Config(format!("Base URL {} cannot carry a path", self.base_url)))?
      .pop_if_empty()
      .extend(endpoint.segments());

    let mut pairs: Vec<(&String, &String)> = params.iter().collect();
    pairs.sort();

    {
      let mut query = url.query_pairs_mut();
      query.append_pair("apikey", &self.api_key);
      if endpoint.requires_secret() {
        let secret = self
          .secret
          .as_deref()
          .ok_or_else(|| Error::ApiKey(format!("{} requires an API secret", endpoint)))?;
        query.append_pair("secret", secret);
      }
      for (key, value) in pairs {
        query.append_pair(key, value);
      }
    }

    Ok(url)
  }

  /// The API key requests are made with
  pub fn api_key(&self) -> &str {
    &self.api_key
  }

  /// Get the base URL being used
  pub fn base_url(&self) -> &str {
    self.base_url.as_str()
  }

  /// Get request timeout duration
  pub fn timeout(&self) -> Duration {
    self.timeout
  }
}

impl std::fmt::Debug for Transport {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Transport")
      .field("base_url", &self.base_url.as_str())
      .field("api_key", &self.api_key)
      .field("secret", &self.secret.as_ref().map(|_| "***"))
      .field("timeout", &self.timeout)
      .finish()
  }
}

/// Turn an error status or an explicit `success: false` into `Error::Api`
fn check_api_error(status: StatusCode, text: &str) -> Result<()> {
  let body = ApiErrorBody::from_body(text);

  if !status.is_success() {
    let message = body
      .and_then(|b| b.message)
      .unwrap_or_else(|| snippet(text, 200).to_string());
    error!("Request failed with status {}: {}", status, message);
    return Err(Error::Api { status: status.as_u16(), message });
  }

  if let Some(body) = body.filter(|b| b.success == Some(false)) {
    let status = body.code.unwrap_or(status.as_u16());
    let message = body.message.unwrap_or_else(|| "request was not successful".to_string());
    error!("API reported failure ({}): {}", status, message);
    return Err(Error::Api { status, message });
  }

  Ok(())
}

fn snippet(text: &str, max_chars: usize) -> &str {
  match text.char_indices().nth(max_chars) {
    Some((idx, _)) => &text[..idx],
    None => text,
  }
}

fn redact(url: &Url) -> String {
  let mut shown = url.clone();
  let pairs: Vec<(String, String)> = url
    .query_pairs()
    .map(|(k, v)| {
      let v = if k == "secret" { "***".to_string() } else { v.into_owned() };
      (k.into_owned(), v)
    })
    .collect();
  shown.query_pairs_mut().clear().extend_pairs(pairs);
  shown.to_string()
}
