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

//! The Parse.ly client handle

use crate::transport::Transport;
use crate::user::User;
use parsely_core::{Config, Result};
use std::sync::Arc;

/// Main Parse.ly API client
///
/// Exposes one async method per API endpoint; the methods live with their
/// endpoint family under [`crate::endpoints`]. Every method validates its
/// options, then performs exactly one HTTP request.
///
/// The client is cheap to clone: clones share the connection pool and the
/// immutable credential pair.
///
/// # Examples
///
/// ```rust,no_run
/// use parsely_client::{AnalyticsOptions, ParselyClient};
/// use parsely_core::{Aspect, Config};
///
/// # async fn run() -> parsely_core::Result<()> {
/// let config = Config::new("arstechnica.com").with_secret("secret");
/// let client = ParselyClient::new(config)?;
///
/// let authors = client.analytics(Aspect::Authors, &AnalyticsOptions::new().days(7)).await?;
/// for row in &authors {
///     println!("{}: {:?}", row.name(), row.hits());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct ParselyClient {
  pub(crate) transport: Arc<Transport>,
}

impl ParselyClient {
  /// Create a new Parse.ly API client
  ///
  /// # Errors
  ///
  /// Returns an error if the configuration is invalid or the HTTP client
  /// cannot be created.
  pub fn new(config: Config) -> Result<Self> {
    Ok(Self { transport: Arc::new(Transport::new(&config)?) })
  }

  /// Create a client from `PARSELY_*` environment variables
  pub fn from_env() -> Result<Self> {
    Self::new(Config::from_env()?)
  }

  /// Bind this client to an end-user identifier
  ///
  /// The uuid is caller-assigned and is not checked against anything.
  pub fn user(&self, uuid: impl Into<String>) -> User<'_> {
    User::new(self, uuid)
  }

  /// The API key requests are made with
  pub fn api_key(&self) -> &str {
    self.transport.api_key()
  }

  /// The underlying transport
  pub fn transport(&self) -> &Transport {
    &self.transport
  }
}

impl std::fmt::Debug for ParselyClient {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("ParselyClient").field("transport", &self.transport).finish()
  }
}
