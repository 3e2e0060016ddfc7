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

//! Per-user recommendation helper

use crate::client::ParselyClient;
use crate::endpoints::require_non_empty;
use crate::options::PageOptions;
use crate::transport::Params;
use parsely_core::{Endpoint, Result};
use parsely_models::{History, Post, TrainResponse};
use tracing::{debug, instrument};

/// A client bound to one end user
///
/// Borrows the client; dropping a `User` leaves the client untouched.
///
/// # Examples
///
/// ```rust,no_run
/// # use parsely_client::{PageOptions, ParselyClient};
/// # async fn run(client: ParselyClient) -> parsely_core::Result<()> {
/// let user = client.user("user1234");
/// user.train("http://arstechnica.com/gadgets/2013/04/some-post/").await?;
///
/// let history = user.history().await?;
/// let picks = user.related(&PageOptions::new().limit(5)).await?;
/// println!("{} viewed {} urls, {} picks", history.uuid, history.urls.len(), picks.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct User<'a> {
  client: &'a ParselyClient,
  uuid: String,
}

impl<'a> User<'a> {
  /// Bind `client` to the user identified by `uuid`
  pub fn new(client: &'a ParselyClient, uuid: impl Into<String>) -> Self {
    Self { client, uuid: uuid.into() }
  }

  /// The caller-assigned user identifier
  pub fn uuid(&self) -> &str {
    &self.uuid
  }

  /// Record that this user viewed `url`
  ///
  /// Returns the API's acknowledgment. A request the API refuses comes back
  /// as an error rather than `Ok(false)`.
  #[instrument(skip(self), fields(uuid = %self.uuid))]
  pub async fn train(&self, url: &str) -> Result<bool> {
    require_non_empty("url", url)?;
    let mut params = self.params();
    params.insert("url".to_string(), url.to_string());

    let ack: TrainResponse = self.client.transport.get(Endpoint::Profile, params).await?;
    debug!("Training acknowledged: {}", ack.success);
    Ok(ack.success)
  }

  /// URLs this user has been recorded as viewing
  #[instrument(skip(self), fields(uuid = %self.uuid))]
  pub async fn history(&self) -> Result<History> {
    self.client.transport.get_data(Endpoint::History, self.params()).await
  }

  /// Posts recommended from this user's history
  #[instrument(skip(self, options), fields(uuid = %self.uuid))]
  pub async fn related(&self, options: &PageOptions) -> Result<Vec<Post>> {
    self.client.related_by("uuid", &self.uuid, options).await
  }

  fn params(&self) -> Params {
    let mut params = Params::new();
    params.insert("uuid".to_string(), self.uuid.clone());
    params
  }
}
