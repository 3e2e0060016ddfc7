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

//! Related-content and search endpoints
//!
//! Both return posts and neither needs the API secret.

use super::require_non_empty;
use crate::client::ParselyClient;
use crate::options::{PageOptions, QueryOptions};
use parsely_core::{Endpoint, Error, Result};
use parsely_models::Post;
use tracing::instrument;

impl ParselyClient {
  /// Posts related to the post at `url`
  #[instrument(skip(self, options))]
  pub async fn related(&self, url: &str, options: &PageOptions) -> Result<Vec<Post>> {
    require_non_empty("url", url)?;
    self.related_by("url", url, options).await
  }

  /// Full-text search over the site's posts
  #[instrument(skip(self, options))]
  pub async fn search(&self, query: &str, options: &PageOptions) -> Result<Vec<Post>> {
    require_non_empty("query", query)?;
    if options.days.is_some() {
      return Err(Error::invalid("search does not accept days"));
    }
    let mut params = options.to_params()?;
    params.insert("q".to_string(), query.to_string());
    self.transport.get_data(Endpoint::Search, params).await
  }

  /// `/related` keyed either by `url` or by a user's `uuid`
  pub(crate) async fn related_by(
    &self,
    key: &str,
    value: &str,
    options: &PageOptions,
  ) -> Result<Vec<Post>> {
    let mut params = options.to_params()?;
    params.insert(key.to_string(), value.to_string());
    self.transport.get_data(Endpoint::Related, params).await
  }
}
