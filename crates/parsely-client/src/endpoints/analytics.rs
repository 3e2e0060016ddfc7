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

//! Content performance endpoints
//!
//! - `/analytics/{aspect}`: top posts, authors, sections, topics or tags
//! - `/analytics/post/detail`: one post's record
//! - `/analytics/{meta}/{value}/detail`: posts for one author, section, ...

use super::{first, require_non_empty, require_path_segment};
use crate::client::ParselyClient;
use crate::options::{AnalyticsOptions, DetailOptions, QueryOptions};
use parsely_core::{Aspect, Endpoint, Meta, Result};
use parsely_models::{map_records, Post, Record};
use serde_json::Value;
use tracing::instrument;

impl ParselyClient {
  /// Top records for `aspect`, in API order
  ///
  /// # Examples
  ///
  /// ```rust,no_run
  /// # use parsely_client::{AnalyticsOptions, ParselyClient};
  /// # use parsely_core::{Aspect, Sort};
  /// # async fn run(client: ParselyClient) -> parsely_core::Result<()> {
  /// let posts = client
  ///     .analytics(Aspect::Posts, &AnalyticsOptions::new().days(3).sort(Sort::Hits).limit(10))
  ///     .await?;
  /// println!("top post: {:?}", posts.first().and_then(|r| r.title()));
  /// # Ok(())
  /// # }
  /// ```
  #[instrument(skip(self, options), fields(aspect = %aspect))]
  pub async fn analytics(&self, aspect: Aspect, options: &AnalyticsOptions) -> Result<Vec<Record>> {
    let params = options.to_params()?;
    let rows: Vec<Value> = self.transport.get_data(Endpoint::Analytics(aspect), params).await?;
    map_records(aspect, rows)
  }

  /// The record of a single post, looked up by URL
  #[instrument(skip(self, options))]
  pub async fn post_detail(&self, url: &str, options: &DetailOptions) -> Result<Post> {
    require_non_empty("url", url)?;
    let mut params = options.to_params()?;
    params.insert("url".to_string(), url.to_string());

    let posts: Vec<Post> = self.transport.get_data(Endpoint::PostDetail, params).await?;
    first(posts)
  }

  /// Posts attributed to one meta value, e.g. every post in a section
  ///
  /// `meta_detail("Technology Lab", Meta::Section, ..)` lists posts whose
  /// `section` is `Technology Lab`.
  #[instrument(skip(self, options), fields(meta = %meta))]
  pub async fn meta_detail(
    &self,
    value: &str,
    meta: Meta,
    options: &AnalyticsOptions,
  ) -> Result<Vec<Post>> {
    require_path_segment(meta.as_str(), value)?;
    let params = options.to_params()?;
    self.transport.get_data(Endpoint::MetaDetail(meta, value.to_string()), params).await
  }
}
