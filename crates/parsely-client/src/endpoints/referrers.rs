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

//! Referrer breakdown endpoints

use super::{require_non_empty, require_path_segment};
use crate::client::ParselyClient;
use crate::options::{DetailOptions, QueryOptions, ReferrerOptions};
use parsely_core::{Aspect, Endpoint, Meta, RefType, Result};
use parsely_models::{map_records, Post, Record, Referrer};
use serde_json::Value;
use tracing::instrument;

impl ParselyClient {
  /// Top referrers of one type, optionally narrowed to a section, tag or domain
  ///
  /// # Examples
  ///
  /// ```rust,no_run
  /// # use parsely_client::{ParselyClient, ReferrerOptions};
  /// # use parsely_core::RefType;
  /// # async fn run(client: ParselyClient) -> parsely_core::Result<()> {
  /// let social = client.referrers(RefType::Social, &ReferrerOptions::new().tag("copyright")).await?;
  /// for r in &social {
  ///     println!("{} ({:?}): {:?}", r.name, r.ref_type, r.hits);
  /// }
  /// # Ok(())
  /// # }
  /// ```
  #[instrument(skip(self, options), fields(ref_type = %ref_type))]
  pub async fn referrers(&self, ref_type: RefType, options: &ReferrerOptions) -> Result<Vec<Referrer>> {
    let params = options.to_params()?;
    self.transport.get_data(Endpoint::Referrers(ref_type), params).await
  }

  /// Top records for `aspect` among traffic from one referrer type
  #[instrument(skip(self, options), fields(ref_type = %ref_type, aspect = %aspect))]
  pub async fn referrers_meta(
    &self,
    ref_type: RefType,
    aspect: Aspect,
    options: &ReferrerOptions,
  ) -> Result<Vec<Record>> {
    let params = options.to_params()?;
    let rows: Vec<Value> =
      self.transport.get_data(Endpoint::ReferrersMeta(ref_type, aspect), params).await?;
    map_records(aspect, rows)
  }

  /// Posts of one meta value ranked by referred traffic
  ///
  /// `ref_type` narrows the traffic counted; `None` counts every type.
  #[instrument(skip(self, options), fields(meta = %meta))]
  pub async fn referrers_meta_detail(
    &self,
    value: &str,
    meta: Meta,
    ref_type: Option<RefType>,
    options: &ReferrerOptions,
  ) -> Result<Vec<Post>> {
    require_path_segment(meta.as_str(), value)?;
    let mut params = options.to_params()?;
    if let Some(ref_type) = ref_type {
      params.insert("ref_type".to_string(), ref_type.to_string());
    }
    self.transport.get_data(Endpoint::ReferrersMetaDetail(meta, value.to_string()), params).await
  }

  /// Referrers of a single post
  #[instrument(skip(self, options))]
  pub async fn referrers_post_detail(
    &self,
    url: &str,
    options: &DetailOptions,
  ) -> Result<Vec<Referrer>> {
    require_non_empty("url", url)?;
    let mut params = options.to_params()?;
    params.insert("url".to_string(), url.to_string());
    self.transport.get_data(Endpoint::ReferrersPostDetail, params).await
  }
}
