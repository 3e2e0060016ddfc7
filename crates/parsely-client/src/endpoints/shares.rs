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

//! `/shares/{aspect}` and `/shares/post/detail`

use super::first;
use crate::client::ParselyClient;
use crate::options::{QueryOptions, SharesOptions};
use parsely_core::{Endpoint, Result};
use parsely_models::{map_records, ShareCounts, Shares};
use serde_json::Value;
use tracing::instrument;

impl ParselyClient {
  /// Social shares, either ranked by aspect or totalled for one post
  ///
  /// With `options.post` set the result is [`Shares::Post`]; otherwise it
  /// is a [`Shares::List`] grouped by `options.aspect`.
  #[instrument(skip(self, options), fields(aspect = %options.aspect, post = options.post.is_some()))]
  pub async fn shares(&self, options: &SharesOptions) -> Result<Shares> {
    let params = options.to_params()?;

    if options.post.is_some() {
      let rows: Vec<ShareCounts> = self.transport.get_data(Endpoint::SharesPostDetail, params).await?;
      return Ok(Shares::Post(first(rows)?));
    }

    let rows: Vec<Value> = self.transport.get_data(Endpoint::Shares(options.aspect), params).await?;
    Ok(Shares::List(map_records(options.aspect, rows)?))
  }
}
