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

use super::{date_filter, print_json, PagingArgs, PeriodArgs, PublishArgs};
use anyhow::Result;
use clap::Args;
use parsely_client::{AnalyticsOptions, Aspect, DetailOptions, Meta, ParselyClient, Sort};

#[derive(Args, Debug)]
pub struct AnalyticsCommand {
  /// posts, authors, sections, topics or tags
  #[arg(default_value_t = Aspect::Posts)]
  aspect: Aspect,

  /// Ordering metric (_hits, engaged_minutes, visitors, shares, fb, tw, li, pi)
  #[arg(long)]
  sort: Option<Sort>,

  #[command(flatten)]
  period: PeriodArgs,

  #[command(flatten)]
  publish: PublishArgs,

  #[command(flatten)]
  paging: PagingArgs,
}

impl AnalyticsCommand {
  pub async fn execute(self, client: &ParselyClient) -> Result<()> {
    let options = AnalyticsOptions {
      dates: date_filter(&self.period, Some(&self.publish)),
      sort: self.sort,
      paging: self.paging.into(),
    };
    let records = client.analytics(self.aspect, &options).await?;
    print_json(&records)
  }
}

#[derive(Args, Debug)]
pub struct PostDetailCommand {
  /// Canonical URL of the post
  url: String,

  #[command(flatten)]
  period: PeriodArgs,
}

impl PostDetailCommand {
  pub async fn execute(self, client: &ParselyClient) -> Result<()> {
    let options = DetailOptions { dates: date_filter(&self.period, None) };
    let post = client.post_detail(&self.url, &options).await?;
    print_json(&post)
  }
}

#[derive(Args, Debug)]
pub struct MetaDetailCommand {
  /// Author, section, topic or tag name
  value: String,

  /// author, section, topic or tag
  #[arg(long)]
  meta: Meta,

  #[arg(long)]
  sort: Option<Sort>,

  #[command(flatten)]
  period: PeriodArgs,

  #[command(flatten)]
  publish: PublishArgs,

  #[command(flatten)]
  paging: PagingArgs,
}

impl MetaDetailCommand {
  pub async fn execute(self, client: &ParselyClient) -> Result<()> {
    let options = AnalyticsOptions {
      dates: date_filter(&self.period, Some(&self.publish)),
      sort: self.sort,
      paging: self.paging.into(),
    };
    let posts = client.meta_detail(&self.value, self.meta, &options).await?;
    print_json(&posts)
  }
}
