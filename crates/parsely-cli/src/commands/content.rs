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
use anyhow::{bail, Result};
use clap::Args;
use parsely_client::{
  Aspect, PageOptions, ParselyClient, RealtimeOptions, RealtimeWindow, SharesOptions,
};

#[derive(Args, Debug)]
pub struct SharesCommand {
  #[arg(default_value_t = Aspect::Posts)]
  aspect: Aspect,

  /// Totals for a single post instead of a listing
  #[arg(long)]
  post: Option<String>,

  #[command(flatten)]
  period: PeriodArgs,

  #[command(flatten)]
  publish: PublishArgs,

  #[command(flatten)]
  paging: PagingArgs,
}

impl SharesCommand {
  pub async fn execute(self, client: &ParselyClient) -> Result<()> {
    let options = SharesOptions {
      aspect: self.aspect,
      post: self.post,
      dates: date_filter(&self.period, Some(&self.publish)),
      paging: self.paging.into(),
    };
    let shares = client.shares(&options).await?;
    print_json(&shares)
  }
}

#[derive(Args, Debug)]
pub struct RealtimeCommand {
  #[arg(default_value_t = Aspect::Posts)]
  aspect: Aspect,

  /// Trailing window such as 30m or 6h
  #[arg(long)]
  time: Option<RealtimeWindow>,

  #[command(flatten)]
  paging: PagingArgs,
}

impl RealtimeCommand {
  pub async fn execute(self, client: &ParselyClient) -> Result<()> {
    let options = RealtimeOptions { window: self.time, paging: self.paging.into() };
    let records = client.realtime(self.aspect, &options).await?;
    print_json(&records)
  }
}

#[derive(Args, Debug)]
pub struct RelatedCommand {
  /// Post URL to find neighbours for
  #[arg(required_unless_present = "uuid", conflicts_with = "uuid")]
  url: Option<String>,

  /// Recommend for a user instead of a URL
  #[arg(long)]
  uuid: Option<String>,

  /// Look-back window in days
  #[arg(long)]
  days: Option<u32>,

  #[command(flatten)]
  paging: PagingArgs,
}

impl RelatedCommand {
  pub async fn execute(self, client: &ParselyClient) -> Result<()> {
    let options = PageOptions { days: self.days, paging: self.paging.into() };
    let posts = match (self.url, self.uuid) {
      (Some(url), None) => client.related(&url, &options).await?,
      (None, Some(uuid)) => client.user(uuid).related(&options).await?,
      _ => bail!("give either a URL or --uuid"),
    };
    print_json(&posts)
  }
}

#[derive(Args, Debug)]
pub struct SearchCommand {
  /// Search terms
  query: String,

  #[command(flatten)]
  paging: PagingArgs,
}

impl SearchCommand {
  pub async fn execute(self, client: &ParselyClient) -> Result<()> {
    let options = PageOptions { days: None, paging: self.paging.into() };
    let posts = client.search(&self.query, &options).await?;
    print_json(&posts)
  }
}
