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

use super::{date_filter, print_json, PeriodArgs, PublishArgs};
use anyhow::Result;
use clap::Args;
use parsely_client::{Aspect, DetailOptions, Meta, ParselyClient, RefType, ReferrerOptions};

/// Section, tag and domain filters
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
  #[arg(long)]
  section: Option<String>,

  #[arg(long)]
  tag: Option<String>,

  /// Referring domain, e.g. t.co
  #[arg(long)]
  domain: Option<String>,

  #[command(flatten)]
  period: PeriodArgs,

  #[command(flatten)]
  publish: PublishArgs,
}

impl FilterArgs {
  fn options(&self) -> ReferrerOptions {
    ReferrerOptions {
      dates: date_filter(&self.period, Some(&self.publish)),
      section: self.section.clone(),
      tag: self.tag.clone(),
      domain: self.domain.clone(),
    }
  }
}

#[derive(Args, Debug)]
pub struct ReferrersCommand {
  /// social, search, other, internal or direct
  #[arg(long, default_value_t = RefType::Social)]
  ref_type: RefType,

  #[command(flatten)]
  filters: FilterArgs,
}

impl ReferrersCommand {
  pub async fn execute(self, client: &ParselyClient) -> Result<()> {
    let referrers = client.referrers(self.ref_type, &self.filters.options()).await?;
    print_json(&referrers)
  }
}

#[derive(Args, Debug)]
pub struct ReferrersMetaCommand {
  #[arg(long, default_value_t = RefType::Social)]
  ref_type: RefType,

  #[arg(default_value_t = Aspect::Posts)]
  aspect: Aspect,

  #[command(flatten)]
  filters: FilterArgs,
}

impl ReferrersMetaCommand {
  pub async fn execute(self, client: &ParselyClient) -> Result<()> {
    let records = client.referrers_meta(self.ref_type, self.aspect, &self.filters.options()).await?;
    print_json(&records)
  }
}

#[derive(Args, Debug)]
pub struct ReferrersMetaDetailCommand {
  /// Author, section, topic or tag name
  value: String,

  #[arg(long)]
  meta: Meta,

  /// Count only this referrer type
  #[arg(long)]
  ref_type: Option<RefType>,

  #[command(flatten)]
  filters: FilterArgs,
}

impl ReferrersMetaDetailCommand {
  pub async fn execute(self, client: &ParselyClient) -> Result<()> {
    let posts = client
      .referrers_meta_detail(&self.value, self.meta, self.ref_type, &self.filters.options())
      .await?;
    print_json(&posts)
  }
}

#[derive(Args, Debug)]
pub struct ReferrersPostDetailCommand {
  /// Canonical URL of the post
  url: String,

  #[command(flatten)]
  period: PeriodArgs,
}

impl ReferrersPostDetailCommand {
  pub async fn execute(self, client: &ParselyClient) -> Result<()> {
    let options = DetailOptions { dates: date_filter(&self.period, None) };
    let referrers = client.referrers_post_detail(&self.url, &options).await?;
    print_json(&referrers)
  }
}
