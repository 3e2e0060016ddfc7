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

pub mod analytics;
pub mod content;
pub mod referrers;
pub mod user;

use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;
use parsely_client::Paging;
use parsely_core::DateFilter;
use serde::Serialize;

/// Traffic period flags
#[derive(Args, Debug, Clone, Default)]
pub struct PeriodArgs {
  /// Trailing number of days of traffic
  #[arg(long)]
  pub days: Option<u32>,

  /// First day of traffic counted (YYYY-MM-DD)
  #[arg(long)]
  pub period_start: Option<NaiveDate>,

  /// Last day of traffic counted (YYYY-MM-DD)
  #[arg(long)]
  pub period_end: Option<NaiveDate>,
}

/// Publish window flags
#[derive(Args, Debug, Clone, Default)]
pub struct PublishArgs {
  /// Earliest publish date (YYYY-MM-DD)
  #[arg(long)]
  pub pub_start: Option<NaiveDate>,

  /// Latest publish date (YYYY-MM-DD)
  #[arg(long)]
  pub pub_end: Option<NaiveDate>,

  /// Single publish date (YYYY-MM-DD)
  #[arg(long, conflicts_with_all = ["pub_start", "pub_end"])]
  pub pub_date: Option<NaiveDate>,
}

/// Pagination flags
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct PagingArgs {
  /// Rows per page
  #[arg(short, long)]
  pub limit: Option<u32>,

  /// Page number, starting at 1
  #[arg(long)]
  pub page: Option<u32>,
}

impl From<PagingArgs> for Paging {
  fn from(args: PagingArgs) -> Self {
    Paging { limit: args.limit, page: args.page }
  }
}

/// Merge period and publish flags into one filter; the client validates the result
pub fn date_filter(period: &PeriodArgs, publish: Option<&PublishArgs>) -> DateFilter {
  let publish = publish.cloned().unwrap_or_default();
  DateFilter {
    days: period.days,
    period_start: period.period_start,
    period_end: period.period_end,
    pub_start: publish.pub_start,
    pub_end: publish.pub_end,
    pub_date: publish.pub_date,
  }
}

/// Write a response to stdout as pretty JSON
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
  println!("{}", serde_json::to_string_pretty(value)?);
  Ok(())
}
