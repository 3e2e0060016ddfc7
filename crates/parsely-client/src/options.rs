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

//! Per-endpoint request options
//!
//! Each struct lists the optional parameters one endpoint family accepts.
//! `to_params` validates the combination and renders the query string
//! pairs; nothing is sent if validation fails.

use crate::transport::Params;
use chrono::NaiveDate;
use parsely_core::{DateFilter, Error, RealtimeWindow, Result, Sort};
use serde::{Deserialize, Serialize};

/// Validation and rendering shared by all option structs
pub trait QueryOptions {
  /// Reject combinations the API does not accept
  fn validate(&self) -> Result<()>;

  /// Write this option set's query pairs
  fn append_to(&self, params: &mut Params);

  /// Validate, then render into a fresh parameter map
  fn to_params(&self) -> Result<Params> {
    self.validate()?;
    let mut params = Params::new();
    self.append_to(&mut params);
    Ok(params)
  }
}

/// `limit` and `page`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paging {
  /// Rows per page
  pub limit: Option<u32>,
  /// 1-based page number
  pub page: Option<u32>,
}

impl QueryOptions for Paging {
  fn validate(&self) -> Result<()> {
    if self.limit == Some(0) {
      return Err(Error::invalid("limit must be at least 1"));
    }
    if self.page == Some(0) {
      return Err(Error::invalid("page numbers start at 1"));
    }
    Ok(())
  }

  fn append_to(&self, params: &mut Params) {
    if let Some(limit) = self.limit {
      params.insert("limit".to_string(), limit.to_string());
    }
    if let Some(page) = self.page {
      params.insert("page".to_string(), page.to_string());
    }
  }
}

macro_rules! date_builders {
  () => {
    /// Count the trailing `days` days of traffic
    pub fn days(mut self, days: u32) -> Self {
      self.dates.days = Some(days);
      self
    }

    /// Count traffic between two days, inclusive
    pub fn period(mut self, start: NaiveDate, end: NaiveDate) -> Self {
      self.dates.period_start = Some(start);
      self.dates.period_end = Some(end);
      self
    }
  };
}

macro_rules! publish_builders {
  () => {
    /// Only count posts published between two days, inclusive
    pub fn published(mut self, start: NaiveDate, end: NaiveDate) -> Self {
      self.dates.pub_start = Some(start);
      self.dates.pub_end = Some(end);
      self
    }

    /// Set only the start of the publish window
    pub fn pub_start(mut self, start: NaiveDate) -> Self {
      self.dates.pub_start = Some(start);
      self
    }

    /// Set only the end of the publish window
    pub fn pub_end(mut self, end: NaiveDate) -> Self {
      self.dates.pub_end = Some(end);
      self
    }

    /// Only count posts published on `day`
    pub fn pub_date(mut self, day: NaiveDate) -> Self {
      self.dates.pub_date = Some(day);
      self
    }
  };
}

macro_rules! paging_builders {
  () => {
    /// Rows per page
    pub fn limit(mut self, limit: u32) -> Self {
      self.paging.limit = Some(limit);
      self
    }

    /// 1-based page number
    pub fn page(mut self, page: u32) -> Self {
      self.paging.page = Some(page);
      self
    }
  };
}

/// Options for `analytics` and `meta_detail`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsOptions {
  /// Traffic period and publish window
  pub dates: DateFilter,
  /// Ordering metric
  pub sort: Option<Sort>,
  /// Pagination
  pub paging: Paging,
}

impl AnalyticsOptions {
  /// Empty option set
  pub fn new() -> Self {
    Self::default()
  }

  date_builders!();
  publish_builders!();
  paging_builders!();

  /// Order by `sort`
  pub fn sort(mut self, sort: Sort) -> Self {
    self.sort = Some(sort);
    self
  }
}

impl QueryOptions for AnalyticsOptions {
  fn validate(&self) -> Result<()> {
    self.dates.validate()?;
    self.paging.validate()
  }

  fn append_to(&self, params: &mut Params) {
    self.dates.append_to(params);
    if let Some(sort) = self.sort {
      params.insert("sort".to_string(), sort.to_string());
    }
    self.paging.append_to(params);
  }
}

/// Options for `post_detail` and `referrers_post_detail`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailOptions {
  /// Traffic period; publish filters are not accepted here
  pub dates: DateFilter,
}

impl DetailOptions {
  /// Empty option set
  pub fn new() -> Self {
    Self::default()
  }

  date_builders!();
}

impl QueryOptions for DetailOptions {
  fn validate(&self) -> Result<()> {
    if self.dates != self.dates.period_only() {
      return Err(Error::invalid("detail endpoints do not accept publish date filters"));
    }
    self.dates.validate()
  }

  fn append_to(&self, params: &mut Params) {
    self.dates.append_to(params);
  }
}

/// Options for the referrer listings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferrerOptions {
  /// Traffic period and publish window
  pub dates: DateFilter,
  /// Restrict to one section
  pub section: Option<String>,
  /// Restrict to one tag
  pub tag: Option<String>,
  /// Restrict to one referring domain
  pub domain: Option<String>,
}

impl ReferrerOptions {
  /// Empty option set
  pub fn new() -> Self {
    Self::default()
  }

  date_builders!();
  publish_builders!();

  /// Restrict to one section
  pub fn section(mut self, section: impl Into<String>) -> Self {
    self.section = Some(section.into());
    self
  }

  /// Restrict to one tag
  pub fn tag(mut self, tag: impl Into<String>) -> Self {
    self.tag = Some(tag.into());
    self
  }

  /// Restrict to one referring domain
  pub fn domain(mut self, domain: impl Into<String>) -> Self {
    self.domain = Some(domain.into());
    self
  }
}

impl QueryOptions for ReferrerOptions {
  fn validate(&self) -> Result<()> {
    for (name, value) in [("section", &self.section), ("tag", &self.tag), ("domain", &self.domain)] {
      if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
        return Err(Error::invalid(format!("{} filter is empty", name)));
      }
    }
    self.dates.validate()
  }

  fn append_to(&self, params: &mut Params) {
    self.dates.append_to(params);
    for (name, value) in [("section", &self.section), ("tag", &self.tag), ("domain", &self.domain)] {
      if let Some(value) = value {
        params.insert(name.to_string(), value.clone());
      }
    }
  }
}

/// Options for `shares`
///
/// Setting `post` switches to the single-post detail endpoint, which
/// returns totals instead of a listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharesOptions {
  /// Listing dimension; must stay `posts` when `post` is set
  pub aspect: parsely_core::Aspect,
  /// URL of a single post
  pub post: Option<String>,
  /// Traffic period and publish window
  pub dates: DateFilter,
  /// Pagination
  pub paging: Paging,
}

impl SharesOptions {
  /// Listing of posts by shares
  pub fn new() -> Self {
    Self::default()
  }

  /// Listing grouped by `aspect`
  pub fn aspect(mut self, aspect: parsely_core::Aspect) -> Self {
    self.aspect = aspect;
    self
  }

  /// Totals for one post
  pub fn post(mut self, url: impl Into<String>) -> Self {
    self.post = Some(url.into());
    self
  }

  date_builders!();
  publish_builders!();
  paging_builders!();
}

impl QueryOptions for SharesOptions {
  fn validate(&self) -> Result<()> {
    if let Some(post) = &self.post {
      if post.trim().is_empty() {
        return Err(Error::invalid("post URL is empty"));
      }
      if self.aspect != parsely_core::Aspect::Posts {
        return Err(Error::invalid("post and aspect cannot be combined in a shares query"));
      }
      if self.dates != self.dates.period_only() || self.paging != Paging::default() {
        return Err(Error::invalid(
          "a single-post shares query accepts only days or period_start/period_end",
        ));
      }
    }
    self.dates.validate()?;
    self.paging.validate()
  }

  fn append_to(&self, params: &mut Params) {
    if let Some(post) = &self.post {
      params.insert("url".to_string(), post.clone());
    }
    self.dates.append_to(params);
    self.paging.append_to(params);
  }
}

/// Options for `realtime`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RealtimeOptions {
  /// Trailing window, API default when unset
  pub window: Option<RealtimeWindow>,
  /// Pagination
  pub paging: Paging,
}

impl RealtimeOptions {
  /// Empty option set
  pub fn new() -> Self {
    Self::default()
  }

  /// Trailing window
  pub fn window(mut self, window: RealtimeWindow) -> Self {
    self.window = Some(window);
    self
  }

  paging_builders!();
}

impl QueryOptions for RealtimeOptions {
  fn validate(&self) -> Result<()> {
    if let Some(window) = self.window {
      window.validate()?;
    }
    self.paging.validate()
  }

  fn append_to(&self, params: &mut Params) {
    if let Some(window) = self.window {
      params.insert("time".to_string(), window.to_string());
    }
    self.paging.append_to(params);
  }
}

/// Options for `related` and `search`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageOptions {
  /// Look-back window in days (related only)
  pub days: Option<u32>,
  /// Pagination
  pub paging: Paging,
}

impl PageOptions {
  /// Empty option set
  pub fn new() -> Self {
    Self::default()
  }

  /// Look-back window in days
  pub fn days(mut self, days: u32) -> Self {
    self.days = Some(days);
    self
  }

  paging_builders!();
}

impl QueryOptions for PageOptions {
  fn validate(&self) -> Result<()> {
    if self.days == Some(0) {
      return Err(Error::invalid("days must be at least 1"));
    }
    self.paging.validate()
  }

  fn append_to(&self, params: &mut Params) {
    if let Some(days) = self.days {
      params.insert("days".to_string(), days.to_string());
    }
    self.paging.append_to(params);
  }
}
