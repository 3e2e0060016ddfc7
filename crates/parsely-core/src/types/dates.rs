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

//! Date filters shared by analytics, referrer and share queries
//!
//! Two independent windows exist upstream. The *period* restricts the
//! traffic counted (`days` or `period_start`/`period_end`), while the
//! *publish* window restricts which posts are counted
//! (`pub_date_start`/`pub_date_end`). `validate` enforces the combinations
//! the API accepts so a bad filter fails before any request goes out.

use crate::error::{Error, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Traffic period and publish-date filters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateFilter {
  /// Trailing number of days of traffic
  pub days: Option<u32>,
  /// First day of traffic counted
  pub period_start: Option<NaiveDate>,
  /// Last day of traffic counted
  pub period_end: Option<NaiveDate>,
  /// Earliest publish date of counted posts
  pub pub_start: Option<NaiveDate>,
  /// Latest publish date of counted posts
  pub pub_end: Option<NaiveDate>,
  /// Only posts published on this single day
  pub pub_date: Option<NaiveDate>,
}

impl DateFilter {
  /// Check that the supplied fields form a request the API accepts
  pub fn validate(&self) -> Result<()> {
    if let Some(days) = self.days {
      if days == 0 {
        return Err(Error::invalid("days must be at least 1"));
      }
      if self.period_start.is_some() || self.period_end.is_some() {
        return Err(Error::invalid("days cannot be combined with period_start/period_end"));
      }
    }

    require_both("period_start", self.period_start, "period_end", self.period_end)?;
    require_both("pub_start", self.pub_start, "pub_end", self.pub_end)?;

    if self.pub_date.is_some() && (self.pub_start.is_some() || self.pub_end.is_some()) {
      return Err(Error::invalid("pub_date cannot be combined with pub_start/pub_end"));
    }

    Ok(())
  }

  /// True when no field is set
  pub fn is_empty(&self) -> bool {
    *self == DateFilter::default()
  }

  /// Only the traffic-period part, for endpoints without a publish filter
  pub fn period_only(&self) -> Self {
    DateFilter {
      days: self.days,
      period_start: self.period_start,
      period_end: self.period_end,
      ..Default::default()
    }
  }

  /// Write the query parameters for this filter
  ///
  /// Call `validate` first; a lone `pub_date` is sent as a one-day range.
  pub fn append_to(&self, params: &mut HashMap<String, String>) {
    if let Some(days) = self.days {
      params.insert("days".to_string(), days.to_string());
    }
    if let (Some(start), Some(end)) = (self.period_start, self.period_end) {
      params.insert("period_start".to_string(), format_date(start));
      params.insert("period_end".to_string(), format_date(end));
    }
    let pub_range = match (self.pub_start, self.pub_end, self.pub_date) {
      (Some(start), Some(end), _) => Some((start, end)),
      (None, None, Some(day)) => Some((day, day)),
      _ => None,
    };
    if let Some((start, end)) = pub_range {
      params.insert("pub_date_start".to_string(), format_date(start));
      params.insert("pub_date_end".to_string(), format_date(end));
    }
  }
}

/// Format a date the way the API expects (`YYYY-MM-DD`)
pub fn format_date(date: NaiveDate) -> String {
  date.format(DATE_FORMAT).to_string()
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(s: &str) -> Result<NaiveDate> {
  Ok(NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)?)
}

fn require_both(
  start_name: &str,
  start: Option<NaiveDate>,
  end_name: &str,
  end: Option<NaiveDate>,
) -> Result<()> {
  match (start, end) {
    (Some(s), Some(e)) if s > e => {
      Err(Error::invalid(format!("{} ({}) is after {} ({})", start_name, s, end_name, e)))
    }
    (Some(_), None) | (None, Some(_)) => {
      Err(Error::invalid(format!("{} and {} must be specified together", start_name, end_name)))
    }
    _ => Ok(()),
  }
}
