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

//! Enumerated request parameters
//!
//! Every enum here renders to the exact token the API expects via `as_str`
//! and `Display`, and parses back with `FromStr`. Parsing an unknown token is
//! an [`Error::InvalidParameter`], so a bad value never reaches the network.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Dimension results are grouped by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Aspect {
  /// Individual posts
  #[default]
  Posts,
  /// Authors
  Authors,
  /// Sections
  Sections,
  /// Topics
  Topics,
  /// Tags
  Tags,
}

impl Aspect {
  /// All aspects, in API documentation order
  pub const ALL: [Aspect; 5] =
    [Aspect::Posts, Aspect::Authors, Aspect::Sections, Aspect::Topics, Aspect::Tags];

  /// Path token
  pub fn as_str(&self) -> &'static str {
    match self {
      Aspect::Posts => "posts",
      Aspect::Authors => "authors",
      Aspect::Sections => "sections",
      Aspect::Topics => "topics",
      Aspect::Tags => "tags",
    }
  }

  /// The meta dimension this aspect aggregates, `None` for posts.
  ///
  /// Aggregate payloads name each row under the singular key, e.g. an
  /// `authors` listing carries `{"author": "..."}`.
  pub fn meta(&self) -> Option<Meta> {
    match self {
      Aspect::Posts => None,
      Aspect::Authors => Some(Meta::Author),
      Aspect::Sections => Some(Meta::Section),
      Aspect::Topics => Some(Meta::Topic),
      Aspect::Tags => Some(Meta::Tag),
    }
  }
}

impl std::fmt::Display for Aspect {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for Aspect {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    match s.trim().to_lowercase().as_str() {
      "posts" => Ok(Aspect::Posts),
      "authors" => Ok(Aspect::Authors),
      "sections" => Ok(Aspect::Sections),
      "topics" => Ok(Aspect::Topics),
      "tags" => Ok(Aspect::Tags),
      other => Err(Error::invalid(format!(
        "unknown aspect '{}', expected one of posts, authors, sections, topics, tags",
        other
      ))),
    }
  }
}

/// A single meta dimension used for detail lookups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Meta {
  /// Author name
  Author,
  /// Section title
  Section,
  /// Topic
  Topic,
  /// Tag
  Tag,
}

impl Meta {
  /// Path token, also the payload key that carries the value
  pub fn as_str(&self) -> &'static str {
    match self {
      Meta::Author => "author",
      Meta::Section => "section",
      Meta::Topic => "topic",
      Meta::Tag => "tag",
    }
  }
}

impl std::fmt::Display for Meta {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for Meta {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    match s.trim().to_lowercase().as_str() {
      "author" => Ok(Meta::Author),
      "section" => Ok(Meta::Section),
      "topic" => Ok(Meta::Topic),
      "tag" => Ok(Meta::Tag),
      other => Err(Error::invalid(format!(
        "unknown meta '{}', expected one of author, section, topic, tag",
        other
      ))),
    }
  }
}

/// Category of traffic referrer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RefType {
  /// Social networks
  #[default]
  Social,
  /// Search engines
  Search,
  /// Other external sites
  Other,
  /// Links from the same site
  Internal,
  /// No referrer
  Direct,
}

impl RefType {
  /// Path token
  pub fn as_str(&self) -> &'static str {
    match self {
      RefType::Social => "social",
      RefType::Search => "search",
      RefType::Other => "other",
      RefType::Internal => "internal",
      RefType::Direct => "direct",
    }
  }
}

impl std::fmt::Display for RefType {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for RefType {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    match s.trim().to_lowercase().as_str() {
      "social" => Ok(RefType::Social),
      "search" => Ok(RefType::Search),
      "other" => Ok(RefType::Other),
      "internal" => Ok(RefType::Internal),
      "direct" => Ok(RefType::Direct),
      other => Err(Error::invalid(format!(
        "unknown referrer type '{}', expected one of social, search, other, internal, direct",
        other
      ))),
    }
  }
}

/// Metric used to order analytics and share listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Sort {
  /// Page views
  #[default]
  #[serde(rename = "_hits", alias = "hits")]
  Hits,
  /// Engaged minutes
  #[serde(rename = "engaged_minutes")]
  EngagedMinutes,
  /// Unique visitors
  #[serde(rename = "visitors")]
  Visitors,
  /// Total shares across networks
  #[serde(rename = "shares")]
  Shares,
  /// Facebook shares
  #[serde(rename = "fb")]
  Facebook,
  /// Twitter shares
  #[serde(rename = "tw")]
  Twitter,
  /// LinkedIn shares
  #[serde(rename = "li")]
  LinkedIn,
  /// Pinterest shares
  #[serde(rename = "pi")]
  Pinterest,
}

impl Sort {
  /// Query token
  pub fn as_str(&self) -> &'static str {
    match self {
      Sort::Hits => "_hits",
      Sort::EngagedMinutes => "engaged_minutes",
      Sort::Visitors => "visitors",
      Sort::Shares => "shares",
      Sort::Facebook => "fb",
      Sort::Twitter => "tw",
      Sort::LinkedIn => "li",
      Sort::Pinterest => "pi",
    }
  }
}

impl std::fmt::Display for Sort {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for Sort {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    match s.trim() {
      "_hits" | "hits" => Ok(Sort::Hits),
      "engaged_minutes" => Ok(Sort::EngagedMinutes),
      "visitors" => Ok(Sort::Visitors),
      "shares" => Ok(Sort::Shares),
      "fb" => Ok(Sort::Facebook),
      "tw" => Ok(Sort::Twitter),
      "li" => Ok(Sort::LinkedIn),
      "pi" => Ok(Sort::Pinterest),
      other => Err(Error::invalid(format!("unknown sort metric '{}'", other))),
    }
  }
}

/// Trailing window for realtime queries
///
/// Serializes as its query token, `30m` or `2h`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum RealtimeWindow {
  /// 1 to 59 minutes
  Minutes(u32),
  /// 1 to 24 hours
  Hours(u32),
}

impl RealtimeWindow {
  /// Reject windows the API does not serve
  pub fn validate(&self) -> Result<()> {
    match *self {
      RealtimeWindow::Minutes(m) if !(1..=59).contains(&m) => {
        Err(Error::invalid(format!("realtime window of {} minutes is outside 1..=59", m)))
      }
      RealtimeWindow::Hours(h) if !(1..=24).contains(&h) => {
        Err(Error::invalid(format!("realtime window of {} hours is outside 1..=24", h)))
      }
      _ => Ok(()),
    }
  }
}

impl std::fmt::Display for RealtimeWindow {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      RealtimeWindow::Minutes(m) => write!(f, "{}m", m),
      RealtimeWindow::Hours(h) => write!(f, "{}h", h),
    }
  }
}

impl FromStr for RealtimeWindow {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    let s = s.trim();
    let bad = || Error::invalid(format!("realtime window '{}' must look like 30m or 2h", s));
    let unit = s.chars().last().ok_or_else(bad)?;
    let n: u32 = s[..s.len() - unit.len_utf8()].parse().map_err(|_| bad())?;
    let window = match unit {
      'm' => RealtimeWindow::Minutes(n),
      'h' => RealtimeWindow::Hours(n),
      _ => return Err(bad()),
    };
    window.validate()?;
    Ok(window)
  }
}

impl TryFrom<String> for RealtimeWindow {
  type Error = Error;

  fn try_from(s: String) -> Result<Self> {
    s.parse()
  }
}

impl From<RealtimeWindow> for String {
  fn from(window: RealtimeWindow) -> Self {
    window.to_string()
  }
}
