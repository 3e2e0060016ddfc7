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

//! Social share counters

use crate::mapper::Record;
use serde::{Deserialize, Serialize};

/// Per-network share counts
///
/// Appears on its own for a single post and flattened into posts and meta
/// rows for share listings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareCounts {
  /// Facebook
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub fb: Option<u64>,

  /// Twitter
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub tw: Option<u64>,

  /// LinkedIn
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub li: Option<u64>,

  /// Pinterest
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub pi: Option<u64>,

  /// Total as reported by the API
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub total: Option<u64>,
}

impl ShareCounts {
  /// Reported total, or the sum of the networks when the API left it out
  pub fn total(&self) -> u64 {
    self.total.unwrap_or_else(|| {
      [self.fb, self.tw, self.li, self.pi].iter().flatten().sum()
    })
  }

  /// True when no counter is present
  pub fn is_empty(&self) -> bool {
    *self == ShareCounts::default()
  }
}

/// Result of a shares query
///
/// A listing when grouped by aspect, totals when a single post was asked for.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Shares {
  /// Rows ordered by shares
  List(Vec<Record>),
  /// Counters for one post
  Post(ShareCounts),
}

impl Shares {
  /// The listing, if this is one
  pub fn as_list(&self) -> Option<&[Record]> {
    match self {
      Shares::List(rows) => Some(rows.as_slice()),
      Shares::Post(_) => None,
    }
  }

  /// The single-post counters, if this is one
  pub fn as_post(&self) -> Option<&ShareCounts> {
    match self {
      Shares::List(_) => None,
      Shares::Post(counts) => Some(counts),
    }
  }

  /// Total shares: the post total, or the sum over listed rows
  pub fn total(&self) -> u64 {
    match self {
      Shares::List(rows) => rows.iter().map(|r| r.shares().total()).sum(),
      Shares::Post(counts) => counts.total(),
    }
  }
}
