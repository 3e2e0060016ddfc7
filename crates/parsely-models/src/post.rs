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

//! Post records returned by analytics, detail, search and related endpoints

use crate::shares::ShareCounts;
use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

/// A single post
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Post {
  /// Headline
  #[serde(default)]
  pub title: String,

  /// Canonical URL
  #[serde(default)]
  pub url: String,

  /// Tracked link, when it differs from the canonical URL
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub link: Option<String>,

  /// Primary author
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub author: Option<String>,

  /// All credited authors
  #[serde(default, deserialize_with = "null_as_empty", skip_serializing_if = "Vec::is_empty")]
  pub authors: Vec<String>,

  /// Section the post was filed under
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub section: Option<String>,

  /// Tags
  #[serde(default, deserialize_with = "null_as_empty", skip_serializing_if = "Vec::is_empty")]
  pub tags: Vec<String>,

  /// Publish timestamp as sent by the API
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub pub_date: Option<String>,

  /// Medium thumbnail
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub thumb_url_medium: Option<String>,

  /// Full-size image
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub image_url: Option<String>,

  /// Word count of the article body
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub full_content_word_count: Option<u64>,

  /// Page views in the requested window
  #[serde(rename = "_hits", alias = "hits", default, skip_serializing_if = "Option::is_none")]
  pub hits: Option<u64>,

  /// Share counters, present on share listings
  #[serde(flatten)]
  pub shares: ShareCounts,
}

impl Post {
  /// Publish time parsed from `pub_date`
  ///
  /// Accepts RFC 3339 as well as the offset-less `2013-04-09T13:30:00` form.
  pub fn published(&self) -> Option<NaiveDateTime> {
    let raw = self.pub_date.as_deref()?;
    DateTime::parse_from_rfc3339(raw)
      .map(|dt| dt.naive_utc())
      .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S"))
      .ok()
  }

  /// The author field, falling back to the first credited author
  pub fn primary_author(&self) -> Option<&str> {
    self.author.as_deref().or_else(|| self.authors.first().map(String::as_str))
  }
}

/// A list field sent as `null` reads as empty
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
  D: Deserializer<'de>,
{
  Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn test_post_from_analytics_row() {
    let raw = json!({
      "title": "Inside science: Selling and upsizing the meal",
      "url": "http://arstechnica.com/science/2013/04/inside-science-selling-and-upsizing-the-meal/",
      "author": "Ars Staff",
      "section": "Science",
      "tags": ["food", "science"],
      "pub_date": "2013-04-09T13:30:00",
      "_hits": 1234,
      "full_content_word_count": 912
    });
    let post: Post = serde_json::from_value(raw).unwrap();
    assert_eq!(post.title, "Inside science: Selling and upsizing the meal");
    assert_eq!(post.hits, Some(1234));
    assert_eq!(post.tags.len(), 2);
    assert_eq!(post.primary_author(), Some("Ars Staff"));
    assert!(post.shares.is_empty());
    assert_eq!(post.published().map(|d| d.to_string()), Some("2013-04-09 13:30:00".to_string()));
  }

  #[test]
  fn test_absent_fields_stay_absent() {
    let post: Post = serde_json::from_value(json!({"url": "http://example.com/a"})).unwrap();
    assert_eq!(post.title, "");
    assert_eq!(post.hits, None);
    assert_eq!(post.section, None);
    assert_eq!(post.published(), None);

    let back = serde_json::to_value(&post).unwrap();
    assert_eq!(back, json!({"title": "", "url": "http://example.com/a"}));
  }

  #[test]
  fn test_null_lists_read_as_empty() {
    let post: Post =
      serde_json::from_value(json!({"url": "http://example.com/a", "tags": null, "authors": null, "_hits": 2}))
        .unwrap();
    assert!(post.tags.is_empty());
    assert!(post.authors.is_empty());
    assert_eq!(post.hits, Some(2));

    let rows = crate::map_records(parsely_core::Aspect::Posts, vec![json!({"title": "A", "tags": null})]);
    assert_eq!(rows.unwrap()[0].title(), Some("A"));
  }

  #[test]
  fn test_share_counters_are_flattened() {
    let post: Post =
      serde_json::from_value(json!({"title": "t", "url": "u", "fb": 3, "tw": 4, "total": 7})).unwrap();
    assert_eq!(post.shares.total(), 7);
  }

  #[test]
  fn test_authors_fallback_and_rfc3339() {
    let post: Post = serde_json::from_value(json!({
      "title": "t",
      "url": "u",
      "authors": ["Jon Brodkin", "Ars Staff"],
      "pub_date": "2013-04-09T13:30:00Z"
    }))
    .unwrap();
    assert_eq!(post.primary_author(), Some("Jon Brodkin"));
    assert!(post.published().is_some());
  }
}
