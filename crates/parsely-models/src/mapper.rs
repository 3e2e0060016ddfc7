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

//! Response mapper for aspect-driven endpoints
//!
//! Analytics, share, realtime and referrer-meta listings return posts when
//! the aspect is `posts` and one row per meta value otherwise. A meta row
//! names its value under the singular key of the aspect (`author`,
//! `section`, ...), so the mapper needs the aspect to read it.

use crate::post::Post;
use crate::shares::ShareCounts;
use parsely_core::{Aspect, Error, Meta, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One aggregated meta value (an author, a section, ...)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaRecord {
  /// The meta value, e.g. the author's name
  pub name: String,

  /// Page views in the requested window
  #[serde(rename = "_hits", alias = "hits", default, skip_serializing_if = "Option::is_none")]
  pub hits: Option<u64>,

  /// Share counters, present on share listings
  #[serde(flatten)]
  pub shares: ShareCounts,
}

#[derive(Deserialize)]
struct MetaFields {
  #[serde(rename = "_hits", alias = "hits", default)]
  hits: Option<u64>,
  #[serde(flatten)]
  shares: ShareCounts,
}

impl MetaRecord {
  /// Build a record from a raw row, reading the name under `meta`'s key
  pub fn from_value(meta: Meta, value: Value) -> Result<Self> {
    let key = meta.as_str();
    let name = match value.get(key) {
      Some(Value::String(s)) => s.clone(),
      Some(Value::Null) | None => return Err(Error::MissingField(key.to_string())),
      Some(other) => other.to_string(),
    };
    let fields: MetaFields = serde_json::from_value(value)?;
    Ok(MetaRecord { name, hits: fields.hits, shares: fields.shares })
  }
}

/// A row of an aspect-driven listing
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Record {
  /// Row of a `posts` listing
  Post(Post),
  /// Row of an author/section/topic/tag listing
  Meta(MetaRecord),
}

impl Record {
  /// Page views, if the payload carried them
  pub fn hits(&self) -> Option<u64> {
    match self {
      Record::Post(p) => p.hits,
      Record::Meta(m) => m.hits,
    }
  }

  /// Post title, `None` for meta rows
  pub fn title(&self) -> Option<&str> {
    match self {
      Record::Post(p) => Some(p.title.as_str()),
      Record::Meta(_) => None,
    }
  }

  /// Meta value for meta rows, title for posts
  pub fn name(&self) -> &str {
    match self {
      Record::Post(p) => &p.title,
      Record::Meta(m) => &m.name,
    }
  }

  /// Share counters of the row
  pub fn shares(&self) -> &ShareCounts {
    match self {
      Record::Post(p) => &p.shares,
      Record::Meta(m) => &m.shares,
    }
  }

  /// The post, if this is a post row
  pub fn as_post(&self) -> Option<&Post> {
    match self {
      Record::Post(p) => Some(p),
      Record::Meta(_) => None,
    }
  }

  /// The meta record, if this is a meta row
  pub fn as_meta(&self) -> Option<&MetaRecord> {
    match self {
      Record::Post(_) => None,
      Record::Meta(m) => Some(m),
    }
  }
}

/// Map raw rows to records for `aspect`, keeping their order
pub fn map_records(aspect: Aspect, rows: Vec<Value>) -> Result<Vec<Record>> {
  rows
    .into_iter()
    .enumerate()
    .map(|(i, row)| {
      map_record(aspect, row).map_err(|e| match e {
        Error::MissingField(field) => Error::MissingField(format!("data[{}].{}", i, field)),
        other => other,
      })
    })
    .collect()
}

fn map_record(aspect: Aspect, row: Value) -> Result<Record> {
  if !row.is_object() {
    return Err(Error::InvalidResponse(format!("expected an object row, got {}", row)));
  }
  match aspect.meta() {
    None => Ok(Record::Post(serde_json::from_value(row)?)),
    Some(meta) => Ok(Record::Meta(MetaRecord::from_value(meta, row)?)),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn test_author_rows_keep_order() {
    let rows = vec![
      json!({"author": "Ars Staff", "_hits": 900}),
      json!({"author": "Jon Brodkin", "_hits": 450}),
      json!({"author": "Peter Bright", "_hits": 10}),
    ];
    let records = map_records(Aspect::Authors, rows).unwrap();
    let names: Vec<&str> = records.iter().map(Record::name).collect();
    assert_eq!(names, vec!["Ars Staff", "Jon Brodkin", "Peter Bright"]);
    assert_eq!(records[1].hits(), Some(450));
    assert_eq!(records[1].title(), None);
  }

  #[test]
  fn test_post_rows() {
    let rows = vec![json!({"title": "A", "url": "http://a", "_hits": 5})];
    let records = map_records(Aspect::Posts, rows).unwrap();
    assert_eq!(records[0].title(), Some("A"));
    assert_eq!(records[0].as_post().map(|p| p.url.as_str()), Some("http://a"));
    assert!(records[0].as_meta().is_none());
  }

  #[test]
  fn test_share_rows_for_sections() {
    let rows = vec![json!({"section": "Technology Lab", "fb": 3, "tw": 9, "total": 12})];
    let records = map_records(Aspect::Sections, rows).unwrap();
    assert_eq!(records[0].name(), "Technology Lab");
    assert_eq!(records[0].shares().total(), 12);
    assert_eq!(records[0].hits(), None);
  }

  #[test]
  fn test_missing_name_key_reports_position() {
    let rows = vec![json!({"tag": "copyright"}), json!({"_hits": 3})];
    let err = map_records(Aspect::Tags, rows).unwrap_err();
    match err {
      Error::MissingField(field) => assert_eq!(field, "data[1].tag"),
      other => panic!("Expected MissingField, got {:?}", other),
    }
  }

  #[test]
  fn test_non_object_row_is_rejected() {
    let err = map_records(Aspect::Posts, vec![json!("oops")]).unwrap_err();
    assert!(matches!(err, Error::InvalidResponse(_)));
  }

  #[test]
  fn test_numeric_meta_value_is_stringified() {
    let record = MetaRecord::from_value(Meta::Tag, json!({"tag": 2013, "_hits": 1})).unwrap();
    assert_eq!(record.name, "2013");
  }

  #[test]
  fn test_meta_record_serializes_flat() {
    let record = Record::Meta(MetaRecord { name: "Ars Staff".into(), hits: Some(3), ..Default::default() });
    assert_eq!(serde_json::to_value(&record).unwrap(), json!({"name": "Ars Staff", "_hits": 3}));
  }
}
