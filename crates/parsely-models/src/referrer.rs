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

//! Referrer rows

use parsely_core::RefType;
use serde::{Deserialize, Serialize};

/// A referring source and the traffic it sent
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Referrer {
  /// Referrer name, e.g. `t.co` or `google`
  #[serde(default)]
  pub name: String,

  /// Referrer category as sent by the API
  #[serde(rename = "type", alias = "ref_type", default, skip_serializing_if = "Option::is_none")]
  pub ref_type: Option<String>,

  /// Page views attributed to this referrer
  #[serde(rename = "_hits", alias = "hits", default, skip_serializing_if = "Option::is_none")]
  pub hits: Option<u64>,

  /// Referring domain
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub domain: Option<String>,
}

impl Referrer {
  /// Category as a typed value, `None` for categories this client does not know
  pub fn kind(&self) -> Option<RefType> {
    self.ref_type.as_deref().and_then(|t| t.parse().ok())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_referrer_row() {
    let r: Referrer =
      serde_json::from_str(r#"{"name": "t.co", "type": "social", "_hits": 210}"#).unwrap();
    assert_eq!(r.name, "t.co");
    assert_eq!(r.hits, Some(210));
    assert_eq!(r.kind(), Some(RefType::Social));
  }

  #[test]
  fn test_unknown_type_is_kept_raw() {
    let r: Referrer = serde_json::from_str(r#"{"name": "x", "type": "email"}"#).unwrap();
    assert_eq!(r.ref_type.as_deref(), Some("email"));
    assert_eq!(r.kind(), None);
  }
}
