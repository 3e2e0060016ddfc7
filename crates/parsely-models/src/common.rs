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

//! Wire shapes shared by every Parse.ly response

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The `{ "data": ... }` wrapper around every v2 payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
  /// The payload proper
  pub data: T,

  /// Pagination links, when the endpoint pages
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub links: Option<Value>,

  /// Query echo and other metadata
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub meta: Option<Value>,
}

/// Body returned alongside a non-2xx status, or with `success: false`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
  /// Status code echoed in the body
  #[serde(default)]
  pub code: Option<u16>,

  /// Human readable message
  #[serde(default)]
  pub message: Option<String>,

  /// Explicit success flag
  #[serde(default)]
  pub success: Option<bool>,
}

impl ApiErrorBody {
  /// Parse an error body, or `None` if it is not one
  pub fn from_body(body: &str) -> Option<Self> {
    serde_json::from_str::<ApiErrorBody>(body)
      .ok()
      .filter(|b| b.message.is_some() || b.success == Some(false))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn test_envelope_with_links() {
    let raw = json!({
      "data": [1, 2, 3],
      "links": {"next": "https://api.parsely.com/v2/analytics/posts?page=2"},
      "meta": {"limit": 3}
    });
    let env: Envelope<Vec<u32>> = serde_json::from_value(raw).unwrap();
    assert_eq!(env.data, vec![1, 2, 3]);
    assert!(env.links.is_some());
  }

  #[test]
  fn test_envelope_without_data_fails() {
    let raw = json!({"success": true});
    assert!(serde_json::from_value::<Envelope<Vec<u32>>>(raw).is_err());
  }

  #[test]
  fn test_error_body() {
    let body = r#"{"code": 403, "message": "Invalid API secret", "success": false}"#;
    let parsed = ApiErrorBody::from_body(body).unwrap();
    assert_eq!(parsed.code, Some(403));
    assert_eq!(parsed.message.as_deref(), Some("Invalid API secret"));

    assert!(ApiErrorBody::from_body(r#"{"data": []}"#).is_none());
    assert!(ApiErrorBody::from_body("<html>502</html>").is_none());
  }
}
