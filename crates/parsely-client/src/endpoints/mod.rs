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

//! Endpoint families
//!
//! Each module adds the methods of one API area to [`ParselyClient`]:
//!
//! - [`analytics`]: `analytics`, `post_detail`, `meta_detail`
//! - [`referrers`]: `referrers`, `referrers_meta`, `referrers_meta_detail`,
//!   `referrers_post_detail`
//! - [`shares`]: `shares`
//! - [`realtime`]: `realtime`
//! - [`discovery`]: `related`, `search`
//!
//! [`ParselyClient`]: crate::ParselyClient

pub mod analytics;
pub mod discovery;
pub mod realtime;
pub mod referrers;
pub mod shares;

use parsely_core::{Error, Result};

/// Reject an empty required argument before building a request
pub(crate) fn require_non_empty(name: &str, value: &str) -> Result<()> {
  if value.trim().is_empty() {
    return Err(Error::invalid(format!("{} must not be empty", name)));
  }
  Ok(())
}

/// Reject a value that cannot stand as its own URL path segment
///
/// `.` and `..` would be collapsed into the surrounding path and reach a
/// different endpoint.
pub(crate) fn require_path_segment(name: &str, value: &str) -> Result<()> {
  require_non_empty(name, value)?;
  if value == "." || value == ".." {
    return Err(Error::invalid(format!("{} '{}' is not a valid path segment", name, value)));
  }
  Ok(())
}

/// First element of a detail payload
pub(crate) fn first<T>(rows: Vec<T>) -> Result<T> {
  rows.into_iter().next().ok_or_else(|| Error::MissingField("data[0]".to_string()))
}
