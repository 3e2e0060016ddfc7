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

pub mod config;
pub mod error;
pub mod types;

pub use config::Config;
pub use error::{Error, Result};
pub use types::{Aspect, DateFilter, Meta, RealtimeWindow, RefType, Sort};

/// The Parse.ly v2 API endpoints this client knows how to call.
///
/// Variants that address a specific meta value (an author name, a section
/// title) carry it so the transport can percent-encode it as a path segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Endpoint {
  // Analytics
  Analytics(Aspect),
  PostDetail,
  MetaDetail(Meta, String),

  // Referrers
  Referrers(RefType),
  ReferrersMeta(RefType, Aspect),
  ReferrersMetaDetail(Meta, String),
  ReferrersPostDetail,

  // Shares
  Shares(Aspect),
  SharesPostDetail,

  // Realtime and discovery
  Realtime(Aspect),
  Related,
  Search,

  // Recommendations profile
  Profile,
  History,
}

impl Endpoint {
  /// Path segments below the API root, unencoded.
  pub fn segments(&self) -> Vec<String> {
    let seg = |parts: &[&str]| parts.iter().map(|p| (*p).to_string()).collect::<Vec<_>>();
    match self {
      Endpoint::Analytics(aspect) => seg(&["analytics", aspect.as_str()]),
      Endpoint::PostDetail => seg(&["analytics", "post", "detail"]),
      Endpoint::MetaDetail(meta, value) => seg(&["analytics", meta.as_str(), value, "detail"]),
      Endpoint::Referrers(ref_type) => seg(&["referrers", ref_type.as_str()]),
      Endpoint::ReferrersMeta(ref_type, aspect) => {
        seg(&["referrers", ref_type.as_str(), aspect.as_str()])
      }
      Endpoint::ReferrersMetaDetail(meta, value) => {
        seg(&["referrers", meta.as_str(), value, "detail"])
      }
      Endpoint::ReferrersPostDetail => seg(&["referrers", "post", "detail"]),
      Endpoint::Shares(aspect) => seg(&["shares", aspect.as_str()]),
      Endpoint::SharesPostDetail => seg(&["shares", "post", "detail"]),
      Endpoint::Realtime(aspect) => seg(&["realtime", aspect.as_str()]),
      Endpoint::Related => seg(&["related"]),
      Endpoint::Search => seg(&["search"]),
      Endpoint::Profile => seg(&["profile"]),
      Endpoint::History => seg(&["history"]),
    }
  }

  /// Whether the endpoint is part of the analytics API and needs the secret.
  pub fn requires_secret(&self) -> bool {
    !matches!(self, Endpoint::Related | Endpoint::Search | Endpoint::Profile | Endpoint::History)
  }
}

impl std::fmt::Display for Endpoint {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "/{}", self.segments().join("/"))
  }
}

/// Base URL for the Parse.ly API
pub const PARSELY_BASE_URL: &str = "https://api.parsely.com/v2";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
