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

//! # parsely-client
//!
//! An async client for the Parse.ly analytics API.
//!
//! ## Features
//!
//! - **One method per endpoint**: analytics, post and meta detail, referrers,
//!   shares, realtime, related content and search
//! - **Validated options**: conflicting filters (a lone `pub_start`, a
//!   single `pub_date` next to a publish range, ...) fail before any request
//! - **Typed records**: responses are mapped to `parsely-models` types in API order
//! - **Per-user helper**: train, history and recommendations for one uuid
//! - **Completion handlers**: [`Deliver`] hands a call's result to a closure
//!
//! ## Usage
//!
//! ```rust,no_run
//! use parsely_client::{AnalyticsOptions, DetailOptions, ParselyClient};
//! use parsely_core::{Config, Meta};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let client = ParselyClient::new(config)?;
//!
//!     let post = client
//!         .post_detail("http://arstechnica.com/science/2013/04/some-post/", &DetailOptions::new())
//!         .await?;
//!     println!("{}: {:?} hits", post.title, post.hits);
//!
//!     let lab = client.meta_detail("Technology Lab", Meta::Section, &AnalyticsOptions::new()).await?;
//!     println!("{} posts in Technology Lab", lab.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All methods return `Result<T, parsely_core::Error>`. Validation failures
//! are `Error::InvalidParameter`; refusals from the API are `Error::Api`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod callback;
pub mod client;
pub mod endpoints;
pub mod options;
pub mod transport;
pub mod user;

// Re-export the main client and common types
pub use callback::Deliver;
pub use client::ParselyClient;
pub use options::{
  AnalyticsOptions, DetailOptions, PageOptions, Paging, QueryOptions, RealtimeOptions,
  ReferrerOptions, SharesOptions,
};
pub use parsely_core::{Aspect, Config, Error, Meta, RealtimeWindow, RefType, Result, Sort};
pub use parsely_models::*;
pub use user::User;
