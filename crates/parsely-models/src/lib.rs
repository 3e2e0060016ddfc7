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

//! # parsely-models
//!
//! Data models for Parse.ly API responses.
//!
//! Each endpoint family has its own record type. There is no shared base
//! schema: a field the payload leaves out is `None` (or empty) on the record.
//! Endpoints whose row shape depends on the requested aspect return a
//! [`Record`], built by [`map_records`].
//!
//! ## Usage
//!
//! ```ignore
//! use parsely_models::{Envelope, Post};
//!
//! let envelope: Envelope<Vec<Post>> = serde_json::from_str(&response_json)?;
//! for post in &envelope.data {
//!     println!("{} ({:?} hits)", post.title, post.hits);
//! }
//! ```

#![warn(clippy::all)]

pub mod common;
pub mod mapper;
pub mod post;
pub mod profile;
pub mod referrer;
pub mod shares;

pub use common::*;
pub use mapper::*;
pub use post::*;
pub use profile::*;
pub use referrer::*;
pub use shares::*;
