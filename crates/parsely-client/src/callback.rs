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

//! Completion-handler delivery
//!
//! Any client call can hand its result to a handler instead of returning
//! it. The handler runs once, on the task that awaits the call, after the
//! single request completes. Failures go to the handler too.

use futures::future::{FutureExt, Map};
use parsely_core::Result;
use std::future::Future;

/// Deliver the result of a client call to a completion handler
///
/// # Examples
///
/// ```rust,no_run
/// # use parsely_client::{Deliver, PageOptions, ParselyClient};
/// # async fn run(client: ParselyClient) {
/// client
///     .search("security", &PageOptions::new().limit(4))
///     .deliver(|res| match res {
///         Ok(posts) => println!("{} hits", posts.len()),
///         Err(e) => eprintln!("search failed: {}", e),
///     })
///     .await;
/// # }
/// ```
pub trait Deliver<T>: Future<Output = Result<T>> + Sized {
  /// Run `handler` with the result once the call completes
  fn deliver<F, R>(self, handler: F) -> Map<Self, F>
  where
    F: FnOnce(Result<T>) -> R,
  {
    self.map(handler)
  }
}

impl<T, Fut> Deliver<T> for Fut where Fut: Future<Output = Result<T>> {}
