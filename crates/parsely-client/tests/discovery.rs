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

mod common;

use common::*;
use parsely_client::{Error, PageOptions};
use wiremock::matchers::{query_param, query_param_is_missing};
use wiremock::ResponseTemplate;

#[tokio::test]
async fn test_related_url() {
  let (server, client) = setup().await;
  get("/related")
    .and(query_param("url", TRAIN_LINK))
    .and(query_param_is_missing("secret"))
    .respond_with(ResponseTemplate::new(200).set_body_json(posts(6, "Gadgets", "Ars Staff")))
    .expect(1)
    .mount(&server)
    .await;

  let r = client.related(TRAIN_LINK, &PageOptions::new()).await.unwrap();
  assert!(!r[3].title.is_empty());
}

#[tokio::test]
async fn test_search() {
  let (server, client) = setup().await;
  get("/search")
    .and(query_param("q", "security"))
    .and(query_param("limit", "4"))
    .respond_with(ResponseTemplate::new(200).set_body_json(posts(4, "Security", "Dan Goodin")))
    .expect(1)
    .mount(&server)
    .await;

  let s = client.search("security", &PageOptions::new().limit(4)).await.unwrap();
  assert_eq!(s.len(), 4);
  assert!(!s[3].title.is_empty());
}

#[tokio::test]
async fn test_search_rejects_days_and_empty_query() {
  let (server, client) = setup().await;
  assert!(matches!(
    client.search("security", &PageOptions::new().days(3)).await,
    Err(Error::InvalidParameter(_))
  ));
  assert!(matches!(client.search("  ", &PageOptions::new()).await, Err(Error::InvalidParameter(_))));
  assert!(server.received_requests().await.unwrap_or_default().is_empty());
}
