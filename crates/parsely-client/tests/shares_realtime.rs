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
use parsely_client::{Aspect, RealtimeOptions, RealtimeWindow, Shares, SharesOptions};
use serde_json::json;
use wiremock::matchers::query_param;
use wiremock::ResponseTemplate;

#[tokio::test]
async fn test_shares_by_author() {
  let (server, client) = setup().await;
  get_secured("/shares/authors")
    .respond_with(ResponseTemplate::new(200).set_body_json(authors(5)))
    .expect(1)
    .mount(&server)
    .await;

  let s = client.shares(&SharesOptions::new().aspect(Aspect::Authors)).await.unwrap();
  let rows = s.as_list().expect("Expected a listing");
  assert!(!rows[3].name().is_empty());
  assert_eq!(rows[3].shares().total(), 7);
}

#[tokio::test]
async fn test_shares_for_one_post() {
  let (server, client) = setup().await;
  get_secured("/shares/post/detail")
    .and(query_param("url", TRAIN_LINK))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
      "data": [{"fb": 120, "tw": 80, "li": 4, "pi": 1, "total": 205}]
    })))
    .expect(1)
    .mount(&server)
    .await;

  let s = client.shares(&SharesOptions::new().post(TRAIN_LINK)).await.unwrap();
  match s {
    Shares::Post(counts) => {
      assert!(counts.total() > 0);
      assert_eq!(counts.tw, Some(80));
    }
    Shares::List(_) => panic!("Expected post totals"),
  }
}

#[tokio::test]
async fn test_shares_post_with_aspect_is_rejected() {
  let (server, client) = setup().await;
  let options = SharesOptions::new().post(TRAIN_LINK).aspect(Aspect::Sections);
  assert!(client.shares(&options).await.unwrap_err().is_validation());
  assert!(server.received_requests().await.unwrap_or_default().is_empty());
}

#[tokio::test]
async fn test_realtime_posts() {
  let (server, client) = setup().await;
  get_secured("/realtime/posts")
    .and(query_param("limit", "4"))
    .and(query_param("time", "1h"))
    .respond_with(ResponseTemplate::new(200).set_body_json(posts(4, "Gadgets", "Ars Staff")))
    .expect(1)
    .mount(&server)
    .await;

  let options = RealtimeOptions::new().window(RealtimeWindow::Hours(1)).limit(4);
  let r = client.realtime(Aspect::Posts, &options).await.unwrap();
  assert_eq!(r.len(), 4);
  assert!(r[3].title().is_some_and(|t| !t.is_empty()));
}
