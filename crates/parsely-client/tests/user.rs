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
use parsely_client::{Deliver, Error, PageOptions};
use serde_json::json;
use std::cell::Cell;
use wiremock::matchers::{query_param, query_param_is_missing};
use wiremock::ResponseTemplate;

const UUID: &str = "user4242";

#[tokio::test]
async fn test_train_then_history() {
  let (server, client) = setup().await;
  get("/profile")
    .and(query_param("uuid", UUID))
    .and(query_param("url", TRAIN_LINK))
    .and(query_param_is_missing("secret"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
    .expect(2)
    .mount(&server)
    .await;
  get("/history")
    .and(query_param("uuid", UUID))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
      "data": {"uuid": UUID, "urls": ["http://arstechnica.com/a/", TRAIN_LINK]}
    })))
    .expect(2)
    .mount(&server)
    .await;

  let user = client.user(UUID);

  let t = user.train(TRAIN_LINK).await.unwrap();
  assert!(t);

  let delivered = Cell::new(None);
  user.train(TRAIN_LINK).deliver(|res| delivered.set(res.ok())).await;
  assert_eq!(delivered.get(), Some(t));

  let h = user.history().await.unwrap();
  assert_eq!(h.uuid, UUID);
  assert!(h.contains(TRAIN_LINK));

  user
    .history()
    .deliver(|res| {
      let res = res.unwrap();
      assert_eq!(res, h);
      assert!(res.urls.iter().any(|u| u == TRAIN_LINK));
    })
    .await;
}

#[tokio::test]
async fn test_related_for_user() {
  let (server, client) = setup().await;
  get("/related")
    .and(query_param("uuid", UUID))
    .and(query_param("limit", "5"))
    .respond_with(ResponseTemplate::new(200).set_body_json(posts(5, "Gadgets", "Ars Staff")))
    .expect(1)
    .mount(&server)
    .await;

  let r = client.user(UUID).related(&PageOptions::new().limit(5)).await.unwrap();
  assert!(!r[3].title.is_empty());
}

#[tokio::test]
async fn test_train_refused_upstream() {
  let (server, client) = setup().await;
  get("/profile")
    .respond_with(
      ResponseTemplate::new(200).set_body_json(json!({"success": false, "message": "unknown apikey"})),
    )
    .mount(&server)
    .await;

  let err = client.user(UUID).train(TRAIN_LINK).await.unwrap_err();
  assert!(matches!(err, Error::Api { message, .. } if message == "unknown apikey"));
}

#[tokio::test]
async fn test_train_requires_url() {
  let (server, client) = setup().await;
  assert!(client.user(UUID).train("").await.unwrap_err().is_validation());
  assert!(server.received_requests().await.unwrap_or_default().is_empty());
}
