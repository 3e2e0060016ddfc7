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

use chrono::NaiveDate;
use common::*;
use parsely_client::{AnalyticsOptions, Aspect, DetailOptions, Error, Meta, Post, Sort};
use serde_json::json;
use wiremock::matchers::{method, query_param};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_analytics_authors_keeps_order() {
  let (server, client) = setup().await;
  get_secured("/analytics/authors")
    .and(query_param("days", "7"))
    .and(query_param("sort", "_hits"))
    .respond_with(ResponseTemplate::new(200).set_body_json(authors(10)))
    .expect(1)
    .mount(&server)
    .await;

  let options = AnalyticsOptions::new().days(7).sort(Sort::Hits);
  let r = client.analytics(Aspect::Authors, &options).await.unwrap();

  assert_eq!(r.len(), 10);
  assert!(r[7].hits().unwrap_or_default() > 0);
  assert_eq!(r[7].name(), "Author 7");
  assert_eq!(r[0].name(), "Author 0");
}

#[tokio::test]
async fn test_analytics_lone_pub_start_never_hits_the_network() {
  let (server, client) = setup().await;
  get_secured("/analytics/authors")
    .respond_with(ResponseTemplate::new(200).set_body_json(authors(3)))
    .expect(0)
    .mount(&server)
    .await;

  let options = AnalyticsOptions::new().pub_start(NaiveDate::from_ymd_opt(2013, 10, 1).unwrap());
  let err = client.analytics(Aspect::Authors, &options).await.unwrap_err();

  assert!(matches!(err, Error::InvalidParameter(_)));
  assert!(server.received_requests().await.unwrap_or_default().is_empty());
}

#[tokio::test]
async fn test_analytics_single_pub_date_is_sent_as_range() {
  let (server, client) = setup().await;
  get_secured("/analytics/posts")
    .and(query_param("pub_date_start", "2013-04-09"))
    .and(query_param("pub_date_end", "2013-04-09"))
    .respond_with(ResponseTemplate::new(200).set_body_json(posts(2, "Science", "Ars Staff")))
    .expect(1)
    .mount(&server)
    .await;

  let options = AnalyticsOptions::new().pub_date(NaiveDate::from_ymd_opt(2013, 4, 9).unwrap());
  let r = client.analytics(Aspect::Posts, &options).await.unwrap();
  assert_eq!(r[1].title(), Some("Post number 1"));
}

#[tokio::test]
async fn test_post_detail() {
  let (server, client) = setup().await;
  get_secured("/analytics/post/detail")
    .and(query_param("url", DETAIL_LINK))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
      "data": [{"title": DETAIL_TITLE, "url": DETAIL_LINK, "author": "Ars Staff", "_hits": 3210}]
    })))
    .expect(1)
    .mount(&server)
    .await;

  let r = client.post_detail(DETAIL_LINK, &DetailOptions::new()).await.unwrap();
  assert_eq!(r.title, DETAIL_TITLE);
  assert_eq!(r.hits, Some(3210));
}

#[tokio::test]
async fn test_post_detail_empty_data() {
  let (server, client) = setup().await;
  get_secured("/analytics/post/detail")
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
    .mount(&server)
    .await;

  let err = client.post_detail(DETAIL_LINK, &DetailOptions::new()).await.unwrap_err();
  assert!(matches!(err, Error::MissingField(field) if field == "data[0]"));
}

#[tokio::test]
async fn test_meta_detail_section() {
  let (server, client) = setup().await;
  get_secured("/analytics/section/Technology%20Lab/detail")
    .respond_with(ResponseTemplate::new(200).set_body_json(posts(5, "Technology Lab", "Ars Staff")))
    .expect(1)
    .mount(&server)
    .await;

  let r = client.meta_detail("Technology Lab", Meta::Section, &AnalyticsOptions::new()).await.unwrap();
  assert_eq!(r[3].section.as_deref(), Some("Technology Lab"));
}

#[tokio::test]
async fn test_invalid_aspect_leaves_sentinel_untouched() {
  let (server, client) = setup().await;
  let mut r: Option<Vec<Post>> = None;

  if let Ok(meta) = "post".parse::<Meta>() {
    if let Ok(posts) = client.meta_detail("unimportant", meta, &AnalyticsOptions::new()).await {
      r = Some(posts);
    }
  }

  assert!(r.is_none());
  assert!(server.received_requests().await.unwrap_or_default().is_empty());
}

#[tokio::test]
async fn test_upstream_rejection_is_an_api_error() {
  let (server, client) = setup().await;
  get_secured("/analytics/tag/unimportant/detail")
    .respond_with(
      ResponseTemplate::new(403).set_body_json(json!({"code": 403, "message": "Invalid secret", "success": false})),
    )
    .mount(&server)
    .await;

  let sentinel = "sentinel";
  let mut r = sentinel.to_string();
  match client.meta_detail("unimportant", Meta::Tag, &AnalyticsOptions::new()).await {
    Ok(posts) => r = format!("{} posts", posts.len()),
    Err(Error::Api { status, message }) => {
      assert_eq!(status, 403);
      assert_eq!(message, "Invalid secret");
    }
    Err(other) => panic!("Expected Api error, got {:?}", other),
  }
  assert_eq!(r, sentinel);
}

#[tokio::test]
async fn test_malformed_payload_is_a_parse_error() {
  let (server, client) = setup().await;
  get_secured("/analytics/posts")
    .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
    .mount(&server)
    .await;

  let err = client.analytics(Aspect::Posts, &AnalyticsOptions::new()).await.unwrap_err();
  assert!(matches!(err, Error::Parse(_)));
}

#[tokio::test]
async fn test_dot_segment_meta_values_are_rejected() {
  let (server, client) = setup().await;
  Mock::given(method("GET"))
    .respond_with(ResponseTemplate::new(200).set_body_json(posts(2, "Science", "Ars Staff")))
    .expect(0)
    .mount(&server)
    .await;

  for value in ["..", "."] {
    let err = client.meta_detail(value, Meta::Tag, &AnalyticsOptions::new()).await.unwrap_err();
    assert!(matches!(err, Error::InvalidParameter(_)), "{} gave {:?}", value, err);
  }
  assert!(server.received_requests().await.unwrap_or_default().is_empty());
}
