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

#![allow(dead_code)]

use parsely_client::{Config, ParselyClient};
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockBuilder, MockServer};

pub const APIKEY: &str = "arstechnica.com";
pub const SECRET: &str = "s3cret";

pub const TRAIN_LINK: &str = "http://arstechnica.com/gadgets/2013/04/tunein-radio-app-update-makes-it-easier-for-users-to-discover-new-music/";
pub const DETAIL_LINK: &str = "http://arstechnica.com/science/2013/04/inside-science-selling-and-upsizing-the-meal/";
pub const DETAIL_TITLE: &str = "Inside science: Selling and upsizing the meal";

/// Mock server plus a client pointed at it
pub async fn setup() -> (MockServer, ParselyClient) {
  let _ = tracing_subscriber::fmt().with_test_writer().with_env_filter("parsely_client=debug").try_init();
  let server = MockServer::start().await;
  let config = Config::new(APIKEY).with_secret(SECRET).with_base_url(server.uri());
  let client = ParselyClient::new(config).expect("Failed to create client");
  (server, client)
}

/// GET `p` carrying the API key
pub fn get(p: &str) -> MockBuilder {
  Mock::given(method("GET")).and(path(p)).and(query_param("apikey", APIKEY))
}

/// GET `p` carrying both credentials
pub fn get_secured(p: &str) -> MockBuilder {
  get(p).and(query_param("secret", SECRET))
}

pub fn post_row(i: usize, section: &str, author: &str) -> Value {
  json!({
    "title": format!("Post number {}", i),
    "url": format!("http://arstechnica.com/{}/2013/04/post-{}/", section.to_lowercase().replace(' ', "-"), i),
    "author": author,
    "section": section,
    "tags": ["copyright", "security"],
    "pub_date": "2013-04-09T13:30:00",
    "_hits": 1000 - i as u64
  })
}

pub fn posts(n: usize, section: &str, author: &str) -> Value {
  json!({ "data": (0..n).map(|i| post_row(i, section, author)).collect::<Vec<_>>() })
}

pub fn authors(n: usize) -> Value {
  json!({
    "data": (0..n)
      .map(|i| json!({"author": format!("Author {}", i), "_hits": 500 - i as u64, "fb": 3, "tw": 4, "total": 7}))
      .collect::<Vec<_>>()
  })
}

pub fn social_referrers() -> Value {
  json!({
    "data": [
      {"name": "facebook.com", "type": "social", "_hits": 320},
      {"name": "t.co", "type": "social", "_hits": 210},
      {"name": "reddit.com", "type": "social", "_hits": 95},
      {"name": "plus.google.com", "type": "social", "_hits": 12}
    ]
  })
}
