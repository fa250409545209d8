//! Fetch-compatible HTTP response model.
//!
//! [`ResponseView`] is a **fully buffered** view over one completed
//! exchange: final URL, status code + reason, response headers, and the
//! whole body held as decoded text. Every accessor derives its result from
//! that one buffer, so reading a body twice yields the same content both
//! times; there is no single-use consumption and no streaming delivery.
//!
//! ## Notes
//! - `headers` is an `http::HeaderMap`, which is **case-insensitive** for
//!   header names. A transport that reports no headers yields an empty map.
//! - `status_text` is typically the status code's canonical reason phrase
//!   and may be `"Unknown"` for non-standard codes.
//!
use futures::stream::{self, Stream};
use http::header::CONTENT_TYPE;
use http::HeaderMap;
use serde::de::DeserializeOwned;
use url::Url;

use crate::transport::RawResponse;

/// Buffered, fetch-compatible response to a single exchange.
#[derive(Debug, Clone)]
pub struct ResponseView {
    url: Url,
    status: u16,
    status_text: String,
    headers: HeaderMap,
    body_text: String,
}

/// Content-type-tagged byte view over a response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blob {
    /// Value of the `Content-Type` response header, when present.
    pub content_type: Option<String>,

    /// Body bytes.
    pub data: Vec<u8>,
}

impl From<RawResponse> for ResponseView {
    fn from(raw: RawResponse) -> Self {
        Self {
            url: raw.url,
            status: raw.status,
            status_text: raw.status_text,
            headers: raw.headers,
            body_text: String::from_utf8_lossy(&raw.body).into_owned(),
        }
    }
}

impl ResponseView {
    /// Final URL of the exchange.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Numeric HTTP status code (e.g., `200`, `404`).
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Reason phrase reported with the status line.
    pub fn status_text(&self) -> &str {
        &self.status_text
    }

    /// Whether the status code is in the `200..300` range.
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Response headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// The body as text.
    pub fn text(&self) -> String {
        self.body_text.clone()
    }

    /// The body parsed as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.body_text)
    }

    /// The body as raw bytes.
    pub fn bytes(&self) -> Vec<u8> {
        self.body_text.clone().into_bytes()
    }

    /// The body as a content-type-tagged blob.
    pub fn blob(&self) -> Blob {
        let content_type = self
            .headers
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        Blob {
            content_type,
            data: self.bytes(),
        }
    }

    /// The body parsed as `application/x-www-form-urlencoded` pairs, in
    /// order of appearance.
    pub fn form_data(&self) -> Vec<(String, String)> {
        url::form_urlencoded::parse(self.body_text.as_bytes())
            .into_owned()
            .collect()
    }

    /// The body as a readable stream.
    ///
    /// The payload is already buffered, so the stream yields it as a single
    /// chunk, or nothing for an empty body.
    pub fn body_stream(&self) -> impl Stream<Item = Vec<u8>> {
        let chunk = if self.body_text.is_empty() {
            None
        } else {
            Some(self.bytes())
        };
        stream::iter(chunk)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;
    use serde_json::json;

    fn view(status: u16, body: &str) -> ResponseView {
        ResponseView::from(RawResponse {
            url: Url::parse("https://example.com/").expect("valid URL"),
            status,
            status_text: String::new(),
            headers: HeaderMap::new(),
            body: body.as_bytes().to_vec(),
        })
    }

    #[test]
    fn ok_covers_exactly_the_2xx_range() {
        assert!(view(200, "").ok());
        assert!(view(204, "").ok());
        assert!(view(299, "").ok());
        assert!(!view(199, "").ok());
        assert!(!view(300, "").ok());
        assert!(!view(404, "").ok());
    }

    #[test]
    fn text_and_json_read_the_same_buffer_repeatedly() {
        let resp = view(200, r#"{"a":1}"#);

        assert_eq!(resp.text(), r#"{"a":1}"#);
        assert_eq!(resp.text(), r#"{"a":1}"#);

        let first: serde_json::Value = resp.json().unwrap();
        let second: serde_json::Value = resp.json().unwrap();
        assert_eq!(first, json!({"a": 1}));
        assert_eq!(first, second);
    }

    #[test]
    fn json_parses_into_a_typed_struct() {
        #[derive(serde::Deserialize)]
        struct Payload {
            a: u32,
        }

        let payload: Payload = view(200, r#"{"a":1}"#).json().unwrap();
        assert_eq!(payload.a, 1);
    }

    #[test]
    fn json_of_a_non_json_body_fails() {
        let result: Result<serde_json::Value, _> = view(200, "plain text").json();
        assert!(result.is_err());
    }

    #[test]
    fn blob_carries_the_response_content_type() {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, "application/json".parse().unwrap());

        let resp = ResponseView::from(RawResponse {
            url: Url::parse("https://example.com/").expect("valid URL"),
            status: 200,
            status_text: "OK".to_string(),
            headers,
            body: b"{}".to_vec(),
        });

        let blob = resp.blob();
        assert_eq!(blob.content_type.as_deref(), Some("application/json"));
        assert_eq!(blob.data, b"{}".to_vec());
    }

    #[test]
    fn missing_headers_mean_an_empty_map() {
        let resp = view(200, "");

        assert!(resp.headers().is_empty());
        assert!(resp.blob().content_type.is_none());
    }

    #[test]
    fn form_data_parses_urlencoded_pairs_in_order() {
        let resp = view(200, "a=1&b=two%20words&a=3");

        assert_eq!(
            resp.form_data(),
            vec![
                ("a".to_string(), "1".to_string()),
                ("b".to_string(), "two words".to_string()),
                ("a".to_string(), "3".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn body_stream_yields_the_buffer_as_one_chunk() {
        let chunks: Vec<Vec<u8>> = view(200, "hello").body_stream().collect().await;
        assert_eq!(chunks, vec![b"hello".to_vec()]);
    }

    #[tokio::test]
    async fn body_stream_of_an_empty_body_is_empty() {
        let chunks: Vec<Vec<u8>> = view(204, "").body_stream().collect().await;
        assert!(chunks.is_empty());
    }
}
