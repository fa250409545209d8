use serde_json::Value;
use url::Url;

use crate::errors::FetchError;
use crate::transport::{TransportBody, TransportRequest};

/// Content type every outgoing body is tagged with.
///
/// Real fetch negotiates the content type from the body; this shim always
/// sends `text/plain`, even when the caller supplied its own `Content-Type`
/// header. Known deviation, kept because the hosts this shim serves rely
/// on it.
pub const BODY_CONTENT_TYPE: &str = "text/plain";

/// Options accepted by a single fetch call.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// HTTP verb. Upper-cased before use, not validated against a verb
    /// set. Defaults to `GET`.
    pub method: Option<String>,

    /// Header lines appended, in order, onto the outgoing request. A name
    /// occurring twice produces two header lines.
    pub headers: Vec<(String, String)>,

    /// Optional request payload.
    pub body: Option<BodyValue>,
}

/// A request payload as handed over by the embedding host.
///
/// Hosts with dynamically typed callers forward whatever value the script
/// supplied. Only text and raw bytes can be transmitted; anything else is
/// rejected once the exchange starts.
#[derive(Debug, Clone, PartialEq)]
pub enum BodyValue {
    /// UTF-8 text, sent unchanged.
    Text(String),

    /// Raw bytes, decoded as UTF-8 text before sending.
    Bytes(Vec<u8>),

    /// Any other host value. Rejected with [`FetchError::UnsupportedBody`].
    Other(Value),
}

impl From<String> for BodyValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for BodyValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<Vec<u8>> for BodyValue {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(bytes)
    }
}

impl From<&[u8]> for BodyValue {
    fn from(bytes: &[u8]) -> Self {
        Self::Bytes(bytes.to_vec())
    }
}

impl BodyValue {
    fn into_text(self) -> Result<String, FetchError> {
        match self {
            BodyValue::Text(text) => Ok(text),
            BodyValue::Bytes(bytes) => Ok(String::from_utf8_lossy(&bytes).into_owned()),
            BodyValue::Other(value) => Err(FetchError::UnsupportedBody { value }),
        }
    }
}

impl RequestOptions {
    /// Builds the outgoing request for an already validated URL.
    ///
    /// Fails only on an untransmittable body; that failure surfaces through
    /// the in-flight future, never from the synchronous call path.
    pub(crate) fn into_transport_request(self, url: Url) -> Result<TransportRequest, FetchError> {
        let method = match self.method {
            Some(method) => method.to_ascii_uppercase(),
            None => "GET".to_string(),
        };

        let body = match self.body {
            Some(value) => Some(TransportBody {
                text: value.into_text()?,
                content_type: BODY_CONTENT_TYPE,
            }),
            None => None,
        };

        Ok(TransportRequest {
            method,
            url,
            headers: self.headers,
            body,
        })
    }
}
