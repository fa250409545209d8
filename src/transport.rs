use futures::future::BoxFuture;
use http::HeaderMap;
use url::Url;

pub mod native;

pub use native::{NativeTransport, TransportConfig};

/// Type-erased transport failure, forwarded to callers unchanged.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// One fully built outgoing exchange. Handed to a transport exactly once.
#[derive(Debug, Clone)]
pub struct TransportRequest {
    /// Upper-cased HTTP verb.
    pub method: String,

    /// Absolute target URL.
    pub url: Url,

    /// Header lines in insertion order; a duplicate name is a separate line.
    pub headers: Vec<(String, String)>,

    /// Optional payload with its content-type tag.
    pub body: Option<TransportBody>,
}

/// Outgoing payload, already coerced to text.
#[derive(Debug, Clone)]
pub struct TransportBody {
    pub text: String,
    pub content_type: &'static str,
}

/// Raw result of a completed exchange, fully read into memory.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// Final URL of the exchange.
    pub url: Url,

    /// Numeric HTTP status code.
    pub status: u16,

    /// Reason phrase of the status line.
    pub status_text: String,

    /// Response headers; empty when the transport reports none.
    pub headers: HeaderMap,

    /// Raw body bytes.
    pub body: Vec<u8>,
}

/// Capability interface for the component doing the actual network I/O.
///
/// A transport takes one request, sends it, fully reads the response body
/// and completes exactly once. No intermediate progress events, no retries,
/// no caller-side cancellation. Implementations must be safe to share
/// across concurrent in-flight calls.
pub trait HttpTransport: Send + Sync {
    /// Sends the request, resolving once the response is fully read.
    fn send(&self, request: TransportRequest)
        -> BoxFuture<'static, Result<RawResponse, BoxError>>;
}
