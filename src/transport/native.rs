use std::time::Duration;

use futures::future::BoxFuture;
use http::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};

use crate::transport::{BoxError, HttpTransport, RawResponse, TransportRequest};

/// Configuration for the bundled reqwest-backed transport.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub user_agent: String,

    /// Whole-exchange timeout. `None` leaves the client without one.
    pub timeout: Option<Duration>,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            user_agent: "hostfetch/0.1".to_string(),
            timeout: None,
        }
    }
}

/// [`HttpTransport`] backed by a pooled [`reqwest::Client`].
///
/// Connection pooling, TLS, redirects and timeouts all live below this
/// seam; callers above it see one request going in and one fully read
/// response coming out.
pub struct NativeTransport {
    client: reqwest::Client,
}

impl NativeTransport {
    /// Builds a transport. Can use `None` for the default configuration.
    pub fn new(config: Option<TransportConfig>) -> Result<Self, BoxError> {
        let config = config.unwrap_or_default();

        let mut builder = reqwest::Client::builder().user_agent(config.user_agent);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
        })
    }
}

// Ordered header lines become a real header map. Repeated names stay
// repeated; the body's content-type tag replaces whatever the caller set.
fn assemble_headers(request: &TransportRequest) -> Result<HeaderMap, BoxError> {
    let mut headers = HeaderMap::new();
    for (name, value) in &request.headers {
        let name = HeaderName::from_bytes(name.as_bytes())?;
        headers.append(name, HeaderValue::from_str(value)?);
    }

    if let Some(body) = &request.body {
        headers.insert(CONTENT_TYPE, HeaderValue::from_str(body.content_type)?);
    }

    Ok(headers)
}

impl HttpTransport for NativeTransport {
    fn send(
        &self,
        request: TransportRequest,
    ) -> BoxFuture<'static, Result<RawResponse, BoxError>> {
        let client = self.client.clone();

        Box::pin(async move {
            let method = reqwest::Method::from_bytes(request.method.as_bytes())?;
            let headers = assemble_headers(&request)?;

            let mut builder = client.request(method, request.url.clone()).headers(headers);
            if let Some(body) = request.body {
                builder = builder.body(body.text);
            }

            let response = builder.send().await?;

            let url = response.url().clone();
            let status = response.status().as_u16();
            let status_text = response
                .status()
                .canonical_reason()
                .unwrap_or("Unknown")
                .to_string();
            let headers = response.headers().clone();

            // Fetch the whole body. We don't do streaming
            let body = response.bytes().await?.to_vec();

            Ok(RawResponse {
                url,
                status,
                status_text,
                headers,
                body,
            })
        })
    }
}
