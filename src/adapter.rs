use std::sync::Arc;

use futures::future::BoxFuture;
use url::Url;

use crate::errors::FetchError;
use crate::net::request::RequestOptions;
use crate::net::response::ResponseView;
use crate::transport::HttpTransport;

/// An in-flight exchange. Resolves exactly once.
pub type ResponseFuture = BoxFuture<'static, Result<ResponseView, FetchError>>;

/// Fetch-style request front-end bound to one shared [`HttpTransport`].
///
/// The adapter owns no connection state of its own. Cloning is cheap and
/// every clone issues exchanges through the same transport; independent
/// calls run concurrently and complete in whatever order the transport
/// delivers them.
#[derive(Clone)]
pub struct FetchAdapter {
    transport: Arc<dyn HttpTransport>,
}

impl FetchAdapter {
    /// Binds an adapter to the transport supplied by the host.
    ///
    /// The transport is reused across all subsequent calls. A host with no
    /// transport to offer gets [`FetchError::MissingTransport`] right here,
    /// before any callable exists.
    pub fn new(transport: Option<Arc<dyn HttpTransport>>) -> Result<Self, FetchError> {
        match transport {
            Some(transport) => Ok(Self { transport }),
            None => Err(FetchError::MissingTransport),
        }
    }

    /// Issues one HTTP exchange.
    ///
    /// The URL is validated synchronously: an unparseable URL fails with
    /// [`FetchError::InvalidUrl`] and no future is ever constructed.
    /// Everything else happens inside the returned future, which resolves
    /// once the transport has fully read the response, or rejects with an
    /// untransmittable body or the transport's own error, unchanged.
    pub fn request(
        &self,
        url: impl AsRef<str>,
        options: RequestOptions,
    ) -> Result<ResponseFuture, FetchError> {
        let input = url.as_ref();
        let url = Url::parse(input).map_err(|e| {
            log::error!("Cannot parse URL {:?}: {}", input, e);
            FetchError::InvalidUrl {
                input: input.to_string(),
                source: e,
            }
        })?;

        let transport = Arc::clone(&self.transport);
        Ok(Box::pin(async move {
            let request = options.into_transport_request(url)?;
            log::debug!("{} {}", request.method, request.url);

            let raw = transport.send(request).await?;
            Ok(ResponseView::from(raw))
        }))
    }
}
