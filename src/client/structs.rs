//! The structs and traits
//!
use std::time::Duration;
use async_trait::async_trait;
use reqwest::{Request, StatusCode, Url};

/// Any error a transport returns is handed back to the caller boxed.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A request description, relative to the endpoint the client targets.
pub trait HttpAction {
    fn http_request(&self, endpoint: &Url) -> Request;
}

/// The transport: executes one [HttpAction] and returns the response.
///
/// A transport does not look at the status code, that is left to the caller.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn execute(&self, action: &(dyn HttpAction + Sync)) -> Result<HttpResponse, BoxError>;
}

/// The status code and the full body of a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

/// The options for building a [ReqwestClient].
#[derive(Debug, Clone, Default)]
pub struct ClientOptions {
    /// Total time allowed for a request, from connecting until the body is read.
    /// `None` means the request only ends when the caller drops it.
    pub timeout: Option<Duration>,
    /// Accept self-signed and otherwise invalid certificates for https endpoints.
    pub accept_invalid_certs: bool,
    /// Ignore the proxies set in the environment (`HTTP_PROXY`, `HTTPS_PROXY`, `ALL_PROXY`).
    pub no_proxy: bool,
}

/// [HttpClient] using reqwest, bound to a single endpoint.
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    pub(crate) endpoint: Url,
    pub(crate) client: reqwest::Client,
}
