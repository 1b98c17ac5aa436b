//! The impls and functions.
//!
use async_trait::async_trait;
use log::*;
use reqwest::Url;
use crate::client::{BoxError, ClientOptions, HttpAction, HttpClient, HttpResponse, ReqwestClient};
use crate::stats::StatsError;

impl ReqwestClient {
    pub fn new(
        endpoint: Url,
        options: &ClientOptions,
    ) -> Result<Self, StatsError>
    {
        let mut builder = reqwest::Client::builder()
            .danger_accept_invalid_certs(options.accept_invalid_certs);
        if options.no_proxy {
            builder = builder.no_proxy();
        }
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| StatsError::Transport(Box::new(e)))?;

        Ok(ReqwestClient { endpoint, client })
    }
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn execute(&self, action: &(dyn HttpAction + Sync)) -> Result<HttpResponse, BoxError>
    {
        let request = action.http_request(&self.endpoint);
        debug!("{} {}", request.method(), request.url());

        let response = self.client.execute(request).await?;
        let status = response.status();
        debug!("response {}: {}", response.url(), status);

        let body = response.bytes().await?.to_vec();

        Ok(HttpResponse { status, body })
    }
}
