use anyhow::{Context, Result};
use async_trait::async_trait;
use http::{Request, Response};

/// Generic HTTP client.
///
/// A trait is used here so that callers can substitute a native HTTP/TLS
/// stack, and so that tests can simulate the verifier service without a
/// live endpoint.
#[async_trait]
pub trait AsyncHttpClient {
    async fn execute(&self, request: Request<Vec<u8>>) -> Result<Response<Vec<u8>>>;
}

/// Default [AsyncHttpClient] backed by [reqwest].
#[derive(Debug)]
pub struct ReqwestClient(reqwest::Client);

impl ReqwestClient {
    pub fn new() -> Result<Self> {
        reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .context("unable to build http client")
            .map(Self)
    }
}

impl AsRef<reqwest::Client> for ReqwestClient {
    fn as_ref(&self) -> &reqwest::Client {
        &self.0
    }
}

#[async_trait]
impl AsyncHttpClient for ReqwestClient {
    async fn execute(&self, request: Request<Vec<u8>>) -> Result<Response<Vec<u8>>> {
        let response = self
            .0
            .execute(request.try_into().context("unable to convert request")?)
            .await
            .context("http request failed")?;

        let mut builder = Response::builder().status(response.status());

        builder
            .headers_mut()
            .context("unable to set response headers")?
            .extend(response.headers().clone());

        let body = response
            .bytes()
            .await
            .context("failed to read response body")?;

        builder.body(body.to_vec()).context("unable to construct response")
    }
}
