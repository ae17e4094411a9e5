use std::sync::Arc;

use http::{header::CONTENT_TYPE, Method, Request, Response};
use serde::Serialize;
use tracing::debug;
use url::Url;

use crate::{error::VerifierClientError, http_client::AsyncHttpClient};

/// Content type of a CESR-encoded credential presentation body.
const CESR_CONTENT_TYPE: &str = "application/json+cesr";

/// Transport binding for the verifier service.
///
/// Derives one endpoint per logical operation from the configured base URL,
/// issues exactly one HTTP request per call, and returns the raw response
/// unmodified. Payloads pass through opaque: all interpretation of
/// credentials and signatures happens in the remote service.
#[derive(Clone)]
pub(crate) struct VerifierServiceAdapter {
    auths_url: Url,
    presentations_url: Url,
    verify_signed_headers_url: Url,
    verify_signature_url: Url,
    add_rot_url: Url,
    http_client: Arc<dyn AsyncHttpClient + Send + Sync>,
}

/// JSON payload of a raw signature verification request.
#[derive(Debug, Serialize)]
struct SignatureVerificationRequest<'a> {
    signature: &'a str,
    signer_aid: &'a str,
    non_prefixed_digest: &'a str,
}

/// JSON payload of a root of trust registration request.
#[derive(Debug, Serialize)]
struct RootOfTrustRequest<'a> {
    vlei: &'a str,
    oobi: &'a str,
}

impl VerifierServiceAdapter {
    pub(crate) fn new(
        base_url: &str,
        http_client: Arc<dyn AsyncHttpClient + Send + Sync>,
    ) -> Result<Self, VerifierClientError> {
        Ok(Self {
            auths_url: endpoint(base_url, "authorizations/")?,
            presentations_url: endpoint(base_url, "presentations/")?,
            verify_signed_headers_url: endpoint(base_url, "request/verify/")?,
            verify_signature_url: endpoint(base_url, "signature/verify/")?,
            add_rot_url: endpoint(base_url, "root_of_trust/")?,
            http_client,
        })
    }

    /// `GET {base}/authorizations/{aid}`
    pub(crate) async fn check_login_request(
        &self,
        aid: &str,
    ) -> Result<Response<Vec<u8>>, VerifierClientError> {
        debug!(%aid, "sending login check request");

        let request = Request::builder()
            .method(Method::GET)
            .uri(self.auths_url.join(aid)?.as_str())
            .header(CONTENT_TYPE, "application/json")
            .body(Vec::new())?;
        let response = self.execute(request).await?;

        debug!(
            %aid,
            body = %String::from_utf8_lossy(response.body()),
            "login check response"
        );
        Ok(response)
    }

    /// `PUT {base}/presentations/{said}` with a CESR-encoded credential body.
    pub(crate) async fn credential_presentation_request(
        &self,
        said: &str,
        vlei: &str,
    ) -> Result<Response<Vec<u8>>, VerifierClientError> {
        debug!(%said, "sending credential presentation request");

        let request = Request::builder()
            .method(Method::PUT)
            .uri(self.presentations_url.join(said)?.as_str())
            .header(CONTENT_TYPE, CESR_CONTENT_TYPE)
            .body(vlei.as_bytes().to_vec())?;
        let response = self.execute(request).await?;

        debug!(
            %said,
            body = %String::from_utf8_lossy(response.body()),
            "credential presentation response"
        );
        Ok(response)
    }

    /// `POST {base}/request/verify/{aid}?sig=…&data=…`
    pub(crate) async fn verify_signed_headers_request(
        &self,
        aid: &str,
        sig: &str,
        ser: &str,
    ) -> Result<Response<Vec<u8>>, VerifierClientError> {
        debug!(%aid, %sig, %ser, "sending signed headers verification request");

        let mut url = self.verify_signed_headers_url.join(aid)?;
        url.query_pairs_mut()
            .append_pair("sig", sig)
            .append_pair("data", ser);

        let request = Request::builder()
            .method(Method::POST)
            .uri(url.as_str())
            .body(Vec::new())?;
        let response = self.execute(request).await?;

        debug!(
            %aid,
            body = %String::from_utf8_lossy(response.body()),
            "signed headers verification response"
        );
        Ok(response)
    }

    /// `POST {base}/signature/verify/` with a JSON body.
    pub(crate) async fn verify_signature_request(
        &self,
        signature: &str,
        signer_aid: &str,
        non_prefixed_digest: &str,
    ) -> Result<Response<Vec<u8>>, VerifierClientError> {
        debug!(
            %signature,
            %signer_aid,
            %non_prefixed_digest,
            "sending signature verification request"
        );

        let payload = SignatureVerificationRequest {
            signature,
            signer_aid,
            non_prefixed_digest,
        };
        let request = Request::builder()
            .method(Method::POST)
            .uri(self.verify_signature_url.as_str())
            .header(CONTENT_TYPE, "application/json")
            .body(serde_json::to_vec(&payload).map_err(VerifierClientError::Encode)?)?;
        let response = self.execute(request).await?;

        debug!(
            %signer_aid,
            body = %String::from_utf8_lossy(response.body()),
            "signature verification response"
        );
        Ok(response)
    }

    /// `POST {base}/root_of_trust/{aid}` with a JSON body.
    pub(crate) async fn add_root_of_trust_request(
        &self,
        aid: &str,
        vlei: &str,
        oobi: &str,
    ) -> Result<Response<Vec<u8>>, VerifierClientError> {
        debug!(%aid, %oobi, "sending root of trust registration request");

        let payload = RootOfTrustRequest { vlei, oobi };
        let request = Request::builder()
            .method(Method::POST)
            .uri(self.add_rot_url.join(aid)?.as_str())
            .header(CONTENT_TYPE, "application/json")
            .body(serde_json::to_vec(&payload).map_err(VerifierClientError::Encode)?)?;
        let response = self.execute(request).await?;

        debug!(
            %aid,
            body = %String::from_utf8_lossy(response.body()),
            "root of trust registration response"
        );
        Ok(response)
    }

    async fn execute(
        &self,
        request: Request<Vec<u8>>,
    ) -> Result<Response<Vec<u8>>, VerifierClientError> {
        self.http_client
            .execute(request)
            .await
            .map_err(VerifierClientError::Transport)
    }
}

/// Derives an endpoint URL prefix from the base address.
///
/// Identifier segments are appended with [Url::join], so every prefix keeps
/// a trailing slash.
fn endpoint(base_url: &str, path: &str) -> Result<Url, VerifierClientError> {
    Ok(Url::parse(&format!(
        "{}/{path}",
        base_url.trim_end_matches('/')
    ))?)
}
