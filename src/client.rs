use std::sync::Arc;

use crate::{
    adapter::VerifierServiceAdapter,
    error::VerifierClientError,
    http_client::{AsyncHttpClient, ReqwestClient},
    response::VerifierResponse,
};

/// Default address of the verifier service.
pub const DEFAULT_VERIFIER_URL: &str = "http://localhost:7676";

/// Client for the vLEI verifier service.
///
/// One method per verifier operation: authorization checks, credential
/// presentations, signed header verification, raw signature verification,
/// and root of trust registration. Every method performs a single stateless
/// request/response exchange and returns a [VerifierResponse]; no state is
/// kept between calls besides the immutable base URL, and nothing is
/// cached or retried.
#[derive(Clone)]
pub struct VerifierClient {
    adapter: VerifierServiceAdapter,
}

impl std::fmt::Debug for VerifierClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VerifierClient").finish_non_exhaustive()
    }
}

impl VerifierClient {
    /// Creates a client backed by the default reqwest transport.
    pub fn new(base_url: &str) -> Result<Self, VerifierClientError> {
        let http_client = ReqwestClient::new().map_err(VerifierClientError::Transport)?;
        Self::with_http_client(base_url, Arc::new(http_client))
    }

    /// Creates a client with an injected transport.
    ///
    /// Used by tests to simulate the verifier service, and by applications
    /// that bring their own HTTP/TLS stack.
    pub fn with_http_client(
        base_url: &str,
        http_client: Arc<dyn AsyncHttpClient + Send + Sync>,
    ) -> Result<Self, VerifierClientError> {
        Ok(Self {
            adapter: VerifierServiceAdapter::new(base_url, http_client)?,
        })
    }

    /// Checks whether the given AID is currently authorized.
    pub async fn check_login(&self, aid: &str) -> Result<VerifierResponse, VerifierClientError> {
        let raw = self.adapter.check_login_request(aid).await?;
        VerifierResponse::from_raw(raw)
    }

    /// Presents a vLEI credential to log the holder in.
    ///
    /// The credential payload is passed through opaque, in its CESR
    /// encoding; the verifier performs all validation.
    pub async fn login(
        &self,
        said: &str,
        vlei: &str,
    ) -> Result<VerifierResponse, VerifierClientError> {
        let raw = self
            .adapter
            .credential_presentation_request(said, vlei)
            .await?;
        VerifierResponse::from_raw(raw)
    }

    /// Verifies the signature over a request's signed headers.
    ///
    /// `sig` is the signature and `ser` the serialized header material it
    /// covers.
    pub async fn verify_signed_headers(
        &self,
        aid: &str,
        sig: &str,
        ser: &str,
    ) -> Result<VerifierResponse, VerifierClientError> {
        let raw = self
            .adapter
            .verify_signed_headers_request(aid, sig, ser)
            .await?;
        VerifierResponse::from_raw(raw)
    }

    /// Verifies a raw signature over a digest for the given signer AID.
    pub async fn verify_signature(
        &self,
        signature: &str,
        signer_aid: &str,
        non_prefixed_digest: &str,
    ) -> Result<VerifierResponse, VerifierClientError> {
        let raw = self
            .adapter
            .verify_signature_request(signature, signer_aid, non_prefixed_digest)
            .await?;
        VerifierResponse::from_raw(raw)
    }

    /// Registers a root of trust with the verifier.
    ///
    /// `vlei` is the trust anchor credential and `oobi` the out-of-band
    /// introduction used to resolve its key state.
    pub async fn add_root_of_trust(
        &self,
        aid: &str,
        vlei: &str,
        oobi: &str,
    ) -> Result<VerifierResponse, VerifierClientError> {
        let raw = self
            .adapter
            .add_root_of_trust_request(aid, vlei, oobi)
            .await?;
        VerifierResponse::from_raw(raw)
    }
}
