/// Error returned by verifier client operations.
///
/// A non-2xx status from the verifier is not an error: it is carried in the
/// normalized [VerifierResponse](crate::VerifierResponse). These variants
/// cover the cases where no normalized response can be produced at all.
#[derive(Debug, thiserror::Error)]
pub enum VerifierClientError {
    /// The base URL or a derived endpoint URL could not be parsed.
    #[error("invalid verifier URL: {0}")]
    Url(#[from] url::ParseError),

    /// An HTTP request could not be constructed.
    #[error("unable to construct request: {0}")]
    Request(#[from] http::Error),

    /// A request payload could not be encoded as JSON.
    #[error("unable to encode request payload: {0}")]
    Encode(#[source] serde_json::Error),

    /// The transport failed before a response was received, e.g. connection
    /// refused or DNS failure.
    #[error("transport failure: {0}")]
    Transport(#[source] anyhow::Error),

    /// The verifier returned a body that is not valid JSON.
    #[error("malformed verifier response body: {0}")]
    MalformedBody(#[from] serde_json::Error),

    /// The verifier returned a JSON body without a string `msg` field.
    #[error("verifier response body has no `msg` field")]
    MissingMessage,
}
