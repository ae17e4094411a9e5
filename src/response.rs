use http::Response;
use serde::Serialize;
use serde_json::Value;

use crate::error::VerifierClientError;

/// Normalized result of a verifier operation.
///
/// Every client method returns this shape whether or not the verifier
/// reported success: a non-2xx status is carried in `code` as data, not
/// raised as an error. Callers branch on `code` (and `body`/`message`) to
/// distinguish acceptance from rejection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerifierResponse {
    /// HTTP status code of the underlying response.
    pub code: u16,

    /// Fully parsed response payload.
    pub body: Value,

    /// Human-readable message, taken from the body's `msg` field.
    pub message: String,
}

impl VerifierResponse {
    /// Projects a raw verifier response into the normalized shape.
    ///
    /// Fails if the body is not valid JSON or lacks a string `msg` field.
    /// No default message is ever substituted: "the verifier said nothing"
    /// stays distinct from "the verifier said X".
    pub(crate) fn from_raw(raw: Response<Vec<u8>>) -> Result<Self, VerifierClientError> {
        let code = raw.status().as_u16();
        let body: Value = serde_json::from_slice(raw.body())?;
        let message = body
            .get("msg")
            .and_then(Value::as_str)
            .ok_or(VerifierClientError::MissingMessage)?
            .to_string();

        Ok(Self {
            code,
            body,
            message,
        })
    }
}

#[cfg(test)]
mod test {
    use http::{Response, StatusCode};
    use serde_json::json;

    use super::*;

    fn raw(status: StatusCode, body: &[u8]) -> Response<Vec<u8>> {
        Response::builder()
            .status(status)
            .body(body.to_vec())
            .unwrap()
    }

    #[test]
    fn extracts_message_and_preserves_body() {
        let body = json!({"msg": "AID is authorized", "said": "EGk"});
        let response =
            VerifierResponse::from_raw(raw(StatusCode::OK, &serde_json::to_vec(&body).unwrap()))
                .unwrap();

        assert_eq!(response.code, 200);
        assert_eq!(response.message, "AID is authorized");
        assert_eq!(response.body, body);
    }

    #[test]
    fn non_2xx_status_is_passed_through() {
        let response = VerifierResponse::from_raw(raw(
            StatusCode::UNAUTHORIZED,
            br#"{"msg": "AID not authorized"}"#,
        ))
        .unwrap();

        assert_eq!(response.code, 401);
        assert_eq!(response.message, "AID not authorized");
    }

    #[test]
    fn missing_msg_field_fails() {
        let err = VerifierResponse::from_raw(raw(StatusCode::OK, br#"{"status": "ok"}"#))
            .unwrap_err();
        assert!(matches!(err, VerifierClientError::MissingMessage));
    }

    #[test]
    fn non_string_msg_fails() {
        let err =
            VerifierResponse::from_raw(raw(StatusCode::OK, br#"{"msg": 42}"#)).unwrap_err();
        assert!(matches!(err, VerifierClientError::MissingMessage));
    }

    #[test]
    fn non_json_body_fails() {
        let err =
            VerifierResponse::from_raw(raw(StatusCode::OK, b"<html>bad gateway</html>"))
                .unwrap_err();
        assert!(matches!(err, VerifierClientError::MalformedBody(_)));
    }
}
