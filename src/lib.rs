//! Client library for the [vLEI verifier] service.
//!
//! [vLEI verifier]: <https://github.com/GLEIF-IT/vlei-verifier>
//!
//! The verifier authenticates AIDs, validates presented vLEI credentials,
//! verifies signed requests and raw signatures, and manages roots of trust.
//! This crate only translates typed method calls into HTTP requests against
//! the verifier's REST endpoints and translates responses back into a
//! uniform [VerifierResponse]; all credential and signature semantics live
//! in the remote service.
//!
//! # Usage
//!
//! ```ignore
//! use vlei_verifier_client::VerifierClient;
//!
//! let client = VerifierClient::new("http://localhost:7676")?;
//!
//! let response = client.check_login("EAbc123").await?;
//! if response.code == 200 {
//!     println!("authorized: {}", response.message);
//! }
//! ```
//!
//! A non-2xx status from the verifier is not an error: it is returned in
//! [VerifierResponse::code] with whatever body and `msg` the service
//! produced. A method only fails ([VerifierClientError]) when the transport
//! breaks or the response body cannot be normalized.
//!
//! The HTTP transport is pluggable through the
//! [AsyncHttpClient](http_client::AsyncHttpClient) trait; see
//! [VerifierClient::with_http_client].

mod adapter;
pub mod client;
pub mod error;
pub mod http_client;
pub mod response;

pub use client::{VerifierClient, DEFAULT_VERIFIER_URL};
pub use error::VerifierClientError;
pub use response::VerifierResponse;
