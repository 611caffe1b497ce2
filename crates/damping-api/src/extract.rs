//! JSON body extractor with the API's error contract.
//!
//! Axum's own [`Json`](axum::Json) extractor answers a missing field with
//! `422 Unprocessable Entity`. [`Payload`] wraps it so that every body
//! failure (missing required field, wrong type, malformed JSON, wrong
//! content type) becomes [`ApiError::BadRequest`] with serde's message,
//! which names the offending field.

use axum::extract::FromRequest;

use crate::error::ApiError;

/// A request body deserialized into `T`, rejecting with a 400.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct Payload<T>(pub T);
