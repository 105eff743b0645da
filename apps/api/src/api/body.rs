use axum::body::Bytes;
use serde::de::DeserializeOwned;

use crate::api::errors::ApiError;

/// Decodes a JSON request body regardless of its declared content type
///
/// An empty (or whitespace-only) body and undecodable JSON are both
/// `400 Bad Request`.
pub fn decode_json<T: DeserializeOwned>(body: &Bytes) -> Result<T, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(ApiError::bad_request("Please send a request body"));
    }

    serde_json::from_slice(body)
        .map_err(|e| ApiError::bad_request(format!("Invalid JSON body: {}", e)))
}
