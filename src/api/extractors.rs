use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::api::error::ApiError;

/// JSON body extractor that requires a top-level object and reports
/// failures in the API's `{ "error": ... }` shape.
pub struct ExpensePayload<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ExpensePayload<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|e| ApiError::bad_request(format!("Failed to parse JSON: {}", e)))?;

        if !value.is_object() {
            return Err(ApiError::bad_request("Request body must be a JSON object"));
        }

        let payload = serde_json::from_value(value)
            .map_err(|e| ApiError::bad_request(format!("Invalid expense payload: {}", e)))?;

        Ok(ExpensePayload(payload))
    }
}
