//! Validated JSON extractor
//!
//! `ValidatedJson<T>` works like `axum::Json<T>` and then runs
//! `validator::Validate::validate()` on the value. Both malformed bodies and
//! failed validation are answered with 400 and an `{"error": ...}` body.

use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::de::DeserializeOwned;
use validator::Validate;

use super::ApiError;

pub struct ValidatedJson<T>(pub T);

pub enum ValidatedJsonRejection {
    JsonError(JsonRejection),
    ValidationError(validator::ValidationErrors),
}

impl ValidatedJsonRejection {
    fn message(&self) -> String {
        match self {
            Self::JsonError(rejection) => format!("Invalid request body: {}", rejection.body_text()),
            Self::ValidationError(errors) => describe(errors),
        }
    }
}

/// `field: message` pairs sorted by field, joined with `; `.
fn describe(errors: &validator::ValidationErrors) -> String {
    let mut parts = Vec::new();
    for (field, field_errors) in errors.field_errors() {
        for error in field_errors {
            let detail = match &error.message {
                Some(message) => message.to_string(),
                None => error.code.to_string(),
            };
            parts.push(format!("{}: {}", field, detail));
        }
    }

    if parts.is_empty() {
        return "Validation failed".to_string();
    }
    parts.sort();
    parts.join("; ")
}

impl IntoResponse for ValidatedJsonRejection {
    fn into_response(self) -> Response {
        ApiError::bad_request(self.message()).into_response()
    }
}

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ValidatedJsonRejection;

    async fn from_request(
        req: axum::extract::Request,
        state: &S,
    ) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(ValidatedJsonRejection::JsonError)?;

        value
            .validate()
            .map_err(ValidatedJsonRejection::ValidationError)?;

        Ok(ValidatedJson(value))
    }
}
