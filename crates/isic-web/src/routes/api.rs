//! JSON API route handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::state::AppState;
use isic_core::{ClassificationRequest, ClassifyError};

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct ClassifyRequest {
    pub credential: String,
    pub company_name: String,
    pub company_description: String,
}

#[derive(Serialize)]
pub struct ClassifyResponse {
    pub result_text: String,
    pub file_name: String,
    pub mime_type: &'static str,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub kind: &'static str,
}

/// Maps a [`ClassifyError`] onto an HTTP status and JSON body.
pub struct ApiError(pub ClassifyError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = if self.0.is_precondition() {
            StatusCode::UNPROCESSABLE_ENTITY
        } else {
            StatusCode::BAD_GATEWAY
        };
        let body = ErrorResponse {
            error: self.0.to_string(),
            kind: self.0.kind(),
        };
        (status, Json(body)).into_response()
    }
}

/// POST /api/classify
pub async fn classify(
    State(state): State<AppState>,
    Json(req): Json<ClassifyRequest>,
) -> Result<Json<ClassifyResponse>, ApiError> {
    let request = ClassificationRequest::new(req.credential, req.company_name.clone(), req.company_description);
    let result = isic_core::classify(state.generator.as_ref(), request)
        .await
        .map_err(ApiError)?;

    let artifact = result.download(&req.company_name);
    Ok(Json(ClassifyResponse {
        result_text: result.result_text,
        file_name: artifact.file_name,
        mime_type: artifact.mime_type,
    }))
}

/// GET /health
pub async fn health() -> &'static str {
    "ok"
}
