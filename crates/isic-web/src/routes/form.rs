//! HTML form route handlers.
//!
//! The page is rendered server-side; every submission re-renders it with the
//! outcome of one classification.

use askama::Template;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    Form,
};
use serde::Deserialize;
use tracing::debug;

use crate::state::AppState;
use isic_core::classification::model::suggested_file_name;
use isic_core::{ClassificationRequest, ClassificationResult, ClassifyError};

// ============================================================
// TEMPLATES
// ============================================================

#[derive(Template, Default)]
#[template(path = "index.html")]
struct IndexTemplate {
    company_name: String,
    company_description: String,
    error: Option<String>,
    show_key_hint: bool,
    result: Option<ResultView>,
}

/// View model for a successful classification.
///
/// `encoded` carries the text to `/download`. Browsers rewrite line breaks in
/// submitted field values to CRLF, so the raw text cannot round-trip a form.
struct ResultView {
    text: String,
    encoded: String,
    file_name: String,
}

impl ResultView {
    fn new(company_name: &str, result: ClassificationResult) -> Self {
        Self {
            encoded: URL_SAFE_NO_PAD.encode(result.result_text.as_bytes()),
            text: result.result_text,
            file_name: suggested_file_name(company_name),
        }
    }
}

// ============================================================
// REQUEST TYPES
// ============================================================

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct ClassifyForm {
    pub api_key: String,
    pub company_name: String,
    pub company_description: String,
}

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct DownloadForm {
    pub company_name: String,
    /// URL-safe base64 (no padding) of the result text.
    pub result_text: String,
}

// ============================================================
// HANDLERS
// ============================================================

/// GET / - Render the empty form.
pub async fn index() -> Response {
    render(IndexTemplate::default())
}

/// POST /classify - Classify the submitted company and re-render the page.
pub async fn classify(State(state): State<AppState>, Form(form): Form<ClassifyForm>) -> Response {
    let ClassifyForm {
        api_key,
        company_name,
        company_description,
    } = form;

    let request = ClassificationRequest::new(api_key, company_name.clone(), company_description.clone());
    let outcome = isic_core::classify(state.generator.as_ref(), request).await;

    let mut page = IndexTemplate {
        company_name,
        company_description,
        ..Default::default()
    };

    let status = match outcome {
        Ok(result) => {
            page.result = Some(ResultView::new(&page.company_name, result));
            StatusCode::OK
        }
        Err(e) => {
            debug!(kind = e.kind(), "Classification rejected");
            page.show_key_hint = matches!(e, ClassifyError::ExternalCallFailed(_));
            page.error = Some(e.to_string());
            if e.is_precondition() {
                StatusCode::UNPROCESSABLE_ENTITY
            } else {
                StatusCode::BAD_GATEWAY
            }
        }
    };

    (status, render(page)).into_response()
}

/// POST /download - Return the result text as a file attachment.
pub async fn download(Form(form): Form<DownloadForm>) -> Response {
    let result_text = match URL_SAFE_NO_PAD
        .decode(form.result_text.trim())
        .map_err(|e| e.to_string())
        .and_then(|bytes| String::from_utf8(bytes).map_err(|e| e.to_string()))
    {
        Ok(text) => text,
        Err(e) => {
            debug!(error = %e, "Rejected download payload");
            return (StatusCode::BAD_REQUEST, "Invalid download payload").into_response();
        }
    };

    let artifact = ClassificationResult { result_text }.download(&form.company_name);

    let file_name: String = artifact
        .file_name
        .chars()
        .map(|c| if c.is_control() || c == '"' || c == '\\' { '_' } else { c })
        .collect();
    let disposition = format!("attachment; filename=\"{}\"", file_name);

    (
        [
            (header::CONTENT_TYPE, format!("{}; charset=utf-8", artifact.mime_type)),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        artifact.bytes,
    )
        .into_response()
}

// ============================================================
// HELPERS
// ============================================================

fn render(template: IndexTemplate) -> Response {
    match template.render() {
        Ok(html) => Html(html).into_response(),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, Html(format!("Template error: {}", e))).into_response(),
    }
}
