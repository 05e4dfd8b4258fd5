//! Classification request handling.
//!
//! Validates a submission, renders the prompt, and makes the single model call.

pub mod model;
pub mod prompt;

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::{ClassifyError, ClassifyResult};
use crate::generator::TextGenerator;
use model::{ClassificationRequest, ClassificationResult};

/// Check the submission's fields in order, stopping at the first blank one.
pub fn validate(request: &ClassificationRequest) -> ClassifyResult<()> {
    if request.credential.is_blank() {
        return Err(ClassifyError::MissingCredential);
    }
    if request.company_name.trim().is_empty() {
        return Err(ClassifyError::MissingName);
    }
    if request.company_description.trim().is_empty() {
        return Err(ClassifyError::MissingDescription);
    }
    Ok(())
}

/// Classify a company with the given generator.
///
/// No network call is made unless all three fields are present. The model's
/// text is returned untouched; its ISIC codes are not checked.
pub async fn classify(
    generator: &dyn TextGenerator,
    request: ClassificationRequest,
) -> ClassifyResult<ClassificationResult> {
    validate(&request)?;

    let request_id = Uuid::new_v4();
    let prompt = prompt::build_prompt(&request.company_name, &request.company_description);

    info!(
        %request_id,
        model = generator.model(),
        name_len = request.company_name.len(),
        description_len = request.company_description.len(),
        "Requesting ISIC classification"
    );

    match generator.generate(&request.credential, &prompt).await {
        Ok(result_text) => {
            debug!(%request_id, response_len = result_text.len(), "Classification received");
            Ok(ClassificationResult { result_text })
        }
        Err(e) => {
            warn!(%request_id, error = %e, "Classification call failed");
            Err(e.into())
        }
    }
}
