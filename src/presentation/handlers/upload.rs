use axum::Json;
use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::services::UploadError;
use crate::infrastructure::observability::transcript_preview;
use crate::presentation::state::AppState;

use super::upload_form::UploadForm;

pub const UPLOAD_SUCCESS_MESSAGE: &str = "Audio uploaded successfully!";

#[derive(Serialize)]
pub struct UploadResponse {
    pub message: &'static str,
    pub url: String,
    pub transcript: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// `POST /upload`. Every failure, whatever its cause, is reported as a 500
/// with the error message.
#[tracing::instrument(skip(state, multipart))]
pub async fn upload_handler(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    let form = match multipart {
        Ok(multipart) => UploadForm::read(multipart).await,
        Err(rejection) => Err(UploadError::InvalidRequest(rejection.body_text())),
    };
    let form = match form {
        Ok(form) => form,
        Err(e) => return upload_failure(e),
    };

    tracing::debug!(
        contract = %form.contract,
        filename = %form.audio.filename,
        bytes = form.audio.size_bytes(),
        transcript = %transcript_preview(&form.transcript),
        "Processing audio upload"
    );

    match state.upload_service.upload(form.audio, form.transcript).await {
        Ok(receipt) => (
            StatusCode::OK,
            Json(UploadResponse {
                message: UPLOAD_SUCCESS_MESSAGE,
                url: receipt.url,
                transcript: receipt.transcript,
            }),
        )
            .into_response(),
        Err(e) => upload_failure(e),
    }
}

fn upload_failure(e: UploadError) -> Response {
    tracing::error!(error = %e, "Audio upload failed");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: e.to_string(),
        }),
    )
        .into_response()
}
