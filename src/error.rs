use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{Html, IntoResponse},
};
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;

use crate::views;

#[derive(Debug, ThisError)]
pub enum QnaError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] SqlxError),

    #[error("Invalid roster file: {0}")]
    ImportFormat(String),

    #[error("Shareholder number already registered: {0}")]
    DuplicateShareholder(String),

    #[error("Upload error: {0}")]
    Multipart(#[from] MultipartError),

    #[error("No file was uploaded")]
    MissingUpload,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl QnaError {
    pub fn status(&self) -> StatusCode {
        match self {
            QnaError::ImportFormat(_) | QnaError::MissingUpload => StatusCode::BAD_REQUEST,
            // Carries 413 when the upload exceeds the body limit.
            QnaError::Multipart(e) => e.status(),
            QnaError::DuplicateShareholder(_) => StatusCode::CONFLICT,
            QnaError::DatabaseError(_) | QnaError::Json(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for QnaError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let message = match &self {
            QnaError::DatabaseError(e) => {
                tracing::error!(error = %e, "database error");
                "An internal server error occurred.".to_string()
            }
            QnaError::Json(e) => {
                tracing::error!(error = %e, "serialization error");
                "An internal server error occurred.".to_string()
            }
            other => other.to_string(),
        };
        (status, Html(views::error_page(status, &message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn import_errors_are_client_errors() {
        assert_eq!(
            QnaError::ImportFormat("missing column `shares`".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(QnaError::MissingUpload.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            QnaError::DuplicateShareholder("S001".into()).status(),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn database_errors_hide_details() {
        let resp = QnaError::DatabaseError(SqlxError::RowNotFound).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
