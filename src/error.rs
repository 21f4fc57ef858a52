use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::response::{ApiResponse, Meta};
use crate::services::pricing::PricingError;

#[derive(Debug, Error)]
pub enum AppError {
    /// The primary entity addressed by the request does not exist.
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("Bad Request {0}")]
    BadRequest(String),

    /// A write referenced an entity that does not exist, or broke a cross-entity rule.
    #[error("{0}")]
    InvalidReference(String),

    /// A stored reference points at a document that is gone.
    #[error("Failed to retrieve {entity} data")]
    DanglingReference { entity: &'static str, detail: String },

    #[error("Database error")]
    OrmError(#[from] sea_orm::DbErr),

    #[error("Internal Server Error")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) | AppError::InvalidReference(_) => StatusCode::BAD_REQUEST,
            AppError::DanglingReference { .. } | AppError::OrmError(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn detail(&self) -> String {
        match self {
            AppError::DanglingReference { detail, .. } => detail.clone(),
            AppError::OrmError(err) => err.to_string(),
            AppError::Internal(err) => format!("{err:#}"),
            _ => self.to_string(),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(format!("Invalid request body: {}", rejection.body_text()))
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(format!("Invalid id: {}", rejection.body_text()))
    }
}

impl From<PricingError> for AppError {
    fn from(err: PricingError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

#[derive(Serialize)]
struct ErrorData {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self.detail(), "{}", self);
        }

        let body = ApiResponse {
            message: self.to_string(),
            data: Some(ErrorData {
                error: self.detail(),
            }),
            meta: Some(Meta::empty()),
        };

        (status, axum::Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn assert_error(error: AppError, expected_status: StatusCode, expected_message: &str) {
        let resp = error.into_response();
        assert_eq!(resp.status(), expected_status);
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["message"], expected_message);
        assert!(json["data"]["error"].is_string());
    }

    #[tokio::test]
    async fn missing_primary_entity_is_404() {
        assert_error(
            AppError::NotFound("Purchase"),
            StatusCode::NOT_FOUND,
            "Purchase not found",
        )
        .await;
    }

    #[tokio::test]
    async fn invalid_reference_is_400() {
        assert_error(
            AppError::InvalidReference("User does not exist".into()),
            StatusCode::BAD_REQUEST,
            "User does not exist",
        )
        .await;
    }

    #[tokio::test]
    async fn dangling_reference_is_500_with_detail() {
        let err = AppError::DanglingReference {
            entity: "provider",
            detail: "provider 42 is missing".into(),
        };
        let resp = err.into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["message"], "Failed to retrieve provider data");
        assert_eq!(json["data"]["error"], "provider 42 is missing");
    }

    #[tokio::test]
    async fn database_failure_is_500() {
        assert_error(
            AppError::OrmError(sea_orm::DbErr::Custom("connection reset".into())),
            StatusCode::INTERNAL_SERVER_ERROR,
            "Database error",
        )
        .await;
    }

    #[tokio::test]
    async fn bad_request_is_400() {
        assert_error(
            AppError::BadRequest("Invalid id".into()),
            StatusCode::BAD_REQUEST,
            "Bad Request Invalid id",
        )
        .await;
    }
}
