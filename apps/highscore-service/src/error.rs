//! # Highscore Service エラー定義
//!
//! Highscore Service 固有のエラーと、HTTP レスポンスへの変換を定義する。
//!
//! レスポンスボディはすべて `{"ERROR": "<message>"}` の形式。
//! クライアント起因のエラーは 400、データベースエラーは 500 を返す。

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use highscore_shared::ErrorResponse;
use thiserror::Error;

/// Highscore Service で発生するエラー
#[derive(Debug, Error)]
pub enum HighscoreError {
    /// パラメータが 1 つも指定されていない
    #[error("パラメータが指定されていません")]
    NoParameters,

    /// 必須パラメータが未設定または空
    #[error("必須パラメータが設定されていません")]
    UnsetValues,

    /// パラメータの値が不正（値はフィールド名）
    #[error("パラメータの値が不正です: {0}")]
    InvalidInput(String),

    /// 未知の操作（`op` 未指定を含む）
    #[error("未知の操作です")]
    UnknownOperation,

    /// データベースエラー
    #[error("データベースエラー: {0}")]
    Database(#[from] highscore_infra::InfraError),
}

impl IntoResponse for HighscoreError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            HighscoreError::NoParameters => (StatusCode::BAD_REQUEST, ErrorResponse::no_parameters()),
            HighscoreError::UnsetValues => (StatusCode::BAD_REQUEST, ErrorResponse::unset_values()),
            HighscoreError::InvalidInput(field) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::invalid_values(field),
            ),
            HighscoreError::UnknownOperation => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::unknown_operation(),
            ),
            HighscoreError::Database(e) => {
                tracing::error!(
                    error = %e,
                    span_trace = %e.span_trace(),
                    "データベースエラー"
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::database_failure(),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    async fn into_parts(error: HighscoreError) -> (StatusCode, serde_json::Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[rstest]
    #[case(HighscoreError::NoParameters, "NO GET OR POST")]
    #[case(HighscoreError::UnsetValues, "UNSET VALUES")]
    #[case(HighscoreError::InvalidInput("score".to_string()), "INVALID VALUES: score")]
    #[case(HighscoreError::UnknownOperation, "op not recognized")]
    #[tokio::test]
    async fn test_クライアントエラーは400とerrorボディを返す(
        #[case] error: HighscoreError,
        #[case] expected: &str,
    ) {
        let (status, body) = into_parts(error).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, serde_json::json!({ "ERROR": expected }));
    }

    #[tokio::test]
    async fn test_データベースエラーは500で詳細を返さない() {
        let error = HighscoreError::from(highscore_infra::InfraError::from(
            sqlx::Error::PoolTimedOut,
        ));

        let (status, body) = into_parts(error).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, serde_json::json!({ "ERROR": "DATABASE FAILURE" }));
    }
}
