//! # API エラー定義
//!
//! API サーバー固有のエラーと、HTTP レスポンスへの変換を定義する。
//!
//! ## 設計方針
//!
//! - 必須フィールド欠落は façade 呼び出し前に 400 で返す
//! - レンダリング失敗等の予期しないエラーは 500 で返す
//! - 送信失敗はエラーではなくレスポンスの `sent: false` で表現する
//!   （このモジュールを経由しない）

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// エラーレスポンス
///
/// クライアント互換の `{ "success": false, "error": "..." }` 形式。
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error:   String,
}

/// API サーバーで発生するエラー
#[derive(Debug, Error)]
pub enum ApiError {
    /// 必須フィールド欠落（保持する文字列は必須フィールドの一覧）
    #[error("必須フィールドが不足: {0}")]
    Validation(String),

    /// 内部エラー（テンプレートレンダリング失敗等）
    ///
    /// `detail` はログにのみ出力し、レスポンスにはルートごとの固定文言
    /// `client_message` を載せる。
    #[error("内部エラー: {detail}")]
    Internal {
        detail:         String,
        client_message: &'static str,
    },
}

impl ApiError {
    /// 内部エラーを生成する
    ///
    /// `client_message` はレスポンスボディに載せるルートごとの固定文言。
    pub fn internal(source: impl std::fmt::Display, client_message: &'static str) -> Self {
        Self::Internal {
            detail: source.to_string(),
            client_message,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = match &self {
            ApiError::Validation(fields) => (
                StatusCode::BAD_REQUEST,
                format!("Missing required fields: {fields}"),
            ),
            ApiError::Internal {
                detail,
                client_message,
            } => {
                tracing::error!("内部エラー: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    (*client_message).to_string(),
                )
            }
        };

        (
            status,
            Json(ErrorResponse {
                success: false,
                error,
            }),
        )
            .into_response()
    }
}
