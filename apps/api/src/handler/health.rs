//! # ヘルスチェックハンドラ
//!
//! API サーバーの稼働状態を確認するためのエンドポイント。
//!
//! レスポンス型は [`leadrelay_shared::HealthResponse`] を参照。

use axum::Json;
use leadrelay_shared::HealthResponse;

/// API サーバーのヘルスチェックエンドポイント
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status:  "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
