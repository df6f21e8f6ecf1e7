//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## 設計方針
//!
//! - 各ハンドラはサブモジュールに配置
//! - 親モジュールで re-export し、フラットな API を提供
//! - ハンドラは薄く保ち、送信フローは usecase 層（Mailer）に委譲
//!
//! ## ハンドラ一覧
//!
//! - `health`: ヘルスチェック
//! - `email`: フォーム送信の通知メール（contact / get-started / job-application / status）

pub mod email;
pub mod health;

pub use email::{
    EmailState,
    email_status,
    send_contact_emails,
    send_get_started_emails,
    send_job_application_emails,
};
pub use health::health_check;
