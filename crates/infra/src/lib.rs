//! # LeadRelay インフラ層
//!
//! 外部システムとの通信を担当するインフラストラクチャ層。
//!
//! ## 責務
//!
//! - **メール送信**: SMTP サーバーへの通知メール送信
//! - **テスト用モック**: `test-utils` feature で提供する記録用モック送信
//!
//! ## 依存関係
//!
//! ```text
//! api → infra → domain
//! ```
//!
//! インフラ層は `domain` に依存する。
//! ドメイン層はインフラ層に依存しない（依存性逆転の原則）。

pub mod notification;

#[cfg(any(test, feature = "test-utils"))]
pub mod mock;

pub use notification::{NotificationSender, SmtpNotificationSender};
