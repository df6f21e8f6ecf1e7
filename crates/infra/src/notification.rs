//! # 通知送信
//!
//! メール通知の送信を担当するインフラストラクチャモジュール。
//!
//! ## 設計方針
//!
//! - **trait による抽象化**: `NotificationSender` trait でメール送信を抽象化
//! - **SMTP 実装**: 本番・開発とも lettre の非同期 SMTP トランスポートを使用
//! - **未設定の表現**: 認証情報がない場合はトランスポート自体を構築しない
//!   （呼び出し側が `Option<Arc<dyn NotificationSender>>` で保持する）

mod smtp;

use async_trait::async_trait;
use leadrelay_domain::notification::{EmailMessage, NotificationError};
pub use smtp::SmtpNotificationSender;

/// メール送信トレイト
///
/// 通知基盤の中核。メール送信の具体的な方法を抽象化し、
/// テストではモック実装に差し替える。
#[async_trait]
pub trait NotificationSender: Send + Sync {
    /// メールを送信する
    async fn send_email(&self, email: &EmailMessage) -> Result<(), NotificationError>;
}
