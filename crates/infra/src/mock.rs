//! # テスト用モック送信
//!
//! ユースケーステストで使用するインメモリのモック送信実装。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! leadrelay-infra = { workspace = true, features = ["test-utils"] }
//! ```

use std::{
    collections::HashSet,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use leadrelay_domain::notification::{EmailMessage, NotificationError};

use crate::notification::NotificationSender;

/// 送信メッセージを記録するモック送信
///
/// 送信されたメールを記録し、テストから参照できるようにする。
/// [`fail_for`](Self::fail_for) で特定の宛先への送信失敗を注入できる。
#[derive(Clone, Default)]
pub struct MockNotificationSender {
    sent:            Arc<Mutex<Vec<EmailMessage>>>,
    fail_recipients: Arc<Mutex<HashSet<String>>>,
}

impl MockNotificationSender {
    pub fn new() -> Self {
        Self::default()
    }

    /// 指定した宛先への送信を失敗させる
    pub fn fail_for(&self, recipient: impl Into<String>) {
        self.fail_recipients.lock().unwrap().insert(recipient.into());
    }

    /// 送信に成功したメールの一覧を返す
    pub fn sent_emails(&self) -> Vec<EmailMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl NotificationSender for MockNotificationSender {
    async fn send_email(&self, email: &EmailMessage) -> Result<(), NotificationError> {
        if self.fail_recipients.lock().unwrap().contains(&email.to) {
            return Err(NotificationError::SendFailed(format!(
                "モックが送信失敗を注入: {}",
                email.to
            )));
        }

        self.sent.lock().unwrap().push(email.clone());
        Ok(())
    }
}
