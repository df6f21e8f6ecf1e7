//! SMTP 通知送信実装
//!
//! lettre の `AsyncSmtpTransport` を使用してメールを送信する。
//! ポート 465 は implicit TLS、それ以外は STARTTLS で接続する。

use std::time::Duration;

use async_trait::async_trait;
use lettre::{
    AsyncSmtpTransport,
    AsyncTransport,
    Tokio1Executor,
    message::{Message, SinglePart, header::ContentType},
    transport::smtp::authentication::Credentials,
};
use leadrelay_domain::notification::{EmailMessage, NotificationError};

use super::NotificationSender;

/// 送信 1 回あたりのタイムアウト
///
/// 元システムにはタイムアウトがなく、SMTP サーバーの無応答が
/// HTTP リクエストを無期限に止めてしまうため、明示的に上限を設ける。
const SEND_TIMEOUT: Duration = Duration::from_secs(15);

/// 送信元の表示名（設定された EMAIL_USER と組で使用する）
const FROM_DISPLAY_NAME: &str = "LeadRelay";

/// SMTP 通知送信
///
/// `lettre::AsyncSmtpTransport<Tokio1Executor>` をラップする。
/// プロセス起動時に一度だけ構築され、以後は読み取り専用で共有される。
pub struct SmtpNotificationSender {
    transport:    AsyncSmtpTransport<Tokio1Executor>,
    from_address: String,
}

impl SmtpNotificationSender {
    /// 新しい SMTP 送信インスタンスを作成
    ///
    /// # 引数
    ///
    /// - `host`: SMTP サーバーのホスト名（例: "smtp.gmail.com"）
    /// - `port`: SMTP サーバーのポート番号（465 は implicit TLS）
    /// - `user`: SMTP 認証ユーザー（送信元アドレスを兼ねる）
    /// - `password`: SMTP 認証パスワード
    pub fn new(
        host: &str,
        port: u16,
        user: &str,
        password: &str,
    ) -> Result<Self, NotificationError> {
        // 465 は implicit TLS、587 等は STARTTLS
        let builder = if port == 465 {
            AsyncSmtpTransport::<Tokio1Executor>::relay(host)
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(host)
        }
        .map_err(|e| NotificationError::SendFailed(format!("SMTP 接続設定が不正: {e}")))?;

        let transport = builder
            .port(port)
            .credentials(Credentials::new(user.to_string(), password.to_string()))
            .timeout(Some(SEND_TIMEOUT))
            .build();

        Ok(Self {
            transport,
            from_address: format!("{FROM_DISPLAY_NAME} <{user}>"),
        })
    }
}

#[async_trait]
impl NotificationSender for SmtpNotificationSender {
    async fn send_email(&self, email: &EmailMessage) -> Result<(), NotificationError> {
        let message =
            Message::builder()
                .from(self.from_address.parse().map_err(|e| {
                    NotificationError::SendFailed(format!("送信元アドレス不正: {e}"))
                })?)
                .to(email
                    .to
                    .parse()
                    .map_err(|e| NotificationError::SendFailed(format!("宛先アドレス不正: {e}")))?)
                .subject(&email.subject)
                .singlepart(
                    SinglePart::builder()
                        .header(ContentType::TEXT_HTML)
                        .body(email.html_body.clone()),
                )
                .map_err(|e| NotificationError::SendFailed(format!("メッセージ構築失敗: {e}")))?;

        self.transport
            .send(message)
            .await
            .map_err(|e| NotificationError::SendFailed(format!("SMTP 送信失敗: {e}")))?;

        Ok(())
    }
}
