//! # LeadRelay API サーバー
//!
//! マーケティングサイトのフォーム送信を通知メールに変換する HTTP サーバー。
//!
//! ## 役割
//!
//! - **フォーム受付**: contact / get-started / job-application の 3 種類の
//!   フォーム送信を JSON で受け付ける
//! - **通知メール送信**: 1 件の送信につきスタッフ宛と送信者宛の 2 通を送信する
//! - **設定状態公開**: メールトランスポートの構築可否をステータス API で公開する
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `API_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `API_PORT` | No | ポート番号（デフォルト: `8080`） |
//! | `EMAIL_HOST` | No | SMTP ホスト（デフォルト: `smtp.gmail.com`） |
//! | `EMAIL_PORT` | No | SMTP ポート（デフォルト: `587`、`465` は implicit TLS） |
//! | `EMAIL_USER` | No | SMTP 認証ユーザー（送信元アドレスを兼ねる） |
//! | `EMAIL_PASSWORD` | No | SMTP 認証パスワード |
//!
//! `EMAIL_USER` / `EMAIL_PASSWORD` のどちらかが欠けている場合、サーバーは
//! 起動するがメール送信は無効のまま動作する。
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境
//! cargo run -p leadrelay-api
//!
//! # 本番環境
//! EMAIL_USER=notify@example.com EMAIL_PASSWORD=... cargo run -p leadrelay-api --release
//! ```

mod config;
mod error;
mod handler;
mod usecase;

use std::{net::SocketAddr, sync::Arc};

use axum::{
    Router,
    routing::{get, post},
};
use config::{ApiConfig, EmailConfig};
use handler::{
    EmailState,
    email_status,
    health_check,
    send_contact_emails,
    send_get_started_emails,
    send_job_application_emails,
};
use leadrelay_infra::{SmtpNotificationSender, notification::NotificationSender};
use leadrelay_shared::observability::TracingConfig;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use usecase::{Mailer, TemplateRenderer};

/// API サーバーのエントリーポイント
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    // トレーシング初期化
    let tracing_config = TracingConfig::from_env("api");
    leadrelay_shared::observability::init_tracing(tracing_config);
    let _tracing_guard = tracing::info_span!("app", service = "api").entered();

    // 設定読み込み
    let config = ApiConfig::from_env();

    tracing::info!(
        "LeadRelay API サーバーを起動します: {}:{}",
        config.host,
        config.port
    );

    // メールトランスポートを構築（認証情報が揃っている場合のみ）
    let sender = build_sender(&config.email);

    // 依存コンポーネントを初期化
    let renderer = TemplateRenderer::new()?;
    let mailer = Mailer::new(sender, renderer);
    let email_state = Arc::new(EmailState {
        mailer: Arc::new(mailer),
    });

    // ルーター構築
    let app = Router::new()
        .route("/health", get(health_check))
        .route("/api/email/contact", post(send_contact_emails))
        .route("/api/email/get-started", post(send_get_started_emails))
        .route("/api/email/job-application", post(send_job_application_emails))
        .route("/api/email/status", get(email_status))
        .with_state(email_state)
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .expect("アドレスのパースに失敗しました");

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("LeadRelay API サーバーが起動しました: {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// 認証情報が揃っている場合のみメールトランスポートを構築する
///
/// 認証情報の欠落も構築失敗（不正なホスト名等）もエラーにはせず、
/// 送信無効（`None`）のままプロセスを起動させる。
fn build_sender(email: &EmailConfig) -> Option<Arc<dyn NotificationSender>> {
    let Some((user, password)) = email.credentials() else {
        tracing::warn!("EMAIL_USER / EMAIL_PASSWORD が未設定のためメール送信は無効です");
        return None;
    };

    match SmtpNotificationSender::new(&email.host, email.port, user, password) {
        Ok(smtp) => {
            tracing::info!(
                host = %email.host,
                port = email.port,
                "メールトランスポートを構築しました"
            );
            Some(Arc::new(smtp))
        }
        Err(e) => {
            tracing::error!(
                host = %email.host,
                error = %e,
                "メールトランスポートの構築に失敗したため送信無効で起動します"
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_email_config(host: &str, user: Option<&str>, password: Option<&str>) -> EmailConfig {
        EmailConfig {
            host:     host.to_string(),
            port:     587,
            user:     user.map(str::to_string),
            password: password.map(str::to_string),
        }
    }

    #[test]
    fn 認証情報が揃っていればトランスポートが構築される() {
        let email = make_email_config("smtp.example.com", Some("user@example.com"), Some("pw"));
        assert!(build_sender(&email).is_some());
    }

    #[test]
    fn 認証情報が欠けていればnoneを返す() {
        let email = make_email_config("smtp.example.com", Some("user@example.com"), None);
        assert!(build_sender(&email).is_none());
    }

    #[test]
    fn トランスポート構築に失敗しても送信無効で継続する() {
        // 不正なホスト名は TLS パラメータの構築に失敗するが、プロセスは落とさない
        let email = make_email_config("smtp host with spaces", Some("user@example.com"), Some("pw"));
        assert!(build_sender(&email).is_none());
    }
}
