//! # API サーバー設定
//!
//! 環境変数から API サーバーとメールトランスポートの設定を読み込む。

use std::env;

/// API サーバーの設定
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// バインドアドレス
    pub host:  String,
    /// ポート番号
    pub port:  u16,
    /// メールトランスポート設定
    pub email: EmailConfig,
}

/// メールトランスポートの設定
///
/// プロセス起動時に一度だけ読み込まれる。`EMAIL_USER` / `EMAIL_PASSWORD` の
/// どちらかが欠けている場合はエラーにせず、プロセスの生存期間を通じて
/// 送信無効のまま動作する（起動後の環境変数変更は反映されない）。
#[derive(Debug, Clone)]
pub struct EmailConfig {
    /// SMTP ホスト
    pub host:     String,
    /// SMTP ポート（465 は implicit TLS、それ以外は STARTTLS）
    pub port:     u16,
    /// SMTP 認証ユーザー（送信元アドレスを兼ねる）
    pub user:     Option<String>,
    /// SMTP 認証パスワード
    pub password: Option<String>,
}

impl ApiConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Self {
        Self {
            host:  env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port:  env::var("API_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .expect("API_PORT は有効なポート番号である必要があります"),
            email: EmailConfig::from_env(),
        }
    }
}

impl EmailConfig {
    /// 環境変数からメール設定を読み込む
    fn from_env() -> Self {
        Self {
            host:     env::var("EMAIL_HOST").unwrap_or_else(|_| "smtp.gmail.com".to_string()),
            port:     env::var("EMAIL_PORT")
                .unwrap_or_else(|_| "587".to_string())
                .parse()
                .expect("EMAIL_PORT は有効なポート番号である必要があります"),
            user:     env::var("EMAIL_USER").ok(),
            password: env::var("EMAIL_PASSWORD").ok(),
        }
    }

    /// 認証情報が揃っている場合のみ `(user, password)` を返す
    ///
    /// どちらかが欠けている場合は `None`（トランスポートは構築されない）。
    pub fn credentials(&self) -> Option<(&str, &str)> {
        self.user.as_deref().zip(self.password.as_deref())
    }
}
