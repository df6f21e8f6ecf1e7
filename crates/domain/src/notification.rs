//! # 通知
//!
//! メール通知に関するドメインモデルを定義する。
//!
//! ## 設計方針
//!
//! - **2 通 1 組**: 1 件のフォーム送信につきスタッフ宛・送信者宛の 2 通を送る
//! - **結果の分離**: [`DeliveryReport`] がどちらの送信が成功したかを保持し、
//!   HTTP 契約向けには [`DeliveryReport::all_sent`] で単一の bool に畳む
//! - **エラーの非伝播**: 個々の送信失敗は façade 内でログに変換され、
//!   [`NotificationError`] が伝播するのはレンダリング失敗のみ

use thiserror::Error;

/// 通知送信エラー
#[derive(Debug, Error)]
pub enum NotificationError {
    /// メール送信に失敗
    #[error("メール送信に失敗: {0}")]
    SendFailed(String),

    /// テンプレートレンダリングに失敗
    #[error("テンプレートレンダリングに失敗: {0}")]
    TemplateFailed(String),
}

/// メールメッセージ
///
/// テンプレートレンダリングの出力。NotificationSender に渡される。
/// 元システムは HTML のみを送信するため、プレーンテキスト本文は持たない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    /// 送信先メールアドレス
    pub to:        String,
    /// 件名
    pub subject:   String,
    /// HTML 本文
    pub html_body: String,
}

/// 送信結果レポート
///
/// スタッフ宛・送信者宛それぞれの送信成否を保持する。
/// 「片方だけ届いた」部分成功を呼び出し元とテストが区別できるようにしつつ、
/// HTTP 契約の `sent` フィールドには [`all_sent`](Self::all_sent) を使う。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeliveryReport {
    /// スタッフ宛通知メールの送信成否
    pub staff_sent:     bool,
    /// 送信者宛確認メールの送信成否
    pub submitter_sent: bool,
}

impl DeliveryReport {
    /// トランスポート未設定時のレポート（両方とも未送信）
    pub fn skipped() -> Self {
        Self {
            staff_sent:     false,
            submitter_sent: false,
        }
    }

    /// 両方の送信が成功した場合のみ true
    ///
    /// 部分成功（1 通だけ届いた）は全体失敗として報告する。
    /// 成功した側への補償処理（再送・取り消し）は行わない。
    pub fn all_sent(&self) -> bool {
        self.staff_sent && self.submitter_sent
    }
}
