//! # フォーム送信
//!
//! リード獲得フォームの送信レコードを定義する。
//!
//! ## ドメイン用語
//!
//! | 型 | ドメイン用語 | 必須フィールド |
//! |---|------------|--------------|
//! | [`ContactSubmission`] | 問い合わせフォーム | name, email, message |
//! | [`GetStartedSubmission`] | 利用開始リクエスト | first_name, last_name, email |
//! | [`JobApplicationSubmission`] | 求人応募 | full_name, email, position |
//!
//! ## 設計方針
//!
//! - **不変レコード**: 送信レコードは façade への一時的な入力であり、
//!   このサブシステムが保存・変更することはない
//! - **enum による統合**: [`Submission`] が 3 種類を束ね、共通アクセサを提供する
//! - **タイムスタンプ**: `created_at` は呼び出し元が与えるか、HTTP 境界で
//!   現在時刻が補われる

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 問い合わせフォームの送信レコード
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactSubmission {
    /// 氏名
    pub name:       String,
    /// メールアドレス
    pub email:      String,
    /// 電話番号
    pub phone:      Option<String>,
    /// 会社名
    pub company:    Option<String>,
    /// 問い合わせ本文（自由記述）
    pub message:    String,
    /// 送信日時
    pub created_at: DateTime<Utc>,
}

/// 利用開始リクエストの送信レコード
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetStartedSubmission {
    /// 名
    pub first_name: String,
    /// 姓
    pub last_name:  String,
    /// メールアドレス
    pub email:      String,
    /// 会社名
    pub company:    Option<String>,
    /// 電話番号
    pub phone:      Option<String>,
    /// 役職
    pub job_title:  Option<String>,
    /// プロジェクト概要（自由記述）
    pub message:    Option<String>,
    /// 送信日時
    pub created_at: DateTime<Utc>,
}

/// 求人応募の送信レコード
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobApplicationSubmission {
    /// 氏名
    pub full_name:    String,
    /// メールアドレス
    pub email:        String,
    /// 電話番号
    pub phone:        Option<String>,
    /// 応募ポジション
    pub position:     String,
    /// 経験年数・経歴
    pub experience:   Option<String>,
    /// カバーレター（自由記述）
    pub cover_letter: Option<String>,
    /// 履歴書 URL
    pub resume_url:   Option<String>,
    /// 選考ステータス（未指定時は HTTP 境界で `"pending"` が補われる）
    pub status:       Option<String>,
    /// 送信日時
    pub created_at:   DateTime<Utc>,
}

/// フォーム送信種別
///
/// ログ出力とルーティングで使用する。snake_case でシリアライズされる。
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum SubmissionKind {
    /// 問い合わせフォーム
    Contact,
    /// 利用開始リクエスト
    GetStarted,
    /// 求人応募
    JobApplication,
}

/// フォーム送信
///
/// 各バリアントがリード獲得フォームの 1 種類に対応する。
/// 通知 façade はこの enum を受け取り、種別ごとのテンプレートで
/// スタッフ宛・送信者宛の 2 通のメールを生成する。
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    /// 問い合わせフォーム
    Contact(ContactSubmission),
    /// 利用開始リクエスト
    GetStarted(GetStartedSubmission),
    /// 求人応募
    JobApplication(JobApplicationSubmission),
}

impl Submission {
    /// 送信種別を返す
    pub fn kind(&self) -> SubmissionKind {
        match self {
            Self::Contact(_) => SubmissionKind::Contact,
            Self::GetStarted(_) => SubmissionKind::GetStarted,
            Self::JobApplication(_) => SubmissionKind::JobApplication,
        }
    }

    /// 送信者のメールアドレスを返す（確認メールの宛先）
    pub fn submitter_email(&self) -> &str {
        match self {
            Self::Contact(s) => &s.email,
            Self::GetStarted(s) => &s.email,
            Self::JobApplication(s) => &s.email,
        }
    }

    /// 表示用の氏名を返す（件名と本文の宛名に使用）
    pub fn display_name(&self) -> String {
        match self {
            Self::Contact(s) => s.name.clone(),
            Self::GetStarted(s) => format!("{} {}", s.first_name, s.last_name),
            Self::JobApplication(s) => s.full_name.clone(),
        }
    }

    /// 送信日時を返す
    pub fn created_at(&self) -> DateTime<Utc> {
        match self {
            Self::Contact(s) => s.created_at,
            Self::GetStarted(s) => s.created_at,
            Self::JobApplication(s) => s.created_at,
        }
    }
}
