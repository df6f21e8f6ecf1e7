//! # LeadRelay ドメイン層
//!
//! リード獲得フォームのドメインモデルを定義する。
//!
//! ## 設計方針
//!
//! このクレートは通知サブシステムの中核となる値オブジェクトのみを提供する:
//!
//! - **Submission**: 3 種類のフォーム送信（問い合わせ / 利用開始 / 求人応募）の
//!   不変レコード
//! - **EmailMessage**: テンプレートレンダリングの出力であり、送信基盤への入力
//! - **DeliveryReport**: スタッフ宛 / 送信者宛それぞれの送信結果
//!
//! ## 依存関係の方向
//!
//! ```text
//! api → infra → domain
//! ```
//!
//! ドメイン層はインフラ層（SMTP、HTTP）には一切依存しない。
//! Submission は façade への一時的な入力であり、このクレートが永続化や
//! 変更を行うことはない。

pub mod notification;
pub mod submission;

pub use notification::{DeliveryReport, EmailMessage, NotificationError};
pub use submission::{
    ContactSubmission,
    GetStartedSubmission,
    JobApplicationSubmission,
    Submission,
    SubmissionKind,
};
