//! # 通知 façade
//!
//! フォーム送信 1 件につき、スタッフ宛通知と送信者宛確認メールの 2 通を
//! レンダリングして送信する。
//!
//! ## 設計方針
//!
//! - **単一の汎用ルーチン**: 3 種類のフォームは同一の
//!   「レンダリング → 2 通送信 → 結果集約」フローを共有する
//! - **送信失敗の非伝播**: 個々の送信失敗はその場でログに変換され、
//!   もう 1 通の送信を中断しない。`Err` はレンダリング失敗のみ
//! - **依存性注入**: トランスポートは起動時に構築されて注入される。
//!   未設定（`None`）の場合、すべての送信はネットワーク呼び出しなしで
//!   失敗として短絡する

use std::sync::Arc;

use leadrelay_domain::{
    notification::{DeliveryReport, EmailMessage, NotificationError},
    submission::{
        ContactSubmission,
        GetStartedSubmission,
        JobApplicationSubmission,
        Submission,
        SubmissionKind,
    },
};
use leadrelay_infra::notification::NotificationSender;

use super::TemplateRenderer;

/// スタッフ宛通知の固定宛先
pub const STAFF_ADDRESS: &str = "hr@leadrelay.example.com";

/// 通知 façade
///
/// HTTP 層から呼び出される公開 API。フォーム種別ごとに 1 メソッドを持ち、
/// いずれも同じ汎用ルーチンに委譲する。
pub struct Mailer {
    sender:        Option<Arc<dyn NotificationSender>>,
    renderer:      TemplateRenderer,
    staff_address: String,
}

impl Mailer {
    pub fn new(sender: Option<Arc<dyn NotificationSender>>, renderer: TemplateRenderer) -> Self {
        Self {
            sender,
            renderer,
            staff_address: STAFF_ADDRESS.to_string(),
        }
    }

    /// トランスポートが構築済みかどうか
    ///
    /// プロセス起動時に決まり、以後変化しない。
    pub fn is_configured(&self) -> bool {
        self.sender.is_some()
    }

    /// 問い合わせフォームの 2 通を送信する
    pub async fn send_contact_emails(
        &self,
        submission: ContactSubmission,
    ) -> Result<DeliveryReport, NotificationError> {
        self.send_submission(Submission::Contact(submission)).await
    }

    /// 利用開始リクエストの 2 通を送信する
    pub async fn send_get_started_emails(
        &self,
        submission: GetStartedSubmission,
    ) -> Result<DeliveryReport, NotificationError> {
        self.send_submission(Submission::GetStarted(submission))
            .await
    }

    /// 求人応募の 2 通を送信する
    pub async fn send_job_application_emails(
        &self,
        submission: JobApplicationSubmission,
    ) -> Result<DeliveryReport, NotificationError> {
        self.send_submission(Submission::JobApplication(submission))
            .await
    }

    /// レンダリング → 2 通送信 → 結果集約の汎用ルーチン
    ///
    /// 2 通は逐次送信される。スタッフ宛の失敗は送信者宛の送信を妨げない。
    async fn send_submission(
        &self,
        submission: Submission,
    ) -> Result<DeliveryReport, NotificationError> {
        let kind = submission.kind();

        let Some(sender) = &self.sender else {
            tracing::info!(kind = %kind, "メールトランスポート未設定のため送信をスキップ");
            return Ok(DeliveryReport::skipped());
        };

        let (staff, submitter) = self.renderer.render(&submission, &self.staff_address)?;

        let staff_sent = dispatch(sender.as_ref(), &staff, kind, "staff").await;
        let submitter_sent = dispatch(sender.as_ref(), &submitter, kind, "submitter").await;

        Ok(DeliveryReport {
            staff_sent,
            submitter_sent,
        })
    }
}

/// 1 通を送信し、結果を bool に畳む
///
/// 失敗は宛先の役割（staff / submitter）を付けてログに記録し、
/// 呼び出し元には伝播させない。
async fn dispatch(
    sender: &dyn NotificationSender,
    email: &EmailMessage,
    kind: SubmissionKind,
    role: &'static str,
) -> bool {
    match sender.send_email(email).await {
        Ok(()) => {
            tracing::info!(
                kind = %kind,
                role,
                to = %email.to,
                subject = %email.subject,
                "通知メールを送信しました"
            );
            true
        }
        Err(e) => {
            tracing::error!(
                kind = %kind,
                role,
                to = %email.to,
                error = %e,
                "通知メールの送信に失敗"
            );
            false
        }
    }
}
