//! # テンプレートレンダラー
//!
//! tera テンプレートエンジンでスタッフ宛・送信者宛の 2 通の HTML メールを
//! 生成する。
//!
//! ## 設計方針
//!
//! - **`include_str!` によるコンパイル時埋め込み**: テンプレートはバイナリに埋め込まれる
//! - **全フィールドをエスケープ**: 補間値は tera の autoescape で HTML エスケープされる
//! - **自由記述フィールド**: message / cover_letter はエスケープ後に改行を
//!   `<br>` へ変換してから `safe` で挿入する
//! - **任意フィールド**: 値がある場合のみラベル行ごと出力する（空ラベルを残さない）

use leadrelay_domain::{
    notification::{EmailMessage, NotificationError},
    submission::Submission,
};
use tera::{Context, Tera};

/// スタッフ宛メールに載せる送信日時の書式
const SUBMITTED_AT_FORMAT: &str = "%B %-d, %Y at %H:%M UTC";

/// 自由記述フィールドを HTML 向けに変換する
///
/// HTML エスケープした上で改行を `<br>` に変換する。
/// テンプレート側では `safe` フィルタで挿入される前提。
fn escape_multiline(text: &str) -> String {
    tera::escape_html(text)
        .replace("\r\n", "<br>")
        .replace('\n', "<br>")
}

/// テンプレートレンダラー
///
/// tera テンプレートエンジンをラップし、[`Submission`] から
/// スタッフ宛・送信者宛の [`EmailMessage`] の組を生成する。
pub struct TemplateRenderer {
    engine: Tera,
}

impl TemplateRenderer {
    /// 新しいレンダラーインスタンスを作成
    ///
    /// `include_str!` で埋め込んだテンプレートを tera に登録する。
    pub fn new() -> Result<Self, NotificationError> {
        let mut engine = Tera::default();

        engine
            .add_raw_templates(vec![
                (
                    "contact_staff.html",
                    include_str!("../../templates/emails/contact_staff.html"),
                ),
                (
                    "contact_submitter.html",
                    include_str!("../../templates/emails/contact_submitter.html"),
                ),
                (
                    "get_started_staff.html",
                    include_str!("../../templates/emails/get_started_staff.html"),
                ),
                (
                    "get_started_submitter.html",
                    include_str!("../../templates/emails/get_started_submitter.html"),
                ),
                (
                    "job_application_staff.html",
                    include_str!("../../templates/emails/job_application_staff.html"),
                ),
                (
                    "job_application_submitter.html",
                    include_str!("../../templates/emails/job_application_submitter.html"),
                ),
            ])
            .map_err(|e| NotificationError::TemplateFailed(e.to_string()))?;

        Ok(Self { engine })
    }

    /// フォーム送信からスタッフ宛・送信者宛のメールの組を生成する
    ///
    /// # 引数
    ///
    /// - `submission`: フォーム送信レコード
    /// - `staff_address`: スタッフ宛通知の固定宛先
    pub fn render(
        &self,
        submission: &Submission,
        staff_address: &str,
    ) -> Result<(EmailMessage, EmailMessage), NotificationError> {
        let (prefix, staff_subject, submitter_subject, context) =
            build_template_params(submission)?;

        let staff_html = self
            .engine
            .render(&format!("{prefix}_staff.html"), &context)
            .map_err(|e| NotificationError::TemplateFailed(e.to_string()))?;

        let submitter_html = self
            .engine
            .render(&format!("{prefix}_submitter.html"), &context)
            .map_err(|e| NotificationError::TemplateFailed(e.to_string()))?;

        Ok((
            EmailMessage {
                to:        staff_address.to_string(),
                subject:   staff_subject,
                html_body: staff_html,
            },
            EmailMessage {
                to:        submission.submitter_email().to_string(),
                subject:   submitter_subject,
                html_body: submitter_html,
            },
        ))
    }
}

/// テンプレート名の接頭辞、件名 2 種、コンテキストを構築する
fn build_template_params(
    submission: &Submission,
) -> Result<(&'static str, String, String, Context), NotificationError> {
    let mut context = match submission {
        Submission::Contact(s) => Context::from_serialize(s),
        Submission::GetStarted(s) => Context::from_serialize(s),
        Submission::JobApplication(s) => Context::from_serialize(s),
    }
    .map_err(|e| NotificationError::TemplateFailed(e.to_string()))?;

    context.insert(
        "submitted_at",
        &submission
            .created_at()
            .format(SUBMITTED_AT_FORMAT)
            .to_string(),
    );

    let name = submission.display_name();

    let (prefix, staff_subject, submitter_subject) = match submission {
        Submission::Contact(s) => {
            context.insert("message_html", &escape_multiline(&s.message));
            (
                "contact",
                format!("New Contact Form Submission - {name}"),
                "Thank you for contacting LeadRelay".to_string(),
            )
        }
        Submission::GetStarted(s) => {
            context.insert(
                "message_html",
                &s.message.as_deref().map(escape_multiline),
            );
            (
                "get_started",
                format!("New Get Started Request - {name}"),
                "Thank you for your interest in LeadRelay".to_string(),
            )
        }
        Submission::JobApplication(s) => {
            context.insert(
                "cover_letter_html",
                &s.cover_letter.as_deref().map(escape_multiline),
            );
            (
                "job_application",
                format!("New Job Application - {} - {name}", s.position),
                format!("Application Received - {} Position at LeadRelay", s.position),
            )
        }
    };

    Ok((prefix, staff_subject, submitter_subject, context))
}
