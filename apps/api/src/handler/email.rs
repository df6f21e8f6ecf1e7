//! # メール通知ハンドラ
//!
//! フォーム送信の通知メールエンドポイントを提供する。
//!
//! ## エンドポイント
//!
//! - `POST /api/email/contact` - 問い合わせフォーム
//! - `POST /api/email/get-started` - 利用開始リクエスト
//! - `POST /api/email/job-application` - 求人応募
//! - `GET /api/email/status` - トランスポート設定状態
//!
//! ## レスポンス契約
//!
//! `success` は「リクエストを処理できたか」、`sent` は「2 通とも届いたか」を
//! 表す別フィールドであり、クライアントは区別して扱う必要がある。

use std::sync::Arc;

use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use leadrelay_domain::submission::{
    ContactSubmission,
    GetStartedSubmission,
    JobApplicationSubmission,
};
use serde::{Deserialize, Serialize};

use crate::{error::ApiError, usecase::Mailer};

/// メール通知ハンドラの共有状態
pub struct EmailState {
    pub mailer: Arc<Mailer>,
}

// --- リクエスト/レスポンス型 ---

/// 問い合わせフォームリクエスト
///
/// 必須フィールドの検証はハンドラで行うため、全フィールドを Option で受ける。
#[derive(Debug, Deserialize)]
pub struct ContactRequest {
    pub name:       Option<String>,
    pub email:      Option<String>,
    pub phone:      Option<String>,
    pub company:    Option<String>,
    pub message:    Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// 利用開始リクエスト
#[derive(Debug, Deserialize)]
pub struct GetStartedRequest {
    pub first_name: Option<String>,
    pub last_name:  Option<String>,
    pub email:      Option<String>,
    pub company:    Option<String>,
    pub phone:      Option<String>,
    pub job_title:  Option<String>,
    pub message:    Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// 求人応募リクエスト
#[derive(Debug, Deserialize)]
pub struct JobApplicationRequest {
    pub full_name:    Option<String>,
    pub email:        Option<String>,
    pub phone:        Option<String>,
    pub position:     Option<String>,
    pub experience:   Option<String>,
    pub cover_letter: Option<String>,
    pub resume_url:   Option<String>,
    pub status:       Option<String>,
    pub created_at:   Option<DateTime<Utc>>,
}

/// 送信エンドポイントのレスポンス
#[derive(Debug, Serialize)]
pub struct SendResponse {
    pub success: bool,
    pub sent:    bool,
    pub message: String,
}

/// 設定状態レスポンス
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub success: bool,
    pub data:    StatusData,
}

/// 設定状態の内訳
#[derive(Debug, Serialize)]
pub struct StatusData {
    pub configured: bool,
    pub message:    String,
}

// --- 検証ヘルパー ---

/// 必須フィールドを取り出す
///
/// 値が欠けているか空白のみの場合、そのフォームの必須フィールド一覧を
/// 載せた Validation エラーを返す（元システムの 400 メッセージと互換）。
fn required(value: Option<String>, required_fields: &'static str) -> Result<String, ApiError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ApiError::Validation(required_fields.to_string())),
    }
}

/// 送信結果をレスポンスに変換する
fn send_response(sent: bool, ok_message: &str) -> SendResponse {
    SendResponse {
        success: true,
        sent,
        message: if sent {
            ok_message.to_string()
        } else {
            "Emails attempted but may have failed - check server logs".to_string()
        },
    }
}

// --- ハンドラ ---

/// POST /api/email/contact
///
/// 問い合わせフォームの通知メール 2 通を送信する。
pub async fn send_contact_emails(
    State(state): State<Arc<EmailState>>,
    Json(req): Json<ContactRequest>,
) -> Result<Json<SendResponse>, ApiError> {
    const REQUIRED: &str = "name, email, message";

    let submission = ContactSubmission {
        name:       required(req.name, REQUIRED)?,
        email:      required(req.email, REQUIRED)?,
        phone:      req.phone,
        company:    req.company,
        message:    required(req.message, REQUIRED)?,
        created_at: req.created_at.unwrap_or_else(Utc::now),
    };

    let report = state
        .mailer
        .send_contact_emails(submission)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to send contact emails"))?;

    Ok(Json(send_response(
        report.all_sent(),
        "Contact emails sent successfully",
    )))
}

/// POST /api/email/get-started
///
/// 利用開始リクエストの通知メール 2 通を送信する。
pub async fn send_get_started_emails(
    State(state): State<Arc<EmailState>>,
    Json(req): Json<GetStartedRequest>,
) -> Result<Json<SendResponse>, ApiError> {
    const REQUIRED: &str = "first_name, last_name, email";

    let submission = GetStartedSubmission {
        first_name: required(req.first_name, REQUIRED)?,
        last_name:  required(req.last_name, REQUIRED)?,
        email:      required(req.email, REQUIRED)?,
        company:    req.company,
        phone:      req.phone,
        job_title:  req.job_title,
        message:    req.message,
        created_at: req.created_at.unwrap_or_else(Utc::now),
    };

    let report = state
        .mailer
        .send_get_started_emails(submission)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to send get started emails"))?;

    Ok(Json(send_response(
        report.all_sent(),
        "Get started emails sent successfully",
    )))
}

/// POST /api/email/job-application
///
/// 求人応募の通知メール 2 通を送信する。
pub async fn send_job_application_emails(
    State(state): State<Arc<EmailState>>,
    Json(req): Json<JobApplicationRequest>,
) -> Result<Json<SendResponse>, ApiError> {
    const REQUIRED: &str = "full_name, email, position";

    let submission = JobApplicationSubmission {
        full_name:    required(req.full_name, REQUIRED)?,
        email:        required(req.email, REQUIRED)?,
        phone:        req.phone,
        position:     required(req.position, REQUIRED)?,
        experience:   req.experience,
        cover_letter: req.cover_letter,
        resume_url:   req.resume_url,
        status:       Some(req.status.unwrap_or_else(|| "pending".to_string())),
        created_at:   req.created_at.unwrap_or_else(Utc::now),
    };

    let report = state
        .mailer
        .send_job_application_emails(submission)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to send job application emails"))?;

    Ok(Json(send_response(
        report.all_sent(),
        "Job application emails sent successfully",
    )))
}

/// GET /api/email/status
///
/// メールトランスポートの設定状態を返す。
/// クライアントのステータスウィジェットが定期的にポーリングする。
pub async fn email_status(State(state): State<Arc<EmailState>>) -> Json<StatusResponse> {
    let configured = state.mailer.is_configured();

    Json(StatusResponse {
        success: true,
        data:    StatusData {
            configured,
            message: if configured {
                "Email service is configured and ready".to_string()
            } else {
                "Email service is not configured. Check EMAIL_USER and EMAIL_PASSWORD \
                 environment variables."
                    .to_string()
            },
        },
    })
}

#[cfg(test)]
mod tests {
    use axum::{
        Router,
        body::Body,
        http::{Method, Request, StatusCode},
        routing::{get, post},
    };
    use leadrelay_infra::{mock::MockNotificationSender, notification::NotificationSender};
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use tower::ServiceExt;

    use super::*;
    use crate::usecase::{TemplateRenderer, mailer::STAFF_ADDRESS};

    fn make_router(sender: Option<MockNotificationSender>) -> Router {
        let renderer = TemplateRenderer::new().unwrap();
        let mailer = Mailer::new(
            sender.map(|s| Arc::new(s) as Arc<dyn NotificationSender>),
            renderer,
        );
        let state = Arc::new(EmailState {
            mailer: Arc::new(mailer),
        });

        Router::new()
            .route("/api/email/contact", post(send_contact_emails))
            .route("/api/email/get-started", post(send_get_started_emails))
            .route("/api/email/job-application", post(send_job_application_emails))
            .route("/api/email/status", get(email_status))
            .with_state(state)
    }

    fn make_json_request(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn read_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn contactの送信成功でsent_trueを返す() {
        let sender = MockNotificationSender::new();
        let router = make_router(Some(sender.clone()));

        let request = make_json_request(
            "/api/email/contact",
            serde_json::json!({
                "name": "Jane Doe",
                "email": "jane@example.com",
                "message": "Hello\nWorld"
            }),
        );
        let response = router.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = read_json(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["sent"], true);
        assert_eq!(json["message"], "Contact emails sent successfully");

        // スタッフ宛 + 送信者宛の 2 通
        let sent = sender.sent_emails();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].to, STAFF_ADDRESS);
        assert_eq!(sent[1].to, "jane@example.com");
    }

    #[rstest]
    #[case::name_missing(serde_json::json!({"email": "a@example.com", "message": "hi"}))]
    #[case::email_missing(serde_json::json!({"name": "A", "message": "hi"}))]
    #[case::message_missing(serde_json::json!({"name": "A", "email": "a@example.com"}))]
    #[case::message_blank(serde_json::json!({"name": "A", "email": "a@example.com", "message": "  "}))]
    #[tokio::test]
    async fn contactの必須フィールド欠落で400を返す(#[case] body: serde_json::Value) {
        let sender = MockNotificationSender::new();
        let router = make_router(Some(sender.clone()));

        let request = make_json_request("/api/email/contact", body);
        let response = router.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = read_json(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "Missing required fields: name, email, message");

        // façade は呼ばれず、送信は行われない
        assert!(sender.sent_emails().is_empty());
    }

    #[tokio::test]
    async fn トランスポート未設定でもsuccess_trueかつsent_falseを返す() {
        let router = make_router(None);

        let request = make_json_request(
            "/api/email/contact",
            serde_json::json!({
                "name": "Jane Doe",
                "email": "jane@example.com",
                "message": "Hello"
            }),
        );
        let response = router.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = read_json(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["sent"], false);
        assert_eq!(
            json["message"],
            "Emails attempted but may have failed - check server logs"
        );
    }

    #[tokio::test]
    async fn 片方の送信失敗でsent_falseを返す() {
        let sender = MockNotificationSender::new();
        sender.fail_for("jane@example.com");
        let router = make_router(Some(sender));

        let request = make_json_request(
            "/api/email/contact",
            serde_json::json!({
                "name": "Jane Doe",
                "email": "jane@example.com",
                "message": "Hello"
            }),
        );
        let response = router.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = read_json(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["sent"], false);
    }

    #[tokio::test]
    async fn get_startedの送信成功でsent_trueを返す() {
        let sender = MockNotificationSender::new();
        let router = make_router(Some(sender.clone()));

        let request = make_json_request(
            "/api/email/get-started",
            serde_json::json!({
                "first_name": "Taro",
                "last_name": "Yamada",
                "email": "taro@example.com"
            }),
        );
        let response = router.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = read_json(response).await;
        assert_eq!(json["sent"], true);
        assert_eq!(json["message"], "Get started emails sent successfully");
        assert_eq!(sender.sent_emails().len(), 2);
    }

    #[tokio::test]
    async fn get_startedの必須フィールド欠落で400を返す() {
        let router = make_router(Some(MockNotificationSender::new()));

        let request = make_json_request(
            "/api/email/get-started",
            serde_json::json!({"first_name": "Taro", "email": "taro@example.com"}),
        );
        let response = router.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = read_json(response).await;
        assert_eq!(
            json["error"],
            "Missing required fields: first_name, last_name, email"
        );
    }

    #[tokio::test]
    async fn job_applicationの送信成功でsent_trueを返す() {
        let sender = MockNotificationSender::new();
        let router = make_router(Some(sender.clone()));

        let request = make_json_request(
            "/api/email/job-application",
            serde_json::json!({
                "full_name": "John Smith",
                "email": "john@example.com",
                "position": "Backend Engineer"
            }),
        );
        let response = router.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = read_json(response).await;
        assert_eq!(json["sent"], true);
        assert_eq!(json["message"], "Job application emails sent successfully");

        let sent = sender.sent_emails();
        assert_eq!(sent.len(), 2);
        assert_eq!(
            sent[0].subject,
            "New Job Application - Backend Engineer - John Smith"
        );
    }

    #[tokio::test]
    async fn job_applicationの必須フィールド欠落で400を返す() {
        let router = make_router(Some(MockNotificationSender::new()));

        let request = make_json_request(
            "/api/email/job-application",
            serde_json::json!({"full_name": "John Smith", "email": "john@example.com"}),
        );
        let response = router.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = read_json(response).await;
        assert_eq!(
            json["error"],
            "Missing required fields: full_name, email, position"
        );
    }

    #[tokio::test]
    async fn statusはトランスポート設定済みを反映する() {
        let router = make_router(Some(MockNotificationSender::new()));

        let request = Request::builder()
            .method(Method::GET)
            .uri("/api/email/status")
            .body(Body::empty())
            .unwrap();
        let response = router.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = read_json(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["configured"], true);
        assert_eq!(json["data"]["message"], "Email service is configured and ready");
    }

    #[tokio::test]
    async fn statusはトランスポート未設定を反映する() {
        let router = make_router(None);

        let request = Request::builder()
            .method(Method::GET)
            .uri("/api/email/status")
            .body(Body::empty())
            .unwrap();
        let response = router.oneshot(request).await.unwrap();

        let json = read_json(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["configured"], false);
        assert_eq!(
            json["data"]["message"],
            "Email service is not configured. Check EMAIL_USER and EMAIL_PASSWORD environment variables."
        );
    }
}
