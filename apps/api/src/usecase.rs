//! # 通知ユースケース
//!
//! フォーム送信に伴うメール通知の生成・送信を統合する。
//!
//! ## モジュール構成
//!
//! - [`template_renderer`] - tera テンプレートエンジンによるメール生成
//! - [`mailer`] - レンダリング + 2 通送信 + 結果集約の façade

pub mod mailer;
pub mod template_renderer;

pub use mailer::Mailer;
pub use template_renderer::TemplateRenderer;
