//! taskit-core
//!
//! カタログのタスクを webhook 駆動のワークフローバックエンドで実行する
//! クライアント側パイプライン。
//!
//! Catalog → Validator → Mapper → Gateway → Session
//!
//! # モジュール構成
//! - **domain**: タスク種別、パラメータ、リクエスト、結果、エラー
//! - **catalog**: パラメータフォームと閲覧用のタスクカタログ
//! - **validation**: フォーム検証（真偽値とフィールド単位）
//! - **typed**: タスクファミリーごとの型付きペイロードとマッパー
//! - **ports**: transport / dispatch / clock の境界
//! - **impls**: reqwest transport と dispatch 戦略
//! - **app**: 設定、実行ゲートウェイ、セッション、builder

pub mod app;
pub mod catalog;
pub mod domain;
pub mod impls;
pub mod ports;
pub mod typed;
pub mod validation;

pub use app::{App, AppBuilder, ExecutionGateway, GatewayConfig, ProcessingDelays, TaskSession};
pub use catalog::{ParameterCatalog, TaskCatalog, TaskQuery};
pub use domain::{TaskExecutionRequest, TaskExecutionResult, TaskType, TaskitError};
pub use validation::FormValidator;
