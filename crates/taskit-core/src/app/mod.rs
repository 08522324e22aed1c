//! App - 設定・ゲートウェイ・セッション・ワイヤリング
//!
//! - **config**: `GatewayConfig`, `ProcessingDelays`
//! - **gateway**: `ExecutionGateway`（実行の状態機械）
//! - **session**: `TaskSession`（1 タスク分のフォームと進捗）
//! - **builder**: `AppBuilder`（起動時検証）

pub mod builder;
pub mod config;
pub mod gateway;
pub mod session;

pub use self::builder::{App, AppBuilder, BuildError};
pub use self::config::{DEFAULT_BASE_URL, GatewayConfig, ProcessingDelays};
pub use self::gateway::{
    ExecutionEnvelope, ExecutionGateway, NormalizeError, STATUS_PROCESSING, STATUS_STARTING,
    normalize_result,
};
pub use self::session::{STATUS_COMPLETED, STATUS_FAILED, SessionState, TaskSession};
