//! Impls - ポートの実装
//!
//! - **HttpTransport**: ワークフローバックエンド向けの reqwest クライアント
//! - **PriorityDispatch**: デフォルトのルーティング
//! - **PerTaskDispatch**: カタログのタスクごとに 1 webhook

pub mod dispatch;
pub mod http;

pub use self::dispatch::{PerTaskDispatch, PriorityDispatch};
pub use self::http::{API_KEY_HEADER, HttpTransport};
