//! Ports - パイプラインと外界の境界
//!
//! - **WebhookTransport**: ワークフローバックエンドへの HTTP
//! - **DispatchStrategy**: どの webhook に送るか
//! - **Clock**: 日付デフォルト用の今日

pub mod clock;
pub mod dispatch;
pub mod transport;

pub use self::clock::{Clock, FixedClock, SystemClock};
pub use self::dispatch::DispatchStrategy;
pub use self::transport::{TransportResponse, WebhookTransport};
