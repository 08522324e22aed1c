//! Typed - 型付きリクエストペイロード
//!
//! フォームの値は型のない [`ParamMap`](crate::domain::ParamMap) で届く。
//! ルートが決まった時点で、タスクファミリーごとの具体的なペイロードに変換する。
//! 生の map のまま送るのは generic passthrough だけ。
//!
//! # 学習ポイント
//! - **`WebhookPayload`**: ペイロード型と webhook パスを `const` で結びつける
//! - **`payloads`**: ファミリーごとの struct とそのデフォルト
//! - **`TaskRequest`**: 全ペイロードの sum type（[`map_request`] で構築）

pub mod params;
pub mod payload;
pub mod payloads;
pub mod request;

pub use params::Params;
pub use payload::WebhookPayload;
pub use payloads::*;
pub use request::{GenericRequest, Route, TaskFamily, TaskRequest, map_request};
