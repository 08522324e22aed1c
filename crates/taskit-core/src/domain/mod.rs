//! ドメインモデル（タスク種別・パラメータ・リクエスト・結果・カタログ項目）

pub mod errors;
pub mod ids;
pub mod outcome;
pub mod parameter;
pub mod request;
pub mod task;
pub mod task_type;

pub use errors::TaskitError;
pub use ids::InvocationId;
pub use outcome::{ResultMap, TaskExecutionResult};
pub use parameter::{ParameterType, ParameterValidation, TaskParameter};
pub use request::{ParamMap, TaskExecutionRequest, param_text, params_from_strings, value_text};
pub use task::{Difficulty, TaskCategory, TaskInfo};
pub use task_type::TaskType;
