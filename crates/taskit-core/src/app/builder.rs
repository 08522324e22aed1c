//! AppBuilder - カタログ・バリデータ・ゲートウェイのワイヤリング
//!
//! # 学習ポイント
//! - Builder パターンで依存を一箇所に集約
//! - 起動時検証（Fail-fast 設計）
//!
//! フォームが期待されるタスクにフォームがない、検証パターンがコンパイルできない、
//! base URL が不正、のいずれでも `build()` が失敗する。

use std::sync::Arc;

use super::config::GatewayConfig;
use super::gateway::ExecutionGateway;
use super::session::TaskSession;
use crate::catalog::{ParameterCatalog, TaskCatalog};
use crate::domain::TaskitError;
use crate::ports::{Clock, DispatchStrategy, WebhookTransport};
use crate::validation::{FormValidator, InvalidPattern};

/// # Example
/// ```ignore
/// let app = AppBuilder::new()
///     .config(GatewayConfig::default().with_delays(ProcessingDelays::none()))
///     .expect_tasks(&["send_email", "scrape_url"])
///     .build()?;
/// let session = app.session();
/// ```
pub struct AppBuilder {
    parameters: ParameterCatalog,
    tasks: TaskCatalog,
    config: GatewayConfig,
    transport: Option<Arc<dyn WebhookTransport>>,
    dispatch: Option<Arc<dyn DispatchStrategy>>,
    clock: Option<Arc<dyn Clock>>,
    expected_tasks: Option<Vec<String>>,
}

#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Missing task forms: {0:?}. These tasks were expected but have no parameters.")]
    MissingTaskForms(Vec<String>),

    #[error(transparent)]
    InvalidPattern(#[from] InvalidPattern),

    #[error("cannot create transport: {0}")]
    Transport(#[from] TaskitError),
}

impl AppBuilder {
    /// Builtin catalogs, default config.
    pub fn new() -> Self {
        Self {
            parameters: ParameterCatalog::builtin(),
            tasks: TaskCatalog::builtin(),
            config: GatewayConfig::default(),
            transport: None,
            dispatch: None,
            clock: None,
            expected_tasks: None,
        }
    }

    pub fn parameters(mut self, parameters: ParameterCatalog) -> Self {
        self.parameters = parameters;
        self
    }

    pub fn tasks(mut self, tasks: TaskCatalog) -> Self {
        self.tasks = tasks;
        self
    }

    pub fn config(mut self, config: GatewayConfig) -> Self {
        self.config = config;
        self
    }

    /// Use `transport` instead of an HTTP client built from the config.
    pub fn transport(mut self, transport: Arc<dyn WebhookTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn dispatch(mut self, dispatch: Arc<dyn DispatchStrategy>) -> Self {
        self.dispatch = Some(dispatch);
        self
    }

    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Task ids that must have a form in the parameter catalog.
    pub fn expect_tasks(mut self, task_ids: &[&str]) -> Self {
        self.expected_tasks = Some(task_ids.iter().map(|id| id.to_string()).collect());
        self
    }

    pub fn build(self) -> Result<App, BuildError> {
        if let Some(expected) = &self.expected_tasks {
            let missing: Vec<String> = expected
                .iter()
                .filter(|id| !self.parameters.contains(id))
                .cloned()
                .collect();
            if !missing.is_empty() {
                return Err(BuildError::MissingTaskForms(missing));
            }
        }

        let parameters = Arc::new(self.parameters);
        let validator = Arc::new(FormValidator::new(Arc::clone(&parameters))?);

        let mut gateway = match self.transport {
            Some(transport) => ExecutionGateway::new(transport, &self.config),
            None => ExecutionGateway::from_config(&self.config)?,
        };
        if let Some(dispatch) = self.dispatch {
            gateway = gateway.with_dispatch(dispatch);
        }
        if let Some(clock) = self.clock {
            gateway = gateway.with_clock(clock);
        }

        Ok(App {
            parameters,
            tasks: Arc::new(self.tasks),
            validator,
            gateway,
        })
    }
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// The assembled pipeline. Cheap to share; every part is read-only.
#[derive(Clone)]
pub struct App {
    pub parameters: Arc<ParameterCatalog>,
    pub tasks: Arc<TaskCatalog>,
    pub validator: Arc<FormValidator>,
    pub gateway: ExecutionGateway,
}

impl App {
    /// A fresh session over this app's gateway and validator.
    pub fn session(&self) -> TaskSession {
        TaskSession::new(self.gateway.clone(), Arc::clone(&self.validator))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ParameterType, ParameterValidation, TaskParameter};

    #[test]
    fn build_with_builtin_catalog() {
        let app = AppBuilder::new()
            .expect_tasks(&["send_email", "scrape_url", "summarize_video"])
            .build();
        assert!(app.is_ok());
    }

    #[test]
    fn build_missing_task_forms() {
        let app = AppBuilder::new()
            .expect_tasks(&["send_email", "translate_text"])
            .build();
        assert!(matches!(
            app,
            Err(BuildError::MissingTaskForms(missing)) if missing == vec!["translate_text".to_string()]
        ));
    }

    #[test]
    fn build_rejects_bad_pattern() {
        let mut parameters = ParameterCatalog::new();
        parameters.insert(
            "broken",
            vec![
                TaskParameter::required("code", "Code", ParameterType::Text)
                    .with_validation(ParameterValidation::pattern("([a-z")),
            ],
        );
        let app = AppBuilder::new().parameters(parameters).build();
        assert!(matches!(app, Err(BuildError::InvalidPattern(_))));
    }

    #[test]
    fn build_rejects_bad_base_url() {
        let app = AppBuilder::new()
            .config(GatewayConfig::default().with_base_url("::nope::"))
            .build();
        assert!(matches!(app, Err(BuildError::Transport(TaskitError::InvalidUrl(_)))));
    }
}
