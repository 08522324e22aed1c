use std::collections::BTreeMap;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use futures::StreamExt;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, prelude::*};

use taskit_core::app::{AppBuilder, GatewayConfig, ProcessingDelays};
use taskit_core::catalog::TaskQuery;
use taskit_core::domain::{
    Difficulty, TaskExecutionRequest, TaskExecutionResult, params_from_strings,
};
use taskit_core::impls::PerTaskDispatch;

/// TaskIt - run catalog tasks on the workflow backend
#[derive(Parser)]
#[command(name = "taskit")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List task categories and their tasks
    Categories,

    /// Search tasks by title, description or tag
    Search {
        #[arg(default_value = "")]
        text: String,

        #[arg(long, value_enum)]
        difficulty: Option<DifficultyArg>,

        #[arg(long)]
        category: Option<String>,
    },

    /// Show the form of a task
    Params { task_id: String },

    /// Check form values without running anything
    Validate {
        task_id: String,

        /// Form value as key=value (repeatable)
        #[arg(short = 'p', long = "param", value_parser = parse_param)]
        params: Vec<(String, String)>,
    },

    /// Run a task and print every execution event
    Run {
        task_id: String,

        /// Form value as key=value (repeatable)
        #[arg(short = 'p', long = "param", value_parser = parse_param)]
        params: Vec<(String, String)>,

        #[command(flatten)]
        gateway: GatewayArgs,

        /// Skip the post-dispatch processing wait
        #[arg(long)]
        no_delay: bool,

        /// Send every catalog task to its own webhook
        #[arg(long)]
        per_task: bool,
    },

    /// Query the state of a run
    Status {
        execution_id: String,

        #[command(flatten)]
        gateway: GatewayArgs,
    },
}

#[derive(clap::Args)]
struct GatewayArgs {
    /// Backend base URL
    #[arg(long)]
    base_url: Option<String>,

    /// Key for the execution status endpoint
    #[arg(long, env = "TASKIT_API_KEY")]
    api_key: Option<String>,
}

impl GatewayArgs {
    fn config(&self) -> GatewayConfig {
        let mut config = GatewayConfig::default();
        if let Some(base_url) = &self.base_url {
            config = config.with_base_url(base_url);
        }
        if let Some(api_key) = &self.api_key {
            config = config.with_api_key(api_key);
        }
        config
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum DifficultyArg {
    Easy,
    Medium,
    Advanced,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Medium => Difficulty::Medium,
            DifficultyArg::Advanced => Difficulty::Hard,
        }
    }
}

fn parse_param(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got `{s}`"))?;
    Ok((key.trim().to_string(), value.to_string()))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("taskit=info"));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .try_init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Categories => categories()?,
        Commands::Search {
            text,
            difficulty,
            category,
        } => {
            let mut query = TaskQuery::text(text);
            if let Some(difficulty) = difficulty {
                query = query.with_difficulty(difficulty.into());
            }
            if let Some(category) = category {
                query = query.in_category(category);
            }
            search(&query)?;
        }
        Commands::Params { task_id } => params(&task_id)?,
        Commands::Validate { task_id, params } => validate(&task_id, params)?,
        Commands::Run {
            task_id,
            params,
            gateway,
            no_delay,
            per_task,
        } => {
            let mut config = gateway.config();
            if no_delay {
                config = config.with_delays(ProcessingDelays::none());
            }
            run(&task_id, params, config, per_task).await?;
        }
        Commands::Status {
            execution_id,
            gateway,
        } => status(&execution_id, gateway.config()).await?,
    }

    Ok(())
}

fn categories() -> Result<()> {
    let app = AppBuilder::new().build()?;
    for category in app.tasks.categories() {
        let popular = if category.is_popular { " (popular)" } else { "" };
        println!("{}{popular} - {}", category.title, category.description);
        for task in &category.tasks {
            println!(
                "  {:<20} {:<28} {:<9} {}",
                task.id,
                task.title,
                task.difficulty.display_name(),
                task.estimated_time
            );
        }
    }
    Ok(())
}

fn search(query: &TaskQuery) -> Result<()> {
    let app = AppBuilder::new().build()?;
    let found = app.tasks.search(query);
    if found.is_empty() {
        println!("no matching tasks");
    }
    for task in found {
        println!("{:<20} {} [{}]", task.id, task.title, task.tags.join(", "));
    }
    Ok(())
}

fn params(task_id: &str) -> Result<()> {
    let app = AppBuilder::new().build()?;
    let form = app.parameters.parameters_for(task_id);
    if form.is_empty() {
        println!("{task_id} has no form");
        return Ok(());
    }
    for p in form {
        let required = if p.required { "*" } else { " " };
        let kind = serde_json::to_value(p.kind)?;
        println!("{required} {:<20} {:<16} {}", p.key, kind.as_str().unwrap_or("?"), p.display_name);
        if !p.options.is_empty() {
            println!("    options: {}", p.options.join(" | "));
        }
        if let Some(default) = &p.default_value {
            println!("    default: {default}");
        }
    }
    Ok(())
}

fn validate(task_id: &str, params: Vec<(String, String)>) -> Result<()> {
    let app = AppBuilder::new().build()?;
    let values: BTreeMap<String, String> = params.into_iter().collect();
    let errors = app.validator.validate_form(task_id, &params_from_strings(&values));
    if errors.is_empty() {
        println!("ok");
        return Ok(());
    }
    for (key, message) in &errors {
        println!("{key}: {message}");
    }
    bail!("{} field(s) invalid", errors.len())
}

async fn run(
    task_id: &str,
    params: Vec<(String, String)>,
    config: GatewayConfig,
    per_task: bool,
) -> Result<()> {
    let mut builder = AppBuilder::new().config(config);
    if per_task {
        builder = builder.dispatch(Arc::new(PerTaskDispatch::new()));
    }
    let app = builder.build().context("failed to set up gateway")?;

    let values: BTreeMap<String, String> = params.into_iter().collect();
    let parameters = params_from_strings(&values);
    let errors = app.validator.validate_form(task_id, &parameters);
    if !errors.is_empty() {
        for (key, message) in &errors {
            eprintln!("{key}: {message}");
        }
        bail!("form for {task_id} is invalid");
    }

    info!(task_id, per_task, "running task");
    let request = TaskExecutionRequest::for_task(task_id, parameters);
    let mut events = app.gateway.execute(request);
    let mut failed = None;
    while let Some(event) = events.next().await {
        println!("{}", serde_json::to_string(&event)?);
        if let TaskExecutionResult::Error { message, .. } = event {
            failed = Some(message);
        }
    }

    match failed {
        Some(message) => {
            error!(task_id, %message, "task failed");
            bail!(message)
        }
        None => {
            info!(task_id, "task completed");
            Ok(())
        }
    }
}

async fn status(execution_id: &str, config: GatewayConfig) -> Result<()> {
    let app = AppBuilder::new().config(config).build()?;
    info!(execution_id, "querying execution status");
    let result = app.gateway.execution_status(execution_id).await;
    println!("{}", serde_json::to_string_pretty(&result)?);
    if let TaskExecutionResult::Error { message, .. } = result {
        bail!(message);
    }
    Ok(())
}
