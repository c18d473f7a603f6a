//! CLI command definitions for vision-forge.
//!
//! Three commands: `serve` runs the proxy, `prompt` prints a built prompt
//! for inspection without touching the remote API, and `models` lists the
//! models available to the configured API key.

use std::collections::HashMap;
use std::sync::Arc;

use clap::Parser;

use crate::config::ProxyConfig;
use crate::llm::{GeminiClient, DEFAULT_API_BASE};
use crate::prompts;
use crate::prompts::types::Goal;
use crate::server::{start_server, AppContext};

/// Vision-board generation proxy for a Gemini-style generative API.
#[derive(Parser)]
#[command(name = "vision-forge")]
#[command(about = "Prompt construction and generation proxy for vision boards")]
#[command(version)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short, long, default_value = "info", global = true)]
    pub log_level: String,
}

/// Available CLI subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Run the proxy server.
    Serve(ServeArgs),

    /// Build a prompt and print it, without calling the remote API.
    Prompt(PromptArgs),

    /// List remote models available to the configured API key.
    Models,
}

/// Arguments for `vision-forge serve`.
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Listen port (overrides the PORT environment variable).
    #[arg(short, long)]
    pub port: Option<u16>,
}

/// Arguments for `vision-forge prompt`.
#[derive(Parser, Debug)]
pub struct PromptArgs {
    /// Which prompt to build: quotes, vision-quotes, questions, board, goal-image.
    #[arg(short, long, default_value = "vision-quotes")]
    pub task: String,

    /// Vision type (money, career, health, relationships, custom).
    #[arg(long, default_value = "health")]
    pub vision_type: String,

    /// Comma-separated goal titles.
    #[arg(long, default_value = "Peak Fitness")]
    pub goals: String,

    /// Free-text vision.
    #[arg(long, default_value = "")]
    pub vision: String,

    /// Comma-separated language names.
    #[arg(long, default_value = "English")]
    pub languages: String,

    /// Timeline identifier (1month, 3months, 6months, 1year, 5years, lifetime).
    #[arg(long, default_value = "1year")]
    pub timeline: String,

    /// Board size (desktop or mobile).
    #[arg(long, default_value = "desktop")]
    pub size: String,
}

/// Parse CLI arguments from the process environment.
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Run the parsed CLI command.
pub async fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Serve(args) => serve(args).await,
        Commands::Prompt(args) => {
            println!("{}", build_prompt(&args)?);
            Ok(())
        }
        Commands::Models => list_models().await,
    }
}

async fn serve(args: ServeArgs) -> anyhow::Result<()> {
    let mut config = ProxyConfig::from_env()?;
    if let Some(port) = args.port {
        config.port = port;
    }
    config.log_credential_diagnostic();

    let api_base = config
        .api_base
        .clone()
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
    let provider = Arc::new(GeminiClient::new(api_base, config.api_key.clone()));

    let ctx = Arc::new(AppContext::new(provider, config));
    start_server(ctx).await
}

/// Build the requested prompt from the flag values.
fn build_prompt(args: &PromptArgs) -> anyhow::Result<String> {
    let goals: Vec<Goal> = args
        .goals
        .split(',')
        .map(str::trim)
        .filter(|title| !title.is_empty())
        .enumerate()
        .map(|(index, title)| Goal::new((index + 1).to_string(), title))
        .collect();
    let languages: Vec<String> = args
        .languages
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect();

    match args.task.as_str() {
        "quotes" => Ok(prompts::build_themed_quotes_prompt(
            &args.vision_type,
            &goals,
        )),
        "vision-quotes" => {
            let count = prompts::quote_count(&goals);
            Ok(prompts::build_vision_quotes_prompt(
                &args.vision,
                &goals,
                &languages,
                count,
            ))
        }
        "questions" => Ok(prompts::build_questions_prompt(&args.vision_type, &goals)),
        "board" => Ok(prompts::build_board_prompt(
            &args.vision_type,
            &goals,
            &args.vision,
            &args.timeline,
            &args.size,
            &[],
        )),
        "goal-image" => {
            let records = prompts::build_goal_prompts(
                &goals,
                &args.vision_type,
                &args.vision,
                &HashMap::new(),
            );
            Ok(records
                .iter()
                .map(|r| format!("[{}] {}", r.goal_id, r.prompt))
                .collect::<Vec<_>>()
                .join("\n\n"))
        }
        other => anyhow::bail!(
            "unknown prompt task '{}' (expected quotes, vision-quotes, questions, board or goal-image)",
            other
        ),
    }
}

async fn list_models() -> anyhow::Result<()> {
    let client = GeminiClient::from_env();
    if !client.has_api_key() {
        anyhow::bail!("GEMINI_API_KEY is not set");
    }
    tracing::info!(key = %client.api_key_masked(), base = client.api_base(), "Listing models");

    let models = client.list_models().await?;
    for model in &models {
        println!(
            "{}  [{}]",
            model.name,
            model.supported_generation_methods.join(", ")
        );
    }
    println!("{} models available", models.len());
    Ok(())
}
