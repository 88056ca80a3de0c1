use anyhow::{Context, Result};
use colored::Colorize;
use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use promptscope_llm_api::{ClientFactory, LlmClient};
use promptscope_models::TaskKind;

use crate::cli::Cli;
use crate::task::build_request;
use crate::template::scan_placeholders;

pub mod setup;
pub use setup::{setup_from_cli, AppConfig};

/// Run one tool invocation and write its result to `out`.
///
/// In scan-only mode the template is scanned locally and the provider is never
/// contacted; otherwise exactly one completion request is submitted.
pub async fn run_tool<W: Write>(
    task: TaskKind,
    cli: &Cli,
    app_config: &AppConfig,
    client: &dyn LlmClient,
    out: &mut W,
) -> Result<()> {
    if cli.scan_only {
        let matches = scan_placeholders(&cli.prompt)?;
        let json = serde_json::to_string_pretty(&matches)
            .context("Failed to serialize detected placeholders")?;
        writeln!(out, "{}", json)?;
        return Ok(());
    }

    let request = build_request(task, &cli.prompt, cli.model.as_deref());

    let response = client
        .submit(&request, app_config.client_config.credential.as_ref())
        .await
        .with_context(|| format!("{} with model {} failed", task.display_name(), request.model))?;

    writeln!(out, "{}", response.content)
        .context("Failed to write model response to stdout")?;
    out.flush()?;

    Ok(())
}

/// Entry point shared by both binaries
pub async fn run_main(task: TaskKind) -> ExitCode {
    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    let cli = Cli::parse_for(task);
    let app_config = setup_from_cli(task, &cli, |key| env::var(key).ok());
    let client = ClientFactory::create(&app_config.client_config);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match run_tool(task, &cli, &app_config, client.as_ref(), &mut out).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".bright_red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
