//! CLI entrypoint for gapscout
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use colored::Colorize;
use gapscout_application::{
    NoProgress, ProgressNotifier, RunAnalysisError, RunAnalysisInput, RunAnalysisOutput,
    RunAnalysisUseCase,
};
use gapscout_domain::{OutputFormat, TaskType};
use gapscout_infrastructure::{
    ConfigLoader, FileConfig, HttpContentExtractor, OpenAiClientFactory,
};
use gapscout_presentation::{Cli, ConsoleFormatter, OutputConfig, ProgressReporter, SimpleProgress};
use std::io::IsTerminal;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Nothing was generated
const EXIT_NOTHING_PRODUCED: u8 = 1;
/// Bad input or configuration
const EXIT_USAGE: u8 = 2;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(ExitCode::SUCCESS);
    }

    if let Err(msg) = cli.check_competitors() {
        return Ok(usage_error(msg));
    }

    let mut config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => return Ok(usage_error(format!("{:#}", e))),
    };
    apply_cli_overrides(&mut config, &cli);
    if let Err(e) = config.validate() {
        return Ok(usage_error(format!("Invalid configuration: {}", e)));
    }

    let output_config = OutputConfig {
        format: cli
            .output
            .map(OutputFormat::from)
            .or(config.output.format)
            .unwrap_or_default(),
        color: config.output.color,
        show_debug: cli.debug || config.output.show_debug,
        show_progress: !cli.quiet,
        low_confidence_chars: config.analysis.low_confidence_chars,
    };
    if !output_config.color {
        colored::control::set_override(false);
    }

    info!("Starting gapscout");

    // === Dependency Injection ===
    let api_key = config.provider.resolve_api_key(cli.api_key.as_deref());
    let client = config.provider.to_client_config(api_key);

    let extractor = HttpContentExtractor::new(config.extraction.to_extractor_config())
        .context("Failed to build HTTP client")?;

    let use_case = RunAnalysisUseCase::new(Arc::new(extractor), Arc::new(OpenAiClientFactory))
        .with_params(config.analysis.to_params());

    // Build input
    let task_type = TaskType::from(cli.mode);
    let mut input = RunAnalysisInput::new(cli.keyword.clone().unwrap_or_default(), client, task_type)
        .with_competitor_urls(cli.competitors.iter().cloned());

    if let Some(url) = &cli.url {
        if task_type.requires_target() {
            input = input.with_target_url(url.clone());
        } else {
            warn!("--url is ignored when generating an outline");
        }
    }

    if cli.no_outline || !config.analysis.also_outline {
        input = input.without_outline();
    }

    // Execute with the progress display that fits the terminal
    let progress: Box<dyn ProgressNotifier> = if !output_config.show_progress {
        Box::new(NoProgress)
    } else if std::io::stderr().is_terminal() {
        Box::new(ProgressReporter::new())
    } else {
        Box::new(SimpleProgress)
    };

    let formatter = ConsoleFormatter::new()
        .with_low_confidence_chars(output_config.low_confidence_chars)
        .with_debug(output_config.show_debug);

    match use_case.execute_with_progress(input, progress.as_ref()).await {
        Ok(output) => Ok(print_output(&formatter, &output_config, &output)),
        Err(RunAnalysisError::Validation(e)) => Ok(usage_error(e.to_string())),
        Err(e) => {
            match output_config.format {
                OutputFormat::Json => println!("{}", ConsoleFormatter::format_failure_json(&e)),
                OutputFormat::Full | OutputFormat::Report => {
                    eprint!("{}", formatter.format_failure(&e))
                }
            }
            Ok(ExitCode::from(EXIT_NOTHING_PRODUCED))
        }
    }
}

fn load_config(cli: &Cli) -> Result<FileConfig> {
    if cli.no_config {
        return Ok(ConfigLoader::load_defaults());
    }
    if let Some(path) = &cli.config {
        if !path.exists() {
            bail!("Config file not found: {}", path.display());
        }
    }
    ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")
}

/// CLI flags take precedence over every config file
fn apply_cli_overrides(config: &mut FileConfig, cli: &Cli) {
    if let Some(provider) = cli.provider {
        config.provider.name = Some(provider.into());
    }
    if let Some(base_url) = &cli.base_url {
        config.provider.base_url = Some(base_url.clone());
    }
    if let Some(model) = &cli.model {
        config.provider.model = Some(model.clone());
    }
}

fn print_output(
    formatter: &ConsoleFormatter,
    config: &OutputConfig,
    output: &RunAnalysisOutput,
) -> ExitCode {
    match config.format {
        OutputFormat::Full => println!("{}", formatter.format(output)),
        OutputFormat::Report => {
            print!("{}", ConsoleFormatter::format_report_only(output));
            eprint!("{}", formatter.format_report_diagnostics(output));
        }
        OutputFormat::Json => println!("{}", ConsoleFormatter::format_json(output)),
    }

    if output.result.is_empty() {
        ExitCode::from(EXIT_NOTHING_PRODUCED)
    } else {
        ExitCode::SUCCESS
    }
}

fn usage_error(message: impl std::fmt::Display) -> ExitCode {
    eprintln!("{} {}", "Error:".red().bold(), message);
    ExitCode::from(EXIT_USAGE)
}
