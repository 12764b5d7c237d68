//! CLI command definitions

use clap::{Parser, ValueEnum};
use gapscout_domain::{MAX_COMPETITORS, Provider, TaskType};
use std::path::PathBuf;

/// What to generate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Mode {
    /// Compare your page against competitors (needs --url)
    #[default]
    Gap,
    /// Plan a new page from competitor content only
    Outline,
}

impl From<Mode> for TaskType {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Gap => TaskType::GapAnalysis,
            Mode::Outline => TaskType::OutlineGeneration,
        }
    }
}

/// Chat-completion provider preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ProviderArg {
    Groq,
    Openrouter,
    /// Any OpenAI-compatible endpoint (set --base-url and --model)
    Other,
}

impl From<ProviderArg> for Provider {
    fn from(arg: ProviderArg) -> Self {
        match arg {
            ProviderArg::Groq => Provider::Groq,
            ProviderArg::Openrouter => Provider::OpenRouter,
            ProviderArg::Other => Provider::Other,
        }
    }
}

/// Output format for analysis results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Source summary, report, outline and errors
    Full,
    /// Only the generated markdown
    Report,
    /// JSON output
    Json,
}

impl From<OutputFormat> for gapscout_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => gapscout_domain::OutputFormat::Full,
            OutputFormat::Report => gapscout_domain::OutputFormat::Report,
            OutputFormat::Json => gapscout_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for gapscout
#[derive(Parser, Debug)]
#[command(name = "gapscout")]
#[command(author, version, about = "SEO content gap analysis and outline generation")]
#[command(long_about = r#"
gapscout fetches competitor pages (and optionally your own), strips them down
to plain text and asks an LLM for a content gap report or a content outline.

The run has two phases:
1. Extract: every URL is fetched and cleaned; failures are reported and skipped
2. Generate: one call for the gap report and/or one for the outline

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./gapscout.toml     Project-level config
3. ~/.config/gapscout/config.toml   Global config

The API key is taken from --api-key, then provider.api_key in the config,
then the environment variable named by provider.api_key_env (GAPSCOUT_API_KEY).

Example:
  gapscout "best running shoes 2024" --url https://my.site/shoes \
      -c https://a.com/shoes -c https://b.com/shoes
  gapscout "sourdough starter" --mode outline -c https://a.com/starter -o report
"#)]
pub struct Cli {
    /// Primary keyword the page should rank for
    #[arg(required_unless_present = "show_config")]
    pub keyword: Option<String>,

    /// Analysis mode
    #[arg(short, long, value_enum, default_value = "gap")]
    pub mode: Mode,

    /// Your page (required for gap analysis, ignored for outlines)
    #[arg(short, long, value_name = "URL")]
    pub url: Option<String>,

    /// Competitor page (up to 3, can be specified multiple times)
    #[arg(short = 'c', long = "competitor", value_name = "URL")]
    pub competitors: Vec<String>,

    /// Skip the outline after a gap analysis
    #[arg(long)]
    pub no_outline: bool,

    /// Provider preset (sets the default base URL and model)
    #[arg(long, value_enum)]
    pub provider: Option<ProviderArg>,

    /// API key for the provider
    #[arg(long, value_name = "KEY")]
    pub api_key: Option<String>,

    /// Override the provider's base URL
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Override the provider's model
    #[arg(long, value_name = "NAME")]
    pub model: Option<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Show the scraped text of each source
    #[arg(long)]
    pub debug: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// Reject more competitor URLs than there are slots
    pub fn check_competitors(&self) -> Result<(), String> {
        if self.competitors.len() > MAX_COMPETITORS {
            return Err(format!(
                "At most {} competitor URLs are supported, got {}",
                MAX_COMPETITORS,
                self.competitors.len()
            ));
        }
        Ok(())
    }
}
