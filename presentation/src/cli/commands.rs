//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for triage results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    Text,
    /// JSON wire shape
    Json,
}

impl From<OutputFormat> for triage_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => triage_domain::OutputFormat::Text,
            OutputFormat::Json => triage_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for symptom-triage
#[derive(Parser, Debug)]
#[command(name = "symptom-triage")]
#[command(author, version, about = "Rule-based symptom triage: emergency or clinic visit")]
#[command(long_about = r#"
Symptom Triage decides whether reported symptoms warrant emergency escalation
or a routine clinic visit, using keyword triggers, follow-up questions and
weighted risk scoring. It is not a medical diagnosis.

One-shot mode assesses the given symptom descriptions immediately. Chat mode
holds a conversation: high-risk symptoms (chest pain, breathing difficulty,
severe bleeding) start a short series of follow-up questions before a decision.

Configuration is loaded from (in priority order):
1. TRIAGE_* environment variables (e.g. TRIAGE_TRIAGE__MESSAGE_THRESHOLD=6)
2. --config <path>     Explicit config file
3. ./triage.toml       Project-level config
4. ~/.config/symptom-triage/config.toml   Global config

Example:
  symptom-triage "I have a mild rash"
  symptom-triage -o json "chest pain" "it started an hour ago"
  symptom-triage --clinic "my child has a fever"
  symptom-triage --chat --transcript chat.jsonl
"#)]
pub struct Cli {
    /// Symptom descriptions to assess (not required in chat mode)
    pub symptoms: Vec<String>,

    /// Start an interactive triage conversation
    #[arg(short, long)]
    pub chat: bool,

    /// Print only the clinic recommendation for the given symptoms
    #[arg(long, conflicts_with = "chat")]
    pub clinic: bool,

    /// Output format (overrides [output] format)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Write a JSONL conversation transcript (overrides [logging] transcript)
    #[arg(long, value_name = "PATH")]
    pub transcript: Option<PathBuf>,

    /// Write diagnostic logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Symptoms joined as one description
    pub fn symptom_text(&self) -> String {
        self.symptoms.join(" ")
    }
}
