//! CLI entrypoint for Symptom Triage
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::path::Path;
use std::sync::Arc;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use triage_application::{
    AssessSymptomsUseCase, ConversationLogger, HandleMessageUseCase, NoConversationLogger,
};
use triage_domain::{OutputFormat, get_clinic_recommendation};
use triage_infrastructure::{
    ConfigLoader, FileConfig, InMemoryConversationStore, JsonlConversationLogger,
    dialogue_from_config,
};
use triage_presentation::{ChatRepl, Cli, ConsoleFormatter};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Held until exit so buffered log lines are flushed
    let _log_guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    let config: FileConfig = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("failed to load configuration: {}", e))?
    };
    let warnings = config.ensure_valid()?;
    if !warnings.is_empty() {
        eprintln!("{}", ConsoleFormatter::format_issues(&warnings));
    }

    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    let format: OutputFormat = match cli.output {
        Some(format) => format.into(),
        None => config.output.parse_format().0,
    };

    info!("Starting Symptom Triage");

    // Chat mode
    if cli.chat {
        let transcript = cli.transcript.as_ref().or(config.logging.transcript.as_ref());
        let logger: Arc<dyn ConversationLogger> = match transcript {
            Some(path) => match JsonlConversationLogger::new(path) {
                Some(logger) => Arc::new(logger),
                None => Arc::new(NoConversationLogger),
            },
            None => Arc::new(NoConversationLogger),
        };

        // === Dependency Injection ===
        let use_case = HandleMessageUseCase::new(
            Arc::new(InMemoryConversationStore::new()),
            dialogue_from_config(&config.dialogue),
        )
        .with_config(config.behavior_config())
        .with_conversation_logger(logger);

        let mut repl = ChatRepl::new(use_case).with_format(format);
        repl.run().await.context("chat session failed")?;
        return Ok(());
    }

    // One-shot modes - symptoms are required
    if cli.symptoms.is_empty() {
        bail!("Describe at least one symptom. Use --chat for interactive mode.");
    }

    if cli.clinic {
        let recommendation = get_clinic_recommendation(&cli.symptom_text());
        let output = match format {
            OutputFormat::Text => ConsoleFormatter::format_recommendation(&recommendation),
            OutputFormat::Json => ConsoleFormatter::format_json(&recommendation),
        };
        println!("{}", output);
        return Ok(());
    }

    let assessment = AssessSymptomsUseCase::new()
        .with_recommend_clinics(config.triage.recommend_clinics)
        .execute(cli.symptoms.as_slice());

    let output = match format {
        OutputFormat::Text => ConsoleFormatter::format_assessment(&assessment),
        OutputFormat::Json => ConsoleFormatter::format_json(&assessment),
    };
    println!("{}", output);

    Ok(())
}

/// Initialize tracing by verbosity level; `RUST_LOG` takes precedence.
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    match log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("cannot open log file {}", path.display()))?;
            let (writer, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_ansi(false)
                .with_writer(writer)
                .init();
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
            Ok(None)
        }
    }
}
