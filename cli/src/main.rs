//! CLI entrypoint for chatlens
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use chatlens_application::{
    InterpretAnalysisInput, InterpretAnalysisUseCase, NoProgress, PrepareAnalysisInput,
    PrepareAnalysisUseCase, PreparedAnalysis, ReadingConfig, ReadingProgressNotifier,
    RunReadingError, RunReadingInput, RunReadingUseCase,
};
use chatlens_domain::AnalysisPayload;
use chatlens_infrastructure::{ConfigLoader, FileConfig, ReplayAnalysisGateway};
use chatlens_presentation::{
    Cli, Command, OutputConfig, OutputFormatter, ProgressReporter, SimpleProgress, formatter_for,
};
use clap::Parser;
use std::io::IsTerminal;
use std::path::Path;
use std::sync::Arc;
use tokio::io::AsyncReadExt;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Path argument meaning "read from stdin"
const STDIN_PATH: &str = "-";

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Keep the guard alive so buffered log lines are flushed on exit
    let _log_guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    info!("Starting chatlens");

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    let file_config = load_config(&cli)?;
    let output = OutputConfig::from_file(
        file_config.output.format,
        file_config.output.color,
        file_config.output.progress,
    )
        .with_cli_overrides(cli.output, cli.no_color, cli.quiet);
    if !output.color {
        colored::control::set_override(false);
    }

    let Some(command) = cli.command else {
        bail!("No command given. Run `chatlens --help` for usage.");
    };

    // === Dependency Injection ===
    let reading_config = file_config.reading_config();
    let formatter = formatter_for(output.format);

    let rendered = run(command, reading_config, formatter.as_ref(), &output).await?;
    println!("{}", rendered);

    Ok(())
}

/// Initialize logging based on verbosity level
///
/// Without `-v`, `RUST_LOG` is honoured before falling back to `warn`.
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    match log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            let (writer, guard) = tracing_appender::non_blocking(file);
            builder.with_writer(writer).with_ansi(false).init();
            Ok(Some(guard))
        }
        None => {
            builder.with_writer(std::io::stderr).init();
            Ok(None)
        }
    }
}

fn load_config(cli: &Cli) -> Result<FileConfig> {
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?
    };

    for issue in config.validate() {
        if issue.is_error() {
            bail!("Invalid configuration: {}", issue.message);
        }
        warn!("{}", issue);
    }
    Ok(config)
}

async fn run(
    command: Command,
    config: ReadingConfig,
    formatter: &dyn OutputFormatter,
    output: &OutputConfig,
) -> Result<String> {
    match command {
        Command::Speakers { input, me } => {
            let prepared = prepare(&config, &input, me).await?;
            Ok(formatter.format_speakers(&prepared))
        }
        Command::Format { input } => {
            let prepared = prepare(&config, &input, None).await?;
            Ok(formatter.format_classification(&prepared))
        }
        Command::Prepare { input, me } => {
            let prepared = prepare(&config, &input, me).await?;
            if prepared.needs_self_choice() {
                return Err(unresolved_error(&prepared).into());
            }
            Ok(formatter.format_request(&prepared))
        }
        Command::Interpret { payload, limit } => {
            let payload = load_payload(&payload).await?;
            let reading = InterpretAnalysisUseCase::new(config).execute(
                InterpretAnalysisInput::standalone(payload).with_visible_limit(limit),
            );
            Ok(formatter.format_reading(&reading))
        }
        Command::Read {
            input,
            payload,
            me,
            limit,
        } => {
            let text = read_text(&input).await?;
            let gateway = Arc::new(ReplayAnalysisGateway::new(payload));
            let use_case = RunReadingUseCase::new(gateway, config);
            let input = RunReadingInput::new(text)
                .with_self_hint(me)
                .with_visible_limit(limit);

            let progress: Box<dyn ReadingProgressNotifier> = if !output.show_progress {
                Box::new(NoProgress)
            } else if std::io::stderr().is_terminal() {
                Box::new(ProgressReporter::new())
            } else {
                Box::new(SimpleProgress)
            };

            let reading = use_case.execute(input, progress.as_ref()).await?;
            Ok(formatter.format_reading(&reading))
        }
    }
}

async fn prepare(
    config: &ReadingConfig,
    input: &Path,
    me: Option<String>,
) -> Result<PreparedAnalysis> {
    let text = read_text(input).await?;
    let mut prepare_input = PrepareAnalysisInput::new(text);
    prepare_input.self_hint = me;
    Ok(PrepareAnalysisUseCase::new(config.clone()).execute(prepare_input))
}

fn unresolved_error(prepared: &PreparedAnalysis) -> RunReadingError {
    RunReadingError::SpeakersUnresolved {
        candidates: prepared
            .request
            .candidates
            .iter()
            .map(|c| c.name.clone())
            .collect(),
    }
}

/// Read a text argument: a file path, or `-` for stdin
async fn read_text(path: &Path) -> Result<String> {
    if path.as_os_str() == STDIN_PATH {
        let mut text = String::new();
        tokio::io::stdin()
            .read_to_string(&mut text)
            .await
            .context("Failed to read stdin")?;
        return Ok(text);
    }
    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))
}

/// Read an analysis payload file; the content must at least be JSON
async fn load_payload(path: &Path) -> Result<AnalysisPayload> {
    let raw = read_text(path).await?;
    let value: serde_json::Value = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not valid JSON", path.display()))?;
    Ok(AnalysisPayload::from_value(&value))
}
