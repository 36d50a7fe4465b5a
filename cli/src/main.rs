//! CLI entrypoint for Story Tutor
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use tutor_application::{
    CompletionClient, ConversationLogger, NoConversationLogger, NoProgress, OnboardingStrategy,
    ProgressNotifier, PromptTemplateRepository, ReviewStrategy, StoryRecord, StoryStore,
    StoryStoreError, TutorOrchestrator,
};
use tutor_domain::{ReviewType, SafeguardGate};
use tutor_infrastructure::{
    ConfigLoader, EnvCredentialUnwrapper, FileConfig, FilePromptRepository, JsonFileStoryStore,
    JsonlConversationLogger, LanguageModelClient, ReqwestTransport, Severity, expand_home,
};
use tutor_presentation::{
    Cli, Command, ConsoleFormatter, ProgressReporter, SparkOutcome, SparkRepl,
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())?
    };

    let _log_guard = init_tracing(cli.verbose, config.logging.dir.as_deref());
    info!("Starting Story Tutor");

    check_config(&config)?;
    ConsoleFormatter::set_color(config.output.color);

    let Some(command) = cli.command else {
        bail!("No command given. Try `story-tutor spark --story <file>` or `story-tutor --help`.");
    };

    let show_progress = !cli.quiet && config.output.show_progress;

    match command {
        Command::Spark { story } => {
            let (store, record) = open_story(&story, true)?;
            let tutor = build_tutor(&config, show_progress)?;
            let mut repl = SparkRepl::new(tutor, store, record, config.account.to_account());

            match repl.run().await? {
                SparkOutcome::Ready => info!("Onboarding finished with the ready signal"),
                SparkOutcome::Quit => info!("Onboarding left by the writer"),
                SparkOutcome::Refused => info!("Onboarding refused by the safeguard gate"),
            }
        }
        Command::Review { story, review_type } => {
            let (_, record) = open_story(&story, false)?;
            let mut tutor = build_tutor(&config, show_progress)?;
            let review_type = ReviewType::from(review_type);

            let snapshot = record.to_snapshot(config.account.to_account());
            let reply = tutor.run_review(&snapshot, review_type).await;

            if tutor.session().is_empty() {
                print!("{}", ConsoleFormatter::notice(&reply));
            } else {
                print!("{}", ConsoleFormatter::review(review_type, &reply));
            }
        }
    }

    Ok(())
}

/// Install the tracing subscriber.
///
/// Console verbosity follows `-v`; when `[logging] dir` is set a daily
/// rolling file receives the same events. The returned guard must be held
/// until exit so buffered file lines are flushed.
fn init_tracing(verbose: u8, log_dir: Option<&str>) -> Option<WorkerGuard> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(expand_home(dir), "story-tutor.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(file_layer)
        .init();

    guard
}

/// Log every configuration issue; refuse to start on errors.
fn check_config(config: &FileConfig) -> Result<()> {
    let issues = config.validate();
    let mut errors = 0;

    for issue in &issues {
        match issue.severity {
            Severity::Warning => warn!(field = %issue.field, "{}", issue.message),
            Severity::Error => {
                errors += 1;
                eprintln!("config error: {}", issue.message);
            }
        }
    }

    if errors > 0 {
        bail!("{} configuration error(s); fix them or run with --no-config", errors);
    }
    Ok(())
}

/// Open the story at `path`. A missing file starts a new story when `create` is set.
fn open_story(path: &Path, create: bool) -> Result<(Arc<dyn StoryStore>, StoryRecord)> {
    let Some((store, id)) = JsonFileStoryStore::for_file(path) else {
        bail!("Not a story file: {}", path.display());
    };

    let record = match store.load(&id) {
        Ok(record) => record,
        Err(StoryStoreError::NotFound(_)) if create => {
            info!(id = %id, "Starting a new story");
            StoryRecord {
                title: id.clone(),
                id,
                ..Default::default()
            }
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Could not open story {}", path.display()));
        }
    };

    let store: Arc<dyn StoryStore> = Arc::new(store);
    Ok((store, record))
}

/// Wire the adapters into one session's orchestrator.
fn build_tutor(config: &FileConfig, show_progress: bool) -> Result<TutorOrchestrator> {
    let transport = Arc::new(ReqwestTransport::new(config.llm.timeout())?);
    let client: Arc<dyn CompletionClient> = Arc::new(LanguageModelClient::new(
        transport,
        Arc::new(EnvCredentialUnwrapper::new()),
        config.llm.to_settings(),
    ));

    let templates: Arc<dyn PromptTemplateRepository> =
        Arc::new(FilePromptRepository::new(config.prompts_dir()));
    let conversation_logger = conversation_logger(config.logging.conversation_log.as_deref());

    let onboarding = OnboardingStrategy::new(
        client.clone(),
        templates.clone(),
        conversation_logger.clone(),
        config.onboarding.clone(),
    );
    let review = ReviewStrategy::new(
        client,
        templates,
        conversation_logger.clone(),
        config.review.clone(),
    );

    let progress: Arc<dyn ProgressNotifier> = if show_progress {
        Arc::new(ProgressReporter::new())
    } else {
        Arc::new(NoProgress)
    };

    let gate = SafeguardGate::new(&config.safeguard)?;
    Ok(
        TutorOrchestrator::new(gate, Arc::new(onboarding), Arc::new(review))
            .with_conversation_logger(conversation_logger)
            .with_progress(progress),
    )
}

fn conversation_logger(path: Option<&str>) -> Arc<dyn ConversationLogger> {
    let Some(path) = path else {
        return Arc::new(NoConversationLogger);
    };

    match JsonlConversationLogger::open(expand_home(path)) {
        Ok(logger) => {
            info!(path = %logger.path().display(), "Writing conversation transcript");
            Arc::new(logger)
        }
        Err(e) => {
            warn!("Could not open conversation log {}: {}", path, e);
            Arc::new(NoConversationLogger)
        }
    }
}
