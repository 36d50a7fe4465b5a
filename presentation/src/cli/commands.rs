//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tutor_domain::ReviewType;

/// Kind of review requested on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReviewTypeArg {
    /// One grammar or spelling rule
    Orthographic,
    /// One style rule
    Style,
}

impl From<ReviewTypeArg> for ReviewType {
    fn from(arg: ReviewTypeArg) -> Self {
        match arg {
            ReviewTypeArg::Orthographic => ReviewType::Orthographic,
            ReviewTypeArg::Style => ReviewType::Style,
        }
    }
}

/// Tutoring commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interactive onboarding: answer the tutor's questions until you are ready to write
    Spark {
        /// Story file (JSON); created on first save if it does not exist
        #[arg(short, long, value_name = "FILE")]
        story: PathBuf,
    },
    /// Ask for one review of the end of the story
    Review {
        /// Story file (JSON)
        #[arg(short, long, value_name = "FILE")]
        story: PathBuf,

        /// What to look for
        #[arg(short = 't', long = "type", value_enum, default_value = "orthographic")]
        review_type: ReviewTypeArg,
    },
}

/// CLI arguments for story-tutor
#[derive(Parser, Debug)]
#[command(name = "story-tutor")]
#[command(author, version, about = "Socratic writing tutor for young writers")]
#[command(long_about = r#"
Story Tutor asks a young writer a short series of questions to get a story
started, and reviews the end of a draft for one grammar or style rule.

Every request is screened first: without a configured service credential, or
when the story contains prompt-injection phrases, personal information or
banned words, nothing is sent to the language-model service.

Configuration files are loaded from (in priority order):
1. STORY_TUTOR_* environment variables
2. --config <path>          Explicit config file
3. ./story-tutor.toml       Project-level config
4. ~/.config/story-tutor/config.toml   Global config

Example:
  story-tutor spark --story drafts/dragon.json
  story-tutor review --story drafts/dragon.json --type style
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
