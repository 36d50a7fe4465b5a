//! Infrastructure layer for story-tutor
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod credential;
pub mod llm;
pub mod logging;
pub mod story;
pub mod templates;

// Re-export commonly used types
pub use config::{
    ConfigError, ConfigIssue, ConfigLoader, FileAccountConfig, FileConfig, FileLlmConfig,
    FileLoggingConfig, FileOutputConfig, FilePromptsConfig, Severity, expand_home,
};
pub use credential::{EnvCredentialUnwrapper, PlainCredentialUnwrapper};
pub use llm::{
    HttpReply, HttpRequest, HttpTransport, LanguageModelClient, LlmSettings, ReqwestTransport,
    TransportError,
};
pub use logging::JsonlConversationLogger;
pub use story::JsonFileStoryStore;
pub use templates::FilePromptRepository;
