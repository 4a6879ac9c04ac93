use crate::config::Loaded;
use crate::instance::Instance;
use crate::model::PostgresConfig;
use once_cell::sync::OnceCell;

pub mod config;
pub mod destroy;
pub mod helpers;
pub mod info;
pub mod logs;
pub mod psql;
pub mod restart;
pub mod setup;
pub mod start;
pub mod status;
pub mod stop;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// What a command hands back to the CLI layer. Commands never print;
/// `output` is verbatim text for stdout (status tables, config JSON)
/// and `messages` are leveled lines rendered by the CLI.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub output: Option<String>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_output(mut self, output: impl Into<String>) -> Self {
        self.output = Some(output.into());
        self
    }

    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|m| matches!(m.level, MessageLevel::Error))
    }
}

/// Per-invocation command context: the resolved instance plus a memoized
/// config. One process handles one command for one instance; a repeated
/// `config()` call observes the first load, not the disk.
pub struct Context {
    pub instance: Instance,
    loaded: OnceCell<Loaded>,
}

impl Context {
    pub fn new(instance: Instance) -> Self {
        Self {
            instance,
            loaded: OnceCell::new(),
        }
    }

    /// Effective config for the instance. The first call loads it (or
    /// defaults it) and surfaces any fallback warning into `result`.
    pub fn config(&self, result: &mut CmdResult) -> &PostgresConfig {
        let first = self.loaded.get().is_none();
        let loaded = self
            .loaded
            .get_or_init(|| crate::config::load(&self.instance));
        if first {
            if let Some(warning) = loaded.warning() {
                result.add_message(CmdMessage::warning(warning));
            }
        }
        &loaded.config
    }
}
