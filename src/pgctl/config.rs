use crate::error::Result;
use crate::instance::Instance;
use crate::model::PostgresConfig;
use std::fs;

/// How the effective config was obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Parsed from the instance's config file.
    File,
    /// No file on disk; compiled-in defaults.
    Defaults,
    /// A file exists but could not be used; defaults, with the reason.
    CorruptFile(String),
}

#[derive(Debug, Clone)]
pub struct Loaded {
    pub config: PostgresConfig,
    pub source: ConfigSource,
}

impl Loaded {
    pub fn warning(&self) -> Option<String> {
        match &self.source {
            ConfigSource::CorruptFile(reason) => Some(format!(
                "Ignoring unusable config file ({}); falling back to defaults",
                reason
            )),
            _ => None,
        }
    }
}

/// Load the instance's config, or fall back to instance-derived defaults
/// when the file is missing or unusable. A damaged config file must never
/// block a command; the fallback is reported, not raised.
pub fn load(instance: &Instance) -> Loaded {
    let path = instance.config_file();
    if !path.exists() {
        return Loaded {
            config: PostgresConfig::defaults_for(instance),
            source: ConfigSource::Defaults,
        };
    }

    let parsed = fs::read_to_string(&path)
        .map_err(|e| e.to_string())
        .and_then(|raw| PostgresConfig::from_json(&raw, instance).map_err(|e| e.to_string()));

    match parsed {
        Ok(config) => Loaded {
            config,
            source: ConfigSource::File,
        },
        Err(reason) => Loaded {
            config: PostgresConfig::defaults_for(instance),
            source: ConfigSource::CorruptFile(reason),
        },
    }
}

/// Persist `config` to the instance's config file, creating parent
/// directories as needed. Filesystem failures propagate: setup is not
/// complete until the config is on disk.
pub fn save(instance: &Instance, config: &PostgresConfig) -> Result<()> {
    let path = instance.config_file();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = serde_json::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
