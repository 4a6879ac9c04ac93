use std::env;
use std::path::{Path, PathBuf};

/// Name of the sentinel unnamed instance.
pub const DEFAULT_INSTANCE: &str = "default";

/// Consulted when no `--instance` flag is given.
pub const INSTANCE_ENV: &str = "PGCTL_INSTANCE";

/// Overrides the project root (otherwise the current directory).
pub const HOME_ENV: &str = "PGCTL_HOME";

// The unnamed instance lives under this literal, not under "default".
// Earlier releases created the directory this way and existing
// checkouts depend on it.
const DEFAULT_BUILD_SUBDIR: &str = "DEFAULT";

const CONTAINER_PREFIX: &str = "dev-postgres";

/// A named, isolated scope for one managed database: determines the
/// instance's build directory, config file path, and fallback container
/// name. Resolution is pure path construction; nothing touches the disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instance {
    name: String,
    root: PathBuf,
}

impl Instance {
    /// Resolve the instance selection for this invocation: an explicit
    /// name wins, then `PGCTL_INSTANCE`, then the sentinel default.
    pub fn resolve(name: Option<&str>, root: &Path) -> Self {
        let name = name
            .map(str::to_string)
            .or_else(|| env::var(INSTANCE_ENV).ok().filter(|v| !v.is_empty()))
            .unwrap_or_else(|| DEFAULT_INSTANCE.to_string());
        Self {
            name,
            root: root.to_path_buf(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn is_default(&self) -> bool {
        self.name == DEFAULT_INSTANCE
    }

    /// Build directory holding everything generated for this instance.
    pub fn working_dir(&self) -> PathBuf {
        let subdir = if self.is_default() {
            DEFAULT_BUILD_SUBDIR
        } else {
            self.name.as_str()
        };
        self.root.join("build").join(subdir)
    }

    pub fn config_file(&self) -> PathBuf {
        self.working_dir().join("config").join("postgres-config.json")
    }

    pub fn compose_file(&self) -> PathBuf {
        self.working_dir().join("docker-compose.yml")
    }

    pub fn init_scripts_dir(&self) -> PathBuf {
        self.working_dir().join("init-scripts")
    }

    /// Container name used when the config does not set one explicitly.
    pub fn default_container_name(&self) -> String {
        if self.is_default() {
            CONTAINER_PREFIX.to_string()
        } else {
            format!("{}-{}", CONTAINER_PREFIX, self.name)
        }
    }
}

/// Project root for this invocation: `PGCTL_HOME` if set, else the
/// current directory.
pub fn project_root() -> PathBuf {
    match env::var(HOME_ENV) {
        Ok(home) if !home.is_empty() => PathBuf::from(home),
        _ => env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    }
}
