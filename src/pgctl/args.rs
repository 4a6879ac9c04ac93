use clap::{Parser, Subcommand};

/// Returns the version string, including git hash for non-release builds.
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{}", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "pgctl", bin_name = "pgctl", version = get_version())]
#[command(about = "Containerized PostgreSQL development environment manager", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Instance to operate on (falls back to $PGCTL_INSTANCE, then "default")
    #[arg(short, long, global = true)]
    pub instance: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize configuration and generated scripts
    Setup,

    /// Start the PostgreSQL container and wait for readiness
    Start,

    /// Stop the PostgreSQL container (data preserved)
    Stop,

    /// Restart the PostgreSQL container
    Restart,

    /// Stop and remove all data (destructive)
    Destroy,

    /// Show container status
    Status,

    /// Stream PostgreSQL logs (Ctrl+C to exit)
    Logs,

    /// Connect with the psql client
    Psql,

    /// Show connection information
    Info,

    /// Print a default configuration for a new instance
    ConfigGen,

    /// Print the effective configuration for the selected instance
    ConfigDisplay,
}
