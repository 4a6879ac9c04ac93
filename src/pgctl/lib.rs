//! # pgctl
//!
//! A local manager for containerized PostgreSQL development instances:
//! it renders a compose file and SQL bootstrap scripts from a small JSON
//! config, then drives the container runtime CLI through one-shot
//! lifecycle commands (`setup`, `start`, `stop`, `restart`, `destroy`,
//! `status`, `logs`, `psql`, `info`, `config-gen`, `config-display`).
//!
//! pgctl is a library with a CLI client, not a CLI with incidental
//! library code. From [`api`] inward, nothing writes to stdout/stderr,
//! calls `std::process::exit`, or assumes a terminal; commands return
//! `Result<CmdResult>` and the binary renders it. The two impure seams
//! are explicit: the filesystem (config store and generated artifacts)
//! and the [`runner::Runner`] trait wrapping the container runtime CLI,
//! which tests replace with a scripted implementation.
//!
//! ## Instances
//!
//! Every command operates on one named instance, selected by
//! `--instance`, then `PGCTL_INSTANCE`, then the unnamed default. An
//! instance owns an isolated build directory (`build/<name>`, with the
//! default instance under the literal `build/DEFAULT`), its config file,
//! and a derived container name, so independent databases never share
//! state.
//!
//! ## Module overview
//!
//! - [`model`]: the validated, immutable [`model::PostgresConfig`]
//! - [`instance`]: instance-name resolution and path derivation
//! - [`config`]: load-or-default config store, tolerant of damaged files
//! - [`generate`]: deterministic compose/SQL renderers
//! - [`runner`]: subprocess seam to the container runtime
//! - [`commands`]: one module per lifecycle operation
//! - [`api`]: the facade the CLI (or any other client) calls
//! - [`error`]: error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod generate;
pub mod instance;
pub mod model;
pub mod runner;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
