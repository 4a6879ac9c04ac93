//! Thin facade over the command layer: the single entry point for every
//! pgctl operation regardless of the UI driving it. Dispatch only: no
//! business logic, no terminal I/O.
//!
//! Generic over [`Runner`] so the whole lifecycle surface can be
//! exercised against a scripted runner instead of a container runtime.

use crate::commands::{self, CmdResult, Context};
use crate::error::Result;
use crate::instance::Instance;
use crate::runner::Runner;

pub struct PgctlApi<R: Runner> {
    ctx: Context,
    runner: R,
}

impl<R: Runner> PgctlApi<R> {
    pub fn new(ctx: Context, runner: R) -> Self {
        Self { ctx, runner }
    }

    pub fn instance(&self) -> &Instance {
        &self.ctx.instance
    }

    pub fn setup(&self) -> Result<CmdResult> {
        commands::setup::run(&self.ctx)
    }

    pub fn start(&self) -> Result<CmdResult> {
        commands::start::run(&self.ctx, &self.runner)
    }

    pub fn stop(&self) -> Result<CmdResult> {
        commands::stop::run(&self.runner)
    }

    pub fn restart(&self) -> Result<CmdResult> {
        commands::restart::run(&self.ctx, &self.runner)
    }

    pub fn destroy(&self, confirmation: &str) -> Result<CmdResult> {
        commands::destroy::run(&self.runner, confirmation)
    }

    pub fn status(&self) -> Result<CmdResult> {
        commands::status::run(&self.ctx, &self.runner)
    }

    pub fn logs(&self) -> Result<CmdResult> {
        commands::logs::run(&self.runner)
    }

    pub fn psql(&self) -> Result<CmdResult> {
        commands::psql::run(&self.ctx, &self.runner)
    }

    pub fn info(&self) -> Result<CmdResult> {
        commands::info::run(&self.ctx)
    }

    pub fn config_gen(&self) -> Result<CmdResult> {
        commands::config::gen()
    }

    pub fn config_display(&self) -> Result<CmdResult> {
        commands::config::display(&self.ctx)
    }
}
