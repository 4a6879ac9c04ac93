use super::{helpers, CmdMessage, CmdResult, Context};
use crate::error::{PgctlError, Result};
use crate::runner::{Runner, Workdir};

/// Bring the container up and wait for the database to accept
/// connections. A failed `up` is fatal for the invocation; a readiness
/// timeout is not.
pub fn run<R: Runner>(ctx: &Context, runner: &R) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let up = runner.run(&["docker-compose", "up", "-d"], true, Workdir::Instance)?;
    if !up.success {
        return Err(PgctlError::Command(format!(
            "Failed to start PostgreSQL: {}",
            up.output
        )));
    }

    result.add_message(CmdMessage::success("PostgreSQL container started"));
    result.add_message(CmdMessage::info("Waiting for PostgreSQL to become ready..."));
    helpers::wait_for_ready(ctx, runner, &mut result)?;
    Ok(result)
}
