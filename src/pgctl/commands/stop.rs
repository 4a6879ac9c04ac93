use super::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::runner::{RunOutput, Runner, Workdir};

pub(crate) fn down<R: Runner>(runner: &R) -> Result<RunOutput> {
    runner.run(&["docker-compose", "down"], true, Workdir::Instance)
}

/// Take the container down, preserving data volumes. A failure is
/// reported but does not fail the process.
pub fn run<R: Runner>(runner: &R) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let out = down(runner)?;
    if out.success {
        result.add_message(CmdMessage::success("PostgreSQL stopped (data preserved)"));
    } else {
        result.add_message(CmdMessage::error(format!("Failed to stop: {}", out.output)));
    }
    Ok(result)
}
