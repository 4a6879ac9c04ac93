use super::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::runner::{Runner, Workdir};

/// Token the user must type to confirm data destruction.
pub const CONFIRM_TOKEN: &str = "yes";

/// Tear the instance down including its data volumes. `confirmation` is
/// read by the CLI layer beforehand; anything but the exact token
/// (case-insensitive) aborts with no side effects. This is the only
/// destructive operation, and the only one with a confirmation gate.
pub fn run<R: Runner>(runner: &R, confirmation: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if confirmation.trim().to_lowercase() != CONFIRM_TOKEN {
        result.add_message(CmdMessage::info("Aborted"));
        return Ok(result);
    }

    let down = runner.run(&["docker-compose", "down", "-v"], true, Workdir::Instance)?;
    if down.success {
        result.add_message(CmdMessage::success(
            "PostgreSQL destroyed (all data removed)",
        ));
        result.add_message(CmdMessage::info(
            "Run 'setup' and 'start' again to recreate",
        ));
    } else {
        result.add_message(CmdMessage::error(format!(
            "Failed to destroy: {}",
            down.output
        )));
    }
    Ok(result)
}
