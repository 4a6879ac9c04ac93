use super::{CmdMessage, CmdResult, Context};
use crate::error::Result;
use crate::runner::{Runner, Workdir};

/// Exec an interactive psql session into the running container.
pub fn run<R: Runner>(ctx: &Context, runner: &R) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let config = ctx.config(&mut result);

    let out = runner.run(
        &[
            "docker",
            "exec",
            "-it",
            &config.container_name,
            "psql",
            "-U",
            &config.user,
            "-d",
            &config.database,
        ],
        false,
        Workdir::Root,
    )?;
    if !out.success {
        result.add_message(CmdMessage::error(format!(
            "psql session failed: {}",
            out.output
        )));
    }
    Ok(result)
}
