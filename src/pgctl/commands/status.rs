use super::{CmdMessage, CmdResult, Context};
use crate::error::Result;
use crate::runner::{Runner, Workdir};

/// Report the runtime's view of the named container, verbatim. An
/// absent container is a normal outcome, not an error; even a failed
/// query only produces an error-level message.
pub fn run<R: Runner>(ctx: &Context, runner: &R) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let config = ctx.config(&mut result);

    result.add_message(CmdMessage::info(format!(
        "PostgreSQL status (instance: {}, container: {})",
        ctx.instance.name(),
        config.container_name
    )));

    let filter = format!("name={}", config.container_name);
    let ps = runner.run(
        &[
            "docker",
            "ps",
            "-a",
            "--filter",
            &filter,
            "--format",
            "table {{.Names}}\t{{.Status}}\t{{.Ports}}",
        ],
        true,
        Workdir::Root,
    )?;

    if ps.success {
        result.output = Some(ps.output);
    } else {
        result.add_message(CmdMessage::error("Could not check status"));
    }
    Ok(result)
}
