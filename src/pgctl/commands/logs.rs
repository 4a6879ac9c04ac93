use super::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::runner::{Runner, Workdir};

/// Attach to the container's log stream with inherited stdio. Runs
/// until the child exits or the user interrupts it.
pub fn run<R: Runner>(runner: &R) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let out = runner.run(
        &["docker-compose", "logs", "-f", "postgres"],
        false,
        Workdir::Instance,
    )?;
    if !out.success {
        result.add_message(CmdMessage::error(format!(
            "Failed to stream logs: {}",
            out.output
        )));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::ScriptedRunner;

    #[test]
    fn test_logs_streams_without_capture() {
        let runner = ScriptedRunner::succeeding();
        run(&runner).unwrap();
        assert_eq!(
            runner.call(0),
            vec!["docker-compose", "logs", "-f", "postgres"]
        );
        assert!(!runner.captures.borrow()[0]);
    }
}
