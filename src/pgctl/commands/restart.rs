use super::{start, stop, CmdMessage, CmdResult, Context};
use crate::error::Result;
use crate::runner::Runner;
use std::time::Duration;

pub const RESTART_PAUSE: Duration = Duration::from_secs(2);

/// Stop, pause, start. A failed stop aborts before the start is
/// attempted; the start half keeps its own contract, including the
/// readiness poll and its fatality on a failed `up`.
pub fn run<R: Runner>(ctx: &Context, runner: &R) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let down = stop::down(runner)?;
    if !down.success {
        result.add_message(CmdMessage::error(format!(
            "Failed to stop: {}",
            down.output
        )));
        return Ok(result);
    }
    result.add_message(CmdMessage::success("PostgreSQL stopped"));

    runner.sleep(RESTART_PAUSE);

    let started = start::run(ctx, runner)?;
    result.messages.extend(started.messages);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::Instance;
    use crate::test_utils::ScriptedRunner;

    fn ctx() -> Context {
        let temp = tempfile::tempdir().unwrap();
        Context::new(Instance::resolve(Some("default"), temp.path()))
    }

    #[test]
    fn test_failed_stop_aborts_before_start() {
        let runner = ScriptedRunner::failing("compose error");
        let result = run(&ctx(), &runner).unwrap();

        assert_eq!(runner.call_count(), 1);
        assert_eq!(runner.call(0), vec!["docker-compose", "down"]);
        assert!(runner.sleeps.borrow().is_empty());
        assert!(result.has_errors());
    }

    #[test]
    fn test_restart_sequences_down_pause_up() {
        let runner = ScriptedRunner::succeeding();
        let result = run(&ctx(), &runner).unwrap();

        assert_eq!(runner.call(0), vec!["docker-compose", "down"]);
        assert_eq!(runner.call(1), vec!["docker-compose", "up", "-d"]);
        // Fixed 2s pause, then the first poll interval
        assert_eq!(runner.sleeps.borrow()[0], RESTART_PAUSE);
        assert_eq!(runner.sleeps.borrow()[1], Duration::from_secs(1));
        assert!(!result.has_errors());
    }
}
