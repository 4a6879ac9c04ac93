use crate::error::{PgctlError, Result};
use crate::instance::Instance;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::thread;
use std::time::Duration;

/// Which directory a child process runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Workdir {
    /// The project root.
    Root,
    /// The resolved instance's build directory, created on demand.
    Instance,
}

/// Outcome of one child-process invocation. A non-zero exit is a normal,
/// reportable result; it never surfaces as an `Err`. In capture mode
/// `output` is the child's stdout on success and its stderr on failure;
/// in inherited-stdio mode it is empty or a generic failure description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutput {
    pub success: bool,
    pub output: String,
}

/// Seam between the lifecycle commands and the container runtime CLI.
/// The production impl spawns real processes; tests script outcomes.
pub trait Runner {
    fn run(&self, argv: &[&str], capture: bool, workdir: Workdir) -> Result<RunOutput>;

    /// Blocking pause between lifecycle steps. On the trait so tests can
    /// observe the restart pause and readiness-poll cadence instead of
    /// waiting it out.
    fn sleep(&self, duration: Duration) {
        thread::sleep(duration);
    }
}

/// Production runner: spawns the container runtime CLI as child
/// processes. Only a spawn failure (the binary itself cannot be found)
/// propagates as an error; everything else is a `RunOutput`.
pub struct DockerRunner {
    root: PathBuf,
    instance_dir: PathBuf,
}

impl DockerRunner {
    pub fn new(instance: &Instance) -> Self {
        Self {
            root: instance.root().to_path_buf(),
            instance_dir: instance.working_dir(),
        }
    }

    fn workdir(&self, kind: Workdir) -> Result<&Path> {
        match kind {
            Workdir::Root => Ok(&self.root),
            Workdir::Instance => {
                if !self.instance_dir.exists() {
                    fs::create_dir_all(&self.instance_dir)?;
                }
                Ok(&self.instance_dir)
            }
        }
    }
}

impl Runner for DockerRunner {
    fn run(&self, argv: &[&str], capture: bool, workdir: Workdir) -> Result<RunOutput> {
        let (program, args) = argv
            .split_first()
            .ok_or_else(|| PgctlError::Command("empty command".to_string()))?;

        let mut cmd = Command::new(program);
        cmd.args(args).current_dir(self.workdir(workdir)?);

        if capture {
            let out = cmd.output().map_err(|e| spawn_error(program, e))?;
            if out.status.success() {
                Ok(RunOutput {
                    success: true,
                    output: String::from_utf8_lossy(&out.stdout).into_owned(),
                })
            } else {
                Ok(RunOutput {
                    success: false,
                    output: String::from_utf8_lossy(&out.stderr).into_owned(),
                })
            }
        } else {
            // Interactive sessions and log streaming: the child owns the
            // caller's terminal until it exits or is interrupted.
            let status = cmd.status().map_err(|e| spawn_error(program, e))?;
            let output = if status.success() {
                String::new()
            } else {
                format!("'{}' exited with {}", program, status)
            };
            Ok(RunOutput {
                success: status.success(),
                output,
            })
        }
    }
}

fn spawn_error(program: &str, err: std::io::Error) -> PgctlError {
    PgctlError::Command(format!("Failed to launch '{}': {}", program, err))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn runner(root: &Path) -> DockerRunner {
        DockerRunner::new(&Instance::resolve(Some("default"), root))
    }

    #[test]
    fn test_capture_success_returns_stdout() {
        let temp = tempfile::tempdir().unwrap();
        let out = runner(temp.path())
            .run(&["sh", "-c", "echo hello"], true, Workdir::Root)
            .unwrap();
        assert!(out.success);
        assert_eq!(out.output.trim(), "hello");
    }

    #[test]
    fn test_capture_failure_returns_stderr() {
        let temp = tempfile::tempdir().unwrap();
        let out = runner(temp.path())
            .run(&["sh", "-c", "echo boom >&2; exit 3"], true, Workdir::Root)
            .unwrap();
        assert!(!out.success);
        assert_eq!(out.output.trim(), "boom");
    }

    #[test]
    fn test_inherited_mode_reports_generic_failure() {
        let temp = tempfile::tempdir().unwrap();
        let out = runner(temp.path())
            .run(&["sh", "-c", "exit 1"], false, Workdir::Root)
            .unwrap();
        assert!(!out.success);
        assert!(out.output.contains("exited with"));
    }

    #[test]
    fn test_missing_binary_is_an_error() {
        let temp = tempfile::tempdir().unwrap();
        let result = runner(temp.path()).run(
            &["definitely-not-a-real-binary-pgctl"],
            true,
            Workdir::Root,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_instance_workdir_created_on_demand() {
        let temp = tempfile::tempdir().unwrap();
        let r = runner(temp.path());
        let instance_dir = temp.path().join("build").join("DEFAULT");
        assert!(!instance_dir.exists());

        let out = r.run(&["sh", "-c", "pwd"], true, Workdir::Instance).unwrap();
        assert!(out.success);
        assert!(instance_dir.exists());
        assert!(out.output.trim().ends_with("build/DEFAULT"));
    }
}
