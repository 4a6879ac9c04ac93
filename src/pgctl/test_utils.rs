//! Scripted runner for exercising the command layer without a container
//! runtime, the same way the store tests swap the filesystem backend for
//! an in-memory one.

use crate::error::Result;
use crate::runner::{RunOutput, Runner, Workdir};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::time::Duration;

/// Records every invocation and replays scripted outcomes. Queued
/// outcomes are consumed first; after that every call reports the
/// fallback.
pub struct ScriptedRunner {
    scripted: RefCell<VecDeque<RunOutput>>,
    fallback: RunOutput,
    pub calls: RefCell<Vec<Vec<String>>>,
    pub captures: RefCell<Vec<bool>>,
    pub workdirs: RefCell<Vec<Workdir>>,
    pub sleeps: RefCell<Vec<Duration>>,
}

impl ScriptedRunner {
    /// Every invocation succeeds with empty output.
    pub fn succeeding() -> Self {
        Self::with_fallback(RunOutput {
            success: true,
            output: String::new(),
        })
    }

    /// Every invocation fails with the given stderr text.
    pub fn failing(output: &str) -> Self {
        Self::with_fallback(RunOutput {
            success: false,
            output: output.to_string(),
        })
    }

    fn with_fallback(fallback: RunOutput) -> Self {
        Self {
            scripted: RefCell::new(VecDeque::new()),
            fallback,
            calls: RefCell::new(Vec::new()),
            captures: RefCell::new(Vec::new()),
            workdirs: RefCell::new(Vec::new()),
            sleeps: RefCell::new(Vec::new()),
        }
    }

    /// Queue an outcome consumed before the fallback kicks in.
    pub fn push_outcome(&self, success: bool, output: &str) {
        self.scripted.borrow_mut().push_back(RunOutput {
            success,
            output: output.to_string(),
        });
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    pub fn call(&self, index: usize) -> Vec<String> {
        self.calls.borrow()[index].clone()
    }
}

impl Runner for ScriptedRunner {
    fn run(&self, argv: &[&str], capture: bool, workdir: Workdir) -> Result<RunOutput> {
        self.calls
            .borrow_mut()
            .push(argv.iter().map(|s| s.to_string()).collect());
        self.captures.borrow_mut().push(capture);
        self.workdirs.borrow_mut().push(workdir);
        Ok(self
            .scripted
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| self.fallback.clone()))
    }

    fn sleep(&self, duration: Duration) {
        self.sleeps.borrow_mut().push(duration);
    }
}
