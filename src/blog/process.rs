//! Subprocess execution.
//!
//! Everything that shells out (the editor, git) goes through [`ProcessRunner`]
//! so commands can be tested against [`fake::FakeRunner`] without launching
//! real executables.

use crate::error::{BlogError, Result};
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::debug;

/// Captured result of a finished non-interactive process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ProcessOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

pub trait ProcessRunner {
    /// Runs `program` in `cwd` with captured stdout/stderr and waits for it.
    fn output(&self, program: &str, args: &[String], cwd: &Path) -> Result<ProcessOutput>;

    /// Runs `program` attached to the current terminal and waits for it.
    /// Returns the exit code, `None` if the process was killed by a signal.
    fn interactive(&self, program: &str, args: &[String]) -> Result<Option<i32>>;
}

/// Runs real processes via `std::process::Command`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn output(&self, program: &str, args: &[String], cwd: &Path) -> Result<ProcessOutput> {
        debug!(program, ?args, cwd = %cwd.display(), "running process");
        let output = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| BlogError::Process(format!("Failed to launch '{}': {}", program, e)))?;

        Ok(ProcessOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }

    fn interactive(&self, program: &str, args: &[String]) -> Result<Option<i32>> {
        debug!(program, ?args, "running interactive process");
        let status = Command::new(program)
            .args(args)
            .status()
            .map_err(|e| BlogError::Process(format!("Failed to launch '{}': {}", program, e)))?;
        Ok(status.code())
    }
}

#[cfg(any(test, feature = "test_utils"))]
pub mod fake {
    use super::*;
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::path::PathBuf;

    /// One recorded invocation.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct Call {
        pub program: String,
        pub args: Vec<String>,
        pub cwd: Option<PathBuf>,
    }

    impl Call {
        /// The invocation as a single space-joined line, e.g. `git add posts`.
        pub fn line(&self) -> String {
            std::iter::once(self.program.as_str())
                .chain(self.args.iter().map(String::as_str))
                .collect::<Vec<_>>()
                .join(" ")
        }
    }

    /// Records calls and replays scripted outputs in order.
    /// Unscripted calls succeed with empty output.
    #[derive(Debug, Default)]
    pub struct FakeRunner {
        calls: RefCell<Vec<Call>>,
        outputs: RefCell<VecDeque<ProcessOutput>>,
        interactive_code: Option<i32>,
        spawn_error: bool,
    }

    impl FakeRunner {
        pub fn new() -> Self {
            Self {
                interactive_code: Some(0),
                ..Self::default()
            }
        }

        /// Every call fails to launch.
        pub fn failing_to_spawn() -> Self {
            Self {
                spawn_error: true,
                ..Self::new()
            }
        }

        pub fn with_interactive_code(mut self, code: Option<i32>) -> Self {
            self.interactive_code = code;
            self
        }

        /// Queues the output returned by the next captured call.
        pub fn push_output(&self, code: i32, stdout: &str, stderr: &str) {
            self.outputs.borrow_mut().push_back(ProcessOutput {
                code: Some(code),
                stdout: stdout.to_string(),
                stderr: stderr.to_string(),
            });
        }

        pub fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }

        pub fn lines(&self) -> Vec<String> {
            self.calls.borrow().iter().map(Call::line).collect()
        }

        fn record(&self, program: &str, args: &[String], cwd: Option<&Path>) -> Result<()> {
            self.calls.borrow_mut().push(Call {
                program: program.to_string(),
                args: args.to_vec(),
                cwd: cwd.map(Path::to_path_buf),
            });
            if self.spawn_error {
                return Err(BlogError::Process(format!(
                    "Failed to launch '{}': not found",
                    program
                )));
            }
            Ok(())
        }
    }

    impl ProcessRunner for FakeRunner {
        fn output(&self, program: &str, args: &[String], cwd: &Path) -> Result<ProcessOutput> {
            self.record(program, args, Some(cwd))?;
            Ok(self.outputs.borrow_mut().pop_front().unwrap_or(ProcessOutput {
                code: Some(0),
                ..ProcessOutput::default()
            }))
        }

        fn interactive(&self, program: &str, args: &[String]) -> Result<Option<i32>> {
            self.record(program, args, None)?;
            Ok(self.interactive_code)
        }
    }
}
