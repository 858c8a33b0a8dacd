//! Version-control gateway.
//!
//! A thin wrapper over the `git` executable, always run from the repository
//! root. Git failures are data, not errors: every call yields a [`GitOutput`]
//! and it is up to the caller to surface `error` and carry on. A commit or
//! push that fails never undoes the file change that preceded it.

use crate::process::ProcessRunner;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitSettings {
    pub program: String,
    pub repo_root: PathBuf,
    pub remote: String,
    pub branch: String,
}

impl GitSettings {
    pub fn new(repo_root: PathBuf) -> Self {
        Self {
            program: "git".to_string(),
            repo_root,
            remote: "origin".to_string(),
            branch: "main".to_string(),
        }
    }
}

/// Outcome of one git invocation. `stdout` is trimmed; `error` holds the
/// trimmed stderr of a failed run (or the launch failure) when there is any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GitOutput {
    pub stdout: String,
    pub error: Option<String>,
}

pub struct Git<'a, R: ProcessRunner> {
    runner: &'a R,
    settings: &'a GitSettings,
}

impl<'a, R: ProcessRunner> Git<'a, R> {
    pub fn new(runner: &'a R, settings: &'a GitSettings) -> Self {
        Self { runner, settings }
    }

    pub fn settings(&self) -> &GitSettings {
        self.settings
    }

    pub fn run(&self, args: &[&str]) -> GitOutput {
        let args: Vec<String> = args.iter().map(|a| a.to_string()).collect();
        match self
            .runner
            .output(&self.settings.program, &args, &self.settings.repo_root)
        {
            Ok(out) => {
                let stderr = out.stderr.trim();
                let error = if !out.success() && !stderr.is_empty() {
                    debug!(?args, code = ?out.code, "git failed");
                    Some(stderr.to_string())
                } else {
                    None
                };
                debug!(?args, code = ?out.code, "git finished");
                GitOutput {
                    stdout: out.stdout.trim().to_string(),
                    error,
                }
            }
            Err(e) => {
                debug!(?args, "git could not be launched: {}", e);
                GitOutput {
                    stdout: String::new(),
                    error: Some(e.to_string()),
                }
            }
        }
    }

    pub fn add(&self, path: &Path) -> GitOutput {
        self.run(&["add", &path_arg(path)])
    }

    pub fn commit(&self, message: &str) -> GitOutput {
        self.run(&["commit", "-m", message])
    }

    /// Pushes to the configured remote and branch.
    pub fn push(&self) -> GitOutput {
        self.run(&["push", &self.settings.remote, &self.settings.branch])
    }

    /// Machine-readable status limited to `path`; empty stdout means clean.
    pub fn status_porcelain(&self, path: &Path) -> GitOutput {
        self.run(&["status", "--porcelain", "--", &path_arg(path)])
    }

    pub fn status_short(&self, path: &Path) -> GitOutput {
        self.run(&["status", "--short", "--", &path_arg(path)])
    }
}

fn path_arg(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
