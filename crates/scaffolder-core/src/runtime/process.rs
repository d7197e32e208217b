//! External process execution
//!
//! The materializer never spawns processes itself; it hands a [`CommandSpec`]
//! to a [`CommandRunner`]. [`SystemRunner`] is the real implementation.

use std::fmt;
use std::path::PathBuf;
use std::process::Stdio;
use thiserror::Error;
use tokio::process::Command as TokioCommand;

/// Number of stderr lines kept when a quiet command fails
const STDERR_TAIL_LINES: usize = 8;

/// How a command's output is handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Child shares the terminal (the generator may ask questions)
    Inherit,
    /// Output is captured; stderr is attached to the error on failure
    Quiet,
}

/// A single command invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
    pub output: OutputMode,
}

impl CommandSpec {
    pub fn new<I, S>(program: &str, args: I, cwd: impl Into<PathBuf>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.to_string(),
            args: args.into_iter().map(Into::into).collect(),
            cwd: cwd.into(),
            output: OutputMode::Quiet,
        }
    }

    pub fn inherit_output(mut self) -> Self {
        self.output = OutputMode::Inherit;
        self
    }

    /// True if `args` contains `needle` as a contiguous run; an empty needle always matches
    pub fn has_args(&self, needle: &[&str]) -> bool {
        if needle.is_empty() {
            return true;
        }
        self.args
            .windows(needle.len())
            .any(|w| w.iter().zip(needle).all(|(a, b)| a == b))
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("Failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` exited with code {code}{}", format_stderr(.stderr))]
    Exit {
        command: String,
        code: i32,
        stderr: String,
    },
}

fn format_stderr(stderr: &str) -> String {
    if stderr.is_empty() {
        String::new()
    } else {
        format!("\n{}", stderr)
    }
}

/// Runs commands to completion, one at a time
///
/// A non-zero exit status is an error; there is no timeout.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    async fn run(&self, command: &CommandSpec) -> Result<(), ProcessError>;
}

/// Spawns real child processes
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl SystemRunner {
    fn build(command: &CommandSpec) -> TokioCommand {
        // npm and friends are .cmd shims on Windows
        #[cfg(windows)]
        let mut cmd = {
            let mut cmd = TokioCommand::new("cmd");
            cmd.arg("/C").arg(&command.program);
            cmd
        };
        #[cfg(not(windows))]
        let mut cmd = TokioCommand::new(&command.program);

        cmd.args(&command.args).current_dir(&command.cwd);
        cmd
    }
}

impl CommandRunner for SystemRunner {
    async fn run(&self, command: &CommandSpec) -> Result<(), ProcessError> {
        let mut cmd = Self::build(command);
        let spawn_error = |source| ProcessError::Spawn {
            command: command.to_string(),
            source,
        };

        let (status, stderr) = match command.output {
            OutputMode::Inherit => {
                let status = cmd
                    .stdin(Stdio::inherit())
                    .stdout(Stdio::inherit())
                    .stderr(Stdio::inherit())
                    .status()
                    .await
                    .map_err(spawn_error)?;
                (status, String::new())
            }
            OutputMode::Quiet => {
                let output = cmd
                    .stdin(Stdio::null())
                    .stdout(Stdio::piped())
                    .stderr(Stdio::piped())
                    .output()
                    .await
                    .map_err(spawn_error)?;
                (output.status, stderr_tail(&output.stderr))
            }
        };

        if status.success() {
            Ok(())
        } else {
            Err(ProcessError::Exit {
                command: command.to_string(),
                code: status.code().unwrap_or(-1),
                stderr,
            })
        }
    }
}

fn stderr_tail(bytes: &[u8]) -> String {
    let text = String::from_utf8_lossy(bytes);
    let lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
    let start = lines.len().saturating_sub(STDERR_TAIL_LINES);
    lines[start..].join("\n")
}
