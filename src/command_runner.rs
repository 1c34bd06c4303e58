//! Abstraction over nhctl process execution for testability.
//!
//! [`RealCommandRunner`] spawns the rendered argument vector through
//! [`std::process::Command`] with stdout and stderr sharing one anonymous
//! pipe, so callers see the two streams interleaved in the order the process
//! produced them. [`MockCommandRunner`] records calls and returns canned
//! outputs, enabling fast in-process tests without subprocesses.

use std::collections::VecDeque;
use std::io::Read;
use std::process::{Command, Stdio};
use std::sync::Mutex;

use tracing::debug;

use crate::error::NhctlError;

/// Captured result of one process run: merged output text plus exit code.
///
/// Created once per invocation and handed to the caller; never reused.
#[derive(Debug, Clone)]
pub struct ExecOutput {
    /// Interleaved stdout/stderr text, read to EOF.
    pub text: String,
    /// Process exit code. A signal-terminated child (no code) maps to `-1`.
    pub code: i32,
}

/// Trait for running a rendered argument vector to completion.
///
/// Stored as `Arc<dyn CommandRunner>` in [`NhctlClient`](crate::NhctlClient).
/// Implementations must be re-entrant: concurrent invocations share nothing
/// but the runner itself.
pub trait CommandRunner: Send + Sync {
    /// Spawn `argv[0]` with `argv[1..]`, capture merged output, and block
    /// until the process exits. A non-zero exit is not an error at this
    /// layer; classification happens in the facade.
    fn run(&self, argv: &[String]) -> Result<ExecOutput, NhctlError>;
}

/// Shell-quoted rendition of the argument vector, for logs and errors.
pub(crate) fn display_command(argv: &[String]) -> String {
    argv.iter()
        .map(|a| {
            shlex::try_quote(a)
                .map(|q| q.into_owned())
                .unwrap_or_else(|_| a.clone())
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Production implementation that delegates to [`std::process::Command`].
pub struct RealCommandRunner;

impl CommandRunner for RealCommandRunner {
    fn run(&self, argv: &[String]) -> Result<ExecOutput, NhctlError> {
        debug_assert!(!argv.is_empty(), "argument vector must carry the program name");
        let command = display_command(argv);
        debug!(command = %command, "executing nhctl");

        let (mut reader, writer) = std::io::pipe()?;
        let stderr_writer = writer.try_clone()?;

        // The Command temporary must drop before the read below, or the
        // writer ends it retains would keep the pipe open past child exit.
        let mut child = Command::new(&argv[0])
            .args(&argv[1..])
            .stdin(Stdio::null())
            .stdout(writer)
            .stderr(stderr_writer)
            .spawn()
            .map_err(|source| NhctlError::Spawn {
                command: command.clone(),
                source,
            })?;

        // Read before waiting so a chatty child cannot fill the OS pipe
        // buffer and deadlock against our wait.
        let mut text = String::new();
        reader.read_to_string(&mut text)?;

        let status = child.wait()?;
        let code = status.code().unwrap_or(-1);
        Ok(ExecOutput { text, code })
    }
}

/// Test double that records argument vectors and replays canned outputs.
///
/// Responses are consumed in FIFO order; once exhausted, every call succeeds
/// with empty text and exit code 0.
#[derive(Default)]
pub struct MockCommandRunner {
    calls: Mutex<Vec<Vec<String>>>,
    responses: Mutex<VecDeque<ExecOutput>>,
}

impl MockCommandRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a canned response for the next unanswered call.
    pub fn push_response(&self, text: &str, code: i32) {
        self.responses.lock().unwrap().push_back(ExecOutput {
            text: text.to_string(),
            code,
        });
    }

    /// All argument vectors seen so far, in call order.
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().unwrap().clone()
    }
}

impl CommandRunner for MockCommandRunner {
    fn run(&self, argv: &[String]) -> Result<ExecOutput, NhctlError> {
        self.calls.lock().unwrap().push(argv.to_vec());
        let canned = self.responses.lock().unwrap().pop_front();
        Ok(canned.unwrap_or(ExecOutput {
            text: String::new(),
            code: 0,
        }))
    }
}
