//! High-level facade over nhctl: one method per operation.
//!
//! Each method renders its argument vector, runs it through the injected
//! [`CommandRunner`], and classifies the exit status. Only `describe` decodes
//! its output; `get_config` returns the raw text; the rest return nothing.
//! Calls are fully independent: no retries, no batching, no caching.

use std::sync::Arc;

use crate::args;
use crate::command_runner::{CommandRunner, ExecOutput, RealCommandRunner, display_command};
use crate::describe::{NhctlDescribeResult, decode_describe};
use crate::error::NhctlError;
use crate::options::{
    ConfigOptions, DescribeOptions, DevEndOptions, DevStartOptions, InstallOptions, PluginOptions,
    PortForwardOptions, ResetOptions, SyncOptions, UninstallOptions,
};

/// Client for the nhctl binary.
///
/// Cheap to clone; safe to share across threads. Each invocation owns its own
/// child process and output buffer, so concurrent calls do not interfere.
#[derive(Clone)]
pub struct NhctlClient {
    program: String,
    runner: Arc<dyn CommandRunner>,
}

impl Default for NhctlClient {
    fn default() -> Self {
        Self::new()
    }
}

impl NhctlClient {
    /// Client that resolves `nhctl` through the search path and runs it as a
    /// real subprocess.
    pub fn new() -> Self {
        Self::with_runner("nhctl", Arc::new(RealCommandRunner))
    }

    /// Client with an explicit program path and runner. Tests point this at
    /// a fake executable or a [`MockCommandRunner`](crate::MockCommandRunner).
    pub fn with_runner(program: impl Into<String>, runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            program: program.into(),
            runner,
        }
    }

    pub fn install(&self, name: &str, opts: &InstallOptions) -> Result<(), NhctlError> {
        self.execute(args::install(&self.program, name, opts))?;
        Ok(())
    }

    pub fn uninstall(&self, name: &str, opts: &UninstallOptions) -> Result<(), NhctlError> {
        self.execute(args::uninstall(&self.program, name, opts))?;
        Ok(())
    }

    pub fn dev_start(&self, name: &str, opts: &DevStartOptions) -> Result<(), NhctlError> {
        self.execute(args::dev_start(&self.program, name, opts))?;
        Ok(())
    }

    pub fn dev_end(&self, name: &str, opts: &DevEndOptions) -> Result<(), NhctlError> {
        self.execute(args::dev_end(&self.program, name, opts))?;
        Ok(())
    }

    pub fn sync(&self, name: &str, opts: &SyncOptions) -> Result<(), NhctlError> {
        self.execute(args::sync(&self.program, name, opts))?;
        Ok(())
    }

    pub fn port_forward(&self, name: &str, opts: &PortForwardOptions) -> Result<(), NhctlError> {
        self.execute(args::port_forward(&self.program, name, opts))?;
        Ok(())
    }

    /// Run `describe` and decode its YAML output into a typed result.
    pub fn describe(
        &self,
        name: &str,
        opts: &DescribeOptions,
    ) -> Result<NhctlDescribeResult, NhctlError> {
        let text = self.execute(args::describe(&self.program, name, opts))?;
        decode_describe(&text)
    }

    pub fn reset(&self, name: &str, opts: &ResetOptions) -> Result<(), NhctlError> {
        self.execute(args::reset(&self.program, name, opts))?;
        Ok(())
    }

    /// Fetch a workload's configuration as raw YAML text; nhctl's config
    /// output has no stable shape, so it is returned verbatim.
    pub fn get_config(&self, name: &str, opts: &ConfigOptions) -> Result<String, NhctlError> {
        self.execute(args::get_config(&self.program, name, opts))
    }

    pub fn get_template_config(&self, name: &str, opts: &ConfigOptions) -> Result<(), NhctlError> {
        self.execute(args::get_template_config(&self.program, name, opts))?;
        Ok(())
    }

    pub fn save_config(
        &self,
        name: &str,
        opts: &ConfigOptions,
        content: &str,
    ) -> Result<(), NhctlError> {
        self.execute(args::save_config(&self.program, name, opts, content))?;
        Ok(())
    }

    pub fn get_plugin_info(&self, name: &str, opts: &PluginOptions) -> Result<(), NhctlError> {
        self.execute(args::get_plugin_info(&self.program, name, opts))?;
        Ok(())
    }

    /// Run one rendered vector and classify the exit status. The full
    /// captured text rides along on failure so callers can show diagnostics.
    fn execute(&self, argv: Vec<String>) -> Result<String, NhctlError> {
        let ExecOutput { text, code } = self.runner.run(&argv)?;
        if code != 0 {
            return Err(NhctlError::CommandFailed {
                command: display_command(&argv),
                code,
                output: text,
            });
        }
        Ok(text)
    }
}
