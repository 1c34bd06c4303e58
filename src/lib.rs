//! nhctl-client — typed driver for the nhctl CLI.
//!
//! Nocalhost's `nhctl` binary does the real Kubernetes work; this crate gives
//! embedding tools (IDE plugins, automation) a typed way to drive it:
//!
//! - per-operation option structs with "absent emits nothing" semantics
//! - deterministic rendering into argument vectors with a fixed flag order
//! - blocking execution with stdout/stderr merged in production order
//! - exit-status classification into typed errors
//! - YAML decoding of `describe` output
//!
//! Calls are synchronous and independent; callers pick their own threading.

pub mod args;
pub mod client;
pub mod command_runner;
pub mod describe;
pub mod error;
pub mod options;

pub use client::NhctlClient;
pub use command_runner::{CommandRunner, ExecOutput, MockCommandRunner, RealCommandRunner};
pub use describe::{NhctlDescribeResult, decode_describe};
pub use error::NhctlError;
pub use options::{
    ConfigOptions, DescribeOptions, DevEndOptions, DevStartOptions, GlobalOptions, InstallOptions,
    PluginOptions, PortForwardOptions, ResetOptions, SyncOptions, UninstallOptions,
};
