//! Typed decoding of `nhctl describe` output.
//!
//! The describe operation prints a YAML document describing one workload's
//! development state. Unknown fields are ignored so newer nhctl releases can
//! add fields without breaking the decode.

use serde::Deserialize;

use crate::error::NhctlError;

/// Development state of one workload, as reported by `nhctl describe`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct NhctlDescribeResult {
    pub name: String,
    pub service_type: String,
    pub git_url: String,
    pub dev_container_image: String,
    pub work_dir: String,
    pub sync_dirs: Vec<String>,
    pub dev_ports: Vec<String>,
    pub developing: bool,
    pub port_forwarded: bool,
    pub syncing: bool,
    pub local_absolute_sync_dir_from_dev_start_plugin: Vec<String>,
}

/// Decode describe output. Stateless and re-entrant; safe to call from
/// concurrent invocations.
pub fn decode_describe(text: &str) -> Result<NhctlDescribeResult, NhctlError> {
    serde_yaml::from_str(text).map_err(|err| NhctlError::Decode {
        message: err.to_string(),
        text: text.to_string(),
    })
}
