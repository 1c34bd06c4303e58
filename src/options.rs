//! Option structures for nhctl operations.
//!
//! One plain-data struct per operation, each embedding [`GlobalOptions`].
//! Presence semantics are load-bearing: nhctl treats the presence of a flag,
//! not the emptiness of its value, as meaningful. A scalar that is `None` or
//! an empty string, an empty `Vec`, or a `false` boolean emits nothing.

/// Flags applicable to every operation, always rendered last.
#[derive(Debug, Default, Clone)]
pub struct GlobalOptions {
    /// Emit `--debug`.
    pub debug: bool,
    /// Emit `--kubeconfig <path>` when set and non-empty.
    pub kubeconfig: Option<String>,
}

/// Options for `nhctl install`.
#[derive(Debug, Default, Clone)]
pub struct InstallOptions {
    pub config: Option<String>,
    pub git_ref: Option<String>,
    pub git_url: Option<String>,
    pub helm_chart_name: Option<String>,
    pub helm_repo_name: Option<String>,
    pub helm_repo_url: Option<String>,
    pub helm_repo_version: Option<String>,
    pub helm_values: Option<String>,
    pub ignore_pre_install: bool,
    pub namespace: Option<String>,
    pub outer_config: Option<String>,
    /// One `--resource-path <p>` per element, in order.
    pub resources_path: Vec<String>,
    /// Helm `--set` overrides. A `Vec` of pairs rather than a map so the
    /// comma-joined `key=value` list keeps the caller's insertion order.
    pub values: Vec<(String, String)>,
    /// Application type, rendered as `--type`.
    pub app_type: Option<String>,
    pub wait: bool,
    pub global: GlobalOptions,
}

/// Options for `nhctl uninstall`.
#[derive(Debug, Default, Clone)]
pub struct UninstallOptions {
    pub force: bool,
    pub global: GlobalOptions,
}

/// Options for `nhctl dev start`.
#[derive(Debug, Default, Clone)]
pub struct DevStartOptions {
    pub deployment: Option<String>,
    pub image: Option<String>,
    /// One `--local-sync <dir>` per element, in order.
    pub local_sync: Vec<String>,
    pub sidecar_image: Option<String>,
    pub storage_class: Option<String>,
    pub syncthing_version: Option<String>,
    pub work_dir: Option<String>,
    pub global: GlobalOptions,
}

/// Options for `nhctl dev end`.
#[derive(Debug, Default, Clone)]
pub struct DevEndOptions {
    pub deployment: Option<String>,
    pub global: GlobalOptions,
}

/// Options for `nhctl sync`.
#[derive(Debug, Default, Clone)]
pub struct SyncOptions {
    pub daemon: bool,
    pub deployment: Option<String>,
    /// Two-way sync, rendered as `--double`.
    pub double_side_sync: bool,
    pub ignored_patterns: Vec<String>,
    pub synced_patterns: Vec<String>,
    pub global: GlobalOptions,
}

/// Options for `nhctl port-forward`.
#[derive(Debug, Default, Clone)]
pub struct PortForwardOptions {
    pub daemon: bool,
    pub deployment: Option<String>,
    /// `local:remote` port specs, one `--dev-port` per element.
    pub dev_ports: Vec<String>,
    pub global: GlobalOptions,
}

/// Options for `nhctl describe`.
#[derive(Debug, Default, Clone)]
pub struct DescribeOptions {
    pub deployment: Option<String>,
    pub global: GlobalOptions,
}

/// Options for `nhctl dev reset`.
#[derive(Debug, Default, Clone)]
pub struct ResetOptions {
    pub deployment: Option<String>,
    pub global: GlobalOptions,
}

/// Options shared by the `config get` / `config template` / save operations.
#[derive(Debug, Default, Clone)]
pub struct ConfigOptions {
    pub deployment: Option<String>,
    pub global: GlobalOptions,
}

/// Options for `nhctl plugin get`.
#[derive(Debug, Default, Clone)]
pub struct PluginOptions {
    pub deployment: Option<String>,
    pub global: GlobalOptions,
}
