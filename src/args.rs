//! Deterministic rendering of option structs into argument vectors.
//!
//! Pure functions, one per operation: no I/O, no environment reads. The
//! resulting vector starts with the program name, then the operation verb
//! (one or two tokens), the positional application name, the operation's
//! flags in a fixed order, and the global flags last. Flag order is part of
//! the contract with callers and with golden-output tests.

use crate::options::{
    ConfigOptions, DescribeOptions, DevEndOptions, DevStartOptions, GlobalOptions, InstallOptions,
    PluginOptions, PortForwardOptions, ResetOptions, SyncOptions, UninstallOptions,
};

/// Accumulates an argument vector with "emit only if present" semantics.
struct ArgBuilder {
    argv: Vec<String>,
}

impl ArgBuilder {
    fn new(program: &str, verb: &[&str], name: &str) -> Self {
        let mut argv = Vec::with_capacity(verb.len() + 2);
        argv.push(program.to_string());
        argv.extend(verb.iter().map(|v| v.to_string()));
        argv.push(name.to_string());
        Self { argv }
    }

    /// Emit `flag value` when the value is set and non-empty.
    fn opt(&mut self, flag: &str, value: &Option<String>) -> &mut Self {
        if let Some(v) = value
            && !v.is_empty()
        {
            self.argv.push(flag.to_string());
            self.argv.push(v.clone());
        }
        self
    }

    /// Emit a bare flag when the boolean is true.
    fn switch(&mut self, flag: &str, on: bool) -> &mut Self {
        if on {
            self.argv.push(flag.to_string());
        }
        self
    }

    /// Emit `flag value` once per element, preserving input order.
    fn repeated(&mut self, flag: &str, values: &[String]) -> &mut Self {
        for v in values {
            self.argv.push(flag.to_string());
            self.argv.push(v.clone());
        }
        self
    }

    /// Emit a single `flag k=v,k2=v2` joining the pairs in input order.
    /// An empty list emits nothing.
    fn pairs(&mut self, flag: &str, pairs: &[(String, String)]) -> &mut Self {
        if !pairs.is_empty() {
            let joined = pairs
                .iter()
                .map(|(k, v)| format!("{k}={v}"))
                .collect::<Vec<_>>()
                .join(",");
            self.argv.push(flag.to_string());
            self.argv.push(joined);
        }
        self
    }

    /// Emit a `flag value` unconditionally.
    fn literal(&mut self, flag: &str, value: &str) -> &mut Self {
        self.argv.push(flag.to_string());
        self.argv.push(value.to_string());
        self
    }

    /// Append the global flags and finish the vector.
    fn finish(mut self, global: &GlobalOptions) -> Vec<String> {
        self.switch("--debug", global.debug);
        self.opt("--kubeconfig", &global.kubeconfig);
        self.argv
    }
}

pub fn install(program: &str, name: &str, opts: &InstallOptions) -> Vec<String> {
    let mut b = ArgBuilder::new(program, &["install"], name);
    b.opt("--config", &opts.config)
        .opt("--git-ref", &opts.git_ref)
        .opt("--git-url", &opts.git_url)
        .opt("--helm-chart-name", &opts.helm_chart_name)
        .opt("--helm-repo-name", &opts.helm_repo_name)
        .opt("--helm-repo-url", &opts.helm_repo_url)
        .opt("--helm-repo-version", &opts.helm_repo_version)
        .opt("--helm-values", &opts.helm_values)
        .switch("--ignore-pre-install", opts.ignore_pre_install)
        .opt("--namespace", &opts.namespace)
        .opt("--outer-config", &opts.outer_config)
        .repeated("--resource-path", &opts.resources_path)
        .pairs("--set", &opts.values)
        .opt("--type", &opts.app_type)
        .switch("--wait", opts.wait);
    b.finish(&opts.global)
}

pub fn uninstall(program: &str, name: &str, opts: &UninstallOptions) -> Vec<String> {
    let mut b = ArgBuilder::new(program, &["uninstall"], name);
    b.switch("--force", opts.force);
    b.finish(&opts.global)
}

pub fn dev_start(program: &str, name: &str, opts: &DevStartOptions) -> Vec<String> {
    let mut b = ArgBuilder::new(program, &["dev", "start"], name);
    b.opt("--deployment", &opts.deployment)
        .opt("--image", &opts.image)
        .repeated("--local-sync", &opts.local_sync)
        .opt("--sidecar-image", &opts.sidecar_image)
        .opt("--storage-class", &opts.storage_class)
        .opt("--syncthing-version", &opts.syncthing_version)
        .opt("--work-dir", &opts.work_dir);
    b.finish(&opts.global)
}

pub fn dev_end(program: &str, name: &str, opts: &DevEndOptions) -> Vec<String> {
    let mut b = ArgBuilder::new(program, &["dev", "end"], name);
    b.opt("--deployment", &opts.deployment);
    b.finish(&opts.global)
}

pub fn sync(program: &str, name: &str, opts: &SyncOptions) -> Vec<String> {
    let mut b = ArgBuilder::new(program, &["sync"], name);
    b.switch("--daemon", opts.daemon)
        .opt("--deployment", &opts.deployment)
        .switch("--double", opts.double_side_sync)
        .repeated("--ignored-pattern", &opts.ignored_patterns)
        .repeated("--synced-pattern", &opts.synced_patterns);
    b.finish(&opts.global)
}

pub fn port_forward(program: &str, name: &str, opts: &PortForwardOptions) -> Vec<String> {
    let mut b = ArgBuilder::new(program, &["port-forward"], name);
    b.switch("--daemon", opts.daemon)
        .opt("--deployment", &opts.deployment)
        .repeated("--dev-port", &opts.dev_ports);
    b.finish(&opts.global)
}

pub fn describe(program: &str, name: &str, opts: &DescribeOptions) -> Vec<String> {
    let mut b = ArgBuilder::new(program, &["describe"], name);
    b.opt("--deployment", &opts.deployment);
    b.finish(&opts.global)
}

pub fn reset(program: &str, name: &str, opts: &ResetOptions) -> Vec<String> {
    let mut b = ArgBuilder::new(program, &["dev", "reset"], name);
    b.opt("--deployment", &opts.deployment);
    b.finish(&opts.global)
}

pub fn get_config(program: &str, name: &str, opts: &ConfigOptions) -> Vec<String> {
    let mut b = ArgBuilder::new(program, &["config", "get"], name);
    b.opt("--deployment", &opts.deployment);
    b.finish(&opts.global)
}

pub fn get_template_config(program: &str, name: &str, opts: &ConfigOptions) -> Vec<String> {
    let mut b = ArgBuilder::new(program, &["config", "template"], name);
    b.opt("--deployment", &opts.deployment);
    b.finish(&opts.global)
}

/// nhctl takes the new configuration through `config get --content`, matching
/// the tool version this crate targets.
pub fn save_config(program: &str, name: &str, opts: &ConfigOptions, content: &str) -> Vec<String> {
    let mut b = ArgBuilder::new(program, &["config", "get"], name);
    b.opt("--deployment", &opts.deployment)
        .literal("--content", content);
    b.finish(&opts.global)
}

pub fn get_plugin_info(program: &str, name: &str, opts: &PluginOptions) -> Vec<String> {
    let mut b = ArgBuilder::new(program, &["plugin", "get"], name);
    b.opt("--deployment", &opts.deployment);
    b.finish(&opts.global)
}
