//! Golden argument-vector tests: one fully-populated case per operation.
//!
//! Flag order is contract; these tests pin it.

use nhctl_client::args;
use nhctl_client::{
    ConfigOptions, DescribeOptions, DevEndOptions, DevStartOptions, GlobalOptions, InstallOptions,
    PluginOptions, PortForwardOptions, ResetOptions, SyncOptions, UninstallOptions,
};

fn globals() -> GlobalOptions {
    GlobalOptions {
        debug: true,
        kubeconfig: Some("/tmp/kc".to_string()),
    }
}

#[test]
fn install_full() {
    let opts = InstallOptions {
        config: Some("config.yaml".to_string()),
        git_ref: Some("main".to_string()),
        git_url: Some("https://example.com/repo.git".to_string()),
        helm_chart_name: Some("bookinfo".to_string()),
        helm_repo_name: Some("stable".to_string()),
        helm_repo_url: Some("https://charts.example.com".to_string()),
        helm_repo_version: Some("1.2.3".to_string()),
        helm_values: Some("values.yaml".to_string()),
        ignore_pre_install: true,
        namespace: Some("dev".to_string()),
        outer_config: Some("outer.yaml".to_string()),
        resources_path: vec!["a.yaml".to_string(), "b.yaml".to_string()],
        values: vec![
            ("replicas".to_string(), "2".to_string()),
            ("tag".to_string(), "dev".to_string()),
        ],
        app_type: Some("helmGit".to_string()),
        wait: true,
        global: globals(),
    };
    assert_eq!(
        args::install("nhctl", "bookinfo", &opts),
        vec![
            "nhctl",
            "install",
            "bookinfo",
            "--config",
            "config.yaml",
            "--git-ref",
            "main",
            "--git-url",
            "https://example.com/repo.git",
            "--helm-chart-name",
            "bookinfo",
            "--helm-repo-name",
            "stable",
            "--helm-repo-url",
            "https://charts.example.com",
            "--helm-repo-version",
            "1.2.3",
            "--helm-values",
            "values.yaml",
            "--ignore-pre-install",
            "--namespace",
            "dev",
            "--outer-config",
            "outer.yaml",
            "--resource-path",
            "a.yaml",
            "--resource-path",
            "b.yaml",
            "--set",
            "replicas=2,tag=dev",
            "--type",
            "helmGit",
            "--wait",
            "--debug",
            "--kubeconfig",
            "/tmp/kc",
        ]
    );
}

#[test]
fn install_empty_renders_bare_vector() {
    assert_eq!(
        args::install("nhctl", "bookinfo", &InstallOptions::default()),
        vec!["nhctl", "install", "bookinfo"]
    );
}

#[test]
fn uninstall_full() {
    let opts = UninstallOptions {
        force: true,
        global: globals(),
    };
    assert_eq!(
        args::uninstall("nhctl", "bookinfo", &opts),
        vec!["nhctl", "uninstall", "bookinfo", "--force", "--debug", "--kubeconfig", "/tmp/kc"]
    );
}

#[test]
fn dev_start_full() {
    let opts = DevStartOptions {
        deployment: Some("details".to_string()),
        image: Some("java:11".to_string()),
        local_sync: vec!["/src/app".to_string(), "/src/lib".to_string()],
        sidecar_image: Some("sidecar:latest".to_string()),
        storage_class: Some("standard".to_string()),
        syncthing_version: Some("1.15.0".to_string()),
        work_dir: Some("/home/nocalhost-dev".to_string()),
        global: globals(),
    };
    assert_eq!(
        args::dev_start("nhctl", "bookinfo", &opts),
        vec![
            "nhctl",
            "dev",
            "start",
            "bookinfo",
            "--deployment",
            "details",
            "--image",
            "java:11",
            "--local-sync",
            "/src/app",
            "--local-sync",
            "/src/lib",
            "--sidecar-image",
            "sidecar:latest",
            "--storage-class",
            "standard",
            "--syncthing-version",
            "1.15.0",
            "--work-dir",
            "/home/nocalhost-dev",
            "--debug",
            "--kubeconfig",
            "/tmp/kc",
        ]
    );
}

#[test]
fn dev_end_full() {
    let opts = DevEndOptions {
        deployment: Some("details".to_string()),
        global: globals(),
    };
    assert_eq!(
        args::dev_end("nhctl", "bookinfo", &opts),
        vec!["nhctl", "dev", "end", "bookinfo", "--deployment", "details", "--debug", "--kubeconfig", "/tmp/kc"]
    );
}

#[test]
fn sync_full() {
    let opts = SyncOptions {
        daemon: true,
        deployment: Some("details".to_string()),
        double_side_sync: true,
        ignored_patterns: vec!["*.log".to_string(), "target/".to_string()],
        synced_patterns: vec!["src/".to_string()],
        global: globals(),
    };
    assert_eq!(
        args::sync("nhctl", "bookinfo", &opts),
        vec![
            "nhctl",
            "sync",
            "bookinfo",
            "--daemon",
            "--deployment",
            "details",
            "--double",
            "--ignored-pattern",
            "*.log",
            "--ignored-pattern",
            "target/",
            "--synced-pattern",
            "src/",
            "--debug",
            "--kubeconfig",
            "/tmp/kc",
        ]
    );
}

#[test]
fn port_forward_full() {
    let opts = PortForwardOptions {
        daemon: true,
        deployment: Some("details".to_string()),
        dev_ports: vec!["5005:5005".to_string(), "8080:80".to_string()],
        global: globals(),
    };
    assert_eq!(
        args::port_forward("nhctl", "bookinfo", &opts),
        vec![
            "nhctl",
            "port-forward",
            "bookinfo",
            "--daemon",
            "--deployment",
            "details",
            "--dev-port",
            "5005:5005",
            "--dev-port",
            "8080:80",
            "--debug",
            "--kubeconfig",
            "/tmp/kc",
        ]
    );
}

#[test]
fn describe_full() {
    let opts = DescribeOptions {
        deployment: Some("details".to_string()),
        global: globals(),
    };
    assert_eq!(
        args::describe("nhctl", "bookinfo", &opts),
        vec!["nhctl", "describe", "bookinfo", "--deployment", "details", "--debug", "--kubeconfig", "/tmp/kc"]
    );
}

#[test]
fn reset_uses_dev_verb() {
    let opts = ResetOptions {
        deployment: Some("details".to_string()),
        global: globals(),
    };
    assert_eq!(
        args::reset("nhctl", "bookinfo", &opts),
        vec!["nhctl", "dev", "reset", "bookinfo", "--deployment", "details", "--debug", "--kubeconfig", "/tmp/kc"]
    );
}

#[test]
fn config_operations() {
    let opts = ConfigOptions {
        deployment: Some("details".to_string()),
        global: GlobalOptions::default(),
    };
    assert_eq!(
        args::get_config("nhctl", "bookinfo", &opts),
        vec!["nhctl", "config", "get", "bookinfo", "--deployment", "details"]
    );
    assert_eq!(
        args::get_template_config("nhctl", "bookinfo", &opts),
        vec!["nhctl", "config", "template", "bookinfo", "--deployment", "details"]
    );
    assert_eq!(
        args::save_config("nhctl", "bookinfo", &opts, "svc:\n  port: 80\n"),
        vec![
            "nhctl",
            "config",
            "get",
            "bookinfo",
            "--deployment",
            "details",
            "--content",
            "svc:\n  port: 80\n"
        ]
    );
}

#[test]
fn plugin_info_full() {
    let opts = PluginOptions {
        deployment: Some("details".to_string()),
        global: globals(),
    };
    assert_eq!(
        args::get_plugin_info("nhctl", "bookinfo", &opts),
        vec!["nhctl", "plugin", "get", "bookinfo", "--deployment", "details", "--debug", "--kubeconfig", "/tmp/kc"]
    );
}

#[test]
fn kubeconfig_empty_string_emits_nothing() {
    let opts = DescribeOptions {
        deployment: None,
        global: GlobalOptions {
            debug: false,
            kubeconfig: Some(String::new()),
        },
    };
    assert_eq!(
        args::describe("nhctl", "bookinfo", &opts),
        vec!["nhctl", "describe", "bookinfo"]
    );
}
