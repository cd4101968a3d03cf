//! Integration tests for runtime resolution through the public API.

use hostaudit::config::{load_catalog, Catalog, Component};
use hostaudit::inspect::{HostFilesystem, ToolOutput, VersionTool};
use hostaudit::resolve::RuntimeMaps;
use hostaudit::ui::{MockReporter, Severity};
use hostaudit::version::{ExpectedVersion, VersionGate, VersionOutcome};
use hostaudit::AuditError;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const PS_OUTPUT: &str = "\
/usr/local/bin/kube-apiserver --etcd-servers=https://127.0.0.1:2379
/usr/bin/kubelet --config=/var/lib/kubelet/config.yaml
";

/// Answers `ps -C <program>` from a fixed process table.
fn process_table(program: &str) -> String {
    PS_OUTPUT
        .lines()
        .filter(|line| {
            line.split_whitespace()
                .next()
                .and_then(|cmd| cmd.rsplit('/').next())
                .is_some_and(|name| name == program)
        })
        .map(|line| format!("{line}\n"))
        .collect()
}

#[test]
fn full_resolution_workflow() {
    let temp = TempDir::new().unwrap();
    let kubelet_conf = temp.path().join("kubelet.conf");
    fs::write(&kubelet_conf, "").unwrap();

    let catalog_file = temp.path().join("config.yaml");
    fs::write(
        &catalog_file,
        format!(
            r#"
components: [apiserver, kubelet, proxy]

apiserver:
  bins: [apiserver, hyperkube apiserver, kube-apiserver]
  confs: [{missing}]
  defaultconf: /etc/kubernetes/manifests/kube-apiserver.yaml

kubelet:
  bins: [hyperkube kubelet, kubelet]
  confs: [{missing}, {kubelet}]

proxy:
  optional: true
  bins: [kube-proxy, proxy]
  confs: [{missing}]
"#,
            missing = temp.path().join("missing.conf").display(),
            kubelet = kubelet_conf.display(),
        ),
    )
    .unwrap();

    let catalog = load_catalog(&catalog_file).unwrap();
    let mut reporter = MockReporter::new();
    let maps = RuntimeMaps::resolve(&catalog, process_table, HostFilesystem, &mut reporter).unwrap();

    assert_eq!(maps.binaries.get("apiserver"), Some("kube-apiserver"));
    assert_eq!(maps.binaries.get("kubelet"), Some("kubelet"));
    assert_eq!(maps.binaries.get("proxy"), Some("proxy"));

    let kubelet_conf = kubelet_conf.to_string_lossy();
    assert_eq!(maps.configs.get("kubelet"), Some(kubelet_conf.as_ref()));
    assert_eq!(
        maps.configs.get("apiserver"),
        Some("/etc/kubernetes/manifests/kube-apiserver.yaml")
    );
    assert_eq!(maps.configs.get("proxy"), Some("proxy"));
    assert_eq!(reporter.warnings(), vec!["Missing config file for proxy"]);

    assert_eq!(
        maps.materialize("ps -ef | grep $apiserverbin; stat -c %a $kubeletconf"),
        format!("ps -ef | grep kube-apiserver; stat -c %a {kubelet_conf}")
    );
}

#[test]
fn required_component_aborts_resolution() {
    let catalog = Catalog::new(vec![
        Component::new("kubelet").with_bins(["kubelet"]),
        Component::new("etcd").with_bins(["etcd"]),
    ]);
    let mut reporter = MockReporter::new();

    let err = RuntimeMaps::resolve(&catalog, process_table, HostFilesystem, &mut reporter)
        .unwrap_err();
    assert!(matches!(
        err,
        AuditError::ExecutableNotRunning { ref component } if component == "etcd"
    ));
}

#[test]
fn unreadable_config_location_is_fatal() {
    let catalog = Catalog::new(vec![Component::new("kubelet")
        .with_bins(["kubelet"])
        .with_confs(["/etc/kubernetes/kubelet.conf"])]);
    let denied = |_: &Path| -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))
    };
    let mut reporter = MockReporter::new();

    let err = RuntimeMaps::resolve(&catalog, process_table, denied, &mut reporter).unwrap_err();
    assert!(matches!(err, AuditError::ConfigLookup { .. }));
    assert!(err.to_string().contains("/etc/kubernetes/kubelet.conf"));
}

struct CannedKubectl(&'static str);

impl VersionTool for CannedKubectl {
    fn locate(&self) -> Option<PathBuf> {
        Some(PathBuf::from("/usr/bin/kubectl"))
    }

    fn query_version(&self, _executable: &Path) -> ToolOutput {
        ToolOutput::success(self.0)
    }
}

#[test]
fn version_gate_reports_mismatch_as_warning() {
    let kubectl = CannedKubectl(
        r#"Client Version: version.Info{Major:"1", Minor:"21", GitVersion:"v1.21.3"}
Server Version: version.Info{Major:"1", Minor:"22", GitVersion:"v1.22.0"}"#,
    );
    let mut reporter = MockReporter::new();

    let outcome = VersionGate::new(kubectl).verify(&ExpectedVersion::new("1", "21"), &mut reporter);

    assert_eq!(outcome, VersionOutcome::Checked { matched: false });
    assert_eq!(reporter.count(Severity::Warn), 1);
    assert_eq!(reporter.warnings(), vec!["Unexpected Server version 1.22"]);
}
