//! Config file resolution.

use std::io;
use std::path::Path;

use crate::config::Component;
use crate::error::{AuditError, Result};
use crate::inspect::PathProbe;
use crate::ui::Reporter;

use super::map::ResolvedMap;

/// Resolves which candidate config file exists for each component.
#[derive(Debug)]
pub struct ConfigResolver<F> {
    probe: F,
}

impl<F: PathProbe> ConfigResolver<F> {
    /// Create a resolver checking paths through `probe`.
    pub fn new(probe: F) -> Self {
        Self { probe }
    }

    /// Resolve a config file for every component.
    ///
    /// When no candidate exists the component's `defaultconf` is used as is;
    /// without one a warning is reported and the component name stands in.
    /// Components declaring no candidates take the same fallback.
    ///
    /// # Errors
    ///
    /// Returns `ConfigLookup` when a candidate can't be inspected for a
    /// reason other than not existing.
    pub fn resolve_all(
        &self,
        components: &[Component],
        reporter: &mut dyn Reporter,
    ) -> Result<ResolvedMap> {
        let mut configs = ResolvedMap::new();

        for component in components {
            let conf = match self.find_config_file(&component.confs)? {
                Some(conf) => {
                    tracing::debug!(
                        "Component {} uses config file '{}'",
                        component.name,
                        conf
                    );
                    conf
                }
                None => match &component.default_conf {
                    Some(default) => {
                        tracing::debug!(
                            "Using default config file name '{}' for component {}",
                            default,
                            component.name
                        );
                        default.clone()
                    }
                    None => {
                        reporter.warn(&format!("Missing config file for {}", component.name));
                        component.name.clone()
                    }
                },
            };
            configs.insert(&component.name, conf);
        }

        Ok(configs)
    }

    /// Return the first candidate that exists.
    ///
    /// # Errors
    ///
    /// Returns `ConfigLookup` for any probe error other than not-found.
    pub fn find_config_file(&self, candidates: &[String]) -> Result<Option<String>> {
        for candidate in candidates {
            match self.probe.probe(Path::new(candidate)) {
                Ok(()) => return Ok(Some(candidate.clone())),
                Err(e) if e.kind() == io::ErrorKind::NotFound => continue,
                Err(e) => {
                    return Err(AuditError::ConfigLookup {
                        path: candidate.into(),
                        source: e,
                    })
                }
            }
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inspect::HostFilesystem;
    use crate::ui::MockReporter;
    use std::fs;
    use tempfile::TempDir;

    fn path_str(path: &Path) -> String {
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn first_existing_candidate_wins() {
        let temp = TempDir::new().unwrap();
        let a = temp.path().join("a.conf");
        let b = temp.path().join("b.conf");
        fs::write(&b, "").unwrap();

        let resolver = ConfigResolver::new(HostFilesystem);
        let component = Component::new("kubelet").with_confs([path_str(&a), path_str(&b)]);
        let mut reporter = MockReporter::new();

        let map = resolver.resolve_all(&[component], &mut reporter).unwrap();
        assert_eq!(map.get("kubelet"), Some(path_str(&b).as_str()));
        assert!(reporter.is_empty());
    }

    #[test]
    fn earlier_candidate_beats_later_one() {
        let temp = TempDir::new().unwrap();
        let a = temp.path().join("a.conf");
        let b = temp.path().join("b.conf");
        fs::write(&a, "").unwrap();
        fs::write(&b, "").unwrap();

        let resolver = ConfigResolver::new(HostFilesystem);
        let found = resolver
            .find_config_file(&[path_str(&a), path_str(&b)])
            .unwrap();
        assert_eq!(found, Some(path_str(&a)));
    }

    #[test]
    fn default_conf_used_verbatim() {
        let resolver = ConfigResolver::new(HostFilesystem);
        let component = Component::new("apiserver")
            .with_confs(["/nonexistent/hostaudit/apiserver.yaml"])
            .with_default_conf("/etc/kubernetes/apiserver");
        let mut reporter = MockReporter::new();

        let map = resolver.resolve_all(&[component], &mut reporter).unwrap();
        assert_eq!(map.get("apiserver"), Some("/etc/kubernetes/apiserver"));
        assert!(reporter.is_empty());
    }

    #[test]
    fn default_conf_alone_produces_entry() {
        let resolver = ConfigResolver::new(HostFilesystem);
        let component = Component::new("scheduler").with_default_conf("kube-scheduler");
        let mut reporter = MockReporter::new();

        let map = resolver.resolve_all(&[component], &mut reporter).unwrap();
        assert_eq!(map.get("scheduler"), Some("kube-scheduler"));
    }

    #[test]
    fn missing_config_warns_and_uses_name() {
        let resolver = ConfigResolver::new(|_: &Path| -> io::Result<()> {
            Err(io::Error::from(io::ErrorKind::NotFound))
        });
        let component = Component::new("etcd").with_confs(["/a", "/b"]);
        let mut reporter = MockReporter::new();

        let map = resolver.resolve_all(&[component], &mut reporter).unwrap();
        assert_eq!(map.get("etcd"), Some("etcd"));
        assert_eq!(reporter.warnings(), ["Missing config file for etcd"]);
    }

    #[test]
    fn permission_error_is_fatal() {
        let resolver = ConfigResolver::new(|path: &Path| -> io::Result<()> {
            if path == Path::new("/locked") {
                Err(io::Error::from(io::ErrorKind::PermissionDenied))
            } else {
                Ok(())
            }
        });
        let component = Component::new("kubelet").with_confs(["/locked", "/open"]);
        let mut reporter = MockReporter::new();

        let err = resolver.resolve_all(&[component], &mut reporter).unwrap_err();
        match err {
            AuditError::ConfigLookup { path, source } => {
                assert_eq!(path, Path::new("/locked"));
                assert_eq!(source.kind(), io::ErrorKind::PermissionDenied);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn not_found_then_existing_continues() {
        let resolver = ConfigResolver::new(|path: &Path| -> io::Result<()> {
            if path == Path::new("/second") {
                Ok(())
            } else {
                Err(io::Error::from(io::ErrorKind::NotFound))
            }
        });
        let found = resolver
            .find_config_file(&["/first".to_string(), "/second".to_string()])
            .unwrap();
        assert_eq!(found.as_deref(), Some("/second"));
    }

    #[test]
    fn component_without_candidates_falls_back_to_name() {
        let resolver = ConfigResolver::new(|_: &Path| -> io::Result<()> {
            Err(io::Error::from(io::ErrorKind::NotFound))
        });
        let component = Component::new("kubelet").with_bins(["kubelet"]);
        let mut reporter = MockReporter::new();

        let map = resolver.resolve_all(&[component], &mut reporter).unwrap();
        assert_eq!(map.get("kubelet"), Some("kubelet"));
        assert_eq!(reporter.warnings(), ["Missing config file for kubelet"]);
    }
}
