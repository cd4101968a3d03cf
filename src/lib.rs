//! hostaudit - Runtime resolution for host security benchmark checks.
//!
//! Before benchmark checks can run, hostaudit works out which of the audited
//! components are actually running on this host, where their configuration
//! lives, and whether `kubectl` reports the expected version. The results
//! are substituted into check command templates.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Component catalog loading
//! - [`error`] - Error types and result aliases
//! - [`inspect`] - Process table, filesystem and version tool capabilities
//! - [`resolve`] - Binary and config file resolution
//! - [`substitute`] - Placeholder substitution in check commands
//! - [`ui`] - Severity-tagged diagnostics
//! - [`version`] - kubectl version gating
//!
//! # Example
//!
//! ```
//! use hostaudit::config::{Catalog, Component};
//! use hostaudit::resolve::RuntimeMaps;
//! use hostaudit::ui::MockReporter;
//! use std::path::Path;
//!
//! let catalog = Catalog::new(vec![Component::new("kubelet")
//!     .with_bins(["kubelet"])
//!     .with_confs(["/etc/kubernetes/kubelet.conf"])]);
//!
//! let ps = |_: &str| "/usr/bin/kubelet --config=/var/lib/kubelet/config.yaml\n".to_string();
//! let fs = |_: &Path| -> std::io::Result<()> { Ok(()) };
//! let mut reporter = MockReporter::new();
//!
//! let maps = RuntimeMaps::resolve(&catalog, ps, fs, &mut reporter).unwrap();
//! assert_eq!(
//!     maps.materialize("$kubeletbin --config $kubeletconf"),
//!     "kubelet --config /etc/kubernetes/kubelet.conf"
//! );
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod inspect;
pub mod resolve;
pub mod substitute;
pub mod ui;
pub mod version;

pub use error::{AuditError, Result};
