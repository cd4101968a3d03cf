//! Component catalog loading.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and parsing in [`loader`]
//!
//! # Example
//!
//! ```
//! use hostaudit::config::parse_catalog;
//! use std::path::Path;
//!
//! let yaml = "components: [etcd]\netcd:\n  bins: [etcd]\n  confs: [/etc/etcd/etcd.conf]\n";
//! let catalog = parse_catalog(yaml, Path::new("config.yaml")).unwrap();
//! assert_eq!(catalog.components[0].bins, vec!["etcd"]);
//! ```

pub mod loader;
pub mod schema;

pub use loader::{catalog_path, load_catalog, parse_catalog, DEFAULT_CATALOG_PATH};
pub use schema::{Catalog, Component, ComponentSection};
