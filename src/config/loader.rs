//! Component catalog discovery and loading.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde_yaml::Value;

use crate::config::schema::{Catalog, Component, ComponentSection};
use crate::error::{AuditError, Result};
use crate::version::ExpectedVersion;

/// Catalog location used when neither `--config` nor `HOSTAUDIT_CONFIG` is set.
pub const DEFAULT_CATALOG_PATH: &str = "cfg/config.yaml";

/// Pick the catalog path, falling back to [`DEFAULT_CATALOG_PATH`].
pub fn catalog_path(override_path: Option<&Path>) -> PathBuf {
    override_path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CATALOG_PATH))
}

/// Load and parse a catalog file.
///
/// # Errors
///
/// Returns `CatalogNotFound` if the file doesn't exist.
/// Returns `CatalogParse` if the YAML is invalid.
/// Returns `CatalogInvalid` if a component is listed twice.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            AuditError::CatalogNotFound {
                path: path.to_path_buf(),
            }
        } else {
            AuditError::Io(e)
        }
    })?;

    parse_catalog(&content, path)
}

/// Parse YAML content into a [`Catalog`].
///
/// The top-level `components` list names the components in order; each one
/// is described by a top-level section of the same name. Listed components
/// without a section are skipped, and unknown top-level keys are ignored.
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_catalog(content: &str, source_path: &Path) -> Result<Catalog> {
    let parse_error = |message: String| AuditError::CatalogParse {
        path: source_path.to_path_buf(),
        message,
    };

    let root: Value = serde_yaml::from_str(content).map_err(|e| parse_error(e.to_string()))?;

    let names: Vec<String> = match root.get("components") {
        None | Some(Value::Null) => Vec::new(),
        Some(list) => serde_yaml::from_value(list.clone())
            .map_err(|e| parse_error(format!("components: {}", e)))?,
    };

    let mut seen = HashSet::new();
    let mut components = Vec::with_capacity(names.len());

    for name in names {
        if !seen.insert(name.clone()) {
            return Err(AuditError::CatalogInvalid {
                message: format!("component '{}' is listed more than once", name),
            });
        }

        let section = match root.get(name.as_str()) {
            None | Some(Value::Null) => {
                tracing::debug!("Component {} has no catalog section, skipping", name);
                continue;
            }
            Some(value) => value.clone(),
        };

        let section: ComponentSection =
            serde_yaml::from_value(section).map_err(|e| parse_error(format!("{}: {}", name, e)))?;

        components.push(Component::from_section(&name, section));
    }

    let version = match root.get("version") {
        None | Some(Value::Null) => None,
        Some(value) => Some(
            serde_yaml::from_value::<ExpectedVersion>(value.clone())
                .map_err(|e| parse_error(format!("version: {}", e)))?,
        ),
    };

    Ok(Catalog {
        components,
        version,
    })
}
