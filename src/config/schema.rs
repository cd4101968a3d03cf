//! Component catalog schema.
//!
//! The catalog lists the components under audit and, per component, the
//! ordered candidates tried when resolving its running binary and its
//! configuration file.

use serde::{Deserialize, Serialize};

use crate::version::ExpectedVersion;

/// Per-component section as written in the catalog file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComponentSection {
    /// Ordered binary candidates; a candidate may be a multi-word invocation.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub bins: Vec<String>,

    /// Ordered config path candidates.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub confs: Vec<String>,

    /// Whether the run may continue when no binary candidate is running.
    #[serde(skip_serializing_if = "is_false")]
    pub optional: bool,

    /// Nominal config name used when no candidate path exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defaultconf: Option<String>,
}

fn is_false(b: &bool) -> bool {
    !b
}

/// A named subsystem under audit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    /// Unique component name, also the substitution key.
    pub name: String,
    pub bins: Vec<String>,
    pub confs: Vec<String>,
    pub optional: bool,
    pub default_conf: Option<String>,
}

impl Component {
    /// Create a required component with no candidates.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            bins: Vec::new(),
            confs: Vec::new(),
            optional: false,
            default_conf: None,
        }
    }

    /// Build a component from its catalog section.
    pub fn from_section(name: &str, section: ComponentSection) -> Self {
        Self {
            name: name.to_string(),
            bins: section.bins,
            confs: section.confs,
            optional: section.optional,
            default_conf: section.defaultconf,
        }
    }

    /// Set the binary candidates.
    pub fn with_bins<I, S>(mut self, bins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.bins = bins.into_iter().map(Into::into).collect();
        self
    }

    /// Set the config path candidates.
    pub fn with_confs<I, S>(mut self, confs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.confs = confs.into_iter().map(Into::into).collect();
        self
    }

    /// Mark the component optional.
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Set the default config name.
    pub fn with_default_conf(mut self, conf: &str) -> Self {
        self.default_conf = Some(conf.to_string());
        self
    }
}

/// The full component catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    /// Components in declared order.
    pub components: Vec<Component>,

    /// Baseline orchestration tool version, if the catalog pins one.
    pub version: Option<ExpectedVersion>,
}

impl Catalog {
    /// Create a catalog from components.
    pub fn new(components: Vec<Component>) -> Self {
        Self {
            components,
            version: None,
        }
    }

    /// Look up a component by name.
    pub fn component(&self, name: &str) -> Option<&Component> {
        self.components.iter().find(|c| c.name == name)
    }
}
