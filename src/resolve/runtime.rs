//! Resolving the whole catalog at once.

use serde::Serialize;

use crate::config::Catalog;
use crate::error::Result;
use crate::inspect::{PathProbe, ProcessInspector};
use crate::substitute::{apply, BIN_SUFFIX, CONF_SUFFIX};
use crate::ui::Reporter;

use super::binary::BinaryResolver;
use super::config::ConfigResolver;
use super::map::ResolvedMap;

/// Binaries and config files resolved for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RuntimeMaps {
    pub binaries: ResolvedMap,
    pub configs: ResolvedMap,
}

impl RuntimeMaps {
    /// Resolve binaries, then config files, for every catalog component.
    ///
    /// The two passes are independent; a fatal error in either aborts.
    pub fn resolve<P, F>(
        catalog: &Catalog,
        inspector: P,
        probe: F,
        reporter: &mut dyn Reporter,
    ) -> Result<Self>
    where
        P: ProcessInspector,
        F: PathProbe,
    {
        let binaries = BinaryResolver::new(inspector).resolve_all(&catalog.components)?;
        let configs = ConfigResolver::new(probe).resolve_all(&catalog.components, reporter)?;

        Ok(Self { binaries, configs })
    }

    /// Substitute `$<component>bin` and `$<component>conf` tokens in a check
    /// command template.
    pub fn materialize(&self, template: &str) -> String {
        let with_bins = apply(template, &self.binaries, BIN_SUFFIX);
        apply(&with_bins, &self.configs, CONF_SUFFIX)
    }
}
