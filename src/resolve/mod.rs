//! Runtime resolution of audited components.
//!
//! Two independent passes over the catalog:
//! - [`BinaryResolver`] picks the running binary per component
//! - [`ConfigResolver`] picks the existing config file per component
//!
//! [`RuntimeMaps`] runs both and materializes check command templates from
//! the results.

pub mod binary;
pub mod config;
pub mod map;
pub mod runtime;

pub use binary::{process_pattern, strip_quotes, BinaryResolver};
pub use config::ConfigResolver;
pub use map::ResolvedMap;
pub use runtime::RuntimeMaps;
