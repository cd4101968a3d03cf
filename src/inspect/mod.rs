//! Host introspection capabilities.
//!
//! Each external dependency of runtime resolution sits behind a narrow trait
//! so resolvers can be driven by fakes in tests:
//!
//! - [`ProcessInspector`] - process-table query (`ps`)
//! - [`PathProbe`] - filesystem existence checks
//! - [`VersionTool`] - the orchestration tool's `version` output (`kubectl`)

pub mod filesystem;
pub mod process;
pub mod tool;

pub use filesystem::{HostFilesystem, PathProbe};
pub use process::{ProcessInspector, PsInspector};
pub use tool::{
    is_executable, parse_system_path, resolve_tool_path, Kubectl, ToolOutput, VersionTool,
};
