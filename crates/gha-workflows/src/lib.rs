//! Metadata for the gha-workflows template set.
//!
//! This crate is the programmatic companion to a set of static GitHub Actions
//! workflow templates for Go projects. The templates themselves are plain YAML
//! and live outside this crate; what lives here is the data that describes a
//! release of the set:
//!
//! - the release version of the template set ([`VERSION`]),
//! - the Go toolchain versions the templates are validated against
//!   ([`SUPPORTED_GO_VERSIONS`], queried through [`is_supported`]),
//! - the closed set of workflow categories the templates implement
//!   ([`WorkflowType`]),
//! - a serializable snapshot of all of the above ([`Manifest`]).
//!
//! Everything is a process-wide constant. Nothing here reads files, touches
//! the network, or mutates state, so every function is safe to call from any
//! number of threads.
//!
//! # Example
//!
//! ```
//! use gha_workflows::{is_supported, WorkflowType, VERSION};
//!
//! assert!(is_supported("1.25"));
//! assert!(!is_supported("1.19"));
//!
//! // Matching is exact - no normalization of prefixes or whitespace.
//! assert!(!is_supported("v1.25"));
//!
//! assert_eq!(VERSION, "v1.0.6");
//! assert_eq!(WorkflowType::ContinuousIntegration.template_file(), "ci.yml");
//! ```

mod manifest;
mod versions;
mod workflow;

pub use manifest::Manifest;
pub use versions::{SUPPORTED_GO_VERSIONS, VERSION, is_supported};
pub use workflow::{UnknownWorkflowType, WorkflowType};
