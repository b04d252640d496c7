//! Serializable snapshot of a template-set release.
//!
//! Release tooling and downstream build scripts consume this rather than
//! reaching into the individual constants.

use crate::versions::{SUPPORTED_GO_VERSIONS, VERSION};
use crate::workflow::WorkflowType;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Everything that describes one release of the workflow template set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Manifest {
    /// Release version of the template set.
    pub version: String,
    /// Go versions the templates are validated against.
    pub go_versions: Vec<String>,
    /// Workflow types shipped in this release.
    pub workflows: Vec<WorkflowType>,
}

impl Manifest {
    /// Snapshot of the current release constants.
    pub fn current() -> Self {
        Self {
            version: VERSION.to_string(),
            go_versions: SUPPORTED_GO_VERSIONS.iter().map(|v| v.to_string()).collect(),
            workflows: WorkflowType::ALL.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::is_supported;

    #[test]
    fn test_current_mirrors_the_constants() {
        let manifest = Manifest::current();
        assert_eq!(manifest.version, VERSION);
        assert_eq!(manifest.go_versions.len(), SUPPORTED_GO_VERSIONS.len());
        for version in &manifest.go_versions {
            assert!(is_supported(version));
        }
        assert_eq!(manifest.workflows, WorkflowType::ALL);
    }

    #[test]
    fn test_json_roundtrip() {
        let manifest = Manifest::current();
        let json = serde_json::to_string_pretty(&manifest).unwrap();
        let parsed: Manifest = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, manifest);
    }

    #[test]
    fn test_toml_roundtrip() {
        let manifest = Manifest::current();
        let text = toml::to_string(&manifest).unwrap();
        let parsed: Manifest = toml::from_str(&text).unwrap();
        assert_eq!(parsed, manifest);
    }

    #[test]
    fn test_parses_a_handwritten_manifest() {
        let manifest: Manifest = toml::from_str(
            r#"
            version = "v1.0.6"
            go_versions = ["1.21", "1.22", "1.23", "1.24", "1.25"]
            workflows = ["ci", "pr", "dependabot-auto-merge"]
            "#,
        )
        .unwrap();
        assert_eq!(manifest, Manifest::current());
    }
}
