//! The closed set of workflow categories the template set ships.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A category of CI automation implemented by the template set.
///
/// Each variant corresponds to one template file under the repository's
/// `templates/` directory; the serialized form is the short tag used in
/// that file's name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum WorkflowType {
    /// The main CI workflow: tests, multi-platform builds, static analysis,
    /// security scanning, coverage.
    #[serde(rename = "ci")]
    ContinuousIntegration,

    /// The lighter workflow run on pull requests.
    #[serde(rename = "pr")]
    PullRequest,

    /// Dependabot integration with auto-merge of passing updates.
    #[serde(rename = "dependabot-auto-merge")]
    DependabotAutoMerge,
}

impl WorkflowType {
    /// Every workflow type, in the order the templates are documented.
    pub const ALL: [WorkflowType; 3] = [
        WorkflowType::ContinuousIntegration,
        WorkflowType::PullRequest,
        WorkflowType::DependabotAutoMerge,
    ];

    /// The short tag identifying this workflow type.
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkflowType::ContinuousIntegration => "ci",
            WorkflowType::PullRequest => "pr",
            WorkflowType::DependabotAutoMerge => "dependabot-auto-merge",
        }
    }

    /// Name of the template file implementing this workflow type.
    pub fn template_file(&self) -> &'static str {
        match self {
            WorkflowType::ContinuousIntegration => "ci.yml",
            WorkflowType::PullRequest => "pr.yml",
            WorkflowType::DependabotAutoMerge => "dependabot-auto-merge.yml",
        }
    }
}

impl fmt::Display for WorkflowType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a string that is not a known workflow tag.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown workflow type: {0:?}")]
pub struct UnknownWorkflowType(pub String);

impl FromStr for WorkflowType {
    type Err = UnknownWorkflowType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ci" => Ok(WorkflowType::ContinuousIntegration),
            "pr" => Ok(WorkflowType::PullRequest),
            "dependabot-auto-merge" => Ok(WorkflowType::DependabotAutoMerge),
            other => Err(UnknownWorkflowType(other.to_string())),
        }
    }
}
