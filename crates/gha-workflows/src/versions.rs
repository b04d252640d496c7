//! Release version and supported Go toolchain versions.

/// Release version of the workflow template set.
pub const VERSION: &str = "v1.0.6";

/// Go versions the workflow templates are validated against.
///
/// Entries are exact toolchain version strings as they appear in a
/// `go` directive or a `setup-go` matrix, without a `v` prefix.
pub const SUPPORTED_GO_VERSIONS: &[&str] = &["1.21", "1.22", "1.23", "1.24", "1.25"];

/// Check whether a Go version is supported by the workflow templates.
///
/// Comparison is exact and case-sensitive against [`SUPPORTED_GO_VERSIONS`];
/// no normalization is applied, so `"v1.21"` or `" 1.21"` are not supported
/// even though `"1.21"` is. Unrecognized input is an ordinary `false`, never
/// an error.
pub fn is_supported(go_version: &str) -> bool {
    SUPPORTED_GO_VERSIONS.contains(&go_version)
}
