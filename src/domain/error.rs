use thiserror::Error;

/// Errors produced by the `dashboard` command boundary.
///
/// History input problems are not represented here: any read or parse
/// failure degrades to an empty history instead of failing the process.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// Chart points could not be serialized for template substitution.
    #[error("failed to serialize chart data: {source}")]
    SerializeData {
        #[source]
        source: serde_json::Error,
    },

    /// Rendered page could not be written to the output path.
    #[error("failed to write dashboard output `{path}`: {source}")]
    WriteOutput {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Errors produced by the `rules` command boundary.
#[derive(Debug, Error)]
pub enum RulesError {
    /// Rule file exists but could not be read. A missing file is not an
    /// error; it is reported as SKIPPING and contributes a pass.
    #[error("failed to read rules file `{path}`: {source}")]
    ReadRules {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
