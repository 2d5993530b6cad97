use serde::{Deserialize, Serialize};

/// Summary message carried by a fully passing rules report.
pub const VALIDATION_PASSED_MESSAGE: &str = "Security rules validation passed.";

/// Severity of one rule finding.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum RuleSeverity {
    Critical,
    Info,
}

impl RuleSeverity {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "CRITICAL",
            Self::Info => "INFO",
        }
    }
}

/// Outcome status for one rule file.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RuleFileStatus {
    /// File was present and scanned.
    #[serde(rename = "CHECKED")]
    Checked,
    /// File was absent; the check is trivially passed.
    #[serde(rename = "SKIPPING")]
    Skipping,
}

/// One pattern match (or informational note) for a rule file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RuleFinding {
    pub severity: RuleSeverity,
    pub check: String,
    pub message: String,
}

/// Per-file section of the rules report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RuleFileReport {
    pub file: String,
    pub status: RuleFileStatus,
    pub findings: Vec<RuleFinding>,
}

impl RuleFileReport {
    pub fn secure(&self) -> bool {
        !self
            .findings
            .iter()
            .any(|finding| finding.severity == RuleSeverity::Critical)
    }
}

/// Deterministic roll-up across all rule files.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RulesSummary {
    pub checked: usize,
    pub skipped: usize,
    pub critical_findings: usize,
    pub secure: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Full report emitted by the `rules` command.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RulesReport {
    pub files: Vec<RuleFileReport>,
    pub summary: RulesSummary,
}

impl RulesReport {
    /// Build the report, deriving the summary from per-file results in
    /// their stable report order.
    pub fn from_files(files: Vec<RuleFileReport>) -> Self {
        let checked = files
            .iter()
            .filter(|file| file.status == RuleFileStatus::Checked)
            .count();
        let skipped = files.len() - checked;
        let critical_findings = files
            .iter()
            .flat_map(|file| &file.findings)
            .filter(|finding| finding.severity == RuleSeverity::Critical)
            .count();
        let secure = critical_findings == 0;
        let message = secure.then(|| VALIDATION_PASSED_MESSAGE.to_string());

        Self {
            files,
            summary: RulesSummary {
                checked,
                skipped,
                critical_findings,
                secure,
                message,
            },
        }
    }
}

/// Summary payload printed after a successful dashboard render.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DashboardSummary {
    pub output: String,
    pub points: usize,
    /// True when the history file was missing, unreadable, or not a JSON
    /// array and the render degraded to an empty dataset.
    pub degraded: bool,
}

/// Diagnostics report emitted when `--emit-pipeline` is enabled.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PipelineReport {
    pub command: String,
    pub input: PipelineInput,
    pub steps: Vec<String>,
    pub deterministic_guards: Vec<String>,
}

impl PipelineReport {
    pub fn new(
        command: impl Into<String>,
        input: PipelineInput,
        steps: Vec<String>,
        deterministic_guards: Vec<String>,
    ) -> Self {
        Self {
            command: command.into(),
            input,
            steps,
            deterministic_guards,
        }
    }
}

/// Input-source descriptors used in pipeline diagnostics.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PipelineInput {
    pub sources: Vec<PipelineInputSource>,
}

impl PipelineInput {
    pub fn new(sources: Vec<PipelineInputSource>) -> Self {
        Self { sources }
    }
}

/// Single input source descriptor. Both commands read only from paths.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PipelineInputSource {
    pub label: String,
    pub source: String,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

impl PipelineInputSource {
    pub fn path(label: impl Into<String>, path: impl Into<String>, format: Option<&str>) -> Self {
        Self {
            label: label.into(),
            source: "path".to_string(),
            path: path.into(),
            format: format.map(ToOwned::to_owned),
        }
    }
}
