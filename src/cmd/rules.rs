use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};

use crate::domain::error::RulesError;
use crate::domain::report::{RuleFileReport, RuleFileStatus, RulesReport};
use crate::engine::rules as engine;

/// Input arguments for `rules` command execution API.
#[derive(Debug, Clone)]
pub struct RulesCommandArgs {
    pub rules_dir: PathBuf,
}

/// Structured command response that carries exit-code mapping and JSON payload.
#[derive(Debug, Clone, PartialEq)]
pub struct RulesCommandResponse {
    pub exit_code: i32,
    pub payload: Value,
}

/// Check the fixed rule-file set under the rules directory.
///
/// Missing files skip as a pass. A present file that cannot be read is a
/// usage error (exit 3); a critical finding in any checked file maps the
/// whole run to exit 1.
pub fn run(args: &RulesCommandArgs) -> RulesCommandResponse {
    let mut files = Vec::with_capacity(engine::RULE_FILE_NAMES.len());
    for name in engine::RULE_FILE_NAMES {
        match check_file(name, &args.rules_dir.join(name)) {
            Ok(report) => files.push(report),
            Err(error) => {
                return RulesCommandResponse {
                    exit_code: 3,
                    payload: json!({
                        "error": "input_usage_error",
                        "message": error.to_string(),
                    }),
                };
            }
        }
    }

    let report = RulesReport::from_files(files);
    let exit_code = if report.summary.secure { 0 } else { 1 };
    match serde_json::to_value(&report) {
        Ok(payload) => RulesCommandResponse { exit_code, payload },
        Err(error) => RulesCommandResponse {
            exit_code: 1,
            payload: json!({
                "error": "internal_error",
                "message": format!("failed to serialize rules report: {error}"),
            }),
        },
    }
}

fn check_file(name: &str, path: &Path) -> Result<RuleFileReport, RulesError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(error) if error.kind() == ErrorKind::NotFound => {
            return Ok(RuleFileReport {
                file: name.to_string(),
                status: RuleFileStatus::Skipping,
                findings: Vec::new(),
            });
        }
        Err(source) => {
            return Err(RulesError::ReadRules {
                path: path.display().to_string(),
                source,
            });
        }
    };

    Ok(RuleFileReport {
        file: name.to_string(),
        status: RuleFileStatus::Checked,
        findings: engine::evaluate(name, &content),
    })
}

/// Ordered pipeline-step names used for `--emit-pipeline` diagnostics.
pub fn pipeline_steps() -> Vec<String> {
    vec![
        "rules_read_files".to_string(),
        "rules_evaluate_patterns".to_string(),
        "rules_build_report".to_string(),
    ]
}

/// Determinism guards applied by `rules`.
pub fn deterministic_guards() -> Vec<String> {
    vec![
        "fixed_rule_file_set".to_string(),
        "literal_substring_matching_only".to_string(),
        "missing_rule_file_skips_as_pass".to_string(),
        "stable_file_report_order".to_string(),
    ]
}
