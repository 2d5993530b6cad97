use std::path::PathBuf;

use serde_json::{Value, json};

use crate::domain::error::DashboardError;
use crate::domain::report::DashboardSummary;
use crate::engine::dashboard as engine;

/// Input arguments for `dashboard` command execution API.
#[derive(Debug, Clone)]
pub struct DashboardCommandArgs {
    pub history: PathBuf,
    pub output: PathBuf,
}

/// Structured command response that carries exit-code mapping and JSON payload.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardCommandResponse {
    pub exit_code: i32,
    pub payload: Value,
}

/// Render the coverage history into the output page.
///
/// Input problems never fail the run; only an output write failure maps to
/// an internal error.
pub fn run(args: &DashboardCommandArgs) -> DashboardCommandResponse {
    let loaded = engine::load_history(&args.history);
    let points = engine::chart_points(&loaded.entries);

    let page = match engine::render_page(&points) {
        Ok(page) => page,
        Err(error) => return internal_error(&error),
    };
    if let Err(error) = engine::write_page(&args.output, &page) {
        return internal_error(&error);
    }

    let summary = DashboardSummary {
        output: args.output.display().to_string(),
        points: points.len(),
        degraded: loaded.degraded,
    };
    match serde_json::to_value(&summary) {
        Ok(payload) => DashboardCommandResponse {
            exit_code: 0,
            payload,
        },
        Err(error) => DashboardCommandResponse {
            exit_code: 1,
            payload: json!({
                "error": "internal_error",
                "message": format!("failed to serialize dashboard summary: {error}"),
            }),
        },
    }
}

fn internal_error(error: &DashboardError) -> DashboardCommandResponse {
    DashboardCommandResponse {
        exit_code: 1,
        payload: json!({
            "error": "internal_error",
            "message": error.to_string(),
        }),
    }
}

/// Ordered pipeline-step names used for `--emit-pipeline` diagnostics.
pub fn pipeline_steps() -> Vec<String> {
    vec![
        "dashboard_load_history".to_string(),
        "dashboard_map_points".to_string(),
        "dashboard_render_page".to_string(),
        "dashboard_write_output".to_string(),
    ]
}

/// Determinism guards applied by `dashboard`.
pub fn deterministic_guards() -> Vec<String> {
    vec![
        "lenient_history_load_degrades_to_empty".to_string(),
        "percentage_rounded_two_decimals".to_string(),
        "point_order_preserves_input".to_string(),
        "dashboard_exit_zero_for_any_input".to_string(),
    ]
}
