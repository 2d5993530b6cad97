use std::path::PathBuf;
use std::process;

use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use covgate::cmd::{dashboard, rules};
use covgate::domain::report::{PipelineInput, PipelineInputSource, PipelineReport};
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Debug, Parser)]
#[command(
    name = "covgate",
    version,
    about = "Coverage dashboard and security-rules gate for CI"
)]
struct Cli {
    #[arg(long, global = true, default_value_t = false)]
    emit_pipeline: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Render the coverage-history JSON into a static HTML chart page.
    Dashboard(DashboardArgs),
    /// Check security rule files for disallowed access patterns.
    Rules(RulesArgs),
}

#[derive(Debug, clap::Args)]
struct DashboardArgs {
    /// Coverage history input; any read or parse failure degrades to an
    /// empty chart instead of failing the run.
    #[arg(long, default_value = "coverage_history.json")]
    history: PathBuf,

    #[arg(long, default_value = "dashboard.html")]
    output: PathBuf,
}

#[derive(Debug, clap::Args)]
struct RulesArgs {
    /// Directory containing `firestore.rules` and `storage.rules`.
    #[arg(long, default_value = ".")]
    rules_dir: PathBuf,
}

#[derive(Serialize)]
struct CliError<'a> {
    error: &'a str,
    message: String,
    code: i32,
    details: Value,
}

fn main() {
    process::exit(run());
}

fn run() -> i32 {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) => return handle_parse_error(error),
    };

    let emit_pipeline = cli.emit_pipeline;
    match cli.command {
        Commands::Dashboard(args) => run_dashboard(args, emit_pipeline),
        Commands::Rules(args) => run_rules(args, emit_pipeline),
    }
}

fn handle_parse_error(error: clap::Error) -> i32 {
    match error.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            print!("{error}");
            0
        }
        _ => {
            emit_error(
                "input_usage_error",
                error.to_string(),
                json!({"kind": "cli_parse_error"}),
                3,
            );
            3
        }
    }
}

fn run_dashboard(args: DashboardArgs, emit_pipeline: bool) -> i32 {
    let command_args = dashboard::DashboardCommandArgs {
        history: args.history.clone(),
        output: args.output.clone(),
    };
    let response = dashboard::run(&command_args);

    let exit_code = match response.exit_code {
        0 => {
            if emit_json_stdout(&response.payload) {
                0
            } else {
                emit_error(
                    "internal_error",
                    "failed to serialize dashboard summary".to_string(),
                    json!({"command": "dashboard"}),
                    1,
                );
                1
            }
        }
        1 => {
            if emit_json_stderr(&response.payload) {
                1
            } else {
                emit_error(
                    "internal_error",
                    "failed to serialize dashboard error".to_string(),
                    json!({"command": "dashboard"}),
                    1,
                );
                1
            }
        }
        other => {
            emit_error(
                "internal_error",
                format!("unexpected dashboard exit code: {other}"),
                json!({"command": "dashboard"}),
                1,
            );
            1
        }
    };

    if emit_pipeline {
        emit_pipeline_report(&build_dashboard_pipeline_report(&args));
    }
    exit_code
}

fn run_rules(args: RulesArgs, emit_pipeline: bool) -> i32 {
    let command_args = rules::RulesCommandArgs {
        rules_dir: args.rules_dir.clone(),
    };
    let response = rules::run(&command_args);

    let exit_code = match response.exit_code {
        // Exit 1 is the gate verdict, not an error; the report goes to stdout.
        0 | 1 => {
            if emit_json_stdout(&response.payload) {
                response.exit_code
            } else {
                emit_error(
                    "internal_error",
                    "failed to serialize rules report".to_string(),
                    json!({"command": "rules"}),
                    1,
                );
                1
            }
        }
        3 => {
            if emit_json_stderr(&response.payload) {
                3
            } else {
                emit_error(
                    "internal_error",
                    "failed to serialize rules error".to_string(),
                    json!({"command": "rules"}),
                    1,
                );
                1
            }
        }
        other => {
            emit_error(
                "internal_error",
                format!("unexpected rules exit code: {other}"),
                json!({"command": "rules"}),
                1,
            );
            1
        }
    };

    if emit_pipeline {
        emit_pipeline_report(&build_rules_pipeline_report(&args));
    }
    exit_code
}

fn build_dashboard_pipeline_report(args: &DashboardArgs) -> PipelineReport {
    PipelineReport::new(
        "dashboard",
        PipelineInput::new(vec![PipelineInputSource::path(
            "history",
            args.history.display().to_string(),
            Some("json"),
        )]),
        dashboard::pipeline_steps(),
        dashboard::deterministic_guards(),
    )
}

fn build_rules_pipeline_report(args: &RulesArgs) -> PipelineReport {
    let sources = covgate::engine::rules::RULE_FILE_NAMES
        .iter()
        .map(|name| {
            PipelineInputSource::path(
                *name,
                args.rules_dir.join(name).display().to_string(),
                Some("rules"),
            )
        })
        .collect();
    PipelineReport::new(
        "rules",
        PipelineInput::new(sources),
        rules::pipeline_steps(),
        rules::deterministic_guards(),
    )
}

fn emit_json_stdout(value: &Value) -> bool {
    match serde_json::to_string(value) {
        Ok(serialized) => {
            println!("{serialized}");
            true
        }
        Err(_) => false,
    }
}

fn emit_json_stderr(value: &Value) -> bool {
    match serde_json::to_string(value) {
        Ok(serialized) => {
            eprintln!("{serialized}");
            true
        }
        Err(_) => false,
    }
}

fn emit_pipeline_report(report: &PipelineReport) {
    match serde_json::to_string(report) {
        Ok(serialized) => eprintln!("{serialized}"),
        Err(error) => emit_error(
            "internal_error",
            format!("failed to serialize pipeline report: {error}"),
            json!({"command": "emit_pipeline"}),
            1,
        ),
    }
}

fn emit_error(error: &'static str, message: String, details: Value, code: i32) {
    let payload = CliError {
        error,
        message,
        code,
        details,
    };
    match serde_json::to_string(&payload) {
        Ok(serialized) => eprintln!("{serialized}"),
        Err(_) => eprintln!(
            "{{\"error\":\"internal_error\",\"message\":\"failed to serialize error\",\"code\":1}}"
        ),
    }
}
