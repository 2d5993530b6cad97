use predicates::prelude::predicate;

#[test]
fn help_is_available() {
    assert_cmd::cargo::cargo_bin_cmd!("covgate")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("dashboard"))
        .stdout(predicate::str::contains("rules"));
}

#[test]
fn version_is_available() {
    assert_cmd::cargo::cargo_bin_cmd!("covgate")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn parser_errors_return_json_with_exit_code_three() {
    assert_cmd::cargo::cargo_bin_cmd!("covgate")
        .arg("publish")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("\"error\":\"input_usage_error\""));
}

#[test]
fn missing_subcommand_is_a_usage_error() {
    assert_cmd::cargo::cargo_bin_cmd!("covgate")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("\"error\":\"input_usage_error\""));
}
