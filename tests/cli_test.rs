mod common;

use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use common::batch_file;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_cli_dry_run_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    let csv = batch_file(&[
        "auth_only,,4111111111111111,01/2030,1.00",
        "prior_auth_capture,123123",
        "void_or_credit,123123",
        "credit,987,4111111111111111,,12.00",
    ]);

    let mut cmd = Command::new(cargo_bin!("authnet-aim"));
    cmd.arg(csv.path()).arg("--dry-run");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "row,type,status,response_code,reason_code,reason_text,approval_code,avs_response,trans_id,ccv_response",
        ))
        .stdout(predicate::str::contains("1,auth_only,validated"))
        .stdout(predicate::str::contains("2,prior_auth_capture,validated"))
        .stdout(predicate::str::contains("3,void,validated"))
        .stdout(predicate::str::contains("4,credit,validated"));

    Ok(())
}

#[test]
fn test_cli_reports_invalid_rows_and_continues() {
    let csv = batch_file(&[
        "auth_capture,,42,01/2030,1.00",
        "refund_everything,1",
        "auth_capture,,4111111111111111,01/2030,12 dollars",
        "void,555",
    ]);

    let mut cmd = Command::new(cargo_bin!("authnet-aim"));
    cmd.arg(csv.path()).arg("--dry-run");

    cmd.assert()
        .success()
        .stderr(predicate::str::contains(
            "Error processing transaction on row 1",
        ))
        .stderr(predicate::str::contains("card_num"))
        .stderr(predicate::str::contains("Error reading transaction on row 2"))
        .stderr(predicate::str::contains(
            "Error processing transaction on row 3",
        ))
        .stdout(predicate::str::contains("4,void,validated"))
        .stdout(predicate::str::contains("1,auth_capture").not());
}

#[test]
fn test_cli_row_errors_survive_silenced_logging() {
    let csv = batch_file(&["auth_capture,,42,01/2030,1.00", "refund_everything,1"]);

    let mut cmd = Command::new(cargo_bin!("authnet-aim"));
    cmd.arg(csv.path()).arg("--dry-run").env("RUST_LOG", "off");

    cmd.assert()
        .success()
        .stderr(predicate::str::contains(
            "Error processing transaction on row 1: Validation error: Invalid card_num format",
        ))
        .stderr(predicate::str::contains("Error reading transaction on row 2"))
        .stderr(predicate::str::contains("\u{1b}[").not());
}

#[test]
fn test_cli_never_echoes_rejected_card_number() {
    let csv = batch_file(&[
        "auth_capture,,42222222222221112,01/2030,1.00",
        "auth_capture,,4111111111111111,01/2030,1.00,12345",
    ]);

    let mut cmd = Command::new(cargo_bin!("authnet-aim"));
    cmd.arg(csv.path()).arg("--dry-run").arg("--ccv");

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("*************1112"))
        .stderr(predicate::str::contains("42222222222221112").not())
        .stderr(predicate::str::contains("Invalid card_code format '*****'"))
        .stderr(predicate::str::contains("12345").not());
}

#[test]
fn test_cli_avs_flag_requires_zip() {
    let csv = batch_file(&[
        "auth_only,,4111111111111111,0130,1.00,,351 W Hubbard St,",
        "auth_only,,4111111111111111,0130,1.00,,351 W Hubbard St,60654",
    ]);

    let mut cmd = Command::new(cargo_bin!("authnet-aim"));
    cmd.arg(csv.path()).arg("--dry-run").arg("--avs");

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("zip is required"))
        .stdout(predicate::str::contains("2,auth_only,validated"))
        .stdout(predicate::str::contains("1,auth_only").not());
}

#[test]
fn test_cli_missing_input_file_fails() {
    let mut cmd = Command::new(cargo_bin!("authnet-aim"));
    cmd.arg("does/not/exist.csv").arg("--dry-run");

    cmd.assert().failure();
}
