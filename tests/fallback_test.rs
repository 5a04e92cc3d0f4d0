mod common;

use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use common::batch_file;
use predicates::prelude::*;
use std::process::Command;

#[cfg(not(feature = "transport-http"))]
#[test]
fn test_http_transport_fallback_warning() {
    let csv = batch_file(&["void,123123"]);

    let mut cmd = Command::new(cargo_bin!("authnet-aim"));
    cmd.arg(csv.path())
        .arg("--login")
        .arg("login")
        .arg("--tran-key")
        .arg("key")
        .env("RUST_LOG", "off");

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("WARNING: Live submission requested, but 'transport-http' feature is not enabled. Falling back to dry-run validation."))
        .stdout(predicate::str::contains("1,void,validated"));
}

#[test]
fn test_dry_run_has_no_fallback_warning() {
    let csv = batch_file(&["void,123123"]);

    let mut cmd = Command::new(cargo_bin!("authnet-aim"));
    cmd.arg(csv.path()).arg("--dry-run");

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("WARNING").not());
}

#[cfg(feature = "transport-http")]
#[test]
fn test_live_submission_requires_credentials() {
    let csv = batch_file(&["void,123123"]);

    let mut cmd = Command::new(cargo_bin!("authnet-aim"));
    cmd.arg(csv.path())
        .env_remove("AUTHNET_LOGIN")
        .env_remove("AUTHNET_TRAN_KEY");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("--login and --tran-key"));
}
