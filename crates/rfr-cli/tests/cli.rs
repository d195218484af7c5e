//! End-to-end tests of the `rfr` binary.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

const MATURITIES: &str = "1,2,3,4,5,6,7,8,9,10,12,15,20";
const RATES: &str = "-0.00525,-0.00553,-0.00559,-0.00534,-0.00505,-0.00467,-0.00420,\
                     -0.00366,-0.00309,-0.00254,-0.00150,-0.00024,0.00092";

fn rfr() -> Command {
    let mut cmd = Command::cargo_bin("rfr").unwrap();
    cmd.env_remove("RUST_LOG").env_remove("RFR_CONFIG");
    cmd
}

#[test]
fn test_help_lists_commands() {
    rfr()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("smith-wilson"))
        .stdout(predicate::str::contains("par-to-forward"))
        .stdout(predicate::str::contains("reference-date"));
}

#[test]
fn test_smith_wilson_csv() {
    rfr()
        .args(["--quiet", "--format", "csv", "smith-wilson"])
        .args(["--maturities", MATURITIES, "--rates", RATES])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("maturity,value\n0,0"))
        .stdout(predicate::str::contains("\n120,"));
}

#[test]
fn test_smith_wilson_alpha_json() {
    rfr()
        .args(["-q", "-f", "json", "smith-wilson"])
        .args(["--maturities", MATURITIES, "--rates", RATES, "--output", "alpha"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"alpha\""))
        .stdout(predicate::str::contains("\"converged\": \"true\""));
}

#[test]
fn test_smith_wilson_rejects_mismatched_lists() {
    rfr()
        .args(["-q", "smith-wilson", "--maturities", "1,2,3", "--rates", "0.01,0.02"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must match"));
}

#[test]
fn test_smith_wilson_rejects_invalid_settings() {
    rfr()
        .args(["-q", "smith-wilson", "--maturities", "1,5", "--rates", "0.01,0.02", "--t2", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("t2"));
}

#[test]
fn test_smith_wilson_reads_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[smith_wilson]\nufr = 0.036\nhorizon = 30").unwrap();

    rfr()
        .args(["-q", "-f", "csv", "--config"])
        .arg(file.path())
        .args(["smith-wilson", "--maturities", "1,5,10", "--rates", "0.02,0.025,0.03"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\n30,"))
        .stdout(predicate::str::contains("\n31,").not());
}

#[test]
fn test_smith_wilson_rejects_unsupported_method() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[smith_wilson]\nmethod = \"newton\"").unwrap();

    rfr()
        .args(["-q", "--config"])
        .arg(file.path())
        .args(["smith-wilson", "--maturities", "1,5", "--rates", "0.01,0.02"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not implemented"));
}

#[test]
fn test_par_to_forward_flat_tail() {
    rfr()
        .args(["-q", "-f", "csv", "par-to-forward"])
        .args(["--maturities", "1,2", "--rates", "0.02,0.02", "--span", "5"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("maturity,value\n1,0.0"))
        .stdout(predicate::str::contains("\n5,"));
}

#[test]
fn test_par_to_forward_buckets() {
    rfr()
        .args(["-q", "-f", "json", "par-to-forward", "--buckets"])
        .args(["--maturities", "1,5", "--rates", "0.02,0.03"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"iterations\""))
        .stdout(predicate::str::contains("\"converged\": true"));
}

#[test]
fn test_par_curve_requires_short_end() {
    rfr()
        .args(["-q", "par-curve", "--rates", "0.01,0.011,0.012"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("4"));
}

#[test]
fn test_par_curve_with_swaps() {
    let rates = vec!["0.02"; 20].join(",");
    rfr()
        .args(["-q", "-f", "csv", "par-curve", "--rates", &rates, "--swaps", "30:0.025"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\n20,"))
        .stdout(predicate::str::contains("\n30,0.02"));
}

#[test]
fn test_term_structure() {
    rfr()
        .args(["-q", "-f", "csv", "term-structure", "--forwards", "0.01,0.01,0.01"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("maturity,value\n1,0.01\n"));
}

#[test]
fn test_reference_date() {
    rfr()
        .args(["-q", "-f", "json", "reference-date", "--date", "2018-12-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"reference_date\": \"2018-11-30\""))
        .stdout(predicate::str::contains("\"compact\": \"20181130\""));
}

#[test]
fn test_reference_date_rejects_bad_format() {
    rfr()
        .args(["-q", "reference-date", "--date", "15/12/2018"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("YYYY-MM-DD"));
}
