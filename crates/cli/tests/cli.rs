use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

const CATALOG: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../configs/aircraft");

fn regional_jet_args() -> Vec<&'static str> {
    vec![
        "--energy", "kerosene", "--engine", "turbofan", "--bpr", "12", "--category", "regional",
        "--npax", "180", "--range", "5500", "--speed", "0.78", "--altitude", "35000",
    ]
}

#[test]
fn design_writes_json_and_csv() {
    let dir = tempfile::tempdir().expect("tempdir");
    let json_path = dir.path().join("design.json");
    let csv_path = dir.path().join("plr.csv");

    Command::cargo_bin("design")
        .expect("design bin")
        .args(regional_jet_args())
        .args(["--envelope", "--cost", "--json"])
        .arg(&json_path)
        .arg("--csv")
        .arg(&csv_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Airplane Design ==="))
        .stdout(predicate::str::contains("=== Payload-Range Envelope ==="))
        .stdout(predicate::str::contains("=== Operating Cost (west_bound) ==="))
        .stdout(predicate::str::contains("MTOW = 81489 kg"));

    let record = fs::read_to_string(&json_path).expect("json output");
    assert!(record.contains("\"category\": \"regional\""));
    let csv = fs::read_to_string(&csv_path).expect("csv output");
    assert!(csv.starts_with("corner,range_km,payload_kg,npax"));
    assert_eq!(csv.lines().count(), 5);
}

#[test]
fn design_rejects_battery_turbofans() {
    Command::cargo_bin("design")
        .expect("design bin")
        .args([
            "--energy", "battery", "--engine", "turbofan", "--bpr", "10", "--npax", "20", "--range", "300",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot run on battery"));
}

#[test]
fn design_rejects_unknown_energy() {
    Command::cargo_bin("design")
        .expect("design bin")
        .args(["--energy", "steam", "--engine", "piston", "--npax", "4", "--range", "500"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown energy type 'steam'"));
}

#[test]
fn calibrate_reference_narrowbody() {
    let dir = tempfile::tempdir().expect("tempdir");
    let params_path = dir.path().join("tuned.yaml");

    Command::cargo_bin("calibrate")
        .expect("calibrate bin")
        .args(["--catalog", CATALOG, "--aircraft", "Reference Narrowbody", "--output"])
        .arg(&params_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Calibration: Reference Narrowbody ==="))
        .stdout(predicate::str::contains("L/D factor     : 1.10"));

    let tuned = fs::read_to_string(&params_path).expect("tuned parameters");
    assert!(tuned.contains("lod_factor"));
}

#[test]
fn calibrate_unknown_aircraft_fails() {
    Command::cargo_bin("calibrate")
        .expect("calibrate bin")
        .args(["--catalog", CATALOG, "--aircraft", "Concorde"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}
