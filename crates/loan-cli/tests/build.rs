//! End-to-end tests: raw file in, clean file out.

use std::fs;
use std::path::Path;
use std::process::Command;

use tempfile::tempdir;

use loan_cli::pipeline::{clean_file, default_output_path, load_config, write_report_json};
use loan_model::PipelineConfig;
use loan_output::write_table_csv;

const HEADER: &str = "id,loan_amnt,funded_amnt,term,int_rate,installment,grade,sub_grade,\
emp_length,home_ownership,annual_inc,verification_status,issue_d,loan_status,purpose,\
addr_state,dti,delinq_2yrs,earliest_cr_line,fico_range_low,fico_range_high,open_acc,pub_rec,\
revol_util,pub_rec_bankruptcies,last_pymnt_d,url";

const ROWS: [&str; 3] = [
    "1,5000,5000,36 months,10.65%,162.87,B,B2,10+ years,RENT,24000,Verified,15-06-2015,\
Fully Paid,credit_card,AZ,,0,01-01-2000,720,724,3,0,83.7%,,01-01-2018,http://x/1",
    "2,2500,2500,60 months,15.27%,59.83,C,C4,< 1 year,RENT,30000,Source Verified,\
not a date,Charged Off,car,GA,1.0,0,01-04-1999,740,744,3,0,9.4%,0,01-04-2013,http://x/2",
    "3,\"12,000\",12000,36 months,12.69%,67.79,B,B5,n/a,OWN,49200,Not Verified,01-12-2016,\
Current,other,CA,20.0,0,01-02-2002,660,664,10,0,21%,0,01-01-2019,http://x/3",
];

fn write_input(dir: &Path, rows: &[&str]) -> std::path::PathBuf {
    let path = dir.join("loans.csv");
    let mut contents = format!("{HEADER}\n");
    for row in rows {
        contents.push_str(row);
        contents.push('\n');
    }
    fs::write(&path, contents).unwrap();
    path
}

fn binary() -> Command {
    Command::new(env!("CARGO_BIN_EXE_loan-features"))
}

#[test]
fn clean_file_applies_every_stage() {
    let dir = tempdir().unwrap();
    let input = write_input(dir.path(), &ROWS);
    let config = PipelineConfig::default();

    let output = clean_file(&input, &config).unwrap();
    assert_eq!(output.report.input_rows, 3);
    assert_eq!(output.report.output_rows, 2);
    assert_eq!(output.report.dropped_rows, 1);

    let target = default_output_path(&input);
    write_table_csv(&output.table, &config, &target).unwrap();

    let mut reader = csv::Reader::from_path(&target).unwrap();
    let headers = reader.headers().unwrap().clone();
    let records: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
    assert_eq!(headers.len(), 29);
    assert_eq!(records.len(), 2);

    let field = |record: &csv::StringRecord, name: &str| {
        let idx = headers.iter().position(|h| h == name).unwrap();
        record.get(idx).unwrap().to_string()
    };
    assert_eq!(field(&records[0], "id"), "1");
    assert_eq!(field(&records[0], "credit_history_months"), "185");
    assert_eq!(field(&records[0], "loan_vintage_month"), "2015-06");
    assert_eq!(field(&records[0], "fico_bucket"), "Good");
    assert_eq!(field(&records[1], "id"), "3");
    assert_eq!(field(&records[1], "loan_status_group"), "In Progress");
    assert_eq!(field(&records[1], "fico_bucket"), "Fair");
    assert_eq!(field(&records[1], "loan_amnt").parse::<f64>().unwrap(), 12000.0);
    assert!(headers.iter().all(|h| h != "url" && h != "installment"));
}

#[test]
fn report_json_lists_counts() {
    let dir = tempdir().unwrap();
    let input = write_input(dir.path(), &ROWS);
    let output = clean_file(&input, &PipelineConfig::default()).unwrap();
    let path = dir.path().join("report.json");

    write_report_json(&output.report, &path).unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(json["input_rows"], 3);
    assert_eq!(json["dropped_by_column"]["issue_date"], 1);
    assert_eq!(json["parse_failures"]["issue_date"], 1);
}

#[test]
fn config_override_is_loaded() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{"required_columns": ["loan_amnt"]}"#).unwrap();

    let config = load_config(Some(&path)).unwrap();
    assert_eq!(config.required_columns.len(), 1);

    fs::write(&path, r#"{"required_columns": ["not_a_column"]}"#).unwrap();
    assert!(load_config(Some(&path)).is_err());
}

#[test]
fn binary_writes_default_output() {
    let dir = tempdir().unwrap();
    let input = write_input(dir.path(), &ROWS);

    let status = binary().arg("build").arg(&input).status().unwrap();

    assert!(status.success());
    assert!(dir.path().join("loans_clean.csv").exists());
}

#[test]
fn dry_run_writes_nothing() {
    let dir = tempdir().unwrap();
    let input = write_input(dir.path(), &ROWS);

    let status = binary()
        .args(["build", "--dry-run"])
        .arg(&input)
        .status()
        .unwrap();

    assert!(status.success());
    assert!(!dir.path().join("loans_clean.csv").exists());
}

#[test]
fn missing_column_fails_without_output() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("loans.csv");
    fs::write(&path, "id,loan_amnt\n1,5000\n").unwrap();

    let output = binary().arg("build").arg(&path).output().unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("missing required columns"), "stderr: {stderr}");
    assert!(!dir.path().join("loans_clean.csv").exists());
}

#[test]
fn repeated_runs_write_identical_bytes() {
    let dir = tempdir().unwrap();
    let input = write_input(dir.path(), &ROWS);
    let first = dir.path().join("a.csv");
    let second = dir.path().join("b.csv");

    for target in [&first, &second] {
        let status = binary()
            .arg("build")
            .arg(&input)
            .arg("-o")
            .arg(target)
            .status()
            .unwrap();
        assert!(status.success());
    }

    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
}

#[test]
fn report_failure_leaves_no_output() {
    let dir = tempdir().unwrap();
    let input = write_input(dir.path(), &ROWS);
    let report = dir.path().join("missing").join("report.json");

    let output = binary()
        .arg("build")
        .arg(&input)
        .arg("--report")
        .arg(&report)
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(!report.exists());
    assert!(!dir.path().join("loans_clean.csv").exists());
}

#[test]
fn repeated_extra_column_does_not_abort() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("loans.csv");
    let mut contents = format!("{HEADER},url\n");
    for row in ROWS {
        contents.push_str(row);
        contents.push_str(",http://mirror\n");
    }
    fs::write(&path, contents).unwrap();

    let output = clean_file(&path, &PipelineConfig::default()).unwrap();
    assert_eq!(output.report.input_rows, 3);
    assert_eq!(output.report.output_rows, 2);
}

#[test]
fn schema_lists_output_columns() {
    let output = binary().arg("schema").output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("credit_history_months"));
    assert!(stdout.contains("fico_bucket"));
}
