//! End-to-end tests driving `run` through an in-memory host.

use chainsight_lib::Host;
use std::fs;
use std::path::Path;

/// Test host that captures output to in-memory buffers.
struct TestHost {
    output_buf: Vec<u8>,
    error_buf: Vec<u8>,
    exit_code: Option<i32>,
}

impl TestHost {
    const fn new() -> Self {
        Self {
            output_buf: Vec::new(),
            error_buf: Vec::new(),
            exit_code: None,
        }
    }

    fn output_str(&self) -> String {
        String::from_utf8_lossy(&self.output_buf).into_owned()
    }

    fn error_str(&self) -> String {
        String::from_utf8_lossy(&self.error_buf).into_owned()
    }
}

impl Host for TestHost {
    fn output(&mut self) -> impl std::io::Write {
        &mut self.output_buf
    }

    fn error(&mut self) -> impl std::io::Write {
        &mut self.error_buf
    }

    fn exit(&mut self, code: i32) {
        self.exit_code = Some(code);
    }
}

fn run(args: &[&str]) -> TestHost {
    let mut host = TestHost::new();
    let mut full = vec!["chainsight", "--color", "never"];
    full.extend_from_slice(args);
    chainsight_lib::run(&mut host, full);
    host
}

fn path_str(path: &Path) -> &str {
    path.to_str().unwrap()
}

const MODERATE_SHIPMENT: &[&str] = &[
    "assess",
    "--origin",
    "Shanghai, CN",
    "--route",
    "Pacific",
    "--mode",
    "Sea",
    "--product",
    "Textiles",
    "--base-lead",
    "18",
    "--scheduled-lead",
    "21",
    "--geo",
    "0.55",
    "--weather",
    "4.5",
];

#[test]
fn test_assess_prints_label_and_breakdown() {
    let host = run(MODERATE_SHIPMENT);

    assert_eq!(host.exit_code, None, "stderr: {}", host.error_str());
    let output = host.output_str();
    assert!(output.contains("MODERATE RISK"));
    assert!(output.contains("34%"));
    assert!(output.contains("Risk factor breakdown"));
    assert!(output.contains("Transport Mode Risk"));
}

#[test]
fn test_assess_json() {
    let mut args = MODERATE_SHIPMENT.to_vec();
    args.extend_from_slice(&["--format", "json"]);
    let host = run(&args);

    assert_eq!(host.exit_code, None, "stderr: {}", host.error_str());
    let value: serde_json::Value = serde_json::from_str(&host.output_str()).unwrap();
    assert_eq!(value[0]["risk_label"], "MODERATE");
    assert_eq!(value[0]["probability"], 0.34);
}

#[test]
fn test_assess_csv() {
    let mut args = MODERATE_SHIPMENT.to_vec();
    args.extend_from_slice(&["--format", "csv"]);
    let host = run(&args);

    assert_eq!(host.exit_code, None, "stderr: {}", host.error_str());
    let output = host.output_str();
    let rows: Vec<_> = output.lines().collect();
    assert_eq!(rows.len(), 2);
    assert!(rows[1].contains(",0.34,MODERATE,"));
}

#[test]
fn test_assess_rejects_unknown_mode() {
    let mut args = MODERATE_SHIPMENT.to_vec();
    args[6] = "Rail";
    let host = run(&args);

    assert_eq!(host.exit_code, Some(1));
    assert!(host.error_str().contains("transport_mode"), "got: {}", host.error_str());
}

#[test]
fn test_assess_rejects_negative_lead_time() {
    let mut args = MODERATE_SHIPMENT.to_vec();
    args[10] = "-3";
    let host = run(&args);

    assert_eq!(host.exit_code, Some(1));
    assert!(host.error_str().contains("base_lead_time_days"), "got: {}", host.error_str());
}

#[test]
fn test_usage_error_exits_with_two() {
    let host = run(&["assess", "--origin", "Shanghai, CN"]);
    assert_eq!(host.exit_code, Some(2));
    assert!(!host.error_str().is_empty());
}

#[test]
fn test_help_exits_cleanly() {
    let host = run(&["--help"]);
    assert_eq!(host.exit_code, Some(0));
    assert!(host.output_str().contains("assess"));
}

#[test]
#[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
fn test_batch_csv_output() {
    let tmp = tempfile::tempdir().unwrap();
    let input = tmp.path().join("shipments.csv");
    fs::write(
        &input,
        "shipment_id,origin_city,route_type,transport_mode,product_category,base_lead_time_days,scheduled_lead_time_days,geopolitical_risk,weather_severity\n\
         S1,Shanghai CN,Pacific,Sea,Textiles,18,21,0.55,4.5\n\
         S2,Santos BR,Suez,Sea,Perishables,10,11,0.8,8\n\
         S3,Tokyo JP,Intra-Asia,Air,Raw Materials,20,30,0.2,1\n",
    )
    .unwrap();

    let host = run(&["batch", path_str(&input), "--format", "csv"]);

    assert_eq!(host.exit_code, None, "stderr: {}", host.error_str());
    let output = host.output_str();
    let rows: Vec<_> = output.lines().collect();
    assert_eq!(rows.len(), 4);
    assert!(rows[1].starts_with("S1,"));
    assert!(rows[1].contains(",0.34,MODERATE,"));
    assert!(rows[2].contains(",0.83,HIGH,"));
    assert!(rows[3].contains(",0.16,LOW,"));
}

#[test]
#[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
fn test_batch_bad_row_fails_without_report() {
    let tmp = tempfile::tempdir().unwrap();
    let input = tmp.path().join("shipments.csv");
    fs::write(
        &input,
        "origin_city,route_type,transport_mode,product_category,base_lead_time_days,scheduled_lead_time_days,geopolitical_risk,weather_severity\n\
         Shanghai CN,Pacific,Sea,Textiles,18,21,0.55,4.5\n\
         Santos BR,Suez,Sea,Perishables,10,11,1.8,8\n",
    )
    .unwrap();

    let host = run(&["batch", path_str(&input)]);

    assert_eq!(host.exit_code, Some(1));
    assert!(host.output_str().is_empty());
    let error = host.error_str();
    assert!(error.contains("row 3"), "got: {error}");
    assert!(error.contains("geopolitical_risk"), "got: {error}");
}

#[test]
#[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
fn test_batch_missing_file_fails() {
    let tmp = tempfile::tempdir().unwrap();
    let host = run(&["batch", path_str(&tmp.path().join("missing.csv"))]);
    assert_eq!(host.exit_code, Some(1));
}

#[test]
#[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
fn test_init_then_validate() {
    let tmp = tempfile::tempdir().unwrap();
    let config = tmp.path().join("weights.toml");

    let host = run(&["init", "--output", path_str(&config)]);
    assert_eq!(host.exit_code, None, "stderr: {}", host.error_str());
    assert!(config.exists());

    let host = run(&["validate", "--config", path_str(&config)]);
    assert_eq!(host.exit_code, None, "stderr: {}", host.error_str());
    assert!(host.output_str().contains("is valid"));

    let host = run(&["init", "--output", path_str(&config)]);
    assert_eq!(host.exit_code, Some(1), "init should not overwrite without --force");

    let host = run(&["init", "--output", path_str(&config), "--force"]);
    assert_eq!(host.exit_code, None, "stderr: {}", host.error_str());
}

#[test]
#[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
fn test_validate_rejects_bad_weights() {
    let tmp = tempfile::tempdir().unwrap();
    let config = tmp.path().join("weights.toml");
    fs::write(
        &config,
        "[routes]\ndefault = 0.06\n\n[routes.entries]\nSuez = 0.16\nsuez = 0.2\n\n[products]\ndefault = 0.01\n\n[origins]\ndefault = 0.01\n",
    )
    .unwrap();

    let host = run(&["validate", "--config", path_str(&config)]);
    assert_eq!(host.exit_code, Some(1));
    assert!(host.error_str().contains("same name"), "got: {}", host.error_str());
}

#[test]
fn test_validate_without_config_file_errors() {
    let host = run(&["validate"]);

    assert_eq!(host.exit_code, Some(1), "validate should fail when no chainsight.toml exists");
    assert!(
        host.error_str().contains("could not find configuration file"),
        "should report missing config file, got: {}",
        host.error_str()
    );
}

#[test]
#[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
fn test_assess_uses_override_weights() {
    let tmp = tempfile::tempdir().unwrap();
    let config = tmp.path().join("weights.toml");
    fs::write(
        &config,
        "[routes]\ndefault = 0.06\n\n[routes.entries]\nPacific = 0.5\n\n[products]\ndefault = 0.01\n\n[origins]\ndefault = 0.01\n",
    )
    .unwrap();

    let mut args = MODERATE_SHIPMENT.to_vec();
    args.extend_from_slice(&["--config", path_str(&config), "--format", "json"]);
    let host = run(&args);

    assert_eq!(host.exit_code, None, "stderr: {}", host.error_str());
    let value: serde_json::Value = serde_json::from_str(&host.output_str()).unwrap();
    assert_eq!(value[0]["risk_label"], "HIGH");
}

#[test]
fn test_stats_json_sections() {
    let host = run(&["stats", "--section", "overview", "--section", "models", "--format", "json"]);

    assert_eq!(host.exit_code, None, "stderr: {}", host.error_str());
    let value: serde_json::Value = serde_json::from_str(&host.output_str()).unwrap();
    assert_eq!(value["overview"]["total_shipments"], 10_000);
    assert_eq!(value["models"][0]["name"], "XGBoost");
    assert!(value.get("findings").is_none());
}

#[test]
fn test_stats_console_all_sections() {
    let host = run(&["stats"]);

    assert_eq!(host.exit_code, None, "stderr: {}", host.error_str());
    let output = host.output_str();
    assert!(output.contains("SUPPLY CHAIN OVERVIEW"));
    assert!(output.contains("KEY FINDINGS"));
}

#[test]
fn test_stats_rejects_csv() {
    let host = run(&["stats", "--format", "csv"]);
    assert_eq!(host.exit_code, Some(1));
}
