//! Config files on disk driving complete in-memory runs.

use blurr::config::duration::parse_duration;
use blurr::{run, DatabaseKind, FileConfig, WorkloadOverrides};
use std::io::Write;
use tempfile::NamedTempFile;
use workload_core::OperationKind;

fn write_config(suffix: &str, content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

const SIZED_YAML: &str = r#"
database:
  kind: memory
workload:
  create_percentage: 20
  read_percentage: 70
  update_percentage: 5
  delete_percentage: 5
  query_percentage: 0
  operations: 500
  workers: 1
  seed: 11
  generator:
    type: sized
    indexable_fields: 3
    value_size: 64
"#;

const PROFILE_TOML: &str = r#"
[database]
kind = "noop"

[workload]
create_percentage = 30
read_percentage = 40
update_percentage = 10
delete_percentage = 10
query_percentage = 10
operations = 300
workers = 1

[workload.generator]
type = "profile"
hot_data_percentage = 20
hot_access_percentage = 80
queries = ["body_by_city", "coins_stats_by_state_and_year"]
"#;

#[tokio::test]
async fn test_yaml_file_memory_run() {
    let file = write_config(".yaml", SIZED_YAML);
    let config = FileConfig::from_file(file.path()).unwrap();
    assert_eq!(config.database.kind, DatabaseKind::Memory);

    let report = run::run_workload(config, None).await.unwrap();
    assert_eq!(report.operations_completed, 500);
    assert_eq!(report.errors_total, 0);
    assert_eq!(report.operations(OperationKind::Create), 100);
    assert_eq!(report.operations(OperationKind::Read), 350);
    assert_eq!(report.operations(OperationKind::Query), 0);
    assert_eq!(report.live_records(), 75);
}

#[tokio::test]
async fn test_toml_file_noop_run_with_queries() {
    let file = write_config(".toml", PROFILE_TOML);
    let config = FileConfig::from_file(file.path()).unwrap();
    assert_eq!(config.database.kind, DatabaseKind::Noop);

    let report = run::run_workload(config, Some(parse_duration("1s").unwrap()))
        .await
        .unwrap();
    assert_eq!(report.operations_completed, 300);
    assert_eq!(report.operations(OperationKind::Query), 30);
    assert_eq!(report.errors_total, 0);
}

#[test]
fn test_overrides_change_the_run() {
    let file = write_config(".yml", SIZED_YAML);
    let mut config = FileConfig::from_file(file.path()).unwrap();
    let overrides = WorkloadOverrides {
        workers: Some(3),
        operations: Some(200),
        ..Default::default()
    };
    overrides.apply(&mut config.workload).unwrap();

    let report = tokio_test::assert_ok!(tokio_test::block_on(run::run_workload(config, None)));
    assert_eq!(report.workers, 3);
    assert_eq!(report.operations_completed, 200);

    let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
    assert_eq!(json["operations_completed"], 200);
}

#[test]
fn test_sample_record_matches_generator_settings() {
    let file = write_config(".yaml", SIZED_YAML);
    let config = FileConfig::from_file(file.path()).unwrap();

    let (key, document) = run::sample_record(&config.workload, 7);
    let (again, same) = run::sample_record(&config.workload, 7);
    assert_eq!(key, again);
    assert_eq!(document, same);
    assert_eq!(document.len(), 4);
}

#[test]
fn test_invalid_files_rejected() {
    let missing = FileConfig::from_file("/nonexistent/blurr.yaml");
    assert!(missing.is_err());

    let file = write_config(".yaml", "workload: [not, a, map]\n");
    let err = FileConfig::from_file(file.path()).unwrap_err();
    assert!(format!("{err:#}").contains("Failed to parse config file"));

    let unbalanced = SIZED_YAML.replace("query_percentage: 0", "query_percentage: 10");
    let file = write_config(".yaml", &unbalanced);
    let config = FileConfig::from_file(file.path()).unwrap();
    assert!(config.validate().is_err());
    assert!(run::sample_batch(&config.workload).is_err());
}
