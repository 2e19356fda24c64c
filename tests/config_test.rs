// tests/config_test.rs — Integration test: loading timing config from disk

use std::io::Write;
use std::time::Duration;

use coopfold::core::engine::Driver;
use coopfold::core::timing::TimingConfig;
use coopfold::infra::config::Config;

#[test]
fn test_load_from_file_feeds_driver() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[timing]
yield_delay_ms = 1
batch_time_ms = 8

[logging]
level = "trace"
"#
    )
    .unwrap();

    let config = Config::load_from(file.path()).unwrap();
    let driver = Driver::new().with_timing(config.timing());
    assert_eq!(
        driver.timing(),
        TimingConfig {
            yield_delay: Duration::from_millis(1),
            batch_time: Duration::from_millis(8),
        }
    );
    assert_eq!(config.logging.level, "trace");
}

#[test]
fn test_malformed_file_reports_path() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[timing]\nbatch_time_ms = \"fast\"").unwrap();

    let err = Config::load_from(file.path()).unwrap_err();
    assert!(format!("{err:#}").contains(&file.path().display().to_string()));
}

#[test]
fn test_driver_clones_keep_their_own_timing() {
    let base = Driver::new();
    let tuned = base.clone().with_timing(TimingConfig::from_millis(0, 5));
    assert_eq!(base.timing(), TimingConfig::default());
    assert_eq!(tuned.timing().batch_time, Duration::from_millis(5));
}
