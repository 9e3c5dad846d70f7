//! Client data stays out of the logs unless `--log-data` is given.
//!
//! The subscriber is global, so this file holds a single test.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use tdp_classifier::{Classifier, Predictor};
use tdp_cli::logging::{LogConfig, LogFormat, REDACTED_VALUE, init_logging};
use tdp_cli::profile::{check_profile, encode_profile};
use tdp_model::{ClientProfile, FeatureVector};
use tracing::level_filters::LevelFilter;

struct Constant;

impl Classifier for Constant {
    fn backend(&self) -> &'static str {
        "constant"
    }

    fn predict_probability(&self, _features: &FeatureVector) -> f64 {
        0.25
    }
}

fn unique_log_file() -> PathBuf {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!("tdp-cli-log-{}-{nanos}.log", std::process::id()))
}

#[test]
fn trace_output_redacts_profile_and_vector() {
    let log_file = unique_log_file();
    let config = LogConfig {
        level_filter: LevelFilter::TRACE,
        use_env_filter: false,
        with_ansi: false,
        format: LogFormat::Compact,
        log_file: Some(log_file.clone()),
        log_data: false,
        ..LogConfig::default()
    };
    init_logging(&config).unwrap();

    let profile = ClientProfile {
        age: 57,
        pdays: 4242,
        job: "housemaid".to_string(),
        ..ClientProfile::default()
    };
    let profile = check_profile(profile).unwrap();
    let features = encode_profile(&profile).unwrap();
    Predictor::new(Arc::new(Constant)).predict_features(&features);
    Predictor::new(Arc::new(Constant)).predict(&profile).unwrap();

    let output = fs::read_to_string(&log_file).unwrap();
    fs::remove_file(&log_file).unwrap();

    assert!(output.contains("resolved profile"), "{output}");
    assert!(output.contains("encoded profile"), "{output}");
    assert!(output.contains(REDACTED_VALUE), "{output}");
    assert!(!output.contains("4242"), "{output}");
    assert!(!output.contains("housemaid"), "{output}");
}
