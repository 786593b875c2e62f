use std::env;
use std::num::NonZeroUsize;

use sheetbrief::core::config::{AppConfig, DEFAULT_CHUNK_ROWS, DEFAULT_MODEL_ID};

/// Environment variables are process-global, so every scenario runs inside
/// this single test.
#[test]
fn test_from_env_scenarios() {
    // SAFETY: this integration test binary runs this single test only, so no
    // other thread touches the environment concurrently.
    unsafe {
        env::remove_var("REPORT_BUCKET");
        env::remove_var("REPORT_KEY");
        env::remove_var("SENDER_EMAIL");
        env::remove_var("RECIPIENT_EMAIL");
        env::remove_var("BEDROCK_MODEL_ID");
        env::remove_var("CHUNK_ROWS");
    }

    // Missing required variable fails and names the variable.
    let err = AppConfig::from_env().unwrap_err();
    assert!(err.contains("REPORT_BUCKET"));

    unsafe {
        env::set_var("REPORT_BUCKET", "reports-bucket");
        env::set_var("REPORT_KEY", "uploads/report.xlsx");
        env::set_var("SENDER_EMAIL", "reports@example.com");
        env::set_var("RECIPIENT_EMAIL", "team@example.com");
    }

    // Optional variables fall back to defaults.
    let config = AppConfig::from_env().unwrap();
    assert_eq!(config.report_bucket, "reports-bucket");
    assert_eq!(config.report_key, "uploads/report.xlsx");
    assert_eq!(config.model_id, DEFAULT_MODEL_ID);
    assert_eq!(config.chunk_rows, DEFAULT_CHUNK_ROWS);
    assert_eq!(config.chunk_rows.get(), 1000);

    // Overrides are honored.
    unsafe {
        env::set_var("BEDROCK_MODEL_ID", "anthropic.claude-instant-v1");
        env::set_var("CHUNK_ROWS", "250");
    }
    let config = AppConfig::from_env().unwrap();
    assert_eq!(config.model_id, "anthropic.claude-instant-v1");
    assert_eq!(config.chunk_rows, NonZeroUsize::new(250).unwrap());

    // A zero window is rejected at config time.
    unsafe {
        env::set_var("CHUNK_ROWS", "0");
    }
    let err = AppConfig::from_env().unwrap_err();
    assert!(err.contains("CHUNK_ROWS"));

    // Non-numeric windows are rejected too.
    unsafe {
        env::set_var("CHUNK_ROWS", "lots");
    }
    assert!(AppConfig::from_env().is_err());
}
