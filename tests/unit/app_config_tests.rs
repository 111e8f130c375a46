/*!
 * Tests for application configuration functionality
 */

use anyhow::Result;
use vocabman::app_config::{Config, EmptyListPolicy, ExportMode, LogLevel};
use crate::common;

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert!(config.root_dir.ends_with("vocabman"));
    assert_eq!(config.cache_dir_name, "cache");
    assert_eq!(config.export_dir_name, "export");
    assert_eq!(config.empty_list_policy, EmptyListPolicy::RemoveKey);
    assert_eq!(config.export_mode, ExportMode::Reset);
    assert_eq!(config.log_level, LogLevel::Info);
    assert!(config.validate().is_ok());
}

/// Test derived directories
#[test]
fn test_with_root_shouldDeriveCacheAndExportDirs() {
    let config = Config::with_root("/data/words");

    assert_eq!(config.cache_dir(), std::path::Path::new("/data/words/cache"));
    assert_eq!(config.export_dir(), std::path::Path::new("/data/words/export"));
}

/// Test configuration validation
#[test]
fn test_config_validation_withVariousConfigs_shouldValidateCorrectly() {
    let mut config = Config::with_root("/data/words");
    assert!(config.validate().is_ok());

    config.cache_dir_name = "".to_string();
    assert!(config.validate().is_err());

    config.cache_dir_name = "nested/cache".to_string();
    assert!(config.validate().is_err());

    config.cache_dir_name = "export".to_string();
    assert!(config.validate().is_err());

    config.cache_dir_name = "cache".to_string();
    config.export_dir_name = "..".to_string();
    assert!(config.validate().is_err());
}

/// Test partial JSON fills in defaults and snake_case enum names
#[test]
fn test_config_deserialize_withPartialJson_shouldUseDefaults() -> Result<()> {
    let json =
        r#"{ "root_dir": "/tmp/words", "export_mode": "merge", "empty_list_policy": "keep" }"#;
    let config: Config = serde_json::from_str(json)?;

    assert_eq!(config.root_dir, std::path::PathBuf::from("/tmp/words"));
    assert_eq!(config.export_mode, ExportMode::Merge);
    assert_eq!(config.empty_list_policy, EmptyListPolicy::Keep);
    assert_eq!(config.cache_dir_name, "cache");
    assert_eq!(config.log_level, LogLevel::Info);
    Ok(())
}

/// Test that a missing config file is created with defaults and loads back
#[test]
fn test_load_or_create_withMissingFile_shouldWriteDefault() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("conf.json");

    let created = Config::load_or_create(&path)?;
    assert!(path.exists());

    let loaded = Config::load_or_create(&path)?;
    assert_eq!(created, loaded);
    Ok(())
}

/// Test that a broken config file is reported
#[test]
fn test_load_or_create_withInvalidJson_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "conf.json", "{ not json")?;

    assert!(Config::load_or_create(&path).is_err());
    Ok(())
}

/// Test log level mapping
#[test]
fn test_log_level_to_level_filter_shouldMapEachLevel() {
    assert_eq!(LogLevel::Error.to_level_filter(), log::LevelFilter::Error);
    assert_eq!(LogLevel::Debug.to_level_filter(), log::LevelFilter::Debug);
    assert_eq!(LogLevel::Trace.to_level_filter(), log::LevelFilter::Trace);
}
