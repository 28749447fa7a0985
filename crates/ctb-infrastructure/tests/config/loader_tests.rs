//! Tests for the Figment-based configuration loader

use std::io::Write;

use ctb_domain::error::Error;
use ctb_infrastructure::config::ConfigLoader;

// Env prefixes are unique per test so parallel tests and ambient CTB_*
// variables cannot interfere.

#[test]
fn defaults_apply_without_any_sources() {
    let config = ConfigLoader::new()
        .with_env_prefix("CTB_TEST_DEFAULTS")
        .with_config_path("does-not-exist.toml")
        .load()
        .unwrap();

    assert_eq!(config.app_name, "ctb");
    assert_eq!(config.logging.level, "info");
    assert!(!config.logging.json_format);
}

#[test]
fn toml_file_overrides_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ctb.toml");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "app_name = \"greeter\"").unwrap();
    writeln!(file, "[logging]").unwrap();
    writeln!(file, "level = \"debug\"").unwrap();
    writeln!(file, "json_format = true").unwrap();

    let config = ConfigLoader::new()
        .with_env_prefix("CTB_TEST_TOML")
        .with_config_path(&path)
        .load()
        .unwrap();

    assert_eq!(config.app_name, "greeter");
    assert_eq!(config.logging.level, "debug");
    assert!(config.logging.json_format);
}

#[test]
fn environment_overrides_defaults() {
    figment::Jail::expect_with(|jail| {
        jail.set_env("CTB_TEST_ENV_LOGGING_LEVEL", "trace");

        let config = ConfigLoader::new()
            .with_env_prefix("CTB_TEST_ENV")
            .with_config_path("does-not-exist.toml")
            .load()
            .expect("config");

        assert_eq!(config.logging.level, "trace");
        Ok(())
    });
}

#[test]
fn environment_overrides_the_toml_file() {
    figment::Jail::expect_with(|jail| {
        jail.create_file("ctb.toml", "[logging]\nlevel = \"debug\"\n")?;
        jail.set_env("CTB_TEST_ENV_FILE_LOGGING_LEVEL", "warn");

        let config = ConfigLoader::new()
            .with_env_prefix("CTB_TEST_ENV_FILE")
            .with_config_path("ctb.toml")
            .load()
            .expect("config");

        assert_eq!(config.logging.level, "warn");
        Ok(())
    });
}

#[test]
fn invalid_log_level_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ctb.toml");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "[logging]").unwrap();
    writeln!(file, "level = \"loud\"").unwrap();

    let err = ConfigLoader::new()
        .with_env_prefix("CTB_TEST_LEVEL")
        .with_config_path(&path)
        .load()
        .unwrap_err();

    assert!(matches!(err, Error::InvalidArgument { .. }));
}

#[test]
fn empty_app_name_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ctb.toml");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "app_name = \"  \"").unwrap();

    let err = ConfigLoader::new()
        .with_env_prefix("CTB_TEST_NAME")
        .with_config_path(&path)
        .load()
        .unwrap_err();

    assert!(matches!(err, Error::InvalidArgument { .. }));
}
