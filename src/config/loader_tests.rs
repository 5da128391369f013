//! Tests for configuration file loading.

use super::*;
use serial_test::serial;
use std::env;
use std::fs;

#[test]
fn default_config_path_contains_termlogin_config_toml() {
    let Some(path) = default_config_path() else {
        return; // No home directory on this platform
    };
    let path_str = path.to_string_lossy();
    assert!(
        path_str.contains("termlogin") && path_str.ends_with("config.toml"),
        "Path should contain 'termlogin' and end with 'config.toml', got: {}",
        path_str
    );
}

#[test]
fn load_config_file_returns_ok_none_for_missing_file() {
    let result = load_config_file("/nonexistent/path/to/termlogin.toml");
    assert_eq!(
        result,
        Ok(None),
        "Missing config file should return Ok(None), not an error"
    );
}

#[test]
fn load_config_file_parses_valid_toml() {
    let config_path = env::temp_dir().join("termlogin_test_config.toml");

    let toml_content = r#"
alert_dismiss_ms = 8000
alert_exit_ms = 250
toast_duration_ms = 1500
show_visibility_toggle = false
log_file_path = "/tmp/termlogin-test.log"
"#;

    fs::write(&config_path, toml_content).expect("Failed to write test config");

    let config = load_config_file(&config_path)
        .expect("Should successfully parse valid TOML")
        .expect("Should return Some(ConfigFile) for existing file");

    assert_eq!(config.alert_dismiss_ms, Some(8000));
    assert_eq!(config.alert_exit_ms, Some(250));
    assert_eq!(config.toast_duration_ms, Some(1500));
    assert_eq!(config.show_visibility_toggle, Some(false));
    assert_eq!(
        config.log_file_path,
        Some(PathBuf::from("/tmp/termlogin-test.log"))
    );

    fs::remove_file(config_path).ok();
}

#[test]
fn load_config_file_returns_error_for_invalid_toml() {
    let config_path = env::temp_dir().join("termlogin_test_invalid.toml");

    fs::write(&config_path, "this is not valid TOML ][}{")
        .expect("Failed to write invalid test config");

    let result = load_config_file(&config_path);

    match result {
        Err(ConfigError::ParseError { path, reason: _ }) => {
            assert_eq!(path, config_path);
        }
        _ => panic!("Expected ParseError, got {:?}", result),
    }

    fs::remove_file(config_path).ok();
}

#[test]
fn config_file_rejects_unknown_fields() {
    let result: Result<ConfigFile, _> = toml::from_str("theme = \"monokai\"");
    assert!(
        result.is_err(),
        "Unknown keys should be rejected, not silently ignored"
    );
}

#[test]
fn partial_config_leaves_other_fields_none() {
    let config: ConfigFile = toml::from_str("alert_exit_ms = 100").unwrap();
    assert_eq!(config.alert_exit_ms, Some(100));
    assert_eq!(config.alert_dismiss_ms, None);
    assert_eq!(config.show_visibility_toggle, None);
}

// ===== Merge =====

#[test]
fn merge_config_uses_defaults_when_none() {
    assert_eq!(merge_config(None), ResolvedConfig::default());
}

#[test]
fn merge_config_overrides_with_config_file_values() {
    let file = ConfigFile {
        alert_dismiss_ms: Some(1000),
        toast_duration_ms: Some(42),
        ..ConfigFile::default()
    };

    let resolved = merge_config(Some(file));
    let defaults = ResolvedConfig::default();

    assert_eq!(resolved.alert_dismiss_ms, 1000);
    assert_eq!(resolved.toast_duration_ms, 42);
    assert_eq!(resolved.alert_exit_ms, defaults.alert_exit_ms);
    assert_eq!(
        resolved.show_visibility_toggle,
        defaults.show_visibility_toggle
    );
}

#[test]
fn resolved_config_default_has_expected_values() {
    let config = ResolvedConfig::default();

    assert_eq!(config.alert_dismiss_ms, 5000);
    assert_eq!(config.alert_exit_ms, 500);
    assert_eq!(config.toast_duration_ms, 3000);
    assert!(config.show_visibility_toggle);
    assert!(config
        .log_file_path
        .to_string_lossy()
        .ends_with("termlogin.log"));
}

#[test]
fn form_config_carries_resolved_timings() {
    let config = ResolvedConfig {
        alert_dismiss_ms: 1234,
        alert_exit_ms: 56,
        toast_duration_ms: 789,
        show_visibility_toggle: false,
        log_file_path: default_log_path(),
    };

    let form = config.form_config();
    assert_eq!(form.alert_timings.dismiss_after, Duration::from_millis(1234));
    assert_eq!(form.alert_timings.exit_duration, Duration::from_millis(56));
    assert_eq!(form.toast_duration, Duration::from_millis(789));
    assert!(!form.show_visibility_toggle);
}

// ===== Env overrides =====

/// RAII guard to ensure environment variable cleanup even under test parallelism.
struct EnvGuard(&'static str);

impl EnvGuard {
    fn new(name: &'static str) -> Self {
        env::remove_var(name);
        EnvGuard(name)
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        env::remove_var(self.0);
    }
}

#[test]
#[serial(termlogin_env)]
fn apply_env_overrides_respects_alert_dismiss_var() {
    let _guard = EnvGuard::new(ALERT_DISMISS_ENV_VAR);
    env::set_var(ALERT_DISMISS_ENV_VAR, "750");

    let result = apply_env_overrides(ResolvedConfig::default());

    assert_eq!(result.alert_dismiss_ms, 750);
}

#[test]
#[serial(termlogin_env)]
fn apply_env_overrides_ignores_unparseable_value() {
    let _guard = EnvGuard::new(ALERT_DISMISS_ENV_VAR);
    env::set_var(ALERT_DISMISS_ENV_VAR, "soon");

    let base = ResolvedConfig::default();
    let result = apply_env_overrides(base.clone());

    assert_eq!(result, base, "Invalid env value should leave config unchanged");
}

#[test]
#[serial(termlogin_env)]
fn apply_env_overrides_no_change_when_env_var_not_set() {
    let _guard = EnvGuard::new(ALERT_DISMISS_ENV_VAR);

    let base = ResolvedConfig::default();
    assert_eq!(apply_env_overrides(base.clone()), base);
}

// ===== CLI overrides =====

#[test]
fn cli_toggle_override_wins() {
    let config = apply_cli_overrides(ResolvedConfig::default(), Some(false));
    assert!(!config.show_visibility_toggle);
}

#[test]
fn cli_without_override_keeps_config() {
    let base = ResolvedConfig {
        show_visibility_toggle: false,
        ..ResolvedConfig::default()
    };
    assert_eq!(apply_cli_overrides(base.clone(), None), base);
}

// ===== Precedence =====

#[test]
#[serial(termlogin_config)]
fn load_config_with_precedence_prefers_explicit_path() {
    let _guard = EnvGuard::new(CONFIG_ENV_VAR);

    let temp_dir = env::temp_dir();
    let explicit_path = temp_dir.join("termlogin_explicit.toml");
    fs::write(&explicit_path, "alert_exit_ms = 1").expect("Failed to write explicit config");

    let env_path = temp_dir.join("termlogin_env.toml");
    fs::write(&env_path, "alert_exit_ms = 2").expect("Failed to write env config");
    env::set_var(CONFIG_ENV_VAR, &env_path);

    let config = load_config_with_precedence(Some(explicit_path.clone()))
        .unwrap()
        .unwrap();
    assert_eq!(
        config.alert_exit_ms,
        Some(1),
        "Should use explicit path, not TERMLOGIN_CONFIG"
    );

    fs::remove_file(explicit_path).ok();
    fs::remove_file(env_path).ok();
}

#[test]
#[serial(termlogin_config)]
fn load_config_with_precedence_uses_env_var_when_no_explicit_path() {
    let _guard = EnvGuard::new(CONFIG_ENV_VAR);

    let env_path = env::temp_dir().join("termlogin_env_only.toml");
    fs::write(&env_path, "toast_duration_ms = 99").expect("Failed to write env config");
    env::set_var(CONFIG_ENV_VAR, &env_path);

    let config = load_config_with_precedence(None).unwrap().unwrap();
    assert_eq!(config.toast_duration_ms, Some(99));

    fs::remove_file(env_path).ok();
}

#[test]
#[serial(termlogin_config)]
fn load_config_with_precedence_missing_env_file_is_not_an_error() {
    let _guard = EnvGuard::new(CONFIG_ENV_VAR);
    env::set_var(CONFIG_ENV_VAR, "/nonexistent/termlogin/config.toml");

    assert_eq!(load_config_with_precedence(None), Ok(None));
}
