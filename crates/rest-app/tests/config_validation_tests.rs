use std::env;
use std::path::PathBuf;
use std::sync::Mutex;

use sun2000_rest::ServiceConfig;

static ENV_LOCK: Mutex<()> = Mutex::new(());

#[test]
fn toml_config_validates() {
    let _guard = ENV_LOCK.lock().expect("env lock");
    env::set_var("SUN2000_REST_CONFIG", fixture_path("config-valid.toml"));

    let config = ServiceConfig::load().expect("load config");
    config.validate().expect("validate config");
    assert_eq!(config.listen_addr, "127.0.0.1:8080");
    assert_eq!(config.metrics_addr.as_deref(), Some("127.0.0.1:9100"));
    assert_eq!(config.inverter.host, "192.168.200.1");
    assert_eq!(config.inverter.timeout_ms, 3000);
    assert_eq!(config.accepted_api_keys, vec!["12345", "98765"]);
    assert_eq!(config.log_level, "debug");

    env::remove_var("SUN2000_REST_CONFIG");
}

#[test]
fn json_config_validates() {
    let _guard = ENV_LOCK.lock().expect("env lock");
    env::set_var("SUN2000_REST_CONFIG", fixture_path("config-valid.json"));

    let config = ServiceConfig::load().expect("load config");
    config.validate().expect("validate config");
    assert_eq!(config.inverter.port, 502);
    assert_eq!(config.inverter.unit_id, 1);
    assert_eq!(config.accepted_api_keys, vec!["12345", "98765"]);
    assert_eq!(config.log_level, "warn");

    env::remove_var("SUN2000_REST_CONFIG");
}

#[test]
fn invalid_config_fails_validation() {
    let _guard = ENV_LOCK.lock().expect("env lock");
    env::set_var("SUN2000_REST_CONFIG", fixture_path("config-invalid.toml"));

    let config = ServiceConfig::load().expect("load config");
    assert!(config.validate().is_err());

    env::remove_var("SUN2000_REST_CONFIG");
}

#[test]
fn environment_overrides_the_file() {
    let _guard = ENV_LOCK.lock().expect("env lock");
    env::set_var("SUN2000_REST_CONFIG", fixture_path("config-valid.toml"));
    env::set_var("INVERTER_HOST", "10.0.0.7");
    env::set_var("INVERTER_PORT", "502");
    env::set_var("ACCEPTED_API_KEYS", "abc,def");

    let config = ServiceConfig::load().expect("load config");
    assert_eq!(config.inverter.host, "10.0.0.7");
    assert_eq!(config.inverter.port, 502);
    assert_eq!(config.accepted_api_keys, vec!["abc", "def"]);

    env::remove_var("INVERTER_HOST");
    env::remove_var("INVERTER_PORT");
    env::remove_var("ACCEPTED_API_KEYS");
    env::remove_var("SUN2000_REST_CONFIG");
}

#[test]
fn unparsable_numeric_override_is_an_error() {
    let _guard = ENV_LOCK.lock().expect("env lock");
    env::set_var("SUN2000_REST_CONFIG", fixture_path("config-valid.toml"));
    env::set_var("INVERTER_PORT", "abc");

    let err = ServiceConfig::load().expect_err("port must not fall back to the default");
    assert!(format!("{err:#}").contains("INVERTER_PORT"));

    env::remove_var("INVERTER_PORT");
    env::remove_var("SUN2000_REST_CONFIG");
}

#[test]
fn missing_config_file_is_an_error() {
    let _guard = ENV_LOCK.lock().expect("env lock");
    assert!(ServiceConfig::load_with_path(Some(fixture_path("does-not-exist.toml"))).is_err());
}

fn fixture_path(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    path.to_string_lossy().to_string()
}
