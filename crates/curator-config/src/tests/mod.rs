use super::*;

#[test]
fn embedded_defaults_parse() {
    let config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
    assert_eq!(config.api.base_url.as_deref(), Some("https://admin.delgo.pet/api"));
    assert_eq!(config.api.timeout_ms, Some(10_000));
    assert_eq!(config.ui.tick_rate_ms, Some(250));
    assert_eq!(config.ui.prefetch_rows, Some(2));
}

#[test]
fn accessors_fall_back_when_unset() {
    let config = Config::default();
    assert_eq!(config.base_url(), "https://admin.delgo.pet/api");
    assert_eq!(config.request_timeout(), Duration::from_millis(10_000));
    assert_eq!(config.tick_rate_ms(), 250);
    assert_eq!(config.prefetch_rows(), 2);
}

#[test]
fn partial_user_config_overrides_only_named_fields() {
    let mut base: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
    let user: Config = toml::from_str(
        r#"
[api]
base_url = "http://localhost:8080/api"
"#,
    )
    .unwrap();
    base.merge(user);

    assert_eq!(base.base_url(), "http://localhost:8080/api");
    assert_eq!(base.tick_rate_ms(), 250);
    assert_eq!(base.request_timeout(), Duration::from_millis(10_000));
}

#[test]
fn ui_overrides_merge_independently() {
    let mut base: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
    let user: Config = toml::from_str(
        r#"
[ui]
tick_rate_ms = 100
prefetch_rows = 4
"#,
    )
    .unwrap();
    base.merge(user);

    assert_eq!(base.tick_rate_ms(), 100);
    assert_eq!(base.prefetch_rows(), 4);
    assert_eq!(base.base_url(), "https://admin.delgo.pet/api");
}

#[test]
fn empty_user_config_keeps_defaults() {
    let mut base: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
    let user: Config = toml::from_str("").unwrap();
    base.merge(user);
    assert_eq!(base.tick_rate_ms(), 250);
    assert_eq!(base.base_url(), "https://admin.delgo.pet/api");
}

#[test]
fn load_from_roundtrips_a_written_file() {
    let dir = std::env::temp_dir().join("curator_config_test");
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("config.toml");

    std::fs::write(&path, "[api]\ntimeout_ms = 2500\n").unwrap();
    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded.api.timeout_ms, Some(2500));
    assert!(loaded.api.base_url.is_none());

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn load_from_rejects_invalid_toml() {
    let dir = std::env::temp_dir().join("curator_config_bad");
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("config.toml");

    std::fs::write(&path, "api = not-toml").unwrap();
    assert!(Config::load_from(&path).is_err());

    let _ = std::fs::remove_dir_all(&dir);
}
