use std::net::SocketAddr;
use std::path::PathBuf;

use footscreen_server::config::{ServerConfig, apply_overrides, load_from, save_config};

#[test]
fn missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = load_from(&dir.path().join("config.json")).unwrap();
    assert_eq!(config, ServerConfig::default());
    assert_eq!(config.page_size, 10);
}

#[test]
fn unversioned_config_is_migrated() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(
        &path,
        r#"{ "bind_addr": "0.0.0.0:9000", "data_dir": "/srv/footscreen" }"#,
    )
    .unwrap();

    let config = load_from(&path).unwrap();
    assert_eq!(config.config_version, 1);
    assert_eq!(config.page_size, 10);
    assert_eq!(config.bind_addr, "0.0.0.0:9000".parse::<SocketAddr>().unwrap());
    assert!(!config.json_logs);
}

#[test]
fn newer_config_version_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(
        &path,
        r#"{ "config_version": 7, "bind_addr": "0.0.0.0:9000", "data_dir": "/srv", "page_size": 5 }"#,
    )
    .unwrap();
    assert!(load_from(&path).is_err());
}

#[test]
fn saved_config_reloads() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.json");
    let config = ServerConfig {
        page_size: 25,
        json_logs: true,
        ..ServerConfig::default()
    };
    save_config(&path, &config).unwrap();

    assert!(!path.with_extension("json.tmp").exists());
    assert_eq!(load_from(&path).unwrap(), config);
}

#[test]
fn environment_overrides_file_values() {
    let config = apply_overrides(ServerConfig::default(), |name| match name {
        "FOOTSCREEN_BIND" => Some("10.0.0.5:7000".to_string()),
        "FOOTSCREEN_DATA_DIR" => Some("/var/lib/footscreen".to_string()),
        _ => None,
    })
    .unwrap();
    assert_eq!(config.bind_addr.port(), 7000);
    assert_eq!(config.data_dir, PathBuf::from("/var/lib/footscreen"));

    let bad = apply_overrides(ServerConfig::default(), |name| {
        (name == "FOOTSCREEN_BIND").then(|| "not-an-address".to_string())
    });
    assert!(bad.is_err());
}
