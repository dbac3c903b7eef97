use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use footscreen_storage::history::DEFAULT_PAGE_SIZE;

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

const CONFIG_ENV: &str = "FOOTSCREEN_CONFIG";
const BIND_ENV: &str = "FOOTSCREEN_BIND";
const DATA_DIR_ENV: &str = "FOOTSCREEN_DATA_DIR";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    pub bind_addr: SocketAddr,
    pub data_dir: PathBuf,
    /// Rows per history page. Added in v1.
    pub page_size: usize,
    #[serde(default)]
    pub json_logs: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            data_dir: dirs::data_dir()
                .map(|d| d.join("footscreen"))
                .unwrap_or_else(|| PathBuf::from("footscreen-data")),
            page_size: DEFAULT_PAGE_SIZE,
            json_logs: false,
        }
    }
}

pub fn config_path() -> eyre::Result<PathBuf> {
    if let Ok(path) = std::env::var(CONFIG_ENV) {
        return Ok(PathBuf::from(path));
    }
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("footscreen").join("config.json"))
}

/// Load the config from its usual location, writing defaults on first run,
/// then apply environment overrides.
pub fn load_config() -> eyre::Result<ServerConfig> {
    let path = config_path()?;
    if !path.exists() {
        save_config(&path, &ServerConfig::default())?;
    }
    let config = load_from(&path)?;
    apply_overrides(config, |name| std::env::var(name).ok())
}

/// Read and migrate a config file. A missing file yields the defaults.
pub fn load_from(path: &Path) -> eyre::Result<ServerConfig> {
    if !path.exists() {
        tracing::info!(path = %path.display(), "no config file, using defaults");
        return Ok(ServerConfig::default());
    }

    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let config: ServerConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION})"
        ));
    }

    // v0 -> v1: add page_size
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        obj.entry("page_size")
            .or_insert(serde_json::Value::Number(DEFAULT_PAGE_SIZE.into()));
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 -> v1 (added page_size)");
    }

    Ok(json)
}

/// Environment variables win over file values.
pub fn apply_overrides(
    mut config: ServerConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> eyre::Result<ServerConfig> {
    if let Some(bind) = lookup(BIND_ENV) {
        config.bind_addr = bind
            .parse()
            .map_err(|e| eyre::eyre!("invalid {BIND_ENV} '{bind}': {e}"))?;
    }
    if let Some(dir) = lookup(DATA_DIR_ENV) {
        config.data_dir = PathBuf::from(dir);
    }
    Ok(config)
}

pub fn save_config(path: &Path, config: &ServerConfig) -> eyre::Result<()> {
    let dir = path
        .parent()
        .ok_or_else(|| eyre::eyre!("config path {} has no parent", path.display()))?;
    std::fs::create_dir_all(dir)?;

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let json = serde_json::to_string_pretty(&stamped)?;

    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;
    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}
