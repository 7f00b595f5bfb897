use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use stroke_core::Coercion;

/// Version written by this build. Older files are upgraded step by step
/// through [`UPGRADES`].
const CURRENT_VERSION: u32 = 1;

const DEFAULT_LOG_FILTER: &str = "info";

const APP_DIR: &str = "com.strokealert.desk";
const FILE_NAME: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeskConfig {
    /// 0 for files written before versioning.
    #[serde(default)]
    pub config_version: u32,
    /// Handling of malformed score text. Since v1.
    #[serde(default)]
    pub coercion: Coercion,
    /// Log filter for when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            coercion: Coercion::default(),
            log_filter: default_log_filter(),
        }
    }
}

fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

/// A config as read from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedConfig {
    pub config: DeskConfig,
    /// Version the file was upgraded from, if it was older than this build.
    /// Config is read before logging is set up, so the caller logs this.
    pub migrated_from: Option<u32>,
}

/// Upgrade step from version `n` to `n + 1`, indexed by `n`.
type Upgrade = fn(&mut Map<String, Value>);

const UPGRADES: [Upgrade; CURRENT_VERSION as usize] = [add_coercion];

/// v0 had only `log_filter`. Files from then keep the lenient scoring they
/// always had.
fn add_coercion(obj: &mut Map<String, Value>) {
    obj.entry("coercion")
        .or_insert_with(|| Value::String("coerce".to_string()));
}

pub fn config_path() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join(APP_DIR).join(FILE_NAME))
}

/// Read the config file. A missing file yields the defaults.
pub fn load_config() -> eyre::Result<LoadedConfig> {
    let path = config_path()?;
    if !path.exists() {
        return Ok(LoadedConfig {
            config: DeskConfig::default(),
            migrated_from: None,
        });
    }
    let contents = std::fs::read_to_string(&path)
        .map_err(|e| eyre::eyre!("cannot read {}: {e}", path.display()))?;
    parse_config(&contents)
}

/// Parse config JSON of any supported version.
pub fn parse_config(contents: &str) -> eyre::Result<LoadedConfig> {
    let mut json: Value = serde_json::from_str(contents)?;
    let obj = json
        .as_object_mut()
        .ok_or_else(|| eyre::eyre!("config must be a JSON object"))?;

    let version = obj
        .get("config_version")
        .and_then(Value::as_u64)
        .unwrap_or(0);
    let version = u32::try_from(version).unwrap_or(u32::MAX);
    if version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {version} is not supported (this build reads up to {CURRENT_VERSION})"
        ));
    }

    for upgrade in &UPGRADES[version as usize..] {
        upgrade(obj);
    }
    obj.insert("config_version".to_string(), Value::from(CURRENT_VERSION));

    let config: DeskConfig = serde_json::from_value(json)?;
    Ok(LoadedConfig {
        config,
        migrated_from: (version < CURRENT_VERSION).then_some(version),
    })
}

/// Write `config` at the current version and return where it went.
pub fn save_config(config: &DeskConfig) -> eyre::Result<PathBuf> {
    let path = config_path()?;
    let dir = path
        .parent()
        .ok_or_else(|| eyre::eyre!("config path has no parent: {}", path.display()))?;
    std::fs::create_dir_all(dir)?;

    let config = DeskConfig {
        config_version: CURRENT_VERSION,
        ..config.clone()
    };
    let json = serde_json::to_string_pretty(&config)?;

    // stage then rename
    let staging = path.with_extension("json.tmp");
    std::fs::write(&staging, json)?;
    std::fs::rename(&staging, &path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(path)
}
