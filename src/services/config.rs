use crate::domain::constants::DEFAULT_PLAYERS_PATH;
use crate::domain::models::AuditConfig;
use std::path::{Path, PathBuf};

fn default_config_path() -> Option<PathBuf> {
    let home = std::env::var("HOME").ok()?;
    Some(PathBuf::from(home).join(".config/roster-audit/config.toml"))
}

/// An explicit `--config` must exist; the default location is optional.
pub fn load_config(explicit: Option<&Path>) -> anyhow::Result<AuditConfig> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => match default_config_path() {
            Some(p) if p.exists() => p,
            _ => return Ok(AuditConfig::default()),
        },
    };
    let raw = std::fs::read_to_string(&path)
        .map_err(|e| anyhow::anyhow!("failed to read config {}: {}", path.display(), e))?;
    Ok(toml::from_str(&raw)?)
}

pub fn resolve_players_path(flag: Option<&Path>, config: &AuditConfig) -> PathBuf {
    flag.map(Path::to_path_buf)
        .or_else(|| config.general.players_path.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_PLAYERS_PATH))
}
