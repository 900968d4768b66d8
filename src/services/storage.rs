use crate::domain::models::{PlayerRecord, StatUpdate};
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(thiserror::Error, Debug)]
pub enum DatasetError {
    #[error("failed to read player dataset {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed player dataset {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Immutable snapshot of `players.json` for the duration of one run.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub path: PathBuf,
    pub fingerprint: String,
    pub players: Vec<PlayerRecord>,
}

pub fn fingerprint(raw: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(raw);
    hex::encode(hasher.finalize())
}

pub fn load_players(path: &Path) -> Result<Dataset, DatasetError> {
    let raw = std::fs::read(path).map_err(|source| DatasetError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let players: Vec<PlayerRecord> =
        serde_json::from_slice(&raw).map_err(|source| DatasetError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    let fingerprint = fingerprint(&raw);
    info!(
        path = %path.display(),
        players = players.len(),
        fingerprint = %fingerprint,
        "loaded player dataset"
    );
    Ok(Dataset {
        path: path.to_path_buf(),
        fingerprint,
        players,
    })
}

/// The dataset as written: key order, `null`s and integer spelling intact,
/// for rewrites that must only touch the keys they own.
pub fn load_player_documents(path: &Path) -> Result<Vec<serde_json::Value>, DatasetError> {
    let raw = std::fs::read(path).map_err(|source| DatasetError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_slice(&raw).map_err(|source| DatasetError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn save_player_documents(path: &Path, records: &[serde_json::Value]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, serde_json::to_string_pretty(records)?)?;
    debug!(path = %path.display(), players = records.len(), "wrote player dataset");
    Ok(())
}

pub fn load_stat_batch(path: &Path) -> anyhow::Result<Vec<StatUpdate>> {
    if !path.exists() {
        anyhow::bail!("stat batch not found: {}", path.display());
    }
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

pub fn audit(action: &str, data: serde_json::Value) {
    let home = match std::env::var("HOME") {
        Ok(h) => h,
        Err(_) => return,
    };
    let path = PathBuf::from(home).join(".config/roster-audit/audit.jsonl");
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    let event = serde_json::json!({
        "ts": unix_now(),
        "action": action,
        "data": data
    });
    let line = format!("{}\n", event);
    let _ = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .and_then(|mut f| std::io::Write::write_all(&mut f, line.as_bytes()));
}

fn unix_now() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let ts = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    ts.to_string()
}
