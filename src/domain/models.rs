use crate::cli::CheckKind;
use serde::{Deserialize, Deserializer, Serialize};

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Keeps an explicit `null` apart from an absent key: absent is `None`
/// (via `default`), `null` is `Some(None)`.
fn explicit_null<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// `nbaId` is written as a string by some tools and as an integer by others.
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(Option::<RawId>::deserialize(deserializer)?.map(|raw| match raw {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    }))
}

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// One entry of `players.json`.
///
/// Absent fields fall back to empty/false, except `active` and the career
/// stats: those stay `None` so "missing" never reads as an explicit `false`
/// or `0`. `active` also tells an absent key from an explicit `null`.
/// Unknown fields are carried in `extra`.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub teams: Vec<String>,
    #[serde(
        default,
        deserialize_with = "explicit_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub active: Option<Option<bool>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub all_star: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub career_stats_verified: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ppg_career: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rpg_career: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apg_career: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spg_career: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bpg_career: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub champion: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub champion_years: Vec<String>,
    #[serde(
        default,
        deserialize_with = "string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub nba_id: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl PlayerRecord {
    /// `active` with absent and `null` both read as unknown.
    pub fn active_flag(&self) -> Option<bool> {
        self.active.flatten()
    }

    pub fn is_active(&self) -> bool {
        self.active_flag() == Some(true)
    }

    /// True when the key is missing altogether; an explicit `null` is present.
    pub fn active_absent(&self) -> bool {
        self.active.is_none()
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct AuditConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub checks: ChecksConfig,
}

#[derive(Debug, Deserialize, Default)]
pub struct GeneralConfig {
    #[serde(default)]
    pub players_path: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct ChecksConfig {
    #[serde(default)]
    pub disabled: Vec<CheckKind>,
    /// Names that must be marked active in the dataset.
    #[serde(default)]
    pub known_active: Vec<String>,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct DuplicateReport {
    pub duplicates: Vec<String>,
    pub total: usize,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct NameListReport {
    pub count: usize,
    pub names: Vec<String>,
}

/// Players missing any of the three headline career averages.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct StatCoverageReport {
    pub players: usize,
    pub missing: usize,
    /// Percentage of players with all three averages, `100.0` when empty.
    pub coverage: f64,
    pub names: Vec<String>,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ActiveStatsReport {
    pub active: usize,
    pub with_stats: usize,
    pub verified_zero: Vec<String>,
    pub missing_unverified: Vec<String>,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ConsistencyIssue {
    pub id: String,
    pub name: String,
    pub issues: Vec<String>,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct IssueCount {
    pub issue: String,
    pub count: usize,
}

#[derive(Serialize)]
pub struct ConsistencyReport {
    pub players_with_issues: usize,
    pub issues: Vec<ConsistencyIssue>,
    pub summary: Vec<IssueCount>,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct TeamOverlap {
    pub id: String,
    pub name: String,
    pub original: Vec<String>,
    pub modern: Vec<String>,
    pub duplicates: Vec<String>,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct IndexReport {
    pub players: usize,
    pub id_index_size: usize,
    pub name_index_size: usize,
    pub id_index_consistent: bool,
    pub untrimmed_names: Vec<String>,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct KnownActiveIssue {
    pub name: String,
    pub id: String,
    pub issue: String,
    pub current_value: String,
}

#[derive(Serialize, Clone, Debug)]
pub struct CheckItem {
    pub name: String,
    pub findings: usize,
    pub status: String,
}

#[derive(Serialize)]
pub struct AuditSummary {
    pub overall: String,
    pub dataset: String,
    pub players: usize,
    pub fingerprint: String,
    pub checks: Vec<CheckItem>,
    pub recommendations: Vec<String>,
}

/// One row of a stat batch file (`temp/batch_update.json`).
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct StatUpdate {
    pub name: String,
    pub ppg: f64,
    pub rpg: f64,
    pub apg: f64,
    #[serde(default)]
    pub spg: Option<f64>,
    #[serde(default)]
    pub bpg: Option<f64>,
}

#[derive(Serialize, Debug, PartialEq)]
pub struct ApplyReport {
    pub applied: usize,
    pub not_found: Vec<String>,
}
