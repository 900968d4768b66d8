use crate::domain::constants::{KNOWN_ACTIVE_MARKED_RETIRED, KNOWN_ACTIVE_MISSING_FIELD};
use crate::domain::models::{IndexReport, KnownActiveIssue, PlayerRecord};
use std::collections::HashMap;

#[derive(thiserror::Error, Debug)]
pub enum LookupError {
    #[error("player not found: {0}")]
    PlayerNotFound(String),
}

fn name_key(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Id and name lookups keyed the way the game keys them: raw id, raw name
/// (untrimmed, case-sensitive), later records overwriting earlier ones.
pub struct PlayerIndex<'a> {
    by_id: HashMap<&'a str, &'a PlayerRecord>,
    by_name: HashMap<&'a str, &'a PlayerRecord>,
}

impl<'a> PlayerIndex<'a> {
    pub fn build(players: &'a [PlayerRecord]) -> Self {
        let mut by_id = HashMap::with_capacity(players.len());
        let mut by_name = HashMap::with_capacity(players.len());
        for p in players {
            by_id.insert(p.id.as_str(), p);
            by_name.insert(p.name.as_str(), p);
        }
        Self { by_id, by_name }
    }

    pub fn by_id(&self, id: &str) -> Option<&'a PlayerRecord> {
        self.by_id.get(id).copied()
    }

    pub fn by_name(&self, name: &str) -> Option<&'a PlayerRecord> {
        self.by_name.get(name).copied()
    }
}

pub fn index_report(players: &[PlayerRecord]) -> IndexReport {
    let index = PlayerIndex::build(players);
    IndexReport {
        players: players.len(),
        id_index_size: index.by_id.len(),
        name_index_size: index.by_name.len(),
        id_index_consistent: index.by_id.len() == players.len(),
        untrimmed_names: players
            .iter()
            .filter(|p| p.name.trim() != p.name)
            .map(|p| p.name.clone())
            .collect(),
    }
}

/// Exact id, then exact name, then a trimmed case-insensitive name match.
/// The last record wins at every step, as in the index.
pub fn find_player<'a>(
    players: &'a [PlayerRecord],
    query: &str,
) -> Result<&'a PlayerRecord, LookupError> {
    let index = PlayerIndex::build(players);
    let key = name_key(query);
    index
        .by_id(query)
        .or_else(|| index.by_name(query))
        .or_else(|| players.iter().rev().find(|p| name_key(&p.name) == key))
        .ok_or_else(|| LookupError::PlayerNotFound(query.to_string()))
}

pub fn known_active_mismatches(
    players: &[PlayerRecord],
    known_active: &[String],
) -> Vec<KnownActiveIssue> {
    players
        .iter()
        .filter(|p| known_active.iter().any(|k| k.trim() == p.name.trim()))
        .filter_map(|p| {
            let (issue, current_value) = match p.active_flag() {
                None => (KNOWN_ACTIVE_MISSING_FIELD, "undefined"),
                Some(false) => (KNOWN_ACTIVE_MARKED_RETIRED, "false"),
                Some(true) => return None,
            };
            Some(KnownActiveIssue {
                name: p.name.clone(),
                id: p.id.clone(),
                issue: issue.to_string(),
                current_value: current_value.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(id: &str, name: &str, active: Option<bool>) -> PlayerRecord {
        PlayerRecord {
            id: id.to_string(),
            name: name.to_string(),
            active: active.map(Some),
            ..Default::default()
        }
    }

    #[test]
    fn duplicate_ids_shrink_the_id_index() {
        let players = vec![
            player("a", "A", None),
            player("a", "A two", None),
            player("-nene", "Nene ", None),
        ];
        let report = index_report(&players);
        assert_eq!(report.players, 3);
        assert_eq!(report.id_index_size, 2);
        assert_eq!(report.name_index_size, 3);
        assert!(!report.id_index_consistent);
        assert_eq!(report.untrimmed_names, vec!["Nene "]);
    }

    #[test]
    fn lookup_prefers_id_then_trimmed_name() {
        let players = vec![player("-nene", "Nene ", None), player("lbj", "LeBron James", None)];
        assert_eq!(find_player(&players, "-nene").unwrap().name, "Nene ");
        assert_eq!(find_player(&players, "Nene").unwrap().id, "-nene");
        assert_eq!(find_player(&players, " lebron james").unwrap().id, "lbj");
        let err = find_player(&players, "Kobe").unwrap_err();
        assert_eq!(err.to_string(), "player not found: Kobe");
    }

    #[test]
    fn name_index_keys_raw_names() {
        let players = vec![
            player("nene", "Nene", None),
            player("-nene", "Nene ", None),
            player("nene-2", "nene", None),
        ];
        let report = index_report(&players);
        assert_eq!(report.name_index_size, 3);
        let index = PlayerIndex::build(&players);
        assert_eq!(index.by_name("Nene ").unwrap().id, "-nene");
        assert!(index.by_name("NENE").is_none());
        assert_eq!(find_player(&players, "Nene").unwrap().id, "nene");
        assert_eq!(find_player(&players, "NENE").unwrap().id, "nene-2");
    }

    #[test]
    fn later_records_win_in_the_index() {
        let players = vec![player("a", "First", None), player("a", "Second", None)];
        assert_eq!(find_player(&players, "a").unwrap().name, "Second");
    }

    #[test]
    fn known_active_flags_missing_and_retired() {
        let players = vec![
            player("a", "Active", Some(true)),
            player("m", "Missing", None),
            player("r", "Retired ", Some(false)),
            player("o", "Other", Some(false)),
        ];
        let known = vec![
            "Active".to_string(),
            "Missing".to_string(),
            "Retired".to_string(),
        ];
        let issues = known_active_mismatches(&players, &known);
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].issue, KNOWN_ACTIVE_MISSING_FIELD);
        assert_eq!(issues[0].current_value, "undefined");
        assert_eq!(issues[1].id, "r");
        assert_eq!(issues[1].issue, KNOWN_ACTIVE_MARKED_RETIRED);
    }

    #[test]
    fn known_active_treats_null_as_missing() {
        let mut p = player("n", "Null", None);
        p.active = Some(None);
        let issues = known_active_mismatches(&[p], &["Null".to_string()]);
        assert_eq!(issues[0].issue, KNOWN_ACTIVE_MISSING_FIELD);
    }

    #[test]
    fn no_known_names_means_no_issues() {
        assert!(known_active_mismatches(&[player("m", "Missing", None)], &[]).is_empty());
    }
}
