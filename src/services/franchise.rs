use crate::domain::models::{PlayerRecord, TeamOverlap};
use std::collections::HashSet;

/// Maps a historical team code to the franchise that plays today.
/// Unknown codes are returned unchanged.
pub fn modern_team(code: &str) -> &str {
    match code {
        "SEA" => "OKC",
        "NJN" | "NYN" => "BKN",
        "SDC" | "BUF" => "LAC",
        "KCK" | "KCO" | "CIN" | "ROC" => "SAC",
        "SYR" => "PHI",
        "SFW" | "PHL" => "GSW",
        "STL" | "MLH" | "TRI" => "ATL",
        "FTW" => "DET",
        "MNL" => "LAL",
        "NOH" | "NOK" => "NOP",
        "CHH" => "CHA",
        "WSB" | "CAP" | "BAL" | "CHZ" | "CHP" => "WAS",
        "SDR" => "HOU",
        "NOJ" => "UTA",
        "VAN" => "MEM",
        other => other,
    }
}

pub fn team_overlaps(players: &[PlayerRecord]) -> Vec<TeamOverlap> {
    let mut out = Vec::new();
    for p in players {
        let modern: Vec<String> = p.teams.iter().map(|t| modern_team(t).to_string()).collect();
        let duplicates: Vec<String> = {
            let mut seen = HashSet::new();
            modern
                .iter()
                .filter(|t| !seen.insert(t.as_str()))
                .cloned()
                .collect()
        };
        if !duplicates.is_empty() {
            out.push(TeamOverlap {
                id: p.id.clone(),
                name: p.name.clone(),
                original: p.teams.clone(),
                modern,
                duplicates,
            });
        }
    }
    out
}
