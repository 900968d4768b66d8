//! The dataset invariants that must hold before `players.json` backs the
//! game. Every check borrows the collection, makes one pass and returns the
//! offending ids or names in input order.

use crate::domain::models::{
    ActiveStatsReport, DuplicateReport, NameListReport, PlayerRecord, StatCoverageReport,
};
use std::collections::HashMap;

/// Ids seen more than once. Every repeat occurrence appends the id again, so
/// `[A, B, A, C, A]` yields `[A, A]`.
pub fn duplicate_ids(players: &[PlayerRecord]) -> Vec<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut out = Vec::new();
    for p in players {
        let seen = counts.entry(p.id.as_str()).or_insert(0);
        if *seen > 0 {
            out.push(p.id.clone());
        }
        *seen += 1;
    }
    out
}

/// Each duplicated id once, at the position of its first repeat.
pub fn duplicate_ids_distinct(players: &[PlayerRecord]) -> Vec<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut out = Vec::new();
    for p in players {
        let seen = counts.entry(p.id.as_str()).or_insert(0);
        if *seen == 1 {
            out.push(p.id.clone());
        }
        *seen += 1;
    }
    out
}

pub fn missing_teams(players: &[PlayerRecord]) -> Vec<String> {
    players
        .iter()
        .filter(|p| p.teams.is_empty())
        .map(|p| p.name.clone())
        .collect()
}

fn is_zero(stat: Option<f64>) -> bool {
    stat == Some(0.0)
}

/// Active or all-star players with a career average of exactly `0`.
/// An absent stat is not zero.
pub fn suspicious_zero_stats(players: &[PlayerRecord]) -> Vec<String> {
    players
        .iter()
        .filter(|p| {
            (is_zero(p.ppg_career) || is_zero(p.rpg_career) || is_zero(p.apg_career))
                && (p.is_active() || p.all_star)
        })
        .map(|p| p.name.clone())
        .collect()
}

pub fn unverified_active(players: &[PlayerRecord]) -> Vec<String> {
    players
        .iter()
        .filter(|p| p.is_active() && !p.career_stats_verified)
        .map(|p| p.name.clone())
        .collect()
}

fn has_headline_stats(p: &PlayerRecord) -> bool {
    p.ppg_career.is_some() && p.rpg_career.is_some() && p.apg_career.is_some()
}

/// Players with any of ppg/rpg/apg absent or `null`, plus coverage.
pub fn missing_stats(players: &[PlayerRecord]) -> StatCoverageReport {
    let names: Vec<String> = players
        .iter()
        .filter(|p| !has_headline_stats(p))
        .map(|p| p.name.clone())
        .collect();
    let coverage = if players.is_empty() {
        100.0
    } else {
        (players.len() - names.len()) as f64 / players.len() as f64 * 100.0
    };
    StatCoverageReport {
        players: players.len(),
        missing: names.len(),
        coverage,
        names,
    }
}

fn has_positive_stat(p: &PlayerRecord) -> bool {
    [p.ppg_career, p.rpg_career, p.apg_career]
        .iter()
        .any(|s| s.map(|v| v > 0.0).unwrap_or(false))
}

/// Active players without a single positive career average, split by
/// whether the zeros were verified (rookies, no minutes) or never filled in.
pub fn active_stats(players: &[PlayerRecord]) -> ActiveStatsReport {
    let active: Vec<&PlayerRecord> = players.iter().filter(|p| p.is_active()).collect();
    let (verified_zero, missing_unverified): (Vec<&PlayerRecord>, Vec<&PlayerRecord>) = active
        .iter()
        .copied()
        .filter(|p| !has_positive_stat(p))
        .partition(|p| p.career_stats_verified);
    ActiveStatsReport {
        active: active.len(),
        with_stats: active.len() - verified_zero.len() - missing_unverified.len(),
        verified_zero: verified_zero.iter().map(|p| p.name.clone()).collect(),
        missing_unverified: missing_unverified.iter().map(|p| p.name.clone()).collect(),
    }
}

pub fn duplicate_report(players: &[PlayerRecord], distinct: bool) -> DuplicateReport {
    let duplicates = if distinct {
        duplicate_ids_distinct(players)
    } else {
        duplicate_ids(players)
    };
    DuplicateReport {
        total: duplicates.len(),
        duplicates,
    }
}

pub fn name_list(names: Vec<String>) -> NameListReport {
    NameListReport {
        count: names.len(),
        names,
    }
}
