use crate::cli::CheckKind;
use crate::domain::models::{AuditConfig, AuditSummary, CheckItem, PlayerRecord};
use crate::services::checks::{
    active_stats, duplicate_ids_distinct, missing_stats, missing_teams, suspicious_zero_stats,
    unverified_active,
};
use crate::services::consistency::consistency_issues;
use crate::services::franchise::team_overlaps;
use crate::services::index::{index_report, known_active_mismatches};
use crate::services::storage::Dataset;
use tracing::debug;

pub fn check_findings(kind: CheckKind, players: &[PlayerRecord], config: &AuditConfig) -> usize {
    match kind {
        CheckKind::Duplicates => duplicate_ids_distinct(players).len(),
        CheckKind::MissingTeams => missing_teams(players).len(),
        CheckKind::ZeroStats => suspicious_zero_stats(players).len(),
        CheckKind::UnverifiedActive => unverified_active(players).len(),
        CheckKind::MissingStats => missing_stats(players).missing,
        CheckKind::ActiveStats => active_stats(players).missing_unverified.len(),
        CheckKind::Consistency => consistency_issues(players).len(),
        CheckKind::TeamOverlaps => team_overlaps(players).len(),
        CheckKind::Index => {
            let r = index_report(players);
            (r.players - r.id_index_size) + r.untrimmed_names.len()
        }
        CheckKind::KnownActive => {
            known_active_mismatches(players, &config.checks.known_active).len()
        }
    }
}

fn recommendation(kind: CheckKind) -> &'static str {
    match kind {
        CheckKind::Duplicates => "Run `roster-audit duplicates` and give every duplicated player a unique id.",
        CheckKind::MissingTeams => "Run `roster-audit missing-teams` and fill in team history for the listed players.",
        CheckKind::ZeroStats => "Run `roster-audit zero-stats` and backfill the career averages entered as 0.",
        CheckKind::UnverifiedActive => "Run `roster-audit unverified-active`, verify the stats and import them with `roster-audit apply-stats`.",
        CheckKind::MissingStats => "Run `roster-audit missing-stats` and fetch career averages for the listed players.",
        CheckKind::ActiveStats => "Run `roster-audit active-stats`; active players without stats need a verified batch or `careerStatsVerified` for true zeros.",
        CheckKind::Consistency => "Run `roster-audit consistency` and resolve the per-player issues.",
        CheckKind::TeamOverlaps => "Run `roster-audit team-overlaps` and check team histories that repeat a franchise.",
        CheckKind::Index => "Run `roster-audit index`; lookups lose players when ids repeat or names carry whitespace.",
        CheckKind::KnownActive => "Run `roster-audit known-active` and set `active` for the listed players.",
    }
}

pub fn build_audit_summary(
    dataset: &Dataset,
    config: &AuditConfig,
    skip: &[CheckKind],
) -> AuditSummary {
    let mut checks = Vec::new();
    let mut recommendations = Vec::new();

    for kind in CheckKind::ALL {
        if skip.contains(&kind) || config.checks.disabled.contains(&kind) {
            continue;
        }
        let findings = check_findings(kind, &dataset.players, config);
        debug!(check = kind.as_str(), findings, "check finished");
        if findings > 0 {
            recommendations.push(recommendation(kind).to_string());
        }
        checks.push(CheckItem {
            name: kind.as_str().to_string(),
            findings,
            status: if findings == 0 { "ok" } else { "failed" }.to_string(),
        });
    }

    let overall = if checks.iter().all(|c| c.findings == 0) {
        "ok"
    } else {
        "needs_attention"
    }
    .to_string();

    AuditSummary {
        overall,
        dataset: dataset.path.display().to_string(),
        players: dataset.players.len(),
        fingerprint: dataset.fingerprint.clone(),
        checks,
        recommendations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::ChecksConfig;
    use std::path::PathBuf;

    fn dataset(players: Vec<PlayerRecord>) -> Dataset {
        Dataset {
            path: PathBuf::from("lib/players.json"),
            fingerprint: "f".repeat(64),
            players,
        }
    }

    fn clean(id: &str) -> PlayerRecord {
        PlayerRecord {
            id: id.to_string(),
            name: id.to_uppercase(),
            teams: vec!["DEN".to_string()],
            active: Some(Some(true)),
            career_stats_verified: true,
            ppg_career: Some(20.0),
            rpg_career: Some(10.0),
            apg_career: Some(5.0),
            nba_id: Some("203999".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn clean_dataset_is_ok() {
        let summary = build_audit_summary(
            &dataset(vec![clean("a"), clean("b")]),
            &AuditConfig::default(),
            &[],
        );
        assert_eq!(summary.overall, "ok");
        assert_eq!(summary.checks.len(), CheckKind::ALL.len());
        assert!(summary.recommendations.is_empty());
    }

    #[test]
    fn empty_dataset_is_ok() {
        let summary = build_audit_summary(&dataset(vec![]), &AuditConfig::default(), &[]);
        assert_eq!(summary.overall, "ok");
        assert_eq!(summary.players, 0);
        assert!(summary.checks.iter().all(|c| c.findings == 0));
    }

    #[test]
    fn findings_fail_their_check_and_add_a_recommendation() {
        let summary = build_audit_summary(
            &dataset(vec![clean("a"), clean("a")]),
            &AuditConfig::default(),
            &[],
        );
        assert_eq!(summary.overall, "needs_attention");
        let dup = summary.checks.iter().find(|c| c.name == "duplicates").unwrap();
        assert_eq!(dup.findings, 1);
        assert_eq!(dup.status, "failed");
        let index = summary.checks.iter().find(|c| c.name == "index").unwrap();
        assert_eq!(index.findings, 1);
        assert_eq!(summary.recommendations.len(), 2);
    }

    #[test]
    fn duplicates_count_each_repeated_id_once() {
        let players = vec![clean("a"), clean("a"), clean("a"), clean("b")];
        let config = AuditConfig::default();
        assert_eq!(check_findings(CheckKind::Duplicates, &players, &config), 1);
    }

    #[test]
    fn stat_checks_count_missing_and_unverified_players() {
        let mut blank = clean("c");
        blank.ppg_career = None;
        blank.rpg_career = None;
        blank.apg_career = None;
        blank.career_stats_verified = false;
        let players = vec![clean("a"), blank];
        let config = AuditConfig::default();
        assert_eq!(check_findings(CheckKind::MissingStats, &players, &config), 1);
        assert_eq!(check_findings(CheckKind::ActiveStats, &players, &config), 1);
    }

    #[test]
    fn disabled_and_skipped_checks_are_left_out() {
        let config = AuditConfig {
            checks: ChecksConfig {
                disabled: vec![CheckKind::Duplicates],
                known_active: vec![],
            },
            ..Default::default()
        };
        let summary = build_audit_summary(
            &dataset(vec![clean("a"), clean("a")]),
            &config,
            &[CheckKind::Index],
        );
        assert_eq!(summary.overall, "ok");
        assert!(summary
            .checks
            .iter()
            .all(|c| c.name != "duplicates" && c.name != "index"));
    }
}
