use crate::domain::constants::{
    ISSUE_CHAMPION_WITHOUT_YEARS, ISSUE_MISSING_ACTIVE, ISSUE_MISSING_NBA_ID, ISSUE_NO_TEAMS,
    ISSUE_YEARS_WITHOUT_CHAMPION,
};
use crate::domain::models::{ConsistencyIssue, ConsistencyReport, IssueCount, PlayerRecord};

fn record_issues(p: &PlayerRecord) -> Vec<String> {
    let mut issues = Vec::new();
    if p.active_absent() {
        issues.push(ISSUE_MISSING_ACTIVE);
    }
    if p.teams.is_empty() {
        issues.push(ISSUE_NO_TEAMS);
    }
    if p.champion && p.champion_years.is_empty() {
        issues.push(ISSUE_CHAMPION_WITHOUT_YEARS);
    }
    if !p.champion && !p.champion_years.is_empty() {
        issues.push(ISSUE_YEARS_WITHOUT_CHAMPION);
    }
    if p.nba_id.as_deref().map(str::is_empty).unwrap_or(true) {
        issues.push(ISSUE_MISSING_NBA_ID);
    }
    issues.into_iter().map(str::to_string).collect()
}

pub fn consistency_issues(players: &[PlayerRecord]) -> Vec<ConsistencyIssue> {
    players
        .iter()
        .filter_map(|p| {
            let issues = record_issues(p);
            (!issues.is_empty()).then(|| ConsistencyIssue {
                id: p.id.clone(),
                name: p.name.clone(),
                issues,
            })
        })
        .collect()
}

/// Occurrences per issue label, in first-seen order.
pub fn issue_summary(issues: &[ConsistencyIssue]) -> Vec<IssueCount> {
    let mut out: Vec<IssueCount> = Vec::new();
    for label in issues.iter().flat_map(|i| i.issues.iter()) {
        match out.iter_mut().find(|c| &c.issue == label) {
            Some(c) => c.count += 1,
            None => out.push(IssueCount {
                issue: label.clone(),
                count: 1,
            }),
        }
    }
    out
}

pub fn consistency_report(players: &[PlayerRecord]) -> ConsistencyReport {
    let issues = consistency_issues(players);
    let summary = issue_summary(&issues);
    ConsistencyReport {
        players_with_issues: issues.len(),
        issues,
        summary,
    }
}
