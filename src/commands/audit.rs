use crate::*;
use tracing::{debug, warn};

const MISSING_PLAYERS_SHOWN: usize = 50;

fn fmt_stat(v: Option<f64>) -> String {
    v.map(|s| s.to_string()).unwrap_or_else(|| "n/a".to_string())
}

pub fn handle_audit_commands(
    cli: &Cli,
    dataset: &Dataset,
    config: &AuditConfig,
) -> anyhow::Result<bool> {
    let players = dataset.players.as_slice();

    match &cli.command {
        Commands::Duplicates { distinct } => {
            let report = duplicate_report(players, *distinct);
            debug!(check = "duplicates", findings = report.total);
            print_one(cli.json, report, |r| {
                let mut text = format!("Duplicate IDs found: {}", json_list(&r.duplicates)?);
                if r.total > 0 {
                    text.push_str(&format!("\nTotal duplicates: {}", r.total));
                }
                Ok(text)
            })?;
        }
        Commands::MissingTeams => {
            let report = name_list(missing_teams(players));
            debug!(check = "missing-teams", findings = report.count);
            print_one(cli.json, report, |r| json_list(&r.names))?;
        }
        Commands::ZeroStats => {
            let report = name_list(suspicious_zero_stats(players));
            debug!(check = "zero-stats", findings = report.count);
            print_one(cli.json, report, |r| Ok(r.names.join(", ")))?;
        }
        Commands::UnverifiedActive => {
            let report = name_list(unverified_active(players));
            debug!(check = "unverified-active", findings = report.count);
            print_one(cli.json, report, |r| {
                let mut text = format!("Found {} unverified active players.", r.count);
                if r.count > 0 {
                    text.push('\n');
                    text.push_str(&json_list(&r.names)?);
                }
                Ok(text)
            })?;
        }
        Commands::MissingStats => {
            let report = missing_stats(players);
            debug!(check = "missing-stats", findings = report.missing);
            print_one(cli.json, report, |r| {
                Ok(format!(
                    "Auditing {} players for missing stats...\nFound {} players with missing stats out of {}.\nCoverage: {:.2}%",
                    r.players, r.missing, r.players, r.coverage
                ))
            })?;
        }
        Commands::ActiveStats => {
            let report = active_stats(players);
            debug!(check = "active-stats", findings = report.missing_unverified.len());
            print_one(cli.json, report, |r| {
                let mut text = format!(
                    "Total Active Players: {}\nPlayers with Stats: {}\nVerified Zero Stats (Rookies/No Play): {}\nMissing Stats & Unverified: {}",
                    r.active,
                    r.with_stats,
                    r.verified_zero.len(),
                    r.missing_unverified.len()
                );
                if !r.missing_unverified.is_empty() {
                    let shown: Vec<&str> = r
                        .missing_unverified
                        .iter()
                        .take(MISSING_PLAYERS_SHOWN)
                        .map(String::as_str)
                        .collect();
                    text.push_str(&format!("\n\nMissing Players:\n{}", shown.join(", ")));
                    if r.missing_unverified.len() > MISSING_PLAYERS_SHOWN {
                        text.push_str(&format!(
                            "\n... and {} more.",
                            r.missing_unverified.len() - MISSING_PLAYERS_SHOWN
                        ));
                    }
                }
                Ok(text)
            })?;
        }
        Commands::Consistency => {
            let report = consistency_report(players);
            debug!(check = "consistency", findings = report.players_with_issues);
            print_one(cli.json, report, |r| {
                if r.issues.is_empty() {
                    return Ok("No data consistency issues found!".to_string());
                }
                let mut text = format!(
                    "Found {} players with data issues.\n\n{}\n\n--- Issue Summary ---",
                    r.players_with_issues,
                    serde_json::to_string_pretty(&r.issues)?
                );
                for c in &r.summary {
                    text.push_str(&format!("\n{}: {}", c.issue, c.count));
                }
                Ok(text)
            })?;
        }
        Commands::TeamOverlaps => {
            let overlaps = team_overlaps(players);
            debug!(check = "team-overlaps", findings = overlaps.len());
            print_out(cli.json, &overlaps, |o| {
                format!(
                    "Player: {} ({})\n  Original Teams: {}\n  Modern Teams:   {}\n  Duplicates:     {}",
                    o.name,
                    o.id,
                    o.original.join(", "),
                    o.modern.join(", "),
                    o.duplicates.join(", ")
                )
            })?;
        }
        Commands::Index => {
            let report = index_report(players);
            if !report.id_index_consistent {
                warn!(
                    players = report.players,
                    id_index_size = report.id_index_size,
                    "id index smaller than dataset"
                );
            }
            print_one(cli.json, report, |r| {
                let mut text = format!(
                    "players: {}\nid_index_size: {}\nname_index_size: {}\nid index: {}",
                    r.players,
                    r.id_index_size,
                    r.name_index_size,
                    if r.id_index_consistent {
                        "consistent"
                    } else {
                        "mismatch (duplicate ids)"
                    }
                );
                for n in &r.untrimmed_names {
                    text.push_str(&format!("\nuntrimmed name: {:?}", n));
                }
                Ok(text)
            })?;
        }
        Commands::KnownActive => {
            let known = &config.checks.known_active;
            if known.is_empty() {
                warn!("no known_active names configured");
            }
            let issues = known_active_mismatches(players, known);
            if cli.json {
                print_json(true, &issues)?;
            } else if issues.is_empty() {
                println!("All {} known active players have correct status!", known.len());
            } else {
                println!("Found {} active players with incorrect status:", issues.len());
                for i in &issues {
                    println!("- {} (id: {}): {}", i.name, i.id, i.issue);
                }
            }
        }
        Commands::Show { query } => {
            let p = find_player(players, query)?;
            if cli.json {
                print_json(true, p)?;
            } else {
                println!("id: {}", p.id);
                println!("name: {}", p.name);
                println!("teams: {}", p.teams.join(", "));
                println!(
                    "active: {}",
                    p.active_flag()
                        .map(|a| a.to_string())
                        .unwrap_or_else(|| "unknown".to_string())
                );
                println!("all_star: {}", p.all_star);
                println!(
                    "career: {} ppg / {} rpg / {} apg ({})",
                    fmt_stat(p.ppg_career),
                    fmt_stat(p.rpg_career),
                    fmt_stat(p.apg_career),
                    if p.career_stats_verified {
                        "verified"
                    } else {
                        "unverified"
                    }
                );
            }
        }
        Commands::Check { skip, strict } => {
            let summary = build_audit_summary(dataset, config, skip);
            let failed = summary.overall != "ok";
            if cli.json {
                print_json(true, &summary)?;
            } else {
                println!("audit: {} ({} players)", summary.overall, summary.players);
                for c in &summary.checks {
                    println!("{}\t{}\t{}", c.name, c.status, c.findings);
                }
                for r in &summary.recommendations {
                    println!("- {}", r);
                }
            }
            if failed && *strict {
                std::process::exit(1);
            }
        }
        Commands::ApplyStats { .. } => return Ok(false),
    }

    Ok(true)
}
