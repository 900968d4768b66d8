use crate::*;
use tracing::{info, warn};

pub fn handle_maintenance_commands(cli: &Cli, dataset: &Dataset) -> anyhow::Result<bool> {
    let Commands::ApplyStats { batch } = &cli.command else {
        return Ok(false);
    };

    let updates = load_stat_batch(batch)?;
    let records = load_player_documents(&dataset.path)?;
    let (records, report) = apply_stat_batch(&records, &updates);
    for name in &report.not_found {
        warn!(player = %name, "player not found in dataset");
    }
    save_player_documents(&dataset.path, &records)?;
    info!(applied = report.applied, not_found = report.not_found.len(), "applied stat batch");
    audit(
        "apply_stats",
        serde_json::json!({
            "batch": batch.to_string_lossy(),
            "applied": report.applied,
            "not_found": report.not_found,
            "previous_fingerprint": dataset.fingerprint,
        }),
    );

    if cli.json {
        print_json(true, &report)?;
    } else {
        for name in &report.not_found {
            println!("Player not found: {}", name);
        }
        println!("Applied updates for {} players.", report.applied);
    }

    Ok(true)
}
