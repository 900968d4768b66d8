use clap::Parser;

mod cli;
mod commands;
mod domain;
mod services;

pub use cli::*;
pub use commands::*;
pub use domain::models::*;
pub use services::batch::*;
pub use services::checks::*;
pub use services::config::*;
pub use services::consistency::*;
pub use services::franchise::*;
pub use services::index::*;
pub use services::output::*;
pub use services::storage::*;
pub use services::summary::*;
pub use services::telemetry::*;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = load_config(cli.config.as_deref())?;
    let players_path = resolve_players_path(cli.players.as_deref(), &config);

    let dataset = load_players(&players_path)?;

    if handle_audit_commands(&cli, &dataset, &config)? {
        return Ok(());
    }
    handle_maintenance_commands(&cli, &dataset)?;
    Ok(())
}
