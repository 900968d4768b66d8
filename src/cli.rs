use crate::domain::constants::DEFAULT_STAT_BATCH_PATH;
use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "roster-audit", version, about = "Player dataset integrity auditor")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        help = "Player dataset path (default: config players_path, then lib/players.json)"
    )]
    pub players: Option<PathBuf>,
    #[arg(
        long,
        global = true,
        help = "Config file (default: ~/.config/roster-audit/config.toml)"
    )]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List ids that occur more than once
    Duplicates {
        #[arg(long, default_value_t = false, help = "Report each duplicated id once")]
        distinct: bool,
    },
    /// List players without any team
    MissingTeams,
    /// List active or all-star players with a career stat of exactly zero
    ZeroStats,
    /// List active players whose career stats are not verified
    UnverifiedActive,
    /// Count players missing a career average and report coverage
    MissingStats,
    /// Active players without a positive career average
    ActiveStats,
    /// Per-player consistency issues with a summary by issue type
    Consistency,
    /// Players listed twice for the same franchise after relocation mapping
    TeamOverlaps,
    /// Check the id/name lookup indexes built from the dataset
    Index,
    /// Compare configured known-active names against the dataset
    KnownActive,
    /// Show one player by id or name
    Show { query: String },
    /// Run every enabled check and print a summary
    Check {
        #[arg(long, value_enum, help = "Skip a check (repeatable)")]
        skip: Vec<CheckKind>,
        #[arg(long, default_value_t = false, help = "Exit 1 when any check has findings")]
        strict: bool,
    },
    /// Apply a batch of verified career stats to the dataset
    ApplyStats {
        #[arg(long, default_value = DEFAULT_STAT_BATCH_PATH)]
        batch: PathBuf,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum CheckKind {
    Duplicates,
    MissingTeams,
    ZeroStats,
    UnverifiedActive,
    MissingStats,
    ActiveStats,
    Consistency,
    TeamOverlaps,
    Index,
    KnownActive,
}

impl CheckKind {
    pub const ALL: [CheckKind; 10] = [
        CheckKind::Duplicates,
        CheckKind::MissingTeams,
        CheckKind::ZeroStats,
        CheckKind::UnverifiedActive,
        CheckKind::MissingStats,
        CheckKind::ActiveStats,
        CheckKind::Consistency,
        CheckKind::TeamOverlaps,
        CheckKind::Index,
        CheckKind::KnownActive,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CheckKind::Duplicates => "duplicates",
            CheckKind::MissingTeams => "missing-teams",
            CheckKind::ZeroStats => "zero-stats",
            CheckKind::UnverifiedActive => "unverified-active",
            CheckKind::MissingStats => "missing-stats",
            CheckKind::ActiveStats => "active-stats",
            CheckKind::Consistency => "consistency",
            CheckKind::TeamOverlaps => "team-overlaps",
            CheckKind::Index => "index",
            CheckKind::KnownActive => "known-active",
        }
    }
}
