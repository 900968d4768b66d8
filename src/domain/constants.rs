pub const DEFAULT_PLAYERS_PATH: &str = "lib/players.json";
pub const DEFAULT_STAT_BATCH_PATH: &str = "temp/batch_update.json";

pub const ISSUE_MISSING_ACTIVE: &str = "Missing \"active\" status";
pub const ISSUE_NO_TEAMS: &str = "No teams listed";
pub const ISSUE_CHAMPION_WITHOUT_YEARS: &str = "Marked as champion but no championYears";
pub const ISSUE_YEARS_WITHOUT_CHAMPION: &str = "Has championYears but marked as not champion";
pub const ISSUE_MISSING_NBA_ID: &str = "Missing nbaId";

pub const KNOWN_ACTIVE_MISSING_FIELD: &str = "Missing active field";
pub const KNOWN_ACTIVE_MARKED_RETIRED: &str = "Marked as retired";
