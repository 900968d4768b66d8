#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub root: PathBuf,
    pub home: PathBuf,
    pub players: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self::with_players(fixture_players())
    }

    pub fn with_players(players: Value) -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let root = tmp.path().to_path_buf();
        let home = root.join("home");
        fs::create_dir_all(&home).expect("create isolated home");

        let players_path = root.join("lib/players.json");
        fs::create_dir_all(players_path.parent().expect("lib dir")).expect("create lib dir");
        fs::write(
            &players_path,
            serde_json::to_string_pretty(&players).expect("serialize players"),
        )
        .expect("write players");

        Self {
            _tmp: tmp,
            root,
            home,
            players: players_path,
        }
    }

    /// Runs from the temp root so the default `lib/players.json` resolves.
    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("roster-audit");
        cmd.env("HOME", &self.home)
            .env_remove("RUST_LOG")
            .current_dir(&self.root);
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn run_text(&self, args: &[&str]) -> String {
        let out = self
            .cmd()
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        String::from_utf8(out).expect("utf8 output")
    }

    pub fn write_config(&self, body: &str) -> PathBuf {
        let path = self.home.join(".config/roster-audit/config.toml");
        fs::create_dir_all(path.parent().expect("config dir")).expect("create config dir");
        fs::write(&path, body).expect("write config");
        path
    }

    pub fn write_file(&self, rel: &str, body: &str) -> PathBuf {
        let path = self.root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent dir");
        }
        fs::write(&path, body).expect("write file");
        path
    }

    pub fn read_players(&self) -> Value {
        read_json(&self.players)
    }
}

pub fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).expect("read json")).expect("parse json")
}

/// Six players covering every check:
/// - `kevin-durant` appears twice (second copy has no teams and no `active`).
/// - Victor Wembanyama (active) and George Mikan (all-star) have a 0.0 average.
/// - Kevin Durant is active but unverified.
/// - "Nene " carries trailing whitespace and no `nbaId`.
/// - LeBron (CLE twice) and Durant (SEA/OKC) repeat a franchise.
pub fn fixture_players() -> Value {
    serde_json::json!([
        {
            "id": "lebron-james",
            "name": "LeBron James",
            "teams": ["CLE", "MIA", "CLE", "LAL"],
            "active": true,
            "allStar": true,
            "careerStatsVerified": true,
            "ppgCareer": 27.1,
            "rpgCareer": 7.5,
            "apgCareer": 7.4,
            "champion": true,
            "championYears": ["2012", "2013", "2016", "2020"],
            "nbaId": "2544",
            "college": "None",
            "country": "USA"
        },
        {
            "id": "kevin-durant",
            "name": "Kevin Durant",
            "teams": ["SEA", "OKC", "GSW", "BKN", "PHX"],
            "active": true,
            "allStar": true,
            "careerStatsVerified": false,
            "ppgCareer": 27.3,
            "rpgCareer": 7.0,
            "apgCareer": 4.4,
            "champion": true,
            "championYears": ["2017", "2018"],
            "nbaId": "201142"
        },
        {
            "id": "victor-wembanyama",
            "name": "Victor Wembanyama",
            "teams": ["SAS"],
            "active": true,
            "allStar": true,
            "careerStatsVerified": true,
            "ppgCareer": 21.4,
            "rpgCareer": 10.6,
            "apgCareer": 0,
            "champion": false,
            "championYears": [],
            "nbaId": "1641705"
        },
        {
            "id": "-nene",
            "name": "Nene ",
            "teams": ["DEN", "WAS", "HOU"],
            "active": false,
            "allStar": false,
            "careerStatsVerified": false,
            "ppgCareer": 11.0,
            "rpgCareer": 6.3,
            "apgCareer": 1.6,
            "champion": false,
            "championYears": []
        },
        {
            "id": "kevin-durant",
            "name": "Kevin Durant (dup)",
            "teams": [],
            "allStar": false,
            "ppgCareer": 0,
            "rpgCareer": 0,
            "apgCareer": 0,
            "champion": false,
            "championYears": []
        },
        {
            "id": "george-mikan",
            "name": "George Mikan",
            "teams": ["MNL"],
            "active": false,
            "allStar": true,
            "careerStatsVerified": false,
            "ppgCareer": 23.1,
            "rpgCareer": 13.4,
            "apgCareer": 0.0,
            "champion": true,
            "championYears": [],
            "nbaId": "600012"
        }
    ])
}
