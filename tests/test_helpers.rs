#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const CALENDAR: &str = r#"{
    "2025-01-06": [
        {
            "id": "epiphany",
            "rank": "SOLEMNITY",
            "seasons": ["CHRISTMAS_TIME"],
            "colors": ["WHITE"],
            "cycles": {"sundayCycle": "YEAR_C", "weekdayCycle": "YEAR_1"},
            "citations": ["Matthew 2:1", "BadCitation", "Isaiah 60:1"]
        }
    ],
    "2025-01-07": []
}"#;

pub const DRC: &str = r#"{"books":[
    {"name":"Matthew","chapters":[{"chapter":2,"verses":[
        {"verse":1,"text":"When Jesus therefore was born in Bethlehem of Juda"}]}]},
    {"name":"Isaias","chapters":[{"chapter":60,"verses":[
        {"verse":1,"text":"Arise, be enlightened, O Jerusalem"}]}]}
]}"#;

pub const VULGATE: &str = r#"{"books":[
    {"name":"Matthew","chapters":[{"chapter":2,"verses":[
        {"verse":1,"text":"Cum ergo natus esset Jesus in Bethlehem Juda"}]}]}
]}"#;

/// A temporary directory holding a calendar and two translations.
pub struct Fixture {
    pub dir: TempDir,
}

impl Fixture {
    pub fn new() -> Self {
        Self::with_calendar(CALENDAR)
    }

    pub fn with_calendar(calendar: &str) -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        fs::write(dir.path().join("ordo.json"), calendar).expect("failed to write calendar");
        let bibles = dir.path().join("bibles");
        fs::create_dir_all(&bibles).expect("failed to create bible dir");
        fs::write(bibles.join("DRC.json"), DRC).expect("failed to write DRC");
        fs::write(bibles.join("Vulgate.json"), VULGATE).expect("failed to write Vulgate");
        Fixture { dir }
    }

    pub fn calendar_path(&self) -> PathBuf {
        self.dir.path().join("ordo.json")
    }

    pub fn bible_dir(&self) -> PathBuf {
        self.dir.path().join("bibles")
    }

    pub fn config(&self) -> ordo::Config {
        ordo::Config {
            calendar_path: self.calendar_path(),
            bible_dir: self.bible_dir(),
            translations: vec!["DRC".to_string(), "Vulgate".to_string()],
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

/// Creates a `Command` for the `ordo` binary with a clean environment.
pub fn base_ordo_command() -> Command {
    let mut cmd = Command::cargo_bin("ordo").expect("ordo binary not built");
    cmd.env_clear();
    if let Ok(path) = std::env::var("PATH") {
        cmd.env("PATH", path);
    }
    if let Ok(tmpdir) = std::env::var("TMPDIR") {
        cmd.env("TMPDIR", tmpdir);
    }
    cmd
}

/// Creates a `Command` for the `ordo` binary pointed at `fixture`'s datasets.
pub fn ordo_command(fixture: &Fixture) -> Command {
    let mut cmd = base_ordo_command();
    cmd.env("ORDO_CALENDAR_PATH", fixture.calendar_path())
        .env("ORDO_BIBLE_DIR", fixture.bible_dir())
        .env("ORDO_TRANSLATIONS", "DRC,Vulgate");
    cmd
}
