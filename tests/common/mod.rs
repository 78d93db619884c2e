use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use chrono::{Days, Utc};
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const CONFIG_ENV: &[&str] = &[
    "ZEBEDEE_ROOT",
    "CHECK_PUBLISHED_PREVIOUS_DAYS",
    "SLACK_ENABLED",
    "SLACK_API_TOKEN",
    "SLACK_USER_NAME",
    "SLACK_ALARM_CHANNEL",
    "SLACK_ALARM_EMOJI",
];

pub struct TestEnv {
    _tmp: TempDir,
    pub root: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let root = tmp.path().join("zebedee");
        fs::create_dir_all(&root).expect("create zebedee root");
        Self { _tmp: tmp, root }
    }

    /// Root with empty `master` and `publish-log` trees.
    pub fn with_layout() -> Self {
        let env = Self::new();
        env.add_dirs(&["master", "publish-log"]);
        env
    }

    pub fn add_dirs(&self, dirs: &[&str]) {
        for dir in dirs {
            fs::create_dir_all(self.root.join(dir)).expect("create fixture dir");
        }
    }

    pub fn add_file(&self, name: &str, body: &str) {
        fs::write(self.root.join(name), body).expect("write fixture file");
    }

    /// Publishes `dirs` under a new collection and writes its metadata.
    pub fn add_collection(&self, id: &str, dirs: &[&str], metadata: Value) {
        for dir in dirs {
            self.add_dirs(&[&format!("publish-log/{id}/{dir}")]);
        }
        self.add_dirs(&[&format!("publish-log/{id}")]);
        self.add_file(&format!("publish-log/{id}.json"), &metadata.to_string());
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("integrity-checker");
        for key in CONFIG_ENV {
            cmd.env_remove(key);
        }
        cmd.env("RUST_LOG", "warn")
            .arg("--zebedee-root")
            .arg(self.root.to_str().expect("root path utf8"));
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
}

/// Collection identifier published `days_ago` days before today (UTC).
///
/// The binary reads the clock again when it runs, so a test crossing UTC
/// midnight sees every fixture one day older. Windows asserted against
/// should leave at least a day of margin on both sides of `days_ago`.
pub fn collection_id(days_ago: u64, time: &str, slug: &str) -> String {
    let day = Utc::now()
        .date_naive()
        .checked_sub_days(Days::new(days_ago))
        .expect("date in range");
    format!("{}-{}-{}", day.format("%Y-%m-%d"), time, slug)
}
