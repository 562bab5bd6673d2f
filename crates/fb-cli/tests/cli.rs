//! CLI command integration tests.
//! Each test uses a temp directory via FB_DATA_DIR for full isolation.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn fb_cmd(data_dir: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("fb").unwrap();
    cmd.env("FB_DATA_DIR", data_dir.path());
    cmd
}

fn onboard(dir: &TempDir) {
    fb_cmd(dir)
        .args(["onboard", "Dana", "--member", "Sam:child"])
        .assert()
        .success()
        .stdout(predicate::str::contains("welcome, Dana (parent)"))
        .stdout(predicate::str::contains("household: 2 member(s)"));
}

#[test]
fn commands_need_profile() {
    let dir = TempDir::new().unwrap();
    fb_cmd(&dir)
        .args(["log-mood", "happy"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("fb onboard"));
}

#[test]
fn onboard_then_stats() {
    let dir = TempDir::new().unwrap();
    onboard(&dir);

    fb_cmd(&dir)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("user:        Dana (parent)"))
        .stdout(predicate::str::contains("members:     2"))
        .stdout(predicate::str::contains("mood logs:   0"));
}

#[test]
fn onboard_twice_fails() {
    let dir = TempDir::new().unwrap();
    onboard(&dir);
    fb_cmd(&dir).args(["onboard", "Dana"]).assert().failure();
}

#[test]
fn log_mood_scores_note_and_suggests() {
    let dir = TempDir::new().unwrap();
    onboard(&dir);

    fb_cmd(&dir)
        .args(["log-mood", "happy", "--note", "a great fun day"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sentiment: positive"))
        .stdout(predicate::str::contains(
            "Keep up the positive energy! Share your happiness with family.",
        ));

    fb_cmd(&dir)
        .args(["log-mood", "sad", "--member", "sam"])
        .assert()
        .success()
        .stdout(predicate::str::contains("for Sam"))
        .stdout(predicate::str::contains("sentiment: neutral"));

    fb_cmd(&dir)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("mood logs:   1"));
}

#[test]
fn unknown_mood_rejected() {
    let dir = TempDir::new().unwrap();
    onboard(&dir);
    fb_cmd(&dir)
        .args(["log-mood", "ecstatic"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("ecstatic"));
}

#[test]
fn complete_activity_counts_household() {
    let dir = TempDir::new().unwrap();
    onboard(&dir);

    fb_cmd(&dir)
        .args(["complete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No-Screen Dinner"))
        .stdout(predicate::str::contains("2 participant(s)"));

    fb_cmd(&dir)
        .args(["complete", "999"])
        .assert()
        .failure();
}

#[test]
fn activities_search() {
    let dir = TempDir::new().unwrap();
    fb_cmd(&dir)
        .args(["activities", "--query", "game"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Game Night"))
        .stdout(predicate::str::contains("No-Screen Dinner").not());

    fb_cmd(&dir)
        .args(["activities", "--category", "fortnightly"])
        .assert()
        .failure();
}

#[test]
fn risk_flags_sustained_stress() {
    let dir = TempDir::new().unwrap();
    onboard(&dir);

    fb_cmd(&dir)
        .arg("risk")
        .assert()
        .success()
        .stdout(predicate::str::contains("no concerning pattern"));

    for _ in 0..8 {
        fb_cmd(&dir).args(["log-mood", "stressed"]).assert().success();
    }

    fb_cmd(&dir)
        .arg("risk")
        .assert()
        .success()
        .stdout(predicate::str::contains("high risk: 100% negative over 8 check-ins"));
}

#[test]
fn analyze_text() {
    let dir = TempDir::new().unwrap();
    fb_cmd(&dir)
        .args(["analyze", "I feel sad and tired"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sentiment: negative, confidence: 0.90"));
}

#[test]
fn chat_greeting() {
    let dir = TempDir::new().unwrap();
    fb_cmd(&dir)
        .args(["chat", "hello there"])
        .assert()
        .success()
        .stdout(predicate::str::contains("communicat").or(predicate::str::contains("coach")));
}

#[test]
fn advice_uses_profile_role() {
    let dir = TempDir::new().unwrap();
    onboard(&dir);

    fb_cmd(&dir)
        .args(["advice", "stressed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("As a parent, your well-being matters too."));

    fb_cmd(&dir)
        .args(["advice", "stressed", "--role", "astronaut"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Remember to communicate openly"));
}

#[test]
fn coach_quick_actions() {
    let dir = TempDir::new().unwrap();
    onboard(&dir);

    fb_cmd(&dir)
        .args(["coach", "mood"])
        .assert()
        .success()
        .stdout(predicate::str::contains("haven't logged your mood"));

    fb_cmd(&dir)
        .args(["coach", "improve"])
        .assert()
        .success()
        .stdout(predicate::str::contains("at least one family activity"));

    fb_cmd(&dir)
        .args(["coach", "dance"])
        .assert()
        .success()
        .stdout(predicate::str::contains("How can I help you today?"));
}

#[test]
fn report_json() {
    let dir = TempDir::new().unwrap();
    onboard(&dir);
    fb_cmd(&dir).args(["log-mood", "calm"]).assert().success();

    let output = fb_cmd(&dir)
        .args(["report", "--range", "month", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["range"], "month");
    assert_eq!(report["points"].as_array().unwrap().len(), 30);
    assert_eq!(report["totalMoodLogs"], 1);
    assert_eq!(report["topEmotion"], "calm");
}

#[test]
fn export_then_import_into_fresh_dir() {
    let source = TempDir::new().unwrap();
    onboard(&source);
    fb_cmd(&source).args(["log-mood", "grateful"]).assert().success();

    let backup = source.path().join("backup.json");
    fb_cmd(&source)
        .arg("export")
        .arg(&backup)
        .assert()
        .success()
        .stdout(predicate::str::contains("exported to"));

    let target = TempDir::new().unwrap();
    fb_cmd(&target)
        .arg("import")
        .arg(&backup)
        .assert()
        .success()
        .stdout(predicate::str::contains("members=2, mood logs=1"));

    fb_cmd(&target)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("user:        Dana"));
}

#[test]
fn import_rejects_garbage() {
    let dir = TempDir::new().unwrap();
    let bad = dir.path().join("bad.json");
    std::fs::write(&bad, "{ nope").unwrap();
    fb_cmd(&dir)
        .arg("import")
        .arg(&bad)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to import JSON"));
}

#[test]
fn config_sets_report_range() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.toml"), "report_range = \"month\"\n").unwrap();
    onboard(&dir);

    let output = fb_cmd(&dir).args(["report", "--json"]).output().unwrap();
    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["range"], "month");
}

#[test]
fn home_dashboard() {
    let dir = TempDir::new().unwrap();
    onboard(&dir);

    fb_cmd(&dir)
        .arg("home")
        .assert()
        .success()
        .stdout(predicate::str::contains("hello, Dana!"))
        .stdout(predicate::str::contains("not checked in yet"))
        .stdout(predicate::str::contains("this week:   0/7 activities (0%)"));

    fb_cmd(&dir).args(["log-mood", "happy"]).assert().success();
    fb_cmd(&dir).args(["complete", "2"]).assert().success();

    let output = fb_cmd(&dir).args(["home", "--json"]).output().unwrap();
    assert!(output.status.success());
    let summary: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(summary["todayMood"]["mood"], "happy");
    assert_eq!(summary["weeklyActivities"], 1);
    assert!(summary["recommendations"].as_array().unwrap().len() <= 3);
}
