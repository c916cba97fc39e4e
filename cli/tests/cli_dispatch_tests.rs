use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::time::{SystemTime, UNIX_EPOCH};

const DATA_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../data");

fn bin() -> &'static str {
    env!("CARGO_BIN_EXE_pkengine")
}

fn pkengine() -> Command {
    let mut command = Command::new(bin());
    command
        .env_remove("PKENGINE_BADGES")
        .env_remove("PKENGINE_LEVEL_CAP")
        .env_remove("PKENGINE_TYPE_CHART")
        .env("PKENGINE_DATA_DIR", DATA_DIR);
    command
}

fn unique_temp_path(name: &str) -> PathBuf {
    let stamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock should be after unix epoch")
        .as_nanos();
    std::env::temp_dir().join(format!("pkengine-{name}-{stamp}"))
}

#[test]
fn one_shot_query_prints_text() {
    let output = pkengine()
        .args(["moveset", "for", "Garchomp"])
        .output()
        .expect("moveset should run");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Legal moveset for Garchomp"));
    assert!(stdout.contains("Earthquake"));
}

#[test]
fn one_shot_respects_env_progression() {
    let output = pkengine()
        .env("PKENGINE_BADGES", "5")
        .args(["--json", "tmhm", "moveset", "for", "Garchomp"])
        .output()
        .expect("tmhm moveset should run");

    assert_eq!(output.status.code(), Some(0));
    let payload: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("moveset should emit json");
    assert_eq!(payload["kind"], "moves");
    let moves: Vec<&str> = payload["moves"]
        .as_array()
        .expect("moves should be an array")
        .iter()
        .filter_map(|m| m["name"].as_str())
        .collect();
    assert!(moves.contains(&"Dragon Claw"));
    assert!(!moves.contains(&"Earthquake"));
}

#[test]
fn one_shot_counterteam_emits_json() {
    let output = pkengine()
        .args([
            "--json",
            "counterteam",
            "for",
            "Roxanne",
            "using",
            "only",
            "monotype",
            "Water",
        ])
        .output()
        .expect("counterteam should run");

    assert_eq!(output.status.code(), Some(0));
    let payload: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("counterteam should emit json");
    assert_eq!(payload["trainer"], "Roxanne");
    assert_eq!(payload["members"].as_array().map(Vec::len), Some(6));
    assert_eq!(payload["members"][0]["name"], "Starmie");
}

#[test]
fn unknown_name_exits_with_one() {
    let output = pkengine()
        .args(["team", "for", "Giovanni"])
        .output()
        .expect("team should run");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Trainer Giovanni not found."));
}

#[test]
fn usage_errors_exit_with_two() {
    let output = pkengine()
        .args(["badge", "many"])
        .output()
        .expect("badge should run");
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("usage: badge <number>"));

    let output = pkengine()
        .args(["hello", "there"])
        .output()
        .expect("unrecognized should run");
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unrecognized query."));

    let output = pkengine()
        .arg("--colour")
        .output()
        .expect("bad flag should run");
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--colour"));
    assert!(stderr.contains("Usage: pkengine"));
}

#[test]
fn help_lists_flags_and_exits_cleanly() {
    let output = pkengine().arg("--help").output().expect("help should run");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--json"));
    assert!(stdout.contains("--data-dir <PATH>"));
    assert!(stdout.contains("pkengine moveset for Garchomp"));
}

#[test]
fn missing_data_dir_fails() {
    let dir = unique_temp_path("missing");
    let output = pkengine()
        .arg("--data-dir")
        .arg(&dir)
        .args(["moveset", "for", "Gible"])
        .output()
        .expect("pkengine should run");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to load data"));
}

#[test]
fn data_dir_flag_loads_custom_data() {
    let dir = unique_temp_path("custom");
    fs::create_dir_all(&dir).expect("temp dir should be created");
    fs::write(
        dir.join("species.json"),
        r#"[{"name": "Lotad", "types": ["Water", "Grass"], "baseStats": {"speed": 30},
            "levelUpMoves": [{"move": "Absorb", "level": 1}]}]"#,
    )
    .expect("species should be written");
    fs::write(
        dir.join("moves.json"),
        r#"[{"name": "Absorb", "type": "Grass"}]"#,
    )
    .expect("moves should be written");
    fs::write(dir.join("tm-locations.txt"), "").expect("tm listing should be written");
    fs::write(
        dir.join("trainers.json"),
        r#"[{"name": "Roxanne", "team": [{"name": "Lotad", "level": 12}]}]"#,
    )
    .expect("trainers should be written");

    let output = pkengine()
        .arg("--data-dir")
        .arg(&dir)
        .args(["moveset", "for", "lotad"])
        .output()
        .expect("moveset should run");

    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("Absorb (Lv. 1)"));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn interactive_session_reads_until_quit() {
    let mut child = pkengine()
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("interactive session should start");

    child
        .stdin
        .take()
        .expect("stdin should be piped")
        .write_all(b"badge 4\nmoveset for Nobody\nlevel cap 20\nquit\nbadge 1\n")
        .expect("input should be written");

    let output = child.wait_with_output().expect("session should finish");
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("PK-Engine> "));
    assert!(stdout.contains("Badge count set to 4"));
    assert!(stdout.contains("Level cap set to 20"));
    assert!(!stdout.contains("Badge count set to 1"));
    assert!(stdout.trim_end().ends_with("Goodbye!"));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Pokémon Nobody not found."));
}
