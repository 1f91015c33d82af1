use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn inkboard_cmd(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("inkboard").expect("binary exists");
    cmd.env("XDG_CONFIG_HOME", config_home.path());
    cmd
}

#[test]
fn inkboard_help_prints_usage() {
    let temp = TempDir::new().unwrap();
    inkboard_cmd(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Freehand drawing tools for whiteboard canvases",
        ));
}

#[test]
fn configure_pencil_keeps_color_opaque() {
    let temp = TempDir::new().unwrap();
    let output = inkboard_cmd(&temp)
        .args(["configure", "--tool", "pencil", "--width", "5", "--color", "#000000"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let brush: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(brush["isDrawingMode"], true);
    assert_eq!(brush["brushWidth"], 5.0);
    assert_eq!(brush["brushColor"], "#000000");
    assert!(brush["cursor"].as_str().unwrap().ends_with("0 52, crosshair"));
}

#[test]
fn configure_highlighter_uses_translucent_color() {
    let temp = TempDir::new().unwrap();
    inkboard_cmd(&temp)
        .args(["configure", "-t", "highlighter", "-w", "5", "-c", "yellow"])
        .assert()
        .success()
        .stdout(predicate::str::contains("rgba(255,255,0,0.4)"));
}

#[test]
fn configure_reads_defaults_from_config_file() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("inkboard");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(
        dir.join("config.toml"),
        "[drawing]\ndefault_tool = \"highlighter\"\nline_width = 9.0\nline_color = \"Red\"\n",
    )
    .unwrap();

    inkboard_cmd(&temp)
        .arg("configure")
        .assert()
        .success()
        .stdout(predicate::str::contains("rgba(255,0,0,0.4)"))
        .stdout(predicate::str::contains("\"brushWidth\": 9.0"));
}

#[test]
fn configure_highlighter_rejects_unknown_color() {
    let temp = TempDir::new().unwrap();
    inkboard_cmd(&temp)
        .args(["configure", "--tool", "highlighter", "--color", "notacolor"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown color name: 'notacolor'"));
}

#[test]
fn color_command_resolves_names_and_hex() {
    let temp = TempDir::new().unwrap();
    inkboard_cmd(&temp)
        .args(["color", "CornflowerBlue"])
        .assert()
        .success()
        .stdout("#6495ed\n");

    inkboard_cmd(&temp)
        .args(["color", "#fff", "--translucent"])
        .assert()
        .success()
        .stdout("rgba(255,255,255,0.4)\n");

    inkboard_cmd(&temp)
        .args(["color", "#ff"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid color format"));
}

#[test]
fn cursor_command_falls_back_for_unknown_tools() {
    let temp = TempDir::new().unwrap();
    inkboard_cmd(&temp)
        .args(["cursor", "Eraser"])
        .assert()
        .success()
        .stdout("crosshair\n");

    inkboard_cmd(&temp)
        .args(["cursor", "Highlighter"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("url(data:image/svg+xml;base64,"));
}

#[test]
fn cursor_command_lists_known_identities() {
    let temp = TempDir::new().unwrap();
    inkboard_cmd(&temp)
        .args(["cursor", "--list"])
        .assert()
        .success()
        .stdout("Pencil\nHighlighter\n");
}

#[test]
fn uuid_command_prints_requested_count() {
    let temp = TempDir::new().unwrap();
    let output = inkboard_cmd(&temp)
        .args(["uuid", "--count", "3"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let ids: Vec<&str> = stdout.lines().collect();
    assert_eq!(ids.len(), 3);
    assert!(ids.iter().all(|id| id.len() == 36 && id.as_bytes()[14] == b'4'));
}

#[test]
fn init_config_writes_example_once() {
    let temp = TempDir::new().unwrap();
    inkboard_cmd(&temp)
        .arg("init-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"));
    assert!(temp.path().join("inkboard").join("config.toml").exists());

    inkboard_cmd(&temp)
        .arg("init-config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}
