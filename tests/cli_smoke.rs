use std::path::PathBuf;

#[test]
fn cli_schedule_writes_json() {
    let dir = PathBuf::from("target").join("cli_smoke");
    std::fs::create_dir_all(&dir).unwrap();

    let storyboard_path = dir.join("storyboard.json");
    let out_path = dir.join("schedule.json");
    let _ = std::fs::remove_file(&out_path);

    std::fs::write(&storyboard_path, include_str!("data/storyboard.json")).unwrap();

    let exe = std::env::var_os("CARGO_BIN_EXE_keepsake")
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            let mut p = PathBuf::from("target").join("debug");
            p.push(if cfg!(windows) {
                "keepsake.exe"
            } else {
                "keepsake"
            });
            p
        });

    let in_arg = storyboard_path.to_string_lossy().to_string();
    let out_arg = out_path.to_string_lossy().to_string();

    let status = std::process::Command::new(exe)
        .args(["schedule", "--in", in_arg.as_str(), "--out"])
        .arg(out_arg.as_str())
        .arg("--pretty")
        .status()
        .unwrap();

    assert!(status.success());

    let text = std::fs::read_to_string(&out_path).unwrap();
    let schedule: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(schedule["total"], serde_json::json!(36.5));
}
