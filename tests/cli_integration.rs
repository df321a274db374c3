use std::process::Command;

fn hunt_bin() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_hunt"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn init_then_generate_writes_one_path_per_group() {
    let temp_dir = tempfile::tempdir().expect("create temp dir");
    let clues_path = temp_dir.path().join("clues.tsv");
    let out_path = temp_dir.path().join("out/hunt.json");

    let init_status = hunt_bin()
        .arg("init")
        .arg("--clues")
        .arg(&clues_path)
        .status()
        .expect("run init");
    assert!(init_status.success());
    assert!(clues_path.exists());

    let generate_status = hunt_bin()
        .arg("generate")
        .arg("--clues")
        .arg(&clues_path)
        .arg("--groups")
        .arg("3")
        .arg("--seed")
        .arg("42")
        .arg("--out")
        .arg(&out_path)
        .status()
        .expect("run generate");
    assert!(generate_status.success());

    let content = std::fs::read_to_string(&out_path).expect("read hunt");
    let hunt: serde_json::Value = serde_json::from_str(&content).expect("parse hunt");
    let groups = hunt.as_object().expect("group map");
    assert_eq!(groups.len(), 3);
    let mut openings = std::collections::HashSet::new();
    for key in ["1", "2", "3"] {
        let steps = groups[key].as_array().expect("steps array");
        assert_eq!(steps.len(), 10);
        assert_eq!(
            steps[9]["question"],
            "Where do you wash your hands before dinner?"
        );
        assert_eq!(steps[9]["next_step_label"], "11. The End");
        assert!(openings.insert(steps[0]["question"].as_str().map(str::to_string)));
    }
}

#[test]
fn seeded_runs_print_identical_json() {
    let temp_dir = tempfile::tempdir().expect("create temp dir");
    let clues_path = temp_dir.path().join("clues.json");
    std::fs::write(
        &clues_path,
        r#"[
            {"question": "What has keys?", "location": "Piano", "category": "Place"},
            {"question": "What has a face?", "location": "Clock", "category": "place"},
            {"question": "Who made this?", "location": "Kevin", "category": "Person"}
        ]"#,
    )
    .expect("write clues");

    let run = || {
        hunt_bin()
            .arg("generate")
            .arg("--clues")
            .arg(&clues_path)
            .arg("--groups")
            .arg("2")
            .arg("--seed")
            .arg("7")
            .output()
            .expect("run generate")
    };
    let first = run();
    let second = run();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn unsatisfiable_group_count_fails_with_group_number() {
    let temp_dir = tempfile::tempdir().expect("create temp dir");
    let clues_path = temp_dir.path().join("clues.tsv");
    std::fs::write(&clues_path, "Only clue\tShelf\tPlace\nFinal\tDoor\tPlace\n")
        .expect("write clues");

    let output = hunt_bin()
        .arg("generate")
        .arg("--clues")
        .arg(&clues_path)
        .arg("--groups")
        .arg("3")
        .output()
        .expect("run generate");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("group 2 after 100 attempts"),
        "unexpected stderr: {stderr}"
    );
    assert!(output.stdout.is_empty());
}

#[test]
fn single_clue_file_is_rejected_before_generation() {
    let temp_dir = tempfile::tempdir().expect("create temp dir");
    let clues_path = temp_dir.path().join("clues.tsv");
    std::fs::write(&clues_path, "Lonely\tNowhere\n").expect("write clues");

    let output = hunt_bin()
        .arg("generate")
        .arg("--clues")
        .arg(&clues_path)
        .arg("--groups")
        .arg("1")
        .output()
        .expect("run generate");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("need at least 2 clues"), "unexpected stderr: {stderr}");
}

#[test]
fn group_count_outside_configured_range_is_rejected() {
    let temp_dir = tempfile::tempdir().expect("create temp dir");
    let clues_path = temp_dir.path().join("clues.tsv");
    let config_path = temp_dir.path().join("hunt.json");
    std::fs::write(&clues_path, "A\tX\nB\tY\nC\tZ\n").expect("write clues");
    std::fs::write(&config_path, r#"{"max_groups": 2}"#).expect("write config");

    let output = hunt_bin()
        .arg("generate")
        .arg("--clues")
        .arg(&clues_path)
        .arg("--groups")
        .arg("3")
        .arg("--config")
        .arg(&config_path)
        .output()
        .expect("run generate");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("between 1 and 2"), "unexpected stderr: {stderr}");
}

#[test]
fn init_refuses_to_overwrite_without_force() {
    let temp_dir = tempfile::tempdir().expect("create temp dir");
    let clues_path = temp_dir.path().join("clues.tsv");
    std::fs::write(&clues_path, "keep me\n").expect("write existing");

    let refused = hunt_bin()
        .arg("init")
        .arg("--clues")
        .arg(&clues_path)
        .status()
        .expect("run init");
    assert!(!refused.success());
    assert_eq!(
        std::fs::read_to_string(&clues_path).expect("read"),
        "keep me\n"
    );

    let forced = hunt_bin()
        .arg("init")
        .arg("--clues")
        .arg(&clues_path)
        .arg("--force")
        .status()
        .expect("run init --force");
    assert!(forced.success());
}

#[test]
fn check_summarizes_categories() {
    let temp_dir = tempfile::tempdir().expect("create temp dir");
    let clues_path = temp_dir.path().join("clues.tsv");
    std::fs::write(
        &clues_path,
        "Question\tLocation\tType\nA\tX\tPlace\nB\tY\tPerson\nC\tZ\t\n",
    )
    .expect("write clues");

    let output = hunt_bin()
        .arg("check")
        .arg("--clues")
        .arg(&clues_path)
        .output()
        .expect("run check");
    assert!(output.status.success());
    let summary: serde_json::Value = serde_json::from_slice(&output.stdout).expect("parse");
    assert_eq!(summary["total"], 3);
    assert_eq!(summary["randomizable"], 2);
    assert_eq!(summary["place"], 1);
    assert_eq!(summary["person"], 1);
    assert_eq!(summary["untyped"], 1);
    assert_eq!(summary["final_clue"], "C");
}
