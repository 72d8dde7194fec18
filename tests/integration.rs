use brookes::{ComparisonResult, Direction, DispersionResult};
use rmp_serde::decode;
use std::{
    env, fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

fn run_bin(args: &[&str]) -> Output {
    let bin = PathBuf::from(env!("CARGO_BIN_EXE_brookes"));

    Command::new(bin)
        .args(args)
        .output()
        .expect("failed to execute command")
}

fn run_bin_ok(args: &[&str]) -> String {
    let output = run_bin(args);

    let stdout_str =
        std::str::from_utf8(&output.stdout).expect("failed to convert stdout to string");
    let stderr_str =
        std::str::from_utf8(&output.stderr).expect("failed to convert stderr to string");

    assert!(
        output.status.success(),
        "failed to run binary with {args:?}\nstdout:\n{stdout_str}\nstderr:\n{stderr_str}\n"
    );

    stdout_str.to_string()
}

fn make_test_dir(name: &str) -> PathBuf {
    let test_dir = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join(name);
    fs::remove_dir_all(&test_dir).ok();
    fs::create_dir(&test_dir).expect("failed to create test directory");
    test_dir
}

fn read_msgpack<T: serde::de::DeserializeOwned>(file: &Path) -> T {
    let bytes = fs::read(file).expect("failed to read result file");
    decode::from_slice(&bytes).expect("failed to deserialize result file")
}

#[test]
fn basic_workflow() {
    let test_dir = make_test_dir("basic_workflow");

    let linguistics = String::new()
        + "Category,Frequency\n"
        + "NLP Applications,280\n"
        + "Semantics,220\n"
        + "Resources,180\n"
        + "Syntax,120\n"
        + "Discourse,100\n"
        + "Morphology,70\n"
        + "Phonology,30\n";
    fs::write(test_dir.join("linguistics.csv"), linguistics).expect("failed to write data file");

    let general = "Category,Frequency\nA,25\nB,23\nC,22\nD,18\nE,12\n";
    fs::write(test_dir.join("general.csv"), general).expect("failed to write data file");

    let test_dir_str = test_dir
        .to_str()
        .expect("failed to convert test directory to string");

    let stdout = run_bin_ok(&["--data-dir", test_dir_str, "analyze"]);
    assert!(stdout.contains("== linguistics"));
    assert!(stdout.contains("Brookes' Δ: 0.688"));
    assert!(stdout.contains("Phonology"));

    let res: DispersionResult = read_msgpack(&test_dir.join("linguistics-results.msgpack"));
    assert_eq!(res.delta, 0.688);
    assert_eq!(res.category_count, 7);
    assert_eq!(res.table[0].category, "NLP Applications");
    assert!(test_dir.join("general-results.msgpack").is_file());

    let stdout = run_bin_ok(&[
        "--data-dir",
        test_dir_str,
        "compare",
        "--first",
        "linguistics.csv",
        "--second",
        "general.csv",
    ]);
    assert!(stdout.contains("linguistics is more concentrated than general"));

    let cmp: ComparisonResult =
        read_msgpack(&test_dir.join("linguistics-vs-general-comparison.msgpack"));
    assert_eq!(cmp.first_delta, 0.688);
    assert_eq!(cmp.direction, Direction::MoreConcentrated);

    run_bin_ok(&["--data-dir", test_dir_str, "clean"]);
    assert!(!test_dir.join("linguistics-results.msgpack").exists());
    assert!(!test_dir.join("general-results.msgpack").exists());
    assert!(!test_dir.join("linguistics-vs-general-comparison.msgpack").exists());
    assert!(test_dir.join("linguistics.csv").is_file());

    fs::remove_dir_all(&test_dir).ok();
}

#[test]
fn custom_config() {
    let test_dir = make_test_dir("custom_config");

    let config_contents = String::new()
        + "[input]\n"
        + "category_column = \"Topic\"\n"
        + "frequency_column = \"Count\"\n"
        + "delimiter = \";\"\n"
        + "\n"
        + "[output]\n"
        + "show_table = false\n";
    fs::write(test_dir.join("config.toml"), config_contents).expect("failed to write config file");

    let data = "Topic;Count\nMain Topic;100\nMinor 1;0\nMinor 2;0\nMinor 3;0\n";
    fs::write(test_dir.join("journal.csv"), data).expect("failed to write data file");

    let test_dir_str = test_dir
        .to_str()
        .expect("failed to convert test directory to string");

    let stdout = run_bin_ok(&["--data-dir", test_dir_str, "analyze"]);
    assert!(stdout.contains("Brookes' Δ: 1.000"));
    assert!(stdout.contains("Very high thematic concentration"));
    assert!(!stdout.contains("Desc_Rank"));

    fs::remove_dir_all(&test_dir).ok();
}

#[test]
fn invalid_data_fails() {
    let test_dir = make_test_dir("invalid_data_fails");

    let test_dir_str = test_dir
        .to_str()
        .expect("failed to convert test directory to string");

    // No CSV files.
    assert!(!run_bin(&["--data-dir", test_dir_str, "analyze"]).status.success());

    fs::write(test_dir.join("zero.csv"), "Category,Frequency\nA,0\nB,0\n")
        .expect("failed to write data file");
    let output = run_bin(&["--data-dir", test_dir_str, "analyze"]);
    assert!(!output.status.success());
    let stderr_str = String::from_utf8_lossy(&output.stderr);
    assert!(stderr_str.contains("DivisionError"));

    fs::write(test_dir.join("zero.csv"), "Category,Frequency\nA,3\nB,-1\n")
        .expect("failed to write data file");
    let output = run_bin(&["--data-dir", test_dir_str, "analyze"]);
    assert!(!output.status.success());
    let stderr_str = String::from_utf8_lossy(&output.stderr);
    assert!(stderr_str.contains("NegativeFrequency"));

    fs::remove_dir_all(&test_dir).ok();
}

#[test]
fn data_dir_with_glob_characters() {
    let test_dir = make_test_dir("fields[2024]");

    let data = "Category,Frequency\nA,10\nB,1\n";
    fs::write(test_dir.join("field.csv"), data).expect("failed to write data file");

    let test_dir_str = test_dir
        .to_str()
        .expect("failed to convert test directory to string");

    let stdout = run_bin_ok(&["--data-dir", test_dir_str, "analyze"]);
    assert!(stdout.contains("== field"));
    assert!(stdout.contains("Brookes' Δ: 0.909"));
    assert!(test_dir.join("field-results.msgpack").is_file());

    run_bin_ok(&["--data-dir", test_dir_str, "clean"]);
    assert!(!test_dir.join("field-results.msgpack").exists());

    fs::remove_dir_all(&test_dir).ok();
}
