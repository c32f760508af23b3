use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::tempdir;

use errtax_cli::{Args, CliError, run};

/// Demo definitions are at workspace root, relative to workspace not the crate
fn demos_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("demos")
}

fn args(input: &Path, output: &Path) -> Args {
    Args {
        input: input.to_string_lossy().to_string(),
        output: output.to_string_lossy().to_string(),
        config: None,
        log_level: "off".to_string(),
        check: false,
    }
}

fn error_names(json: &str) -> Vec<String> {
    let value: serde_json::Value = serde_json::from_str(json).expect("Output is not valid JSON");
    value["errors"]
        .as_array()
        .expect("Missing errors array")
        .iter()
        .map(|error| error["name"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn e2e_smoke_test_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output = temp_dir.path().join("taxonomy.json");

    run(&args(&demos_path(), &output)).expect("Failed to compile demos");

    let json = fs::read_to_string(&output).expect("Output file not written");
    assert_eq!(
        error_names(&json),
        vec![
            "InternalFailure",
            "InvalidArgument",
            "InsufficientPermission",
            "NotAllowed",
            "NoCACertificate",
            "DeviceFailure",
            "Timeout",
            "ReadFailure",
            "WriteFailure",
        ]
    );
}

#[test]
fn e2e_demos_with_multi_pass_config() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let queue_output = temp_dir.path().join("queue.json");
    let multi_pass_output = temp_dir.path().join("multi-pass.json");
    let config = temp_dir.path().join("config.toml");
    fs::write(&config, "[compiler]\nordering = \"multi-pass\"\n").unwrap();

    run(&args(&demos_path(), &queue_output)).unwrap();
    let mut multi_pass_args = args(&demos_path(), &multi_pass_output);
    multi_pass_args.config = Some(config.to_string_lossy().to_string());
    run(&multi_pass_args).unwrap();

    assert_eq!(
        fs::read_to_string(&queue_output).unwrap(),
        fs::read_to_string(&multi_pass_output).unwrap()
    );
}

#[test]
fn e2e_check_writes_nothing() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output = temp_dir.path().join("taxonomy.json");

    let mut check_args = args(&demos_path(), &output);
    check_args.check = true;
    run(&check_args).expect("Check failed");

    assert!(!output.exists());
}

#[test]
fn e2e_invalid_input_keeps_previous_output() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = temp_dir.path().join("defs");
    fs::create_dir(&input).unwrap();
    fs::write(
        input.join("Ns.errors.yaml"),
        "- name: X\n  description: x\n- name: Y\n  description: y\n  inherits:\n    - Ns.Z\n",
    )
    .unwrap();
    fs::write(
        input.join("Ns.metadata.yaml"),
        "- name: X\n  level: ERR\n- name: Y\n  level: ERR\n",
    )
    .unwrap();
    let output = temp_dir.path().join("taxonomy.json");
    fs::write(&output, "previous").unwrap();

    let err = run(&args(&input, &output)).unwrap_err();

    assert!(
        matches!(err, CliError::Errtax(_)),
        "unexpected error: {err:?}"
    );
    assert_eq!(
        err.to_string(),
        "error `Y` inherits from undefined error `Z`"
    );
    assert_eq!(fs::read_to_string(&output).unwrap(), "previous");
}

#[test]
fn e2e_missing_input_directory() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output = temp_dir.path().join("taxonomy.json");

    let result = run(&args(&temp_dir.path().join("nope"), &output));

    assert!(result.is_err());
    assert!(!output.exists());
}
