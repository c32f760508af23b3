use std::path::PathBuf;

use errtax_loader::{DirectoryLoader, LoaderConfig, load_dir};

fn demos_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("demos")
}

#[test]
fn test_load_demos() {
    let fragments = load_dir(demos_path(), LoaderConfig::default()).expect("Failed to load demos");

    let interfaces: Vec<&str> = fragments
        .iter()
        .map(|f| f.interface.as_deref().unwrap())
        .collect();
    assert_eq!(
        interfaces,
        vec![
            "xyz.openbmc_project.Common.Device.Error",
            "xyz.openbmc_project.Common.Error",
        ]
    );

    let common = &fragments[1];
    assert_eq!(common.errors[0].name, "Timeout");
    assert_eq!(
        common.errors[0].inherits,
        vec!["xyz.openbmc_project.Common.Error.InternalFailure"]
    );
    assert!(common.errors[1].inherits.is_empty());

    let invalid_argument = common
        .metadata
        .iter()
        .find(|m| m.name == "InvalidArgument")
        .unwrap();
    assert_eq!(invalid_argument.level, "INFO");
    assert_eq!(invalid_argument.meta.len(), 2);
    assert_eq!(invalid_argument.meta[0].format, "ARGUMENT_NAME=%s");
}

#[test]
fn test_demos_errors_files() {
    let loader = DirectoryLoader::new(demos_path(), LoaderConfig::default());

    let files = loader.errors_files().unwrap();

    assert_eq!(files.len(), 2);
    assert!(files.iter().all(|f| f.to_string_lossy().ends_with(".errors.yaml")));
}
