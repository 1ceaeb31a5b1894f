use changepack_core::{Error, ErrorKind, RootRole, resolve_inputs};
use changepack_test_utils::tree::TestTree;

#[test]
fn identical_roots_fail_before_enumeration() {
    // The path does not exist; the string comparison must reject it first
    let err = resolve_inputs("/definitely/not/here", "/definitely/not/here").unwrap_err();

    assert!(matches!(err, Error::InvalidConfiguration { .. }));
    assert_eq!(
        err.to_string(),
        "Source and destination folder cannot point to the same location."
    );
}

#[test]
fn same_folder_spelled_differently_is_accepted() {
    // Equality is textual; no canonicalization happens
    let tree = TestTree::new();
    tree.source_file("a.txt", "a");
    let with_slash = format!("{}/", tree.source_str());

    let roots = resolve_inputs(&with_slash, tree.source_str()).unwrap();
    assert_eq!(roots.source.to_str().unwrap(), with_slash);
    assert_eq!(roots.destination, tree.source());
}

#[test]
fn empty_source_is_rejected() {
    let tree = TestTree::new();
    tree.destination_file("a.txt", "a");
    std::fs::create_dir_all(tree.source().join("only/dirs")).unwrap();

    let err = resolve_inputs(tree.source_str(), tree.destination_str()).unwrap_err();
    assert!(matches!(err, Error::EmptySource { .. }));
    assert_eq!(err.kind(), ErrorKind::EmptySource);
    assert_eq!(err.to_string(), "No files found in the source folder.");
}

#[test]
fn empty_destination_is_rejected() {
    let tree = TestTree::new();
    tree.source_file("a.txt", "a");

    let err = resolve_inputs(tree.source_str(), tree.destination_str()).unwrap_err();
    assert!(matches!(err, Error::EmptyDestination { .. }));
    assert_eq!(err.kind().exit_code(), 4);
}

#[test]
fn source_checked_before_destination() {
    let tree = TestTree::new();

    let err = resolve_inputs(tree.source_str(), tree.destination_str()).unwrap_err();
    assert!(matches!(err, Error::EmptySource { .. }));
}

#[test]
fn nested_file_counts_as_populated() {
    let tree = TestTree::new();
    tree.source_file("deep/er/a.txt", "a");
    tree.destination_file("x/y.txt", "y");

    assert!(resolve_inputs(tree.source_str(), tree.destination_str()).is_ok());
}

#[test]
fn missing_destination_is_reported_by_role() {
    let tree = TestTree::new();
    tree.source_file("a.txt", "a");
    let missing = tree.root().join("missing");

    let err = resolve_inputs(tree.source_str(), missing.to_str().unwrap()).unwrap_err();
    match err {
        Error::MissingRoot { role, path } => {
            assert_eq!(role, RootRole::Destination);
            assert_eq!(path, missing);
        }
        other => panic!("expected MissingRoot, got {other:?}"),
    }
}
