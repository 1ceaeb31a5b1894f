use std::ffi::OsString;

use assert_fs::prelude::*;
use changepack_fs::walk;
use pretty_assertions::assert_eq;
use predicates::prelude::*;

#[test]
fn top_level_names_skip_directories_and_nested_files() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("a.txt").touch().unwrap();
    temp.child("b.txt").touch().unwrap();
    temp.child("sub").create_dir_all().unwrap();
    temp.child("sub/c.txt").touch().unwrap();

    let names = walk::top_level_file_names(temp.path()).unwrap();

    assert_eq!(
        names.into_iter().collect::<Vec<_>>(),
        vec![OsString::from("a.txt"), OsString::from("b.txt")]
    );
}

#[test]
fn top_level_names_missing_dir_is_error() {
    let temp = assert_fs::TempDir::new().unwrap();
    let missing = temp.child("missing");
    missing.assert(predicate::path::missing());

    assert!(walk::top_level_file_names(missing.path()).is_err());
}

#[test]
fn walk_files_is_recursive_and_sorted() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("z.txt").touch().unwrap();
    temp.child("a/inner.txt").touch().unwrap();
    temp.child("a/b/deep.txt").touch().unwrap();
    temp.child("empty").create_dir_all().unwrap();

    let files = walk::walk_files(temp.path()).unwrap();
    let relative: Vec<String> = files
        .iter()
        .map(|p| {
            p.strip_prefix(temp.path())
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect();

    assert_eq!(relative, vec!["a/b/deep.txt", "a/inner.txt", "z.txt"]);
}

#[test]
fn walk_files_paths_start_with_given_root() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("sub/file.txt").touch().unwrap();

    for file in walk::walk_files(temp.path()).unwrap() {
        assert!(file.starts_with(temp.path()));
    }
}

#[test]
fn contains_any_file_detects_nested_file() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("a/b/c").create_dir_all().unwrap();
    assert!(!walk::contains_any_file(temp.path()).unwrap());

    temp.child("a/b/c/file.txt").touch().unwrap();
    assert!(walk::contains_any_file(temp.path()).unwrap());
}
