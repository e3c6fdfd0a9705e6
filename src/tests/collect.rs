use crate::tests::util::{owned, sorted, Dir};
use crate::{collect_file_paths, collect_file_paths_into, ErrorKind, WalkDir};

#[test]
fn sample_tree_with_prefix() {
    let dir = Dir::tmp();
    dir.sample_tree();

    let got = collect_file_paths(dir.root(), true, true).unwrap();
    let expected = vec![dir.join("x.txt"), dir.join("sub/y.txt"), dir.join("sub/z.bin")];
    assert_eq!(sorted(got), sorted(expected));
}

#[test]
fn sample_tree_relative() {
    let dir = Dir::tmp();
    dir.sample_tree();

    let got = collect_file_paths(dir.root(), false, true).unwrap();
    assert_eq!(sorted(got), owned(&["sub/y.txt", "sub/z.bin", "x.txt"]));
}

#[test]
fn single_level() {
    let dir = Dir::tmp();
    dir.sample_tree();

    let got = collect_file_paths(dir.root(), false, false).unwrap();
    assert_eq!(got, owned(&["x.txt"]));
}

#[test]
fn every_file_exactly_once() {
    let dir = Dir::tmp();
    let mut expected = vec![];
    for a in 0..4 {
        for b in 0..3 {
            let rel = format!("d{}/e{}/f{}.dat", a, b, a * 3 + b);
            dir.touch(&rel);
            expected.push(rel);
        }
        let rel = format!("d{}/top.dat", a);
        dir.touch(&rel);
        expected.push(rel);
    }

    let got = collect_file_paths(dir.root(), false, true).unwrap();
    assert_eq!(got.len(), expected.len());
    assert_eq!(sorted(got), sorted(expected));
}

#[test]
fn empty_root() {
    let dir = Dir::tmp();
    assert!(collect_file_paths(dir.root(), true, true).unwrap().is_empty());
}

#[test]
fn errors() {
    let dir = Dir::tmp();

    let err = collect_file_paths(dir.root().trim_end_matches('/'), true, true).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DirFormat);

    let err = collect_file_paths(&dir.join("missing/"), true, true).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DirOpen);
}

#[test]
fn into_appends() {
    let dir = Dir::tmp();
    dir.sample_tree();

    let mut out = vec!["already here".to_string()];
    collect_file_paths_into(&mut out, dir.root(), false, false).unwrap();
    assert_eq!(out, vec!["already here".to_string(), "x.txt".to_string()]);
}

#[test]
fn into_keeps_partial_results() {
    let dir = Dir::tmp();
    dir.touch("short");
    dir.touch("sub/0123456789abcdef");
    let limit = dir.root().len() + 12;

    let mut out = vec![];
    let err = WalkDir::new(dir.root())
        .recursive(true)
        .max_path_bytes(limit)
        .collect_files_into(&mut out, false)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::PathTooLong);
    assert_eq!(out, owned(&["short"]));

    let err = WalkDir::new(dir.root())
        .recursive(true)
        .max_path_bytes(limit)
        .collect_files(false)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::PathTooLong);
}

#[test]
fn into_keeps_nothing_new_on_open_failure() {
    let dir = Dir::tmp();

    let mut out = vec!["kept".to_string()];
    let err = collect_file_paths_into(&mut out, &dir.join("missing/"), true, true).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DirOpen);
    assert_eq!(out, owned(&["kept"]));
}
