use crate::ops::exists;
use crate::tests::util::{inject, Dir, Fault, FaultyCursor, GHOST, LOCKED};
use crate::{
    collect_file_paths, erase_directory, erase_directory_contents, EraseDir, ErrorKind, FileOp,
};

fn is_empty_dir(path: &str) -> bool {
    std::fs::read_dir(path).map(|mut it| it.next().is_none()).unwrap_or(false)
}

#[test]
fn contents_only() {
    let dir = Dir::tmp();
    dir.sample_tree();

    let report = erase_directory_contents(dir.root()).unwrap();
    assert!(report.is_clean());
    assert_eq!(report.files_removed(), 3);
    assert_eq!(report.dirs_removed(), 1);
    assert!(exists(dir.root()));
    assert!(is_empty_dir(dir.root()));
}

#[test]
fn whole_tree() {
    let dir = Dir::tmp();
    dir.sample_tree();
    dir.touch("a/b/c/d/e.txt");
    dir.mkdirp("a/empty");

    let report = erase_directory(dir.root(), true).unwrap();
    assert!(report.is_clean());
    assert_eq!(report.files_removed(), 4);
    // sub, a, a/b, a/b/c, a/b/c/d, a/empty and the root
    assert_eq!(report.dirs_removed(), 7);
    assert!(!exists(dir.root()));

    let err = erase_directory(dir.root(), true).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DirOpen);
}

#[test]
fn empty_root() {
    let dir = Dir::tmp();

    let report = erase_directory_contents(dir.root()).unwrap();
    assert_eq!(report.files_removed(), 0);
    assert_eq!(report.dirs_removed(), 0);
    assert!(exists(dir.root()));
}

#[test]
fn non_recursive() {
    let dir = Dir::tmp();
    dir.touch("full/f");
    dir.mkdirp("empty");

    let err = erase_directory(&dir.join("full/"), false).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::FileOp);
    assert_eq!(err.file_op(), Some(FileOp::RemoveDir));
    assert!(exists(&dir.join("full/f")));

    let report = erase_directory(&dir.join("empty/"), false).unwrap();
    assert_eq!(report.dirs_removed(), 1);
    assert!(!exists(&dir.join("empty/")));
}

#[test]
fn root_must_be_dir_format() {
    let dir = Dir::tmp();
    dir.touch("keep");
    let root = dir.root().trim_end_matches('/');

    assert_eq!(erase_directory_contents(root).unwrap_err().kind(), ErrorKind::DirFormat);
    assert_eq!(erase_directory(root, true).unwrap_err().kind(), ErrorKind::DirFormat);
    assert_eq!(erase_directory(root, false).unwrap_err().kind(), ErrorKind::DirFormat);
    assert!(exists(&dir.join("keep")));
}

#[test]
fn failures_are_collected() {
    let dir = Dir::tmp();
    dir.touch("a.txt");
    dir.touch("sub/b.txt");
    inject(Fault::Ghost);

    let report = EraseDir::new(dir.root()).run_with::<FaultyCursor>().unwrap();
    assert!(!report.is_clean());
    assert_eq!(report.files_removed(), 2);
    assert_eq!(report.dirs_removed(), 1);

    // one made-up entry per visited directory
    let failures = report.failures();
    assert_eq!(failures.len(), 2);
    for err in failures {
        assert_eq!(err.kind(), ErrorKind::FileOp);
        assert_eq!(err.file_op(), Some(FileOp::Delete));
        assert!(err.path().ends_with(GHOST), "{}", err.path());
        assert_eq!(err.io_error().map(|e| e.kind()), Some(std::io::ErrorKind::NotFound));
    }
    assert!(is_empty_dir(dir.root()));
}

#[test]
fn readonly_that_cannot_be_cleared() {
    let dir = Dir::tmp();
    dir.touch("a.txt");
    inject(Fault::StuckReadonly);

    let report = EraseDir::new(dir.root())
        .remove_root(true)
        .run_with::<FaultyCursor>()
        .unwrap();
    let failures = report.into_failures();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].file_op(), Some(FileOp::ClearReadonly));
    assert_eq!(failures[0].path(), dir.join(GHOST));
    assert!(!exists(dir.root()));
}

#[test]
fn read_error_aborts() {
    let dir = Dir::tmp();
    dir.touch("a.txt");
    inject(Fault::ReadError);

    let err = EraseDir::new(dir.root()).run_with::<FaultyCursor>().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DirOpen);
    assert!(!exists(&dir.join("a.txt")));
}

#[test]
fn subdir_that_cannot_be_opened_aborts() {
    let dir = Dir::tmp();
    dir.touch(&format!("{}/b.txt", LOCKED));
    inject(Fault::Locked);

    let err = EraseDir::new(dir.root()).run_with::<FaultyCursor>().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DirOpen);
    assert_eq!(err.path(), dir.join("locked/"));
    assert!(exists(&dir.join("locked/b.txt")));
    assert!(exists(dir.root()));
}

#[test]
fn path_too_long_aborts() {
    let dir = Dir::tmp();
    dir.touch("sub/0123456789abcdef");

    let err = EraseDir::new(dir.root())
        .max_path_bytes(dir.root().len() + 12)
        .run()
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::PathTooLong);
    assert!(exists(&dir.join("sub/0123456789abcdef")));
}

#[test]
fn post_order_leaves_nothing_behind() {
    let dir = Dir::tmp();
    for i in 0..5 {
        dir.touch(&format!("l1-{}/l2/l3/file{}", i, i));
        dir.touch(&format!("l1-{}/side", i));
    }

    let report = erase_directory_contents(dir.root()).unwrap();
    assert!(report.is_clean());
    assert_eq!(report.files_removed(), 10);
    assert_eq!(report.dirs_removed(), 15);
    assert!(collect_file_paths(dir.root(), true, true).unwrap().is_empty());
    assert!(is_empty_dir(dir.root()));
}

#[cfg(unix)]
#[test]
fn symlinked_dir_is_not_followed() {
    let dir = Dir::tmp();
    let outside = Dir::tmp();
    outside.touch("precious.txt");
    dir.symlink(outside.root().trim_end_matches('/'), "link");

    let report = erase_directory(dir.root(), true).unwrap();
    assert!(report.is_clean());
    assert_eq!(report.files_removed(), 1);
    assert!(!exists(dir.root()));
    assert!(exists(&outside.join("precious.txt")));
}
