//! Single-entry file and directory operations.
//!
//! These are thin wrappers over `std::fs` that speak the same path dialect
//! as the walkers: UTF-8 strings, `/` separated, directories ending in `/`.
//! Failures come back as errors of kind `FileOp` that name the operation
//! and the path involved.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::PathBuf;

use crate::error::{Error, FileOp};
use crate::path;
use crate::wd::{self, IntoOk, SEPARATOR};

/// Does anything exist at `path`? Symbolic links are followed.
pub fn exists(path: &str) -> bool {
    fs::metadata(path).is_ok()
}

/// Size of the file at `path` in bytes, or `None` if it cannot be queried.
pub fn file_size(path: &str) -> Option<u64> {
    fs::metadata(path).ok().map(|md| md.len())
}

/// Deletes the file at `path`.
pub fn file_delete(path: &str) -> wd::Result<()> {
    fs::remove_file(path).map_err(|err| Error::op_failed(FileOp::Delete, path, err))
}

/// Moves (renames) `src` to `dst`, replacing `dst` where the platform allows.
///
/// The error names `src` when it does not exist and `dst` otherwise.
pub fn file_move(src: &str, dst: &str) -> wd::Result<()> {
    fs::rename(src, dst).map_err(|err| {
        let path = if fs::symlink_metadata(src).is_ok() { dst } else { src };
        Error::op_failed(FileOp::Move, path, err)
    })
}

/// Copies the contents of `src` into `dst` and returns the number of bytes
/// copied.
///
/// With `fail_if_exists` the copy fails if `dst` already exists; otherwise
/// `dst` is truncated first. Copying a file onto itself always fails and
/// leaves it untouched.
///
/// ```no_run
/// use slashwalk::ops::file_copy;
///
/// # fn try_main() -> slashwalk::Result<()> {
/// let bytes = file_copy("save/slot1.dat", "save/slot1.bak", false)?;
/// println!("{} bytes backed up", bytes);
/// # Ok(())
/// # }
/// ```
pub fn file_copy(src: &str, dst: &str, fail_if_exists: bool) -> wd::Result<u64> {
    let copy_err = |path: &str, err: io::Error| Error::op_failed(FileOp::Copy, path, err);

    // Truncating dst would destroy src when both name the same file.
    if let Ok(true) = same_file::is_same_file(src, dst) {
        let err = io::Error::new(io::ErrorKind::InvalidInput, "source and destination are the same file");
        return Err(copy_err(dst, err));
    }

    let mut reader = File::open(src).map_err(|err| copy_err(src, err))?;

    let mut options = OpenOptions::new();
    options.write(true);
    if fail_if_exists {
        options.create_new(true);
    } else {
        options.create(true).truncate(true);
    }
    let mut writer = options.open(dst).map_err(|err| copy_err(dst, err))?;

    io::copy(&mut reader, &mut writer).map_err(|err| copy_err(dst, err))
}

/// Creates the directory `path` (which must end with `/`).
///
/// With `recursive` every missing ancestor is created as well and an
/// existing directory is not an error.
///
/// ```no_run
/// # fn try_main() -> slashwalk::Result<()> {
/// slashwalk::ops::dir_make("out/a/b/c/", true)?;
/// assert!(slashwalk::ops::exists("out/a/b/"));
/// # Ok(())
/// # }
/// ```
pub fn dir_make(path: &str, recursive: bool) -> wd::Result<()> {
    path::ensure_dir_path(path)?;
    fs::DirBuilder::new()
        .recursive(recursive)
        .create(path)
        .map_err(|err| Error::op_failed(FileOp::MakeDir, path, err))
}

/// Removes the empty directory `path` (which must end with `/`).
pub fn dir_remove(path: &str) -> wd::Result<()> {
    path::ensure_dir_path(path)?;
    fs::remove_dir(path).map_err(|err| Error::op_failed(FileOp::RemoveDir, path, err))
}

fn into_slash_string(path: PathBuf) -> io::Result<String> {
    let path = path.into_os_string().into_string().map_err(|raw| {
        io::Error::new(io::ErrorKind::InvalidData, format!("{:?} is not valid UTF-8", raw))
    })?;
    if cfg!(windows) {
        return path.replace('\\', "/").into_ok();
    }
    path.into_ok()
}

/// The working directory in directory format: `/` separated, with a
/// trailing `/`.
pub fn current_dir() -> io::Result<String> {
    let mut dir = into_slash_string(std::env::current_dir()?)?;
    if !path::is_dir_path(&dir) {
        dir.push(SEPARATOR);
    }
    dir.into_ok()
}

/// Full path of the running executable, `/` separated.
pub fn current_exe_path() -> io::Result<String> {
    into_slash_string(std::env::current_exe()?)
}

/// Directory of the running executable, with a trailing `/`.
pub fn current_exe_dir() -> io::Result<String> {
    let mut exe = current_exe_path()?;
    let name_len = path::file_name(&exe).len();
    exe.truncate(exe.len() - name_len);
    exe.into_ok()
}
