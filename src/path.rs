//! Pure string helpers for `/`-delimited paths. Nothing here touches the
//! filesystem.

use crate::error::Error;
use crate::wd::{self, IntoOk, IntoErr, SEPARATOR};

/// Returns the final component of `path`: everything after the last `/`.
///
/// A directory path (ending in `/`) has an empty final component.
///
/// ```
/// use slashwalk::path::file_name;
///
/// assert_eq!(file_name("a/b/c.txt"), "c.txt");
/// assert_eq!(file_name("a/b/"), "");
/// assert_eq!(file_name("c.txt"), "c.txt");
/// ```
pub fn file_name(path: &str) -> &str {
    match path.rfind(SEPARATOR) {
        Some(pos) => &path[pos + 1..],
        None => path,
    }
}

/// Returns the suffix of the final component, dot included.
///
/// The search runs backwards and stops at the first `/`, so dots in
/// directory names are never considered. A component that ends in a dot
/// (such as `.` or `..`) has the suffix `"."`.
///
/// ```
/// use slashwalk::path::file_suffix;
///
/// assert_eq!(file_suffix("a/b/c.txt"), ".txt");
/// assert_eq!(file_suffix("a.d/b"), "");
/// assert_eq!(file_suffix("a/b/."), ".");
/// ```
pub fn file_suffix(path: &str) -> &str {
    match suffix_pos(path) {
        Some(pos) => &path[pos..],
        None => "",
    }
}

/// Returns `path` with the suffix of its final component removed.
///
/// Paths without a suffix are returned unchanged.
///
/// ```
/// use slashwalk::path::file_suffix_del;
///
/// assert_eq!(file_suffix_del("a/b/c.txt"), "a/b/c");
/// assert_eq!(file_suffix_del("a/b/."), "a/b/");
/// assert_eq!(file_suffix_del("a/b/c"), "a/b/c");
/// ```
pub fn file_suffix_del(path: &str) -> &str {
    match suffix_pos(path) {
        Some(pos) => &path[..pos],
        None => path,
    }
}

/// Returns the final component without its suffix.
///
/// ```
/// use slashwalk::path::file_stem;
///
/// assert_eq!(file_stem("a/b/archive.tar.gz"), "archive.tar");
/// ```
pub fn file_stem(path: &str) -> &str {
    file_suffix_del(file_name(path))
}

/// Is `path` in directory format (ends with `/`)?
pub fn is_dir_path(path: &str) -> bool {
    path.ends_with(SEPARATOR)
}

/// Fails with `ErrorKind::DirFormat` unless `path` ends with `/`.
pub fn ensure_dir_path(path: &str) -> wd::Result<()> {
    if is_dir_path(path) {
        ().into_ok()
    } else {
        Error::dir_format(path).into_err()
    }
}

fn suffix_pos(path: &str) -> Option<usize> {
    let name_start = path.rfind(SEPARATOR).map_or(0, |pos| pos + 1);
    path[name_start..].rfind('.').map(|pos| name_start + pos)
}
