use crate::fs::FsDirCursor;
use crate::walk::opts::WalkDirBuilder;
use crate::walk::walker::TreeWalker;
use crate::wd;

/// Drives `walker` to the end, appending every file path to `out`.
///
/// Paths appended before a failure stay in `out`.
pub(crate) fn drain_files<C: FsDirCursor>(
    mut walker: TreeWalker<C>,
    out: &mut Vec<String>,
    with_root_prefix: bool,
) -> wd::Result<()> {
    let before = out.len();
    while walker.next_file()? {
        let path = if with_root_prefix {
            walker.current_path()
        } else {
            walker.current_rel_path()
        };
        out.push(path.to_string());
    }
    log::debug!("collected {} files under '{}'", out.len() - before, walker.root_dir());
    Ok(())
}

/// Lists the files under `root` (which must end with `/`).
///
/// "File" means any entry that is not a directory; symbolic links are
/// listed, never followed. With `with_root_prefix` the paths start with
/// `root`, otherwise they are relative to it. Order is the order the
/// operating system enumerates entries in, depth first.
///
/// On failure nothing is returned; see [`collect_file_paths_into`] for a
/// variant that keeps what was found before the failure.
///
/// ```no_run
/// use slashwalk::collect_file_paths;
///
/// # fn try_main() -> slashwalk::Result<()> {
/// for path in collect_file_paths("assets/", true, true)? {
///     println!("{}", path);
/// }
/// # Ok(())
/// # }
/// ```
///
/// [`collect_file_paths_into`]: fn.collect_file_paths_into.html
pub fn collect_file_paths(
    root: &str,
    with_root_prefix: bool,
    recursive: bool,
) -> wd::Result<Vec<String>> {
    WalkDirBuilder::new(root)
        .recursive(recursive)
        .collect_files(with_root_prefix)
}

/// Like [`collect_file_paths`], but appends to `out`.
///
/// If the walk fails part way, `out` keeps every path appended before the
/// failure and the error is returned.
///
/// [`collect_file_paths`]: fn.collect_file_paths.html
pub fn collect_file_paths_into(
    out: &mut Vec<String>,
    root: &str,
    with_root_prefix: bool,
    recursive: bool,
) -> wd::Result<()> {
    WalkDirBuilder::new(root)
        .recursive(recursive)
        .collect_files_into(out, with_root_prefix)
}
