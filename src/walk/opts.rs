use crate::fs::{self, DefaultDirCursor, FsDirCursor};
use crate::walk::collect;
use crate::walk::erase::{EraseReport, RecursiveEraser};
use crate::walk::walker::{Paths, TreeWalker};
use crate::wd;

/////////////////////////////////////////////////////////////////////////
//// WalkDirOptions

/// Options for a TreeWalker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalkDirOptions {
    /// Descend into sub-directories -- otherwise only the root's own entries are visited
    pub recursive: bool,
    /// Yield directories from `into_paths` as well as files
    pub yield_dirs: bool,
    /// Capacity of the path buffer in bytes, terminator included
    pub max_path_bytes: usize,
}

impl Default for WalkDirOptions {
    fn default() -> Self {
        Self {
            recursive: false,
            yield_dirs: false,
            max_path_bytes: fs::DEFAULT_MAX_PATH_BYTES,
        }
    }
}

/////////////////////////////////////////////////////////////////////////
//// WalkDirBuilder

/// A builder to create a walker over a directory.
///
/// The root must end with `/`; this is checked when the walker is built,
/// which is also when the root is opened. Directory entries `.` and `..`
/// are always omitted and symbolic links are never followed.
///
/// # Usage
///
/// ```no_run
/// use slashwalk::WalkDir;
///
/// # fn try_main() -> slashwalk::Result<()> {
/// for path in WalkDir::new("foo/").recursive(true).build()?.into_file_paths() {
///     println!("{}", path?);
/// }
/// # Ok(())
/// # }
/// ```
///
/// Or, to collect everything at once:
///
/// ```no_run
/// use slashwalk::WalkDir;
///
/// # fn try_main() -> slashwalk::Result<()> {
/// let files = WalkDir::new("foo/").recursive(true).collect_files(false)?;
/// // relative paths such as "bar/baz.txt"
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct WalkDirBuilder {
    opts: WalkDirOptions,
    root: String,
}

impl WalkDirBuilder {
    /// Create a builder for a single-level walk of `root`.
    pub fn new<P: Into<String>>(root: P) -> Self {
        Self {
            opts: WalkDirOptions::default(),
            root: root.into(),
        }
    }

    /// Build the walker with the platform's default cursor
    pub fn build(self) -> wd::Result<TreeWalker<DefaultDirCursor>> {
        self.build_with::<DefaultDirCursor>()
    }

    /// Build the walker with a specific FsDirCursor implementation
    pub fn build_with<C: FsDirCursor>(self) -> wd::Result<TreeWalker<C>> {
        TreeWalker::<C>::with_options(&self.root, self.opts)
    }

    /// Build the walker and turn it into an iterator of owned paths
    pub fn into_paths(self) -> wd::Result<Paths<DefaultDirCursor>> {
        self.build().map(TreeWalker::into_paths)
    }

    /// Walk to completion and return every file path.
    ///
    /// With `with_root_prefix` the paths start with the root, otherwise they
    /// are relative to it. Nothing is returned if the walk fails part way.
    pub fn collect_files(self, with_root_prefix: bool) -> wd::Result<Vec<String>> {
        let mut out = Vec::new();
        self.collect_files_into(&mut out, with_root_prefix)?;
        Ok(out)
    }

    /// Walk to completion, appending every file path to `out`.
    ///
    /// Paths appended before a failure stay in `out`.
    pub fn collect_files_into(self, out: &mut Vec<String>, with_root_prefix: bool) -> wd::Result<()> {
        let walker = self.build()?;
        collect::drain_files(walker, out, with_root_prefix)
    }

    /// Descend into sub-directories.
    ///
    /// This is disabled by default.
    pub fn recursive(mut self, yes: bool) -> Self {
        self.opts.recursive = yes;
        self
    }

    /// Let [`into_paths`] yield directories (with a trailing `/`) too.
    ///
    /// This is disabled by default.
    ///
    /// [`into_paths`]: struct.TreeWalker.html#method.into_paths
    pub fn yield_dirs(mut self, yes: bool) -> Self {
        self.opts.yield_dirs = yes;
        self
    }

    /// Set the path buffer capacity, terminator included.
    ///
    /// Any path that would not fit fails with `ErrorKind::PathTooLong`.
    pub fn max_path_bytes(mut self, n: usize) -> Self {
        self.opts.max_path_bytes = n;
        self
    }

    /// Options collected so far
    pub fn options(&self) -> &WalkDirOptions {
        &self.opts
    }
}

/////////////////////////////////////////////////////////////////////////
//// EraseDirBuilder

/// Options for a RecursiveEraser
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EraseDirOptions {
    /// Remove the root itself once it is empty
    pub remove_root: bool,
    /// Capacity of the path buffer in bytes, terminator included
    pub max_path_bytes: usize,
}

impl Default for EraseDirOptions {
    fn default() -> Self {
        Self {
            remove_root: false,
            max_path_bytes: fs::DEFAULT_MAX_PATH_BYTES,
        }
    }
}

/// A builder for a post-order erase of a directory tree.
///
/// ```no_run
/// use slashwalk::EraseDir;
///
/// # fn try_main() -> slashwalk::Result<()> {
/// let report = EraseDir::new("build/").remove_root(true).run()?;
/// if !report.is_clean() {
///     for err in report.failures() {
///         eprintln!("{}", err);
///     }
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct EraseDirBuilder {
    opts: EraseDirOptions,
    root: String,
}

impl EraseDirBuilder {
    /// Create a builder that erases the contents of `root` and keeps `root`.
    pub fn new<P: Into<String>>(root: P) -> Self {
        Self {
            opts: EraseDirOptions::default(),
            root: root.into(),
        }
    }

    /// Remove the root directory too.
    ///
    /// This is disabled by default.
    pub fn remove_root(mut self, yes: bool) -> Self {
        self.opts.remove_root = yes;
        self
    }

    /// Set the path buffer capacity, terminator included.
    pub fn max_path_bytes(mut self, n: usize) -> Self {
        self.opts.max_path_bytes = n;
        self
    }

    /// Run the erase with the platform's default cursor
    pub fn run(self) -> wd::Result<EraseReport> {
        self.run_with::<DefaultDirCursor>()
    }

    /// Run the erase with a specific FsDirCursor implementation
    pub fn run_with<C: FsDirCursor>(self) -> wd::Result<EraseReport> {
        RecursiveEraser::<C>::new(&self.root, self.opts)?.run()
    }

    /// Options collected so far
    pub fn options(&self) -> &EraseDirOptions {
        &self.opts
    }
}
