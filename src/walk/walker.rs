use crate::fs::{DefaultDirCursor, FsDirCursor};
use crate::path;
use crate::walk::buffer::PathBuffer;
use crate::walk::cursor::DirCursor;
use crate::walk::opts::WalkDirOptions;
use crate::wd::{self, Depth, EntryKind, IntoOk, IntoSome, WalkState, SEPARATOR};

macro_rules! debug {
    ($($arg:tt)*) => (if cfg!(debug_assertions) { $($arg)* })
}

/// Which entries a single `advance` call stops at
#[derive(Debug, Clone, Copy)]
struct Want {
    files:  bool,
    dirs:   bool,
}

impl Want {
    const FILES: Want = Want { files: true, dirs: false };
    const DIRS: Want = Want { files: false, dirs: true };
    const ALL: Want = Want { files: true, dirs: true };
}

/////////////////////////////////////////////////////////////////////////
//// TreeWalker

/// A depth-first walker over one root directory.
///
/// The walker holds at most one open directory at a time, a stack of
/// sub-directories still to be visited (relative to the root, each ending
/// with `/`) and a single [`PathBuffer`] that is rewritten for every entry.
/// Position accessors such as [`current_path`] borrow that buffer, so their
/// results are only valid until the next call to a `next_*` method.
///
/// Any error ends the walk: the walker moves to [`WalkState::Exhausted`]
/// and every later `next_*` call reports exhaustion.
///
/// ```no_run
/// use slashwalk::TreeWalker;
///
/// # fn try_main() -> slashwalk::Result<()> {
/// let mut walker: TreeWalker = TreeWalker::open_recursive("assets/")?;
/// while walker.next_file()? {
///     if walker.is_suffix(".png") {
///         println!("{}", walker.current_path());
///     }
/// }
/// # Ok(())
/// # }
/// ```
///
/// [`PathBuffer`]: struct.PathBuffer.html
/// [`current_path`]: struct.TreeWalker.html#method.current_path
/// [`WalkState::Exhausted`]: enum.WalkState.html#variant.Exhausted
#[derive(Debug)]
pub struct TreeWalker<C: FsDirCursor = DefaultDirCursor> {
    opts:       WalkDirOptions,
    /// Copy of the root, for invariant checks
    root:       String,
    buffer:     PathBuffer,
    pending:    Vec<String>,
    cursor:     Option<DirCursor<C>>,
    state:      WalkState,
    current:    Option<EntryKind>,
}

impl<C: FsDirCursor> TreeWalker<C> {
    /// Single-level walker over `root` with default options.
    pub fn open(root: &str) -> wd::Result<Self> {
        Self::with_options(root, WalkDirOptions::default())
    }

    /// Recursive walker over `root` with default options.
    pub fn open_recursive(root: &str) -> wd::Result<Self> {
        Self::with_options(root, WalkDirOptions { recursive: true, ..WalkDirOptions::default() })
    }

    /// Validates `root`, reserves the path buffer and opens the root directory.
    pub fn with_options(root: &str, opts: WalkDirOptions) -> wd::Result<Self> {
        path::ensure_dir_path(root)?;
        let buffer = PathBuffer::new(root, opts.max_path_bytes)?;

        let mut walker = Self {
            opts,
            root:       root.to_string(),
            buffer,
            pending:    Vec::new(),
            cursor:     None,
            state:      WalkState::Init,
            current:    None,
        };
        walker.enter(String::new())?;
        walker.into_ok()
    }

    /// Points the buffer at `rel_dir` and opens it.
    fn enter(&mut self, rel_dir: String) -> wd::Result<()> {
        self.current = None;
        self.cursor = None;

        let opened = self.buffer.set_dir(&rel_dir)
            .and_then(|_| DirCursor::<C>::open(self.buffer.dir()));
        match opened {
            Ok(cursor) => {
                self.cursor = cursor.into_some();
                self.state = WalkState::VisitingDir;
                Ok(())
            }
            Err(err) => {
                self.finish();
                Err(err)
            }
        }
    }

    fn finish(&mut self) {
        if self.state != WalkState::Exhausted {
            log::debug!("walk of '{}' finished", self.buffer.root());
        }
        self.state = WalkState::Exhausted;
        self.cursor = None;
        self.current = None;
        self.pending.clear();
        self.buffer.clear_name();
    }

    fn fail<T>(&mut self, err: crate::error::Error) -> wd::Result<T> {
        self.finish();
        Err(err)
    }

    fn advance(&mut self, want: Want) -> wd::Result<Option<EntryKind>> {
        loop {
            if self.state == WalkState::Exhausted {
                return Ok(None);
            }

            let cursor = match self.cursor.as_mut() {
                Some(cursor) => cursor,
                None => {
                    self.finish();
                    return Ok(None);
                }
            };

            let found = match cursor.advance() {
                Ok(found) => found,
                Err(err) => return self.fail(err),
            };

            if !found {
                match self.pending.pop() {
                    Some(rel_dir) => {
                        self.enter(rel_dir)?;
                        continue;
                    }
                    None => {
                        self.finish();
                        return Ok(None);
                    }
                }
            }

            let entry = cursor.entry();
            let kind = entry.kind();

            let positioned = match kind {
                EntryKind::Dir => {
                    if self.opts.recursive {
                        let rel_dir = self.buffer.rel_dir();
                        let mut sub = String::with_capacity(rel_dir.len() + entry.name().len() + 1);
                        sub.push_str(rel_dir);
                        sub.push_str(entry.name());
                        sub.push(SEPARATOR);
                        self.pending.push(sub);
                    }
                    if !want.dirs {
                        continue;
                    }
                    self.buffer.set_dir_name(entry.name())
                }
                EntryKind::File => {
                    if !want.files {
                        continue;
                    }
                    self.buffer.set_name(entry.name())
                }
            };

            if let Err(err) = positioned {
                return self.fail(err);
            }

            debug!(self.buffer.check_invariants(&self.root));
            log::trace!("{:?} '{}'", kind, self.buffer.full());

            self.current = kind.into_some();
            return Ok(Some(kind));
        }
    }

    /// Moves to the next file (any non-directory entry).
    ///
    /// Returns `Ok(false)` once the walk is exhausted; calling again keeps
    /// returning `Ok(false)`.
    pub fn next_file(&mut self) -> wd::Result<bool> {
        self.advance(Want::FILES).map(|kind| kind.is_some())
    }

    /// Moves to the next directory. Its name and path end with `/`.
    ///
    /// A recursive walker still descends into directories it yields.
    pub fn next_dir(&mut self) -> wd::Result<bool> {
        self.advance(Want::DIRS).map(|kind| kind.is_some())
    }

    /// Moves to the next entry of either kind.
    pub fn next_entry(&mut self) -> wd::Result<Option<EntryKind>> {
        self.advance(Want::ALL)
    }

    /// Kind of the entry the walker is positioned on, if any
    pub fn current_kind(&self) -> Option<EntryKind> {
        self.current
    }

    /// Name of the current entry (`"sub/"` for a directory)
    pub fn current_name(&self) -> &str {
        self.buffer.name()
    }

    /// Full path of the current entry, root included
    pub fn current_path(&self) -> &str {
        self.buffer.full()
    }

    /// Path of the current entry relative to the root
    pub fn current_rel_path(&self) -> &str {
        self.buffer.rel_full()
    }

    /// Directory that contains the current entry, root included
    pub fn current_dir(&self) -> &str {
        self.buffer.dir()
    }

    /// The root this walker was opened on
    pub fn root_dir(&self) -> &str {
        &self.root
    }

    /// Current name without its suffix (and without the `/` of a directory)
    pub fn current_stem(&self) -> &str {
        path::file_stem(self.bare_name())
    }

    /// Is `suffix` (dot included, e.g. `".txt"`) the suffix of the current name?
    pub fn is_suffix(&self, suffix: &str) -> bool {
        path::file_suffix(self.bare_name()) == suffix
    }

    fn bare_name(&self) -> &str {
        self.buffer.name().trim_end_matches(SEPARATOR)
    }

    /// Lifecycle state
    pub fn state(&self) -> WalkState {
        self.state
    }

    /// How deep below the root the current directory is (0 for the root)
    pub fn depth(&self) -> Depth {
        self.buffer.rel_dir().matches(SEPARATOR).count()
    }

    /// Options the walker runs with
    pub fn options(&self) -> &WalkDirOptions {
        &self.opts
    }

    /// Owned full paths of every remaining file.
    pub fn into_file_paths(self) -> Paths<C> {
        Paths { walker: self, dirs: false }
    }

    /// Owned full paths of every remaining file, plus directories when the
    /// walker was built with `yield_dirs`.
    pub fn into_paths(self) -> Paths<C> {
        let dirs = self.opts.yield_dirs;
        Paths { walker: self, dirs }
    }
}

/////////////////////////////////////////////////////////////////////////
//// Paths

/// Iterator over owned paths produced by a [`TreeWalker`].
///
/// After the first `Err` it yields `None`.
///
/// [`TreeWalker`]: struct.TreeWalker.html
#[derive(Debug)]
pub struct Paths<C: FsDirCursor = DefaultDirCursor> {
    walker: TreeWalker<C>,
    dirs:   bool,
}

impl<C: FsDirCursor> Iterator for Paths<C> {
    type Item = wd::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let want = if self.dirs { Want::ALL } else { Want::FILES };
        match self.walker.advance(want) {
            Ok(Some(_)) => Some(Ok(self.walker.current_path().to_string())),
            Ok(None) => None,
            Err(err) => Some(Err(err)),
        }
    }
}
