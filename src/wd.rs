use crate::error::Error;

/// An useful wrapper for Some(...) ready to chaining
pub trait IntoSome<T> {
    /// Some(...)
    fn into_some(self) -> Option<T>;
}

impl<T> IntoSome<T> for T {
    fn into_some(self) -> Option<Self> {
        Some(self)
    }
}

/// An useful wrapper for Ok(...) ready to chaining
pub trait IntoOk<T, E> {
    /// Ok(...)
    fn into_ok(self) -> std::result::Result<T, E>;
}

impl<T, E> IntoOk<T, E> for T {
    fn into_ok(self) -> std::result::Result<Self, E> {
        Ok(self)
    }
}

/// An useful wrapper for Err(...) ready to chaining
pub trait IntoErr<T, E> {
    /// Err(...)
    fn into_err(self) -> std::result::Result<T, E>;
}

impl<T, E> IntoErr<T, E> for E {
    fn into_err(self) -> std::result::Result<T, Self> {
        Err(self)
    }
}

/// Type of depth
pub type Depth = usize;

/// A result type for every fallible operation of this crate.
///
/// If you only care about the underlying OS error, the crate [`Error`]
/// converts into [`io::Error`] so `?` works inside functions returning
/// [`io::Result`].
///
/// [`Error`]: struct.Error.html
/// [`io::Error`]: https://doc.rust-lang.org/stable/std/io/struct.Error.html
/// [`io::Result`]: https://doc.rust-lang.org/stable/std/io/type.Result.html
pub type Result<T> = ::std::result::Result<T, Error>;

/// The path separator used by every path this crate accepts and produces.
pub const SEPARATOR: char = '/';

/// What kind of entry a walker is positioned on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Anything that is not a directory (regular files, symlinks, devices...)
    File,
    /// A directory; its name and path carry a trailing `/`
    Dir,
}

impl EntryKind {
    /// Is it dir?
    pub fn is_dir(self) -> bool {
        self == EntryKind::Dir
    }
    /// Is it file?
    pub fn is_file(self) -> bool {
        self == EntryKind::File
    }
}

/// Lifecycle of a walker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkState {
    /// Root validated but not opened yet
    Init,
    /// A directory handle is open and being drained
    VisitingDir,
    /// Nothing left to yield (or the walk was aborted by an error)
    Exhausted,
}
