use std::fmt;
use std::io;

/// Which single-entry operation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOp {
    /// Copying a file
    Copy,
    /// Moving (renaming) a file
    Move,
    /// Deleting a file
    Delete,
    /// Removing an (empty) directory
    RemoveDir,
    /// Creating a directory
    MakeDir,
    /// Clearing the read-only attribute before a delete
    ClearReadonly,
}

impl FileOp {
    fn as_str(self) -> &'static str {
        match self {
            FileOp::Copy            => "copy",
            FileOp::Move            => "move",
            FileOp::Delete          => "delete",
            FileOp::RemoveDir       => "remove directory",
            FileOp::MakeDir         => "make directory",
            FileOp::ClearReadonly   => "clear read-only attribute",
        }
    }
}

impl fmt::Display for FileOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The category of an [`Error`].
///
/// `DirFormat` is always a caller mistake. The others come from the
/// environment and may be worth retrying or reporting.
///
/// [`Error`]: struct.Error.html
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A directory argument does not end with `/`
    DirFormat,
    /// A directory could not be opened or enumerated
    DirOpen,
    /// A path would not fit in the traversal buffer
    PathTooLong,
    /// A single file or directory operation failed
    FileOp,
    /// A native entry name cannot be represented as UTF-8
    Encoding,
}

/// An error produced by this crate.
///
/// Besides the [`ErrorKind`], it carries the path the failing operation
/// was working on and, for environmental failures, the original
/// [`std::io::Error`].
///
/// To maintain good ergonomics, this type has a
/// [`impl From<Error> for std::io::Error`][impl] defined which preserves the
/// original context.
///
/// [`ErrorKind`]: enum.ErrorKind.html
/// [`std::io::Error`]: https://doc.rust-lang.org/stable/std/io/struct.Error.html
/// [impl]: struct.Error.html#impl-From%3CError%3E
#[derive(Debug)]
pub struct Error {
    inner: ErrorInner,
}

#[derive(Debug)]
pub(crate) enum ErrorInner {
    DirFormat { path: String },
    DirOpen { path: String, err: io::Error },
    PathTooLong { path: String, len: usize, max: usize },
    FileOp { op: FileOp, path: String, err: io::Error },
    Encoding { dir: String, err: io::Error },
}

impl Error {
    pub(crate) fn from_inner(inner: ErrorInner) -> Self {
        Self { inner }
    }

    pub(crate) fn dir_format(path: &str) -> Self {
        Self::from_inner(ErrorInner::DirFormat { path: path.to_string() })
    }

    /// Classifies a native open/read failure. A name that is not UTF-8
    /// arrives as `InvalidData` and becomes `Encoding`.
    pub(crate) fn dir_open(path: &str, err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::InvalidData {
            return Self::from_inner(ErrorInner::Encoding { dir: path.to_string(), err });
        }
        Self::from_inner(ErrorInner::DirOpen { path: path.to_string(), err })
    }

    pub(crate) fn path_too_long(path: String, len: usize, max: usize) -> Self {
        Self::from_inner(ErrorInner::PathTooLong { path, len, max })
    }

    pub(crate) fn op_failed(op: FileOp, path: &str, err: io::Error) -> Self {
        Self::from_inner(ErrorInner::FileOp { op, path: path.to_string(), err })
    }

    /// Returns the category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self.inner {
            ErrorInner::DirFormat { .. }    => ErrorKind::DirFormat,
            ErrorInner::DirOpen { .. }      => ErrorKind::DirOpen,
            ErrorInner::PathTooLong { .. }  => ErrorKind::PathTooLong,
            ErrorInner::FileOp { .. }       => ErrorKind::FileOp,
            ErrorInner::Encoding { .. }     => ErrorKind::Encoding,
        }
    }

    /// Returns the path associated with this error.
    ///
    /// For `PathTooLong` this is the prefix that was already in the buffer
    /// plus the component that did not fit. For `Encoding` it is the
    /// directory that contained the offending name.
    pub fn path(&self) -> &str {
        match self.inner {
            ErrorInner::DirFormat { ref path }          => path,
            ErrorInner::DirOpen { ref path, .. }        => path,
            ErrorInner::PathTooLong { ref path, .. }    => path,
            ErrorInner::FileOp { ref path, .. }         => path,
            ErrorInner::Encoding { ref dir, .. }        => dir,
        }
    }

    /// Returns the failed operation if this is a `FileOp` error.
    pub fn file_op(&self) -> Option<FileOp> {
        match self.inner {
            ErrorInner::FileOp { op, .. } => Some(op),
            _ => None,
        }
    }

    /// Inspect the original [`io::Error`] if there is one.
    ///
    /// `DirFormat` and `PathTooLong` are detected by this crate before any
    /// system call is made, so they have none.
    ///
    /// [`io::Error`]: https://doc.rust-lang.org/stable/std/io/struct.Error.html
    pub fn io_error(&self) -> Option<&io::Error> {
        match self.inner {
            ErrorInner::DirOpen { ref err, .. }     => Some(err),
            ErrorInner::FileOp { ref err, .. }      => Some(err),
            ErrorInner::Encoding { ref err, .. }    => Some(err),
            ErrorInner::DirFormat { .. }            => None,
            ErrorInner::PathTooLong { .. }          => None,
        }
    }

    /// Similar to [`io_error`] except consumes self to convert to the
    /// original [`io::Error`] if one exists.
    ///
    /// [`io_error`]: struct.Error.html#method.io_error
    /// [`io::Error`]: https://doc.rust-lang.org/stable/std/io/struct.Error.html
    pub fn into_io_error(self) -> Option<io::Error> {
        match self.inner {
            ErrorInner::DirOpen { err, .. }     => Some(err),
            ErrorInner::FileOp { err, .. }      => Some(err),
            ErrorInner::Encoding { err, .. }    => Some(err),
            ErrorInner::DirFormat { .. }        => None,
            ErrorInner::PathTooLong { .. }      => None,
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.inner {
            ErrorInner::DirOpen { ref err, .. }     => Some(err),
            ErrorInner::FileOp { ref err, .. }      => Some(err),
            ErrorInner::Encoding { ref err, .. }    => Some(err),
            ErrorInner::DirFormat { .. }            => None,
            ErrorInner::PathTooLong { .. }          => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inner {
            ErrorInner::DirFormat { ref path } => {
                write!(f, "directory path must end with '/': '{}'", path)
            }
            ErrorInner::DirOpen { ref path, ref err } => {
                write!(f, "cannot open directory '{}': {}", path, err)
            }
            ErrorInner::PathTooLong { ref path, len, max } => write!(
                f,
                "path of {} bytes exceeds the {} byte limit: '{}'",
                len, max, path
            ),
            ErrorInner::FileOp { op, ref path, ref err } => {
                write!(f, "cannot {} '{}': {}", op, path, err)
            }
            ErrorInner::Encoding { ref dir, ref err } => {
                write!(f, "entry name in '{}' is not valid UTF-8: {}", dir, err)
            }
        }
    }
}

impl From<Error> for io::Error {
    /// Convert the [`Error`] to an [`io::Error`], preserving the original
    /// [`Error`] as the ["inner error"]. Note that this also makes the display
    /// of the error include the context.
    ///
    /// This is different from [`into_io_error`] which returns the original
    /// [`io::Error`].
    ///
    /// [`Error`]: struct.Error.html
    /// [`io::Error`]: https://doc.rust-lang.org/stable/std/io/struct.Error.html
    /// ["inner error"]: https://doc.rust-lang.org/std/io/struct.Error.html#method.into_inner
    /// [`into_io_error`]: struct.Error.html#method.into_io_error
    fn from(err: Error) -> io::Error {
        let kind = match err.inner {
            ErrorInner::DirFormat { .. }    => io::ErrorKind::InvalidInput,
            ErrorInner::PathTooLong { .. }  => io::ErrorKind::InvalidInput,
            ErrorInner::Encoding { .. }     => io::ErrorKind::InvalidData,
            ErrorInner::DirOpen { ref err, .. } | ErrorInner::FileOp { ref err, .. } => err.kind(),
        };
        io::Error::new(kind, err)
    }
}
