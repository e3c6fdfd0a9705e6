use std::fmt::Debug;
use std::io;

mod standard;
#[cfg(unix)]
mod unix;
#[cfg(windows)]
mod windows;

pub use self::standard::StandardDirCursor;

#[cfg(unix)]
pub use self::unix::UnixDirCursor;
#[cfg(windows)]
pub use self::windows::WindowsDirCursor;

#[cfg(not(any(unix, windows)))]
/// Default platform-specific cursor.
pub type DefaultDirCursor = StandardDirCursor;
#[cfg(unix)]
/// Default platform-specific cursor.
pub type DefaultDirCursor = UnixDirCursor;
#[cfg(windows)]
/// Default platform-specific cursor.
pub type DefaultDirCursor = WindowsDirCursor;

#[cfg(unix)]
/// Default traversal buffer capacity in bytes, terminator included.
pub const DEFAULT_MAX_PATH_BYTES: usize = nix::libc::PATH_MAX as usize;
#[cfg(not(unix))]
/// Default traversal buffer capacity in bytes, terminator included.
pub const DEFAULT_MAX_PATH_BYTES: usize = 0x1000;

///////////////////////////////////////////////////////////////////////////////////////////////

/// One open native directory handle.
///
/// Implementations wrap whatever the platform offers (`opendir`/`readdir`,
/// `FindFirstFileExW`/`FindNextFileW`, `std::fs::ReadDir`) and keep the
/// current entry's name in an internal buffer so that no allocation happens
/// per entry. The handle is closed when the value is dropped.
///
/// Implementations do not need to filter `.` and `..`; the walker does.
pub trait FsDirCursor: Debug + Sized {
    /// Open `dir` (a `/`-terminated UTF-8 path) for enumeration
    fn open(dir: &str) -> io::Result<Self>;

    /// Move to the next raw entry.
    ///
    /// Returns `Ok(false)` once the directory is exhausted. A name that
    /// cannot be decoded as UTF-8 is reported as `io::ErrorKind::InvalidData`.
    fn advance(&mut self) -> io::Result<bool>;

    /// Bare name of the current entry
    fn name(&self) -> &str;

    /// Is the current entry a directory that may be descended into?
    fn is_dir(&self) -> bool;

    /// Does the current entry carry a read-only attribute that blocks deletion?
    fn is_readonly(&self) -> bool {
        false
    }

    /// Is the current entry a link that behaves like a directory for removal
    /// (a Windows junction or directory symlink)?
    fn is_dir_link(&self) -> bool {
        false
    }

    /// Clear the read-only attribute of the current entry, which lives at `path`
    fn clear_readonly(&self, _path: &str) -> io::Result<()> {
        Ok(())
    }
}

/// Is `name` one of the `.` / `..` pseudo entries?
pub fn is_dot_name(name: &str) -> bool {
    name == "." || name == ".."
}
