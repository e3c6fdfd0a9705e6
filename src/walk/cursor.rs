use crate::error::Error;
use crate::fs::{self, FsDirCursor};
use crate::wd::{self, EntryKind, IntoOk};

/// A transient view of the entry a [`DirCursor`] is positioned on.
///
/// It borrows the cursor, so it is gone before the next `advance`.
///
/// [`DirCursor`]: struct.DirCursor.html
#[derive(Debug, Clone, Copy)]
pub struct Entry<'a> {
    name:       &'a str,
    is_dir:     bool,
    readonly:   bool,
    dir_link:   bool,
}

impl<'a> Entry<'a> {
    /// Bare name, without any separator
    pub fn name(&self) -> &'a str {
        self.name
    }
    /// Is it dir?
    pub fn is_dir(&self) -> bool {
        self.is_dir
    }
    /// Kind of this entry
    pub fn kind(&self) -> EntryKind {
        if self.is_dir { EntryKind::Dir } else { EntryKind::File }
    }
    /// Is it marked read-only (Windows only)?
    pub fn is_readonly(&self) -> bool {
        self.readonly
    }
    /// Is it a directory link (Windows only)?
    pub fn is_dir_link(&self) -> bool {
        self.dir_link
    }
}

/////////////////////////////////////////////////////////////////////////
//// DirCursor

/// One open directory, with `.` and `..` filtered out.
///
/// Once exhausted it stays exhausted: further `advance` calls return
/// `Ok(false)` without touching the native handle again.
#[derive(Debug)]
pub struct DirCursor<C: FsDirCursor> {
    inner:      C,
    /// The opened directory, named by read errors
    dir:        String,
    exhausted:  bool,
}

impl<C: FsDirCursor> DirCursor<C> {
    /// Open `dir` (must end with `/`)
    pub fn open(dir: &str) -> wd::Result<Self> {
        log::debug!("opening directory '{}'", dir);
        let inner = C::open(dir).map_err(|err| Error::dir_open(dir, err))?;
        Self { inner, dir: dir.to_string(), exhausted: false }.into_ok()
    }

    /// Move to the next real entry.
    pub fn advance(&mut self) -> wd::Result<bool> {
        if self.exhausted {
            return Ok(false);
        }
        loop {
            match self.inner.advance() {
                Ok(true) => {
                    if fs::is_dot_name(self.inner.name()) {
                        continue;
                    }
                    return Ok(true);
                }
                Ok(false) => {
                    self.exhausted = true;
                    return Ok(false);
                }
                Err(err) => {
                    self.exhausted = true;
                    return Err(Error::dir_open(&self.dir, err));
                }
            }
        }
    }

    /// View of the current entry; meaningful only after `advance` returned `true`
    pub fn entry(&self) -> Entry<'_> {
        Entry {
            name:       self.inner.name(),
            is_dir:     self.inner.is_dir(),
            readonly:   self.inner.is_readonly(),
            dir_link:   self.inner.is_dir_link(),
        }
    }

    /// Clear the read-only attribute of the current entry, found at `path`
    pub fn clear_readonly(&self, path: &str) -> std::io::Result<()> {
        self.inner.clear_readonly(path)
    }

    /// The directory this cursor enumerates
    pub fn dir(&self) -> &str {
        &self.dir
    }

    /// Has the cursor run out of entries?
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }
}
