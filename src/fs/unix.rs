use super::FsDirCursor;
use crate::wd::IntoOk;

use nix::dir::{Dir, OwningIter, Type};
use nix::fcntl::OFlag;
use nix::sys::stat::Mode;

use std::fmt;
use std::io;

///////////////////////////////////////////////////////////////////////////////////////////////

/// An opendir/readdir based FsDirCursor.
///
/// The entry type comes straight from `d_type`. File systems that report
/// `DT_UNKNOWN` fall back to an `lstat` of the entry.
pub struct UnixDirCursor {
    entries:    OwningIter,
    /// The opened directory, kept for the lstat fallback
    dir:        String,
    name:       String,
    is_dir:     bool,
}

impl UnixDirCursor {
    fn lstat_is_dir(&self) -> bool {
        let mut path = String::with_capacity(self.dir.len() + self.name.len());
        path.push_str(&self.dir);
        path.push_str(&self.name);
        match std::fs::symlink_metadata(&path) {
            Ok(md) => md.is_dir(),
            // Vanished between readdir and lstat; nothing to descend into.
            Err(_) => false,
        }
    }
}

impl fmt::Debug for UnixDirCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnixDirCursor")
            .field("dir", &self.dir)
            .field("name", &self.name)
            .field("is_dir", &self.is_dir)
            .finish()
    }
}

/// Functions for FsDirCursor
impl FsDirCursor for UnixDirCursor {
    fn open(dir: &str) -> io::Result<Self> {
        let handle = Dir::open(
            dir,
            OFlag::O_RDONLY | OFlag::O_DIRECTORY | OFlag::O_CLOEXEC,
            Mode::empty(),
        ).map_err(io::Error::from)?;

        Self {
            entries:    handle.into_iter(),
            dir:        dir.to_string(),
            name:       String::new(),
            is_dir:     false,
        }.into_ok()
    }

    fn advance(&mut self) -> io::Result<bool> {
        let entry = match self.entries.next() {
            Some(r) => r.map_err(io::Error::from)?,
            None => return Ok(false),
        };

        let name = entry.file_name().to_str().map_err(|err| {
            io::Error::new(io::ErrorKind::InvalidData, err)
        })?;

        self.name.clear();
        self.name.push_str(name);

        self.is_dir = match entry.file_type() {
            Some(Type::Directory) => true,
            Some(_) => false,
            None => self.lstat_is_dir(),
        };

        Ok(true)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_dir(&self) -> bool {
        self.is_dir
    }
}
