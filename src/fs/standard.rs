use super::FsDirCursor;
use crate::wd::IntoOk;

use std::io;

///////////////////////////////////////////////////////////////////////////////////////////////

/// A FsDirCursor implementation using std::fs::* objects
///
/// Portable, but every entry's name goes through an `OsString`. It is the
/// default only on targets without a dedicated backend.
#[derive(Debug)]
pub struct StandardDirCursor {
    inner:  std::fs::ReadDir,
    name:   String,
    is_dir: bool,
}

/// Functions for FsDirCursor
impl FsDirCursor for StandardDirCursor {
    fn open(dir: &str) -> io::Result<Self> {
        Self {
            inner:  std::fs::read_dir(dir)?,
            name:   String::new(),
            is_dir: false,
        }.into_ok()
    }

    fn advance(&mut self) -> io::Result<bool> {
        let dent = match self.inner.next() {
            Some(r) => r?,
            None => return Ok(false),
        };

        let name = dent.file_name();
        let name = name.to_str().ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidData, format!("{:?} is not valid UTF-8", name))
        })?;

        self.name.clear();
        self.name.push_str(name);
        // DirEntry::file_type does not follow symlinks
        self.is_dir = dent.file_type()?.is_dir();

        Ok(true)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_dir(&self) -> bool {
        self.is_dir
    }
}
