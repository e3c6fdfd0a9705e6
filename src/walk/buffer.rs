use crate::error::Error;
use crate::wd::{self, IntoOk, SEPARATOR};

/// The one path buffer of a traversal.
///
/// Layout: `{root}{relative dir}{name}`. `root_len` and `dir_len` mark the
/// two boundaries; everything past `dir_len` is scratch that is rewritten
/// for each entry. The string is reserved once to `capacity`, so a walk
/// never reallocates it.
#[derive(Debug)]
pub struct PathBuffer {
    buf:        String,
    root_len:   usize,
    dir_len:    usize,
    /// Maximum length in bytes, including the terminator a native call
    /// appends; a stored path is always strictly shorter.
    capacity:   usize,
}

impl PathBuffer {
    /// Make new buffer holding `root`.
    pub fn new(root: &str, capacity: usize) -> wd::Result<Self> {
        if root.len() >= capacity {
            return Err(Error::path_too_long(root.to_string(), root.len(), capacity));
        }
        let mut buf = String::with_capacity(capacity);
        buf.push_str(root);
        Self {
            buf,
            root_len:   root.len(),
            dir_len:    root.len(),
            capacity,
        }.into_ok()
    }

    fn check_fits(&self, keep: usize, parts: &[&str]) -> wd::Result<()> {
        let len = keep + parts.iter().map(|p| p.len()).sum::<usize>();
        if len >= self.capacity {
            let mut path = self.buf[..keep].to_string();
            for part in parts {
                path.push_str(part);
            }
            return Err(Error::path_too_long(path, len, self.capacity));
        }
        Ok(())
    }

    /// Replace the relative directory part (must be empty or end with `/`)
    /// and drop the current name.
    pub fn set_dir(&mut self, rel_dir: &str) -> wd::Result<()> {
        debug_assert!(rel_dir.is_empty() || rel_dir.ends_with(SEPARATOR));
        self.check_fits(self.root_len, &[rel_dir])?;
        self.buf.truncate(self.root_len);
        self.buf.push_str(rel_dir);
        self.dir_len = self.buf.len();
        Ok(())
    }

    /// Replace the name part.
    pub fn set_name(&mut self, name: &str) -> wd::Result<()> {
        self.check_fits(self.dir_len, &[name])?;
        self.buf.truncate(self.dir_len);
        self.buf.push_str(name);
        Ok(())
    }

    /// Replace the name part with a directory name, adding the trailing `/`.
    pub fn set_dir_name(&mut self, name: &str) -> wd::Result<()> {
        self.check_fits(self.dir_len, &[name, "/"])?;
        self.buf.truncate(self.dir_len);
        self.buf.push_str(name);
        self.buf.push(SEPARATOR);
        Ok(())
    }

    /// Drop the name part.
    pub fn clear_name(&mut self) {
        self.buf.truncate(self.dir_len);
    }

    /// The root the traversal started from
    pub fn root(&self) -> &str {
        &self.buf[..self.root_len]
    }

    /// Root plus relative directory
    pub fn dir(&self) -> &str {
        &self.buf[..self.dir_len]
    }

    /// Relative directory only
    pub fn rel_dir(&self) -> &str {
        &self.buf[self.root_len..self.dir_len]
    }

    /// Current name only
    pub fn name(&self) -> &str {
        &self.buf[self.dir_len..]
    }

    /// Full path of the current entry
    pub fn full(&self) -> &str {
        &self.buf
    }

    /// Path of the current entry relative to the root
    pub fn rel_full(&self) -> &str {
        &self.buf[self.root_len..]
    }

    /// Maximum length in bytes (terminator included)
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Checks the layout invariants; used under `debug_assertions` only.
    pub fn check_invariants(&self, root: &str) {
        assert_eq!(self.root(), root, "root prefix was overwritten");
        assert!(self.root_len <= self.dir_len && self.dir_len <= self.buf.len());
        assert!(self.buf.len() < self.capacity);
    }
}
