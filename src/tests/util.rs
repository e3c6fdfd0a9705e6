use std::cell::Cell;
use std::fs::{self, File};
use std::io::{self, Write};

use crate::fs::{FsDirCursor, StandardDirCursor};

/// A temporary directory that is removed when dropped, with helpers that
/// take `/`-separated paths relative to it.
#[derive(Debug)]
pub struct Dir {
    dir: tempfile::TempDir,
    root: String,
}

impl Dir {
    /// Create a new temporary directory.
    pub fn tmp() -> Dir {
        let dir = tempfile::Builder::new()
            .prefix("slashwalk-")
            .tempdir()
            .expect("create temp dir");
        let mut root = dir
            .path()
            .to_str()
            .expect("temp dir path is UTF-8")
            .replace('\\', "/");
        root.push('/');
        Dir { dir, root }
    }

    /// Root in directory format
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Full path of `rel`
    pub fn join(&self, rel: &str) -> String {
        format!("{}{}", self.root, rel)
    }

    /// Create a directory and all of its parents.
    pub fn mkdirp(&self, rel: &str) {
        fs::create_dir_all(self.dir.path().join(rel)).expect("create dir");
    }

    /// Create an empty file (parents included).
    pub fn touch(&self, rel: &str) {
        self.write(rel, b"");
    }

    /// Create a file with the given contents (parents included).
    pub fn write(&self, rel: &str, data: &[u8]) {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent dir");
        }
        let mut file = File::create(&path).expect("create file");
        file.write_all(data).expect("write file");
    }

    /// Create a symlink at `link` pointing to the absolute path `target`.
    #[cfg(unix)]
    pub fn symlink(&self, target: &str, link: &str) {
        std::os::unix::fs::symlink(target, self.dir.path().join(link)).expect("create symlink");
    }

    /// Build the tree `{x.txt, sub/{y.txt, z.bin}}`.
    pub fn sample_tree(&self) {
        self.write("x.txt", b"x");
        self.write("sub/y.txt", b"yy");
        self.write("sub/z.bin", b"zzz");
    }
}

/// Sort a path list so comparisons do not depend on enumeration order.
pub fn sorted(mut paths: Vec<String>) -> Vec<String> {
    paths.sort();
    paths
}

/// Owned, sorted copies of `&str` paths.
pub fn owned(paths: &[&str]) -> Vec<String> {
    sorted(paths.iter().map(|p| p.to_string()).collect())
}

///////////////////////////////////////////////////////////////////////////////////////////////
//// Test cursors

thread_local! {
    static FAULT: Cell<Fault> = Cell::new(Fault::None);
}

/// What a `FaultyCursor` does once the real directory runs out, or at open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    /// Behave exactly like StandardDirCursor
    None,
    /// Report one extra file that does not exist
    Ghost,
    /// Report one extra read-only file whose attribute cannot be cleared
    StuckReadonly,
    /// Fail the read with an I/O error
    ReadError,
    /// Fail the read as if a name was not UTF-8
    BadName,
    /// Refuse to open any directory named `LOCKED`
    Locked,
}

/// Set the fault injected by every `FaultyCursor` on this thread.
pub fn inject(fault: Fault) {
    FAULT.with(|f| f.set(fault));
}

/// A StandardDirCursor that misbehaves after its last real entry, as
/// selected with `inject`. Every opened directory misbehaves once.
#[derive(Debug)]
pub struct FaultyCursor {
    inner: StandardDirCursor,
    fault: Fault,
    fired: bool,
    fake: bool,
}

/// Name of the entry a `FaultyCursor` makes up
pub const GHOST: &str = "ghost.txt";

/// Name of the directory `Fault::Locked` refuses to open
pub const LOCKED: &str = "locked";

impl FsDirCursor for FaultyCursor {
    fn open(dir: &str) -> io::Result<Self> {
        let fault = FAULT.with(|f| f.get());
        if fault == Fault::Locked && crate::path::file_name(dir.trim_end_matches('/')) == LOCKED {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "injected open error"));
        }
        Ok(FaultyCursor {
            inner: StandardDirCursor::open(dir)?,
            fault,
            fired: false,
            fake: false,
        })
    }

    fn advance(&mut self) -> io::Result<bool> {
        self.fake = false;
        if self.inner.advance()? {
            return Ok(true);
        }
        if self.fired {
            return Ok(false);
        }
        self.fired = true;
        match self.fault {
            Fault::None | Fault::Locked => Ok(false),
            Fault::Ghost | Fault::StuckReadonly => {
                self.fake = true;
                Ok(true)
            }
            Fault::ReadError => Err(io::Error::new(io::ErrorKind::Other, "injected read error")),
            Fault::BadName => Err(io::Error::new(io::ErrorKind::InvalidData, "injected bad name")),
        }
    }

    fn name(&self) -> &str {
        if self.fake { GHOST } else { self.inner.name() }
    }

    fn is_dir(&self) -> bool {
        !self.fake && self.inner.is_dir()
    }

    fn is_readonly(&self) -> bool {
        self.fake && self.fault == Fault::StuckReadonly
    }

    fn clear_readonly(&self, _path: &str) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::PermissionDenied, "injected read-only"))
    }
}
