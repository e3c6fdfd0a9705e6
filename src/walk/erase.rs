use crate::error::{Error, FileOp};
use crate::fs::{DefaultDirCursor, FsDirCursor};
use crate::path;
use crate::walk::buffer::PathBuffer;
use crate::walk::cursor::DirCursor;
use crate::walk::opts::{EraseDirBuilder, EraseDirOptions};
use crate::wd::{self, IntoOk, SEPARATOR};

/// Outcome of an erase that ran to the end.
///
/// Single deletions that fail do not stop an erase. They end up in
/// [`failures`], each an `Error` of kind `FileOp`.
///
/// [`failures`]: struct.EraseReport.html#method.failures
#[derive(Debug, Default)]
pub struct EraseReport {
    files_removed:  u64,
    dirs_removed:   u64,
    failures:       Vec<Error>,
}

impl EraseReport {
    /// Number of files (any non-directory entry) deleted
    pub fn files_removed(&self) -> u64 {
        self.files_removed
    }

    /// Number of directories removed, root and directory links included
    pub fn dirs_removed(&self) -> u64 {
        self.dirs_removed
    }

    /// Deletions that failed
    pub fn failures(&self) -> &[Error] {
        &self.failures
    }

    /// Take the failures
    pub fn into_failures(self) -> Vec<Error> {
        self.failures
    }

    /// Did every deletion succeed?
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Stack item: a directory still to scan, or one to remove once everything
/// above it on the stack is done. Both hold paths relative to the root.
#[derive(Debug)]
enum Pending {
    Visit(String),
    Remove(String),
}

/////////////////////////////////////////////////////////////////////////
//// RecursiveEraser

/// Deletes a directory tree bottom-up.
///
/// Files are deleted while their directory is scanned. Every
/// sub-directory found is pushed twice, first as a removal and then as a
/// visit, so its removal only comes off the stack once its whole subtree
/// has been handled. Only one directory is open at a time.
#[derive(Debug)]
pub struct RecursiveEraser<C: FsDirCursor = DefaultDirCursor> {
    buffer:     PathBuffer,
    stack:      Vec<Pending>,
    report:     EraseReport,
    _cursor:    std::marker::PhantomData<C>,
}

impl<C: FsDirCursor> RecursiveEraser<C> {
    /// Validates `root` and prepares the erase; nothing is touched yet.
    pub fn new(root: &str, opts: EraseDirOptions) -> wd::Result<Self> {
        path::ensure_dir_path(root)?;
        let buffer = PathBuffer::new(root, opts.max_path_bytes)?;

        let mut stack = Vec::new();
        if opts.remove_root {
            stack.push(Pending::Remove(String::new()));
        }
        stack.push(Pending::Visit(String::new()));

        Self {
            buffer,
            stack,
            report:     EraseReport::default(),
            _cursor:    std::marker::PhantomData,
        }.into_ok()
    }

    /// Runs the erase to the end.
    ///
    /// Fails only if a directory cannot be opened or read, or if a path does
    /// not fit the buffer. Whatever was deleted before such a failure stays
    /// deleted.
    pub fn run(mut self) -> wd::Result<EraseReport> {
        while let Some(item) = self.stack.pop() {
            match item {
                Pending::Visit(rel_dir) => self.visit(&rel_dir)?,
                Pending::Remove(rel_dir) => self.remove_dir(&rel_dir)?,
            }
        }

        log::debug!(
            "erased '{}': {} files, {} dirs, {} failures",
            self.buffer.root(),
            self.report.files_removed,
            self.report.dirs_removed,
            self.report.failures.len()
        );
        self.report.into_ok()
    }

    fn record(&mut self, err: Error) {
        log::warn!("{}", err);
        self.report.failures.push(err);
    }

    fn visit(&mut self, rel_dir: &str) -> wd::Result<()> {
        self.buffer.set_dir(rel_dir)?;
        let mut cursor = DirCursor::<C>::open(self.buffer.dir())?;

        while cursor.advance()? {
            let entry = cursor.entry();

            if entry.is_dir() {
                let mut sub = String::with_capacity(rel_dir.len() + entry.name().len() + 1);
                sub.push_str(rel_dir);
                sub.push_str(entry.name());
                sub.push(SEPARATOR);
                self.stack.push(Pending::Remove(sub.clone()));
                self.stack.push(Pending::Visit(sub));
                continue;
            }

            self.buffer.set_name(entry.name())?;
            log::trace!("deleting '{}'", self.buffer.full());

            if entry.is_dir_link() {
                match std::fs::remove_dir(self.buffer.full()) {
                    Ok(()) => self.report.dirs_removed += 1,
                    Err(err) => {
                        let err = Error::op_failed(FileOp::RemoveDir, self.buffer.full(), err);
                        self.record(err);
                    }
                }
                continue;
            }

            if entry.is_readonly() {
                if let Err(err) = cursor.clear_readonly(self.buffer.full()) {
                    let err = Error::op_failed(FileOp::ClearReadonly, self.buffer.full(), err);
                    self.record(err);
                    continue;
                }
            }

            match std::fs::remove_file(self.buffer.full()) {
                Ok(()) => self.report.files_removed += 1,
                Err(err) => {
                    let err = Error::op_failed(FileOp::Delete, self.buffer.full(), err);
                    self.record(err);
                }
            }
        }
        Ok(())
    }

    fn remove_dir(&mut self, rel_dir: &str) -> wd::Result<()> {
        self.buffer.set_dir(rel_dir)?;
        log::trace!("removing '{}'", self.buffer.dir());
        match std::fs::remove_dir(self.buffer.dir()) {
            Ok(()) => self.report.dirs_removed += 1,
            Err(err) => {
                let err = Error::op_failed(FileOp::RemoveDir, self.buffer.dir(), err);
                self.record(err);
            }
        }
        Ok(())
    }
}

/// Deletes everything below `root` (which must end with `/`) and keeps
/// `root` itself.
///
/// ```no_run
/// # fn try_main() -> slashwalk::Result<()> {
/// let report = slashwalk::erase_directory_contents("target/tmp/")?;
/// println!("{} files deleted", report.files_removed());
/// # Ok(())
/// # }
/// ```
pub fn erase_directory_contents(root: &str) -> wd::Result<EraseReport> {
    EraseDirBuilder::new(root).run()
}

/// Removes the directory `root` (which must end with `/`).
///
/// With `recursive` the whole tree goes, root included. Without it `root`
/// must already be empty and a failure to remove it is returned as an
/// error of kind `FileOp`.
pub fn erase_directory(root: &str, recursive: bool) -> wd::Result<EraseReport> {
    if recursive {
        return EraseDirBuilder::new(root).remove_root(true).run();
    }

    path::ensure_dir_path(root)?;
    std::fs::remove_dir(root).map_err(|err| Error::op_failed(FileOp::RemoveDir, root, err))?;
    EraseReport { dirs_removed: 1, ..EraseReport::default() }.into_ok()
}
