use super::FsDirCursor;
use crate::wd::IntoOk;

use std::ffi::OsStr;
use std::fmt;
use std::io;
use std::mem;
use std::os::windows::ffi::OsStrExt;
use std::ptr;

use winapi::shared::minwindef::LPVOID;
use winapi::shared::winerror::{ERROR_FILE_NOT_FOUND, ERROR_NO_MORE_FILES};
use winapi::um::fileapi::{FindClose, FindFirstFileExW, FindNextFileW, SetFileAttributesW};
use winapi::um::handleapi::INVALID_HANDLE_VALUE;
use winapi::um::minwinbase::{FindExInfoBasic, FindExSearchNameMatch, WIN32_FIND_DATAW};
use winapi::um::winnt::{
    FILE_ATTRIBUTE_DIRECTORY, FILE_ATTRIBUTE_READONLY, FILE_ATTRIBUTE_REPARSE_POINT, HANDLE,
};

/// Converts a UTF-8 path into a nul-terminated UTF-16 string, optionally
/// followed by extra code units before the terminator.
fn to_wide(path: &str, extra: &[u16]) -> Vec<u16> {
    let mut wide: Vec<u16> = OsStr::new(path).encode_wide().collect();
    wide.extend_from_slice(extra);
    wide.push(0);
    wide
}

///////////////////////////////////////////////////////////////////////////////////////////////

/// A FindFirstFileExW/FindNextFileW based FsDirCursor.
///
/// Attributes come for free with every find record, so both the directory
/// flag and the read-only flag cost no extra system call.
pub struct WindowsDirCursor {
    /// `None` for a directory that enumerated as empty at open time
    handle:     Option<HANDLE>,
    data:       WIN32_FIND_DATAW,
    /// FindFirstFileExW already filled `data` with the first entry
    first:      bool,
    name:       String,
}

impl WindowsDirCursor {
    fn decode_name(&mut self) -> io::Result<()> {
        let raw = &self.data.cFileName;
        let len = raw.iter().position(|&c| c == 0).unwrap_or(raw.len());

        self.name.clear();
        for c in std::char::decode_utf16(raw[..len].iter().cloned()) {
            let c = c.map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
            self.name.push(c);
        }
        Ok(())
    }
}

impl Drop for WindowsDirCursor {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            unsafe {
                FindClose(handle);
            }
        }
    }
}

impl fmt::Debug for WindowsDirCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WindowsDirCursor")
            .field("open", &self.handle.is_some())
            .field("name", &self.name)
            .field("attributes", &self.data.dwFileAttributes)
            .finish()
    }
}

/// Functions for FsDirCursor
impl FsDirCursor for WindowsDirCursor {
    fn open(dir: &str) -> io::Result<Self> {
        let pattern = to_wide(dir, &['*' as u16]);
        let mut data: WIN32_FIND_DATAW = unsafe { mem::zeroed() };

        let handle = unsafe {
            FindFirstFileExW(
                pattern.as_ptr(),
                FindExInfoBasic,
                &mut data as *mut WIN32_FIND_DATAW as LPVOID,
                FindExSearchNameMatch,
                ptr::null_mut(),
                0,
            )
        };

        if handle == INVALID_HANDLE_VALUE {
            let err = io::Error::last_os_error();
            // A drive root without any entry has no `.` either.
            if err.raw_os_error() == Some(ERROR_FILE_NOT_FOUND as i32) {
                return Self { handle: None, data, first: false, name: String::new() }.into_ok();
            }
            return Err(err);
        }

        Self {
            handle: Some(handle),
            data,
            first:  true,
            name:   String::new(),
        }.into_ok()
    }

    fn advance(&mut self) -> io::Result<bool> {
        let handle = match self.handle {
            Some(handle) => handle,
            None => return Ok(false),
        };

        if self.first {
            self.first = false;
        } else if unsafe { FindNextFileW(handle, &mut self.data) } == 0 {
            let err = io::Error::last_os_error();
            if err.raw_os_error() == Some(ERROR_NO_MORE_FILES as i32) {
                return Ok(false);
            }
            return Err(err);
        }

        self.decode_name()?;
        Ok(true)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_dir(&self) -> bool {
        let attrs = self.data.dwFileAttributes;
        attrs & FILE_ATTRIBUTE_DIRECTORY != 0 && attrs & FILE_ATTRIBUTE_REPARSE_POINT == 0
    }

    fn is_readonly(&self) -> bool {
        self.data.dwFileAttributes & FILE_ATTRIBUTE_READONLY != 0
    }

    fn is_dir_link(&self) -> bool {
        let attrs = self.data.dwFileAttributes;
        attrs & FILE_ATTRIBUTE_DIRECTORY != 0 && attrs & FILE_ATTRIBUTE_REPARSE_POINT != 0
    }

    fn clear_readonly(&self, path: &str) -> io::Result<()> {
        let wide = to_wide(path, &[]);
        let attrs = self.data.dwFileAttributes & !FILE_ATTRIBUTE_READONLY;
        if unsafe { SetFileAttributesW(wide.as_ptr(), attrs) } == 0 {
            return Err(io::Error::last_os_error());
        }
        Ok(())
    }
}
