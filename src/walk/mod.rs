mod buffer;
mod cursor;
mod walker;
mod opts;
mod collect;
mod erase;

pub use buffer::PathBuffer;
pub use cursor::{DirCursor, Entry};
pub use walker::{Paths, TreeWalker};
pub use opts::{EraseDirBuilder, EraseDirOptions, WalkDirBuilder, WalkDirOptions};
pub use collect::{collect_file_paths, collect_file_paths_into};
pub use erase::{erase_directory, erase_directory_contents, EraseReport, RecursiveEraser};
