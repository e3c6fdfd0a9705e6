/*!
Crate `slashwalk` walks and erases directory trees using plain UTF-8,
`/`-separated path strings.

Directory paths always end with `/`. Every entry point that takes a
directory checks this and reports [`ErrorKind::DirFormat`] otherwise, so a
directory and a file with the same stem can never be confused.

To use this crate, add `slashwalk` as a dependency to your project's
`Cargo.toml`:

```toml
[dependencies]
slashwalk = "0.1"
```

# From the top

[`TreeWalker`] is the core: a depth-first walker that keeps one directory
open at a time, a stack of directories still to visit and a single path
buffer that is rewritten for every entry. [`WalkDir`] builds walkers,
[`collect_file_paths`] drains one into a `Vec`, and [`EraseDir`] /
[`erase_directory`] delete a tree bottom-up. The [`path`] module has the
string helpers and [`ops`] the single-file operations.

[`ErrorKind::DirFormat`]: enum.ErrorKind.html#variant.DirFormat
[`TreeWalker`]: struct.TreeWalker.html
[`WalkDir`]: type.WalkDir.html
[`collect_file_paths`]: fn.collect_file_paths.html
[`EraseDir`]: type.EraseDir.html
[`erase_directory`]: fn.erase_directory.html
[`path`]: path/index.html
[`ops`]: ops/index.html

# Example

Print every file below `foo/`:

```no_run
use slashwalk::WalkDir;

# fn try_main() -> slashwalk::Result<()> {
let mut walker = WalkDir::new("foo/").recursive(true).build()?;
while walker.next_file()? {
    println!("{}", walker.current_path());
}
# Ok(())
# }
```

The position accessors borrow the walker's buffer. To keep paths around,
copy them or use [`into_file_paths`]:

```no_run
use slashwalk::WalkDir;

# fn try_main() -> slashwalk::Result<()> {
let sources: Vec<String> = WalkDir::new("src/")
    .recursive(true)
    .build()?
    .into_file_paths()
    .filter(|p| p.as_ref().map(|p| p.ends_with(".rs")).unwrap_or(true))
    .collect::<Result<_, _>>()?;
# Ok(())
# }
```

[`into_file_paths`]: struct.TreeWalker.html#method.into_file_paths

# Example: empty a directory

```no_run
# fn try_main() -> slashwalk::Result<()> {
let report = slashwalk::erase_directory_contents("cache/")?;
for err in report.failures() {
    eprintln!("could not delete: {}", err);
}
# Ok(())
# }
```

# Logging

The crate logs through the [`log`] facade: directory opens and summaries at
`debug`, every entry at `trace`, and deletions that failed at `warn`. It
never installs a logger itself.

[`log`]: https://docs.rs/log
*/

#![deny(missing_docs)]

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

mod wd;
mod error;
/// Filesystem-specific parts
pub mod fs;
pub mod path;
pub mod ops;
mod walk;

#[cfg(test)]
mod tests;

/// Walker builder with the platform's default cursor
pub type WalkDir = WalkDirBuilder;
/// Erase builder with the platform's default cursor
pub type EraseDir = EraseDirBuilder;

pub use wd::{Depth, EntryKind, Result, WalkState, SEPARATOR};
pub use walk::{
    collect_file_paths, collect_file_paths_into, erase_directory, erase_directory_contents,
    DirCursor, Entry, EraseDirBuilder, EraseDirOptions, EraseReport, Paths, PathBuffer,
    RecursiveEraser, TreeWalker, WalkDirBuilder, WalkDirOptions,
};
pub use error::{Error, ErrorKind, FileOp};
