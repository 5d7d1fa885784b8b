use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::report::Progress;

/// Number of files treated as "bulk" (large objects in the simulated
/// dataset); each is sized at `total_size / 1024`.
pub const BULK_FILE_COUNT: u64 = 768;

/// Number of subdirectories files are spread across, round-robin.
pub const SUBDIR_COUNT: u64 = 256;

/// Size cap for files beyond the bulk count (smaller objects).
pub const FILLER_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Resolved population parameters, immutable once computed.
#[derive(Debug, Clone)]
pub struct PopulateConfig {
    /// Root of the tree to create.
    pub root: PathBuf,
    /// Total bytes to account for across all files.
    pub total_size: u64,
    pub bulk_file_count: u64,
    /// Derived: `total_size / 1024`.
    pub bulk_file_size: u64,
    pub subdir_count: u64,
    /// Print the summary and stop before touching the filesystem.
    pub dry_run: bool,
}

impl PopulateConfig {
    pub fn new(root: PathBuf, total_size: u64, dry_run: bool) -> Self {
        Self {
            root,
            total_size,
            bulk_file_count: BULK_FILE_COUNT,
            bulk_file_size: total_size / 1024,
            subdir_count: SUBDIR_COUNT,
            dry_run,
        }
    }
}

/// Create the directory tree of files described by `config`.
///
/// This is idempotent, and the set of files and their sizes is deterministic:
/// each file's expected size depends only on its position in the generation
/// sequence, and files are opened append-only and extended to that size, never
/// truncated. A rerun over a partial tree therefore writes only the bytes
/// still missing, and a rerun over a complete tree writes nothing.
pub fn run(config: &PopulateConfig, buf: &[u8], progress: &Progress) -> Result<()> {
    progress.summary(config);

    if config.dry_run {
        return Ok(());
    }

    fs::create_dir_all(&config.root)
        .with_context(|| format!("mkdir \"{}\"", config.root.display()))?;

    let mut total_written: u64 = 0;
    let mut dir_cursor: u64 = 0;
    let mut file_cursor: u64 = 0;

    while total_written < config.total_size {
        // Create-if-absent on every visit; already existing is success.
        let dir = config.root.join(format!("dir{dir_cursor:06}"));
        fs::create_dir_all(&dir).with_context(|| format!("mkdir \"{}\"", dir.display()))?;

        let path = dir.join(format!("file{file_cursor:06}"));
        dir_cursor = (dir_cursor + 1) % config.subdir_count;

        let cap = if file_cursor < config.bulk_file_count {
            config.bulk_file_size
        } else {
            FILLER_FILE_SIZE
        };
        let expected = cap.min(config.total_size - total_written);

        extend_file(&path, expected, buf)?;

        // Account the slot's target size, not the bytes written this run, so
        // a resumed run converges on the same total without re-summing the
        // tree.
        total_written += expected;
        file_cursor += 1;
        progress.file_done(&path, expected, total_written, file_cursor);
    }

    Ok(())
}

/// Append bytes from `buf` until the file at `path` holds `expected` bytes.
/// A file already at or beyond `expected` is left untouched.
fn extend_file(path: &Path, expected: u64, buf: &[u8]) -> Result<()> {
    let mut file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .with_context(|| format!("open \"{}\"", path.display()))?;

    let current = file
        .metadata()
        .with_context(|| format!("stat \"{}\"", path.display()))?
        .len();

    let mut remaining = expected.saturating_sub(current);
    if remaining == 0 {
        return Ok(());
    }
    debug_assert!(!buf.is_empty());

    // Byte i of a file is always buf[i % buf.len()], so a run resumed from a
    // mid-buffer offset appends exactly the bytes an uninterrupted run would
    // have written. write_all fails with WriteZero if a write stops making
    // progress, so a stalled device surfaces as an error instead of looping
    // forever.
    let mut offset = (current % buf.len() as u64) as usize;
    while remaining > 0 {
        let chunk = remaining.min((buf.len() - offset) as u64) as usize;
        file.write_all(&buf[offset..offset + chunk])
            .with_context(|| format!("write \"{}\"", path.display()))?;
        remaining -= chunk as u64;
        offset = (offset + chunk) % buf.len();
    }

    Ok(())
}
