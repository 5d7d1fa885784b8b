use std::path::Path;

use crate::populate::PopulateConfig;

pub const DEFAULT_PROGRESS_INTERVAL: u64 = 100;

/// Periodic progress output on stderr. Informational only — nothing here is a
/// machine-readable contract.
pub struct Progress {
    interval: u64,
    quiet: bool,
}

impl Progress {
    pub fn new(interval: u64, quiet: bool) -> Self {
        Self { interval, quiet }
    }

    /// Print the resolved configuration before any filesystem work starts.
    pub fn summary(&self, config: &PopulateConfig) {
        if self.quiet {
            return;
        }
        eprintln!("{:<16}  {}", "path:", config.root.display());
        eprintln!(
            "{:<16}  {} ({})",
            "total bytes:",
            config.total_size,
            fmt_size(config.total_size)
        );
        eprintln!("{:<16}  {}", "large files:", config.bulk_file_count);
        eprintln!("{:<16}  {} bytes", "large file size:", config.bulk_file_size);
        eprintln!("{:<16}  {}", "subdirs:", config.subdir_count);
    }

    /// Record one finished file slot; emits a progress line every `interval`
    /// files.
    pub fn file_done(&self, path: &Path, expected: u64, total_written: u64, files: u64) {
        if self.quiet || self.interval == 0 || files % self.interval != 0 {
            return;
        }
        eprintln!("completed {} bytes after {} files", total_written, files);
        eprintln!("    (last: \"{}\" at {} bytes)", path.display(), expected);
    }
}

/// Human-readable byte size (e.g. "1.2 GB").
pub fn fmt_size(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    const GB: f64 = MB * 1024.0;
    let b = bytes as f64;
    if b >= GB {
        format!("{:.1} GB", b / GB)
    } else if b >= MB {
        format!("{:.1} MB", b / MB)
    } else if b >= KB {
        format!("{:.1} KB", b / KB)
    } else {
        format!("{} B", bytes)
    }
}
