//! Shared scan types.

use std::io;

/// Extensions scanned when no configuration overrides them.
pub const DEFAULT_EXTENSIONS: [&str; 8] =
    [".json", ".js", ".jsx", ".ts", ".tsx", ".html", ".css", ".md"];

/// Directory names pruned from traversal by default.
pub const DEFAULT_EXCLUDED_DIRS: [&str; 2] = ["node_modules", ".git"];

/// Whether BOMs are removed or only reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FixMode {
    /// Rewrite files in place without the BOM.
    #[default]
    Fix,
    /// Report files with a BOM, leave them untouched.
    Check,
}

/// Result of examining a single candidate file.
#[derive(Debug)]
pub enum FileOutcome {
    /// No BOM present.
    Clean,
    /// BOM present and removed.
    Fixed,
    /// BOM present, not removed (check mode).
    Found,
    /// Reading or rewriting failed; the file is treated as not fixed.
    Failed(io::Error),
}

impl FileOutcome {
    /// True if the file started with a BOM when it was read.
    pub fn had_bom(&self) -> bool {
        matches!(self, FileOutcome::Fixed | FileOutcome::Found)
    }
}

/// Aggregate counts for one scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Candidate files examined.
    pub scanned: usize,
    pub fixed: usize,
    pub found: usize,
    pub failed: usize,
}

impl ScanSummary {
    pub fn record(&mut self, outcome: &FileOutcome) {
        self.scanned += 1;
        match outcome {
            FileOutcome::Clean => {}
            FileOutcome::Fixed => self.fixed += 1,
            FileOutcome::Found => self.found += 1,
            FileOutcome::Failed(_) => self.failed += 1,
        }
    }
}
