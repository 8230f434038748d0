//! Scan orchestration for the `bomstrip` command.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use tracing::{info, warn};

use crate::core::types::{FileOutcome, FixMode, ScanSummary};
use crate::io::config::ScanConfig;
use crate::io::fixer::fix_file;
use crate::io::walk::candidate_files;

/// Scan `root` and strip (or report) leading BOMs from candidate files.
///
/// Report lines go to `out`:
///
/// ```text
/// Scanning <root> for BOM...
/// BOM found in <path>
/// Fixed <path>
/// Scan complete.
/// ```
///
/// `<path>` is relative to `root`. Per-file failures are logged and counted in
/// the summary; only a bad root or a failed write to `out` is an error.
pub fn scan_root(
    root: &Path,
    config: &ScanConfig,
    mode: FixMode,
    out: &mut impl Write,
) -> Result<ScanSummary> {
    if !root.is_dir() {
        return Err(anyhow!("scan root {} is not a directory", root.display()));
    }

    writeln!(out, "Scanning {} for BOM...", root.display()).context("write report")?;

    let mut summary = ScanSummary::default();
    for path in candidate_files(root, config) {
        let outcome = fix_file(&path, mode);
        let shown = path.strip_prefix(root).unwrap_or(&path);
        if outcome.had_bom() {
            writeln!(out, "BOM found in {}", shown.display()).context("write report")?;
        }
        match &outcome {
            FileOutcome::Fixed => {
                writeln!(out, "Fixed {}", shown.display()).context("write report")?;
            }
            FileOutcome::Failed(err) => {
                warn!(path = %path.display(), error = %err, "could not check file");
            }
            FileOutcome::Clean | FileOutcome::Found => {}
        }
        summary.record(&outcome);
    }

    writeln!(out, "Scan complete.").context("write report")?;
    info!(
        scanned = summary.scanned,
        fixed = summary.fixed,
        found = summary.found,
        failed = summary.failed,
        "scan finished"
    );
    Ok(summary)
}
