//! File pipeline that repairs a source tree in place.
//!
//! Discovers target files under a root directory, decodes each one with its
//! detected encoding, runs the repair table, normalizes line endings and
//! writes the result back as UTF-8. Each file is fully processed before the
//! next begins; a failing file is reported and skipped.

use std::fs;
use std::path::Path;

use thiserror::Error;

use super::repair::RepairTable;
use crate::utils::encoding;
use crate::utils::file_helper;

/// Tally of one pipeline run.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunSummary {
    pub discovered: usize,
    pub fixed: usize,
}

/// Failure while processing a single file. Never aborts the run.
#[derive(Debug, Error)]
pub enum FixError {
    #[error("read failed: {0}")]
    Read(#[source] std::io::Error),
    #[error("write failed: {0}")]
    Write(#[source] std::io::Error),
}

/// Sequential driver over all target files under a root directory.
pub struct Pipeline {
    table: RepairTable,
    extension: String,
    apply: bool,
}

impl Pipeline {
    /// With `apply` false the pipeline runs every transformation but writes
    /// nothing back.
    pub fn new(table: RepairTable, extension: impl Into<String>, apply: bool) -> Self {
        Self {
            table,
            extension: extension.into(),
            apply,
        }
    }

    /// Process every target file under `root` and return the tally.
    pub fn run(&self, root: &Path) -> RunSummary {
        let targets = file_helper::collect_files_with_extension(root, &self.extension);
        println!("Found {} .{} files to process", targets.len(), self.extension);

        let mut summary = RunSummary {
            discovered: targets.len(),
            fixed: 0,
        };

        for path in &targets {
            match self.fix_file(path) {
                Ok(()) => {
                    if self.apply {
                        println!("Fixed: {}", path.display());
                    } else {
                        println!("Would fix: {}", path.display());
                    }
                    summary.fixed += 1;
                }
                Err(err) => {
                    println!("Error fixing {}: {}", path.display(), err);
                }
            }
        }

        summary
    }

    /// Repair one file. The write happens only after every in-memory step
    /// succeeds, so a failing file is left untouched.
    fn fix_file(&self, path: &Path) -> Result<(), FixError> {
        let raw = fs::read(path).map_err(FixError::Read)?;

        let encoding = encoding::detect_encoding(&raw).unwrap_or(encoding_rs::UTF_8);
        println!("Processing {} with encoding {}", path.display(), encoding.name());

        let text = encoding::decode_bytes(&raw, encoding);
        let repaired = self.table.apply(&text);
        let normalized = normalize_line_endings(&repaired);

        if self.apply {
            fs::write(path, normalized.as_bytes()).map_err(FixError::Write)?;
        }

        Ok(())
    }
}

/// Collapse CRLF pairs first, then lone CR, so every terminator becomes LF.
pub fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}
