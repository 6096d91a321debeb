//! One-time migration of legacy comma-delimited ledger files
//!
//! Early versions of the tool wrote `id,date,timestamp,item,amount`. This
//! pass converts such lines to the canonical pipe-delimited form. It runs at
//! every startup and is idempotent: once no legacy line remains, no file is
//! touched again.
//!
//! Conversion swaps the delimiter only. The `amount` text is carried over
//! verbatim ("4.5" stays "4.5"); the codec reads it fine either way, and
//! rewriting stored values is not this pass's job.

use crate::error::LedgerResult;

use super::codec::{self, LineFormat};
use super::file_io::write_text_atomic;
use super::ledger_files::LedgerDir;

/// Normalize every day-ledger file under the store's root
///
/// Returns the number of files rewritten. A file is rewritten only when at
/// least one legacy line was found in it; canonical and unparseable lines
/// alone never trigger a rewrite.
pub fn migrate_legacy_files(dir: &LedgerDir) -> LedgerResult<usize> {
    let mut rewritten = 0;

    for name in dir.list_files() {
        let path = dir.file_path(&name);
        let Ok(contents) = std::fs::read_to_string(&path) else {
            // Unreadable files are left alone, same as undecodable lines
            continue;
        };

        let mut new_lines = Vec::new();
        let mut found_legacy = false;

        for line in contents.lines() {
            if line.trim().is_empty() {
                continue;
            }

            match codec::classify_line(line) {
                LineFormat::Canonical(fields) => {
                    // Re-join to guarantee consistent spacing
                    new_lines.push(codec::join_canonical(&fields));
                }
                LineFormat::Legacy(fields) => {
                    new_lines.push(codec::join_canonical(&fields));
                    found_legacy = true;
                }
                LineFormat::Unparseable => {
                    new_lines.push(line.to_string());
                }
            }
        }

        if found_legacy {
            let mut output = new_lines.join("\n");
            output.push('\n');
            write_text_atomic(&path, &output)?;
            rewritten += 1;
        }
    }

    Ok(rewritten)
}
