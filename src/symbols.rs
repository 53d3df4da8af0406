//! Symbol-list loading.
//!
//! One symbol per line: `TICKER,Display Name`. The display name is
//! optional; blank lines and `#` comments are skipped.

use std::path::Path;

use crate::core::{NewsError, models::Symbol};

/// Loads the symbol universe from a delimited text file.
///
/// Any failure here is fatal to the run: no partial symbol list is
/// acceptable.
///
/// # Errors
///
/// Returns `NewsError::SymbolList` when the file cannot be read or contains
/// no usable rows.
pub fn load_symbols(path: impl AsRef<Path>) -> Result<Vec<Symbol>, NewsError> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)
        .map_err(|e| NewsError::SymbolList(format!("{}: {e}", path.display())))?;

    let mut symbols = Vec::new();
    for line in raw.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let (ticker, name) = match line.split_once(',') {
            Some((t, n)) => (t.trim(), Some(n.trim())),
            None => (line, None),
        };
        if ticker.is_empty() {
            continue;
        }
        symbols.push(match name {
            Some(n) if !n.is_empty() => Symbol::with_name(ticker, n),
            _ => Symbol::new(ticker),
        });
    }

    if symbols.is_empty() {
        return Err(NewsError::SymbolList(format!(
            "{}: no symbols found",
            path.display()
        )));
    }
    Ok(symbols)
}
