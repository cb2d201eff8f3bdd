use crate::error::{CsvMergeError, Result};
use std::fs::{File, create_dir_all};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Read a whole UTF-8 text file as lines.
///
/// See [`split_lines`] for the accepted line terminators.
///
/// # Errors
/// Returns [`CsvMergeError::Io`] if the file cannot be opened or is not valid UTF-8.
pub fn read_lines(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(CsvMergeError::io("read", path))?;
    Ok(split_lines(&text))
}

/// Split `text` on `\r\n`, `\n` or a lone `\r`.
///
/// A terminator at the very end does not produce a trailing empty line.
#[must_use]
pub fn split_lines(text: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut rest = text;
    while let Some(end) = rest.find(['\r', '\n']) {
        out.push(rest[..end].to_string());
        let skip = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[end + skip..];
    }
    if !rest.is_empty() {
        out.push(rest.to_string());
    }
    out
}

/// Create `dir` and its parents if missing.
///
/// # Errors
/// Returns [`CsvMergeError::Io`] if the directory cannot be created.
pub fn ensure_dir(dir: impl AsRef<Path>) -> Result<()> {
    let dir = dir.as_ref();
    create_dir_all(dir).map_err(CsvMergeError::io("create directory", dir))
}

/// Write `header` followed by `rows`, one line each, newline-terminated.
///
/// An existing file at `path` is truncated. Rows are written verbatim; when
/// `suffix` is given it is appended to every row after a comma.
///
/// # Returns
/// The number of data rows written.
///
/// # Errors
/// Returns [`CsvMergeError::Io`] if the file cannot be created or written.
pub fn write_csv_lines<S: AsRef<str>>(
    path: impl AsRef<Path>,
    header: &str,
    rows: &[S],
    suffix: Option<&str>,
) -> Result<usize> {
    let path = path.as_ref();
    let f = File::create(path).map_err(CsvMergeError::io("create", path))?;
    let mut w = BufWriter::new(f);

    let mut write_all = || -> std::io::Result<()> {
        writeln!(w, "{header}")?;
        for row in rows {
            match suffix {
                Some(s) => writeln!(w, "{},{s}", row.as_ref())?,
                None => writeln!(w, "{}", row.as_ref())?,
            }
        }
        w.flush()
    };
    write_all().map_err(CsvMergeError::io("write", path))?;
    Ok(rows.len())
}
