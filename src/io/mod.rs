//! File system access: input discovery, line reading and CSV line writing.

pub mod glob;
pub mod lines;

pub use glob::list_csv_files;
pub use lines::{ensure_dir, read_lines, split_lines, write_csv_lines};
