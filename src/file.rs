// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::config::options::ExportOptions;
use crate::error::{Error, Result};
use crate::table::TableData;

/// Write one table to the path implied by `export` (format, headers policy).
/// Returns the final path written to.
pub fn export_table(export: &ExportOptions, table: &TableData) -> Result<PathBuf> {
    let path = export.out_path();
    write_table(&path, table, export.include_headers, export.delim())?;
    Ok(path)
}

/// Write a table to an explicit path, creating parent directories.
pub fn write_table(path: &Path, table: &TableData, include_headers: bool, delim: u8) -> Result<()> {
    let wrap = |source| Error::Export { path: path.to_path_buf(), source };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent).map_err(wrap)?;
        }
    }

    fs::write(path, table.to_delimited(include_headers, delim)).map_err(wrap)?;
    logf!("Export: {} rows → {}", table.nrows(), path.display());
    Ok(())
}

pub fn ensure_directory(dir: &Path) -> std::io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(std::io::Error::other(format!(
            "Path exists but is not a directory: {}",
            dir.display()
        )));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
