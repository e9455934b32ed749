// src/file.rs

use std::{
    fs::{self, File},
    io::BufWriter,
    path::{Path, PathBuf},
};

use crate::config::options::{ExportFormat, ExportOptions};
use crate::table::Table;

/// Write one export file based on ExportOptions (path, headers policy, delimiter).
/// Returns the final path written to.
pub fn write_export(
    export: &ExportOptions,
    table: &Table,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let path = export.out_path();
    write_table_to(&path, table, export.include_headers, export.format)?;
    Ok(path)
}

/// Ensure the parent dir exists, then create/truncate `path`.
pub fn write_table_to(
    path: &Path,
    table: &Table,
    include_headers: bool,
    format: ExportFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    let file = File::create(path)?;
    crate::csv::write_table(BufWriter::new(file), table, include_headers, format)?;
    Ok(())
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c == '/' || c == '\\' { sep } else { c }).collect()
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}

/// CLI `-o` handling: empty → default file name in the working dir,
/// a directory (or trailing separator) → default file name inside it.
pub fn resolve_single_out_path(user_o: &str, default_filename: &str) -> Result<PathBuf, Box<dyn std::error::Error>> {
    if user_o.is_empty() {
        return Ok(PathBuf::from(default_filename));
    }
    let p = PathBuf::from(normalize_separators(user_o));
    if looks_like_dir_hint(Path::new(user_o)) || p.is_dir() {
        ensure_directory(&p)?;
        Ok(p.join(default_filename))
    } else {
        Ok(p)
    }
}
