//! JSON exchange with the motif source and the render step

use std::fs;
use std::io::BufWriter;
use std::path::Path;

use crate::algorithm::result::LayoutResult;
use crate::io::error::{Result, WithPath};
use crate::motif::catalog::MotifRecord;

/// Load motif records from a JSON array
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a motif array
pub fn read_motif_records(path: &Path) -> Result<Vec<MotifRecord>> {
    let text = fs::read_to_string(path).with_path(path, "read motifs")?;
    serde_json::from_str(&text).with_path(path, "parse motifs")
}

/// Load a previously written layout
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed
pub fn read_layout(path: &Path) -> Result<LayoutResult> {
    let text = fs::read_to_string(path).with_path(path, "read layout")?;
    serde_json::from_str(&text).with_path(path, "parse layout")
}

/// Write a layout as pretty-printed JSON
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The file cannot be created or written
pub fn write_layout(layout: &LayoutResult, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).with_path(parent, "create directory")?;
    }

    let file = fs::File::create(path).with_path(path, "create layout")?;
    serde_json::to_writer_pretty(BufWriter::new(file), layout).with_path(path, "write layout")
}
