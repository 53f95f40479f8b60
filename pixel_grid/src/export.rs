// export.rs - CSV snapshot of the grid

use std::fs::{self, File};
use std::path::Path;

use crate::grid::Grid;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to create export destination: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to write record: {0}")]
    Csv(#[from] csv::Error),
}

/// Writes the grid to `path` as comma-separated 0/1 rows, one line per grid
/// row, no header. Missing parent directories are created first.
pub fn write_csv(grid: &Grid, path: &Path) -> Result<(), ExportError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut wtr = csv::Writer::from_writer(File::create(path)?);
    for row in grid.to_rows() {
        wtr.write_record(row.iter().map(|v| v.to_string()))?;
    }
    wtr.flush()?;

    Ok(())
}
