pub mod export;
pub mod grid;

pub use export::{ExportError, write_csv};
pub use grid::Grid;
