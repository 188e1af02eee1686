pub mod date_window;
pub mod rows;

pub use date_window::DateWindow;
pub use rows::{CellValue, RawRow, RowBatch};
