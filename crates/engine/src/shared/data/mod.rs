pub mod spreadsheet;

pub use spreadsheet::{decode_csv, read_batch, DecodeError};
