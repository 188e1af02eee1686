//! Promotion-review engine: column resolution, date parsing, promotion
//! aggregation and baseline uplift calculation over decoded spreadsheet
//! batches. Presentation and file selection live outside this crate.

pub mod domain;
pub mod shared;
pub mod usecases;
