pub mod executor;

pub use executor::{load_from_batch, run};
