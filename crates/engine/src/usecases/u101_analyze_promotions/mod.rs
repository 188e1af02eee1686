pub mod executor;

pub use executor::{aggregate, run};
