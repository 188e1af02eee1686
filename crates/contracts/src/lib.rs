//! Shared contracts between the engine and its consumers (CLI, export,
//! presentation). Plain serializable types only — no business logic.

pub mod domain;
pub mod shared;
pub mod usecases;
