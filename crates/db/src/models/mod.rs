//! Row models.
//!
//! Each submodule contains a `FromRow` + `Serialize` struct matching a table
//! row, serialized as-is in API responses.

pub mod project;
