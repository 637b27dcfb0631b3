//! Domain types and pure logic for the portfolio backend.
//!
//! Nothing in this crate touches the database or the network; the `db` and
//! `api` crates build on these types.

pub mod error;
pub mod project;
pub mod types;
pub mod vsco;
