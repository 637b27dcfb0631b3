//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that accept
//! `&PgPool` as the first argument. The pool is created once at startup and
//! handed in explicitly; repositories hold no state of their own.

pub mod project_repo;

pub use project_repo::ProjectRepo;
