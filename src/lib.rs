//! Snack directory service.
//!
//! A small HTTP API over an in-memory directory of snack records. The
//! directory maps string ids to [`models::Snack`] values; handlers in
//! [`api`] expose CRUD operations over it, gated by a configurable id
//! validation rule for reads and creates.

pub mod api;
pub mod models;
pub mod store;
