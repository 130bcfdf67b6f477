//! Domain types shared by the comics gateway and HTTP layer.
//!
//! This crate has zero internal dependencies so both `comics-db` and
//! `comics-api` can use it.

pub mod comics;
pub mod error;
pub mod types;
