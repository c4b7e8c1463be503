//! Core types and pure functions for the gather review pipeline.
//!
//! This crate is deliberately free of HTTP and provider dependencies.
//! All other crates depend on it; it depends on nothing proprietary.

pub mod error;
pub mod filter;
pub mod ident;
pub mod paginate;
pub mod review;

pub use error::{Error, Result};
