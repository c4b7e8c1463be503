//! Steam review provider: wire types, cursor-paging fetcher, normalizer,
//! and the run pipeline.
//!
//! Network access goes through the [`transport::SteamApi`] trait so the
//! fetcher and pipeline are testable against a scripted in-memory provider.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod error;
pub mod fetch;
pub mod normalize;
pub mod pipeline;
pub mod transport;
pub mod wire;


pub use error::{FetchError, Result};

/// Provider constant recorded on every canonical review.
pub const SOURCE: &str = "steam";
