//! Chunk persistence: one pretty-printed JSON document per chunk.
//!
//! File names carry the run timestamp, app id, and 1-based page index, so
//! chunk order is preserved on disk and successive runs never overwrite
//! each other.

use std::{
  fs,
  path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use gather_core::review::Review;

/// Write every chunk under `dir` (created if absent) and return the paths
/// in chunk order.
pub fn write_chunks(
  dir: &Path,
  app_id: u32,
  run_started: DateTime<Utc>,
  chunks: &[Vec<Review>],
) -> Result<Vec<PathBuf>> {
  fs::create_dir_all(dir)
    .with_context(|| format!("creating output directory {}", dir.display()))?;

  let stamp = run_started.format("%Y-%m-%d_%H-%M-%S");
  let mut paths = Vec::with_capacity(chunks.len());

  for (index, chunk) in chunks.iter().enumerate() {
    let path = dir.join(format!(
      "{stamp}_{app_id}_page{}_reviews.json",
      index + 1
    ));
    let body = serde_json::to_vec_pretty(chunk)
      .context("serialising review chunk")?;
    fs::write(&path, body)
      .with_context(|| format!("writing {}", path.display()))?;
    paths.push(path);
  }

  Ok(paths)
}
