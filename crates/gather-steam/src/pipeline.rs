//! The run orchestrator: fetch → normalize → filter → paginate.
//!
//! One [`RunSpec`] describes an entire run; there is no state shared across
//! runs and no partial output on failure.

use gather_core::{
  filter::{DateRange, in_range},
  paginate::paginate,
  review::{AppMetadata, Review},
};
use tracing::info;

use crate::{
  error::Result,
  fetch::{PageLimit, fetch_app},
  normalize::normalize,
  transport::SteamApi,
};

/// Everything that parametrises a crawl run.
#[derive(Debug, Clone)]
pub struct RunSpec {
  pub app_id:     u32,
  pub page_limit: PageLimit,
  /// `None` passes every review through unfiltered.
  pub date_range: Option<DateRange>,
}

/// The finished product of a run: ordered chunks ready for persistence,
/// plus the metadata and counts the caller reports on.
#[derive(Debug, Clone)]
pub struct CrawlReport {
  pub app:     AppMetadata,
  /// At least one chunk, each holding at most
  /// [`gather_core::paginate::CHUNK_SIZE`] reviews, sorted by `(date, id)`.
  pub chunks:  Vec<Vec<Review>>,
  /// Raw reviews fetched, before date filtering.
  pub fetched: usize,
  /// Reviews surviving the date filter.
  pub kept:    usize,
}

/// Run the full pipeline against `api`.
pub async fn run<A: SteamApi>(api: &A, spec: &RunSpec) -> Result<CrawlReport> {
  let outcome = fetch_app(api, spec.app_id, spec.page_limit).await?;
  let fetched = outcome.review_count();
  info!(app_id = spec.app_id, fetched, app = %outcome.metadata.name, "fetch complete");

  let reviews: Vec<Review> = outcome
    .pages
    .iter()
    .flat_map(|page| page.reviews.iter())
    .map(|raw| normalize(raw, &outcome.metadata))
    .filter(|review| in_range(spec.date_range.as_ref(), review.date))
    .collect();
  let kept = reviews.len();

  let chunks = paginate(reviews);
  info!(kept, chunks = chunks.len(), "normalized and chunked reviews");

  Ok(CrawlReport {
    app: outcome.metadata,
    chunks,
    fetched,
    kept,
  })
}
