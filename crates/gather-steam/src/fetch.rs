//! Cursor-driven pagination over the review listing.
//!
//! Strictly sequential: each page's cursor is only known after the prior
//! page resolves, so there is no parallel fan-out within a run.

use gather_core::review::AppMetadata;
use tracing::debug;

use crate::{
  error::{FetchError, Result},
  transport::{INITIAL_CURSOR, SteamApi},
  wire::ReviewPage,
};

/// How many listing pages to request before stopping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLimit {
  /// Keep paging until the provider reports zero results.
  All,
  /// Stop after at most this many pages (each holding up to 100 reviews).
  Max(u32),
}

impl PageLimit {
  fn allows(self, pages_fetched: u32) -> bool {
    match self {
      Self::All => true,
      Self::Max(n) => pages_fetched < n,
    }
  }
}

/// Everything a successful fetch produces: the accumulated raw pages and
/// the once-per-run app metadata.
#[derive(Debug, Clone)]
pub struct FetchOutcome {
  pub pages:    Vec<ReviewPage>,
  pub metadata: AppMetadata,
}

impl FetchOutcome {
  /// Total raw reviews across all accumulated pages.
  pub fn review_count(&self) -> usize {
    self.pages.iter().map(|p| p.reviews.len()).sum()
  }
}

/// Drive the pagination protocol to completion, then fetch app metadata.
///
/// Terminates on the provider's zero-result signal or after `limit` pages,
/// whichever comes first. Zero results on the *first* page is the distinct
/// [`FetchError::NoReviews`] outcome. After pagination, both the last
/// listing response and the appdetails entry must report success or the
/// whole fetch fails; no partial page set is ever returned.
pub async fn fetch_app<A: SteamApi>(
  api: &A,
  app_id: u32,
  limit: PageLimit,
) -> Result<FetchOutcome> {
  let mut cursor = INITIAL_CURSOR.to_string();
  let mut pages: Vec<ReviewPage> = Vec::new();
  let mut pages_fetched: u32 = 0;
  let mut items_found: usize = 0;
  let mut last_page_success = false;

  while limit.allows(pages_fetched) {
    let page = api.review_page(app_id, &cursor).await?;
    last_page_success = page.success;

    if page.query_summary.num_reviews == 0 {
      if pages_fetched == 0 {
        return Err(FetchError::NoReviews);
      }
      // Mid-run exhaustion: a normal stop, not an error.
      break;
    }

    if pages_fetched == 0
      && let Some(total) = page.query_summary.total_reviews
    {
      debug!(app_id, total, "provider reports total available reviews");
    }

    cursor = page.cursor.clone();
    items_found += page.reviews.len();
    pages.push(page);
    pages_fetched += 1;
    debug!(app_id, pages_fetched, items_found, "fetched review page");
  }

  let metadata = api.app_details(app_id).await?.into_metadata();

  if !last_page_success {
    return Err(FetchError::rejected("review listing reported failure"));
  }
  if !metadata.exists {
    return Err(FetchError::rejected(format!(
      "appdetails reported failure for app {app_id}"
    )));
  }

  Ok(FetchOutcome { pages, metadata })
}
