//! The injectable page-request capability and its reqwest implementation.

use std::{collections::HashMap, time::Duration};

use reqwest::Client;

use crate::{
  error::{FetchError, Result},
  wire::{AppEntry, ReviewPage},
};

/// Sentinel cursor for the first page of a review listing.
pub const INITIAL_CURSOR: &str = "*";

/// Fixed page size for the review listing.
pub const PAGE_SIZE: u32 = 100;

/// Abstraction over the two Steam endpoints the pipeline talks to.
///
/// The fetcher depends on this trait, not on HTTP, so pagination and
/// normalization are testable without live network access.
pub trait SteamApi {
  /// Fetch one page of the review listing for `app_id` at `cursor`.
  async fn review_page(&self, app_id: u32, cursor: &str) -> Result<ReviewPage>;

  /// Fetch the appdetails entry for `app_id`.
  async fn app_details(&self, app_id: u32) -> Result<AppEntry>;
}

// ─── HTTP implementation ─────────────────────────────────────────────────────

/// Live Steam storefront transport.
///
/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based. Timeout
/// policy lives here, not in the fetcher.
#[derive(Clone)]
pub struct HttpSteamApi {
  client:   Client,
  base_url: String,
}

impl HttpSteamApi {
  pub fn new() -> Result<Self> {
    Self::with_base_url("https://store.steampowered.com")
  }

  /// Point the transport at a non-default storefront host.
  pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
    let client = Client::builder()
      .timeout(Duration::from_secs(30))
      .build()
      .map_err(FetchError::transport)?;
    Ok(Self {
      client,
      base_url: base_url.into().trim_end_matches('/').to_string(),
    })
  }
}

impl SteamApi for HttpSteamApi {
  async fn review_page(&self, app_id: u32, cursor: &str) -> Result<ReviewPage> {
    let url = format!("{}/appreviews/{app_id}", self.base_url);
    let per_page = PAGE_SIZE.to_string();
    // The cursor comes back percent-decodable; reqwest re-encodes it when
    // placed in the query string.
    let response = self
      .client
      .get(&url)
      .query(&[
        ("json", "1"),
        ("num_per_page", per_page.as_str()),
        ("filter", "recent"),
        ("purchase_type", "all"),
        ("cursor", cursor),
      ])
      .send()
      .await
      .map_err(FetchError::transport)?;

    response
      .json()
      .await
      .map_err(|e| FetchError::decode(format!("review listing page: {e}")))
  }

  async fn app_details(&self, app_id: u32) -> Result<AppEntry> {
    let url = format!("{}/api/appdetails", self.base_url);
    let response = self
      .client
      .get(&url)
      .query(&[("appids", app_id.to_string())])
      .send()
      .await
      .map_err(FetchError::transport)?;

    // The body is keyed by app id string, one entry per requested id.
    let mut body: HashMap<String, AppEntry> = response
      .json()
      .await
      .map_err(|e| FetchError::decode(format!("appdetails response: {e}")))?;

    body.remove(&app_id.to_string()).ok_or_else(|| {
      FetchError::decode(format!("appdetails response missing entry for {app_id}"))
    })
  }
}
