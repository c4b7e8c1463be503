//! Serde mappings for the Steam review-listing and appdetails responses.
//!
//! Only the consumed fields are modelled. Missing optional fields degrade
//! to defaults rather than failing the decode; the normalizer is total.

use gather_core::review::AppMetadata;
use serde::{Deserialize, Deserializer};

/// The review listing reports `success` as the number `1`, while appdetails
/// uses a JSON bool. Accept either.
fn bool_or_int<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
  D: Deserializer<'de>,
{
  match serde_json::Value::deserialize(deserializer)? {
    serde_json::Value::Bool(b) => Ok(b),
    serde_json::Value::Number(n) => Ok(n.as_i64().unwrap_or(0) != 0),
    other => Err(serde::de::Error::custom(format!(
      "expected bool or integer for success, got {other}"
    ))),
  }
}

// ─── Review listing ──────────────────────────────────────────────────────────

/// `query_summary` on a review-listing page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuerySummary {
  /// Number of reviews on *this* page; zero signals the end of results.
  #[serde(default)]
  pub num_reviews:   u64,
  /// Total available for the app; only reported on the first page.
  #[serde(default)]
  pub total_reviews: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawAuthor {
  #[serde(default)]
  pub steamid:            String,
  /// Hours on record at the time the review was written.
  #[serde(default)]
  pub playtime_at_review: u64,
}

/// One raw provider review record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawReview {
  #[serde(default)]
  pub author:            RawAuthor,
  /// Epoch seconds.
  #[serde(default)]
  pub timestamp_created: i64,
  /// The review text.
  #[serde(default)]
  pub review:            String,
  #[serde(default)]
  pub comment_count:     u64,
  #[serde(default)]
  pub votes_up:          u64,
  #[serde(default)]
  pub votes_funny:       u64,
  #[serde(default)]
  pub voted_up:          bool,
}

/// One decoded page of the review listing. Transient; consumed by the
/// normalizer as soon as pagination finishes.
#[derive(Debug, Clone, Deserialize)]
pub struct ReviewPage {
  #[serde(default, deserialize_with = "bool_or_int")]
  pub success:       bool,
  #[serde(default)]
  pub query_summary: QuerySummary,
  /// Continuation token for the next page; opaque.
  #[serde(default)]
  pub cursor:        String,
  #[serde(default)]
  pub reviews:       Vec<RawReview>,
}

// ─── App details ─────────────────────────────────────────────────────────────

/// The per-app entry of an appdetails response (the response body is a map
/// keyed by app id string; the transport unwraps the requested entry).
#[derive(Debug, Clone, Deserialize)]
pub struct AppEntry {
  #[serde(default, deserialize_with = "bool_or_int")]
  pub success: bool,
  #[serde(default)]
  pub data:    Option<AppData>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppData {
  #[serde(default)]
  pub name:       String,
  #[serde(default)]
  pub developers: Option<Vec<String>>,
  #[serde(default, rename = "type")]
  pub kind:       String,
}

impl AppEntry {
  /// Collapse the entry into the run-wide [`AppMetadata`].
  pub fn into_metadata(self) -> AppMetadata {
    let exists = self.success && self.data.is_some();
    let data = self.data.unwrap_or(AppData {
      name:       String::new(),
      developers: None,
      kind:       String::new(),
    });
    AppMetadata {
      name: data.name,
      developers: data.developers,
      kind: data.kind,
      exists,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn review_page_decodes_numeric_success() {
    let page: ReviewPage = serde_json::from_str(
      r#"{
        "success": 1,
        "query_summary": {"num_reviews": 1, "total_reviews": 42},
        "cursor": "AoJ4u9rn+vYCf8ubxAI=",
        "reviews": [{
          "author": {"steamid": "76561190000000000", "playtime_at_review": 10},
          "timestamp_created": 1678886400,
          "review": "This game is awesome!",
          "comment_count": 2,
          "votes_up": 100,
          "votes_funny": 5,
          "voted_up": true
        }]
      }"#,
    )
    .unwrap();

    assert!(page.success);
    assert_eq!(page.query_summary.num_reviews, 1);
    assert_eq!(page.query_summary.total_reviews, Some(42));
    assert_eq!(page.reviews[0].author.steamid, "76561190000000000");
    assert_eq!(page.reviews[0].timestamp_created, 1_678_886_400);
  }

  #[test]
  fn missing_optional_fields_default() {
    let page: ReviewPage = serde_json::from_str(
      r#"{"success": 1, "query_summary": {"num_reviews": 1}, "reviews": [{}]}"#,
    )
    .unwrap();

    let raw = &page.reviews[0];
    assert_eq!(raw.author.steamid, "");
    assert_eq!(raw.author.playtime_at_review, 0);
    assert_eq!(raw.comment_count, 0);
    assert!(!raw.voted_up);
    assert!(page.cursor.is_empty());
  }

  #[test]
  fn app_entry_decodes_bool_success_and_type_field() {
    let entry: AppEntry = serde_json::from_str(
      r#"{
        "success": true,
        "data": {"name": "Test Game", "developers": ["Test Dev"], "type": "game"}
      }"#,
    )
    .unwrap();

    let meta = entry.into_metadata();
    assert!(meta.exists);
    assert_eq!(meta.name, "Test Game");
    assert_eq!(meta.kind, "game");
    assert_eq!(meta.developers.as_deref(), Some(&["Test Dev".to_string()][..]));
  }

  #[test]
  fn unsuccessful_entry_does_not_exist() {
    let entry: AppEntry =
      serde_json::from_str(r#"{"success": false}"#).unwrap();
    let meta = entry.into_metadata();

    assert!(!meta.exists);
    assert!(meta.developers.is_none());
  }
}
