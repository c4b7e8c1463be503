//! Raw provider record → canonical [`Review`].

use chrono::{DateTime, NaiveDate};
use gather_core::review::{AppMetadata, NewReview, Review};

use crate::{SOURCE, wire::RawReview};

/// Convert provider epoch seconds to a UTC calendar date.
///
/// UTC is normative; a timestamp outside chrono's representable range
/// degrades to the epoch date so normalization stays total.
fn utc_date(epoch_seconds: i64) -> NaiveDate {
  DateTime::from_timestamp(epoch_seconds, 0)
    .unwrap_or_default()
    .date_naive()
}

/// Map one raw review plus the run-wide app metadata into a canonical
/// review. Total: missing provider fields have already degraded to defaults
/// at decode time, and a missing developer list becomes `"Unknown"`.
pub fn normalize(raw: &RawReview, metadata: &AppMetadata) -> Review {
  Review::new(NewReview {
    raw_author_id: raw.author.steamid.clone(),
    date:          utc_date(raw.timestamp_created),
    hours:         raw.author.playtime_at_review,
    content:       raw.review.clone(),
    comments:      raw.comment_count,
    source:        SOURCE.to_string(),
    helpful:       raw.votes_up,
    funny:         raw.votes_funny,
    recommend:     raw.voted_up,
    franchise:     metadata.franchise(),
    app_name:      metadata.name.clone(),
  })
}
