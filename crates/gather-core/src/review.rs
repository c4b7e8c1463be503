//! The canonical `Review` record and the app metadata that shapes it.
//!
//! A review is immutable once constructed. Identity (`id`) and the
//! anonymized `author` are derived in the constructor from the raw author
//! id, which is dropped afterwards and never stored.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::ident;

// ─── Franchise ───────────────────────────────────────────────────────────────

/// Developer attribution copied from app metadata onto each review.
///
/// Provider metadata carries either a list of developers or nothing at all;
/// the `Unknown` fallback is represented as a single string. Serialized
/// untagged so output JSON preserves whichever shape was present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Franchise {
  Single(String),
  Many(Vec<String>),
}

// ─── App metadata ────────────────────────────────────────────────────────────

/// Per-app metadata, fetched once per run and shared by reference across all
/// normalizer invocations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppMetadata {
  pub name:       String,
  pub developers: Option<Vec<String>>,
  /// Provider-reported kind, e.g. "game" or "dlc".
  pub kind:       String,
  pub exists:     bool,
}

impl AppMetadata {
  /// Developer attribution for this app; `"Unknown"` when the metadata
  /// lacks a developer list.
  pub fn franchise(&self) -> Franchise {
    match &self.developers {
      Some(devs) => Franchise::Many(devs.clone()),
      None => Franchise::Single("Unknown".to_string()),
    }
  }
}

// ─── Review ──────────────────────────────────────────────────────────────────

/// The canonical, anonymized review record.
///
/// Never mutated after construction; only read, filtered, sorted, and
/// grouped. Field names match the output artifact schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
  /// SHA-256 hex digest over `(appName, content, raw author id)`.
  pub id:        String,
  /// Anonymized author identity; the raw provider id is never stored.
  pub author:    String,
  pub date:      NaiveDate,
  /// Playtime at review time, in hours as reported by the provider.
  pub hours:     u64,
  pub content:   String,
  pub comments:  u64,
  /// Provider constant, e.g. "steam".
  pub source:    String,
  pub helpful:   u64,
  pub funny:     u64,
  pub recommend: bool,
  pub franchise: Franchise,
  #[serde(rename = "appName")]
  pub app_name:  String,
}

/// Input to [`Review::new`]. Carries the raw author id, which the
/// constructor consumes; it does not appear on the finished record.
#[derive(Debug, Clone)]
pub struct NewReview {
  pub raw_author_id: String,
  pub date:          NaiveDate,
  pub hours:         u64,
  pub content:       String,
  pub comments:      u64,
  pub source:        String,
  pub helpful:       u64,
  pub funny:         u64,
  pub recommend:     bool,
  pub franchise:     Franchise,
  pub app_name:      String,
}

impl Review {
  /// Build a canonical review, deriving `id` from the raw author id and
  /// replacing it with its anonymized form.
  pub fn new(input: NewReview) -> Self {
    let id =
      ident::review_id(&input.app_name, &input.content, &input.raw_author_id);
    let author = ident::anonymize_author(&input.raw_author_id);

    Self {
      id,
      author,
      date: input.date,
      hours: input.hours,
      content: input.content,
      comments: input.comments,
      source: input.source,
      helpful: input.helpful,
      funny: input.funny,
      recommend: input.recommend,
      franchise: input.franchise,
      app_name: input.app_name,
    }
  }
}
