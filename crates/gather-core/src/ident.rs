//! Deterministic review identity and author anonymization.
//!
//! Both functions are pure: identical inputs yield identical outputs across
//! independent runs and processes, which is what makes ids usable for
//! dedup/merge across crawl sessions.

use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Compute the canonical review id.
///
/// SHA-256 over the lowercased `"{app_name}-{content}-{raw_author_id}"`
/// composite, hex-encoded. The **raw** (pre-anonymization) author id goes
/// into the composite, so id and anonymized author are independently
/// reproducible from the same raw identity.
pub fn review_id(app_name: &str, content: &str, raw_author_id: &str) -> String {
  let composite =
    format!("{app_name}-{content}-{raw_author_id}").to_lowercase();
  hex::encode(Sha256::digest(composite.as_bytes()))
}

/// One-way anonymization of a raw author id.
///
/// UUID v5 under the DNS namespace, rendered as the canonical hyphenated
/// string. Stable (same raw id, same output, always) and not reversible.
/// The raw id is never stored anywhere downstream.
pub fn anonymize_author(raw_author_id: &str) -> String {
  Uuid::new_v5(&Uuid::NAMESPACE_DNS, raw_author_id.as_bytes()).to_string()
}
