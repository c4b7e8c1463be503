//! Deterministic ordering and chunking of the final review collection.
//!
//! Reviews sort ascending by `(date, id)`. The id is collision-resistant, so
//! the ordering is total in practice: no two distinct reviews compare equal.

use crate::review::Review;

/// Maximum number of reviews per output chunk.
pub const CHUNK_SIZE: usize = 5000;

/// Sort `reviews` by `(date, id)` and slice into windows of at most
/// [`CHUNK_SIZE`], preserving order within and across chunks.
///
/// An empty input yields exactly one empty chunk, never zero chunks, so
/// downstream persistence always has at least one artifact to write.
pub fn paginate(mut reviews: Vec<Review>) -> Vec<Vec<Review>> {
  reviews
    .sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.id.cmp(&b.id)));

  let mut chunks = Vec::with_capacity(reviews.len().div_ceil(CHUNK_SIZE).max(1));
  let mut remaining = reviews;
  loop {
    if remaining.len() <= CHUNK_SIZE {
      chunks.push(remaining);
      return chunks;
    }
    let tail = remaining.split_off(CHUNK_SIZE);
    chunks.push(remaining);
    remaining = tail;
  }
}

#[cfg(test)]
mod tests {
  use chrono::NaiveDate;

  use super::*;
  use crate::review::Franchise;

  /// A minimal review with a zero-padded hex id so lexicographic id order
  /// matches the numeric seed order.
  fn make_review(seed: usize, date: NaiveDate) -> Review {
    Review {
      id:        format!("{seed:064x}"),
      author:    "anon".to_string(),
      date,
      hours:     0,
      content:   String::new(),
      comments:  0,
      source:    "steam".to_string(),
      helpful:   0,
      funny:     0,
      recommend: true,
      franchise: Franchise::Single("Unknown".to_string()),
      app_name:  "Test App".to_string(),
    }
  }

  fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 3, d).unwrap()
  }

  #[test]
  fn empty_input_yields_one_empty_chunk() {
    let chunks = paginate(Vec::new());
    assert_eq!(chunks.len(), 1);
    assert!(chunks[0].is_empty());
  }

  #[test]
  fn chunk_sizes_for_10001_reviews() {
    let reviews: Vec<_> =
      (0..10_001).map(|i| make_review(i, day(1))).collect();
    let chunks = paginate(reviews);

    let sizes: Vec<_> = chunks.iter().map(Vec::len).collect();
    assert_eq!(sizes, vec![5000, 5000, 1]);
  }

  #[test]
  fn concatenated_chunks_reproduce_the_sorted_sequence() {
    // Insert in reverse so sorting has to do real work.
    let reviews: Vec<_> =
      (0..10_001).rev().map(|i| make_review(i, day(1))).collect();
    let chunks = paginate(reviews);

    let flat: Vec<_> = chunks.into_iter().flatten().collect();
    assert_eq!(flat.len(), 10_001);
    for window in flat.windows(2) {
      assert!((window[0].date, &window[0].id) < (window[1].date, &window[1].id));
    }
  }

  #[test]
  fn date_is_the_primary_sort_key() {
    let late = make_review(0, day(20));
    let early = make_review(1, day(10));
    let chunks = paginate(vec![late.clone(), early.clone()]);

    assert_eq!(chunks[0][0], early);
    assert_eq!(chunks[0][1], late);
  }

  #[test]
  fn equal_dates_break_ties_by_id() {
    let a = make_review(7, day(15));
    let b = make_review(3, day(15));
    let chunks = paginate(vec![a.clone(), b.clone()]);

    assert_eq!(chunks[0][0].id, b.id);
    assert_eq!(chunks[0][1].id, a.id);
  }

  #[test]
  fn exact_multiple_of_chunk_size_has_no_trailing_empty_chunk() {
    let reviews: Vec<_> =
      (0..CHUNK_SIZE).map(|i| make_review(i, day(1))).collect();
    let chunks = paginate(reviews);

    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].len(), CHUNK_SIZE);
  }
}
