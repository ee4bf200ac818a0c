//! Splitting annotation lists into API-sized batches.

/// Split `items` into contiguous slices of at most `limit` elements.
///
/// Order is preserved and the slices partition the input. An empty input
/// still yields one empty slice, so a run without annotations issues the
/// same single update call as a run with a handful of them.
///
/// # Panics
///
/// Panics if `limit` is zero.
#[must_use]
pub fn chunk<T>(items: &[T], limit: usize) -> Vec<&[T]> {
    assert!(limit > 0, "chunk limit must be positive");

    if items.is_empty() {
        return vec![items];
    }

    items.chunks(limit).collect()
}


#[cfg(test)]
mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: concatenating the chunks reproduces the input
        #[test]
        fn chunks_reassemble_input(
            items in prop::collection::vec(any::<u16>(), 0..300),
            limit in 1usize..80,
        ) {
            let rebuilt: Vec<u16> = chunk(&items, limit).concat();
            prop_assert_eq!(rebuilt, items);
        }

        /// Property: every chunk but the last is full, the last is non-empty
        #[test]
        fn chunks_are_full_except_last(
            items in prop::collection::vec(any::<u8>(), 1..300),
            limit in 1usize..80,
        ) {
            let chunks = chunk(&items, limit);
            let (last, full) = chunks.split_last().unwrap();

            prop_assert!(full.iter().all(|c| c.len() == limit));
            prop_assert!(!last.is_empty() && last.len() <= limit);
            prop_assert_eq!(chunks.len(), items.len().div_ceil(limit));
        }
    }
}
