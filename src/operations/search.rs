//! Exact substring containment and occurrence scanning
//!
//! # Overlap semantics
//!
//! [`occurrence_ranges`] examines every start position, so occurrences
//! that overlap an earlier match are still reported: `"AA"` in `"AAAA"`
//! yields starts 0, 1 and 2. A regex-style find-iterator resumes *after*
//! each match and would report only 0 and 2; that behavior is
//! deliberately not used here.
//!
//! Offsets are byte offsets, which for ASCII sequence data are identical
//! to character offsets.

/// Whether `query` occurs in `sequence` as a contiguous substring
///
/// Case-sensitive, exact, no wildcards. Empty queries are rejected at the
/// store boundary before this is reached.
pub fn has_occurrence(sequence: &str, query: &str) -> bool {
    sequence.contains(query)
}

/// Every occurrence of `query` in `sequence` as half-open `(start, end)`
/// ranges, in ascending start order, overlapping occurrences included
///
/// `end - start == query.len()` for every range. An empty query or a
/// query longer than the sequence yields no ranges.
pub fn occurrence_ranges(sequence: &str, query: &str) -> Vec<(usize, usize)> {
    let seq = sequence.as_bytes();
    let pattern = query.as_bytes();
    if pattern.is_empty() || pattern.len() > seq.len() {
        return Vec::new();
    }

    let mut ranges = Vec::new();
    for (start, window) in seq.windows(pattern.len()).enumerate() {
        if window == pattern {
            ranges.push((start, start + pattern.len()));
        }
    }
    ranges
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_occurrence() {
        assert!(has_occurrence("ACGTACGT", "GTA"));
        assert!(!has_occurrence("ACGTACGT", "AAA"));
        assert!(!has_occurrence("", "A"));
    }

    #[test]
    fn test_case_sensitive() {
        assert!(!has_occurrence("acgt", "ACGT"));
    }

    #[test]
    fn test_overlapping_occurrences() {
        assert_eq!(
            occurrence_ranges("AAAA", "AA"),
            vec![(0, 2), (1, 3), (2, 4)]
        );
    }

    #[test]
    fn test_adjacent_occurrences() {
        assert_eq!(occurrence_ranges("ACGTACGT", "ACGT"), vec![(0, 4), (4, 8)]);
    }

    #[test]
    fn test_no_occurrence() {
        assert!(occurrence_ranges("ACGT", "TTT").is_empty());
    }

    #[test]
    fn test_query_longer_than_sequence() {
        assert!(occurrence_ranges("AC", "ACGT").is_empty());
    }

    #[test]
    fn test_empty_query_yields_nothing() {
        assert!(occurrence_ranges("ACGT", "").is_empty());
    }

    #[test]
    fn test_whole_sequence_match() {
        assert_eq!(occurrence_ranges("ACGT", "ACGT"), vec![(0, 4)]);
    }

    // Property-based tests
    use proptest::prelude::*;

    proptest! {
        /// Ranges agree with the containment check
        #[test]
        fn test_ranges_iff_contains(
            sequence in "[ACGT]{0,100}",
            query in "[ACGT]{1,8}",
        ) {
            let ranges = occurrence_ranges(&sequence, &query);
            prop_assert_eq!(!ranges.is_empty(), has_occurrence(&sequence, &query));
        }

        /// Every reported range is an actual occurrence of the query,
        /// ranges ascend, and none is missed
        #[test]
        fn test_ranges_are_exact_and_complete(
            sequence in "[ACGT]{0,100}",
            query in "[ACGT]{1,8}",
        ) {
            let ranges = occurrence_ranges(&sequence, &query);

            let mut previous_start = None;
            for &(start, end) in &ranges {
                prop_assert_eq!(end - start, query.len());
                prop_assert_eq!(&sequence[start..end], query.as_str());
                if let Some(previous) = previous_start {
                    prop_assert!(start > previous);
                }
                previous_start = Some(start);
            }

            // Exhaustive cross-check against the naive definition.
            if sequence.len() >= query.len() {
                for start in 0..=(sequence.len() - query.len()) {
                    let is_match = &sequence[start..start + query.len()] == query;
                    prop_assert_eq!(is_match, ranges.iter().any(|&(s, _)| s == start));
                }
            }
        }
    }
}
