//! Debug-mode invariant assertions for the sector codec.
//!
//! These check the "internal invariant violated" failure mode from §7: a
//! cache access out of bounds or a catalogue contradiction. They are fatal
//! by design — a violation means the codec's own precomputed tables are
//! inconsistent, not that caller input was bad — so they panic rather than
//! return a `Result`. Active only in debug builds, matching the teacher's
//! own zero-release-overhead convention.

/// Asserts that a resolved `(x, y, z)` came from a genuinely bijective
/// lookup: re-encoding it must reproduce the fragments that were decoded.
#[inline]
pub fn assert_round_trip_consistent(decoded: &[&str], reencoded: &[&str]) {
    #[cfg(debug_assertions)]
    {
        debug_assert_eq!(
            decoded, reencoded,
            "Invariant violation: decoding then re-encoding sector fragments \
             did not reproduce the original name ({decoded:?} != {reencoded:?})"
        );
    }
    #[cfg(not(debug_assertions))]
    {
        let _ = (decoded, reencoded);
    }
}

/// Asserts that an index computed against a precomputed cache lies within
/// its bounds.
#[inline]
pub fn assert_cache_index_in_bounds(index: usize, len: usize, cache_name: &str) {
    #[cfg(debug_assertions)]
    {
        debug_assert!(
            index < len,
            "Invariant violation: index {index} out of bounds for cache \
             '{cache_name}' (len {len})"
        );
    }
    #[cfg(not(debug_assertions))]
    {
        let _ = (index, len, cache_name);
    }
}

/// Asserts that the intra-sector locator's output lies in the documented
/// `[0, 1280)` range for every axis, given syntactically valid input.
#[inline]
pub fn assert_locator_in_range(value: f64, cube_size: f64, axis: &str) {
    #[cfg(debug_assertions)]
    {
        debug_assert!(
            (0.0..cube_size).contains(&value),
            "Invariant violation: locator axis '{axis}' = {value} outside [0, {cube_size})"
        );
    }
    #[cfg(not(debug_assertions))]
    {
        let _ = (value, cube_size, axis);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_consistent_accepts_matching_fragments() {
        assert_round_trip_consistent(&["Dry", "au"], &["Dry", "au"]);
    }

    #[test]
    #[should_panic(expected = "Invariant violation")]
    #[cfg(debug_assertions)]
    fn round_trip_consistent_rejects_mismatch() {
        assert_round_trip_consistent(&["Dry", "au"], &["Dry", "oi"]);
    }

    #[test]
    fn cache_index_in_bounds_accepts_valid_index() {
        assert_cache_index_in_bounds(5, 10, "prefix_runs");
    }

    #[test]
    #[should_panic(expected = "Invariant violation")]
    #[cfg(debug_assertions)]
    fn cache_index_in_bounds_rejects_out_of_range() {
        assert_cache_index_in_bounds(10, 10, "prefix_runs");
    }

    #[test]
    fn locator_in_range_accepts_boundary_low() {
        assert_locator_in_range(0.0, 1280.0, "x");
    }

    #[test]
    #[should_panic(expected = "Invariant violation")]
    #[cfg(debug_assertions)]
    fn locator_in_range_rejects_negative() {
        assert_locator_in_range(-1.0, 1280.0, "x");
    }
}
