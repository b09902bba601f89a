//! Route quality scoring.
//!
//! The score reflects route complexity only: more provider legs means more
//! hops and a lower score. Ratings and crowd levels are deliberately not
//! inputs, matching the behaviour callers already calibrate against.

/// Heuristic quality score for a route with the given number of legs.
///
/// Always within [50, 95].
pub fn optimization_score(leg_count: usize) -> u8 {
    let raw = 75i64 - 3 * leg_count as i64;
    raw.clamp(50, 95) as u8
}
