/// Smallest capacity an array is ever constructed or grown with.
pub const MIN_CAPACITY: usize = 3;

/// Capacities below this are never shrunk, to avoid reallocation thrash
/// on repeated small removals.
pub const SHRINK_FLOOR: usize = 6;

/// Shrink only when fewer than `capacity / SHRINK_RATIO` slots are live.
pub const SHRINK_RATIO: usize = 4;

const _: () = {
    assert!(MIN_CAPACITY >= 1, "MIN_CAPACITY must be positive");
    assert!(SHRINK_FLOOR >= 2 * MIN_CAPACITY, "shrinking below SHRINK_FLOOR could undercut MIN_CAPACITY");
    assert!(SHRINK_RATIO > 2, "shrink threshold must be stricter than the growth factor");
};
