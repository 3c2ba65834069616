//! Modular index arithmetic for periodic columns and lanes.

/// Offset a column index on a periodic track of `len` columns.
///
/// Equivalent to `(col + delta + len) mod len`, but also well defined for
/// offsets larger than one lap.
///
/// # Examples
///
/// ```
/// use asep_core::circular_column;
///
/// assert_eq!(circular_column(0, -1, 7), 6);
/// assert_eq!(circular_column(6, 1, 7), 0);
/// assert_eq!(circular_column(3, 2, 7), 5);
/// ```
#[inline]
pub fn circular_column(col: usize, delta: isize, len: usize) -> usize {
    wrap(col, delta, len)
}

/// Offset a lane index on a periodic set of `lanes` lanes.
///
/// Equivalent to `(lane + delta + lanes) mod lanes`.
#[inline]
pub fn circular_lane(lane: usize, delta: isize, lanes: usize) -> usize {
    wrap(lane, delta, lanes)
}

/// Number of steps needed to walk from `from` to `to` moving `sign` (`+1` or
/// `-1`) one column at a time on a ring of `len` columns.
///
/// Returns a value in `[0, len)`.
#[inline]
pub fn circular_distance(from: usize, to: usize, sign: isize, len: usize) -> usize {
    let n = len as isize;
    ((to as isize - from as isize) * sign).rem_euclid(n) as usize
}

#[inline]
fn wrap(i: usize, delta: isize, len: usize) -> usize {
    debug_assert!(len > 0, "modulus must be non-zero");
    (i as isize + delta).rem_euclid(len as isize) as usize
}
