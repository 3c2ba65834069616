//! Track-to-grid projection.
//!
//! Cell `(lane, col)` of the grid is `+1` when column `col` holds the
//! type-1 particle of `lane`, `-1` when it holds a type-2 particle
//! affiliated with `lane`, and `0` otherwise. Every column therefore has
//! exactly one non-zero cell.

use asep_core::Track;

/// Dense `lanes x columns` occupancy grid, row-major by lane.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct OccupancyGrid {
    lanes: usize,
    columns: usize,
    cells: Vec<i8>,
}

impl OccupancyGrid {
    /// Number of rows.
    pub fn lanes(&self) -> usize {
        self.lanes
    }

    /// Number of columns.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Value at `(lane, col)`. Panics when out of range.
    #[inline]
    pub fn get(&self, lane: usize, col: usize) -> i8 {
        assert!(col < self.columns, "column {col} out of range");
        self.cells[lane * self.columns + col]
    }

    /// One lane's row.
    pub fn row(&self, lane: usize) -> &[i8] {
        let start = lane * self.columns;
        &self.cells[start..start + self.columns]
    }

    /// All cells, row-major.
    pub fn as_slice(&self) -> &[i8] {
        &self.cells
    }

    /// `(lanes, columns)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.lanes, self.columns)
    }
}

/// Project `track` onto an occupancy grid.
///
/// With `restrict`, the track is first rotated so that lane 0's type-1
/// particle lands in column 0. The input is never modified.
///
/// # Examples
///
/// ```
/// use asep_core::Track;
/// use asep_obs::project;
///
/// let track = Track::from_labels(2, vec![3, 0, 2, 1]).unwrap();
/// let grid = project(&track, false);
/// assert_eq!(grid.row(0), &[0, 1, -1, 0]);
/// assert_eq!(grid.row(1), &[-1, 0, 0, 1]);
///
/// let restricted = project(&track, true);
/// assert_eq!(restricted.row(0), &[1, -1, 0, 0]);
/// ```
pub fn project(track: &Track, restrict: bool) -> OccupancyGrid {
    if restrict {
        fill(&track.rotated_to_lane_zero())
    } else {
        fill(track)
    }
}

/// Project every track of a trajectory, in order.
pub fn project_trajectory(tracks: &[Track], restrict: bool) -> Vec<OccupancyGrid> {
    tracks.iter().map(|t| project(t, restrict)).collect()
}

fn fill(track: &Track) -> OccupancyGrid {
    let lanes = track.lanes();
    let columns = track.columns();
    let mut cells = vec![0i8; lanes * columns];
    for col in 0..columns {
        let label = track.label(col);
        cells[label.lane() * columns + col] = if label.is_type1() { 1 } else { -1 };
    }
    OccupancyGrid {
        lanes,
        columns,
        cells,
    }
}
