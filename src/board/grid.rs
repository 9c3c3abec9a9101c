//! Grid representation and the direction-agnostic slide-and-merge core.
//!
//! Every move is performed as "collapse to the left": the grid is first
//! reoriented so the requested direction points left, collapsed, then
//! reoriented back with the matching inverse.

/// Row-major matrix of tile values, `0` meaning empty.
pub type Grid = Vec<Vec<u32>>;

/// Largest tile value a grid can hold. Two of these never merge.
pub const MAX_TILE: u32 = 1 << 31;

/// The four sliding directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Transform pair turning this direction into "left" and back again.
    pub const fn reorientation(self) -> Reorientation {
        match self {
            Direction::Left => Reorientation { forward: identity, inverse: identity },
            Direction::Right => Reorientation { forward: reverse_rows, inverse: reverse_rows },
            Direction::Up => Reorientation { forward: transpose, inverse: transpose },
            Direction::Down => Reorientation {
                forward: transpose_then_reverse,
                inverse: reverse_then_transpose,
            },
        }
    }
}

/// A grid transform and its inverse.
#[derive(Clone, Copy)]
pub struct Reorientation {
    pub forward: fn(Grid) -> Grid,
    pub inverse: fn(Grid) -> Grid,
}

fn identity(grid: Grid) -> Grid {
    grid
}

pub(crate) fn transpose(grid: Grid) -> Grid {
    let width = grid.first().map_or(0, Vec::len);
    (0..width)
        .map(|col| grid.iter().map(|row| row[col]).collect())
        .collect()
}

pub(crate) fn reverse_rows(mut grid: Grid) -> Grid {
    for row in grid.iter_mut() {
        row.reverse();
    }
    grid
}

fn transpose_then_reverse(grid: Grid) -> Grid {
    reverse_rows(transpose(grid))
}

fn reverse_then_transpose(grid: Grid) -> Grid {
    transpose(reverse_rows(grid))
}

/// Collapse every row towards index 0 and return the points scored.
///
/// Rows are squeezed and merged pass after pass until a whole-grid pass
/// produces no merge. A tile created by a merge is flagged and never merges
/// again within the same call.
pub(crate) fn collapse_left(grid: &mut Grid) -> u64 {
    let mut fused: Vec<Vec<bool>> = grid.iter().map(|row| vec![false; row.len()]).collect();
    let mut gained = 0;

    loop {
        let mut merges = 0;
        for (row, fused) in grid.iter_mut().zip(fused.iter_mut()) {
            squeeze(row, fused);
            let (count, points) = merge(row, fused);
            merges += count;
            gained += points;
        }
        if merges == 0 {
            break;
        }
    }

    gained
}

/// Compact non-zero cells to the front of the row, keeping their order.
fn squeeze(row: &mut [u32], fused: &mut [bool]) {
    let mut write = 0;
    for read in 0..row.len() {
        if row[read] == 0 {
            continue;
        }
        if write != read {
            row[write] = row[read];
            fused[write] = fused[read];
            row[read] = 0;
            fused[read] = false;
        }
        write += 1;
    }
}

/// Single left-to-right merge scan. Returns (merges, points).
fn merge(row: &mut [u32], fused: &mut [bool]) -> (usize, u64) {
    let mut merges = 0;
    let mut points = 0;

    for j in 0..row.len().saturating_sub(1) {
        if fuses(row[j], row[j + 1]) && !fused[j] && !fused[j + 1] {
            row[j] *= 2;
            fused[j] = true;
            row[j + 1] = 0;
            merges += 1;
            points += u64::from(row[j]);
        }
    }

    (merges, points)
}

/// Two neighbouring tiles can combine into one of double value.
fn fuses(a: u32, b: u32) -> bool {
    a != 0 && a == b && a < MAX_TILE
}

/// True when the grid has no empty cell and no equal orthogonal neighbours.
pub(crate) fn is_deadlocked(grid: &Grid) -> bool {
    if grid.iter().flatten().any(|&v| v == 0) {
        return false;
    }

    let horizontal = grid
        .iter()
        .any(|row| row.windows(2).any(|pair| fuses(pair[0], pair[1])));
    let vertical = grid
        .windows(2)
        .any(|rows| rows[0].iter().zip(rows[1].iter()).any(|(&a, &b)| fuses(a, b)));

    !horizontal && !vertical
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collapse_row(row: &[u32]) -> (Vec<u32>, u64) {
        let mut grid = vec![row.to_vec()];
        let gained = collapse_left(&mut grid);
        (grid.remove(0), gained)
    }

    #[test]
    fn squeeze_keeps_order() {
        let mut row = [0, 2, 0, 4];
        let mut fused = [false; 4];
        squeeze(&mut row, &mut fused);
        assert_eq!(row, [2, 4, 0, 0]);
    }

    #[test]
    fn pair_merges_once() {
        assert_eq!(collapse_row(&[2, 2, 0, 0]), (vec![4, 0, 0, 0], 4));
        assert_eq!(collapse_row(&[2, 2, 2, 2]), (vec![4, 4, 0, 0], 8));
        assert_eq!(collapse_row(&[4, 4, 8, 0]), (vec![8, 8, 0, 0], 8));
    }

    #[test]
    fn leftmost_pair_wins() {
        assert_eq!(collapse_row(&[2, 2, 2, 0]), (vec![4, 2, 0, 0], 4));
        assert_eq!(collapse_row(&[0, 2, 2, 2]), (vec![4, 2, 0, 0], 4));
    }

    #[test]
    fn gaps_do_not_block_merges() {
        assert_eq!(collapse_row(&[2, 0, 0, 2]), (vec![4, 0, 0, 0], 4));
        assert_eq!(collapse_row(&[4, 0, 2, 2]), (vec![4, 4, 0, 0], 4));
    }

    #[test]
    fn single_cell_row_is_noop() {
        assert_eq!(collapse_row(&[8]), (vec![8], 0));
    }

    #[test]
    fn reorientations_are_inverse_pairs() {
        let grid: Grid = vec![vec![1, 2, 3], vec![4, 5, 6]];
        for direction in Direction::ALL {
            let Reorientation { forward, inverse } = direction.reorientation();
            assert_eq!(inverse(forward(grid.clone())), grid, "{direction:?}");
        }
    }

    #[test]
    fn down_maps_bottom_to_left() {
        let grid: Grid = vec![vec![1, 2], vec![3, 4]];
        let forward = Direction::Down.reorientation().forward;
        assert_eq!(forward(grid), vec![vec![3, 1], vec![4, 2]]);
    }

    #[test]
    fn deadlock_needs_full_grid() {
        assert!(is_deadlocked(&vec![vec![2, 4], vec![4, 2]]));
        assert!(!is_deadlocked(&vec![vec![2, 4], vec![2, 8]]));
        assert!(!is_deadlocked(&vec![vec![2, 0], vec![4, 2]]));
    }

    #[test]
    fn max_tiles_do_not_merge() {
        assert_eq!(
            collapse_row(&[MAX_TILE, MAX_TILE, 2, 2]),
            (vec![MAX_TILE, MAX_TILE, 4, 0], 4)
        );
        assert_eq!(collapse_row(&[1 << 30, 1 << 30]), (vec![MAX_TILE, 0], 1 << 31));
        assert!(is_deadlocked(&vec![vec![MAX_TILE, MAX_TILE], vec![2, 4]]));
    }
}
