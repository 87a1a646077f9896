//! Dense row-major key grid built from a layout's sparse key positions.

use crate::models::{Finger, Layout};

/// A key projected into a matrix slot.
///
/// The default value (`'\0'`, `LP`) marks a slot no key was assigned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MatrixKey {
    /// Character printed on the key
    pub char: char,
    /// Finger assigned to the key
    pub finger: Finger,
}

impl MatrixKey {
    /// Returns true if no key was written to this slot.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        *self == Self::default()
    }
}

/// Row-major grid of keys, indexed by `[row][col]`.
///
/// Rows can differ in length. No geometry is validated here: each output
/// format checks the shape it needs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Matrix {
    rows: Vec<Vec<MatrixKey>>,
}

impl Matrix {
    /// Builds the matrix for a layout.
    ///
    /// Keys may arrive in any order and positions may be sparse. Missing
    /// slots are filled with placeholders. When two keys share a position the
    /// later one wins.
    #[must_use]
    pub fn from_layout(layout: &Layout) -> Self {
        let mut rows: Vec<Vec<MatrixKey>> = Vec::new();

        for key in &layout.keys {
            let (row, col) = key.position();
            let (row, col) = (usize::from(row), usize::from(col));

            if rows.len() <= row {
                rows.resize_with(row + 1, Vec::new);
            }
            let cells = &mut rows[row];
            if cells.len() <= col {
                cells.resize(col + 1, MatrixKey::default());
            }
            cells[col] = MatrixKey {
                char: key.char,
                finger: key.finger,
            };
        }

        Self { rows }
    }

    /// Returns the rows.
    #[must_use]
    pub fn rows(&self) -> &[Vec<MatrixKey>] {
        &self.rows
    }

    /// Number of rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Length of each row, top to bottom.
    #[must_use]
    pub fn row_widths(&self) -> Vec<usize> {
        self.rows.iter().map(Vec::len).collect()
    }

    /// Returns true if every row has exactly `cols` slots.
    #[must_use]
    pub fn has_uniform_width(&self, cols: usize) -> bool {
        self.rows.iter().all(|row| row.len() == cols)
    }

    /// Number of placeholder slots.
    #[must_use]
    pub fn hole_count(&self) -> usize {
        self.rows
            .iter()
            .flatten()
            .filter(|key| key.is_placeholder())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Key;

    #[test]
    fn test_builds_dense_grid_from_unordered_keys() {
        let layout = Layout::new("T").with_keys([
            Key::new('d', 1, 1, Finger::LM),
            Key::new('a', 0, 0, Finger::LP),
            Key::new('c', 1, 0, Finger::LR),
            Key::new('b', 0, 1, Finger::LR),
        ]);
        let matrix = Matrix::from_layout(&layout);

        assert_eq!(matrix.row_count(), 2);
        assert!(matrix.has_uniform_width(2));
        let chars: Vec<Vec<char>> = matrix
            .rows()
            .iter()
            .map(|row| row.iter().map(|k| k.char).collect())
            .collect();
        assert_eq!(chars, vec![vec!['a', 'b'], vec!['c', 'd']]);
        assert_eq!(matrix.rows()[1][1].finger, Finger::LM);
        assert_eq!(matrix.hole_count(), 0);
    }

    #[test]
    fn test_gaps_become_placeholders() {
        let layout = Layout::new("T").with_keys([
            Key::new('x', 0, 3, Finger::LI),
            Key::new('y', 2, 1, Finger::RI),
        ]);
        let matrix = Matrix::from_layout(&layout);

        assert_eq!(matrix.row_widths(), vec![4, 0, 2]);
        assert!(matrix.rows()[0][0].is_placeholder());
        assert_eq!(matrix.rows()[0][0].char, '\0');
        assert_eq!(matrix.rows()[0][0].finger, Finger::LP);
        assert_eq!(matrix.rows()[0][3].char, 'x');
        assert_eq!(matrix.hole_count(), 4);
    }

    #[test]
    fn test_single_key_on_row_five() {
        let layout = Layout::new("T").with_keys([Key::new('z', 5, 0, Finger::RP)]);
        let matrix = Matrix::from_layout(&layout);

        assert_eq!(matrix.row_count(), 6);
        for row in &matrix.rows()[..5] {
            assert!(row.iter().all(MatrixKey::is_placeholder));
        }
        assert_eq!(matrix.rows()[5], vec![MatrixKey { char: 'z', finger: Finger::RP }]);
    }

    #[test]
    fn test_later_key_wins_on_collision() {
        let layout = Layout::new("T").with_keys([
            Key::new('a', 0, 0, Finger::LP),
            Key::new('b', 0, 0, Finger::LR),
        ]);
        let matrix = Matrix::from_layout(&layout);
        assert_eq!(matrix.rows()[0], vec![MatrixKey { char: 'b', finger: Finger::LR }]);
    }

    #[test]
    fn test_empty_layout_has_no_rows() {
        let matrix = Matrix::from_layout(&Layout::new("T"));
        assert_eq!(matrix.row_count(), 0);
        assert!(matrix.has_uniform_width(10));
    }
}
