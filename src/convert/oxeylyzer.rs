//! Oxeylyzer text format: a bare 3x10 character grid.

use crate::convert::matrix::Matrix;
use crate::convert::ConversionError;
use crate::models::Layout;

/// Rows oxeylyzer layouts must have.
pub const ROWS: usize = 3;
/// Columns every oxeylyzer row must have.
pub const COLS: usize = 10;

/// Encodes a layout in oxeylyzer format.
pub fn encode(layout: &Layout) -> Result<String, ConversionError> {
    let matrix = Matrix::from_layout(layout);
    if matrix.row_count() != ROWS || !matrix.has_uniform_width(COLS) {
        return Err(ConversionError::OxeylyzerShape {
            row_widths: matrix.row_widths(),
        });
    }

    let mut out = String::with_capacity(ROWS * (COLS * 2 + 1));
    for row in matrix.rows() {
        for key in row {
            out.push(key.char);
            out.push(' ');
        }
        out.push('\n');
    }
    Ok(out)
}
