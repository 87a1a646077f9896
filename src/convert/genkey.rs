//! Genkey text format.
//!
//! ```text
//! QWERTY
//! q w e r t y u i o p
//! a s d f g h j k l ;
//! z x c v b n m , . /
//! 0 1 2 3 3 4 4 5 6 7
//! 0 1 2 3 3 4 4 5 6 7
//! 0 1 2 3 3 4 4 5 6 7
//! ```
//!
//! Every cell is followed by a single space. Genkey numbers fingers 0-7 with
//! no slots for thumbs, so thumb keys cannot be represented.

use crate::convert::matrix::Matrix;
use crate::convert::ConversionError;
use crate::models::{Finger, Layout};

/// Rows genkey layouts must have.
pub const ROWS: usize = 3;

/// Maps a finger to its genkey index.
///
/// Right-hand fingers shift down by two to close the gap left by the thumbs.
/// Callers must reject thumbs first.
#[must_use]
pub const fn finger_index(finger: Finger) -> u8 {
    let ordinal = finger.ordinal();
    if ordinal >= Finger::RI.ordinal() {
        ordinal - 2
    } else {
        ordinal
    }
}

/// Encodes a layout in genkey format.
pub fn encode(layout: &Layout) -> Result<String, ConversionError> {
    let matrix = Matrix::from_layout(layout);
    if matrix.row_count() != ROWS {
        return Err(ConversionError::GenkeyRowCount {
            found: matrix.row_count(),
        });
    }

    let mut out = String::with_capacity(layout.name.len() + layout.keys.len() * 4 + 8);
    out.push_str(&layout.name);
    out.push('\n');

    for row in matrix.rows() {
        for key in row {
            out.push(key.char);
            out.push(' ');
        }
        out.push('\n');
    }

    for (row_idx, row) in matrix.rows().iter().enumerate() {
        for (col_idx, key) in row.iter().enumerate() {
            if key.finger.is_thumb() {
                return Err(ConversionError::GenkeyThumbKey {
                    row: row_idx,
                    col: col_idx,
                });
            }
            out.push_str(&finger_index(key.finger).to_string());
            out.push(' ');
        }
        out.push('\n');
    }

    Ok(out)
}
