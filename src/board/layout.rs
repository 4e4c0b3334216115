//! Display order of squares.
//!
//! Boards are drawn boustrophedon: square 1 is bottom-left, rows alternate
//! direction, and square 100 is top-left. Renderers lay out cells from these
//! rows without knowing the rule.

use crate::core::FINAL_SQUARE;

/// Squares per row.
pub const ROW_LENGTH: u8 = 10;

/// Square numbers row by row, top row first, each row left to right.
///
/// ```
/// use snakes_ladders::board::serpentine_rows;
///
/// let rows = serpentine_rows();
/// assert_eq!(rows[0][0], 100);
/// assert_eq!(rows[9][0], 1);
/// ```
#[must_use]
pub fn serpentine_rows() -> Vec<Vec<u8>> {
    let row_count = FINAL_SQUARE / ROW_LENGTH;

    (0..row_count)
        .rev()
        .map(|row| {
            let first = row * ROW_LENGTH + 1;
            let mut ids: Vec<u8> = (first..first + ROW_LENGTH).collect();
            if row % 2 == 1 {
                ids.reverse();
            }
            ids
        })
        .collect()
}
