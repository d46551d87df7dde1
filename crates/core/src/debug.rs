//! Diagnostic readout formatting for the optional debug overlay.

use crate::types::GridCell;

/// Format the three overlay lines: raw pointer position relative to the
/// container, quantized parameters, and resolved sheet cell.
///
/// The pointer position is rounded to whole units; the quantized parameters
/// are exact step multiples and print without a fractional part.
pub fn readout_lines(local_x: f64, local_y: f64, px: f64, py: f64, cell: GridCell) -> [String; 3] {
    [
        format!("Mouse: ({}, {})", local_x.round(), local_y.round()),
        format!("Quantized: px={}, py={}", px, py),
        format!("Sprite: col={}, row={}", cell.col, cell.row),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_whole_numbers_without_fraction() {
        let lines = readout_lines(12.4, 99.6, -3.0, 15.0, GridCell::new(4, 0));
        assert_eq!(lines[0], "Mouse: (12, 100)");
        assert_eq!(lines[1], "Quantized: px=-3, py=15");
        assert_eq!(lines[2], "Sprite: col=4, row=0");
    }
}
