//! Logical text cursor and its physical pixel/page address.

use ssd1306::protocol::{self, ADDRESS_COMMAND_SIZE};

use crate::{GLYPH_WIDTH, MAX_PIXEL_COLUMNS, PAGES_PER_ROW, PAGES_PER_SCREEN};

/// Rightmost pixel column at which a whole glyph still fits.
pub const LAST_GLYPH_X: u8 = MAX_PIXEL_COLUMNS - GLYPH_WIDTH as u8;

const PAGE_MASK: u8 = PAGES_PER_SCREEN - 1;

/// First controller page of text row `row`.
#[inline]
pub const fn page_for_row(row: u8) -> u8 {
    row.wrapping_mul(PAGES_PER_ROW) & PAGE_MASK
}

/// Page directly below `page`.
#[inline]
pub const fn next_page(page: u8) -> u8 {
    page.wrapping_add(1) & PAGE_MASK
}

/// Cursor position in character cells plus the derived controller address.
///
/// No bounds are applied. Columns past [`crate::TEXT_COLUMNS`] saturate the
/// pixel column at `u8::MAX`, which never fits a glyph and addresses nothing
/// the controller maps.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Cursor {
    pub col: u8,
    pub row: u8,
    pub pixel_x: u8,
    pub pixel_page: u8,
}

impl Cursor {
    pub const fn at(col: u8, row: u8) -> Self {
        Self {
            col,
            row,
            pixel_x: col.saturating_mul(GLYPH_WIDTH as u8),
            pixel_page: page_for_row(row),
        }
    }

    /// Whether a glyph drawn here stays left of the right edge.
    #[inline]
    pub const fn fits_glyph(&self) -> bool {
        self.pixel_x <= LAST_GLYPH_X
    }

    /// Pixel columns from here to the right edge.
    #[inline]
    pub const fn columns_to_edge(&self) -> usize {
        MAX_PIXEL_COLUMNS.saturating_sub(self.pixel_x) as usize
    }

    /// Command triple addressing the cursor's pixel column and page.
    #[inline]
    pub const fn address_command(&self) -> [u8; ADDRESS_COMMAND_SIZE] {
        protocol::build_address_command(self.pixel_x, self.pixel_page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{TEXT_COLUMNS, TEXT_ROWS};

    #[test]
    fn cell_position_maps_to_pixel_and_page() {
        for row in 0..TEXT_ROWS {
            for col in 0..TEXT_COLUMNS {
                let cursor = Cursor::at(col, row);
                assert_eq!(cursor.pixel_x as usize, col as usize * GLYPH_WIDTH);
                assert_eq!(cursor.pixel_page, row * PAGES_PER_ROW);
                assert_eq!((cursor.col, cursor.row), (col, row));
            }
        }
    }

    #[test]
    fn pages_stay_inside_the_panel() {
        assert_eq!(page_for_row(3), 6);
        assert_eq!(page_for_row(4), 0);
        assert_eq!(next_page(6), 7);
        assert_eq!(next_page(7), 0);
    }

    #[test]
    fn right_edge_limit() {
        assert_eq!(LAST_GLYPH_X, 122);
        assert!(Cursor::at(TEXT_COLUMNS - 1, 0).fits_glyph());
        assert!(!Cursor::at(TEXT_COLUMNS, 0).fits_glyph());
        assert_eq!(Cursor::at(TEXT_COLUMNS, 0).columns_to_edge(), 2);
    }

    #[test]
    fn far_columns_saturate_instead_of_wrapping() {
        // 43 * 6 would wrap to 2 in u8 arithmetic.
        let cursor = Cursor::at(43, 0);
        assert_eq!(cursor.pixel_x, u8::MAX);
        assert!(!cursor.fits_glyph());
        assert_eq!(cursor.columns_to_edge(), 0);
    }

    #[test]
    fn address_command_uses_derived_position() {
        assert_eq!(Cursor::at(0, 0).address_command(), [0xB0, 0x10, 0x00]);
        // col 5 -> x 30 (0x1E), row 2 -> page 4
        assert_eq!(Cursor::at(5, 2).address_command(), [0xB4, 0x11, 0x0E]);
    }
}
