//! Vertical 2x stretching of glyph columns across two controller pages.

use crate::GLYPH_WIDTH;

/// A glyph doubled in height, split at the page boundary.
///
/// `first_page` holds source rows 0..=3 and is written to the row's own
/// page; `second_page` holds rows 4..=7 and goes to the page below it.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct StretchedGlyph {
    pub first_page: [u8; GLYPH_WIDTH],
    pub second_page: [u8; GLYPH_WIDTH],
}

/// Doubles every source pixel of one column.
///
/// Source bit `i` lands on output bits `2i` and `2i + 1` (mod 8) of the
/// first byte for `i < 4`, of the second byte otherwise.
#[inline]
pub const fn stretch_column(column: u8) -> (u8, u8) {
    let mut first = 0u8;
    let mut second = 0u8;
    let mut test = 0x01u8;
    let mut pair = 0x03u8;
    let mut i = 0;

    while i < 4 {
        if column & test != 0 {
            first |= pair;
        }
        if column & (test << 4) != 0 {
            second |= pair;
        }
        test <<= 1;
        pair <<= 2;
        i += 1;
    }

    (first, second)
}

/// Stretches all columns of a glyph.
pub fn stretch_glyph(columns: &[u8; GLYPH_WIDTH]) -> StretchedGlyph {
    let mut glyph = StretchedGlyph::default();

    for (i, &column) in columns.iter().enumerate() {
        let (first, second) = stretch_column(column);
        glyph.first_page[i] = first;
        glyph.second_page[i] = second;
    }

    glyph
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output_bit(column: u8, out_bit: u32) -> bool {
        let (first, second) = stretch_column(column);
        let stacked = (first as u16) | ((second as u16) << 8);
        stacked & (1 << out_bit) != 0
    }

    #[test]
    fn every_source_bit_is_doubled_exactly() {
        for column in 0..=u8::MAX {
            for i in 0..8u32 {
                let source = column & (1 << i) != 0;
                assert_eq!(output_bit(column, 2 * i), source, "col {column:#04x} bit {i}");
                assert_eq!(output_bit(column, 2 * i + 1), source, "col {column:#04x} bit {i}");
            }
        }
    }

    #[test]
    fn nibbles_map_to_their_page() {
        assert_eq!(stretch_column(0x00), (0x00, 0x00));
        assert_eq!(stretch_column(0x01), (0x03, 0x00));
        assert_eq!(stretch_column(0x08), (0xC0, 0x00));
        assert_eq!(stretch_column(0x10), (0x00, 0x03));
        assert_eq!(stretch_column(0x80), (0x00, 0xC0));
        assert_eq!(stretch_column(0x0F), (0xFF, 0x00));
        assert_eq!(stretch_column(0xF0), (0x00, 0xFF));
        assert_eq!(stretch_column(0x55), (0x33, 0x33));
    }

    #[test]
    fn glyph_columns_stay_in_order() {
        let glyph = stretch_glyph(&[0x3E, 0x51, 0x49, 0x45, 0x3E, 0x00]);

        assert_eq!(glyph.first_page, [0xFC, 0x03, 0xC3, 0x33, 0xFC, 0x00]);
        assert_eq!(glyph.second_page, [0x0F, 0x33, 0x30, 0x30, 0x0F, 0x00]);
    }
}
