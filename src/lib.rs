#![cfg_attr(not(test), no_std)]

//! Double-height fixed-width text for page-addressed monochrome OLEDs.
//!
//! Glyphs come from a 5x7 column font, are stretched vertically to 16 pixels
//! and written across the two controller pages that make up one text row.

pub mod cursor;
pub mod display;
pub mod font;
pub mod format;
pub mod mock;
pub mod stretch;

pub use cursor::Cursor;
pub use display::TextDisplay;
pub use font::{Font5x7, FontSource};
pub use ssd1306::{Config, I2cTransport, Transport};
pub use stretch::StretchedGlyph;

/// Visible pixel columns.
pub const MAX_PIXEL_COLUMNS: u8 = ssd1306::protocol::WIDTH;
/// Controller pages on the panel.
pub const PAGES_PER_SCREEN: u8 = ssd1306::protocol::PAGES;
/// Pixel columns per character cell, spacing column included.
pub const GLYPH_WIDTH: usize = 6;
/// Source rows carried by one raw glyph column.
pub const GLYPH_HEIGHT_ROWS: u8 = 8;
/// Controller pages covered by one stretched text row.
pub const PAGES_PER_ROW: u8 = 2;
/// Character cells per text row.
pub const TEXT_COLUMNS: u8 = MAX_PIXEL_COLUMNS / GLYPH_WIDTH as u8;
/// Text rows on the panel.
pub const TEXT_ROWS: u8 = PAGES_PER_SCREEN / PAGES_PER_ROW;

const _: () = assert!(GLYPH_HEIGHT_ROWS as u32 * 2 == PAGES_PER_ROW as u32 * 8);
