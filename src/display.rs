//! Text renderer: cursor tracking plus glyph, line and screen operations.

use embedded_hal::delay::DelayNs;
use log::{debug, trace};
use ssd1306::{Config, Transport, protocol};

use crate::{
    MAX_PIXEL_COLUMNS, PAGES_PER_ROW, PAGES_PER_SCREEN,
    cursor::{self, Cursor},
    font::{self, Font5x7, FontSource},
    format, stretch,
};

const LINE_FEED: u8 = b'\n';
const STRING_TERMINATOR: u8 = 0x00;

/// Double-height text display over a [`Transport`].
///
/// Owns the bus and the cursor; every operation blocks until its
/// transactions complete.
#[derive(Debug)]
pub struct TextDisplay<T, F = Font5x7> {
    transport: T,
    font: F,
    config: Config,
    cursor: Cursor,
}

impl<T> TextDisplay<T, Font5x7>
where
    T: Transport,
{
    /// Creates a display using the built-in font.
    pub fn new(transport: T, config: Config) -> Self {
        Self::with_font(transport, Font5x7, config)
    }
}

impl<T, F> TextDisplay<T, F>
where
    T: Transport,
    F: FontSource,
{
    /// Creates a display drawing glyphs from `font`.
    pub fn with_font(transport: T, font: F, config: Config) -> Self {
        Self {
            transport,
            font,
            config,
            cursor: Cursor::default(),
        }
    }

    /// Returns current configuration.
    pub fn config(&self) -> Config {
        self.config
    }

    /// Returns the cursor state.
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Returns the owned transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Returns the owned transport mutably.
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Releases the owned transport.
    pub fn release(self) -> T {
        self.transport
    }

    /// Sends the power-up burst, waits for the panel to settle and clears it.
    pub fn begin<D>(&mut self, delay: &mut D) -> Result<(), T::Error>
    where
        D: DelayNs,
    {
        debug!(
            "oled: init contrast={:#04x} settle_us={}",
            self.config.contrast, self.config.settle_us
        );
        let init = protocol::build_init_sequence(self.config.contrast);
        self.transport.write_command(&init)?;
        delay.delay_us(self.config.settle_us);
        self.clear_screen()
    }

    /// Puts the panel to sleep.
    pub fn display_off(&mut self) -> Result<(), T::Error> {
        self.transport.write_command(&[protocol::CMD_DISPLAY_OFF])
    }

    /// Wakes the panel.
    pub fn display_on(&mut self) -> Result<(), T::Error> {
        self.transport.write_command(&[protocol::CMD_DISPLAY_ON])
    }

    /// Writes a new contrast level.
    pub fn set_contrast(&mut self, level: u8) -> Result<(), T::Error> {
        self.config.contrast = level;
        self.transport
            .write_command(&protocol::build_contrast_command(level))
    }

    /// Emits the raw page/column addressing command.
    ///
    /// Cursor state is left untouched.
    pub fn set_page(&mut self, x: u8, page: u8) -> Result<(), T::Error> {
        self.transport
            .write_command(&protocol::build_address_command(x, page))
    }

    /// Moves the physical address without changing the logical cell.
    ///
    /// The cursor only changes once the controller accepted the command.
    pub fn set_xy(&mut self, x: u8, page: u8) -> Result<(), T::Error> {
        self.set_page(x, page)?;
        self.cursor.pixel_x = x;
        self.cursor.pixel_page = page;
        Ok(())
    }

    /// Moves to character cell `(col, row)` and addresses its first page.
    pub fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), T::Error> {
        let cursor = Cursor::at(col, row);
        self.transport.write_command(&cursor.address_command())?;
        self.cursor = cursor;
        Ok(())
    }

    /// Draws one character at the cursor and advances one cell.
    ///
    /// Line feeds and glyphs that would cross the right edge are dropped
    /// without touching the bus.
    pub fn put_char(&mut self, ch: u8) -> Result<(), T::Error> {
        if ch == LINE_FEED {
            return Ok(());
        }
        if !self.cursor.fits_glyph() {
            trace!(
                "oled: drop glyph {:#04x} at x={} page={}",
                ch, self.cursor.pixel_x, self.cursor.pixel_page
            );
            return Ok(());
        }

        let raw = self.font.columns(font::glyph_index(ch));
        let glyph = stretch::stretch_glyph(&raw);

        self.transport.write_data(&glyph.first_page)?;
        self.set_xy(
            self.cursor.pixel_x,
            cursor::next_page(self.cursor.pixel_page),
        )?;
        self.transport.write_data(&glyph.second_page)?;

        self.set_cursor(self.cursor.col.wrapping_add(1), self.cursor.row)
    }

    /// Draws `text` up to its end or a NUL byte, then clears the rest of the line.
    pub fn put_str(&mut self, text: &str) -> Result<(), T::Error> {
        for ch in text.bytes().take_while(|&b| b != STRING_TERMINATOR) {
            self.put_char(ch)?;
        }
        self.clear_to_eol()
    }

    /// Positions at the start of `row` and draws `text` there.
    pub fn print_line(&mut self, row: u8, text: &str) -> Result<(), T::Error> {
        self.set_cursor(0, row)?;
        self.put_str(text)
    }

    /// Zeroes both pages of the current row from the cursor to the right edge.
    ///
    /// The controller is left addressed at the cursor again.
    pub fn clear_to_eol(&mut self) -> Result<(), T::Error> {
        let Cursor {
            pixel_x, pixel_page, ..
        } = self.cursor;
        let count = self.cursor.columns_to_edge();

        self.transport.write_repeated(0x00, count)?;
        self.set_page(pixel_x, cursor::next_page(pixel_page))?;
        self.transport.write_repeated(0x00, count)?;
        self.set_page(pixel_x, pixel_page)
    }

    /// Zeroes text row `row` and leaves the cursor at its start.
    pub fn clear_line(&mut self, row: u8) -> Result<(), T::Error> {
        self.set_cursor(0, row)?;
        self.fill_pages(self.cursor.pixel_page, PAGES_PER_ROW)?;
        self.set_cursor(0, row)
    }

    /// Zeroes every page of the panel and homes the cursor.
    pub fn clear_screen(&mut self) -> Result<(), T::Error> {
        debug!("oled: clear screen pages={}", PAGES_PER_SCREEN);
        self.set_cursor(0, 0)?;
        self.fill_pages(self.cursor.pixel_page, PAGES_PER_SCREEN)?;
        self.set_cursor(0, 0)
    }

    /// Prints a `u8` left-justified.
    pub fn print_u8(&mut self, val: u8) -> Result<(), T::Error> {
        let field = format::padded::<{ format::U8_WIDTH }>(u32::from(val));
        self.put_str(field.trim_start())
    }

    /// Prints a `u16` left-justified.
    pub fn print_u16(&mut self, val: u16) -> Result<(), T::Error> {
        let field = format::padded::<{ format::U16_WIDTH }>(u32::from(val));
        self.put_str(field.trim_start())
    }

    /// Prints a `u32` with thousands separators, left-justified.
    pub fn print_u32(&mut self, val: u32) -> Result<(), T::Error> {
        let field = format::grouped(val);
        self.put_str(field.trim_start())
    }

    /// Prints a frequency given in hundredths as whole units.
    pub fn print_freq(&mut self, val: u32) -> Result<(), T::Error> {
        let field = format::frequency(val);
        self.put_str(field.trim_start())
    }

    /// Zeroes `count` pages starting at `first`; the first page must already be
    /// addressed at column 0.
    fn fill_pages(&mut self, first: u8, count: u8) -> Result<(), T::Error> {
        let mut page = first;
        for p in 0..count {
            if p > 0 {
                page = cursor::next_page(page);
                self.set_page(0, page)?;
            }
            self.transport
                .write_repeated(0x00, MAX_PIXEL_COLUMNS as usize)?;
        }
        Ok(())
    }
}
