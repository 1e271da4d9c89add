//! Bus fake that models controller page RAM.

use heapless::Vec;
use ssd1306::{
    Transport,
    protocol::{CMD_CONTRAST, CMD_DISPLAY_OFF, CMD_DISPLAY_ON, PAGES, WIDTH},
};

/// Command bytes kept in the log before it stops recording.
pub const COMMAND_LOG_CAPACITY: usize = 256;

/// Failure injected by [`RecordingTransport::fail_next`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MockBusError;

/// No-hardware transport used in tests.
///
/// Decodes page addressing commands and stores data writes the way the
/// controller would in page addressing mode, so callers can read back the
/// resulting pixel columns.
#[derive(Debug, Clone)]
pub struct RecordingTransport {
    ram: [[u8; WIDTH as usize]; PAGES as usize],
    page: u8,
    column: u8,
    display_on: bool,
    contrast: u8,
    commands: Vec<u8, COMMAND_LOG_CAPACITY>,
    command_writes: usize,
    data_writes: usize,
    data_bytes: usize,
    fail_next: bool,
}

impl Default for RecordingTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingTransport {
    /// Creates a transport whose RAM is filled with `0xFF` so clears show up.
    pub const fn new() -> Self {
        Self::filled(0xFF)
    }

    pub const fn filled(value: u8) -> Self {
        Self {
            ram: [[value; WIDTH as usize]; PAGES as usize],
            page: 0,
            column: 0,
            display_on: false,
            contrast: 0,
            commands: Vec::new(),
            command_writes: 0,
            data_writes: 0,
            data_bytes: 0,
            fail_next: false,
        }
    }

    /// One page row of RAM.
    pub fn page(&self, page: u8) -> Option<&[u8; WIDTH as usize]> {
        self.ram.get(page as usize)
    }

    /// Current RAM write pointer as `(column, page)`.
    pub fn pointer(&self) -> (u8, u8) {
        (self.column, self.page)
    }

    pub fn is_display_on(&self) -> bool {
        self.display_on
    }

    pub fn contrast(&self) -> u8 {
        self.contrast
    }

    /// Command bytes received since the last [`Self::reset_counters`].
    pub fn commands(&self) -> &[u8] {
        &self.commands
    }

    pub fn command_writes(&self) -> usize {
        self.command_writes
    }

    pub fn data_writes(&self) -> usize {
        self.data_writes
    }

    pub fn data_bytes(&self) -> usize {
        self.data_bytes
    }

    /// Total transactions seen.
    pub fn writes(&self) -> usize {
        self.command_writes + self.data_writes
    }

    pub fn reset_counters(&mut self) {
        self.commands.clear();
        self.command_writes = 0;
        self.data_writes = 0;
        self.data_bytes = 0;
    }

    /// Makes the next transaction fail without touching RAM.
    pub fn fail_next(&mut self) {
        self.fail_next = true;
    }

    fn check_failure(&mut self) -> Result<(), MockBusError> {
        if self.fail_next {
            self.fail_next = false;
            return Err(MockBusError);
        }
        Ok(())
    }

    fn store(&mut self, byte: u8) {
        if let Some(cell) = self
            .ram
            .get_mut(self.page as usize)
            .and_then(|page| page.get_mut(self.column as usize))
        {
            *cell = byte;
        }

        // Page mode wraps the column pointer and keeps the page.
        self.column = self.column.wrapping_add(1);
        if self.column >= WIDTH {
            self.column = 0;
        }
        self.data_bytes += 1;
    }

    fn decode(&mut self, bytes: &[u8]) {
        let mut iter = bytes.iter().copied();

        while let Some(cmd) = iter.next() {
            match cmd {
                0x00..=0x0F => self.column = (self.column & 0xF0) | cmd,
                0x10..=0x1F => self.column = (self.column & 0x0F) | ((cmd & 0x0F) << 4),
                0xB0..=0xB7 => self.page = cmd & 0x07,
                CMD_DISPLAY_OFF => self.display_on = false,
                CMD_DISPLAY_ON => self.display_on = true,
                CMD_CONTRAST => {
                    if let Some(level) = iter.next() {
                        self.contrast = level;
                    }
                }
                // Commands carrying one argument byte.
                0x20 | 0x8D | 0xA8 | 0xD3 | 0xD5 | 0xD9 | 0xDA | 0xDB => {
                    let _ = iter.next();
                }
                _ => {}
            }
        }
    }
}

impl Transport for RecordingTransport {
    type Error = MockBusError;

    fn write_command(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        self.check_failure()?;
        self.command_writes += 1;
        for &b in bytes {
            let _ = self.commands.push(b);
        }
        self.decode(bytes);
        Ok(())
    }

    fn write_data(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        self.check_failure()?;
        self.data_writes += 1;
        for &b in bytes {
            self.store(b);
        }
        Ok(())
    }

    fn write_repeated(&mut self, byte: u8, count: usize) -> Result<(), Self::Error> {
        self.check_failure()?;
        self.data_writes += 1;
        for _ in 0..count {
            self.store(byte);
        }
        Ok(())
    }
}
