//! Wire-level protocol helpers for the SSD1306 in page addressing mode.

/// Panel width in pixels.
pub const WIDTH: u8 = 128;
/// Number of 8-pixel pages on a 64-row panel.
pub const PAGES: u8 = 8;
/// Height of one page in pixels.
pub const PAGE_HEIGHT: u8 = 8;

/// Default 7-bit bus address of the controller.
pub const DEFAULT_ADDRESS: u8 = 0x3C;

/// Control byte announcing a command stream.
pub const CONTROL_COMMAND: u8 = 0x00;
/// Control byte announcing a GDDRAM data stream.
pub const CONTROL_DATA: u8 = 0x40;

/// Page start address command, OR'd with the page number.
pub const CMD_PAGE_START: u8 = 0xB0;
/// Higher column start nibble command, OR'd with the high nibble.
pub const CMD_COLUMN_HIGH: u8 = 0x10;
/// Lower column start nibble command, OR'd with the low nibble.
pub const CMD_COLUMN_LOW: u8 = 0x00;
/// Contrast control, followed by one level byte.
pub const CMD_CONTRAST: u8 = 0x81;
/// Display off (sleep).
pub const CMD_DISPLAY_OFF: u8 = 0xAE;
/// Display on.
pub const CMD_DISPLAY_ON: u8 = 0xAF;

/// Size of the page/column addressing command.
pub const ADDRESS_COMMAND_SIZE: usize = 3;
/// Size of the power-up command burst.
pub const INIT_SEQUENCE_SIZE: usize = 25;

/// Offset of the contrast level byte inside [`INIT_SEQUENCE`].
const INIT_CONTRAST_INDEX: usize = 17;

/// Power-up command burst, in send order.
pub const INIT_SEQUENCE: [u8; INIT_SEQUENCE_SIZE] = [
    0xD5, 0x80, // clock divide ratio / oscillator
    0xA8, 0x3F, // multiplex ratio 1:64
    0xD3, 0x00, // display offset 0
    0x40, // start line 0
    0x8D, 0x14, // charge pump on, internal VCC
    0x20, 0x02, // page addressing mode
    0xA4, // follow RAM content
    0xA1, // segment remap
    0xC8, // COM scan direction remapped
    0xDA, 0x12, // COM pins alternative config
    0x81, 0x80, // contrast
    0xDB, 0x40, // VCOMH deselect level
    0xD9, 0xF1, // precharge period
    0xB0, // page 0
    0xA6, // normal (non-inverted)
    0xAF, // display on
];

/// Builds the power-up burst with a custom contrast level.
#[inline]
pub fn build_init_sequence(contrast: u8) -> [u8; INIT_SEQUENCE_SIZE] {
    let mut seq = INIT_SEQUENCE;
    seq[INIT_CONTRAST_INDEX] = contrast;
    seq
}

/// Builds the page-select plus column-nibble command triple.
///
/// No bounds are applied to `x`; the page number is limited to the three
/// bits the page-start command carries.
#[inline]
pub const fn build_address_command(x: u8, page: u8) -> [u8; ADDRESS_COMMAND_SIZE] {
    [
        CMD_PAGE_START | (page & 0x07),
        CMD_COLUMN_HIGH | ((x & 0xF0) >> 4),
        CMD_COLUMN_LOW | (x & 0x0F),
    ]
}

/// Builds the contrast command pair.
#[inline]
pub const fn build_contrast_command(level: u8) -> [u8; 2] {
    [CMD_CONTRAST, level]
}
