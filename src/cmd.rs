//! SSD1306 command opcodes.
//!
//! Values taken verbatim from the SSD1306 datasheet command table; they must
//! stay byte-for-byte compatible with real hardware.

/// SSD1306 command opcode table.
pub struct Cmd;

#[allow(missing_docs)]
impl Cmd {
    // Addressing
    pub const SET_ADDRESSING_MODE: u8 = 0x20;
    pub const SET_COLUMN_ADDRESS: u8 = 0x21;
    pub const SET_PAGE_ADDRESS: u8 = 0x22;

    // Scrolling
    pub const DEACTIVATE_SCROLL: u8 = 0x2E;
    pub const ACTIVATE_SCROLL: u8 = 0x2F;

    // Fundamental commands
    /// Or the low six bits with the start line (0..=63).
    pub const SET_DISPLAY_START_LINE: u8 = 0x40;
    pub const SET_CONTRAST: u8 = 0x81;
    pub const CHARGE_PUMP: u8 = 0x8D;
    /// Or bit 0 with the remap direction.
    pub const SEGMENT_REMAP: u8 = 0xA0;
    pub const DISPLAY_ALL_ON_RESUME: u8 = 0xA4;
    pub const DISPLAY_ALL_ON: u8 = 0xA5;
    pub const DISPLAY_NORMAL: u8 = 0xA6;
    pub const DISPLAY_INVERSE: u8 = 0xA7;
    pub const SET_MUX_RATIO: u8 = 0xA8;
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;

    // Hardware configuration
    pub const COM_SCAN_DIRECTION_UP: u8 = 0xC0;
    pub const COM_SCAN_DIRECTION_DOWN: u8 = 0xC8;
    pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
    pub const SET_DISPLAY_CLOCK: u8 = 0xD5;
    pub const SET_COM_PINS: u8 = 0xDA;
    pub const SET_DESELECT_LEVEL: u8 = 0xDB;
}
