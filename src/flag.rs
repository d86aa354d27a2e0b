//! Argument values for the SSD1306 command set.

/// Argument bytes and modifier bits used with [`crate::cmd::Cmd`] opcodes.
pub struct Flag;

#[allow(missing_docs)]
impl Flag {
    // Memory addressing mode (0x20) arguments
    pub const ADDRESSING_HORIZONTAL: u8 = 0x00;
    pub const ADDRESSING_VERTICAL: u8 = 0x01;
    pub const ADDRESSING_PAGE: u8 = 0x02;

    // Charge pump setting (0x8D) arguments
    pub const CHARGE_PUMP_DISABLE: u8 = 0x10;
    pub const CHARGE_PUMP_ENABLE: u8 = 0x14;

    // Segment remap (0xA0) modifier bit
    pub const SEGMENT_REMAP_NORMAL: u8 = 0x00; // column 0 maps to SEG0
    pub const SEGMENT_REMAP_REVERSED: u8 = 0x01; // column N-1 maps to SEG0

    // COM pins hardware configuration (0xDA) arguments
    pub const COM_PINS_SEQUENTIAL: u8 = 0x02;
    pub const COM_PINS_ALTERNATIVE: u8 = 0x12;

    // Display clock divide ratio / oscillator frequency (0xD5) default
    pub const CLOCK_DIVIDER_DEFAULT: u8 = 0x80;

    // VCOMH deselect level (0xDB) default
    pub const DESELECT_LEVEL_DEFAULT: u8 = 0x20;

    /// Mid-range contrast applied at the end of the init sequence.
    pub const CONTRAST_DEFAULT: u8 = 0x8F;
}
