//! Product identifiers and the per-variant configuration table.
//!
//! Each supported module built around an SSD1306 wires the controller
//! slightly differently: segment remap direction, COM scan direction and COM
//! pin layout are coupled, and a wrong combination produces a mirrored,
//! squeezed or blank image. The table below resolves a product code to all of
//! these choices once, at init, instead of branching per call site.

use crate::interface::TransportKind;

/// Product code identifying a concrete display module.
///
/// Codes are open-ended on purpose: looking up an unlisted code fails with
/// [`crate::error::ConfigError::UnknownProduct`] instead of partially
/// configuring the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Product(u16);

impl Product {
    /// Adafruit product 931, a 128x32 I2C module with the charge pump wired.
    pub const ADAFRUIT_931: Product = Product(0x0001);
    /// SeeedStudio OLED display 1.1", a 128x64 I2C module with external supply.
    pub const SEEEDSTUDIO_OLED_1_1: Product = Product(0x0002);

    /// Product from a raw code, for example one read from board description
    /// data. The code is validated at [`Ssd1306::new`](crate::driver::Ssd1306::new)
    /// time, not here.
    pub const fn from_code(code: u16) -> Product {
        Product(code)
    }

    /// Raw product code.
    pub fn code(self) -> u16 {
        self.0
    }

    /// Look up the variant profile for this product.
    pub fn profile(self) -> Option<&'static VariantProfile> {
        match self {
            Product::ADAFRUIT_931 => Some(&ADAFRUIT_931_PROFILE),
            Product::SEEEDSTUDIO_OLED_1_1 => Some(&SEEEDSTUDIO_OLED_1_1_PROFILE),
            Product(_) => None,
        }
    }
}

/// The coupled segment/COM wiring parameters of one variant.
///
/// Emitted during init as one atomic ordered group; the individual commands
/// are not overridable mid-sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComSegmentBlock {
    /// Reverse segment remap (column N-1 drives SEG0).
    pub segment_remap_reversed: bool,
    /// Scan COM outputs from COM\[N-1\] down to COM0.
    pub com_scan_descending: bool,
    /// Argument byte for the COM pins hardware configuration command.
    pub com_pins: u8,
    /// Display clock divider argument, for variants that need a non-reset value.
    pub clock_divider: Option<u8>,
    /// VCOMH deselect level argument, for variants that need a non-reset value.
    pub deselect_level: Option<u8>,
}

/// Everything init needs to know about one product, resolved in one lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantProfile {
    /// Active width in pixels.
    pub width: u8,
    /// Active height in pixels; always a multiple of 8.
    pub height: u8,
    /// Transport the module is wired for.
    pub transport: TransportKind,
    /// Bus address on that transport.
    pub address: u8,
    /// Whether the module runs from the controller's internal charge pump.
    pub charge_pump: bool,
    /// Variant-specific wiring block, `None` when the reset defaults apply.
    pub com_segment: Option<ComSegmentBlock>,
}

impl VariantProfile {
    /// Page count of the active geometry (`height / 8`).
    pub fn pages(&self) -> u8 {
        self.height / 8
    }

    /// Column count of the active geometry.
    pub fn columns(&self) -> u8 {
        self.width
    }
}

static ADAFRUIT_931_PROFILE: VariantProfile = VariantProfile {
    width: 128,
    height: 32,
    transport: TransportKind::I2c,
    address: 0x3C,
    charge_pump: true,
    com_segment: Some(ComSegmentBlock {
        segment_remap_reversed: true,
        com_scan_descending: true,
        com_pins: 0x02,
        clock_divider: None,
        deselect_level: None,
    }),
};

// The SeeedStudio module works with the controller's reset wiring defaults.
static SEEEDSTUDIO_OLED_1_1_PROFILE: VariantProfile = VariantProfile {
    width: 128,
    height: 64,
    transport: TransportKind::I2c,
    address: 0x3C,
    charge_pump: false,
    com_segment: None,
};

/// Display configuration supplied by the caller, consumed once at init.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Which product is attached.
    pub product: Product,
}

impl DisplayConfig {
    /// Configuration for the given product.
    pub fn new(product: Product) -> Self {
        DisplayConfig { product }
    }
}
