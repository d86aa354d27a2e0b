//! Register-oriented transport abstraction.
//!
//! The SSD1306 wire contract is a register write: a one-byte control code
//! (0x00 for commands, 0x40 for display data) followed by the payload byte.
//! [`RegisterInterface`] captures that contract; the driver never talks to a
//! bus directly. The I2C implementation is complete, SPI and parallel are
//! extension points with no wire framing defined yet.

use display_interface::DisplayError;
use embedded_hal::i2c::I2c;

/// Control code prefixing every command byte.
pub const CONTROL_COMMAND: u8 = 0x00;
/// Control code prefixing every display-data byte.
pub const CONTROL_DATA: u8 = 0x40;

/// Attempts per register write before the bus failure is surfaced.
pub const WRITE_ATTEMPTS: u8 = 3;

/// Which physical transport an interface speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportKind {
    /// Two-wire I2C bus.
    I2c,
    /// Four-wire SPI bus.
    Spi,
    /// 8080/6800-style parallel bus.
    Parallel,
}

/// Control-code-framed register writes toward the display controller.
///
/// Every operation is blocking; per-call timeouts are whatever the underlying
/// bus implementation enforces.
pub trait RegisterInterface {
    /// Transport this interface speaks, checked once at init against the
    /// product's variant profile.
    fn kind(&self) -> TransportKind;

    /// Adopt the bus address resolved from the variant table.
    ///
    /// Transports without bus addressing ignore this.
    fn set_address(&mut self, _address: u8) {}

    /// Write one control-code-framed register value.
    fn write_register(&mut self, control: u8, value: u8) -> Result<(), DisplayError>;

    /// Write one command byte, framed with [`CONTROL_COMMAND`].
    fn write_command(&mut self, command: u8) -> Result<(), DisplayError> {
        self.write_register(CONTROL_COMMAND, command)
    }

    /// Write one display-data byte, framed with [`CONTROL_DATA`].
    fn write_data(&mut self, value: u8) -> Result<(), DisplayError> {
        self.write_register(CONTROL_DATA, value)
    }
}

/// I2C register interface with a bounded, no-backoff retry policy.
pub struct I2cInterface<I2C> {
    i2c: I2C,
    address: u8,
    attempts: u8,
}

impl<I2C> I2cInterface<I2C> {
    /// Wrap an I2C bus.
    ///
    /// The device address starts at the common 0x3C and is overwritten with
    /// the variant table's address during init.
    pub fn new(i2c: I2C) -> Self {
        I2cInterface {
            i2c,
            address: 0x3C,
            attempts: WRITE_ATTEMPTS,
        }
    }

    /// Override the retry budget per register write. Must be at least 1.
    pub fn with_attempts(mut self, attempts: u8) -> Self {
        debug_assert!(attempts >= 1);
        self.attempts = attempts;
        self
    }

    /// Give the bus back.
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C> RegisterInterface for I2cInterface<I2C>
where
    I2C: I2c,
{
    fn kind(&self) -> TransportKind {
        TransportKind::I2c
    }

    fn set_address(&mut self, address: u8) {
        self.address = address;
    }

    fn write_register(&mut self, control: u8, value: u8) -> Result<(), DisplayError> {
        let frame = [control, value];
        let mut attempt = 1;
        loop {
            match self.i2c.write(self.address, &frame) {
                Ok(()) => return Ok(()),
                Err(e) if attempt < self.attempts => {
                    log::debug!(
                        "I2C write of {:#04x}/{:#04x} failed (attempt {}/{}): {:?}",
                        control,
                        value,
                        attempt,
                        self.attempts,
                        e
                    );
                    attempt += 1;
                }
                Err(e) => {
                    log::error!(
                        "I2C write of {:#04x}/{:#04x} failed after {} attempts: {:?}",
                        control,
                        value,
                        self.attempts,
                        e
                    );
                    return Err(DisplayError::BusWriteError);
                }
            }
        }
    }
}

/// Placeholder SPI interface.
///
/// The command/data framing over SPI needs a dedicated D/C line rather than
/// control-code prefixes, and that wiring is not defined by this crate yet.
/// The type exists so the init-time transport check has something to reject.
pub struct SpiInterface;

impl RegisterInterface for SpiInterface {
    fn kind(&self) -> TransportKind {
        TransportKind::Spi
    }

    fn write_register(&mut self, _control: u8, _value: u8) -> Result<(), DisplayError> {
        Err(DisplayError::DataFormatNotImplemented)
    }
}

/// Placeholder parallel-bus interface, see [`SpiInterface`].
pub struct ParallelInterface;

impl RegisterInterface for ParallelInterface {
    fn kind(&self) -> TransportKind {
        TransportKind::Parallel
    }

    fn write_register(&mut self, _control: u8, _value: u8) -> Result<(), DisplayError> {
        Err(DisplayError::DataFormatNotImplemented)
    }
}
