//! Device state manager.
//!
//! Owns the register interface and the framebuffer, drives the controller
//! through its documented bring-up sequence and exposes the ongoing mode
//! toggles. Drawing calls only mutate the in-memory framebuffer; nothing
//! reaches the panel until [`Ssd1306::flush`].

pub use display_interface::DisplayError;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::cmd::Cmd;
use crate::color::Color;
use crate::error::{ConfigError, OutOfBounds};
use crate::flag::Flag;
use crate::framebuffer::Framebuffer;
use crate::interface::RegisterInterface;
use crate::variant::{DisplayConfig, Product, VariantProfile};

/// SSD1306 display driver.
///
/// Generic over `DI`, a [`RegisterInterface`]. One value owns one bus address
/// on one transport; callers needing shared access must serialize it
/// themselves, the driver holds no lock.
pub struct Ssd1306<DI> {
    interface: DI,
    product: Product,
    profile: &'static VariantProfile,
    framebuffer: Framebuffer,
}

impl<DI> Ssd1306<DI>
where
    DI: RegisterInterface,
{
    /// Resolve the product variant and bind the interface to it.
    ///
    /// Fails fast on an unknown product code or a transport mismatch, before
    /// any bus traffic; nothing is partially configured on error. The device
    /// is not usable until [`Ssd1306::init`] has run.
    pub fn new(mut interface: DI, config: DisplayConfig) -> Result<Self, ConfigError> {
        let profile = config
            .product
            .profile()
            .ok_or(ConfigError::UnknownProduct(config.product.code()))?;

        if interface.kind() != profile.transport {
            return Err(ConfigError::TransportMismatch {
                expected: profile.transport,
                found: interface.kind(),
            });
        }

        interface.set_address(profile.address);

        Ok(Ssd1306 {
            interface,
            product: config.product,
            profile,
            framebuffer: Framebuffer::new(profile.width, profile.height),
        })
    }

    /// The product this device was configured for.
    pub fn product(&self) -> Product {
        self.product
    }

    /// Active width in pixels.
    pub fn width(&self) -> u8 {
        self.framebuffer.width()
    }

    /// Active height in pixels.
    pub fn height(&self) -> u8 {
        self.framebuffer.height()
    }

    /// Read-only view of the framebuffer.
    pub fn framebuffer(&self) -> &Framebuffer {
        &self.framebuffer
    }

    /// Pulse the reset line, then run the init command sequence.
    ///
    /// Use this when the module's RES pin is wired to a GPIO; otherwise call
    /// [`Ssd1306::init`] directly.
    pub fn init_with_reset<RST, D>(
        &mut self,
        rst: &mut RST,
        delay: &mut D,
    ) -> Result<(), DisplayError>
    where
        RST: OutputPin,
        D: DelayNs,
    {
        self.reset(rst, delay)?;
        self.init(delay)
    }

    /// Run the power-on command sequence and leave the panel displaying.
    ///
    /// The sequence is strict: display off, multiplex ratio, display offset,
    /// start line, horizontal addressing, the variant-specific segment/COM
    /// block, charge pump policy, default contrast, normal polarity, scroll
    /// deactivation, resume-to-RAM content, display on.
    pub fn init<D>(&mut self, delay: &mut D) -> Result<(), DisplayError>
    where
        D: DelayNs,
    {
        log::info!(
            "Initializing SSD1306 ({}x{}, product {:#06x})",
            self.width(),
            self.height(),
            self.product.code()
        );

        self.command(Cmd::DISPLAY_OFF)?;
        delay.delay_ms(10);

        self.command(Cmd::SET_MUX_RATIO)?;
        self.command(self.height() - 1)?;

        self.command(Cmd::SET_DISPLAY_OFFSET)?;
        self.command(0x00)?;
        self.command(Cmd::SET_DISPLAY_START_LINE | 0x00)?;

        self.command(Cmd::SET_ADDRESSING_MODE)?;
        self.command(Flag::ADDRESSING_HORIZONTAL)?;

        self.write_com_segment_block()?;

        self.command(Cmd::CHARGE_PUMP)?;
        self.command(if self.profile.charge_pump {
            Flag::CHARGE_PUMP_ENABLE
        } else {
            Flag::CHARGE_PUMP_DISABLE
        })?;

        self.command(Cmd::SET_CONTRAST)?;
        self.command(Flag::CONTRAST_DEFAULT)?;

        self.command(Cmd::DISPLAY_NORMAL)?;
        self.command(Cmd::DEACTIVATE_SCROLL)?;
        self.command(Cmd::DISPLAY_ALL_ON_RESUME)?;
        self.command(Cmd::DISPLAY_ON)?;

        log::debug!("Init sequence complete, panel active");
        Ok(())
    }

    /// Deterministic reset pulse: assert, 1 ms, deassert, 10 ms, re-assert.
    fn reset<RST, D>(&mut self, rst: &mut RST, delay: &mut D) -> Result<(), DisplayError>
    where
        RST: OutputPin,
        D: DelayNs,
    {
        rst.set_high().map_err(|_| DisplayError::RSError)?;
        delay.delay_ms(1);
        rst.set_low().map_err(|_| DisplayError::RSError)?;
        delay.delay_ms(10);
        rst.set_high().map_err(|_| DisplayError::RSError)
    }

    /// Emit the variant's segment/COM wiring commands as one ordered group.
    ///
    /// These parameters are coupled; a wrong combination mirrors or squeezes
    /// the image, so they are never emitted individually.
    fn write_com_segment_block(&mut self) -> Result<(), DisplayError> {
        let Some(block) = self.profile.com_segment else {
            // Variant works with the controller's reset wiring defaults.
            return Ok(());
        };

        self.command(if block.segment_remap_reversed {
            Cmd::SEGMENT_REMAP | Flag::SEGMENT_REMAP_REVERSED
        } else {
            Cmd::SEGMENT_REMAP | Flag::SEGMENT_REMAP_NORMAL
        })?;
        self.command(if block.com_scan_descending {
            Cmd::COM_SCAN_DIRECTION_DOWN
        } else {
            Cmd::COM_SCAN_DIRECTION_UP
        })?;
        self.command(Cmd::SET_COM_PINS)?;
        self.command(block.com_pins)?;

        if let Some(divider) = block.clock_divider {
            self.command(Cmd::SET_DISPLAY_CLOCK)?;
            self.command(divider)?;
        }
        if let Some(level) = block.deselect_level {
            self.command(Cmd::SET_DESELECT_LEVEL)?;
            self.command(level)?;
        }
        Ok(())
    }

    /// Set or clear one framebuffer pixel. No hardware side effect.
    pub fn set_pixel(&mut self, x: u8, y: u8, color: Color) -> Result<(), OutOfBounds> {
        self.framebuffer.set_pixel(x, y, color)
    }

    /// Read one framebuffer pixel back.
    pub fn pixel(&self, x: u8, y: u8) -> Option<Color> {
        self.framebuffer.pixel(x, y)
    }

    /// Zero the framebuffer. The panel keeps its content until the next
    /// [`Ssd1306::flush`].
    pub fn clear(&mut self) {
        self.framebuffer.clear();
    }

    /// Push the whole framebuffer to controller RAM.
    ///
    /// Sets the addressing window to the full page and column range, then
    /// streams every active byte in page-major order. There is no dirty-region
    /// tracking: each call costs `pages * columns` data writes. If a write
    /// fails after retries the rest of the transfer is abandoned and the
    /// error surfaced; the panel is then inconsistent with the model until a
    /// later flush succeeds.
    pub fn flush(&mut self) -> Result<(), DisplayError> {
        let columns = self.framebuffer.width();
        let pages = self.framebuffer.pages();

        self.command(Cmd::SET_COLUMN_ADDRESS)?;
        self.command(0x00)?;
        self.command(columns - 1)?;

        self.command(Cmd::SET_PAGE_ADDRESS)?;
        self.command(0x00)?;
        self.command(pages - 1)?;

        let Ssd1306 {
            interface,
            framebuffer,
            ..
        } = self;
        for &byte in framebuffer.as_bytes() {
            interface.write_data(byte)?;
        }

        log::debug!(
            "Flushed {} bytes ({} pages x {} columns)",
            framebuffer.as_bytes().len(),
            pages,
            columns
        );
        Ok(())
    }

    /// Set the contrast register. One round trip, no readback.
    pub fn set_contrast(&mut self, value: u8) -> Result<(), DisplayError> {
        self.command(Cmd::SET_CONTRAST)?;
        self.command(value)
    }

    /// Toggle pixel polarity on the panel without touching the framebuffer.
    pub fn set_invert(&mut self, inverted: bool) -> Result<(), DisplayError> {
        self.command(if inverted {
            Cmd::DISPLAY_INVERSE
        } else {
            Cmd::DISPLAY_NORMAL
        })
    }

    /// Turn the panel on or off.
    ///
    /// Framebuffer and addressing state survive an off/on cycle; the init
    /// sequence does not rerun.
    pub fn set_power(&mut self, on: bool) -> Result<(), DisplayError> {
        self.command(if on { Cmd::DISPLAY_ON } else { Cmd::DISPLAY_OFF })
    }

    /// Activate or deactivate the controller's built-in scroll.
    ///
    /// Scroll area and speed are whatever was last configured on the
    /// controller; this driver only flips the feature on and off.
    pub fn set_scroll(&mut self, scrolling: bool) -> Result<(), DisplayError> {
        self.command(if scrolling {
            Cmd::ACTIVATE_SCROLL
        } else {
            Cmd::DEACTIVATE_SCROLL
        })
    }

    /// Tear the driver apart again, releasing the interface.
    pub fn release(self) -> DI {
        self.interface
    }

    pub(crate) fn framebuffer_mut(&mut self) -> &mut Framebuffer {
        &mut self.framebuffer
    }

    fn command(&mut self, command: u8) -> Result<(), DisplayError> {
        self.interface.write_command(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interface::{I2cInterface, SpiInterface, CONTROL_COMMAND, CONTROL_DATA};
    use embedded_hal_mock::eh1::delay::NoopDelay;
    use embedded_hal_mock::eh1::digital::{
        Mock as PinMock, State as PinState, Transaction as PinTransaction,
    };
    use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};

    fn command_write(byte: u8) -> I2cTransaction {
        I2cTransaction::write(0x3C, vec![CONTROL_COMMAND, byte])
    }

    fn data_write(byte: u8) -> I2cTransaction {
        I2cTransaction::write(0x3C, vec![CONTROL_DATA, byte])
    }

    fn device(
        expectations: &[I2cTransaction],
        product: Product,
    ) -> Ssd1306<I2cInterface<I2cMock>> {
        Ssd1306::new(
            I2cInterface::new(I2cMock::new(expectations)),
            DisplayConfig::new(product),
        )
        .unwrap()
    }

    fn finish(dev: Ssd1306<I2cInterface<I2cMock>>) {
        dev.release().release().done();
    }

    /// The full expected init stream for the Adafruit 931 (128x32) module.
    fn adafruit_init_stream() -> Vec<I2cTransaction> {
        [
            Cmd::DISPLAY_OFF,
            Cmd::SET_MUX_RATIO,
            31,
            Cmd::SET_DISPLAY_OFFSET,
            0x00,
            Cmd::SET_DISPLAY_START_LINE,
            Cmd::SET_ADDRESSING_MODE,
            Flag::ADDRESSING_HORIZONTAL,
            // Variant block: remap reversed, COM scan down, sequential pins
            Cmd::SEGMENT_REMAP | 0x01,
            Cmd::COM_SCAN_DIRECTION_DOWN,
            Cmd::SET_COM_PINS,
            0x02,
            Cmd::CHARGE_PUMP,
            Flag::CHARGE_PUMP_ENABLE,
            Cmd::SET_CONTRAST,
            Flag::CONTRAST_DEFAULT,
            Cmd::DISPLAY_NORMAL,
            Cmd::DEACTIVATE_SCROLL,
            Cmd::DISPLAY_ALL_ON_RESUME,
            Cmd::DISPLAY_ON,
        ]
        .iter()
        .map(|&byte| command_write(byte))
        .collect()
    }

    #[test]
    fn unknown_product_fails_without_any_bus_traffic() {
        let mut bus = I2cMock::new(&[]);
        let result = Ssd1306::new(
            I2cInterface::new(bus.clone()),
            DisplayConfig::new(Product::from_code(0x7777)),
        );
        assert_eq!(
            result.err(),
            Some(ConfigError::UnknownProduct(0x7777)),
            "unknown product must fail fast"
        );
        bus.done();
    }

    #[test]
    fn transport_mismatch_is_rejected_at_construction() {
        let result = Ssd1306::new(SpiInterface, DisplayConfig::new(Product::ADAFRUIT_931));
        assert_eq!(
            result.err(),
            Some(ConfigError::TransportMismatch {
                expected: crate::interface::TransportKind::I2c,
                found: crate::interface::TransportKind::Spi,
            })
        );
    }

    #[test]
    fn init_emits_the_strict_adafruit_sequence() {
        let expectations = adafruit_init_stream();
        let mut dev = device(&expectations, Product::ADAFRUIT_931);
        dev.init(&mut NoopDelay).unwrap();
        finish(dev);
    }

    #[test]
    fn init_omits_the_variant_block_for_seeedstudio() {
        let expectations: Vec<I2cTransaction> = [
            Cmd::DISPLAY_OFF,
            Cmd::SET_MUX_RATIO,
            63,
            Cmd::SET_DISPLAY_OFFSET,
            0x00,
            Cmd::SET_DISPLAY_START_LINE,
            Cmd::SET_ADDRESSING_MODE,
            Flag::ADDRESSING_HORIZONTAL,
            // No variant block: reset wiring defaults apply
            Cmd::CHARGE_PUMP,
            Flag::CHARGE_PUMP_DISABLE,
            Cmd::SET_CONTRAST,
            Flag::CONTRAST_DEFAULT,
            Cmd::DISPLAY_NORMAL,
            Cmd::DEACTIVATE_SCROLL,
            Cmd::DISPLAY_ALL_ON_RESUME,
            Cmd::DISPLAY_ON,
        ]
        .iter()
        .map(|&byte| command_write(byte))
        .collect();

        let mut dev = device(&expectations, Product::SEEEDSTUDIO_OLED_1_1);
        dev.init(&mut NoopDelay).unwrap();
        finish(dev);
    }

    #[test]
    fn reset_pulse_orders_the_pin_transitions() {
        let mut rst = PinMock::new(&[
            PinTransaction::set(PinState::High),
            PinTransaction::set(PinState::Low),
            PinTransaction::set(PinState::High),
        ]);

        let expectations = adafruit_init_stream();
        let mut dev = device(&expectations, Product::ADAFRUIT_931);
        dev.init_with_reset(&mut rst, &mut NoopDelay).unwrap();
        finish(dev);
        rst.done();
    }

    #[test]
    fn set_contrast_is_exactly_two_command_writes() {
        let expectations = [command_write(Cmd::SET_CONTRAST), command_write(0x8F)];
        let mut dev = device(&expectations, Product::ADAFRUIT_931);
        dev.set_contrast(0x8F).unwrap();
        finish(dev);
    }

    #[test]
    fn set_power_twice_is_two_identical_writes() {
        let expectations = [
            command_write(Cmd::DISPLAY_ON),
            command_write(Cmd::DISPLAY_ON),
        ];
        let mut dev = device(&expectations, Product::ADAFRUIT_931);
        let before: Vec<u8> = dev.framebuffer().as_bytes().to_vec();
        dev.set_power(true).unwrap();
        dev.set_power(true).unwrap();
        assert_eq!(dev.framebuffer().as_bytes(), &before[..]);
        finish(dev);
    }

    #[test]
    fn invert_and_scroll_toggles_map_to_single_commands() {
        let expectations = [
            command_write(Cmd::DISPLAY_INVERSE),
            command_write(Cmd::DISPLAY_NORMAL),
            command_write(Cmd::ACTIVATE_SCROLL),
            command_write(Cmd::DEACTIVATE_SCROLL),
        ];
        let mut dev = device(&expectations, Product::ADAFRUIT_931);
        dev.set_invert(true).unwrap();
        dev.set_invert(false).unwrap();
        dev.set_scroll(true).unwrap();
        dev.set_scroll(false).unwrap();
        finish(dev);
    }

    #[test]
    fn clear_then_flush_streams_all_zero_pages() {
        // 128x32: window commands, then exactly 4 * 128 = 512 zero data bytes.
        let mut expectations = vec![
            command_write(Cmd::SET_COLUMN_ADDRESS),
            command_write(0x00),
            command_write(127),
            command_write(Cmd::SET_PAGE_ADDRESS),
            command_write(0x00),
            command_write(3),
        ];
        expectations.extend((0..512).map(|_| data_write(0x00)));

        let mut dev = device(&expectations, Product::ADAFRUIT_931);
        dev.set_pixel(12, 21, Color::On).unwrap();
        dev.clear();
        dev.flush().unwrap();
        finish(dev);
    }

    #[test]
    fn corner_pixels_land_in_first_and_last_streamed_bytes() {
        let mut expectations = vec![
            command_write(Cmd::SET_COLUMN_ADDRESS),
            command_write(0x00),
            command_write(127),
            command_write(Cmd::SET_PAGE_ADDRESS),
            command_write(0x00),
            command_write(3),
        ];
        expectations.push(data_write(0x01)); // byte 0: pixel (0, 0)
        expectations.extend((1..511).map(|_| data_write(0x00)));
        expectations.push(data_write(0x80)); // byte 511: pixel (127, 31)

        let mut dev = device(&expectations, Product::ADAFRUIT_931);
        dev.set_pixel(0, 0, Color::On).unwrap();
        dev.set_pixel(127, 31, Color::On).unwrap();
        dev.flush().unwrap();
        finish(dev);
    }

    #[test]
    fn flush_abandons_the_transfer_after_exhausted_retries() {
        use embedded_hal::i2c::ErrorKind;

        // Window commands succeed, the first data byte fails three times;
        // nothing further may be sent.
        let mut expectations = vec![
            command_write(Cmd::SET_COLUMN_ADDRESS),
            command_write(0x00),
            command_write(127),
            command_write(Cmd::SET_PAGE_ADDRESS),
            command_write(0x00),
            command_write(3),
        ];
        expectations.extend((0..3).map(|_| data_write(0x00).with_error(ErrorKind::Other)));

        let mut dev = device(&expectations, Product::ADAFRUIT_931);
        assert!(matches!(dev.flush(), Err(DisplayError::BusWriteError)));
        finish(dev);
    }
}
