#![no_std]

//! This crate provides an ST7735S driver to connect to 128x160 TFT displays
//! over SPI.
//!
//! The driver owns its control lines (chip-selects, data/command select,
//! reset, backlight) exclusively and speaks the controller's command
//! protocol: every interaction is a one-byte opcode sent under command
//! framing, followed by optional parameter bytes under data framing, all
//! bracketed by the chip-select line. Pixel transfers go through a draw
//! window set with CASET/RASET before each RAMWR.
//!
//! Blocking transfers use [`embedded_hal::spi::SpiBus`]; the bulk pixel path
//! is also available as a non-blocking transfer via
//! [`embedded_hal_async::spi::SpiBus`], see
//! [`St7735s::send_pixel_data_async`].

#[cfg(test)]
extern crate std;

pub mod instruction;

mod colour;
mod geometry;
mod madctl;

pub use colour::{Colour16, ColourMode};
pub use geometry::{Point, Rect};
pub use madctl::{AddressMode, ColourFormat, HorizontalRefresh, MdacConfig, VerticalRefresh};

use crate::instruction::Instruction;

use core::future::Future;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;
use embedded_hal_async::spi::SpiBus as AsyncSpiBus;

/// Horizontal panel resolution in pixels.
pub const SCREEN_WIDTH: u16 = 128;

/// Vertical panel resolution in pixels.
pub const SCREEN_HEIGHT: u16 = 160;

/// The draw window covering the whole panel.
pub const FULL_SCREEN: Rect = Rect::new(
    Point::new(0, 0),
    Point::new(SCREEN_WIDTH as u8 - 1, SCREEN_HEIGHT as u8 - 1),
);

/// SPI clock applied during [`St7735s::init`], in hertz.
pub const DEFAULT_UPDATE_RATE: u32 = 8_000_000;

/// SPI transports that can retune their clock after construction.
///
/// `embedded-hal` has no portable frequency control, so the driver asks for
/// this alongside [`SpiBus`]. The new rate takes effect on the next transfer.
pub trait SpiClockControl {
    /// Sets the SPI clock frequency in hertz.
    fn set_frequency(&mut self, hz: u32);
}

/// Errors returned by driver operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<SpiE, PinE> {
    /// The SPI transport reported an error.
    Spi(SpiE),
    /// A control line could not be driven.
    Pin(PinE),
    /// A drawing operation was issued before [`St7735s::init`] completed.
    NotInitialised,
    /// A pixel payload's length disagrees with the addressed window.
    BufferSize { expected: usize, actual: usize },
}

/// Initialisation progress of the controller.
///
/// `Active` is terminal for normal operation; the intermediate states are
/// only ever observable from another context while [`St7735s::init`] is
/// suspended in one of its delays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    Uninitialised,
    HardwareResetting,
    SoftwareResetting,
    Configuring,
    Active,
}

/// ST7735S driver to connect to TFT displays.
///
/// Owns the SPI bus and five control lines: LCD chip-select, the
/// chip-select of the companion RAM sharing the bus (held deselected),
/// data/command select, reset and backlight. No two driver instances may
/// share a pin set; ownership of the handles enforces this.
///
/// All operations except [`init`](St7735s::init), [`hard_reset`](St7735s::hard_reset)
/// and [`sw_reset`](St7735s::sw_reset) require the controller to be
/// [`Active`](State::Active) and return [`Error::NotInitialised`] otherwise.
pub struct St7735s<SPI, CS, RC, DC, RST, BL> {
    /// SPI bus shared between command and data phases.
    spi: SPI,

    /// LCD chip-select pin, active low.
    cs: CS,

    /// Companion RAM chip-select pin, driven high to keep it off the bus.
    ram_cs: RC,

    /// Data/command select pin: low = command, high = parameter data.
    dc: DC,

    /// Reset pin, active low.
    rst: RST,

    /// Backlight pin. Driven as a plain digital line only.
    bl: BL,

    state: State,
}

impl<SPI, CS, RC, DC, RST, BL> St7735s<SPI, CS, RC, DC, RST, BL> {
    /// Creates a new driver instance from the SPI bus and control pins.
    ///
    /// No hardware is touched until [`init`](St7735s::init) is called.
    pub fn new(spi: SPI, cs: CS, ram_cs: RC, dc: DC, rst: RST, bl: BL) -> Self {
        St7735s {
            spi,
            cs,
            ram_cs,
            dc,
            rst,
            bl,
            state: State::Uninitialised,
        }
    }

    /// Current initialisation state.
    pub fn state(&self) -> State {
        self.state
    }

    /// Consumes the driver and hands back the SPI bus and pins.
    pub fn release(self) -> (SPI, CS, RC, DC, RST, BL) {
        (self.spi, self.cs, self.ram_cs, self.dc, self.rst, self.bl)
    }
}

impl<SPI, CS, RC, DC, RST, BL, PinE> St7735s<SPI, CS, RC, DC, RST, BL>
where
    SPI: SpiBus,
    CS: OutputPin<Error = PinE>,
    RC: OutputPin<Error = PinE>,
    DC: OutputPin<Error = PinE>,
    RST: OutputPin<Error = PinE>,
    BL: OutputPin<Error = PinE>,
{
    /// Pulses the reset line: high, 200 ms, low, 200 ms, high.
    ///
    /// The two 200 ms holds are a hard timing contract; the controller needs
    /// them to latch a clean reset pulse.
    pub fn hard_reset<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Error<SPI::Error, PinE>> {
        self.rst.set_high().map_err(Error::Pin)?;
        delay.delay_ms(200);
        self.rst.set_low().map_err(Error::Pin)?;
        delay.delay_ms(200);
        self.rst.set_high().map_err(Error::Pin)
    }

    /// Issues a software reset and waits the 150 ms the controller needs to
    /// warm up afterwards.
    pub fn sw_reset<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Error<SPI::Error, PinE>> {
        self.send_command(Instruction::SWRESET, &[])?;
        delay.delay_ms(150);
        Ok(())
    }

    /// Sets the draw window the next RAMWR data phase will fill.
    ///
    /// Emits CASET with `[0, x0, 0, x1]` and RASET with `[0, y0, 0, y1]`, in
    /// that order. The leading zeroes are the high byte of the 16-bit
    /// coordinates; the panel fits in 8 bits.
    pub fn set_draw_window(&mut self, window: Rect) -> Result<(), Error<SPI::Error, PinE>> {
        self.guard_active()?;
        self.send_command(
            Instruction::CASET,
            &[0, window.top_left.x, 0, window.bottom_right.x],
        )?;
        self.send_command(
            Instruction::RASET,
            &[0, window.top_left.y, 0, window.bottom_right.y],
        )
    }

    /// Fills the whole panel with one colour.
    ///
    /// Blocking: streams all `128 * 160` two-byte pixels as a single RAMWR
    /// data phase and only returns once the last byte has been transmitted.
    pub fn clear_screen(&mut self, colour: Colour16) -> Result<(), Error<SPI::Error, PinE>> {
        self.guard_active()?;
        self.fill_window(FULL_SCREEN, colour)
    }

    /// Writes raw pixel data into `window`, blocking.
    ///
    /// `data` must hold exactly two bytes per window pixel, high byte first.
    pub fn send_pixel_data(
        &mut self,
        window: Rect,
        data: &[u8],
    ) -> Result<(), Error<SPI::Error, PinE>> {
        self.guard_active()?;
        self.check_payload(window, data)?;
        self.set_draw_window(window)?;
        self.send_command(Instruction::RAMWR, data)
    }

    /// Turns the panel output on or off. No settle delay is required.
    pub fn set_display_enabled(&mut self, enabled: bool) -> Result<(), Error<SPI::Error, PinE>> {
        self.guard_active()?;
        if enabled {
            self.send_command(Instruction::DISPON, &[])
        } else {
            self.send_command(Instruction::DISPOFF, &[])
        }
    }

    /// Puts the controller into or out of sleep mode, then waits the 200 ms
    /// it needs to settle before accepting further commands.
    pub fn set_sleep<D: DelayNs>(
        &mut self,
        delay: &mut D,
        enabled: bool,
    ) -> Result<(), Error<SPI::Error, PinE>> {
        self.guard_active()?;
        if enabled {
            self.send_command(Instruction::SLPIN, &[])?;
        } else {
            self.send_command(Instruction::SLPOUT, &[])?;
        }
        delay.delay_ms(200);
        Ok(())
    }

    /// Selects the controller's pixel format.
    ///
    /// The driver configures [`ColourMode::SixteenBit`] during `init`; every
    /// pixel operation in this crate assumes that format.
    pub fn set_colour_mode(&mut self, mode: ColourMode) -> Result<(), Error<SPI::Error, PinE>> {
        self.guard_active()?;
        self.send_command(Instruction::COLMOD, &[mode as u8])
    }

    /// Reconfigures the memory data access control register.
    pub fn set_mdac_config(&mut self, config: MdacConfig) -> Result<(), Error<SPI::Error, PinE>> {
        self.guard_active()?;
        self.send_command(Instruction::MADCTL, &[config.to_byte()])
    }

    fn guard_active(&self) -> Result<(), Error<SPI::Error, PinE>> {
        if self.state == State::Active {
            Ok(())
        } else {
            Err(Error::NotInitialised)
        }
    }

    fn check_payload(&self, window: Rect, data: &[u8]) -> Result<(), Error<SPI::Error, PinE>> {
        let expected = window.pixel_count() * 2;
        if data.len() == expected {
            Ok(())
        } else {
            Err(Error::BufferSize {
                expected,
                actual: data.len(),
            })
        }
    }

    /// The universal command framing: chip-select low, opcode under command
    /// framing, parameters under data framing, deselect after both phases.
    /// The controller corrupts its state if this order is not kept.
    fn send_command(
        &mut self,
        op: Instruction,
        params: &[u8],
    ) -> Result<(), Error<SPI::Error, PinE>> {
        self.cs.set_low().map_err(Error::Pin)?;
        self.dc.set_low().map_err(Error::Pin)?;
        self.spi.write(&[op as u8]).map_err(Error::Spi)?;
        self.dc.set_high().map_err(Error::Pin)?;
        if !params.is_empty() {
            self.spi.write(params).map_err(Error::Spi)?;
        }
        self.cs.set_high().map_err(Error::Pin)
    }

    /// Opens a RAMWR data phase and leaves the bus selected so the caller
    /// can stream the payload.
    fn start_ram_write(&mut self) -> Result<(), Error<SPI::Error, PinE>> {
        self.cs.set_low().map_err(Error::Pin)?;
        self.dc.set_low().map_err(Error::Pin)?;
        self.spi.write(&[Instruction::RAMWR as u8]).map_err(Error::Spi)?;
        self.dc.set_high().map_err(Error::Pin)
    }

    fn fill_window(&mut self, window: Rect, colour: Colour16) -> Result<(), Error<SPI::Error, PinE>> {
        self.set_draw_window(window)?;
        self.start_ram_write()?;

        let mut chunk = [0u8; 64];
        for pair in chunk.chunks_exact_mut(2) {
            pair.copy_from_slice(&colour.to_be_bytes());
        }

        let mut remaining = window.pixel_count() * 2;
        while remaining > 0 {
            let n = remaining.min(chunk.len());
            self.spi.write(&chunk[..n]).map_err(Error::Spi)?;
            remaining -= n;
        }
        self.cs.set_high().map_err(Error::Pin)
    }
}

impl<SPI, CS, RC, DC, RST, BL, PinE> St7735s<SPI, CS, RC, DC, RST, BL>
where
    SPI: SpiBus + SpiClockControl,
    CS: OutputPin<Error = PinE>,
    RC: OutputPin<Error = PinE>,
    DC: OutputPin<Error = PinE>,
    RST: OutputPin<Error = PinE>,
    BL: OutputPin<Error = PinE>,
{
    /// Brings the controller up into its operating state.
    ///
    /// Runs, in order: transport bring-up at [`DEFAULT_UPDATE_RATE`],
    /// backlight on, hardware reset, software reset, pixel format (16-bit),
    /// memory access control (default scan order), sleep-out with its 200 ms
    /// stabilisation, display-on. Each step commits before the next begins.
    ///
    /// Calling `init` again once the controller is [`Active`](State::Active)
    /// is a no-op: the second call performs no GPIO or SPI traffic.
    pub fn init<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Error<SPI::Error, PinE>> {
        if self.state == State::Active {
            return Ok(());
        }

        // Transport bring-up: default clock, both chip-selects idle high.
        self.spi.set_frequency(DEFAULT_UPDATE_RATE);
        self.cs.set_high().map_err(Error::Pin)?;
        self.ram_cs.set_high().map_err(Error::Pin)?;

        // Backlight is a plain digital line on this module.
        self.bl.set_high().map_err(Error::Pin)?;

        self.state = State::HardwareResetting;
        self.hard_reset(delay)?;

        self.state = State::SoftwareResetting;
        self.sw_reset(delay)?;

        self.state = State::Configuring;
        self.send_command(Instruction::COLMOD, &[ColourMode::SixteenBit as u8])?;
        self.send_command(Instruction::MADCTL, &[MdacConfig::default().to_byte()])?;
        self.send_command(Instruction::SLPOUT, &[])?;
        delay.delay_ms(200);
        self.send_command(Instruction::DISPON, &[])?;

        self.state = State::Active;
        #[cfg(feature = "defmt")]
        defmt::debug!("st7735s: panel active");
        Ok(())
    }

    /// Reconfigures the SPI clock frequency. Takes effect on the next
    /// transfer.
    pub fn set_update_rate(&mut self, hz: u32) -> Result<(), Error<SPI::Error, PinE>> {
        self.guard_active()?;
        self.spi.set_frequency(hz);
        Ok(())
    }
}

impl<SPI, CS, RC, DC, RST, BL, PinE> St7735s<SPI, CS, RC, DC, RST, BL>
where
    SPI: SpiBus + AsyncSpiBus,
    CS: OutputPin<Error = PinE>,
    RC: OutputPin<Error = PinE>,
    DC: OutputPin<Error = PinE>,
    RST: OutputPin<Error = PinE>,
    BL: OutputPin<Error = PinE>,
{
    /// Writes raw pixel data into `window` without blocking on the data
    /// phase.
    ///
    /// The draw window and the RAMWR command phase are committed
    /// synchronously before this returns; the returned future performs the
    /// data phase over the async SPI bus and resolves exactly once, when the
    /// last byte has been transferred.
    ///
    /// The future mutably borrows the driver, so no further command can be
    /// issued until it has completed or been dropped; two interleaved data
    /// phases on the same bus cannot be expressed. Note the framing
    /// asymmetry with the blocking path: the driver does not re-raise
    /// chip-select when the transfer finishes. The bus is handed over to the
    /// completion path still selected, and the next synchronous command
    /// re-frames it.
    pub fn send_pixel_data_async<'d>(
        &'d mut self,
        window: Rect,
        data: &'d [u8],
    ) -> Result<
        impl Future<Output = Result<(), Error<SPI::Error, PinE>>> + 'd,
        Error<SPI::Error, PinE>,
    > {
        self.guard_active()?;
        self.check_payload(window, data)?;
        self.set_draw_window(window)?;
        self.start_ram_write()?;

        let spi = &mut self.spi;
        Ok(async move { AsyncSpiBus::write(spi, data).await.map_err(Error::Spi) })
    }
}

#[cfg(feature = "graphics")]
use embedded_graphics::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Point as EgPoint, Size},
    pixelcolor::{Rgb565, RgbColor},
    primitives::Rectangle,
    Pixel,
};

#[cfg(feature = "graphics")]
impl From<Rgb565> for Colour16 {
    fn from(colour: Rgb565) -> Self {
        Colour16::new(colour.r(), colour.g(), colour.b())
    }
}

#[cfg(feature = "graphics")]
impl<SPI, CS, RC, DC, RST, BL, PinE> DrawTarget for St7735s<SPI, CS, RC, DC, RST, BL>
where
    SPI: SpiBus,
    CS: OutputPin<Error = PinE>,
    RC: OutputPin<Error = PinE>,
    DC: OutputPin<Error = PinE>,
    RST: OutputPin<Error = PinE>,
    BL: OutputPin<Error = PinE>,
{
    type Error = Error<SPI::Error, PinE>;
    type Color = Rgb565;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Rgb565>>,
    {
        for Pixel(coord, colour) in pixels {
            // Only draw pixels that land on the panel.
            if coord.x >= 0
                && coord.y >= 0
                && coord.x < SCREEN_WIDTH as i32
                && coord.y < SCREEN_HEIGHT as i32
            {
                let p = Point::new(coord.x as u8, coord.y as u8);
                self.set_draw_window(Rect::new(p, p))?;
                self.send_command(Instruction::RAMWR, &Colour16::from(colour).to_be_bytes())?;
            }
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, colour: Rgb565) -> Result<(), Self::Error> {
        self.guard_active()?;
        let screen = Rectangle::new(
            EgPoint::zero(),
            Size::new(SCREEN_WIDTH as u32, SCREEN_HEIGHT as u32),
        );
        let area = area.intersection(&screen);
        let Some(corner) = area.bottom_right() else {
            return Ok(());
        };
        let window = Rect::new(
            Point::new(area.top_left.x as u8, area.top_left.y as u8),
            Point::new(corner.x as u8, corner.y as u8),
        );
        self.fill_window(window, colour.into())
    }

    fn clear(&mut self, colour: Rgb565) -> Result<(), Self::Error> {
        self.clear_screen(colour.into())
    }
}

#[cfg(feature = "graphics")]
impl<SPI, CS, RC, DC, RST, BL, PinE> OriginDimensions for St7735s<SPI, CS, RC, DC, RST, BL>
where
    SPI: SpiBus,
    CS: OutputPin<Error = PinE>,
    RC: OutputPin<Error = PinE>,
    DC: OutputPin<Error = PinE>,
    RST: OutputPin<Error = PinE>,
    BL: OutputPin<Error = PinE>,
{
    fn size(&self) -> Size {
        Size::new(SCREEN_WIDTH as u32, SCREEN_HEIGHT as u32)
    }
}
