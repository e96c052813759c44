//! Memory data access control (MADCTL) configuration.
//!
//! The controller packs the scan order, refresh direction and colour channel
//! order into a single parameter byte. The packing here is explicit shifts
//! and masks so the layout does not depend on how the host compiler lays out
//! bitfields.

/// The order the controller steps through frame memory when writing pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AddressMode {
    /// Left to right, top to bottom (normal).
    #[default]
    LtrTopToBottom = 0b000,
    /// Left to right, bottom to top (Y-invert).
    LtrBottomToTop = 0b001,
    /// Right to left, top to bottom (X-invert).
    RtlTopToBottom = 0b010,
    /// Right to left, bottom to top (X/Y-invert).
    RtlBottomToTop = 0b011,
    /// Top to bottom, from left to right (column mode).
    TtbLeftToRight = 0b100,
    /// Bottom to top, from left to right (column-Y-invert).
    BttLeftToRight = 0b101,
    /// Top to bottom, from right to left (column-X-invert).
    TtbRightToLeft = 0b110,
    /// Bottom to top, from right to left (column-X/Y-invert).
    BttRightToLeft = 0b111,
}

/// Vertical panel refresh direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum VerticalRefresh {
    #[default]
    TopToBottom = 0,
    BottomToTop = 1,
}

/// Horizontal panel refresh direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HorizontalRefresh {
    #[default]
    LeftToRight = 0,
    RightToLeft = 1,
}

/// Colour channel ordering in frame memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ColourFormat {
    #[default]
    Rgb = 0,
    Bgr = 1,
}

/// Memory data access control configuration.
///
/// The default (left-to-right/top-to-bottom scan, top-to-bottom and
/// left-to-right refresh, RGB order) packs to `0x00` and is the only
/// configuration the driver applies during initialisation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MdacConfig {
    pub address_mode: AddressMode,
    pub vertical_refresh: VerticalRefresh,
    pub colour_format: ColourFormat,
    pub horizontal_refresh: HorizontalRefresh,
}

impl MdacConfig {
    /// Packs the configuration into the MADCTL parameter byte: address mode
    /// in bits 0-2, vertical refresh in bit 3, colour format in bit 4,
    /// horizontal refresh in bit 5. Bits 6-7 are reserved and stay zero.
    pub fn to_byte(self) -> u8 {
        (self.address_mode as u8)
            | (self.vertical_refresh as u8) << 3
            | (self.colour_format as u8) << 4
            | (self.horizontal_refresh as u8) << 5
    }
}
