//! 16-bit colour packing and the controller's pixel format codes.

use num_derive::FromPrimitive;
use num_traits::FromPrimitive;

/// A 5-6-5 RGB colour, packed into 16 bits the way the controller's frame
/// memory stores it: red in bits 11-15, green in bits 5-10, blue in bits 0-4.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Colour16(u16);

impl Colour16 {
    pub const BLACK: Colour16 = Colour16::new(0, 0, 0);
    pub const WHITE: Colour16 = Colour16::new(31, 63, 31);

    /// Packs the three channel values. Each channel is truncated to its bit
    /// width (red/blue 5 bits, green 6 bits); out-of-range values wrap rather
    /// than saturate.
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Colour16(
            ((red as u16 & 0x1F) << 11) | ((green as u16 & 0x3F) << 5) | (blue as u16 & 0x1F),
        )
    }

    /// Reconstructs a colour from its packed representation.
    pub const fn from_raw(raw: u16) -> Self {
        Colour16(raw)
    }

    /// The packed 16-bit value.
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Red channel, 0-31.
    pub const fn red(self) -> u8 {
        (self.0 >> 11) as u8 & 0x1F
    }

    /// Green channel, 0-63.
    pub const fn green(self) -> u8 {
        (self.0 >> 5) as u8 & 0x3F
    }

    /// Blue channel, 0-31.
    pub const fn blue(self) -> u8 {
        self.0 as u8 & 0x1F
    }

    /// The wire encoding of one pixel. The controller expects the high byte
    /// first, so green=63 encodes as `[0x07, 0xE0]`.
    pub const fn to_be_bytes(self) -> [u8; 2] {
        self.0.to_be_bytes()
    }
}

/// Pixel format codes accepted by the COLMOD instruction.
///
/// Only [`SixteenBit`](ColourMode::SixteenBit) is applied by the driver's
/// public surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromPrimitive)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ColourMode {
    /// 12-bit/pixel (RGB 4-4-4)
    TwelveBit = 3,
    /// 16-bit/pixel (RGB 5-6-5)
    SixteenBit = 5,
    /// 18-bit/pixel (RGB 6-6-6)
    EighteenBit = 6,
    /// Format not recognised by this driver
    Unknown = 7,
}

impl ColourMode {
    /// Decodes a raw COLMOD code; unrecognised codes map to
    /// [`Unknown`](ColourMode::Unknown).
    pub fn from_code(code: u8) -> Self {
        ColourMode::from_u8(code).unwrap_or(ColourMode::Unknown)
    }
}
