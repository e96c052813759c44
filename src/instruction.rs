/// ST7735S instructions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Instruction {
    NOP = 0x00,
    /// Software Reset
    SWRESET = 0x01,
    /// Read Display ID
    RDDID = 0x04,
    /// Read Display Status
    RDDST = 0x09,
    /// Read Display Power Mode
    RDDPM = 0x0A,
    /// Read Display MADCTL
    RDDMADCTL = 0x0B,
    /// Read Display Image Mode
    RDDIM = 0x0D,
    /// Read Display Signal Mode
    RDDSM = 0x0E,
    /// Read Display Self-Diagnostic Result
    RDDSDR = 0x0F,
    /// Sleep In
    SLPIN = 0x10,
    /// Sleep Out
    SLPOUT = 0x11,
    /// Partial Display Mode On
    PTLON = 0x12,
    /// Normal Display Mode On
    NORON = 0x13,
    /// Display Inversion Off
    INVOFF = 0x20,
    /// Display Inversion On
    INVON = 0x21,
    /// Gamma Set
    GAMSET = 0x26,
    /// Display Off
    DISPOFF = 0x28,
    /// Display On
    DISPON = 0x29,
    /// Column Address Set
    CASET = 0x2A,
    /// Row Address Set
    RASET = 0x2B,
    /// Memory Write
    RAMWR = 0x2C,
    /// Colour Setting for 4k, 65k and 262k colours
    RGBSET = 0x2D,
    /// Memory Read
    RAMRD = 0x2E,
    /// Partial Area
    PTLAR = 0x30,
    /// Scroll Area Set
    SCRLAR = 0x33,
    /// Tearing Effect Line Off
    TEOFF = 0x34,
    /// Tearing Effect Line On
    TEON = 0x35,
    /// Memory Data Access Control
    MADCTL = 0x36,
    /// Scroll Start Address of RAM
    VSCSAD = 0x37,
    /// Idle Mode Off
    IDMOFF = 0x38,
    /// Idle Mode On
    IDMON = 0x39,
    /// Interface Pixel Format
    COLMOD = 0x3A,
    /// Frame Rate Control (normal mode / full colours)
    FRMCTR1 = 0xB1,
    /// Frame Rate Control (idle mode / 8-colours)
    FRMCTR2 = 0xB2,
    /// Frame Rate Control (partial mode / full colours)
    FRMCTR3 = 0xB3,
    /// Display Inversion Control
    INVCTR = 0xB4,
    /// Power Control 1
    PWCTR1 = 0xC0,
    /// Power Control 2
    PWCTR2 = 0xC1,
    /// Power Control 3 (normal mode)
    PWCTR3 = 0xC2,
    /// Power Control 4 (idle mode)
    PWCTR4 = 0xC3,
    /// Power Control 5 (partial mode)
    PWCTR5 = 0xC4,
    /// VCOM Control 1
    VMCTR1 = 0xC5,
    /// VCOM Offset Control
    VMOFCTR = 0xC7,
    /// Write ID2 Value
    WRID2 = 0xD1,
    /// Write ID3 Value
    WRID3 = 0xD2,
    /// NVM Control Status
    NVFCTR1 = 0xD9,
    /// Read ID1
    RDID1 = 0xDA,
    /// Read ID2
    RDID2 = 0xDB,
    /// Read ID3
    RDID3 = 0xDC,
    /// NVM Read Command
    NVFCTR2 = 0xDE,
    /// NVM Write Command
    NVFCTR3 = 0xDF,
    /// Gamma Adjustment (positive polarity)
    GMCTRP1 = 0xE0,
    /// Gamma Adjustment (negative polarity)
    GMCTRN1 = 0xE1,
    /// Gate Pump Clock Frequency Variable
    GCV = 0xFC,
}
