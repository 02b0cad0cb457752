//! # Protocol Lookup Tables
//!
//! Pure lookup collaborators consumed by the escape-sequence builders and
//! the CLI: paper geometry, paper handling codes, raster-operation (ROP)
//! descriptions, and simple-color palette names. Each lookup returns
//! primitive values (numeric ID, name, dimensions); nothing here touches
//! the wire format directly.
//!
//! ## Paper Sizes
//!
//! | Size | PCL ID | Portrait width × length (600 u/inch) |
//! |------|--------|--------------------------------------|
//! | Executive | 1 | 4350 × 6300 |
//! | Letter | 2 | 5100 × 6600 |
//! | Legal | 3 | 5100 × 8400 |
//! | A4 | 26 | 4960 × 7014 |
//! | Custom | 101 | caller supplied |

/// Logical paper size, mapped to the PCL Page Size command ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaperSize {
    Executive,
    Letter,
    Legal,
    Ledger,
    A5,
    A4,
    A3,
    Monarch,
    Com10,
    InternationalDL,
    InternationalC5,
    InternationalB5,
    /// Dimensions supplied per job via the custom-size sequence pair.
    Custom,
}

impl PaperSize {
    /// Protocol numeric ID for the Page Size command (ESC & l # A).
    pub fn id(self) -> u16 {
        match self {
            Self::Executive => 1,
            Self::Letter => 2,
            Self::Legal => 3,
            Self::Ledger => 6,
            Self::A5 => 25,
            Self::A4 => 26,
            Self::A3 => 27,
            Self::Monarch => 80,
            Self::Com10 => 81,
            Self::InternationalDL => 90,
            Self::InternationalC5 => 91,
            Self::InternationalB5 => 100,
            Self::Custom => 101,
        }
    }

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Executive => "Executive",
            Self::Letter => "Letter",
            Self::Legal => "Legal",
            Self::Ledger => "Ledger",
            Self::A5 => "A5",
            Self::A4 => "A4",
            Self::A3 => "A3",
            Self::Monarch => "Monarch",
            Self::Com10 => "Com-10",
            Self::InternationalDL => "International DL",
            Self::InternationalC5 => "International C5",
            Self::InternationalB5 => "International B5",
            Self::Custom => "Custom",
        }
    }

    /// Portrait width and length in device units (600 per inch).
    ///
    /// `Custom` has no fixed geometry and reports zero; callers supply
    /// dimensions to the custom-size sequence instead.
    pub fn portrait_units(self) -> (u32, u32) {
        match self {
            Self::Executive => (4350, 6300),
            Self::Letter => (5100, 6600),
            Self::Legal => (5100, 8400),
            Self::Ledger => (6600, 10200),
            Self::A5 => (3496, 4960),
            Self::A4 => (4960, 7014),
            Self::A3 => (7014, 9920),
            Self::Monarch => (2325, 4500),
            Self::Com10 => (2475, 5700),
            Self::InternationalDL => (2598, 5196),
            Self::InternationalC5 => (3826, 5414),
            Self::InternationalB5 => (4158, 5906),
            Self::Custom => (0, 0),
        }
    }
}

/// Page orientation for the Orientation command (ESC & l # O).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Orientation {
    Portrait = 0,
    Landscape = 1,
    ReversePortrait = 2,
    ReverseLandscape = 3,
}

/// Simplex/duplex binding for the Simplex/Duplex Print command (ESC & l # S).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum PlexMode {
    Simplex = 0,
    DuplexLongEdge = 1,
    DuplexShortEdge = 2,
}

/// Input tray for the Paper Source command (ESC & l # H).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum PaperSource {
    /// Print current page (no tray change)
    CurrentPage = 0,
    MainTray = 1,
    ManualFeed = 2,
    ManualEnvelope = 3,
    LowerTray = 4,
    OptionalSource = 5,
    EnvelopeFeeder = 6,
    AutoSelect = 7,
}

// ============================================================================
// RASTER OPERATIONS (ROPs)
// ============================================================================

/// Description of a ternary raster operation code.
///
/// PCL defines 256 ROP3 codes combining source (S), texture/pattern (T)
/// and destination (D). Only the handful in common use get a name; the
/// rest report as generic.
pub fn rop_description(code: u8) -> &'static str {
    match code {
        0 => "0 (black)",
        17 => "DTSon",
        51 => "Sn (source inverted)",
        68 => "SDna",
        85 => "Dn (destination inverted)",
        90 => "DTx (destination XOR texture)",
        102 => "DSx (destination XOR source)",
        136 => "DSa (destination AND source)",
        170 => "D (destination unchanged)",
        184 => "TSDTxax",
        204 => "S (source opaque, default)",
        238 => "DSo (destination OR source)",
        240 => "T (texture)",
        252 => "SDno",
        255 => "1 (white)",
        _ => "(uncommon ROP3 code)",
    }
}

// ============================================================================
// SIMPLE-COLOR PALETTES
// ============================================================================

/// Name of an index within a simple-color palette.
///
/// `palette_size` is the pixel-encoding mode passed to the Simple Color
/// command: 1 (K), -3 (CMY) or 3 (RGB). Out-of-range indexes report as
/// unknown rather than failing; the emitter never validates.
pub fn palette_entry(palette_size: i8, index: u8) -> &'static str {
    match (palette_size, index) {
        (1, 0) => "White",
        (1, 1) => "Black",
        (-3, 0) => "White",
        (-3, 1) => "Cyan",
        (-3, 2) => "Magenta",
        (-3, 3) => "Blue",
        (-3, 4) => "Yellow",
        (-3, 5) => "Green",
        (-3, 6) => "Red",
        (-3, 7) => "Black",
        (3, 0) => "Black",
        (3, 1) => "Red",
        (3, 2) => "Green",
        (3, 3) => "Yellow",
        (3, 4) => "Blue",
        (3, 5) => "Magenta",
        (3, 6) => "Cyan",
        (3, 7) => "White",
        _ => "(unknown palette entry)",
    }
}
