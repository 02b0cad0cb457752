//! # Soft-Font Block Structures
//!
//! Field layouts for the fixed-format binary sub-structures inside a PCL
//! character definition block. All multi-byte fields are **big-endian**,
//! unlike the little-endian control conventions of most desktop formats.
//!
//! ## Block Layout
//!
//! ```text
//! offset 0      format byte      (4 = Raster, 10 = Intellifont, 15 = TrueType)
//! offset 1      continuation     (0 = first block, else continues previous char)
//! offset 2      descriptor size  (counted from this byte)
//! offset 3      class            (bitmap / compressed / contour / compound / TT)
//! offset 2+size format-specific sub-header, payload, optional trailer
//! ```

/// Character block format tag (block byte 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharFormat {
    Raster,
    Intellifont,
    TrueType,
    Unknown(u8),
}

impl CharFormat {
    pub fn from_byte(b: u8) -> Self {
        match b {
            4 => Self::Raster,
            10 => Self::Intellifont,
            15 => Self::TrueType,
            other => Self::Unknown(other),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Raster => "Raster",
            Self::Intellifont => "Intellifont",
            Self::TrueType => "TrueType",
            Self::Unknown(_) => "Unknown",
        }
    }

    /// Whether blocks of this format end with a reserved + checksum trailer.
    pub fn has_trailer(self) -> bool {
        matches!(self, Self::Intellifont | Self::TrueType)
    }
}

/// Character class (descriptor byte 1, meaningful on first blocks only).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Bitmap,
    BitmapCompressed,
    Contour,
    Compound,
    TrueType,
    Unknown(u8),
}

impl CharClass {
    pub fn from_byte(b: u8) -> Self {
        match b {
            1 => Self::Bitmap,
            2 => Self::BitmapCompressed,
            3 => Self::Contour,
            4 => Self::Compound,
            15 => Self::TrueType,
            other => Self::Unknown(other),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Bitmap => "Bitmap",
            Self::BitmapCompressed => "Bitmap (compressed)",
            Self::Contour => "Intellifont contour",
            Self::Compound => "Intellifont compound",
            Self::TrueType => "TrueType",
            Self::Unknown(_) => "Unknown",
        }
    }
}

#[inline]
pub(crate) fn read_u16(buf: &[u8], offset: usize) -> u16 {
    u16::from_be_bytes([buf[offset], buf[offset + 1]])
}

#[inline]
pub(crate) fn read_i16(buf: &[u8], offset: usize) -> i16 {
    i16::from_be_bytes([buf[offset], buf[offset + 1]])
}

// ============================================================================
// RASTER DESCRIPTOR (format 4)
// ============================================================================

/// Raster character descriptor.
///
/// | Offset | Field | Width |
/// |--------|-------|-------|
/// | 0 | descriptor size | 1 |
/// | 1 | class | 1 |
/// | 2 | orientation | 1 |
/// | 4-5 | left offset | 2, BE signed |
/// | 6-7 | top offset | 2, BE signed |
/// | 8-9 | width | 2, BE unsigned |
/// | 10-11 | height | 2, BE unsigned |
/// | 12-13 | delta X | 2, BE signed |
///
/// Delta X only exists when the descriptor is long enough to hold it;
/// truncated descriptors leave trailing fields at zero/absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RasterDescriptor {
    pub descriptor_size: u8,
    pub class: CharClass,
    pub orientation: u8,
    pub left_offset: i16,
    pub top_offset: i16,
    pub width: u16,
    pub height: u16,
    pub delta_x: Option<i16>,
}

impl RasterDescriptor {
    /// Parse from the descriptor region (starting at the size byte).
    /// `desc` holds exactly `descriptor_size` bytes.
    pub fn parse(desc: &[u8]) -> Self {
        Self {
            descriptor_size: desc[0],
            class: CharClass::from_byte(if desc.len() > 1 { desc[1] } else { 0 }),
            orientation: if desc.len() > 2 { desc[2] } else { 0 },
            left_offset: if desc.len() >= 6 { read_i16(desc, 4) } else { 0 },
            top_offset: if desc.len() >= 8 { read_i16(desc, 6) } else { 0 },
            width: if desc.len() >= 10 { read_u16(desc, 8) } else { 0 },
            height: if desc.len() >= 12 { read_u16(desc, 10) } else { 0 },
            delta_x: if desc.len() >= 14 {
                Some(read_i16(desc, 12))
            } else {
                None
            },
        }
    }

    /// Bytes per bitmap row: `ceil(width / 8)`.
    #[inline]
    pub fn row_bytes(&self) -> usize {
        self.width.div_ceil(8) as usize
    }

    /// Expected uncompressed payload size: `ceil(width/8) * height`.
    #[inline]
    pub fn expected_payload(&self) -> usize {
        self.row_bytes() * self.height as usize
    }
}

// ============================================================================
// INTELLIFONT SUB-HEADERS (format 10)
// ============================================================================

/// Intellifont contour sub-header length in bytes.
pub const CONTOUR_HEADER_LEN: usize = 10;

/// Intellifont simple-contour sub-header.
///
/// | Offset | Field |
/// |--------|-------|
/// | 0-1 | contour data size (BE unsigned, includes this header) |
/// | 2-3 | metric data offset |
/// | 4-5 | character data offset |
/// | 6-7 | contour tree offset |
/// | 8-9 | XY data offset |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContourHeader {
    pub contour_data_size: u16,
    pub metric_offset: i16,
    pub char_data_offset: i16,
    pub contour_tree_offset: i16,
    pub xy_data_offset: i16,
}

impl ContourHeader {
    pub fn parse(buf: &[u8]) -> Self {
        Self {
            contour_data_size: read_u16(buf, 0),
            metric_offset: read_i16(buf, 2),
            char_data_offset: read_i16(buf, 4),
            contour_tree_offset: read_i16(buf, 6),
            xy_data_offset: read_i16(buf, 8),
        }
    }

    /// Payload bytes following the sub-header.
    #[inline]
    pub fn payload_len(&self) -> usize {
        (self.contour_data_size as usize).saturating_sub(CONTOUR_HEADER_LEN)
    }
}

/// Intellifont compound sub-header length in bytes.
pub const COMPOUND_HEADER_LEN: usize = 4;

/// Intellifont compound-character sub-header: escapement, component
/// count, one reserved byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompoundHeader {
    pub escapement: i16,
    pub component_count: u8,
}

impl CompoundHeader {
    pub fn parse(buf: &[u8]) -> Self {
        Self {
            escapement: read_i16(buf, 0),
            component_count: buf[2],
        }
    }
}

// ============================================================================
// TRUETYPE SUB-HEADER (format 15)
// ============================================================================

/// TrueType sub-header length in bytes.
pub const TRUETYPE_HEADER_LEN: usize = 4;

/// TrueType glyph sub-header.
///
/// | Offset | Field |
/// |--------|-------|
/// | 0-1 | character data size (BE unsigned, includes this header) |
/// | 2-3 | glyph ID (BE signed) |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrueTypeHeader {
    pub char_data_size: u16,
    pub glyph_id: i16,
}

impl TrueTypeHeader {
    pub fn parse(buf: &[u8]) -> Self {
        Self {
            char_data_size: read_u16(buf, 0),
            glyph_id: read_i16(buf, 2),
        }
    }

    /// Payload bytes following the sub-header.
    #[inline]
    pub fn payload_len(&self) -> usize {
        (self.char_data_size as usize).saturating_sub(TRUETYPE_HEADER_LEN)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_tags() {
        assert_eq!(CharFormat::from_byte(4), CharFormat::Raster);
        assert_eq!(CharFormat::from_byte(10), CharFormat::Intellifont);
        assert_eq!(CharFormat::from_byte(15), CharFormat::TrueType);
        assert_eq!(CharFormat::from_byte(7), CharFormat::Unknown(7));
    }

    #[test]
    fn test_trailer_presence() {
        assert!(!CharFormat::Raster.has_trailer());
        assert!(CharFormat::Intellifont.has_trailer());
        assert!(CharFormat::TrueType.has_trailer());
    }

    #[test]
    fn test_raster_descriptor_full() {
        let desc = [
            14, 1, 0, 0, // size, class, orientation, reserved
            0xFF, 0xFE, // left = -2
            0x00, 0x03, // top = 3
            0x00, 0x10, // width = 16
            0x00, 0x20, // height = 32
            0x01, 0x2C, // delta X = 300
        ];
        let d = RasterDescriptor::parse(&desc);
        assert_eq!(d.class, CharClass::Bitmap);
        assert_eq!(d.left_offset, -2);
        assert_eq!(d.top_offset, 3);
        assert_eq!(d.width, 16);
        assert_eq!(d.height, 32);
        assert_eq!(d.delta_x, Some(300));
        assert_eq!(d.row_bytes(), 2);
        assert_eq!(d.expected_payload(), 64);
    }

    #[test]
    fn test_raster_descriptor_truncated() {
        // 12-byte descriptor: no delta X field
        let desc = [12, 2, 1, 0, 0, 0, 0, 0, 0, 9, 0, 4];
        let d = RasterDescriptor::parse(&desc);
        assert_eq!(d.class, CharClass::BitmapCompressed);
        assert_eq!(d.width, 9);
        assert_eq!(d.height, 4);
        assert_eq!(d.delta_x, None);
        assert_eq!(d.row_bytes(), 2); // ceil(9/8)
    }

    #[test]
    fn test_contour_header() {
        let buf = [0x00, 0x40, 0, 10, 0, 20, 0, 30, 0, 40];
        let h = ContourHeader::parse(&buf);
        assert_eq!(h.contour_data_size, 64);
        assert_eq!(h.metric_offset, 10);
        assert_eq!(h.xy_data_offset, 40);
        assert_eq!(h.payload_len(), 54);
    }

    #[test]
    fn test_truetype_header() {
        let buf = [0x00, 0x14, 0x00, 0x41];
        let h = TrueTypeHeader::parse(&buf);
        assert_eq!(h.char_data_size, 20);
        assert_eq!(h.glyph_id, 65);
        assert_eq!(h.payload_len(), 16);
    }
}
