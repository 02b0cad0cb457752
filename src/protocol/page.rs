//! # Page Setup Commands
//!
//! Page geometry and paper handling: size, orientation, simplex/duplex,
//! paper source and type, margins, and the custom-size sequence pair.
//!
//! ## Custom Page Sizes
//!
//! PCL's custom-size sequences take decipoints (1/720 inch) while the rest
//! of this crate works in 600-units-per-inch device units. The conversion
//! is fixed:
//!
//! ```text
//! decipoints = round(units * 720 / 600)
//!
//! Example: 3600 units (6in) → 4320 decipoints
//! ```
//!
//! Receiving devices expect decipoint-resolution integers, so the scale
//! factor and rounding must not drift.

use super::commands::{UNITS_PER_INCH, seq, seq_push};
use crate::tables::{Orientation, PaperSize, PaperSource, PlexMode};

/// Convert device units (600 per inch) to decipoints (720 per inch),
/// rounding to the nearest integer.
#[inline]
pub fn units_to_decipoints(units: u32) -> u32 {
    ((units as u64 * 720 + (UNITS_PER_INCH as u64 / 2)) / UNITS_PER_INCH as u64) as u32
}

/// # Page Size (ESC & l # A)
///
/// Selects a logical page by its protocol ID and ejects any partial page.
///
/// | Format | Bytes |
/// |--------|-------|
/// | ASCII  | ESC & l # A |
/// | Hex    | 1B 26 6C # 41 |
///
/// For caller-defined dimensions use [`page_size_custom`] instead.
#[inline]
pub fn page_size(size: PaperSize) -> Vec<u8> {
    seq("&l", size.id() as i32, b'A')
}

/// # Custom Page Size (ESC & l 101 A + ESC & f # i # J)
///
/// Selects the custom page ID, then declares width and length in
/// decipoints converted from device units via [`units_to_decipoints`].
///
/// ## Example
///
/// ```
/// use pclforge::protocol::page;
///
/// // 6in × 9in at 600 units per inch
/// let cmd = page::page_size_custom(3600, 5400);
/// assert_eq!(cmd, b"\x1b&l101A\x1b&f4320i6480J".to_vec());
/// ```
pub fn page_size_custom(width_units: u32, length_units: u32) -> Vec<u8> {
    let mut cmd = seq("&l", PaperSize::Custom.id() as i32, b'A');
    cmd.extend(seq("&f", units_to_decipoints(width_units) as i32, b'i'));
    seq_push(&mut cmd, units_to_decipoints(length_units) as i32, b'J');
    cmd
}

/// # Orientation (ESC & l # O)
///
/// Sets logical page orientation. Resets margins and ejects any partial
/// page, so it belongs with the page-setup block at the top of a job.
#[inline]
pub fn orientation(o: Orientation) -> Vec<u8> {
    seq("&l", o as i32, b'O')
}

/// # Simplex/Duplex Print (ESC & l # S)
#[inline]
pub fn plex(mode: PlexMode) -> Vec<u8> {
    seq("&l", mode as i32, b'S')
}

/// # Paper Source (ESC & l # H)
#[inline]
pub fn paper_source(source: PaperSource) -> Vec<u8> {
    seq("&l", source as i32, b'H')
}

/// # Paper Type by Name (ESC & n # W)
///
/// Media select by string: count byte(s) cover one operation byte plus
/// the name; the name is copied verbatim after the sequence.
pub fn paper_type(name: &str) -> Vec<u8> {
    let mut cmd = seq("&n", (name.len() + 1) as i32, b'W');
    cmd.push(0); // operation: select by name
    cmd.extend_from_slice(name.as_bytes());
    cmd
}

// ============================================================================
// MARGINS
// ============================================================================

/// Top margin in lines (ESC & l # E).
#[inline]
pub fn top_margin(lines: u16) -> Vec<u8> {
    seq("&l", lines as i32, b'E')
}

/// Text length in lines (ESC & l # F).
#[inline]
pub fn text_length(lines: u16) -> Vec<u8> {
    seq("&l", lines as i32, b'F')
}

/// Left margin at a column (ESC & a # L).
#[inline]
pub fn left_margin(column: u16) -> Vec<u8> {
    seq("&a", column as i32, b'L')
}

/// Right margin at a column (ESC & a # M).
#[inline]
pub fn right_margin(column: u16) -> Vec<u8> {
    seq("&a", column as i32, b'M')
}

/// Clear side margins (ESC 9). A two-byte sequence with no value.
#[inline]
pub fn clear_side_margins() -> Vec<u8> {
    vec![super::commands::ESC, b'9']
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_units_to_decipoints_exact() {
        // 3600 units (6in) = 4320 decipoints
        assert_eq!(units_to_decipoints(3600), 4320);
        assert_eq!(units_to_decipoints(600), 720);
        assert_eq!(units_to_decipoints(0), 0);
    }

    #[test]
    fn test_units_to_decipoints_rounds() {
        // 1 unit = 1.2 decipoints, rounds to 1
        assert_eq!(units_to_decipoints(1), 1);
        // 2 units = 2.4 → 2; 3 units = 3.6 → 4
        assert_eq!(units_to_decipoints(2), 2);
        assert_eq!(units_to_decipoints(3), 4);
    }

    #[test]
    fn test_page_size_letter() {
        assert_eq!(page_size(PaperSize::Letter), b"\x1b&l2A".to_vec());
        assert_eq!(page_size(PaperSize::A4), b"\x1b&l26A".to_vec());
    }

    #[test]
    fn test_page_size_custom() {
        let cmd = page_size_custom(3600, 3600);
        assert_eq!(cmd, b"\x1b&l101A\x1b&f4320i4320J".to_vec());
    }

    #[test]
    fn test_orientation() {
        assert_eq!(orientation(Orientation::Portrait), b"\x1b&l0O".to_vec());
        assert_eq!(orientation(Orientation::Landscape), b"\x1b&l1O".to_vec());
    }

    #[test]
    fn test_plex() {
        assert_eq!(plex(PlexMode::Simplex), b"\x1b&l0S".to_vec());
        assert_eq!(plex(PlexMode::DuplexLongEdge), b"\x1b&l1S".to_vec());
    }

    #[test]
    fn test_paper_type_length() {
        let cmd = paper_type("Plain");
        // Declared count covers operation byte + name
        assert_eq!(cmd, b"\x1b&n6W\x00Plain".to_vec());
    }

    #[test]
    fn test_margins() {
        assert_eq!(top_margin(3), b"\x1b&l3E".to_vec());
        assert_eq!(left_margin(10), b"\x1b&a10L".to_vec());
    }
}
