//! # Palette and Print-Model Commands
//!
//! Simple-color palettes, the palette stack, foreground color selection,
//! and the logical raster operation (ROP).

use super::commands::seq;
use super::cursor::StackOp;
use crate::tables;

/// # Push/Pop Palette (ESC * p # P)
///
/// Mirrors the cursor position stack: `Push` saves the active palette,
/// `Pop` restores the most recently saved one.
#[inline]
pub fn palette_stack(op: StackOp) -> Vec<u8> {
    seq("*p", op as i32, b'P')
}

/// # Simple Color (ESC * r # U)
///
/// Creates a fixed-size palette: 1 (K), -3 (CMY) or 3 (RGB). Entry names
/// for a given mode come from [`tables::palette_entry`].
#[inline]
pub fn simple_color(palette_size: i8) -> Vec<u8> {
    seq("*r", palette_size as i32, b'U')
}

/// # Foreground Color (ESC * v # S)
///
/// Selects a palette index as the foreground for subsequent marks.
#[inline]
pub fn foreground_color(index: u8) -> Vec<u8> {
    seq("*v", index as i32, b'S')
}

/// # Logical Operation (ESC * l # O)
///
/// Sets the ROP3 code combining source, texture and destination; see
/// [`tables::rop_description`] for the common codes.
#[inline]
pub fn logical_operation(rop: u8) -> Vec<u8> {
    seq("*l", rop as i32, b'O')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_stack() {
        assert_eq!(palette_stack(StackOp::Push), b"\x1b*p0P".to_vec());
        assert_eq!(palette_stack(StackOp::Pop), b"\x1b*p1P".to_vec());
    }

    #[test]
    fn test_simple_color_cmy() {
        assert_eq!(simple_color(-3), b"\x1b*r-3U".to_vec());
        assert_eq!(simple_color(3), b"\x1b*r3U".to_vec());
    }

    #[test]
    fn test_foreground() {
        assert_eq!(foreground_color(2), b"\x1b*v2S".to_vec());
    }

    #[test]
    fn test_rop() {
        assert_eq!(logical_operation(252), b"\x1b*l252O".to_vec());
        assert_eq!(tables::rop_description(204), "S (source opaque, default)");
    }
}
