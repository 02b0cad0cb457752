//! # Font, Symbol Set, Pattern and Text Commands
//!
//! Soft-font and symbol-set downloads, user pattern definition, font
//! selection, and text emission helpers.
//!
//! ## Download Shape
//!
//! Every download declares its binary length in the introducing sequence
//! and copies the payload verbatim:
//!
//! ```text
//! ESC * c # D          font ID
//! ESC ) s # W data     font header (descriptor)
//! ESC * c # E          character code
//! ESC ( s # W data     character definition block
//! ```
//!
//! The character definition blocks emitted here are the same byte format
//! the [`crate::softfont`] decoder consumes.

use super::commands::{ESC, seq};
use super::cursor::{StackOp, cursor_relative, position_stack, print_direction};

// ============================================================================
// FONT DOWNLOADS
// ============================================================================

/// Font ID (ESC * c # D). Applies to subsequent font downloads/controls.
#[inline]
pub fn font_id(id: u16) -> Vec<u8> {
    seq("*c", id as i32, b'D')
}

/// # Font Header Download (ESC ) s # W + data)
///
/// The font descriptor for the font under the current font ID. The
/// declared count is exactly `data.len()`.
pub fn font_header(data: &[u8]) -> Vec<u8> {
    let mut cmd = seq(")s", data.len() as i32, b'W');
    cmd.extend_from_slice(data);
    cmd
}

/// Character code (ESC * c # E) for the next character download.
#[inline]
pub fn char_code(code: u16) -> Vec<u8> {
    seq("*c", code as i32, b'E')
}

/// # Character Definition Download (ESC ( s # W + data)
///
/// One character definition block: format/continuation header, descriptor
/// and glyph data, copied byte-for-byte.
pub fn char_data(data: &[u8]) -> Vec<u8> {
    let mut cmd = seq("(s", data.len() as i32, b'W');
    cmd.extend_from_slice(data);
    cmd
}

/// Font Control operations (ESC * c # F).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum FontOp {
    DeleteAll = 0,
    DeleteAllTemporary = 1,
    /// Delete the font with the current font ID
    Delete = 2,
    MakeTemporary = 4,
    MakePermanent = 5,
}

/// Font Control sequence (ESC * c # F).
#[inline]
pub fn font_control(op: FontOp) -> Vec<u8> {
    seq("*c", op as i32, b'F')
}

// ============================================================================
// SYMBOL SETS
// ============================================================================

/// Symbol set ID code (ESC * c # R) for symbol-set downloads.
#[inline]
pub fn symbol_set_id(id: u16) -> Vec<u8> {
    seq("*c", id as i32, b'R')
}

/// Symbol set definition download (ESC ( f # W + data).
pub fn symbol_set_download(data: &[u8]) -> Vec<u8> {
    let mut cmd = seq("(f", data.len() as i32, b'W');
    cmd.extend_from_slice(data);
    cmd
}

/// Symbol Set Control operations (ESC * c # S).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum SymbolSetOp {
    DeleteAll = 0,
    DeleteAllTemporary = 1,
    Delete = 2,
    MakeTemporary = 4,
    MakePermanent = 5,
}

/// Symbol Set Control sequence (ESC * c # S).
#[inline]
pub fn symbol_set_control(op: SymbolSetOp) -> Vec<u8> {
    seq("*c", op as i32, b'S')
}

// ============================================================================
// FONT SELECTION
// ============================================================================

/// Select the primary font by its ID (ESC ( # X).
#[inline]
pub fn font_select_by_id(id: u16) -> Vec<u8> {
    seq("(", id as i32, b'X')
}

/// # Font Select by Characteristics
///
/// The classic primary-font select string: symbol set, spacing, pitch,
/// height, style, stroke weight and typeface as one combined sequence.
///
/// ```text
/// ESC ( 19U ESC ( s 0 p 10 h 12 v 0 s 0 b 4099 T
///       │          │    │    │    │   │   └ typeface (4099 = Courier)
///       │          │    │    │    │   └ stroke weight (-7..7)
///       │          │    │    │    └ style
///       │          │    │    └ height in points
///       │          │    └ pitch in characters per inch
///       │          └ spacing (0 = fixed, 1 = proportional)
///       └ symbol set (e.g. "8U" Roman-8, "19U" Windows Latin-1)
/// ```
pub fn font_select(
    symbol_set: &str,
    proportional: bool,
    pitch: u16,
    height_points: u16,
    style: u16,
    weight: i16,
    typeface: u16,
) -> Vec<u8> {
    let mut cmd = vec![ESC, b'('];
    cmd.extend_from_slice(symbol_set.as_bytes());
    cmd.push(ESC);
    cmd.extend_from_slice(b"(s");
    cmd.extend_from_slice(if proportional { b"1p" } else { b"0p" });
    cmd.extend_from_slice(pitch.to_string().as_bytes());
    cmd.push(b'h');
    cmd.extend_from_slice(height_points.to_string().as_bytes());
    cmd.push(b'v');
    cmd.extend_from_slice(style.to_string().as_bytes());
    cmd.push(b's');
    cmd.extend_from_slice(weight.to_string().as_bytes());
    cmd.push(b'b');
    cmd.extend_from_slice(typeface.to_string().as_bytes());
    cmd.push(b'T');
    cmd
}

// ============================================================================
// USER PATTERNS
// ============================================================================

/// Pattern ID (ESC * c # G).
#[inline]
pub fn pattern_id(id: u16) -> Vec<u8> {
    seq("*c", id as i32, b'G')
}

/// Pattern Control operations (ESC * c # Q).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum PatternOp {
    DeleteAll = 0,
    DeleteAllTemporary = 1,
    Delete = 2,
    MakeTemporary = 4,
    MakePermanent = 5,
}

/// Pattern Control sequence (ESC * c # Q).
#[inline]
pub fn pattern_control(op: PatternOp) -> Vec<u8> {
    seq("*c", op as i32, b'Q')
}

/// # User Pattern Definition (ESC * c # W + header + payload)
///
/// Downloads a user fill pattern under `id`. The declared count is
/// exactly `header.len() + payload.len()` and both slices follow the
/// sequence untransformed: the fixed-format header array first, then
/// the bitmap rows.
pub fn pattern_define(id: u16, header: &[u8], payload: &[u8]) -> Vec<u8> {
    let mut cmd = pattern_id(id);
    cmd.extend(seq("*c", (header.len() + payload.len()) as i32, b'W'));
    cmd.extend_from_slice(header);
    cmd.extend_from_slice(payload);
    cmd
}

// ============================================================================
// TEXT
// ============================================================================

/// Plain text: the bytes themselves, no control framing.
#[inline]
pub fn text(s: &str) -> Vec<u8> {
    s.as_bytes().to_vec()
}

/// Text at an absolute position.
pub fn text_at(x: u32, y: u32, s: &str) -> Vec<u8> {
    let mut cmd = super::cursor::cursor_absolute(x, y);
    cmd.extend_from_slice(s.as_bytes());
    cmd
}

/// # Spaced Text
///
/// Native PCL has no extra-letter-spacing parameter, so each glyph is
/// printed inside a push/pop pair (suppressing its natural advance) and
/// the cursor is advanced explicitly by `advance` PCL Units per glyph.
///
/// ## Example
///
/// ```
/// use pclforge::protocol::font;
///
/// let cmd = font::text_spaced(120, "AB");
/// assert_eq!(
///     cmd,
///     b"\x1b&f0SA\x1b&f1S\x1b*p+120X\x1b&f0SB\x1b&f1S\x1b*p+120X".to_vec()
/// );
/// ```
pub fn text_spaced(advance: i32, s: &str) -> Vec<u8> {
    let mut cmd = Vec::new();
    for ch in s.chars() {
        cmd.extend(position_stack(StackOp::Push));
        let mut buf = [0u8; 4];
        cmd.extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
        cmd.extend(position_stack(StackOp::Pop));
        cmd.extend(cursor_relative(advance, 0));
    }
    cmd
}

/// # Rotated Text
///
/// Wraps plain or spaced text with a print-direction set and reset.
/// `spacing = None` prints plain text; `Some(advance)` uses
/// [`text_spaced`].
pub fn text_rotated(degrees: u16, spacing: Option<i32>, s: &str) -> Vec<u8> {
    let mut cmd = print_direction(degrees);
    match spacing {
        Some(advance) => cmd.extend(text_spaced(advance, s)),
        None => cmd.extend_from_slice(s.as_bytes()),
    }
    cmd.extend(print_direction(0));
    cmd
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_id() {
        assert_eq!(font_id(101), b"\x1b*c101D".to_vec());
    }

    #[test]
    fn test_font_header_length() {
        let data = [0u8; 64];
        let cmd = font_header(&data);
        assert_eq!(&cmd[..6], b"\x1b)s64W");
        assert_eq!(cmd.len(), 6 + 64);
    }

    #[test]
    fn test_char_download_pair() {
        let mut cmd = char_code(65);
        cmd.extend(char_data(&[4, 0, 14, 1]));
        assert_eq!(cmd, b"\x1b*c65E\x1b(s4W\x04\x00\x0e\x01".to_vec());
    }

    #[test]
    fn test_font_select_string() {
        let cmd = font_select("19U", false, 10, 12, 0, 0, 4099);
        assert_eq!(cmd, b"\x1b(19U\x1b(s0p10h12v0s0b4099T".to_vec());
    }

    #[test]
    fn test_font_select_proportional() {
        let cmd = font_select("8U", true, 0, 14, 1, -3, 4101);
        assert_eq!(cmd, b"\x1b(8U\x1b(s1p0h14v1s-3b4101T".to_vec());
    }

    #[test]
    fn test_pattern_define_declared_length() {
        let header = [0u8, 0, 1, 0, 0, 16, 0, 16];
        let payload: Vec<u8> = (0..32).collect();
        let cmd = pattern_define(3, &header, &payload);

        let mut expected = b"\x1b*c3G\x1b*c40W".to_vec();
        expected.extend_from_slice(&header);
        expected.extend_from_slice(&payload);
        assert_eq!(cmd, expected);
    }

    #[test]
    fn test_pattern_payload_untransformed() {
        let header = [1u8, 2, 3];
        let payload = [0xFFu8, 0x00, 0xAA, 0x55];
        let cmd = pattern_define(1, &header, &payload);
        assert_eq!(&cmd[cmd.len() - 4..], &payload);
    }

    #[test]
    fn test_text_spaced_wraps_each_glyph() {
        let cmd = text_spaced(120, "Hi");
        let text = String::from_utf8_lossy(&cmd).to_string();
        // push, glyph, pop, advance, twice
        assert_eq!(text.matches("\x1b&f0S").count(), 2);
        assert_eq!(text.matches("\x1b&f1S").count(), 2);
        assert_eq!(text.matches("\x1b*p+120X").count(), 2);
    }

    #[test]
    fn test_text_rotated() {
        let cmd = text_rotated(90, None, "UP");
        assert_eq!(cmd, b"\x1b&a90PUP\x1b&a0P".to_vec());
    }

    #[test]
    fn test_symbol_set_download() {
        let cmd = symbol_set_download(&[1, 2, 3]);
        assert_eq!(cmd, b"\x1b(f3W\x01\x02\x03".to_vec());
    }
}
