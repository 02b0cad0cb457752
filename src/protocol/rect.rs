//! # Rectangle Fill Commands
//!
//! Rectangular area fills: solid, shaded, cross-hatch and user-pattern
//! variants, plus a synthesized hollow outline.
//!
//! ## Command Shape
//!
//! Each primitive is "(optional position) + size + fill type":
//!
//! ```text
//! ESC * p # x # Y      cursor to top-left corner
//! ESC * c # a # B      width (a) and height (b) in PCL Units
//! ESC * c # G          shade depth or pattern ID (shaded/hatch/pattern only)
//! ESC * c # P          fill with the selected type
//! ```

use super::commands::{seq, seq_push};
use super::cursor::cursor_absolute;

/// Area fill type for the Fill Rectangular Area command (ESC * c # P).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum FillType {
    SolidBlack = 0,
    SolidWhite = 1,
    Shaded = 2,
    CrossHatch = 3,
    UserPattern = 4,
}

/// Rectangle size sequence (ESC * c # a # B), in PCL Units.
pub fn rect_size(width: u32, height: u32) -> Vec<u8> {
    let mut cmd = seq("*c", width as i32, b'a');
    seq_push(&mut cmd, height as i32, b'B');
    cmd
}

/// Fill-type sequence (ESC * c # P).
#[inline]
pub fn rect_fill(fill: FillType) -> Vec<u8> {
    seq("*c", fill as i32, b'P')
}

/// # Solid Rectangle
///
/// Positions the cursor, declares the size, and fills solid black or
/// white.
///
/// ## Example
///
/// ```
/// use pclforge::protocol::rect;
///
/// let cmd = rect::rect_solid(600, 600, 1200, 300, false);
/// assert_eq!(cmd, b"\x1b*p600x600Y\x1b*c1200a300B\x1b*c0P".to_vec());
/// ```
pub fn rect_solid(x: u32, y: u32, width: u32, height: u32, white: bool) -> Vec<u8> {
    let mut cmd = cursor_absolute(x, y);
    cmd.extend(rect_size(width, height));
    cmd.extend(rect_fill(if white {
        FillType::SolidWhite
    } else {
        FillType::SolidBlack
    }));
    cmd
}

/// # Shaded Rectangle
///
/// `depth` is the shading percentage (1-100); the device maps it to one
/// of eight internal shade levels.
pub fn rect_shaded(x: u32, y: u32, width: u32, height: u32, depth: u8) -> Vec<u8> {
    let mut cmd = cursor_absolute(x, y);
    cmd.extend(rect_size(width, height));
    cmd.extend(seq("*c", depth as i32, b'G'));
    cmd.extend(rect_fill(FillType::Shaded));
    cmd
}

/// # Cross-Hatch Rectangle
///
/// `pattern` selects one of the six built-in cross-hatch patterns (1-6).
pub fn rect_cross_hatch(x: u32, y: u32, width: u32, height: u32, pattern: u8) -> Vec<u8> {
    let mut cmd = cursor_absolute(x, y);
    cmd.extend(rect_size(width, height));
    cmd.extend(seq("*c", pattern as i32, b'G'));
    cmd.extend(rect_fill(FillType::CrossHatch));
    cmd
}

/// # User-Pattern Rectangle
///
/// Fills with a pattern previously downloaded under `pattern_id`
/// (see [`crate::protocol::font::pattern_define`]).
pub fn rect_user_pattern(x: u32, y: u32, width: u32, height: u32, pattern_id: u16) -> Vec<u8> {
    let mut cmd = cursor_absolute(x, y);
    cmd.extend(rect_size(width, height));
    cmd.extend(seq("*c", pattern_id as i32, b'G'));
    cmd.extend(rect_fill(FillType::UserPattern));
    cmd
}

/// # Outline Rectangle
///
/// PCL has no hollow-rectangle primitive, so the outline is synthesized
/// from four solid strips. The strips tile the border exactly: the outer
/// bounding box stays `width × height` for any stroke thickness.
///
/// ```text
/// ┌──────── width ────────┐
/// │ ███████ top ████████  │
/// │ ██ ┌──────────┐   ██  │ height
/// │ left            right │
/// │ ██ └──────────┘   ██  │
/// │ ███████ bottom ██████ │
/// └───────────────────────┘
/// ```
pub fn rect_outline(x: u32, y: u32, width: u32, height: u32, stroke: u32) -> Vec<u8> {
    let inner_h = height.saturating_sub(2 * stroke);

    let mut cmd = rect_solid(x, y, width, stroke, false);
    cmd.extend(rect_solid(x, y + stroke, stroke, inner_h, false));
    cmd.extend(rect_solid(
        x,
        y + height.saturating_sub(stroke),
        width,
        stroke,
        false,
    ));
    cmd.extend(rect_solid(
        x + width.saturating_sub(stroke),
        y + stroke,
        stroke,
        inner_h,
        false,
    ));
    cmd
}

// ============================================================================
// TESTS
// ============================================================================
