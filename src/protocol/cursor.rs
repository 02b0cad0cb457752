//! # Cursor Positioning Commands
//!
//! Absolute and relative cursor moves in PCL Units, the position stack,
//! and print direction.
//!
//! ## Sign Convention
//!
//! Absolute moves render values with plain decimal formatting. Relative
//! moves use explicit-relative notation: a leading `+` for positive
//! deltas, the numeral's own `-` for negative ones. The sign is what
//! tells the device the move is relative, so it is mandatory.
//!
//! ```text
//! ESC * p 6 0 0 X      absolute: x = 600
//! ESC * p + 6 0 0 X    relative: x += 600
//! ESC * p - 6 0 0 X    relative: x -= 600
//! ```
//!
//! A relative move of zero on one axis omits that axis's value entirely
//! rather than emitting `+0`.

use super::commands::{ESC, seq, seq_push, signed_value};

/// Position/palette stack operation, mapped to fixed numeric codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum StackOp {
    /// Store the current value on the stack
    Push = 0,
    /// Recall the most recently stored value
    Pop = 1,
}

/// # Absolute Cursor Move (ESC * p # x # Y)
///
/// Moves the cursor to `(x, y)` in PCL Units from the logical page origin,
/// as one combined sequence.
///
/// ## Example
///
/// ```
/// use pclforge::protocol::cursor;
///
/// assert_eq!(cursor::cursor_absolute(600, 1200), b"\x1b*p600x1200Y".to_vec());
/// ```
pub fn cursor_absolute(x: u32, y: u32) -> Vec<u8> {
    let mut cmd = seq("*p", x as i32, b'x');
    seq_push(&mut cmd, y as i32, b'Y');
    cmd
}

/// Absolute horizontal move only (ESC * p # X).
#[inline]
pub fn cursor_absolute_x(x: u32) -> Vec<u8> {
    seq("*p", x as i32, b'X')
}

/// Absolute vertical move only (ESC * p # Y).
#[inline]
pub fn cursor_absolute_y(y: u32) -> Vec<u8> {
    seq("*p", y as i32, b'Y')
}

/// # Relative Cursor Move (ESC * p ± # x ± # Y)
///
/// Moves the cursor by `(dx, dy)` PCL Units. Positive values render with
/// an explicit leading `+`. A zero delta on one axis omits that axis
/// entirely; if both deltas are zero, nothing is emitted.
///
/// ## Example
///
/// ```
/// use pclforge::protocol::cursor;
///
/// assert_eq!(cursor::cursor_relative(240, -60), b"\x1b*p+240x-60Y".to_vec());
/// assert_eq!(cursor::cursor_relative(0, 100), b"\x1b*p+100Y".to_vec());
/// assert_eq!(cursor::cursor_relative(0, 0), Vec::<u8>::new());
/// ```
pub fn cursor_relative(dx: i32, dy: i32) -> Vec<u8> {
    if dx == 0 && dy == 0 {
        return Vec::new();
    }

    let mut cmd = vec![ESC];
    cmd.extend_from_slice(b"*p");
    if dx != 0 {
        cmd.extend_from_slice(signed_value(dx).as_bytes());
        if dy != 0 {
            cmd.push(b'x');
        } else {
            cmd.push(b'X');
        }
    }
    if dy != 0 {
        cmd.extend_from_slice(signed_value(dy).as_bytes());
        cmd.push(b'Y');
    }
    cmd
}

/// # Push/Pop Cursor Position (ESC & f # S)
///
/// The device keeps a 20-deep position stack; `Push` stores the current
/// position, `Pop` restores the most recently stored one.
#[inline]
pub fn position_stack(op: StackOp) -> Vec<u8> {
    seq("&f", op as i32, b'S')
}

/// # Print Direction (ESC & a # P)
///
/// Rotates the print direction counter-clockwise in 90° steps (0, 90,
/// 180, 270) without moving the cursor.
#[inline]
pub fn print_direction(degrees: u16) -> Vec<u8> {
    seq("&a", degrees as i32, b'P')
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_combined() {
        assert_eq!(cursor_absolute(0, 0), b"\x1b*p0x0Y".to_vec());
        assert_eq!(cursor_absolute(600, 1200), b"\x1b*p600x1200Y".to_vec());
    }

    #[test]
    fn test_absolute_single_axis() {
        assert_eq!(cursor_absolute_x(300), b"\x1b*p300X".to_vec());
        assert_eq!(cursor_absolute_y(450), b"\x1b*p450Y".to_vec());
    }

    #[test]
    fn test_relative_explicit_plus() {
        assert_eq!(cursor_relative(240, 60), b"\x1b*p+240x+60Y".to_vec());
    }

    #[test]
    fn test_relative_negative() {
        assert_eq!(cursor_relative(-240, -60), b"\x1b*p-240x-60Y".to_vec());
    }

    #[test]
    fn test_relative_zero_axis_omitted() {
        // Zero on one axis drops that axis, not a "+0" parameter
        assert_eq!(cursor_relative(0, 100), b"\x1b*p+100Y".to_vec());
        assert_eq!(cursor_relative(100, 0), b"\x1b*p+100X".to_vec());
        assert_eq!(cursor_relative(0, -100), b"\x1b*p-100Y".to_vec());
    }

    #[test]
    fn test_relative_both_zero() {
        assert_eq!(cursor_relative(0, 0), Vec::<u8>::new());
    }

    #[test]
    fn test_position_stack() {
        assert_eq!(position_stack(StackOp::Push), b"\x1b&f0S".to_vec());
        assert_eq!(position_stack(StackOp::Pop), b"\x1b&f1S".to_vec());
    }

    #[test]
    fn test_print_direction() {
        assert_eq!(print_direction(90), b"\x1b&a90P".to_vec());
        assert_eq!(print_direction(0), b"\x1b&a0P".to_vec());
    }
}
