//! # Macro Commands
//!
//! PCL macros record a stretch of the stream under a numeric ID for later
//! replay: overlays, repeated page furniture, letterheads.
//!
//! ## Workflow
//!
//! ```text
//! ESC & f # Y          macro ID
//! ESC & f 0 X          start definition
//! ... any PCL ...      recorded, not executed
//! ESC & f 1 X          stop definition
//! ESC & f # y 2 X      execute macro # once
//! ```

use super::commands::{ESC, seq};

/// Macro Control operations (ESC & f # X), fixed numeric suffixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum MacroOp {
    StartDefinition = 0,
    StopDefinition = 1,
    Execute = 2,
    Call = 3,
    EnableOverlay = 4,
    DisableOverlay = 5,
    DeleteAll = 6,
    DeleteAllTemporary = 7,
    /// Delete the macro with the current macro ID
    Delete = 8,
    MakeTemporary = 9,
    MakePermanent = 10,
}

/// Macro ID sequence (ESC & f # Y).
#[inline]
pub fn macro_id(id: u16) -> Vec<u8> {
    seq("&f", id as i32, b'Y')
}

/// Macro Control sequence (ESC & f # X).
#[inline]
pub fn macro_control(op: MacroOp) -> Vec<u8> {
    seq("&f", op as i32, b'X')
}

/// Begin defining macro `id`: ID sequence plus start-definition control.
pub fn macro_start(id: u16) -> Vec<u8> {
    let mut cmd = macro_id(id);
    cmd.extend(macro_control(MacroOp::StartDefinition));
    cmd
}

/// End the open macro definition.
///
/// Deliberately takes no ID: only the currently-open definition can be
/// closed, so the device ignores any ID here and this builder never
/// emits one.
#[inline]
pub fn macro_stop() -> Vec<u8> {
    macro_control(MacroOp::StopDefinition)
}

/// Execute macro `id` once, as a combined sequence (ESC & f # y 2 X).
pub fn macro_execute(id: u16) -> Vec<u8> {
    combined(id, MacroOp::Execute)
}

/// Call macro `id` (like execute, but the modified-print environment is
/// saved and restored around the replay).
pub fn macro_call(id: u16) -> Vec<u8> {
    combined(id, MacroOp::Call)
}

/// Enable macro `id` for automatic overlay on each page.
pub fn macro_overlay(id: u16) -> Vec<u8> {
    combined(id, MacroOp::EnableOverlay)
}

/// Make macro `id` permanent (survives printer reset).
pub fn macro_make_permanent(id: u16) -> Vec<u8> {
    combined(id, MacroOp::MakePermanent)
}

/// Delete macro `id`.
pub fn macro_delete(id: u16) -> Vec<u8> {
    combined(id, MacroOp::Delete)
}

/// `ESC & f # y # X`: ID and control op sharing one escape prefix.
fn combined(id: u16, op: MacroOp) -> Vec<u8> {
    let mut cmd = vec![ESC];
    cmd.extend_from_slice(b"&f");
    cmd.extend_from_slice(id.to_string().as_bytes());
    cmd.push(b'y');
    cmd.extend_from_slice((op as u8).to_string().as_bytes());
    cmd.push(b'X');
    cmd
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_macro_id() {
        assert_eq!(macro_id(5), b"\x1b&f5Y".to_vec());
    }

    #[test]
    fn test_macro_start() {
        assert_eq!(macro_start(5), b"\x1b&f5Y\x1b&f0X".to_vec());
    }

    #[test]
    fn test_macro_stop_has_no_id() {
        assert_eq!(macro_stop(), b"\x1b&f1X".to_vec());
    }

    #[test]
    fn test_macro_execute_combined() {
        assert_eq!(macro_execute(5), b"\x1b&f5y2X".to_vec());
        assert_eq!(macro_call(12), b"\x1b&f12y3X".to_vec());
        assert_eq!(macro_overlay(1), b"\x1b&f1y4X".to_vec());
    }

    #[test]
    fn test_macro_lifecycle_codes() {
        assert_eq!(macro_make_permanent(7), b"\x1b&f7y10X".to_vec());
        assert_eq!(macro_delete(7), b"\x1b&f7y8X".to_vec());
    }
}
