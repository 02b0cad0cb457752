//! # PCL Job Control Commands
//!
//! Core escape-sequence builders: job header/trailer, printer reset,
//! unit-of-measure, PJL framing, and HP-GL/2 mode switches.
//!
//! ## Escape Sequence Structure
//!
//! Every PCL command starts with ESC (0x1B) followed by ASCII
//! parameterized/group characters, a numeric value rendered as decimal
//! ASCII, and a terminating letter:
//!
//! ```text
//! ESC & u 6 0 0 D
//! 1B  26 75 36 30 30 44
//! └┬┘ └┬─┘ └──┬──┘ └┬┘
//!  │   │      │     └ terminator (uppercase = last in sequence)
//!  │   │      └ value, minimal decimal ASCII
//!  │   └ parameterized + group character
//!  └ escape
//! ```
//!
//! Numeric values never use binary encoding in the control portion;
//! binary payloads (font data, raster rows, patterns) follow the
//! introducing sequence byte-for-byte.
//!
//! ## Reference
//!
//! "PCL 5 Printer Language Technical Reference Manual", HP part 5961-0509.

/// ESC (Escape) - Command prefix byte
///
/// Every PCL escape sequence begins with ESC (0x1B). This byte signals
/// the start of a control sequence rather than printable text.
pub const ESC: u8 = 0x1B;

/// Device resolution assumed by job headers, in units per inch.
///
/// All coordinate parameters in this crate are expressed in these units
/// unless a command is documented in decipoints (1/720 inch).
pub const UNITS_PER_INCH: u32 = 600;

// ============================================================================
// SEQUENCE ASSEMBLY HELPERS
// ============================================================================

/// Build `ESC <prefix> <value> <terminator>`.
///
/// The value is rendered with standard integer formatting: minimal decimal
/// ASCII, no leading zeros, `-` for negatives only.
#[inline]
pub(crate) fn seq(prefix: &str, value: i32, terminator: u8) -> Vec<u8> {
    let mut cmd = vec![ESC];
    cmd.extend_from_slice(prefix.as_bytes());
    cmd.extend_from_slice(value.to_string().as_bytes());
    cmd.push(terminator);
    cmd
}

/// Append `<value> <terminator>` to an already-open combined sequence.
///
/// PCL allows several values to share one `ESC <prefix>` when the group
/// matches; each non-final value is terminated by the lowercase letter.
#[inline]
pub(crate) fn seq_push(cmd: &mut Vec<u8>, value: i32, terminator: u8) {
    cmd.extend_from_slice(value.to_string().as_bytes());
    cmd.push(terminator);
}

/// Render a value in explicit-relative notation: leading `+` iff positive.
///
/// Relative cursor moves require the sign so the device can tell them from
/// absolute moves sharing the same terminator.
#[inline]
pub(crate) fn signed_value(value: i32) -> String {
    if value > 0 {
        format!("+{}", value)
    } else {
        value.to_string()
    }
}

// ============================================================================
// JOB FRAMING
// ============================================================================

/// # Universal Exit Language (ESC %-12345X)
///
/// Exits the current printer language and returns control to PJL. Sent at
/// the very start and very end of every job.
///
/// | Format | Bytes |
/// |--------|-------|
/// | ASCII  | ESC % - 1 2 3 4 5 X |
/// | Hex    | 1B 25 2D 31 32 33 34 35 58 |
#[inline]
pub fn uel() -> Vec<u8> {
    let mut cmd = vec![ESC];
    cmd.extend_from_slice(b"%-12345X");
    cmd
}

/// A PJL command line: `@PJL <command> CR LF`.
///
/// PJL lines ride between the UEL and the language-entry statement.
pub fn pjl_command(command: &str) -> Vec<u8> {
    let mut cmd = Vec::with_capacity(7 + command.len());
    cmd.extend_from_slice(b"@PJL ");
    cmd.extend_from_slice(command.as_bytes());
    cmd.extend_from_slice(b"\r\n");
    cmd
}

/// PJL language-entry statement: `@PJL ENTER LANGUAGE = <lang> CR LF`.
pub fn pjl_enter_language(language: &str) -> Vec<u8> {
    pjl_command(&format!("ENTER LANGUAGE = {}", language))
}

/// # Printer Reset (ESC E)
///
/// Restores the user default environment, prints any partial page, and
/// deletes temporary fonts, macros and patterns.
#[inline]
pub fn reset() -> Vec<u8> {
    vec![ESC, b'E']
}

/// # Unit of Measure (ESC & u # D)
///
/// Sets the size of PCL Units used by cursor moves and rectangle
/// dimensions, in units per inch.
#[inline]
pub fn unit_of_measure(units_per_inch: u32) -> Vec<u8> {
    seq("&u", units_per_inch as i32, b'D')
}

/// # Standard Job Header
///
/// UEL, an optional extra PJL command line, PJL language entry, printer
/// reset, then unit-of-measure at [`UNITS_PER_INCH`].
///
/// ## Example
///
/// ```
/// use pclforge::protocol::commands;
///
/// let hdr = commands::job_header(None);
/// assert!(hdr.starts_with(&[0x1B, b'%', b'-']));
/// assert!(hdr.ends_with(&[0x1B, b'&', b'u', b'6', b'0', b'0', b'D']));
/// ```
pub fn job_header(pjl: Option<&str>) -> Vec<u8> {
    let mut cmd = uel();
    if let Some(line) = pjl {
        cmd.extend(pjl_command(line));
    }
    cmd.extend(pjl_enter_language("PCL"));
    cmd.extend(reset());
    cmd.extend(unit_of_measure(UNITS_PER_INCH));
    cmd
}

/// # Standard Job Trailer
///
/// Optionally deletes a macro left over from the job (overlay cleanup),
/// then printer reset, then UEL.
pub fn job_trailer(cleanup_macro: Option<u16>) -> Vec<u8> {
    let mut cmd = Vec::new();
    if let Some(id) = cleanup_macro {
        cmd.extend(super::macros::macro_id(id));
        cmd.extend(super::macros::macro_control(
            super::macros::MacroOp::Delete,
        ));
    }
    cmd.extend(reset());
    cmd.extend(uel());
    cmd
}

// ============================================================================
// HP-GL/2 MODE SWITCHES
// ============================================================================

/// # Enter HP-GL/2 Mode (ESC % # B)
///
/// Switches the stream from PCL to HP-GL/2 vector commands.
///
/// - `at_pcl_cursor = false` → value 0: pen at previous HP-GL/2 position
/// - `at_pcl_cursor = true`  → value 1: pen at the current PCL cursor
#[inline]
pub fn hpgl2_enter(at_pcl_cursor: bool) -> Vec<u8> {
    seq("%", if at_pcl_cursor { 1 } else { 0 }, b'B')
}

/// # Return to PCL Mode (ESC % # A)
///
/// - `at_pen_position = false` → value 0: cursor at previous PCL position
/// - `at_pen_position = true`  → value 1: cursor at the HP-GL/2 pen
#[inline]
pub fn hpgl2_exit(at_pen_position: bool) -> Vec<u8> {
    seq("%", if at_pen_position { 1 } else { 0 }, b'A')
}

// ============================================================================
// TESTS
// ============================================================================
