//! # Raster Graphics Commands
//!
//! Raster transfer: resolution, begin/end, compression mode, and per-row /
//! per-plane data transfer.
//!
//! ## Transfer Shape
//!
//! ```text
//! ESC * t # R          raster resolution (dots per inch)
//! ESC * r # s # T      source width (s) and height (t) in pixels
//! ESC * b # M          compression mode for following rows
//! ESC * r # A          start raster graphics
//! ESC * b # W data     one row (or compressed row) of bytes
//! ESC * r C            end raster graphics
//! ```
//!
//! Row data is copied byte-for-byte after its introducing sequence; any
//! compression happens before the bytes reach this module.

use super::commands::{ESC, seq, seq_push};

/// Row compression for the Set Compression Method command (ESC * b # M).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum CompressionMode {
    #[default]
    None = 0,
    RunLength = 1,
    Tiff = 2,
    DeltaRow = 3,
    Adaptive = 5,
}

/// Destination scaling for [`raster_begin_scaled`].
///
/// Source resolution comes from the image file when known (BMP headers
/// carry dots-per-meter); otherwise the conventional screen default of
/// 96 dpi applies.
#[derive(Debug, Clone, Copy)]
pub struct RasterScale {
    /// Source width in pixels
    pub src_width: u32,
    /// Source height in pixels
    pub src_height: u32,
    /// Source resolution in dots per meter; `None` or zero means unknown
    pub res_dots_per_meter: Option<u32>,
    /// Horizontal scale percentage (100 = unscaled)
    pub scale_x: u32,
    /// Vertical scale percentage (100 = unscaled)
    pub scale_y: u32,
}

/// Fallback source resolution when the image declares none, in dpi.
const DEFAULT_SRC_DPI: f64 = 96.0;

/// Inches per meter × 100, the BMP dots-per-meter conversion divisor.
const DOTS_PER_METER_PER_DPI: f64 = 39.37;

/// # Raster Resolution (ESC * t # R)
///
/// Device resolution for subsequent raster data: 75, 100, 150, 200, 300
/// or 600 dpi.
#[inline]
pub fn raster_resolution(dpi: u16) -> Vec<u8> {
    seq("*t", dpi as i32, b'R')
}

/// Source raster dimensions (ESC * r # s # T), in pixels.
pub fn raster_size(width: u32, height: u32) -> Vec<u8> {
    let mut cmd = seq("*r", width as i32, b's');
    seq_push(&mut cmd, height as i32, b'T');
    cmd
}

/// # Start Raster Graphics (ESC * r # A), unscaled
///
/// Declares the source dimensions, then starts raster graphics at the
/// left graphics margin (`at_cursor = false`) or the current cursor
/// X position (`at_cursor = true`). Scaling is off; one source pixel
/// maps to one device dot.
pub fn raster_begin(at_cursor: bool, width: u32, height: u32) -> Vec<u8> {
    let mut cmd = raster_size(width, height);
    cmd.extend(seq("*r", if at_cursor { 1 } else { 0 }, b'A'));
    cmd
}

/// # Start Raster Graphics, scaled
///
/// Computes the destination size in decipoints from the source pixel
/// dimensions, resolution and percentage factors:
///
/// ```text
/// src_dpi = res_dots_per_meter / 39.37      (96 when unknown or zero)
/// dest    = round(src_px * 720 / src_dpi) * scale / 100
/// ```
///
/// When both percentages are exactly 100 this degenerates to the logical
/// 1:1 start sequence; otherwise the destination decipoint pair
/// (ESC * t # h # V) is emitted and raster graphics start in scale mode
/// (values 2/3 instead of 0/1).
pub fn raster_begin_scaled(at_cursor: bool, scale: &RasterScale) -> Vec<u8> {
    let mut cmd = raster_size(scale.src_width, scale.src_height);

    if scale.scale_x == 100 && scale.scale_y == 100 {
        cmd.extend(seq("*r", if at_cursor { 1 } else { 0 }, b'A'));
        return cmd;
    }

    let src_dpi = match scale.res_dots_per_meter {
        Some(dpm) if dpm != 0 => dpm as f64 / DOTS_PER_METER_PER_DPI,
        _ => DEFAULT_SRC_DPI,
    };
    let dest_w = ((scale.src_width as f64 * 720.0 / src_dpi).round() as u64 * scale.scale_x as u64
        / 100) as u32;
    let dest_h = ((scale.src_height as f64 * 720.0 / src_dpi).round() as u64 * scale.scale_y as u64
        / 100) as u32;

    cmd.extend(seq("*t", dest_w as i32, b'h'));
    seq_push(&mut cmd, dest_h as i32, b'V');
    cmd.extend(seq("*r", if at_cursor { 3 } else { 2 }, b'A'));
    cmd
}

/// # End Raster Graphics (ESC * r C)
#[inline]
pub fn raster_end() -> Vec<u8> {
    vec![ESC, b'*', b'r', b'C']
}

/// # Set Compression Method (ESC * b # M)
#[inline]
pub fn raster_compression(mode: CompressionMode) -> Vec<u8> {
    seq("*b", mode as i32, b'M')
}

/// # Transfer Raster Row (ESC * b # W + data)
///
/// One row of raster bytes in the current compression mode. The declared
/// count is exactly `data.len()` and the bytes follow untransformed.
pub fn raster_row(data: &[u8]) -> Vec<u8> {
    let mut cmd = seq("*b", data.len() as i32, b'W');
    cmd.extend_from_slice(data);
    cmd
}

/// # Transfer Raster Plane (ESC * b # V + data)
///
/// Like [`raster_row`] but terminates with `V`: the row continues with
/// another color plane rather than advancing to the next row.
pub fn raster_plane(data: &[u8]) -> Vec<u8> {
    let mut cmd = seq("*b", data.len() as i32, b'V');
    cmd.extend_from_slice(data);
    cmd
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution() {
        assert_eq!(raster_resolution(300), b"\x1b*t300R".to_vec());
    }

    #[test]
    fn test_begin_simple() {
        assert_eq!(
            raster_begin(false, 64, 48),
            b"\x1b*r64s48T\x1b*r0A".to_vec()
        );
        assert_eq!(raster_begin(true, 64, 48), b"\x1b*r64s48T\x1b*r1A".to_vec());
    }

    #[test]
    fn test_begin_scaled_at_100_is_logical() {
        let scale = RasterScale {
            src_width: 64,
            src_height: 48,
            res_dots_per_meter: Some(11811),
            scale_x: 100,
            scale_y: 100,
        };
        // Both percentages 100: same bytes as the unscaled begin
        assert_eq!(raster_begin_scaled(false, &scale), raster_begin(false, 64, 48));
    }

    #[test]
    fn test_begin_scaled_default_resolution() {
        let scale = RasterScale {
            src_width: 96,
            src_height: 96,
            res_dots_per_meter: None,
            scale_x: 200,
            scale_y: 50,
        };
        // 96 px at 96 dpi = 1in = 720 decipoints; ×200% / ×50%
        let cmd = raster_begin_scaled(false, &scale);
        assert_eq!(cmd, b"\x1b*r96s96T\x1b*t1440h360V\x1b*r2A".to_vec());
    }

    #[test]
    fn test_begin_scaled_dpm_conversion() {
        let scale = RasterScale {
            src_width: 300,
            src_height: 300,
            res_dots_per_meter: Some(11811), // 11811 / 39.37 = 300 dpi
            scale_x: 100,
            scale_y: 50,
        };
        // 300 px at 300 dpi = 1in = 720 decipoints
        let cmd = raster_begin_scaled(true, &scale);
        assert_eq!(cmd, b"\x1b*r300s300T\x1b*t720h360V\x1b*r3A".to_vec());
    }

    #[test]
    fn test_compression() {
        assert_eq!(
            raster_compression(CompressionMode::DeltaRow),
            b"\x1b*b3M".to_vec()
        );
        assert_eq!(raster_compression(CompressionMode::None), b"\x1b*b0M".to_vec());
    }

    #[test]
    fn test_row_declares_exact_length() {
        let data = [0xAAu8, 0x55, 0xAA];
        let cmd = raster_row(&data);
        assert_eq!(&cmd[..5], b"\x1b*b3W");
        assert_eq!(&cmd[5..], &data);
    }

    #[test]
    fn test_plane_terminator() {
        let cmd = raster_plane(&[0xFF]);
        assert_eq!(cmd, b"\x1b*b1V\xff".to_vec());
    }

    #[test]
    fn test_end() {
        assert_eq!(raster_end(), b"\x1b*rC".to_vec());
    }
}
