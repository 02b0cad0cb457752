//! # Character Block Decoder
//!
//! An incremental state machine over one PCL character definition block.
//! The block's bytes may arrive across several buffer refills of a larger
//! stream scan; the decoder keeps its progress between calls and tells
//! the caller how to continue:
//!
//! - **Backtracking continuation**: a fixed-size record (header,
//!   descriptor, sub-header, trailer) straddles the buffer edge. Nothing
//!   is consumed; the caller must preserve the unconsumed tail, refill,
//!   and call again; the record is reattempted from the same point.
//! - **Forward continuation**: a variable-length payload straddles the
//!   edge. What is present is consumed and accounted (checksum included),
//!   and the next call resumes mid-payload.
//!
//! ## Stage Flow
//!
//! ```text
//! Start → CheckDescriptor → ShowDescriptor → ShowData
//!       → { ShowDataHeader → ShowDataBody   (Intellifont, TrueType)
//!         | ShowDataBody                    (Raster)
//!         | ShowDataRemainder }             (continuation blocks)
//!       → ShowChecksum → EndOk
//! ```
//!
//! Any validation failure branches to `BadSeqA → BadSeqB`: the block is
//! marked invalid and its remaining declared bytes are drained as opaque
//! binary so the caller's stream offsets stay correct for the next
//! character.

use log::debug;

use super::trace::{Trace, hex_bytes};
use super::types::{
    COMPOUND_HEADER_LEN, CONTOUR_HEADER_LEN, CharClass, CharFormat, CompoundHeader, ContourHeader,
    RasterDescriptor, TRUETYPE_HEADER_LEN, TrueTypeHeader,
};

/// Caller's position within the current buffer, updated in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    /// Index of the next unconsumed byte
    pub offset: usize,
    /// Bytes available from `offset`
    pub remaining: usize,
}

impl Cursor {
    pub fn new(offset: usize, remaining: usize) -> Self {
        Self { offset, remaining }
    }

    #[inline]
    fn take(&mut self, n: usize) {
        self.offset += n;
        self.remaining -= n;
    }
}

/// Result of one [`CharDecoder::advance`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// More bytes are needed. With `backtrack: true` the unconsumed tail
    /// of the buffer must be preserved in front of the new data; with
    /// `false` everything supplied so far has been consumed.
    NeedMore { backtrack: bool },
    /// The block's declared length is fully consumed; `valid` reports
    /// whether every structural check passed.
    Done { valid: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Start,
    CheckDescriptor,
    ShowDescriptor,
    ShowData,
    ShowDataHeader,
    ShowDataBody,
    ShowDataRemainder,
    ShowChecksum,
    EndOk,
    BadSeqA,
    BadSeqB,
}

/// Optional glyph-shape rendering limits.
///
/// Shape rows are emitted into the trace as `@`/space bitmaps for raster
/// characters small enough to be worth looking at.
#[derive(Debug, Clone, Copy)]
pub struct DecodeOptions {
    pub render_shapes: bool,
    pub max_shape_width: u16,
    pub max_shape_height: u16,
    pub max_shape_bytes: usize,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            render_shapes: false,
            max_shape_width: 64,
            max_shape_height: 64,
            max_shape_bytes: 1024,
        }
    }
}

/// Incremental decoder for one character definition block.
///
/// One instance owns one in-flight block: create it with the length
/// declared by the embedding `ESC ( s # W` sequence, feed it buffers
/// until [`Outcome::Done`], then discard it. Reusing an instance across
/// characters is a caller error the decoder does not detect.
pub struct CharDecoder {
    declared_len: usize,
    /// Declared bytes not yet consumed; exactly zero at completion
    rem: usize,
    stage: Stage,
    valid: bool,
    opts: DecodeOptions,

    format: CharFormat,
    class: CharClass,
    continuation: bool,
    raster: Option<RasterDescriptor>,
    glyph_id: Option<i16>,

    payload_rem: usize,
    /// Running mod-256 sum over sub-header + payload bytes
    checksum: u8,
    shape_on: bool,
    shape: Vec<u8>,
}

impl CharDecoder {
    pub fn new(declared_len: usize) -> Self {
        Self::with_options(declared_len, DecodeOptions::default())
    }

    pub fn with_options(declared_len: usize, opts: DecodeOptions) -> Self {
        Self {
            declared_len,
            rem: declared_len,
            stage: Stage::Start,
            valid: true,
            opts,
            format: CharFormat::Unknown(0),
            class: CharClass::Unknown(0),
            continuation: false,
            raster: None,
            glyph_id: None,
            payload_rem: 0,
            checksum: 0,
            shape_on: false,
            shape: Vec::new(),
        }
    }

    /// Whether every structural check so far has passed.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn format(&self) -> CharFormat {
        self.format
    }

    pub fn class(&self) -> CharClass {
        self.class
    }

    /// Decoded raster descriptor, once past the descriptor stage.
    pub fn raster_descriptor(&self) -> Option<&RasterDescriptor> {
        self.raster.as_ref()
    }

    /// TrueType glyph ID, once past the sub-header stage.
    pub fn glyph_id(&self) -> Option<i16> {
        self.glyph_id
    }

    /// Block length declared by the embedding sequence.
    pub fn declared_len(&self) -> usize {
        self.declared_len
    }

    /// Declared bytes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.rem
    }

    fn fail(&mut self, trace: &mut Trace, label: &str, detail: String) {
        debug!("block invalid at {:?}: {} - {}", self.stage, label, detail);
        trace.error(label, detail);
        self.valid = false;
    }

    /// Consume as much of the current block as `buf` holds, starting at
    /// `cur`. `cur` is advanced past every consumed byte.
    pub fn advance(&mut self, buf: &[u8], cur: &mut Cursor, trace: &mut Trace) -> Outcome {
        loop {
            match self.stage {
                Stage::Start => {
                    if self.rem < 2 {
                        self.fail(
                            trace,
                            "header",
                            format!("declared length {} shorter than block header", self.rem),
                        );
                        self.stage = Stage::BadSeqA;
                        continue;
                    }
                    if cur.remaining < 2 {
                        return Outcome::NeedMore { backtrack: true };
                    }
                    let format_byte = buf[cur.offset];
                    let cont_byte = buf[cur.offset + 1];
                    self.format = CharFormat::from_byte(format_byte);
                    self.continuation = cont_byte != 0;
                    cur.take(2);
                    self.rem -= 2;

                    trace.row(
                        "format",
                        format!("{} ({})", self.format.name(), format_byte),
                    );
                    trace.row(
                        "continuation",
                        if self.continuation { "yes" } else { "no" }.to_string(),
                    );
                    trace.row("declared length", self.declared_len.to_string());
                    debug!(
                        "char block: format={} continuation={} declared={}",
                        self.format.name(),
                        self.continuation,
                        self.declared_len
                    );

                    if let CharFormat::Unknown(b) = self.format {
                        self.fail(trace, "format", format!("unrecognized format byte {}", b));
                        self.stage = Stage::BadSeqA;
                    } else if self.continuation {
                        // Class/descriptor only exist on first blocks;
                        // a continuation block is raw character data.
                        self.stage = Stage::ShowDataRemainder;
                    } else {
                        self.stage = Stage::CheckDescriptor;
                    }
                }

                Stage::CheckDescriptor => {
                    if self.rem == 0 {
                        self.fail(trace, "descriptor", "no room for descriptor".to_string());
                        self.stage = Stage::BadSeqA;
                        continue;
                    }
                    if cur.remaining < 1 {
                        return Outcome::NeedMore { backtrack: true };
                    }
                    let size = buf[cur.offset] as usize;
                    if size == 0 || size > self.rem {
                        self.fail(
                            trace,
                            "descriptor",
                            format!(
                                "descriptor size {} does not fit declared remainder {}",
                                size, self.rem
                            ),
                        );
                        self.stage = Stage::BadSeqA;
                        continue;
                    }
                    if cur.remaining < size {
                        // Fixed record straddles the buffer edge: rewind
                        // to its start and reattempt after refill.
                        return Outcome::NeedMore { backtrack: true };
                    }
                    self.stage = Stage::ShowDescriptor;
                }

                Stage::ShowDescriptor => {
                    // CheckDescriptor guaranteed the full descriptor is here
                    let size = buf[cur.offset] as usize;
                    let desc = &buf[cur.offset..cur.offset + size];
                    self.class = CharClass::from_byte(if size > 1 { desc[1] } else { 0 });

                    trace.row("descriptor size", size.to_string());
                    trace.row("class", self.class.name().to_string());

                    if self.format == CharFormat::Raster {
                        let d = RasterDescriptor::parse(desc);
                        trace.row("orientation", d.orientation.to_string());
                        trace.row("left offset", d.left_offset.to_string());
                        trace.row("top offset", d.top_offset.to_string());
                        trace.row("width", d.width.to_string());
                        trace.row("height", d.height.to_string());
                        if let Some(dx) = d.delta_x {
                            trace.row("delta X", dx.to_string());
                        }
                        self.raster = Some(d);
                    }

                    cur.take(size);
                    self.rem -= size;

                    if let CharClass::Unknown(b) = self.class {
                        self.fail(trace, "class", format!("unrecognized class byte {}", b));
                        self.stage = Stage::BadSeqA;
                    } else {
                        self.stage = Stage::ShowData;
                    }
                }

                Stage::ShowData => match self.format {
                    CharFormat::Raster => {
                        let d = self.raster.expect("descriptor parsed before ShowData");
                        match d.class {
                            CharClass::Bitmap => {
                                let expected = d.expected_payload();
                                if expected != self.rem {
                                    self.fail(
                                        trace,
                                        "data size",
                                        format!(
                                            "bitmap needs {} bytes (ceil({}/8) x {}), block carries {}",
                                            expected, d.width, d.height, self.rem
                                        ),
                                    );
                                    self.stage = Stage::BadSeqA;
                                    continue;
                                }
                                self.payload_rem = expected;
                                self.arm_shape_capture(expected);
                                self.stage = Stage::ShowDataBody;
                            }
                            CharClass::BitmapCompressed => {
                                // Compressed size is not derivable from the
                                // descriptor; the whole remainder is payload.
                                self.payload_rem = self.rem;
                                self.arm_shape_capture(self.rem);
                                self.stage = Stage::ShowDataBody;
                            }
                            other => {
                                self.fail(
                                    trace,
                                    "class",
                                    format!("class {} invalid for raster format", other.name()),
                                );
                                self.stage = Stage::BadSeqA;
                            }
                        }
                    }
                    _ => self.stage = Stage::ShowDataHeader,
                },

                Stage::ShowDataHeader => {
                    let need = match (self.format, self.class) {
                        (CharFormat::Intellifont, CharClass::Contour) => CONTOUR_HEADER_LEN,
                        (CharFormat::Intellifont, CharClass::Compound) => COMPOUND_HEADER_LEN,
                        (CharFormat::TrueType, _) => TRUETYPE_HEADER_LEN,
                        (_, other) => {
                            self.fail(
                                trace,
                                "class",
                                format!(
                                    "class {} invalid for {} format",
                                    other.name(),
                                    self.format.name()
                                ),
                            );
                            self.stage = Stage::BadSeqA;
                            continue;
                        }
                    };
                    // Sub-header plus the 2-byte trailer must fit
                    if self.rem < need + 2 {
                        self.fail(
                            trace,
                            "data header",
                            format!(
                                "sub-header ({} bytes) and trailer exceed declared remainder {}",
                                need, self.rem
                            ),
                        );
                        self.stage = Stage::BadSeqA;
                        continue;
                    }
                    if cur.remaining < need {
                        return Outcome::NeedMore { backtrack: true };
                    }

                    let hdr = &buf[cur.offset..cur.offset + need];
                    for &b in hdr {
                        self.checksum = self.checksum.wrapping_add(b);
                    }

                    self.payload_rem = match (self.format, self.class) {
                        (CharFormat::Intellifont, CharClass::Contour) => {
                            let h = ContourHeader::parse(hdr);
                            trace.row("contour data size", h.contour_data_size.to_string());
                            trace.row("metric offset", h.metric_offset.to_string());
                            trace.row("char data offset", h.char_data_offset.to_string());
                            trace.row("contour tree offset", h.contour_tree_offset.to_string());
                            trace.row("XY data offset", h.xy_data_offset.to_string());
                            h.payload_len()
                        }
                        (CharFormat::Intellifont, CharClass::Compound) => {
                            let h = CompoundHeader::parse(hdr);
                            trace.row("escapement", h.escapement.to_string());
                            trace.row("components", h.component_count.to_string());
                            // Compound data extends to the trailer
                            self.rem - need - 2
                        }
                        _ => {
                            let h = TrueTypeHeader::parse(hdr);
                            trace.row("char data size", h.char_data_size.to_string());
                            trace.row("glyph ID", h.glyph_id.to_string());
                            self.glyph_id = Some(h.glyph_id);
                            h.payload_len()
                        }
                    };

                    cur.take(need);
                    self.rem -= need;

                    if self.payload_rem + 2 != self.rem {
                        self.fail(
                            trace,
                            "data size",
                            format!(
                                "payload {} + trailer 2 disagrees with declared remainder {}",
                                self.payload_rem, self.rem
                            ),
                        );
                        self.stage = Stage::BadSeqA;
                    } else {
                        self.stage = Stage::ShowDataBody;
                    }
                }

                Stage::ShowDataBody => {
                    let n = cur.remaining.min(self.payload_rem);
                    if n > 0 {
                        let chunk = &buf[cur.offset..cur.offset + n];
                        if self.format.has_trailer() {
                            for &b in chunk {
                                self.checksum = self.checksum.wrapping_add(b);
                            }
                        }
                        if self.shape_on {
                            self.shape.extend_from_slice(chunk);
                        }
                        trace.row("data", hex_bytes(chunk));
                        cur.take(n);
                        self.rem -= n;
                        self.payload_rem -= n;
                    }
                    if self.payload_rem > 0 {
                        // Mid-payload: keep counters and checksum, resume
                        // in the next buffer.
                        return Outcome::NeedMore { backtrack: false };
                    }

                    if self.format == CharFormat::Raster {
                        self.render_shape(trace);
                        // No trailer for raster characters
                        self.stage = if self.rem == 0 {
                            Stage::EndOk
                        } else {
                            Stage::ShowDataRemainder
                        };
                    } else {
                        self.stage = Stage::ShowChecksum;
                    }
                }

                Stage::ShowChecksum => {
                    if cur.remaining < 2 {
                        return Outcome::NeedMore { backtrack: true };
                    }
                    let reserved = buf[cur.offset];
                    let actual = buf[cur.offset + 1];
                    let expected = 0u8.wrapping_sub(self.checksum);
                    trace.row("reserved", reserved.to_string());
                    trace.row("checksum", format!("0x{:02X}", actual));
                    if expected != actual {
                        self.fail(
                            trace,
                            "checksum",
                            format!("expected 0x{:02X}, block carries 0x{:02X}", expected, actual),
                        );
                    }
                    cur.take(2);
                    self.rem -= 2;
                    // ShowDataHeader's size check pinned rem to exactly the
                    // trailer, so the block ends here.
                    self.stage = Stage::EndOk;
                }

                Stage::ShowDataRemainder => {
                    let n = cur.remaining.min(self.rem);
                    if n > 0 {
                        trace.row("raw data", hex_bytes(&buf[cur.offset..cur.offset + n]));
                        cur.take(n);
                        self.rem -= n;
                    }
                    if self.rem > 0 {
                        return Outcome::NeedMore { backtrack: false };
                    }
                    self.stage = Stage::EndOk;
                }

                Stage::BadSeqA => {
                    trace.row(
                        "remainder",
                        format!("{} bytes treated as binary", self.rem),
                    );
                    self.stage = Stage::BadSeqB;
                }

                Stage::BadSeqB => {
                    let n = cur.remaining.min(self.rem);
                    if n > 0 {
                        trace.row("binary", hex_bytes(&buf[cur.offset..cur.offset + n]));
                        cur.take(n);
                        self.rem -= n;
                    }
                    if self.rem > 0 {
                        return Outcome::NeedMore { backtrack: false };
                    }
                    return Outcome::Done { valid: self.valid };
                }

                Stage::EndOk => {
                    return Outcome::Done { valid: self.valid };
                }
            }
        }
    }

    fn arm_shape_capture(&mut self, payload_len: usize) {
        let d = match self.raster {
            Some(d) => d,
            None => return,
        };
        self.shape_on = self.opts.render_shapes
            && d.width > 0
            && d.width <= self.opts.max_shape_width
            && d.height <= self.opts.max_shape_height
            && payload_len <= self.opts.max_shape_bytes;
        if self.shape_on {
            self.shape.reserve(payload_len);
        }
    }

    /// Emit `@`/space bitmap rows for the captured raster payload.
    fn render_shape(&mut self, trace: &mut Trace) {
        if !self.shape_on {
            return;
        }
        let d = self.raster.expect("shape capture requires raster descriptor");
        match d.class {
            CharClass::Bitmap => {
                let row_bytes = d.row_bytes();
                for row in self.shape.chunks(row_bytes) {
                    let mut line = String::with_capacity(d.width as usize);
                    for x in 0..d.width as usize {
                        let bit = (row[x / 8] >> (7 - (x % 8))) & 1;
                        line.push(if bit == 1 { '@' } else { ' ' });
                    }
                    trace.row("shape", line);
                }
            }
            CharClass::BitmapCompressed => self.render_compressed_shape(trace, d),
            _ => {}
        }
    }

    /// Run-length rows: repeat-count byte, then alternating span lengths
    /// starting with white, until the row width is filled. A repeated row
    /// is emitted once, with the count carried in its `(xN)` label rather
    /// than duplicating the output line.
    fn render_compressed_shape(&self, trace: &mut Trace, d: RasterDescriptor) {
        let width = d.width as usize;
        let mut i = 0;
        while i < self.shape.len() {
            let repeat = self.shape[i];
            i += 1;
            let mut line = String::with_capacity(width);
            let mut black = false;
            while line.len() < width && i < self.shape.len() {
                let run = self.shape[i] as usize;
                i += 1;
                let fill = if black { '@' } else { ' ' };
                for _ in 0..run.min(width - line.len()) {
                    line.push(fill);
                }
                black = !black;
            }
            let label = if repeat > 0 {
                format!("shape (x{})", repeat as u16 + 1)
            } else {
                "shape".to_string()
            };
            trace.row(label, line);
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// A well-formed 8x8 bitmap block: header + 14-byte descriptor + 8 rows.
    fn bitmap_block() -> Vec<u8> {
        let mut block = vec![4, 0]; // format, continuation
        block.extend_from_slice(&[
            14, 1, 0, 0, // size, class=bitmap, orientation, reserved
            0, 0, // left
            0, 0, // top
            0, 8, // width
            0, 8, // height
            0, 0, // delta X
        ]);
        block.extend_from_slice(&[0xFF, 0x81, 0x81, 0x81, 0x81, 0x81, 0x81, 0xFF]);
        block
    }

    /// A well-formed TrueType block with a correct checksum trailer.
    fn truetype_block(payload: &[u8]) -> Vec<u8> {
        let size = (payload.len() + TRUETYPE_HEADER_LEN) as u16;
        let mut block = vec![15, 0]; // format, continuation
        block.extend_from_slice(&[2, 15]); // descriptor: size, class
        let mut sum = 0u8;
        let hdr = [(size >> 8) as u8, size as u8, 0x00, 0x41];
        for &b in hdr.iter().chain(payload) {
            sum = sum.wrapping_add(b);
        }
        block.extend_from_slice(&hdr);
        block.extend_from_slice(payload);
        block.push(0); // reserved
        block.push(0u8.wrapping_sub(sum));
        block
    }

    fn decode_whole(block: &[u8]) -> (Outcome, CharDecoder, Trace) {
        let mut dec = CharDecoder::new(block.len());
        let mut cur = Cursor::new(0, block.len());
        let mut trace = Trace::new();
        let out = dec.advance(block, &mut cur, &mut trace);
        assert_eq!(cur.remaining, 0, "block fully consumed");
        (out, dec, trace)
    }

    #[test]
    fn test_bitmap_single_buffer() {
        let block = bitmap_block();
        let (out, dec, trace) = decode_whole(&block);
        assert_eq!(out, Outcome::Done { valid: true });
        let d = dec.raster_descriptor().unwrap();
        assert_eq!((d.width, d.height), (8, 8));
        assert_eq!(trace.find("width"), Some("8"));
        assert!(!trace.has_diagnostics());
    }

    #[test]
    fn test_bitmap_size_mismatch_flags_invalid() {
        let mut block = bitmap_block();
        block.pop(); // one payload byte short
        let (out, _, trace) = decode_whole(&block);
        assert_eq!(out, Outcome::Done { valid: false });
        assert!(trace.has_diagnostics());
    }

    #[test]
    fn test_truetype_checksum_ok() {
        let block = truetype_block(&[1, 2, 3, 4, 5]);
        let (out, dec, _) = decode_whole(&block);
        assert_eq!(out, Outcome::Done { valid: true });
        assert_eq!(dec.glyph_id(), Some(65));
    }

    #[test]
    fn test_truetype_checksum_off_by_one() {
        let mut block = truetype_block(&[1, 2, 3, 4, 5]);
        let last = block.len() - 1;
        block[last] = block[last].wrapping_add(1);
        let (out, dec, trace) = decode_whole(&block);
        // Invalid, but the full declared length was still consumed
        assert_eq!(out, Outcome::Done { valid: false });
        assert_eq!(dec.remaining(), 0);
        assert!(trace.find("checksum").is_some());
    }

    #[test]
    fn test_intellifont_contour_roundtrip() {
        let payload = [9u8, 8, 7, 6];
        let contour_size = (payload.len() + CONTOUR_HEADER_LEN) as u16;
        let mut block = vec![10, 0, 2, 3]; // format, cont, desc size, class=contour
        let mut hdr = vec![(contour_size >> 8) as u8, contour_size as u8];
        hdr.extend_from_slice(&[0, 10, 0, 20, 0, 30, 0, 40]);
        let mut sum = 0u8;
        for &b in hdr.iter().chain(payload.iter()) {
            sum = sum.wrapping_add(b);
        }
        block.extend_from_slice(&hdr);
        block.extend_from_slice(&payload);
        block.push(0);
        block.push(0u8.wrapping_sub(sum));

        let (out, dec, trace) = decode_whole(&block);
        assert_eq!(out, Outcome::Done { valid: true });
        assert_eq!(dec.class(), CharClass::Contour);
        assert_eq!(trace.find("contour data size"), Some("14"));
    }

    #[test]
    fn test_unknown_format_drains_declared_length() {
        let block = [99u8, 0, 1, 2, 3, 4, 5];
        let (out, _, trace) = decode_whole(&block);
        assert_eq!(out, Outcome::Done { valid: false });
        assert!(trace.find("format").unwrap().contains("Unknown"));
    }

    #[test]
    fn test_split_mid_descriptor_backtracks() {
        let block = bitmap_block();
        let mut dec = CharDecoder::new(block.len());
        let mut trace = Trace::new();

        // First chunk ends 5 bytes into the descriptor
        let first = &block[..7];
        let mut cur = Cursor::new(0, first.len());
        let out = dec.advance(first, &mut cur, &mut trace);
        assert_eq!(out, Outcome::NeedMore { backtrack: true });
        // Header consumed, descriptor untouched
        assert_eq!(cur.offset, 2);
        assert_eq!(cur.remaining, 5);

        // Caller preserves the tail and appends the rest
        let mut refill = block[cur.offset..7].to_vec();
        refill.extend_from_slice(&block[7..]);
        let mut cur = Cursor::new(0, refill.len());
        let out = dec.advance(&refill, &mut cur, &mut trace);
        assert_eq!(out, Outcome::Done { valid: true });
        let d = dec.raster_descriptor().unwrap();
        assert_eq!((d.width, d.height), (8, 8));
    }

    #[test]
    fn test_split_mid_payload_forward_continues() {
        let block = truetype_block(&[10, 20, 30, 40, 50, 60]);
        let mut dec = CharDecoder::new(block.len());
        let mut trace = Trace::new();

        // Split three bytes into the payload (header is 2+2+4 = 8 bytes)
        let first = &block[..11];
        let mut cur = Cursor::new(0, first.len());
        let out = dec.advance(first, &mut cur, &mut trace);
        assert_eq!(out, Outcome::NeedMore { backtrack: false });
        assert_eq!(cur.remaining, 0, "forward continuation consumes everything");

        let mut cur = Cursor::new(0, block.len() - 11);
        let out = dec.advance(&block[11..], &mut cur, &mut trace);
        assert_eq!(out, Outcome::Done { valid: true });
    }

    #[test]
    fn test_continuation_block_is_raw() {
        let block = [4u8, 1, 0xAA, 0xBB, 0xCC];
        let (out, _, trace) = decode_whole(&block);
        assert_eq!(out, Outcome::Done { valid: true });
        assert_eq!(trace.find("continuation"), Some("yes"));
        assert!(trace.find("raw data").is_some());
    }

    #[test]
    fn test_shape_rendering() {
        let block = bitmap_block();
        let opts = DecodeOptions {
            render_shapes: true,
            ..DecodeOptions::default()
        };
        let mut dec = CharDecoder::with_options(block.len(), opts);
        let mut cur = Cursor::new(0, block.len());
        let mut trace = Trace::new();
        let out = dec.advance(&block, &mut cur, &mut trace);
        assert_eq!(out, Outcome::Done { valid: true });

        let rows: Vec<&str> = trace
            .records()
            .iter()
            .filter(|r| r.label == "shape")
            .map(|r| r.detail.as_str())
            .collect();
        assert_eq!(rows.len(), 8);
        assert_eq!(rows[0], "@@@@@@@@");
        assert_eq!(rows[1], "@      @");
        assert_eq!(rows[7], "@@@@@@@@");
    }

    #[test]
    fn test_zero_width_glyph_skips_shape_rendering() {
        // Width 0 means ceil(0/8) row bytes; no rows to draw
        let block = [4u8, 0, 14, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0];
        let opts = DecodeOptions {
            render_shapes: true,
            ..DecodeOptions::default()
        };
        let mut dec = CharDecoder::with_options(block.len(), opts);
        let mut cur = Cursor::new(0, block.len());
        let mut trace = Trace::new();
        let out = dec.advance(&block, &mut cur, &mut trace);
        assert_eq!(out, Outcome::Done { valid: true });
        assert!(trace.records().iter().all(|r| r.label != "shape"));
    }

    #[test]
    fn test_descriptor_too_large_for_block() {
        // Descriptor claims 200 bytes but the block declares 10
        let block = [4u8, 0, 200, 1, 0, 0, 0, 0, 0, 0];
        let (out, _, trace) = decode_whole(&block);
        assert_eq!(out, Outcome::Done { valid: false });
        assert!(trace.find("descriptor").unwrap().contains("200"));
    }
}
