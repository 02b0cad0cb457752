//! # Print-Stream Scanning
//!
//! Walks a PCL stream in fixed-size read chunks and decodes every
//! soft-font character download it finds. Two sequences matter here:
//!
//! - `ESC * c # E`: character code, remembered for the next download
//! - `ESC ( s # W`: character definition block of `#` bytes
//!
//! A block rarely lands inside one read, so the scanner follows the
//! decoder's continuation contract: on a backtracking [`Outcome::NeedMore`]
//! the unconsumed tail is kept at the front of the buffer before the next
//! read, on a forward one the buffer starts fresh. Everything the decoder
//! observed ends up in a per-character [`Trace`] inside the returned
//! [`ScanReport`].

use std::io::Read;

use log::{debug, warn};

use crate::error::PclError;
use crate::softfont::{
    CharClass, CharDecoder, CharFormat, Cursor, DecodeOptions, Outcome, Trace,
};

const DEFAULT_CHUNK: usize = 8192;

/// One decoded character download.
#[derive(Debug)]
pub struct CharReport {
    /// Byte offset of the block's first payload byte in the stream
    pub offset: u64,
    /// Character code set by the preceding `ESC * c # E`, if any
    pub code: Option<u32>,
    pub declared_len: usize,
    pub format: CharFormat,
    pub class: CharClass,
    pub valid: bool,
    pub trace: Trace,
}

/// Everything one scan pass produced.
#[derive(Debug, Default)]
pub struct ScanReport {
    pub chars: Vec<CharReport>,
    pub bytes_scanned: u64,
}

impl ScanReport {
    pub fn invalid_count(&self) -> usize {
        self.chars.iter().filter(|c| !c.valid).count()
    }
}

/// What a candidate escape sequence at the buffer position turned out to be.
enum Marker {
    /// Sequence may continue past the buffer end
    NeedMore,
    NoMatch,
    CharCode { value: u32, len: usize },
    CharData { declared: usize, len: usize },
}

/// Parse a candidate marker at `buf[0]` (which must be ESC).
fn parse_marker(buf: &[u8]) -> Marker {
    if buf.len() < 2 {
        return Marker::NeedMore;
    }
    let (group, term) = match buf[1] {
        b'*' => (b'c', b'E'),
        b'(' => (b's', b'W'),
        _ => return Marker::NoMatch,
    };
    if buf.len() < 3 {
        return Marker::NeedMore;
    }
    if buf[2] != group {
        return Marker::NoMatch;
    }
    let mut value: u64 = 0;
    let mut digits = 0;
    let mut i = 3;
    loop {
        match buf.get(i) {
            None => return Marker::NeedMore,
            Some(b) if b.is_ascii_digit() => {
                value = value * 10 + u64::from(b - b'0');
                digits += 1;
                // Value fields never get this long in real streams
                if digits > 8 {
                    return Marker::NoMatch;
                }
                i += 1;
            }
            Some(&b) if b == term => {
                i += 1;
                break;
            }
            Some(_) => return Marker::NoMatch,
        }
    }
    if buf[1] == b'*' {
        Marker::CharCode {
            value: value as u32,
            len: i,
        }
    } else {
        Marker::CharData {
            declared: value as usize,
            len: i,
        }
    }
}

/// Configurable scanner over a readable PCL stream.
pub struct StreamScanner {
    opts: DecodeOptions,
    chunk: usize,
}

impl Default for StreamScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl StreamScanner {
    pub fn new() -> Self {
        Self::with_options(DecodeOptions::default())
    }

    pub fn with_options(opts: DecodeOptions) -> Self {
        Self {
            opts,
            chunk: DEFAULT_CHUNK,
        }
    }

    /// Read size per refill. Small values are only useful for exercising
    /// the continuation paths.
    pub fn chunk_size(mut self, chunk: usize) -> Self {
        self.chunk = chunk.max(1);
        self
    }

    pub fn scan<R: Read>(&self, mut reader: R) -> Result<ScanReport, PclError> {
        let mut report = ScanReport::default();
        let mut buf: Vec<u8> = Vec::with_capacity(self.chunk);
        // Stream offset of buf[0]
        let mut base: u64 = 0;
        let mut pos: usize = 0;
        let mut eof = false;
        let mut last_code: Option<u32> = None;
        // In-flight block, if a download straddles the current buffer
        let mut pending: Option<(CharDecoder, Trace, u64)> = None;

        loop {
            // Refill: drop consumed bytes, keep the tail, read one chunk
            if pos > 0 {
                base += pos as u64;
                buf.drain(..pos);
                pos = 0;
            }
            if !eof {
                let start = buf.len();
                buf.resize(start + self.chunk, 0);
                let n = reader.read(&mut buf[start..])?;
                buf.truncate(start + n);
                if n == 0 {
                    eof = true;
                }
            }

            // Resume an in-flight block first
            if let Some((mut dec, mut trace, offset)) = pending.take() {
                let mut cur = Cursor::new(pos, buf.len() - pos);
                match dec.advance(&buf, &mut cur, &mut trace) {
                    Outcome::NeedMore { backtrack } => {
                        pos = cur.offset;
                        if eof {
                            let short = dec.remaining();
                            trace.error(
                                "stream",
                                format!("ended {} bytes into an incomplete block", short),
                            );
                            warn!("truncated character block at offset {}", offset);
                            self.finish_char(&mut report, dec, trace, offset, last_code, false);
                            break;
                        }
                        if !backtrack {
                            debug_assert_eq!(cur.remaining, 0);
                        }
                        pending = Some((dec, trace, offset));
                        continue;
                    }
                    Outcome::Done { valid } => {
                        pos = cur.offset;
                        self.finish_char(&mut report, dec, trace, offset, last_code, valid);
                    }
                }
            }

            // Search for markers in what's left of the buffer
            'search: loop {
                let esc = match buf[pos..].iter().position(|&b| b == 0x1B) {
                    Some(i) => pos + i,
                    None => {
                        pos = buf.len();
                        break 'search;
                    }
                };
                match parse_marker(&buf[esc..]) {
                    Marker::NeedMore if !eof => {
                        // Keep the partial sequence for the next refill
                        pos = esc;
                        break 'search;
                    }
                    Marker::NeedMore | Marker::NoMatch => {
                        pos = esc + 1;
                    }
                    Marker::CharCode { value, len } => {
                        debug!("character code {} at offset {}", value, base + esc as u64);
                        last_code = Some(value);
                        pos = esc + len;
                    }
                    Marker::CharData { declared, len } => {
                        pos = esc + len;
                        let offset = base + pos as u64;
                        debug!(
                            "character block of {} bytes at offset {}",
                            declared, offset
                        );
                        let mut dec = CharDecoder::with_options(declared, self.opts);
                        let mut trace = Trace::new();
                        let mut cur = Cursor::new(pos, buf.len() - pos);
                        match dec.advance(&buf, &mut cur, &mut trace) {
                            Outcome::NeedMore { .. } if !eof => {
                                pos = cur.offset;
                                pending = Some((dec, trace, offset));
                                break 'search;
                            }
                            Outcome::NeedMore { .. } => {
                                pos = cur.offset;
                                trace.error(
                                    "stream",
                                    format!(
                                        "ended {} bytes into an incomplete block",
                                        dec.remaining()
                                    ),
                                );
                                warn!("truncated character block at offset {}", offset);
                                self.finish_char(
                                    &mut report, dec, trace, offset, last_code, false,
                                );
                            }
                            Outcome::Done { valid } => {
                                pos = cur.offset;
                                self.finish_char(
                                    &mut report, dec, trace, offset, last_code, valid,
                                );
                            }
                        }
                    }
                }
            }

            if eof && pos >= buf.len() && pending.is_none() {
                break;
            }
        }

        report.bytes_scanned = base + buf.len() as u64;
        Ok(report)
    }

    fn finish_char(
        &self,
        report: &mut ScanReport,
        dec: CharDecoder,
        trace: Trace,
        offset: u64,
        code: Option<u32>,
        valid: bool,
    ) {
        report.chars.push(CharReport {
            offset,
            code,
            declared_len: dec.declared_len(),
            format: dec.format(),
            class: dec.class(),
            valid,
            trace,
        });
    }
}

// ============================================================================
// TESTS
// ============================================================================
