//! # Soft-Font Character Decoding
//!
//! Incremental decoding of PCL soft-font character definition blocks,
//! the payloads carried by `ESC ( s # W` sequences. Three on-wire
//! formats are understood:
//!
//! | Format | Byte | Content |
//! |--------|------|---------|
//! | Raster | 4 | bitmap glyph, plain or run-length compressed |
//! | Intellifont | 10 | scalable contour or compound character |
//! | TrueType | 15 | glyph fragment with library-assigned glyph ID |
//!
//! The decoder is built for stream scanning: it accepts a block in
//! arbitrary buffer-sized pieces, backtracks over fixed records that
//! straddle a refill, verifies the mod-256 checksum IntelliFont and
//! TrueType blocks carry, and emits a structured [`Trace`] of what it
//! saw instead of printing anything itself.

mod decoder;
mod trace;
mod types;

pub use decoder::{CharDecoder, Cursor, DecodeOptions, Outcome};
pub use trace::{Severity, Trace, TraceRecord};
pub use types::{CharClass, CharFormat, RasterDescriptor};
