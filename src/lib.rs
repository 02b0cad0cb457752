//! # PclForge - PCL Print Stream Library
//!
//! PclForge is a Rust library for building and inspecting HP PCL 5 print
//! streams. It provides:
//!
//! - **Protocol implementation**: PCL escape-sequence builders for page
//!   setup, cursor movement, rectangles, raster images, macros, fonts,
//!   patterns, and text
//! - **Soft-font decoding**: an incremental decoder for downloaded
//!   character blocks (raster, Intellifont, and TrueType formats)
//! - **Stream scanning**: chunked scanning of whole print files with
//!   per-character decode traces
//!
//! ## Quick Start
//!
//! ```
//! use pclforge::protocol::{commands, cursor, page, rect};
//! use pclforge::tables::PaperSize;
//!
//! // Build a one-page job: letter paper, a positioned rectangle, text
//! let mut data = Vec::new();
//! data.extend(commands::job_header(None));
//! data.extend(page::page_size(PaperSize::Letter));
//! data.extend(rect::rect_solid(600, 600, 1200, 300, false));
//! data.extend(cursor::cursor_absolute(600, 1200));
//! data.extend(b"Hello from PCL");
//! data.extend(commands::job_trailer(None));
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`protocol`] | PCL escape-sequence builders |
//! | [`softfont`] | Soft-font character block decoding |
//! | [`scan`] | Chunked print-stream scanning |
//! | [`tables`] | Paper sizes, orientations, and other enumerations |
//! | [`error`] | Error types |
//!
//! ## Coordinate System
//!
//! Builders take positions and dimensions in PCL internal units at
//! 600 per inch. Sequences that require decipoints (1/720 inch) convert
//! internally and round to the nearest unit.

pub mod error;
pub mod protocol;
pub mod scan;
pub mod softfont;
pub mod tables;

// Re-exports for convenience
pub use error::PclError;
pub use scan::{ScanReport, StreamScanner};
pub use softfont::{CharDecoder, DecodeOptions};
