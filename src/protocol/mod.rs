//! # PCL Escape-Sequence Builders
//!
//! Low-level command builders for HP's Printer Command Language (PCL 5)
//! and the HP-GL/2 mode switches embedded in it.
//!
//! ## Module Structure
//!
//! - [`commands`]: job framing, reset, units, PJL, HP-GL/2 switches
//! - [`page`]: page size, orientation, plex, margins, paper handling
//! - [`cursor`]: cursor moves, position stack, print direction
//! - [`rect`]: rectangular fills and outlines
//! - [`raster`]: raster graphics transfer
//! - [`font`]: soft fonts, symbol sets, patterns, text
//! - [`macros`]: macro definition and replay
//! - [`palette`]: simple color, palette stack, ROPs
//!
//! ## Usage Example
//!
//! ```
//! use pclforge::protocol::{commands, cursor, font, page, rect};
//! use pclforge::tables::PaperSize;
//!
//! // Build a one-page job
//! let mut data = Vec::new();
//! data.extend(commands::job_header(None));
//! data.extend(page::page_size(PaperSize::Letter));
//! data.extend(font::text_at(600, 600, "Hello, LaserJet"));
//! data.extend(rect::rect_outline(600, 900, 2400, 1200, 12));
//! data.extend(commands::job_trailer(None));
//! // Send `data` to a printer or write a .prn file...
//! ```
//!
//! ## Contract
//!
//! Every builder is a pure function from typed parameters to bytes: no
//! cross-call state, no validation, no errors. Out-of-range input yields
//! malformed output and is the caller's responsibility.

pub mod commands;
pub mod cursor;
pub mod font;
pub mod macros;
pub mod page;
pub mod palette;
pub mod raster;
pub mod rect;
