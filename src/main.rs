//! # PclForge CLI
//!
//! Command-line interface for building and inspecting PCL print streams.
//!
//! ## Usage
//!
//! ```bash
//! # Write a demo print job
//! pclforge sample out.prn
//!
//! # Decode every soft-font character download in a stream
//! pclforge inspect out.prn
//!
//! # Render small bitmap glyphs as ASCII art while inspecting
//! pclforge inspect --shapes out.prn
//! ```

use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;

use pclforge::{
    DecodeOptions, PclError, StreamScanner,
    protocol::{commands, cursor, font, page, raster, rect},
    softfont::Severity,
    tables::PaperSize,
};

/// PclForge - PCL print stream utility
#[derive(Parser, Debug)]
#[command(name = "pclforge")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write a demo print job exercising the sequence builders
    Sample {
        /// Output file (.prn)
        output: PathBuf,
    },
    /// Decode soft-font character downloads in a print stream
    Inspect {
        /// Input print stream
        file: PathBuf,

        /// Render small bitmap glyphs as ASCII art
        #[arg(long)]
        shapes: bool,

        /// Read size per refill in bytes
        #[arg(long, default_value = "8192")]
        chunk: usize,
    },
}

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), PclError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Sample { output } => {
            let data = build_sample_job();
            fs::write(&output, &data)?;
            println!("Wrote {} bytes to {}", data.len(), output.display());
        }
        Commands::Inspect { file, shapes, chunk } => {
            let stream = fs::File::open(&file)?;
            let opts = DecodeOptions {
                render_shapes: shapes,
                ..DecodeOptions::default()
            };
            let report = StreamScanner::with_options(opts)
                .chunk_size(chunk)
                .scan(stream)?;

            for (i, c) in report.chars.iter().enumerate() {
                let code = match c.code {
                    Some(v) => format!("code {}", v),
                    None => "no code".to_string(),
                };
                println!(
                    "character {} at offset {} ({}): {}, {}",
                    i + 1,
                    c.offset,
                    code,
                    c.format.name(),
                    if c.valid { "ok" } else { "INVALID" },
                );
                for record in c.trace.records() {
                    let mark = match record.severity {
                        Severity::Info => "  ",
                        Severity::Warning => "? ",
                        Severity::Error => "! ",
                    };
                    println!("  {}{}", mark, record);
                }
            }
            println!(
                "{} bytes scanned, {} characters, {} invalid",
                report.bytes_scanned,
                report.chars.len(),
                report.invalid_count()
            );
        }
    }

    Ok(())
}

/// An 8x8 box glyph used for both the raster image and the font download.
const BOX_GLYPH: [u8; 8] = [0xFF, 0x81, 0x81, 0x81, 0x81, 0x81, 0x81, 0xFF];

/// One-page job touching most of the builder surface, including a
/// soft-font download the `inspect` subcommand can decode back.
fn build_sample_job() -> Vec<u8> {
    let mut data = Vec::new();
    data.extend(commands::job_header(None));
    data.extend(page::page_size(PaperSize::Letter));

    // Rules and a shaded panel
    data.extend(rect::rect_outline(300, 300, 4500, 900, 12));
    data.extend(rect::rect_shaded(360, 360, 4380, 780, 10));

    // Caption
    data.extend(font::text_at(420, 600, "PclForge sample job"));

    // Small raster image at 1:1
    data.extend(cursor::cursor_absolute(300, 1500));
    data.extend(raster::raster_begin(true, 8, 8));
    for row in BOX_GLYPH {
        data.extend(raster::raster_row(&[row]));
    }
    data.extend(raster::raster_end());

    // Soft-font character download: format 4, bitmap class, 8x8
    let mut block = vec![4, 0];
    block.extend_from_slice(&[14, 1, 0, 0, 0, 0, 0, 8, 0, 8, 0, 8, 0, 9]);
    block.extend_from_slice(&BOX_GLYPH);
    data.extend(font::font_id(100));
    data.extend(font::char_code(65));
    data.extend(font::char_data(&block));

    data.extend(commands::job_trailer(None));
    data
}
