//! Renders glyph swatch sheets from OpenType fonts.

mod sheet;

use std::fmt;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use memmap2::Mmap;

use glyphcell::opentype::{OpenTypeFont, ReadError};
use glyphcell::{CharacterSet, CodePointRange, GridIndex, Pixmap};

use sheet::SheetSpec;

#[derive(Parser, Debug)]
#[command(
    name = "swatchboard",
    about = "Render a glyph swatch sheet from a font file"
)]
struct Args {
    /// Path to the font file (TTF or OTF).
    font: PathBuf,
    /// Output PNG path.
    #[arg(short, long, default_value = "swatches.png")]
    out: PathBuf,
    /// Render a single named built-in character set.
    #[arg(long)]
    set: Option<String>,
    /// Render an explicit inclusive code point range, e.g. 0400-04FF.
    #[arg(long, value_parser = parse_range, conflicts_with = "set")]
    range: Option<CodePointRange>,
    /// Cell size in logical pixels.
    #[arg(long, default_value_t = 48.0)]
    cell: f32,
    /// Device pixel ratio.
    #[arg(long, default_value_t = 1.0)]
    dpr: f32,
    /// Grid columns.
    #[arg(long, default_value_t = 16)]
    columns: u32,
    /// Character rendered as selected.
    #[arg(long)]
    select: Option<char>,
    /// Character rendered as hovered.
    #[arg(long)]
    hover: Option<char>,
    /// Font index within a collection.
    #[arg(long, default_value_t = 0)]
    index: u32,
}

fn parse_range(raw: &str) -> Result<CodePointRange, String> {
    let (start, end) = raw
        .split_once('-')
        .ok_or_else(|| String::from("expected START-END, e.g. 0400-04FF"))?;
    let start = u32::from_str_radix(start.trim(), 16).map_err(|e| e.to_string())?;
    let end = u32::from_str_radix(end.trim(), 16).map_err(|e| e.to_string())?;
    if start > end {
        return Err(String::from("range start exceeds range end"));
    }
    Ok(CodePointRange::new(start, end))
}

#[derive(Debug)]
enum Error {
    Io(std::io::Error),
    Font(ReadError),
    Png(png::EncodingError),
    UnknownSet(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "{e}"),
            Self::Font(e) => write!(f, "failed to parse font: {e}"),
            Self::Png(e) => write!(f, "failed to encode PNG: {e}"),
            Self::UnknownSet(name) => write!(f, "no built-in character set named {name:?}"),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<ReadError> for Error {
    fn from(e: ReadError) -> Self {
        Self::Font(e)
    }
}

impl From<png::EncodingError> for Error {
    fn from(e: png::EncodingError) -> Self {
        Self::Png(e)
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("swatchboard: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Error> {
    let file = File::open(&args.font)?;
    let data = unsafe { Mmap::map(&file) }?;
    let font = OpenTypeFont::from_index(&data, args.index)?;
    let index = grid_index(args)?;
    let spec = SheetSpec {
        cell: args.cell,
        dpr: args.dpr,
        columns: args.columns.max(1),
    };
    let pixmap = sheet::compose(&spec, &index, &font, args.select, args.hover);
    write_png(&args.out, &pixmap)?;
    log::info!(
        "wrote {} ({}x{} px, {} swatches)",
        args.out.display(),
        pixmap.width(),
        pixmap.height(),
        index.len()
    );
    Ok(())
}

fn grid_index(args: &Args) -> Result<GridIndex, Error> {
    if let Some(range) = args.range {
        let name = format!("U+{}..U+{}", range.start(), range.end());
        return Ok(GridIndex::new(vec![CharacterSet::new(name, vec![range])]));
    }
    let builtin = GridIndex::latin();
    match &args.set {
        None => Ok(builtin),
        Some(name) => builtin
            .sets()
            .iter()
            .find(|set| set.name().eq_ignore_ascii_case(name))
            .cloned()
            .map(|set| GridIndex::new(vec![set]))
            .ok_or_else(|| Error::UnknownSet(name.clone())),
    }
}

fn write_png(path: &Path, pixmap: &Pixmap) -> Result<(), Error> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    let mut encoder = png::Encoder::new(writer, pixmap.width(), pixmap.height());
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(&pixmap.to_rgba8())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_parsing() {
        let range = parse_range("0400-04FF").unwrap();
        assert_eq!(range.start().value(), 0x400);
        assert_eq!(range.end().value(), 0x4FF);
        assert!(parse_range("04FF-0400").is_err());
        assert!(parse_range("nonsense").is_err());
    }
}
