//! picascii CLI - Convert images to colored ASCII art

use clap::{Parser, ValueEnum};
use picascii::{load_image, Converter, PicasciiError};
use std::path::PathBuf;

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// Monochrome character grid
    Plain,
    /// Color-styled HTML spans
    Html,
    /// Text annotated with $xNNN palette tokens
    Codes,
    /// All three outputs as JSON
    Json,
}

#[derive(Parser)]
#[command(name = "picascii", about = "Convert images to colored ASCII art")]
struct Args {
    /// Input image: file path, http(s) URL, or data URL
    input: String,
    /// Output width in characters
    #[arg(short, long, default_value = "80", value_parser = clap::value_parser!(u32).range(20..=200))]
    width: u32,
    /// Output height in characters (derived from the image aspect ratio when omitted)
    #[arg(short = 'H', long, value_parser = clap::value_parser!(u32).range(10..=200))]
    height: Option<u32>,
    /// Let width and height distort the image independently
    #[arg(long, requires = "height")]
    no_aspect: bool,
    /// Output format
    #[arg(short, long, value_enum, default_value = "plain")]
    format: Format,
    /// Write to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<(), PicasciiError> {
    env_logger::init();
    let args = Args::parse();

    let image = load_image(&args.input)?;
    let art = Converter::new()
        .with_width(args.width)
        .with_height(args.height.unwrap_or(0))
        .with_aspect_ratio(!args.no_aspect)
        .convert(&image);

    let text = match args.format {
        Format::Plain => art.plain,
        Format::Html => art.html,
        Format::Codes => art.color_coded,
        Format::Json => serde_json::to_string_pretty(&art)?,
    };

    match args.output {
        Some(path) => std::fs::write(path, text)?,
        None => print!("{text}"),
    }
    Ok(())
}
