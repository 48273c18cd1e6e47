use clap::Parser;
use std::path::PathBuf;

use colorpage::{ConvertOptions, convert_to_coloring_page};

#[derive(Parser)]
#[command(name = "colorpage")]
#[command(about = "Convert an image into a coloring-page outline")]
struct Cli {
    /// Input image path
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output image path (PNG recommended)
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Gaussian blur kernel size (odd int)
    #[arg(long, default_value_t = 5)]
    blur: u32,

    /// Canny low threshold
    #[arg(long, default_value_t = 50, allow_negative_numbers = true)]
    th1: i32,

    /// Canny high threshold
    #[arg(long, default_value_t = 150, allow_negative_numbers = true)]
    th2: i32,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let options = ConvertOptions::new()
        .with_blur_ksize(args.blur)
        .with_thresholds(args.th1 as f32, args.th2 as f32)
        .with_verbose(args.verbose);

    let out = convert_to_coloring_page(&args.input, &args.output, &options)?;
    println!("Wrote: {}", out.display());

    Ok(())
}
