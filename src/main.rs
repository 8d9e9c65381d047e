//! wallsplit CLI - Split wallpapers into per-monitor images

use clap::{ArgGroup, Parser};
use std::path::PathBuf;
use wallsplit::{load_monitors, Justify, SplitError, SplitOptions, Splitter, Verbosity};

#[derive(Parser)]
#[command(name = "wallsplit", about = "Split wallpaper images across a multi-monitor layout")]
#[command(group(
    ArgGroup::new("horizontal").args(["left", "right", "left_padding", "right_padding"])
))]
#[command(group(
    ArgGroup::new("vertical").args(["top", "bottom", "top_padding", "bottom_padding"])
))]
struct Args {
    /// Monitor layout definition JSON file
    #[arg(short, long, value_name = "FILE")]
    monitor: PathBuf,
    /// Image files to split
    #[arg(required = true)]
    images: Vec<PathBuf>,
    /// No previews, warnings only
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
    /// Log layout and cropping details
    #[arg(short, long)]
    verbose: bool,
    /// Left justify the cropped images
    #[arg(long)]
    left: bool,
    /// Right justify the cropped images
    #[arg(long)]
    right: bool,
    /// Left padding in image pixels; negative values count as 0
    #[arg(long, value_name = "PIXELS", allow_negative_numbers = true)]
    left_padding: Option<i64>,
    /// Right padding in image pixels
    #[arg(long, value_name = "PIXELS", allow_negative_numbers = true)]
    right_padding: Option<i64>,
    /// Top justify the cropped images
    #[arg(long)]
    top: bool,
    /// Bottom justify the cropped images
    #[arg(long)]
    bottom: bool,
    /// Top padding in image pixels
    #[arg(long, value_name = "PIXELS", allow_negative_numbers = true)]
    top_padding: Option<i64>,
    /// Bottom padding in image pixels
    #[arg(long, value_name = "PIXELS", allow_negative_numbers = true)]
    bottom_padding: Option<i64>,
    /// Do not resize the output images, crop only
    #[arg(long)]
    crop_only: bool,
}

fn justify(near: bool, far: bool, near_padding: Option<i64>, far_padding: Option<i64>) -> Justify {
    match (near, far, near_padding, far_padding) {
        (true, ..) => Justify::Near,
        (_, true, ..) => Justify::Far,
        (_, _, Some(padding), _) => Justify::NearPadding(padding),
        (_, _, _, Some(padding)) => Justify::FarPadding(padding),
        _ => Justify::Center,
    }
}

fn terminal_width() -> u32 {
    terminal_size::terminal_size()
        .map(|(width, _)| u32::from(width.0))
        .unwrap_or(wallsplit::preview::DEFAULT_TERMINAL_WIDTH)
}

fn main() -> Result<(), SplitError> {
    let args = Args::parse();
    let verbosity = Verbosity::from_flags(args.quiet, args.verbose);

    env_logger::Builder::new()
        .filter_level(verbosity.level_filter())
        .parse_default_env()
        .init();

    let options = SplitOptions {
        horizontal: justify(args.left, args.right, args.left_padding, args.right_padding),
        vertical: justify(args.top, args.bottom, args.top_padding, args.bottom_padding),
        crop_only: args.crop_only,
        verbosity,
    };

    let monitors = load_monitors(&args.monitor)?;
    let splitter = Splitter::new(monitors)
        .with_options(options)
        .with_terminal_width(terminal_width());

    let mut stdout = std::io::stdout().lock();
    splitter.print_layout(&mut stdout)?;
    splitter.split_all(&args.images, &mut stdout)?;
    Ok(())
}
