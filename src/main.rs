#![allow(non_snake_case)]

mod app;
mod components;
mod context;
mod dialog;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use studio_core::{default_download_dir, find_palette, DEFAULT_PALETTE_ID};

/// Startup options, set once from the command line
static LAUNCH: OnceLock<LaunchOptions> = OnceLock::new();

/// Resolved startup options
#[derive(Clone, Debug)]
pub struct LaunchOptions {
    /// Directory exported PNGs are written to (and where the save dialog opens)
    pub out_dir: PathBuf,
    /// Ask for a destination with a native save dialog
    pub ask: bool,
    /// Palette selected when the editor opens
    pub palette: String,
}

impl Default for LaunchOptions {
    fn default() -> Self {
        Self {
            out_dir: default_download_dir(),
            ask: false,
            palette: DEFAULT_PALETTE_ID.to_string(),
        }
    }
}

/// Get the launch options (set from command line or default)
pub fn launch_options() -> LaunchOptions {
    LAUNCH.get().cloned().unwrap_or_default()
}

/// Product Image Studio - marketing cards for a product
#[derive(Parser, Debug)]
#[command(name = "product-studio")]
#[command(about = "Product Image Studio - design and export product marketing cards")]
struct Args {
    /// Directory exported PNGs are saved to (default: your Downloads folder)
    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// Pick the destination of every export with a save dialog
    #[arg(short, long)]
    ask: bool,

    /// Palette selected at startup (aurora, nebula, sunset, zen)
    #[arg(short, long)]
    palette: Option<String>,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let palette = match args.palette {
        // Unknown ids resolve (with a warning) to the first palette
        Some(id) => find_palette(&id).id.to_string(),
        None => DEFAULT_PALETTE_ID.to_string(),
    };
    let options = LaunchOptions {
        out_dir: args.out_dir.unwrap_or_else(default_download_dir),
        ask: args.ask,
        palette,
    };

    tracing::info!(
        out_dir = %options.out_dir.display(),
        ask = options.ask,
        palette = %options.palette,
        "Starting Product Image Studio"
    );
    let _ = LAUNCH.set(options);

    // Editor on the left, three cards side by side on the right
    let window_width = 1480.0;
    let window_height = 920.0;

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Product Image Studio")
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop().with_cfg(config).launch(app::App);
}
