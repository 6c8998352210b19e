//! Product Image Studio CLI
//!
//! Renders the studio's product cards without the desktop app.
//!
//! ## Usage
//!
//! ```bash
//! # List the palettes
//! studio palettes
//!
//! # Print the default brief as JSON (a starting point for --brief)
//! studio brief > lamp.json
//!
//! # Render all three layouts into ./out
//! studio render --name "Orbit Desk Lamp" --palette nebula --out-dir out
//!
//! # Render one layout from a brief, overriding the call to action
//! studio render --brief lamp.json --layout compact --cta "Pre-order now"
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use studio_core::{
    render_card, DirectorySink, Exporter, FormState, LayoutVariant, RasterOptions, ResvgRasterizer,
    SurfaceRegistry, PALETTES,
};
use tracing::info;

/// Product Image Studio - marketing cards from the command line
#[derive(Parser)]
#[command(name = "studio")]
#[command(version = "0.1.0")]
#[command(about = "Product Image Studio - marketing cards from the command line")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the available palettes
    Palettes,

    /// Print the default brief as JSON
    Brief,

    /// Render cards to PNG
    Render(RenderArgs),
}

#[derive(clap::Args)]
struct RenderArgs {
    /// JSON brief with the product copy; flags override its fields
    #[arg(short, long)]
    brief: Option<PathBuf>,

    /// Product name
    #[arg(short, long)]
    name: Option<String>,

    /// Tagline
    #[arg(short, long)]
    tagline: Option<String>,

    /// Product story
    #[arg(short, long)]
    description: Option<String>,

    /// Call to action
    #[arg(long)]
    cta: Option<String>,

    /// Signature highlight (repeat for several; replaces the brief's list)
    #[arg(short, long = "feature")]
    features: Vec<String>,

    /// Palette id
    #[arg(short, long)]
    palette: Option<String>,

    /// Layout to render (repeatable; default: all three)
    #[arg(short, long = "layout")]
    layouts: Vec<LayoutVariant>,

    /// Output directory
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// Output pixels per card pixel (0.25 to 8)
    #[arg(short, long, default_value_t = 2.0, value_parser = parse_scale)]
    scale: f32,
}

const SCALE_RANGE: std::ops::RangeInclusive<f32> = 0.25..=8.0;

fn parse_scale(s: &str) -> Result<f32, String> {
    let scale: f32 = s.parse().map_err(|_| format!("`{s}` is not a number"))?;
    if SCALE_RANGE.contains(&scale) {
        Ok(scale)
    } else {
        Err(format!(
            "scale must be between {} and {}",
            SCALE_RANGE.start(),
            SCALE_RANGE.end()
        ))
    }
}

impl RenderArgs {
    /// The brief (or defaults) with command-line overrides applied
    fn form(&self) -> Result<FormState> {
        let mut form = match &self.brief {
            Some(path) => FormState::load(path).with_context(|| format!("Failed to read brief {}", path.display()))?,
            None => FormState::default(),
        };

        if let Some(name) = &self.name {
            form.set_product_name(name.as_str());
        }
        if let Some(tagline) = &self.tagline {
            form.set_tagline(tagline.as_str());
        }
        if let Some(description) = &self.description {
            form.set_description(description.as_str());
        }
        if let Some(cta) = &self.cta {
            form.set_cta(cta.as_str());
        }
        if !self.features.is_empty() {
            form.features = self.features.clone();
        }
        if let Some(palette) = &self.palette {
            form.set_palette(palette.as_str());
        }
        Ok(form)
    }

    fn layouts(&self) -> Vec<LayoutVariant> {
        if self.layouts.is_empty() {
            LayoutVariant::ALL.to_vec()
        } else {
            self.layouts.clone()
        }
    }
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

async fn render(args: RenderArgs) -> Result<()> {
    let form = args.form()?;
    let palette = form.palette();
    let layouts = args.layouts();

    let mut surfaces = SurfaceRegistry::new();
    for layout in &layouts {
        surfaces.mount(&render_card(&form, palette, *layout));
    }

    let exporter = Exporter::new(
        Arc::new(ResvgRasterizer::new()),
        Arc::new(DirectorySink::new(&args.out_dir)),
    )
    .with_options(RasterOptions {
        pixel_ratio: args.scale,
        ..RasterOptions::default()
    });

    info!(
        product = %form.product_name,
        palette = palette.id,
        layouts = layouts.len(),
        "rendering"
    );

    for layout in layouts {
        let outcome = exporter
            .export_layout(&surfaces, layout, &form.product_name)
            .await
            .with_context(|| format!("Failed to export {} card", layout))?;
        if let Some(outcome) = outcome {
            println!("{}", outcome.path.display());
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    match cli.command {
        Commands::Palettes => {
            println!("Palettes ({}):", PALETTES.len());
            println!();
            for (i, palette) in PALETTES.iter().enumerate() {
                let default = if i == 0 { " [default]" } else { "" };
                println!("  {:<8} {:<16} accent {}{}", palette.id, palette.name, palette.accent, default);
            }
        }

        Commands::Brief => {
            println!("{}", FormState::default().to_json()?);
        }

        Commands::Render(args) => render(args).await?,
    }

    Ok(())
}
