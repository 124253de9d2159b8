//! xaml-colors - CLI tool to decode, adjust and re-encode hex colors.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use xaml_colors::{
    darken, detect_layout, from_hex, from_hex_rgba, lighten, to_hex, to_hex_with_alpha,
    with_alpha, with_opacity, Color,
};

/// Decode a hex color, apply adjustments and print the result.
#[derive(Parser, Debug)]
#[command(name = "xaml-colors")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Hex color (#RGB, #RRGGBB or #AARRGGBB)
    color: String,

    /// Decode 8-digit input as #RRGGBBAA instead of #AARRGGBB
    #[arg(long)]
    rgba: bool,

    /// Set alpha (0.0-1.0)
    #[arg(long, conflicts_with = "opacity", allow_negative_numbers = true)]
    alpha: Option<f64>,

    /// Set opacity percentage (0-100)
    #[arg(long, allow_negative_numbers = true)]
    opacity: Option<i32>,

    /// Lighten toward white by this factor (0.0-1.0)
    #[arg(long)]
    lighten: Option<f64>,

    /// Darken toward black by this factor (0.0-1.0)
    #[arg(long)]
    darken: Option<f64>,

    /// Print #RRGGBB without the alpha byte
    #[arg(long)]
    no_alpha: bool,

    /// Output the resulting color as JSON
    #[arg(long)]
    json: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let color = decode(&args).with_context(|| format!("Failed to decode '{}'", args.color))?;
    debug!("Decoded: {:?}", color);

    let color = adjust(color, &args);

    if args.json {
        let json = serde_json::to_string_pretty(&color)?;
        println!("{}", json);
        return Ok(());
    }

    let hex = if args.no_alpha {
        if !color.is_opaque() {
            warn!("Dropping alpha {:.3} from output", color.alpha);
        }
        to_hex(color)
    } else {
        to_hex_with_alpha(color)
    };
    println!("{}", hex);

    Ok(())
}

fn decode(args: &Args) -> xaml_colors::Result<Color> {
    if args.rgba {
        info!("Decoding {} as RRGGBBAA", args.color);
        return from_hex_rgba(&args.color);
    }
    let layout = detect_layout(&args.color)?;
    let alpha_note = if layout.has_alpha() { "with alpha" } else { "opaque" };
    info!("Decoding {} as {} ({})", args.color, layout, alpha_note);
    from_hex(&args.color)
}

fn adjust(mut color: Color, args: &Args) -> Color {
    if let Some(alpha) = args.alpha {
        color = with_alpha(color, alpha);
    }
    if let Some(opacity) = args.opacity {
        color = with_opacity(color, opacity);
    }
    if let Some(factor) = args.lighten {
        color = lighten(color, factor);
    }
    if let Some(factor) = args.darken {
        color = darken(color, factor);
    }
    color
}
