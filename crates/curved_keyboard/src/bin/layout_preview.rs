use anyhow::Result;
use clap::{Parser, ValueEnum};
use curved_keyboard::{
    KeySet, KeyboardConfig,
    export::{export_placements_to_csv, placements_to_json},
};
use log::{info, warn};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Table,
    Csv,
    Json,
}

#[derive(Parser)]
#[command(author, version, about = "Print the curved keyboard layout", long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short = 'c', long = "config", default_value = "config/default.toml")]
    config: PathBuf,

    /// Override the configured curvature (0 = flat, 1 = tightest)
    #[arg(short = 'k', long = "curvature")]
    curvature: Option<f64>,

    /// Label set to show: lower, upper or special
    #[arg(short = 's', long = "keyset", default_value = "lower")]
    keyset: KeySet,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum, default_value = "table")]
    format: Format,

    /// Directory for csv output
    #[arg(short = 'o', long = "output-dir", default_value = "figs")]
    output_dir: PathBuf,

    /// Quads used for the space bar strip
    #[arg(long = "space-segments", default_value_t = 8)]
    space_segments: usize,
}

fn main() -> Result<()> {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
    let args = Args::parse();

    let mut config = if args.config.exists() {
        KeyboardConfig::load_from_file(&args.config)?
    } else {
        warn!(
            "Config file not found: {}, using default settings",
            args.config.display()
        );
        KeyboardConfig::default()
    };

    if let Some(curvature) = args.curvature {
        config.layout.curvature = curvature;
        config.validate()?;
    }

    let layout = config.build_layout()?;
    let placements = layout.placements();
    let labels = config.labels.table(args.keyset);

    info!(
        "curvature {:.3} (effective {:.3}), distance to center {:.4}, angle step {:.3} deg",
        layout.curvature(),
        layout.effective_curvature(),
        layout.distance_to_center(),
        layout.angle_step_deg()
    );

    match args.format {
        Format::Table => {
            println!(
                "{:>5} {:>3} {:<10} {:>9} {:>9} {:>9} {:>9}",
                "index", "row", "label", "x", "y", "z", "yaw"
            );
            for p in &placements {
                let label = labels.get(p.index).map_or("", String::as_str);
                println!(
                    "{:>5} {:>3} {:<10} {:>9.4} {:>9.4} {:>9.4} {:>9.2}",
                    p.index,
                    p.row,
                    format!("{label:?}"),
                    p.position.x,
                    p.position.y,
                    p.position.z,
                    p.yaw_deg
                );
            }

            let strip = layout.space_bar_strip(args.space_segments)?;
            info!(
                "space bar strip: {} vertices, {} triangles",
                strip.vertices.len(),
                strip.triangle_count()
            );
        }
        Format::Csv => {
            let path = export_placements_to_csv(&placements, labels, Some(&args.output_dir))?;
            info!("Layout saved to: {}", path.display());
        }
        Format::Json => {
            println!("{}", placements_to_json(&placements, labels)?);
        }
    }

    Ok(())
}
