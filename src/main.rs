use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use milkify::models::{AppConfig, FilterOverrides};
use milkify::services::{apply_file, FilterRequest};
use milk_remap::Style;

#[derive(Parser)]
#[command(name = "milkify")]
#[command(about = "Milkify - recolor images into the 3-color milk/VHS palettes")]
struct Cli {
    /// YAML file with filter presets (overrides MILKIFY_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Recolor a PNG file
    Apply {
        /// Source PNG file
        #[arg(short, long)]
        input: PathBuf,

        /// Destination PNG file
        #[arg(short, long)]
        output: PathBuf,

        /// Palette style: "outside" or "inside"
        #[arg(short, long)]
        style: Option<Style>,

        /// Enable puntilism (70/30 stochastic choice in blend bands)
        #[arg(short, long, conflicts_with = "no_dither")]
        dither: bool,

        /// Disable puntilism even if the preset enables it
        #[arg(long)]
        no_dither: bool,

        /// Fixed dither seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// Named preset from the configuration file
        #[arg(short, long)]
        preset: Option<String>,

        /// Process rows on a single thread
        #[arg(long)]
        sequential: bool,

        /// Re-compress the output with oxipng
        #[arg(long)]
        optimize: bool,
    },
    /// Show both palettes and their band thresholds
    Palettes,
    /// List presets from the configuration file
    Presets,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Apply {
            input,
            output,
            style,
            dither,
            no_dither,
            seed,
            preset,
            sequential,
            optimize,
        }) => {
            init_logging("milkify=info");
            let overrides = FilterOverrides {
                preset,
                style,
                dither: match (dither, no_dither) {
                    (true, _) => Some(true),
                    (_, true) => Some(false),
                    _ => None,
                },
                seed,
                parallel: sequential.then_some(false),
            };
            run_apply_command(cli.config, input, output, overrides, optimize)
        }
        Some(Commands::Palettes) => {
            run_palettes_command();
            Ok(())
        }
        Some(Commands::Presets) => {
            init_logging("milkify=warn");
            run_presets_command(cli.config);
            Ok(())
        }
        None => {
            run_status_command();
            Ok(())
        }
    }
}

fn init_logging(default_filter: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}

/// `--config` wins over `MILKIFY_CONFIG`
fn config_path(cli_path: Option<PathBuf>) -> Option<PathBuf> {
    cli_path.or_else(|| std::env::var("MILKIFY_CONFIG").ok().map(PathBuf::from))
}

fn run_apply_command(
    config: Option<PathBuf>,
    input: PathBuf,
    output: PathBuf,
    overrides: FilterOverrides,
    optimize: bool,
) -> anyhow::Result<()> {
    let config = AppConfig::load(config_path(config).as_deref());
    let settings = config.resolve(&overrides)?;

    let report = apply_file(&FilterRequest {
        input,
        output: output.clone(),
        settings,
        optimize,
    })?;

    let total: usize = report.palette_counts.iter().sum();
    println!(
        "Milkified {} ({}x{}, {} style{}, {} bytes)",
        output.display(),
        report.width,
        report.height,
        report.settings.style,
        if report.settings.dither {
            ", dithered"
        } else {
            ""
        },
        report.bytes_written
    );
    if total > 0 {
        for (label, count) in ["dark", "mid", "bright"]
            .iter()
            .zip(report.palette_counts.iter())
        {
            println!(
                "  {label:<6} {count:>10} px ({:.1}%)",
                *count as f64 * 100.0 / total as f64
            );
        }
    }

    Ok(())
}

fn run_palettes_command() {
    for style in Style::ALL {
        let t = style.thresholds();
        println!("{style}:");
        for (i, color) in style.palette().iter().enumerate() {
            println!(
                "  P[{i}] {}  ({:>3}, {:>3}, {:>3})",
                color.to_hex(),
                color.r,
                color.g,
                color.b
            );
        }
        println!("  bands: 25 / 70 / {} / {} / 230\n", t.mid_low, t.mid_high);
    }
}

fn run_presets_command(config: Option<PathBuf>) {
    let path = config_path(config);
    let config = AppConfig::load(path.as_deref());

    if config.presets.is_empty() {
        println!("No presets configured.");
        return;
    }

    for name in config.preset_names() {
        let Some(preset) = config.get_preset(name) else {
            continue;
        };
        let marker = if config.default_preset.as_deref() == Some(name) {
            " (default)"
        } else {
            ""
        };
        println!("{name}{marker}");
        if let Some(style) = preset.style {
            println!("  style:    {style}");
        }
        if let Some(dither) = preset.dither {
            println!("  dither:   {dither}");
        }
        if let Some(seed) = preset.seed {
            println!("  seed:     {seed}");
        }
        if let Some(parallel) = preset.parallel {
            println!("  parallel: {parallel}");
        }
    }
}

fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let config_file = std::env::var("MILKIFY_CONFIG").ok();

    println!("Milkify v{VERSION}");
    println!("Recolor images into the 3-color milk/VHS palettes\n");

    println!("Environment Variables:");
    println!(
        "  MILKIFY_CONFIG = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );

    println!("\nCommands:");
    println!("  milkify apply -i IN.png -o OUT.png [--style inside] [--dither]");
    println!("  milkify palettes");
    println!("  milkify presets");
}
