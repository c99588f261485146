use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use colorbook::models::AppConfig;
use colorbook::services::{load_palette, ColorReport, PagePipeline};
use lineart::{DistanceMetric, MatchResult};

#[derive(Parser)]
#[command(name = "colorbook")]
#[command(about = "Colorbook - turn photos into printable line art with matched color palettes")]
struct Cli {
    /// Path to config.yaml (defaults to $CONFIG_FILE)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Trace a photo into black-on-white line art
    Lineart {
        /// Input image (PNG or JPEG)
        input: PathBuf,

        /// Output PNG file path
        #[arg(short, long)]
        output: PathBuf,

        /// Edge intensity (recommended 30-38; higher keeps fainter edges)
        #[arg(short, long)]
        intensity: Option<i32>,

        /// Maximum output width in pixels
        #[arg(long)]
        max_width: Option<u32>,
    },
    /// Print the dominant colors of a photo
    Colors {
        /// Input image (PNG or JPEG)
        input: PathBuf,

        /// Number of colors to extract
        #[arg(short, long)]
        k: Option<usize>,

        /// Fixed seed for reproducible clustering
        #[arg(long)]
        seed: Option<u64>,

        /// Palette JSON file to match the colors against
        #[arg(short, long)]
        palette: Option<PathBuf>,

        /// Matches per color (1-5)
        #[arg(long)]
        top_k: Option<usize>,

        /// Distance metric: de76 or de2000
        #[arg(long)]
        metric: Option<DistanceMetric>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Match hex colors against a palette
    Match {
        /// Colors to match (e.g. "#336699")
        #[arg(required = true)]
        colors: Vec<String>,

        /// Palette JSON file
        #[arg(short, long)]
        palette: Option<PathBuf>,

        /// Matches per color (1-5)
        #[arg(long)]
        top_k: Option<usize>,

        /// Distance metric: de76 or de2000
        #[arg(long)]
        metric: Option<DistanceMetric>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        run_status_command(cli.config.as_deref());
        return Ok(());
    };

    // Minimal logging for CLI
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "colorbook=warn,lineart=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let config_path = config_path(cli.config.as_deref());
    let mut config = AppConfig::load(config_path.as_deref());

    match command {
        Commands::Lineart {
            input,
            output,
            intensity,
            max_width,
        } => {
            if let Some(intensity) = intensity {
                config.edge.intensity = intensity;
            }
            if let Some(max_width) = max_width {
                config.edge.max_output_width = max_width;
            }
            run_lineart_command(config, &input, &output)
        }
        Commands::Colors {
            input,
            k,
            seed,
            palette,
            top_k,
            metric,
            json,
        } => {
            if let Some(k) = k {
                config.colors.k = k;
            }
            if seed.is_some() {
                config.colors.seed = seed;
            }
            apply_matching_overrides(&mut config, palette, top_k, metric);
            run_colors_command(config, &input, json)
        }
        Commands::Match {
            colors,
            palette,
            top_k,
            metric,
            json,
        } => {
            apply_matching_overrides(&mut config, palette, top_k, metric);
            run_match_command(config, &colors, json)
        }
    }
}

/// `--config` wins over `CONFIG_FILE`
fn config_path(flag: Option<&Path>) -> Option<PathBuf> {
    flag.map(Path::to_path_buf)
        .or_else(|| std::env::var("CONFIG_FILE").ok().map(PathBuf::from))
}

fn apply_matching_overrides(
    config: &mut AppConfig,
    palette: Option<PathBuf>,
    top_k: Option<usize>,
    metric: Option<DistanceMetric>,
) {
    if palette.is_some() {
        config.matching.palette = palette;
    }
    if let Some(top_k) = top_k {
        config.matching.top_k = top_k;
    }
    if let Some(metric) = metric {
        config.matching.metric = metric;
    }
}

/// Build the pipeline, loading the configured palette if any
fn build_pipeline(config: AppConfig) -> anyhow::Result<PagePipeline> {
    let palette = match config.matching.palette.as_deref() {
        Some(path) => Some(load_palette(path)?),
        None => None,
    };
    let pipeline = PagePipeline::new(config);
    Ok(match palette {
        Some(palette) => pipeline.with_palette(palette),
        None => pipeline,
    })
}

fn run_lineart_command(config: AppConfig, input: &Path, output: &Path) -> anyhow::Result<()> {
    let pipeline = PagePipeline::new(config);
    let summary = pipeline.render_file(input, output)?;

    println!(
        "Wrote {} ({}x{}, {} bytes, {:.1}% ink)",
        output.display(),
        summary.width,
        summary.height,
        summary.png_bytes,
        summary.ink_ratio * 100.0
    );
    Ok(())
}

fn run_colors_command(config: AppConfig, input: &Path, json: bool) -> anyhow::Result<()> {
    let pipeline = build_pipeline(config)?;
    let report = pipeline.analyze_file(input)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}

fn run_match_command(config: AppConfig, colors: &[String], json: bool) -> anyhow::Result<()> {
    if config.matching.palette.is_none() {
        anyhow::bail!("no palette given: use --palette FILE or set matching.palette in the config");
    }
    let pipeline = build_pipeline(config)?;
    let results = pipeline.match_colors(colors)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        for result in &results {
            print_matches(result);
        }
    }
    Ok(())
}

fn print_report(report: &ColorReport) {
    if report.matches.is_empty() {
        for color in &report.colors {
            println!("{color}");
        }
        return;
    }
    for result in &report.matches {
        print_matches(result);
    }
}

fn print_matches(result: &MatchResult) {
    println!("{}", result.source);
    for m in &result.matches {
        println!(
            "  {:>6}  {:<24} {}  ΔE {:.2}",
            m.entry.id, m.entry.name, m.entry.hex, m.distance
        );
    }
}

/// Print status information when no command is given
fn run_status_command(flag: Option<&Path>) {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let config_file = std::env::var("CONFIG_FILE").ok();
    let config_path = config_path(flag);

    // Header
    println!("Colorbook v{VERSION}");
    println!("Printable line art with matched color palettes\n");

    // Environment variables section
    println!("Environment Variables:");
    println!(
        "  CONFIG_FILE = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );
    println!(
        "  RUST_LOG    = {}",
        std::env::var("RUST_LOG")
            .ok()
            .as_deref()
            .unwrap_or("colorbook=warn,lineart=warn (default)")
    );

    // Config source section
    let config_source = match config_path.as_deref() {
        Some(path) if path.exists() => path.display().to_string(),
        Some(path) => format!("{} (file not found, using defaults)", path.display()),
        None => "defaults".to_string(),
    };
    println!("\nConfig:  {config_source}");

    let config = AppConfig::load(config_path.as_deref());
    println!("\nSettings:");
    println!("  edge.intensity        = {}", config.edge.intensity);
    println!("  edge.max_output_width = {}", config.edge.max_output_width);
    println!("  colors.k              = {}", config.colors.k);
    println!("  colors.max_sample_width = {}", config.colors.max_sample_width);
    println!(
        "  colors.seed           = {}",
        config
            .colors
            .seed
            .map_or_else(|| "(random)".to_string(), |s| s.to_string())
    );
    println!("  matching.top_k        = {}", config.matching.top_k);
    println!("  matching.metric       = {:?}", config.matching.metric);
    println!(
        "  matching.palette      = {}",
        config
            .matching
            .palette
            .as_deref()
            .map_or_else(|| "(not set)".to_string(), |p| p.display().to_string())
    );

    println!("\nCommands:");
    println!("  colorbook lineart <INPUT> -o <OUTPUT>   Trace a photo into line art");
    println!("  colorbook colors <INPUT> [-p PALETTE]   Dominant colors (and matches)");
    println!("  colorbook match <HEX>... -p PALETTE     Match colors against a palette");
    println!("\nRun 'colorbook --help' for more options.");
}
