use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use serde::Deserialize;
use sprite_packer_core::config::SortOrder;
use sprite_packer_core::{Layout, PackerConfig, Size, pack_sizes, parse_listing};
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(
    name = "sprite-packer",
    about = "Pack WxH sprite sizes into fixed-size sheets",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action=ArgAction::Count, global=true, help_heading = "Logging")]
    verbose: u8,
    /// Quiet mode (overrides verbose)
    #[arg(
        short,
        long,
        default_value_t = false,
        global = true,
        help_heading = "Logging"
    )]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Read sizes and print where each one goes
    Pack(PackArgs),
    /// Pack random sizes and print time + occupancy
    Bench(BenchArgs),
}

#[derive(Parser, Debug, Clone)]
struct PackArgs {
    // Input/Output
    /// Input file with WxH tokens (optionally preceded by a count); stdin when omitted or "-"
    #[arg(help_heading = "Input/Output")]
    input: Option<PathBuf>,
    /// Write the listing here instead of stdout
    #[arg(short, long, help_heading = "Input/Output")]
    out: Option<PathBuf>,
    /// YAML config file path (overrides sheet options)
    #[arg(long, help_heading = "Input/Output")]
    config: Option<PathBuf>,

    // Layout
    /// Sheet width
    #[arg(long, default_value_t = 1024, help_heading = "Layout")]
    sheet_width: u32,
    /// Sheet height
    #[arg(long, default_value_t = 1024, help_heading = "Layout")]
    sheet_height: u32,
    /// Sort order: height_desc|area_desc|max_side_desc|width_desc|none
    #[arg(long, default_value = "height_desc", help_heading = "Layout")]
    sort_order: String,

    // Export
    /// Output format: text | json-array | json (alias) | json-hash
    #[arg(long, value_parser = ["text", "json-array", "json", "json-hash"], default_value = "text", help_heading = "Export")]
    format: String,
    /// Export packing stats (JSON) to this file
    #[arg(long, help_heading = "Export")]
    export_stats: Option<PathBuf>,
    /// Print the merged configuration (after CLI/YAML) and exit
    #[arg(long, default_value_t = false, help_heading = "Export")]
    print_config: bool,
    /// Output format for --print-config: json|yaml
    #[arg(long, default_value = "json", value_parser = ["json", "yaml"], help_heading = "Export")]
    print_config_format: String,
}

#[derive(Parser, Debug, Clone)]
struct BenchArgs {
    /// Number of random sizes
    #[arg(long, default_value_t = 1000)]
    count: usize,
    /// Smallest side length
    #[arg(long, default_value_t = 8)]
    min_size: u32,
    /// Largest side length
    #[arg(long, default_value_t = 128)]
    max_size: u32,
    /// RNG seed
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// Sheet width
    #[arg(long, default_value_t = 1024)]
    sheet_width: u32,
    /// Sheet height
    #[arg(long, default_value_t = 1024)]
    sheet_height: u32,
    /// Sort order: height_desc|area_desc|max_side_desc|width_desc|none
    #[arg(long, default_value = "height_desc")]
    sort_order: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing_with_level(cli.quiet, cli.verbose);
    match &cli.command {
        Commands::Pack(args) => run_pack(args),
        Commands::Bench(b) => run_bench(b),
    }
}

fn run_pack(cli: &PackArgs) -> anyhow::Result<()> {
    let base = PackerConfig {
        sheet_width: cli.sheet_width,
        sheet_height: cli.sheet_height,
        sort_order: parse_sort_order(&cli.sort_order)?,
    };
    // Config file values win over flags
    let cfg = if let Some(path) = &cli.config {
        let file = fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let y: YamlConfig = serde_yaml::from_str(&file)
            .with_context(|| format!("parse config {}", path.display()))?;
        y.into_packer_config(base)?
    } else {
        base
    };

    if cli.print_config {
        match cli.print_config_format.as_str() {
            "yaml" => println!("{}", serde_yaml::to_string(&cfg)?),
            _ => println!("{}", serde_json::to_string_pretty(&cfg)?),
        }
        return Ok(());
    }

    let text = read_input(cli.input.as_deref())?;
    let sizes = parse_listing(&text)?;
    info!(count = sizes.len(), "read sizes");

    let start = Instant::now();
    let layout = pack_sizes(&sizes, cfg)?;
    let stats = layout.stats();
    info!(
        sheets = stats.num_sheets,
        used_area = stats.used_area,
        total_area = stats.total_sheet_area,
        occupancy = format!("{:.2}%", stats.occupancy * 100.0),
        elapsed = %fmt_dur(start.elapsed()),
        "packed"
    );

    let rendered = render(&layout, &cli.format)?;
    match &cli.out {
        Some(path) => {
            fs::write(path, rendered).with_context(|| format!("write {}", path.display()))?;
            info!(?path, sheets = layout.sheets.len(), "listing written");
        }
        None => print!("{}", rendered),
    }

    if let Some(stats_path) = &cli.export_stats {
        let value = serde_json::json!({
            "sheets": stats.num_sheets,
            "placements": stats.num_placements,
            "used_area": stats.used_area,
            "total_area": stats.total_sheet_area,
            "occupancy": stats.occupancy,
        });
        fs::write(stats_path, serde_json::to_string_pretty(&value)?)
            .with_context(|| format!("write {}", stats_path.display()))?;
        info!(?stats_path, "stats exported");
    }
    Ok(())
}

fn render(layout: &Layout<usize>, format: &str) -> anyhow::Result<String> {
    Ok(match format {
        "text" => sprite_packer_core::to_text_listing(layout),
        // Accept "json" as an alias of "json-array"
        "json-array" | "json" => {
            serde_json::to_string_pretty(&sprite_packer_core::to_json_array(layout))? + "\n"
        }
        "json-hash" => {
            serde_json::to_string_pretty(&sprite_packer_core::to_json_hash(layout))? + "\n"
        }
        other => anyhow::bail!("unknown output format: {}", other),
    })
}

fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(p) if p != Path::new("-") => {
            fs::read_to_string(p).with_context(|| format!("read {}", p.display()))
        }
        _ => {
            let mut s = String::new();
            io::stdin()
                .read_to_string(&mut s)
                .context("read sizes from stdin")?;
            Ok(s)
        }
    }
}

fn run_bench(b: &BenchArgs) -> anyhow::Result<()> {
    use rand::{Rng, SeedableRng};
    if b.min_size == 0 || b.min_size > b.max_size {
        anyhow::bail!(
            "invalid size range: {}..={}",
            b.min_size,
            b.max_size
        );
    }
    let cfg = PackerConfig {
        sheet_width: b.sheet_width,
        sheet_height: b.sheet_height,
        sort_order: parse_sort_order(&b.sort_order)?,
    };
    let max_w = b.max_size.min(cfg.sheet_width).max(b.min_size);
    let max_h = b.max_size.min(cfg.sheet_height).max(b.min_size);
    let mut rng = rand::rngs::StdRng::seed_from_u64(b.seed);
    let sizes: Vec<Size> = (0..b.count)
        .map(|_| Size::new(rng.gen_range(b.min_size..=max_w), rng.gen_range(b.min_size..=max_h)))
        .collect();
    debug!(count = sizes.len(), seed = b.seed, "generated sizes");

    let start = Instant::now();
    let layout = pack_sizes(&sizes, cfg)?;
    let dur = start.elapsed();
    let stats = layout.stats();
    println!(
        "sheets={} placements={} occupancy={:.2}% time={}",
        stats.num_sheets,
        stats.num_placements,
        stats.occupancy * 100.0,
        fmt_dur(dur)
    );
    Ok(())
}

fn fmt_dur(d: Duration) -> String {
    let ms = d.as_secs_f64() * 1000.0;
    if ms >= 1.0 {
        format!("{:.1}ms", ms)
    } else {
        format!("{}us", d.as_micros())
    }
}

fn init_tracing_with_level(quiet: bool, verbose: u8) {
    let level = if quiet {
        "error".to_string()
    } else {
        match verbose {
            0 => "info".into(),
            1 => "debug".into(),
            _ => "trace".into(),
        }
    };
    // Listings go to stdout; keep logs on stderr.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(level)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

#[derive(Debug, Deserialize, Default)]
struct YamlConfig {
    sheet_width: Option<u32>,
    sheet_height: Option<u32>,
    /// Shorthand for a square sheet; explicit width/height take precedence.
    sheet_size: Option<u32>,
    sort_order: Option<String>,
}

impl YamlConfig {
    fn into_packer_config(self, mut cfg: PackerConfig) -> anyhow::Result<PackerConfig> {
        if let Some(v) = self.sheet_size {
            cfg.sheet_width = v;
            cfg.sheet_height = v;
        }
        if let Some(v) = self.sheet_width {
            cfg.sheet_width = v;
        }
        if let Some(v) = self.sheet_height {
            cfg.sheet_height = v;
        }
        if let Some(v) = self.sort_order {
            cfg.sort_order = parse_sort_order(&v)?;
        }
        Ok(cfg)
    }
}

fn parse_sort_order(s: &str) -> anyhow::Result<SortOrder> {
    match s.parse::<SortOrder>() {
        Ok(order) => Ok(order),
        Err(()) => anyhow::bail!("unknown sort order: {}", s),
    }
}
