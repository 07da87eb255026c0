use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "sponsorboard", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the sponsor document in one or more formats.
    Render(RenderArgs),
    /// Print the merged all-time sponsor list as JSON.
    Aggregate(AggregateArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Sponsorship records (JSON array).
    #[arg(long)]
    sponsors: PathBuf,

    /// Render config JSON; defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output directory.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Output file stem.
    #[arg(long, default_value = "sponsors")]
    name: String,

    /// Output formats.
    #[arg(long, value_enum, value_delimiter = ',', default_value = "svg")]
    format: Vec<OutputFormat>,
}

#[derive(Parser, Debug)]
struct AggregateArgs {
    /// Sponsorship records (JSON array).
    #[arg(long)]
    sponsors: PathBuf,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Svg,
    Png,
    Webp,
    Json,
}

impl OutputFormat {
    fn extension(self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Png => "png",
            Self::Webp => "webp",
            Self::Json => "json",
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Aggregate(args) => cmd_aggregate(args),
    }
}

fn read_sponsors_json(path: &Path) -> anyhow::Result<Vec<sponsorboard::Sponsorship>> {
    let f = File::open(path).with_context(|| format!("open sponsors '{}'", path.display()))?;
    let r = BufReader::new(f);
    let records: Vec<sponsorboard::Sponsorship> =
        serde_json::from_reader(r).with_context(|| "parse sponsors JSON")?;
    tracing::info!(records = records.len(), path = %path.display(), "loaded sponsors");
    Ok(records)
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let records = read_sponsors_json(&args.sponsors)?;
    let config = match &args.config {
        Some(path) => sponsorboard::RenderConfig::from_path(path)?,
        None => sponsorboard::RenderConfig::default(),
    };

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    let svg = sponsorboard::render_document(&records, &config)?;

    for format in &args.format {
        let out = args
            .out_dir
            .join(format!("{}.{}", args.name, format.extension()));
        let bytes = match format {
            OutputFormat::Svg => svg.clone().into_bytes(),
            OutputFormat::Png => sponsorboard::rasterize(&svg, sponsorboard::RasterFormat::Png)?,
            OutputFormat::Webp => {
                sponsorboard::rasterize(&svg, sponsorboard::RasterFormat::WebP)?
            }
            OutputFormat::Json => {
                serde_json::to_vec_pretty(&records).with_context(|| "serialize sponsors JSON")?
            }
        };
        std::fs::write(&out, bytes).with_context(|| format!("write '{}'", out.display()))?;
        eprintln!("wrote {}", out.display());
    }
    Ok(())
}

fn cmd_aggregate(args: AggregateArgs) -> anyhow::Result<()> {
    let records = read_sponsors_json(&args.sponsors)?;
    let merged = sponsorboard::aggregate(&records);
    let json = serde_json::to_string_pretty(&merged).with_context(|| "serialize aggregate JSON")?;
    println!("{json}");
    Ok(())
}
