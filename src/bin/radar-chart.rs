use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use radar_chart::{
    ChartSink, FontBook, ImageEncoding, RadarChart, ServiceConfig, Transfer, scores_from_slice,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "radar-chart", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP chart service.
    Serve(ServeArgs),
    /// Render one chart from a JSON score file.
    Render(RenderArgs),
}

#[derive(Parser, Debug)]
struct ServeArgs {
    /// Service configuration JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Listen address, overrides the config file.
    #[arg(long)]
    bind: Option<String>,

    /// Artifact directory, overrides the config file.
    #[arg(long)]
    artifact_dir: Option<PathBuf>,

    /// Base URL used in reference-mode responses.
    #[arg(long)]
    public_base_url: Option<String>,

    /// Default transfer mode (direct or reference).
    #[arg(long)]
    transfer: Option<Transfer>,

    /// Delete stored charts older than this many seconds.
    #[arg(long)]
    ttl_secs: Option<u64>,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input JSON object of trait scores.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output image path.
    #[arg(long)]
    out: PathBuf,

    /// Output encoding; inferred from the output extension when omitted.
    #[arg(long)]
    format: Option<ImageEncoding>,

    /// Service configuration JSON whose `style` and `font_dirs` are used.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Serve(args) => cmd_serve(args),
        Command::Render(args) => cmd_render(args),
    }
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<ServiceConfig> {
    match path {
        Some(p) => ServiceConfig::from_path(p)
            .with_context(|| format!("load config '{}'", p.display())),
        None => Ok(ServiceConfig::default()),
    }
}

fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let mut config = load_config(args.config.as_ref())?;
    if let Some(bind) = args.bind {
        config.bind = bind;
    }
    if let Some(dir) = args.artifact_dir {
        config.artifact_dir = dir;
    }
    if let Some(base) = args.public_base_url {
        config.public_base_url = Some(base);
    }
    if let Some(transfer) = args.transfer {
        config.default_transfer = transfer;
    }
    if let Some(ttl) = args.ttl_secs {
        config.artifact_ttl_secs = Some(ttl);
    }
    config.validate()?;

    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("start tokio runtime")?;
    rt.block_on(radar_chart::server::run(config))
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let config = load_config(args.config.as_ref())?;
    let raw = std::fs::read(&args.in_path)
        .with_context(|| format!("read scores '{}'", args.in_path.display()))?;
    let scores = scores_from_slice(&raw)?;

    let encoding = match args.format {
        Some(e) => e,
        None => args
            .out
            .extension()
            .and_then(|e| e.to_str())
            .and_then(ImageEncoding::from_extension)
            .unwrap_or_default(),
    };

    let chart = RadarChart::new(config.style.clone(), FontBook::system(&config.font_dirs))?;
    let artifact = chart.generate(&scores, encoding, &ChartSink::in_memory())?;

    if let Some(parent) = args.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&args.out, &artifact.bytes)
        .with_context(|| format!("write chart '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}
