use clap::Parser;
use divvy::render::{JsonRenderer, Renderer, TextRenderer};
use divvy::settings::{OutputMode, Settings};
use divvy::Session;
use std::path::PathBuf;
use tokio::io::BufReader;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Share apples into baskets and discover division with remainder
#[derive(Parser, Debug)]
#[command(name = "divvy")]
#[command(version)]
struct Args {
    /// Apples to share (clamped to 1-99)
    #[arg(long)]
    dividend: Option<i64>,

    /// Baskets to share into (clamped to 1-9)
    #[arg(long)]
    divisor: Option<i64>,

    /// JSON settings file
    #[arg(short, long)]
    settings: Option<PathBuf>,

    /// Emit one JSON snapshot per line instead of text
    #[arg(long)]
    json: bool,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    // stdout is the render surface, so logs go to stderr.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let mut settings = match &args.settings {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    if let Some(dividend) = args.dividend {
        settings.dividend = dividend;
    }
    if let Some(divisor) = args.divisor {
        settings.divisor = divisor;
    }
    if args.json {
        settings.output = OutputMode::Json;
    }

    let renderer: Box<dyn Renderer> = match settings.output {
        OutputMode::Text => Box::new(TextRenderer::new(std::io::stdout())),
        OutputMode::Json => Box::new(JsonRenderer::new(std::io::stdout())),
    };

    let session = Session::new(settings.new_game(), renderer);
    let summary = session.run(BufReader::new(tokio::io::stdin())).await?;
    tracing::debug!(?summary, "exiting");

    Ok(())
}
