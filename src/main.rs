use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;

use gridtrace::{render, RenderConfig, Scene};

/// Trace axis-aligned shapes onto a character grid and print it
#[derive(Parser, Debug)]
#[command(name = "gridtrace", version, about)]
struct Cli {
    /// Scene description file (JSON array of shape specs); the built-in
    /// demo scene is rendered when omitted
    scene: Option<PathBuf>,

    /// Background cell character
    #[arg(long, default_value_t = gridtrace::config::DEFAULT_FILL)]
    fill: char,

    /// Character painted over cells a shape passes through
    #[arg(long, default_value_t = gridtrace::config::DEFAULT_MARK)]
    mark: char,

    /// Enable info-level logging
    #[arg(short, long)]
    verbose: bool,

    /// Enable debug-level logging
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set log level based on flags
    let log_level = if cli.debug {
        tracing::Level::DEBUG
    } else if cli.verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };

    // Logs go to stderr; the rendered grid owns stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(log_level.into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    tracing::info!("gridtrace version {}", env!("CARGO_PKG_VERSION"));

    match run(&cli) {
        Ok(()) => Ok(()),
        Err(e) => {
            tracing::error!("render failed: {e}");
            Err(e.into())
        }
    }
}

fn run(cli: &Cli) -> gridtrace::Result<()> {
    let scene = match &cli.scene {
        Some(path) => Scene::load(path)?,
        None => Scene::demo(),
    };
    let shapes = scene.build()?;
    tracing::info!(shapes = shapes.len(), "scene ready");

    let config = RenderConfig {
        fill: cli.fill,
        mark: cli.mark,
        ..RenderConfig::default()
    };

    let stdout = io::stdout();
    let mut sink = stdout.lock();
    render(&shapes, &config, &mut sink)?;
    sink.flush()?;
    Ok(())
}
