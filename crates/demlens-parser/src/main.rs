//! demlens command-line decoder.
//!
//! - Decodes one replay file in a single forward pass
//! - `--verbosity 1..=5` maps to error/warn/info/debug/trace (`RUST_LOG` wins)
//! - `--events-json` writes each resolved game event as one JSON line

use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser as _;
use tracing_subscriber::{fmt, EnvFilter};

use demlens_core::error::{DemError, Result};
use demlens_parser::{config, Message, MessageKind, Parser, ParserConfig, Verbosity};

#[derive(Debug, clap::Parser)]
#[command(name = "demlens", about = "Decode a recorded match replay")]
struct Cli {
    /// The .dem file to parse
    demo: PathBuf,

    /// How verbose [1-5]
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
    verbosity: Option<u8>,

    /// Maximum number of frames to parse
    #[arg(long)]
    frames: Option<NonZeroUsize>,

    /// YAML parser config; flags override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print resolved game events as JSON lines on stdout
    #[arg(long)]
    events_json: bool,
}

fn build_config(cli: &Cli) -> Result<ParserConfig> {
    let mut cfg = match &cli.config {
        Some(path) => config::load_from_file(&path.to_string_lossy())?,
        None => ParserConfig::default(),
    };
    if let Some(v) = cli.verbosity {
        cfg.verbosity = Verbosity::try_from(v).map_err(DemError::Config)?;
    }
    if let Some(n) = cli.frames {
        cfg.max_frames = Some(n.get());
    }
    cfg.validate()?;
    Ok(cfg)
}

fn run(cli: &Cli, cfg: ParserConfig) -> Result<()> {
    let mut parser = Parser::new(cfg);

    if cli.events_json {
        parser.register(MessageKind::GameEvent, |msg: &Message| {
            if let Message::GameEvent(ev) = msg {
                let line = serde_json::to_string(ev)
                    .map_err(|e| DemError::Hook(format!("event json: {e}")))?;
                println!("{line}");
            }
            Ok(())
        });
    }

    let summary = parser.parse_file(&cli.demo)?;
    for e in &summary.skipped {
        tracing::debug!(code = e.code().as_str(), "{e}");
    }
    tracing::warn!(
        frames = summary.frames,
        last_tick = summary.last_tick,
        events = summary.stats.events_resolved,
        skipped = summary.skipped.len(),
        "done"
    );
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let cfg = match build_config(&cli) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("error [{}]: {e}", e.code().as_str());
            return ExitCode::FAILURE;
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(cfg.verbosity.level_filter().into()));
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    match run(&cli, cfg) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(code = e.code().as_str(), "{e}");
            eprintln!("error [{}]: {e}", e.code().as_str());
            ExitCode::FAILURE
        }
    }
}
