use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use reversi_bot::{BotConfig, GlyphStyle, SessionStore};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "reversi-bot",
    about = "Play reversi against a greedy engine, one chat message per line"
)]
struct Args {
    /// TOML config file
    #[arg(long, default_value = "reversi-bot.toml")]
    config: PathBuf,

    /// Board side length (even, at least 2)
    #[arg(long)]
    width: Option<usize>,

    /// Draw boards with plain characters instead of emoji
    #[arg(long)]
    ascii: bool,

    /// Conversation key the messages belong to
    #[arg(long)]
    session: Option<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    if let Err(err) = run(Args::parse()) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let mut config = BotConfig::load_or_default(&args.config)
        .with_context(|| format!("loading {}", args.config.display()))?;
    if let Some(width) = args.width {
        config.board_width = width;
    }
    if args.ascii {
        config.glyphs = GlyphStyle::Ascii;
    }
    if let Some(session) = args.session {
        config.session = session;
    }
    config.validate()?;

    let mut store = SessionStore::from_config(&config)?;
    info!(session = %config.session, width = config.board_width, "reversi bot ready");

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        if line.trim().is_empty() {
            continue;
        }
        // Failures go back to the player verbatim, like any other reply
        let reply = match store.handle(&config.session, &line) {
            Ok(reply) => reply,
            Err(err) => format!("{err}\n"),
        };
        stdout.write_all(reply.as_bytes())?;
        stdout.flush()?;
    }

    Ok(())
}
