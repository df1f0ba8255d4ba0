use clap::Parser;
use std::path::PathBuf;
use tracing::error;

use cardpost::{prepare, Conf, RootResult};
use cardpost_notify::Timestamp;

/// Cardpost: one-shot interactive-card webhook notifier.
///
/// Loads the group bot's webhook URL and shared secret plus a card
/// template id and version from conf.json, signs the request with a
/// time-based HMAC, posts the card, and echoes the raw response.
#[derive(Parser, Debug)]
#[command(name = "cardpost", version, about, long_about = None)]
struct Cli {
    /// Path to the config file (defaults to ./conf.json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("cardpost=debug,cardpost_notify=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cardpost=info"))
    };

    // Diagnostics go to stderr; stdout carries only the payload echo and
    // the response body.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> RootResult<()> {
    let path = cli.config.unwrap_or_else(Conf::default_config_path);
    let conf = Conf::load(&path)?;

    let prepared = prepare(&conf, Timestamp::now())?;
    println!("{}", prepared.payload_json());

    let response = prepared.deliver()?;
    println!("{}", response);

    Ok(())
}
