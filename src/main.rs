use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{error, info};

mod config;
mod logging;
mod metrics;
mod poll;
mod upnp;
mod wire;

use upnp::Discovery;

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "fritz-status")]
#[command(about = "FRITZ!Box WAN metrics for telegraf's execd input", long_about = None)]
struct Cli {
    /// Router address.
    #[arg(long, env = "FRITZBOX_HOST")]
    host: Option<String>,

    /// Router control port (decimal, or 0x/0o/0b prefixed).
    #[arg(long, env = "FRITZBOX_PORT")]
    port: Option<String>,

    /// Measurement name written at the start of every line.
    #[arg(long, default_value = config::DEFAULT_BUCKET)]
    bucket: String,

    /// JSON description of the router's services and action responses.
    #[arg(long, env = "FRITZBOX_SERVICES")]
    services: PathBuf,

    #[arg(long, value_enum, default_value_t = logging::LogFormat::Telegraf)]
    log_format: logging::LogFormat,

    #[command(subcommand)]
    cmd: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Emit one metric line per line read from stdin (default).
    Run,

    /// Emit a single metric line and exit.
    Poll,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.log_format)?;

    let config::Config { host, port, bucket } =
        config::Config::resolve(cli.host.as_deref(), cli.port.as_deref(), &cli.bucket);

    // Discovery runs once; without a directory there is nothing to poll.
    let discovery = upnp::SnapshotDiscovery::new(&cli.services);
    let directory = match discovery.resolve_services(&host, port) {
        Ok(directory) => directory,
        Err(err) => {
            error!("fritzbox: unable to load services: {}", err);
            return Err(anyhow::Error::new(err)
                .context(format!("load services for {}:{}", host, port)));
        }
    };

    let mut poller = poll::Poller::new(directory, metrics::WAN, bucket, host);

    match cli.cmd.unwrap_or(Commands::Run) {
        Commands::Run => {
            let cycles = poller.run(std::io::stdin().lock(), std::io::stdout().lock())?;
            info!(cycles, "trigger input closed, exiting");
        }
        Commands::Poll => {
            println!("{}", poller.cycle());
        }
    }

    Ok(())
}
