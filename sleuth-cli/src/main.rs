mod display;

use std::time::Duration;

use clap::Parser;
use sleuth_core::fetch::{DEFAULT_TIMEOUT, WHOIS_PORT};
use sleuth_core::output::{get_formatter, OutputFormat};
use sleuth_core::{servers, Request};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use display::Spinner;

#[derive(Parser)]
#[command(name = "sleuth")]
#[command(about = "Fetch WHOIS records over port 43 or from an HTTP referral URL")]
#[command(version)]
struct Cli {
    /// Domain name, IP address or other object to look up
    query: String,

    /// WHOIS server to query (picked from the query when omitted)
    #[arg(short = 'H', long)]
    host: Option<String>,

    /// WHOIS server port
    #[arg(short, long, default_value_t = WHOIS_PORT)]
    port: u16,

    /// Fetch this URL over HTTP instead of querying a WHOIS server
    #[arg(short, long)]
    url: Option<String>,

    /// Seconds allowed for the WHOIS connect, and again for the exchange
    #[arg(short, long, default_value_t = DEFAULT_TIMEOUT.as_secs())]
    timeout: u64,

    /// Output format (human or json)
    #[arg(short, long, default_value = "human")]
    format: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let output_format: OutputFormat = cli.format.parse().unwrap_or_default();
    let formatter = get_formatter(output_format);
    let request = build_request(&cli)?;
    debug!(server = %request.server(), http = request.is_http(), "Request ready");

    let spinner = (output_format == OutputFormat::Human)
        .then(|| Spinner::new(&format!("Querying {}...", request.server())));
    let outcome = request.fetch().await;
    if let Some(spinner) = spinner {
        spinner.finish();
    }

    match outcome {
        Ok(response) => {
            println!("{}", formatter.format_response(&response));
        }
        Err(failure) => {
            match output_format {
                OutputFormat::Json => println!("{}", formatter.format_failure(&failure)),
                OutputFormat::Human => eprintln!("{}", formatter.format_failure(&failure)),
            }
            std::process::exit(1);
        }
    }

    Ok(())
}

fn build_request(cli: &Cli) -> sleuth_core::Result<Request> {
    let mut request = Request::new(cli.query.trim())
        .with_port(cli.port)
        .with_timeout(Duration::from_secs(cli.timeout));

    if let Some(host) = &cli.host {
        request = request.with_host(host.as_str());
    }
    if let Some(url) = &cli.url {
        request = request.with_url(url.as_str());
    }

    servers::resolve(&mut request)?;
    Ok(request)
}
