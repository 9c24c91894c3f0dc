//! Lists every model the API key can see.
//!
//! Environment Variables:
//!     GEMINI_API_KEY: API key (required)
//!     GENAI_BASE_URL / GEMINI_BASE_URL: API base URL override
//!     GENAI_API_VERSION: API version (default: v1beta)
//!     GENAI_TIMEOUT_SECS: request timeout in seconds (default: none)
//!     RUST_LOG: diagnostics filter, written to stderr (default: warn)

use clap::Parser;
use genai_probe::{Client, ModelFilter};
use tracing_subscriber::EnvFilter;

/// List available Gemini models
#[derive(Parser, Debug)]
#[command(name = "check-models", version)]
struct Cli {
    /// Only list models supporting this generation method (e.g. generateContent)
    #[arg(long, value_name = "METHOD")]
    method: Option<String>,

    /// Verbose diagnostics on stderr
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> genai_probe::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let client = Client::from_env()?;
    let filter = cli.method.map_or(ModelFilter::All, ModelFilter::SupportsMethod);

    let mut stdout = std::io::stdout().lock();
    let printed =
        genai_probe::listing::print_models(client.models().stream(), &filter, &mut stdout).await?;
    tracing::info!(printed, "done");
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
