//! Lists the models that support `generateContent`, then sends one test
//! prompt and prints the reply.
//!
//! A failing test prompt is reported on stdout and the process still exits
//! successfully; a missing API key or a failed listing is fatal.
//!
//! Environment Variables:
//!     GEMINI_API_KEY: API key (required)
//!     GEMINI_PROBE_MODEL: model for the test prompt (default: gemini-pro)
//!     GEMINI_PROBE_PROMPT: test prompt (default: "Say hello!")
//!     GENAI_BASE_URL / GEMINI_BASE_URL, GENAI_API_VERSION, GENAI_TIMEOUT_SECS, RUST_LOG

use clap::Parser;
use genai_probe::probe::{self, DEFAULT_MODEL, DEFAULT_PROMPT};
use genai_probe::{Client, ModelFilter};
use tracing_subscriber::EnvFilter;

/// Check Gemini connectivity with a single prompt
#[derive(Parser, Debug)]
#[command(name = "test-gemini", version)]
struct Cli {
    /// Model used for the test prompt
    #[arg(long, env = "GEMINI_PROBE_MODEL", default_value = DEFAULT_MODEL)]
    model: String,

    /// Prompt sent to the model
    #[arg(long, env = "GEMINI_PROBE_PROMPT", default_value = DEFAULT_PROMPT)]
    prompt: String,

    /// Verbose diagnostics on stderr
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> genai_probe::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let client = Client::from_env()?;
    let models = client.models();

    let mut stdout = std::io::stdout().lock();
    genai_probe::listing::print_models(
        models.stream(),
        &ModelFilter::generate_content(),
        &mut stdout,
    )
    .await?;

    let outcome = probe::request_text(&models, &cli.model, &cli.prompt).await;
    probe::print_outcome(&outcome, &mut stdout)?;
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
