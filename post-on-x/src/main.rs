//! post-on-x - Publish a single post to X

use clap::Parser;
use libpostx::logging::LoggingConfig;
use libpostx::output::{self, OutputFormat};
use libpostx::{Config, Credentials, PostRequest, PostResult, Publisher, Result};

const DEFAULT_TEXT: &str = "Hello, World!";

#[derive(Parser, Debug)]
#[command(name = "post-on-x")]
#[command(version)]
#[command(about = "Publish a single post to X", long_about = None)]
#[command(after_help = "Credentials are read from X_CONSUMER_API_KEY, X_CONSUMER_API_SECRET_KEY, \
X_ACCESS_TOKEN and X_ACCESS_TOKEN_SECRET.")]
struct Cli {
    /// Text to post
    #[arg(default_value = DEFAULT_TEXT)]
    content: String,

    /// Output format (text or json)
    #[arg(short, long, default_value = "text")]
    format: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let format = match cli.format.parse::<OutputFormat>() {
        Ok(format) => format,
        Err(e) => {
            let code = output::report(
                &Err(e),
                OutputFormat::Text,
                &mut std::io::stdout(),
                &mut std::io::stderr(),
            );
            std::process::exit(code);
        }
    };

    let outcome = run(&cli).await;
    let code = output::report(
        &outcome,
        format,
        &mut std::io::stdout(),
        &mut std::io::stderr(),
    );
    std::process::exit(code);
}

async fn run(cli: &Cli) -> Result<PostResult> {
    let config = Config::load()?;
    LoggingConfig::resolve(&config.logging, cli.verbose).init();
    tracing::debug!(api_base = %config.x.api_base, "Loaded configuration");

    let credentials = Credentials::from_env()?;
    let publisher = Publisher::for_x(&config, credentials)?;

    publisher.publish(&PostRequest::new(cli.content.clone())).await
}
