mod analytics;
mod fetch;
mod invariants;
mod models;
mod parse;
mod report;

use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about = "Summarize a web server access log", long_about = None)]
struct Args {
    /// URL of the web log file
    #[arg(long)]
    url: Option<String>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let Some(url) = args.url else {
        println!("Please provide the URL of the web log file using the --url argument.");
        return;
    };

    if let Err(e) = run(&url).await {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}

async fn run(url: &str) -> Result<(), Box<dyn std::error::Error>> {
    let body = match fetch::download(url).await {
        Ok(body) => body,
        Err(e) => {
            // A failed download ends the run; there is nothing to report.
            tracing::error!("Error downloading web log: {e}");
            return Ok(());
        }
    };

    let analytics = analytics::analyze(&body)?;
    print!("{}", report::render(&analytics)?);
    Ok(())
}
