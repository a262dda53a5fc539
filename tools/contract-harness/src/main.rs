//! Replays the JSON fixtures under `contracts/http/` against a running service
//! and reports which responses drift from them.
//!
//! # Usage
//!
//! ```bash
//! # Run every fixture against a local users service
//! cargo run -p contract-harness -- --base-url http://localhost:3000
//!
//! # Only the users fixtures, eight requests in flight at once
//! cargo run -p contract-harness -- --base-url http://localhost:3000 --service users --concurrency 8
//! ```
//!
//! Exits 0 when all assertions pass, exits 1 when any fail.

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Parser;
use futures::stream::{self, StreamExt};

mod fixture;
mod reporter;
mod runner;

use reporter::Reporter;
use runner::Runner;

#[derive(Parser)]
#[command(about = "Run HTTP contract assertions against a live service")]
struct Args {
    /// Base URL of the service (e.g. http://localhost:3000)
    #[arg(long, env = "CONTRACT_BASE_URL")]
    base_url: String,

    /// Run only fixtures for this service subdirectory (e.g. users)
    #[arg(long)]
    service: Option<String>,

    /// Number of fixtures in flight at once
    #[arg(long, default_value_t = 1)]
    concurrency: usize,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let args = Args::parse();
    if args.concurrency == 0 {
        bail!("--concurrency must be at least 1");
    }

    let fixtures = fixture::load_all(&workspace_root(), args.service.as_deref())?;
    if fixtures.is_empty() {
        eprintln!("No fixtures found.");
        return Ok(());
    }

    println!(
        "Running {} fixture(s) against {} (concurrency {})",
        fixtures.len(),
        args.base_url,
        args.concurrency
    );
    println!();

    let runner = Runner::new(&args.base_url);
    let results: Vec<_> = stream::iter(&fixtures)
        .map(|f| runner.run(f))
        .buffered(args.concurrency)
        .collect()
        .await;

    let mut reporter = Reporter::new();
    for (f, result) in fixtures.iter().zip(&results) {
        reporter.record(f, result);
    }
    reporter.print_summary();

    if !reporter.all_passed() {
        std::process::exit(1);
    }
    Ok(())
}

/// Walk up from the harness manifest dir to the directory holding `contracts/`.
fn workspace_root() -> PathBuf {
    let start = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    start
        .ancestors()
        .find(|p| p.join("contracts").is_dir())
        .unwrap_or(&start)
        .to_path_buf()
}
