//! Navigation against a running WebDriver server.
//!
//! Demonstrates:
//! - Auto-start on the first command
//! - Navigate, read URL and title
//! - History navigation
//! - Explicit end
//!
//! Usage:
//!   geckodriver --port 4444 &
//!   cargo run --example 001_navigation
//!   cargo run --example 001_navigation -- --debug --port 9515

mod common;

use common::Args;
use serde_json::json;
use wire_webdriver::{Result, Session};

const URL_1: &str = "https://example.com";
const URL_2: &str = "https://example.org";

#[tokio::main]
async fn main() {
    let args = Args::parse();
    common::init_logging(args.debug);

    if let Err(e) = run(args).await {
        eprintln!("\n[ERROR] {e}");
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<()> {
    println!("=== 001: Navigation ===\n");

    let session = Session::builder()
        .host(args.host)
        .port(args.port)
        .desired_capabilities(json!({"browserName": "firefox"}))
        .build()?;

    // End explicitly on every path; drop teardown does not survive runtime shutdown.
    let result = steps(&session).await;
    session.end().await?;
    result?;

    println!("\n=== Done ===");
    Ok(())
}

async fn steps(session: &Session) -> Result<()> {
    println!("[1] Navigate to {URL_1}...");
    session.go(URL_1).await?;
    println!("    session={:?}", session.session_id());
    println!("    title: {}", session.title().await?);

    println!("[2] Navigate to {URL_2}...");
    session.go(URL_2).await?;
    println!("    url: {}", session.url().await?);

    println!("[3] Back...");
    session.back().await?;
    println!("    url: {}", session.url().await?);
    Ok(())
}
