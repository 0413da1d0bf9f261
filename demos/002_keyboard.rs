//! Keyboard input through elements and action sequences.
//!
//! Usage:
//!   cargo run --example 002_keyboard
//!   cargo run --example 002_keyboard -- --debug

mod common;

use std::time::Duration;

use common::Args;
use serde_json::json;
use wire_webdriver::{By, Key, Result, Session};

const PAGE: &str = "data:text/html,<input id='q' autofocus>";

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
    println!("=== 002: Keyboard ===\n");

    let session = Session::builder()
        .host(args.host)
        .port(args.port)
        .desired_capabilities(json!({"browserName": "firefox"}))
        .build()?;

    let result = steps(&session).await;
    session.end().await?;
    result?;

    println!("\n=== Done ===");
    Ok(())
}

async fn steps(session: &Session) -> Result<()> {
    session.go(PAGE).await?;
    let input = session.find().element(By::id("q")).await?;

    println!("[1] Element send_keys...");
    input.send_keys("hello").await?;

    println!("[2] Action sequence...");
    let mut keys = session.actions().key_sequence();
    keys.send_keys(" world")
        .pause(Some(Duration::from_millis(100)))
        .press(Key::Enter);
    keys.perform().await?;

    println!("    value: {:?}", input.property("value").await?);

    session.actions().release().await?;
    Ok(())
}
