//! Fetch one product and print it as JSON.
//!
//! ```sh
//! RUST_LOG=oriflame_sdk=debug cargo run --example fetch_product -- 1276
//! ```

use oriflame_sdk::OriflameClient;
use std::error::Error;
use tracing_subscriber::EnvFilter;

fn run(code: &str) -> Result<String, Box<dyn Error>> {
    let client = OriflameClient::new()?;
    let product = client.get_product(code)?;
    Ok(serde_json::to_string_pretty(&product)?)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let code = std::env::args().nth(1).unwrap_or_else(|| "1276".to_string());

    match run(&code) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error getting product {}: {}", code, e);
            std::process::exit(1);
        }
    }
}
