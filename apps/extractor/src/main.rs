use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use extractor::{decode, parse_resume, PatternRegistry};

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // load .env if present; ignore if missing

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(format!("{}=info", env!("CARGO_PKG_NAME")))),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Compile the default registry up front so a broken pattern is fatal at
    // startup rather than on the first parse.
    PatternRegistry::shared();

    let path = std::env::args()
        .nth(1)
        .context("usage: extractor <resume.pdf>")?;

    info!("decoding {path}");
    let text = decode::decode_pdf_file(Path::new(&path))?;

    let profile = parse_resume(&text);
    println!("{}", serde_json::to_string_pretty(&profile)?);

    Ok(())
}
