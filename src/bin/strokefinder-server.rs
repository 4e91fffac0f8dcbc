//! strokefinder HTTP server binary

use std::sync::Arc;
use strokefinder::presenter::{present, RenderSurface, TextSurface};
use strokefinder::{server, InputProfile, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging; stderr keeps --once output clean
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    let config = ServerConfig::from_env()?;
    let engine = config.build_engine()?;

    // --once LEVEL GOAL FOCUS AGE: print a single recommendation and exit
    let args: Vec<String> = std::env::args().collect();
    if let Some(pos) = args.iter().position(|arg| arg == "--once") {
        let labels = &args[pos + 1..];
        if labels.len() < 4 {
            anyhow::bail!("usage: strokefinder-server --once LEVEL GOAL FOCUS AGE");
        }
        let profile = InputProfile::from_labels(&labels[0], &labels[1], &labels[2], &labels[3]);
        let content = present(&engine.recommend(&profile));
        let mut surface = TextSurface::new(std::io::stdout().lock());
        tracing::debug!("Rendering {} blocks to {} surface", content.blocks.len(), surface.name());
        surface.render(&content)?;
        return Ok(());
    }

    println!("🏊 strokefinder");
    println!("   Version: {}", env!("CARGO_PKG_VERSION"));
    println!("✓ Catalog: {} styles", engine.catalog().len());
    match config.catalog_path {
        Some(ref path) => println!("✓ Source: {}", path.display()),
        None => println!("✓ Source: built-in styles"),
    }
    println!();

    server::run_server(Arc::new(engine), &config.addr()).await?;

    Ok(())
}
