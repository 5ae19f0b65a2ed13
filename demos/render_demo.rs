//! Example showing a byte-counting bar redrawn in place while a fake
//! transfer runs.

use color_eyre::Result;
use std::sync::Arc;
use std::time::Duration;
use tierbar::{ProgressBarBuilder, ProgressDisplay, Renderer};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let total = 64 * 1024 * 1024;
    let bar = Arc::new(
        ProgressBarBuilder::new(total)
            .bytes()
            .additional("fetching image.iso")
            .refresh_interval(Duration::from_millis(200))
            .build()?,
    );
    let display = ProgressDisplay::start(bar.clone(), Renderer::new(), std::io::stdout());

    let chunk = 512 * 1024;
    while !bar.is_finished() {
        tokio::time::sleep(Duration::from_millis(40)).await;
        bar.add(chunk);
        if bar.current() > total / 2 {
            bar.set_additional("verifying");
        }
    }

    display.join().await?;
    Ok(())
}
