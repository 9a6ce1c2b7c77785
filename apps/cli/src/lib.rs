//! Command-line loader: reads a storage root and prints the curriculum.

pub mod output;
pub mod settings;

use anyhow::Context;
use curriculum_core::{load_curriculum, ComrakRenderer, FsStorage};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::settings::Settings;

pub fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let settings = Settings::from_env()?;

    tracing::info!("Mounting storage at {}", settings.root.display());
    let storage = FsStorage::mount(&settings.root)
        .with_context(|| format!("failed to mount {}", settings.root.display()))?;

    let curriculum = load_curriculum(&storage, &ComrakRenderer::new(), &settings.loader)
        .context("failed to scan storage root")?;

    let rendered = output::render(&curriculum, settings.format)?;
    print!("{}", rendered);

    Ok(())
}
