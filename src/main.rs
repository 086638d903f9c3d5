//! Docqet landing site server.
//!
//! Serves the landing page, or with `--export <DIR>` writes it to disk and exits.

use mimalloc::MiMalloc;

/// Global allocator for improved performance (M-MIMALLOC-APPS).
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

use std::sync::Arc;

use anyhow::Context;
use docqet_web::config::AppConfig;
use docqet_web::ui::metadata::SITE_METADATA;
use docqet_web::{export, server, telemetry};
use dotenvy::dotenv;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env (if present)
    let _ = dotenv();

    let loaded = AppConfig::load().context("Configuration error")?;
    let config = Arc::new(loaded.config);

    telemetry::init(&config.logging);

    info!(
        name: "config.loaded",
        environment = %config.app.environment,
        address = %config.bind_addr(),
        public_dir = %config.app.public_dir.display(),
        "Configuration loaded"
    );

    SITE_METADATA
        .validate()
        .context("Invalid site metadata")?;

    if let Some(out_dir) = loaded.export_dir {
        let summary = export::export_site(&out_dir, &config.app.public_dir)
            .with_context(|| format!("Failed to export site to {}", out_dir.display()))?;
        info!(files = summary.total(), "Export complete");
        return Ok(());
    }

    server::start_server(config).await
}
