use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::apod::Fetcher;
use crate::handlers::pages::PLACEHOLDER_ID;
use crate::render::render_card;
use crate::AppState;

/// Render the page once and write a self-contained copy of the site:
/// `index.html` plus the assets under `static/`.
pub async fn build_site(state: &AppState, out_dir: &Path) -> Result<()> {
    let record = state
        .fetcher
        .fetch()
        .await
        .context("Failed to fetch the picture of the day")?;
    info!(title = %record.title, date = %record.date, "rendering picture of the day");

    let markup = render_card(&record).context("Failed to render the picture markup")?;
    let page = state
        .shell
        .inject(PLACEHOLDER_ID, &markup)
        .context("Failed to place the picture into the page shell")?;

    let static_dir = out_dir.join("static");
    fs::create_dir_all(&static_dir)
        .with_context(|| format!("Failed to create {}", static_dir.display()))?;

    let index = out_dir.join("index.html");
    fs::write(&index, page).with_context(|| format!("Failed to write {}", index.display()))?;

    copy_assets(&state.config.server.assets_dir, &static_dir)?;

    info!("site written to {}", out_dir.display());
    Ok(())
}

/// Copy every asset except the shell itself; the shell is emitted already
/// rendered as `index.html`.
fn copy_assets(assets_dir: &Path, static_dir: &Path) -> Result<()> {
    let entries = fs::read_dir(assets_dir)
        .with_context(|| format!("Failed to read assets directory {}", assets_dir.display()))?;

    for entry in entries {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() || entry.file_name() == "index.html" {
            continue;
        }
        fs::copy(&path, static_dir.join(entry.file_name()))
            .with_context(|| format!("Failed to copy {}", path.display()))?;
    }

    Ok(())
}
