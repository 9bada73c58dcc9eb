// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use crate::config::{validate_url, Config};
use crate::error::Result;
use crate::sync::InitSource;

use super::{Context, Coordinator};

/// Save the remote URL (if given), then populate the store.
pub async fn run(ctx: &mut Context, remote_url: Option<String>) -> Result<()> {
    if let Some(url) = remote_url {
        save_remote_url(ctx, url)?;
    }

    let coordinator = ctx.coordinator()?;
    let source = coordinator.initialize().await?;
    for line in summary(ctx, &coordinator, source)? {
        println!("{line}");
    }
    Ok(())
}

/// Persist the URL in `config.toml` without baking in env overrides.
fn save_remote_url(ctx: &mut Context, url: String) -> Result<()> {
    validate_url(&url)?;
    let mut stored = Config::load(&ctx.paths.root)?;
    stored.remote.url = Some(url.clone());
    stored.save(&ctx.paths.root)?;
    ctx.config.remote.url = Some(url);
    tracing::info!("saved remote url");
    Ok(())
}

pub(crate) fn summary(
    ctx: &Context,
    coordinator: &Coordinator,
    source: InitSource,
) -> Result<Vec<String>> {
    let counts = format!(
        "{} students, {} exercises, {} goals",
        coordinator.students()?.len(),
        coordinator.exercises()?.len(),
        coordinator.goals()?.len()
    );
    let root = ctx.paths.root.display();
    let mut lines = vec![match source {
        InitSource::Existing => format!("Already initialized at {root} ({counts})"),
        InitSource::Remote => format!("Downloaded roster into {root}: {counts}"),
        InitSource::Seed => format!("Seeded built-in roster into {root}: {counts}"),
    }];
    if ctx.config.remote.url.is_none() {
        lines.push(
            "No remote configured; changes stay local.\n  hint: run 'gym-coach init --remote-url <url>' to enable sync"
                .to_string(),
        );
    }
    Ok(lines)
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
