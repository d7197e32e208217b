//! Mandatory steps: run the generator, then install dependencies

use super::{ProjectContext, StepOutcome};
use crate::runtime::CommandRunner;
use anyhow::Result;
use std::path::Path;
use std::time::SystemTime;

const MANIFEST: &str = "package.json";

/// Run `create-vite` in the parent directory
pub async fn generate<R: CommandRunner>(ctx: &ProjectContext, runner: &R) -> Result<StepOutcome> {
    let command = ctx.package_manager.create_vite(
        &ctx.parent_dir,
        ctx.choices.project_name.as_str(),
        ctx.binding.generator_template_id,
    );
    let before = manifest_stamp(&ctx.root).await;
    runner.run(&command).await?;

    // create-vite exits 0 when the user cancels its own prompts
    match (before, manifest_stamp(&ctx.root).await) {
        (_, None) => anyhow::bail!(
            "The generator finished but {} has no {}",
            ctx.root.display(),
            MANIFEST
        ),
        (Some(old), Some(new)) if old == new => anyhow::bail!(
            "The generator finished but left the existing project in {} unchanged",
            ctx.root.display()
        ),
        _ => {}
    }

    Ok(StepOutcome::Success(format!(
        "{} project created with latest Vite!",
        ctx.choices.framework
    )))
}

/// Modification time of the project manifest, if there is one
async fn manifest_stamp(root: &Path) -> Option<SystemTime> {
    let metadata = tokio::fs::metadata(root.join(MANIFEST)).await.ok()?;
    metadata.modified().ok()
}

/// Install the manifest's dependencies inside the project
pub async fn install<R: CommandRunner>(ctx: &ProjectContext, runner: &R) -> Result<StepOutcome> {
    runner
        .run(&ctx.package_manager.install_all(&ctx.root))
        .await?;
    Ok(StepOutcome::Success("Dependencies installed!".to_string()))
}
