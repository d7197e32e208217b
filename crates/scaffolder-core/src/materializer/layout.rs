//! Organized `src/` folder structure

use super::{write_file, ProjectContext, StepOutcome};
use crate::resolver::{folder_description, folder_layout};
use anyhow::Result;

pub async fn run(ctx: &ProjectContext) -> Result<StepOutcome> {
    let folders = folder_layout(ctx.choices.framework);

    for folder in folders {
        write_file(ctx, &format!("src/{}/README.md", folder), &folder_readme(folder)).await?;
    }

    Ok(StepOutcome::Success(format!(
        "Folder structure created! ({})",
        folders.join(", ")
    )))
}

fn folder_readme(folder: &str) -> String {
    let mut chars = folder.chars();
    let title = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    };
    format!("# {}\n\n{}\n", title, folder_description(folder))
}
