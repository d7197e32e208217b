//! Prettier formatting setup

use super::{read_file, write_file, ProjectContext, StepOutcome};
use crate::choices::Framework;
use crate::runtime::CommandRunner;
use anyhow::{Context, Result};
use serde_json::{Map, Value};

/// Scripts merged into `package.json`
pub const FORMAT_SCRIPTS: [(&str, &str); 2] = [
    ("format", "prettier --write ."),
    ("format:check", "prettier --check ."),
];

const PRETTIER_IGNORE: &str = "dist\nnode_modules\npackage-lock.json\n";

pub fn packages(framework: Framework) -> &'static [&'static str] {
    match framework {
        Framework::Svelte => &["prettier", "prettier-plugin-svelte"],
        Framework::React
        | Framework::Vue
        | Framework::Preact
        | Framework::Lit
        | Framework::Vanilla => &["prettier"],
    }
}

pub fn prettier_config(framework: Framework) -> String {
    let mut config = Map::new();
    config.insert("semi".into(), Value::Bool(false));
    config.insert("singleQuote".into(), Value::Bool(true));
    config.insert("trailingComma".into(), Value::from("all"));
    config.insert("printWidth".into(), Value::from(100));
    if framework == Framework::Svelte {
        config.insert(
            "plugins".into(),
            Value::Array(vec![Value::from("prettier-plugin-svelte")]),
        );
    }
    // Serializing a Map of plain values cannot fail
    let mut text = serde_json::to_string_pretty(&Value::Object(config)).unwrap_or_default();
    text.push('\n');
    text
}

pub async fn run<R: CommandRunner>(ctx: &ProjectContext, runner: &R) -> Result<StepOutcome> {
    let framework = ctx.choices.framework;
    runner
        .run(&ctx.package_manager.add(&ctx.root, packages(framework), true))
        .await?;

    write_file(ctx, ".prettierrc", &prettier_config(framework)).await?;
    write_file(ctx, ".prettierignore", PRETTIER_IGNORE).await?;

    let manifest = read_file(ctx, "package.json").await?;
    let (merged, added) = merge_scripts(&manifest, &FORMAT_SCRIPTS)?;
    write_file(ctx, "package.json", &merged).await?;

    let summary = if added.is_empty() {
        "Prettier configured (format scripts already present)".to_string()
    } else {
        format!("Prettier configured! Added scripts: {}", added.join(", "))
    };
    Ok(StepOutcome::Success(summary))
}

/// Add each script that is not already defined; existing entries and key order are kept
pub fn merge_scripts<'a>(
    manifest: &str,
    scripts: &[(&'a str, &str)],
) -> Result<(String, Vec<&'a str>)> {
    let mut root: Value = serde_json::from_str(manifest).context("package.json is not valid JSON")?;
    let object = root
        .as_object_mut()
        .context("package.json must contain a JSON object")?;

    let entry = object
        .entry("scripts")
        .or_insert_with(|| Value::Object(Map::new()));
    let existing = entry
        .as_object_mut()
        .context("package.json \"scripts\" must be an object")?;

    let mut added = Vec::new();
    for (name, command) in scripts {
        if !existing.contains_key(*name) {
            existing.insert((*name).to_string(), Value::from(*command));
            added.push(*name);
        }
    }

    let mut text = serde_json::to_string_pretty(&root).context("Failed to serialize package.json")?;
    text.push('\n');
    Ok((text, added))
}
