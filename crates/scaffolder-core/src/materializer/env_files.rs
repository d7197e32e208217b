//! `.env`, `.env.example` and the matching ignore rule

use super::{write_file, ProjectContext, StepOutcome};
use anyhow::{Context, Result};
use tokio::fs;

const IGNORE_FILE: &str = ".gitignore";
const IGNORE_RULE: &str = ".env";

pub fn env_contents(project_name: &str) -> String {
    format!(
        "# Variables must start with VITE_ to be exposed to client code\n\
         VITE_APP_TITLE={}\n\
         VITE_API_URL=http://localhost:3000\n",
        project_name
    )
}

pub async fn run(ctx: &ProjectContext) -> Result<StepOutcome> {
    let contents = env_contents(ctx.choices.project_name.as_str());
    write_file(ctx, ".env", &contents).await?;
    write_file(ctx, ".env.example", &contents).await?;

    let ignore_path = ctx.path(IGNORE_FILE);
    let existing = match fs::read_to_string(&ignore_path).await {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to read {}", ignore_path.display()))
        }
    };

    let message = match with_ignore_rule(&existing) {
        Some(updated) => {
            write_file(ctx, IGNORE_FILE, &updated).await?;
            ".env and .env.example created, .env added to .gitignore"
        }
        None => ".env and .env.example created",
    };
    Ok(StepOutcome::Success(message.to_string()))
}

/// Ignore-list content with the `.env` rule appended, or None if it is already there
pub fn with_ignore_rule(existing: &str) -> Option<String> {
    if existing.lines().any(|line| line.trim() == IGNORE_RULE) {
        return None;
    }

    let mut updated = existing.to_string();
    if !updated.is_empty() && !updated.ends_with('\n') {
        updated.push('\n');
    }
    if !updated.is_empty() {
        updated.push('\n');
    }
    updated.push_str("# Environment variables\n");
    updated.push_str(IGNORE_RULE);
    updated.push('\n');
    Some(updated)
}
