//! Tailwind CSS setup

use super::{write_file, ProjectContext, StepOutcome};
use crate::resolver::STYLESHEET_CANDIDATES;
use crate::runtime::CommandRunner;
use anyhow::Result;
use std::path::Path;

pub const STYLING_PACKAGES: [&str; 3] = ["tailwindcss", "postcss", "autoprefixer"];

pub const TAILWIND_DIRECTIVES: &str = "@tailwind base;\n@tailwind components;\n@tailwind utilities;\n";

const POSTCSS_CONFIG: &str = r#"export default {
  plugins: {
    tailwindcss: {},
    autoprefixer: {},
  },
}
"#;

pub async fn run<R: CommandRunner>(ctx: &ProjectContext, runner: &R) -> Result<StepOutcome> {
    runner
        .run(&ctx.package_manager.add(&ctx.root, &STYLING_PACKAGES, true))
        .await?;

    write_file(ctx, "tailwind.config.js", &tailwind_config(ctx.binding.styling_glob)).await?;
    write_file(ctx, "postcss.config.js", POSTCSS_CONFIG).await?;

    let stylesheet = locate_stylesheet(&ctx.root).await;
    write_file(ctx, stylesheet, TAILWIND_DIRECTIVES).await?;

    Ok(StepOutcome::Success(format!(
        "Latest Tailwind CSS configured! ({})",
        stylesheet
    )))
}

pub fn tailwind_config(content_glob: &str) -> String {
    format!(
        r#"/** @type {{import('tailwindcss').Config}} */
export default {{
  content: [
    "./index.html",
    "{}"
  ],
  theme: {{
    extend: {{}},
  }},
  plugins: [],
}}
"#,
        content_glob
    )
}

/// First stylesheet the generator produced, or `src/index.css` if none exist
pub async fn locate_stylesheet(root: &Path) -> &'static str {
    for candidate in STYLESHEET_CANDIDATES {
        if tokio::fs::try_exists(root.join(candidate))
            .await
            .unwrap_or(false)
        {
            return candidate;
        }
    }
    STYLESHEET_CANDIDATES[0]
}
