//! Generated project README

use super::{write_file, ProjectContext, StepOutcome};
use crate::materializer::linting::FORMAT_SCRIPTS;
use crate::resolver;
use anyhow::Result;
use std::fmt::{self, Write as _};

pub async fn run(ctx: &ProjectContext) -> Result<StepOutcome> {
    write_file(ctx, "README.md", &render(ctx)?).await?;
    Ok(StepOutcome::Success("README.md generated".to_string()))
}

pub fn render(ctx: &ProjectContext) -> Result<String, fmt::Error> {
    let choices = &ctx.choices;
    let features = &choices.features;
    let framework = choices.framework;
    let language = choices.language;
    let pm = &ctx.package_manager;

    let mut out = String::new();

    writeln!(out, "# {}\n", choices.project_name)?;
    writeln!(
        out,
        "Welcome to your new {} project! 🚀\n",
        framework.as_str().to_uppercase()
    )?;

    out.push_str("## Tech Stack\n\n");
    writeln!(out, "- **Framework:** {} (Latest)", framework)?;
    writeln!(out, "- **Language:** {}", language)?;
    out.push_str("- **Build Tool:** Vite (Latest)\n");
    if features.styling {
        out.push_str("- **Styling:** Tailwind CSS (Latest)\n");
    }
    if features.router {
        if let Some(router) = resolver::router_display_name(framework) {
            writeln!(out, "- **Router:** {} (Latest)", router)?;
        }
    }
    if features.linting {
        out.push_str("- **Formatting:** Prettier\n");
    }

    out.push_str("\n## Getting Started\n\n");
    writeln!(out, "```bash\n{}\n```\n", pm.run_script("dev"))?;
    out.push_str("Open http://localhost:5173 in your browser\n");

    out.push_str("\n## Available Commands\n\n");
    writeln!(out, "- `{}` - Start development server", pm.run_script("dev"))?;
    writeln!(out, "- `{}` - Build for production", pm.run_script("build"))?;
    writeln!(out, "- `{}` - Preview production build", pm.run_script("preview"))?;
    if features.linting {
        for (script, command) in FORMAT_SCRIPTS {
            writeln!(out, "- `{}` - {}", pm.run_script(script), command)?;
        }
    }

    if features.folder_structure {
        out.push_str("\n## Project Structure\n\n```\nsrc/\n");
        for folder in resolver::folder_layout(framework) {
            writeln!(out, "├── {}/", folder)?;
        }
        out.push_str("```\n");
    }

    if features.env_files {
        out.push_str("\n## Environment Variables\n\n");
        out.push_str(
            "Copy `.env.example` to `.env` and adjust the values. \
             Only variables prefixed with `VITE_` are exposed to client code.\n",
        );
    }

    out.push_str("\n## Learn More\n\n");
    writeln!(
        out,
        "- [{} Documentation]({})",
        framework,
        resolver::docs_url(framework)
    )?;
    out.push_str("- [Vite Documentation](https://vitejs.dev)\n");
    if features.styling {
        out.push_str("- [Tailwind CSS Documentation](https://tailwindcss.com)\n");
    }
    if features.router {
        if let (Some(name), Some(url)) = (
            resolver::router_display_name(framework),
            resolver::router_docs_url(framework),
        ) {
            writeln!(out, "- [{} Documentation]({})", name, url)?;
        }
    }
    if language.is_typescript() {
        out.push_str("- [TypeScript Documentation](https://www.typescriptlang.org)\n");
    }

    out.push_str("\n## Package Versions\n\n");
    out.push_str(
        "All packages are installed with `@latest` tag to ensure you're using the most up-to-date versions.\n",
    );
    out.push_str("\nHappy coding! 💻✨\n");

    Ok(out)
}
