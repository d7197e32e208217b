//! Showcase content replacing the generator's starter page
//!
//! Only the root component and the primary stylesheet are rewritten. The
//! entry module is never touched here, so a router wired by the routing step
//! survives.

use super::styling::{locate_stylesheet, TAILWIND_DIRECTIVES};
use super::{write_file, ProjectContext, StepOutcome};
use crate::choices::{ChoiceModel, Framework};
use crate::resolver;
use anyhow::Result;

pub async fn run(ctx: &ProjectContext) -> Result<StepOutcome> {
    let choices = &ctx.choices;
    let component = resolver::main_component(choices.framework, choices.language)
        .ok_or_else(|| anyhow::anyhow!("{} has no root component to replace", choices.framework))?;

    write_file(ctx, &component, &render_component(choices)).await?;

    let stylesheet = locate_stylesheet(&ctx.root).await;
    write_file(ctx, stylesheet, &render_stylesheet(choices)).await?;

    Ok(StepOutcome::Success(format!(
        "Showcase written to {} and {}",
        component, stylesheet
    )))
}

/// Feature bullet points shown on the page
fn feature_lines(choices: &ChoiceModel) -> Vec<String> {
    let features = &choices.features;
    let mut lines = vec![
        format!("{} with {}", choices.framework, choices.language),
        "Vite dev server with hot module replacement".to_string(),
    ];
    if features.styling {
        lines.push("Tailwind CSS utility classes".to_string());
    }
    if features.router {
        if let Some(router) = resolver::router_display_name(choices.framework) {
            lines.push(format!("{} navigation", router));
        }
    }
    if features.folder_structure {
        lines.push("Organized folder structure".to_string());
    }
    if features.linting {
        lines.push("Prettier formatting".to_string());
    }
    if features.env_files {
        lines.push("Environment variables in .env".to_string());
    }
    lines
}

/// Class attribute value, with Tailwind utilities when styling is enabled
fn classes(base: &str, utilities: &str, tailwind: bool) -> String {
    if tailwind {
        format!("{} {}", base, utilities)
    } else {
        base.to_string()
    }
}

pub fn render_component(choices: &ChoiceModel) -> String {
    let tailwind = choices.features.styling;
    let title = choices.project_name.as_str();
    let subtitle = format!("{} + {} + Vite", choices.framework, choices.language);
    let main_class = classes("showcase", "mx-auto max-w-2xl p-8 text-center", tailwind);
    let button_class = classes(
        "showcase-button",
        "rounded-lg bg-indigo-500 px-4 py-2 font-semibold text-white",
        tailwind,
    );
    let items: Vec<String> = feature_lines(choices)
        .into_iter()
        .map(|line| format!("        <li>{}</li>", line))
        .collect();
    let items = items.join("\n");

    match choices.framework {
        Framework::React | Framework::Preact => {
            let (import, export, class_attr) = if choices.framework == Framework::React {
                ("import { useState } from 'react'", "function App()", "className")
            } else {
                ("import { useState } from 'preact/hooks'", "export function App()", "class")
            };
            let footer = if choices.framework == Framework::React {
                "\nexport default App\n"
            } else {
                ""
            };
            format!(
                r#"{import}

{export} {{
  const [count, setCount] = useState(0)

  return (
    <main {class_attr}="{main_class}">
      <h1 {class_attr}="showcase-title">{title}</h1>
      <p {class_attr}="showcase-subtitle">{subtitle}</p>
      <button {class_attr}="{button_class}" onClick={{() => setCount((c) => c + 1)}}>
        Clicked {{count}} times
      </button>
      <ul {class_attr}="showcase-features">
{items}
      </ul>
    </main>
  )
}}
{footer}"#
            )
        }
        Framework::Vue => {
            let lang = if choices.language.is_typescript() {
                " lang=\"ts\""
            } else {
                ""
            };
            let router_view = if choices.features.router {
                "\n    <RouterView />"
            } else {
                ""
            };
            format!(
                r#"<script setup{lang}>
import {{ ref }} from 'vue'

const count = ref(0)
</script>

<template>
  <main class="{main_class}">
    <h1 class="showcase-title">{title}</h1>
    <p class="showcase-subtitle">{subtitle}</p>
    <button class="{button_class}" @click="count++">Clicked {{{{ count }}}} times</button>
    <ul class="showcase-features">
{items}
    </ul>{router_view}
  </main>
</template>
"#
            )
        }
        Framework::Svelte => {
            let lang = if choices.language.is_typescript() {
                " lang=\"ts\""
            } else {
                ""
            };
            format!(
                r#"<script{lang}>
  let count = $state(0)
</script>

<main class="{main_class}">
  <h1 class="showcase-title">{title}</h1>
  <p class="showcase-subtitle">{subtitle}</p>
  <button class="{button_class}" onclick={{() => count++}}>Clicked {{count}} times</button>
  <ul class="showcase-features">
{items}
  </ul>
</main>
"#
            )
        }
        // No root component in these templates; the plan never offers showcase for them
        Framework::Lit | Framework::Vanilla => String::new(),
    }
}

const SHOWCASE_CSS: &str = r#":root {
  font-family: system-ui, -apple-system, 'Segoe UI', Roboto, sans-serif;
  line-height: 1.5;
  color-scheme: light dark;
}

body {
  margin: 0;
  min-height: 100vh;
  display: grid;
  place-items: center;
}

.showcase {
  padding: 2rem;
  text-align: center;
  animation: fade-in 0.6s ease-out both;
}

.showcase-title {
  font-size: 3rem;
  margin: 0;
  background: linear-gradient(90deg, #a855f7, #06b6d4);
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
  animation: float 3s ease-in-out infinite;
}

.showcase-subtitle {
  opacity: 0.75;
}

.showcase-button {
  cursor: pointer;
  border: none;
  border-radius: 0.5rem;
  padding: 0.6rem 1.2rem;
  transition: transform 0.15s ease;
}

.showcase-button:hover {
  transform: scale(1.05);
}

.showcase-features {
  list-style: none;
  padding: 0;
}

.showcase-features li {
  animation: slide-up 0.5s ease-out both;
}

.showcase-features li:nth-child(2) { animation-delay: 0.1s; }
.showcase-features li:nth-child(3) { animation-delay: 0.2s; }
.showcase-features li:nth-child(4) { animation-delay: 0.3s; }
.showcase-features li:nth-child(5) { animation-delay: 0.4s; }

@keyframes fade-in {
  from { opacity: 0; }
  to { opacity: 1; }
}

@keyframes float {
  0%, 100% { transform: translateY(0); }
  50% { transform: translateY(-6px); }
}

@keyframes slide-up {
  from { opacity: 0; transform: translateY(12px); }
  to { opacity: 1; transform: translateY(0); }
}
"#;

/// Example styling; keeps the Tailwind directives in front when styling is on
pub fn render_stylesheet(choices: &ChoiceModel) -> String {
    if choices.features.styling {
        format!("{}\n{}", TAILWIND_DIRECTIVES, SHOWCASE_CSS)
    } else {
        SHOWCASE_CSS.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::choices::{Features, Language};
    use crate::materializer::testing::{context, scaffolded, FakeRunner};
    use crate::materializer::{materialize, Step};

    fn showcase_with(styling: bool, router: bool) -> Features {
        Features {
            styling,
            router,
            showcase: true,
            ..Features::default()
        }
    }

    #[test]
    fn test_react_component_reflects_features() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context(dir.path(), Framework::React, Language::TypeScript, showcase_with(true, true));
        let component = render_component(&ctx.choices);

        assert!(component.starts_with("import { useState } from 'react'"));
        assert!(component.contains("export default App"));
        assert!(component.contains("className=\"showcase mx-auto"));
        assert!(component.contains("<li>Tailwind CSS utility classes</li>"));
        assert!(component.contains("<li>React Router navigation</li>"));
        assert!(component.contains("Clicked {count} times"));
    }

    #[test]
    fn test_preact_component_uses_named_export() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context(dir.path(), Framework::Preact, Language::JavaScript, showcase_with(false, false));
        let component = render_component(&ctx.choices);

        assert!(component.contains("from 'preact/hooks'"));
        assert!(component.contains("export function App()"));
        assert!(component.contains("class=\"showcase\""));
        assert!(!component.contains("export default"));
    }

    #[test]
    fn test_vue_component_renders_router_view() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context(dir.path(), Framework::Vue, Language::TypeScript, showcase_with(false, true));
        let component = render_component(&ctx.choices);

        assert!(component.starts_with("<script setup lang=\"ts\">"));
        assert!(component.contains("{{ count }}"));
        assert!(component.contains("<RouterView />"));
    }

    #[test]
    fn test_stylesheet_keeps_tailwind_directives() {
        let dir = tempfile::tempdir().unwrap();
        let with = context(dir.path(), Framework::Svelte, Language::TypeScript, showcase_with(true, false));
        let without = context(dir.path(), Framework::Svelte, Language::TypeScript, showcase_with(false, false));

        let css = render_stylesheet(&with.choices);
        assert!(css.starts_with(TAILWIND_DIRECTIVES));
        assert!(css.contains("@keyframes float"));
        assert!(!render_stylesheet(&without.choices).contains("@tailwind"));
    }

    #[tokio::test]
    async fn test_run_overwrites_component_and_stylesheet() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = scaffolded(dir.path(), Framework::Svelte, Language::JavaScript, showcase_with(false, false));

        run(&ctx).await.unwrap();

        let app = std::fs::read_to_string(ctx.path("src/App.svelte")).unwrap();
        assert!(app.contains("let count = $state(0)"));
        let css = std::fs::read_to_string(ctx.path("src/app.css")).unwrap();
        assert!(css.contains("@keyframes slide-up"));
    }

    #[tokio::test]
    async fn test_router_patch_survives_showcase() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context(dir.path(), Framework::React, Language::TypeScript, showcase_with(true, true));

        let report = materialize(&ctx, &FakeRunner::new(), &mut ()).await.unwrap();
        assert!(report.ran(Step::Showcase));

        let main = std::fs::read_to_string(ctx.path("src/main.tsx")).unwrap();
        assert!(main.contains("<RouterProvider router={router} />"));
        let css = std::fs::read_to_string(ctx.path("src/index.css")).unwrap();
        assert!(css.starts_with("@tailwind base;"));
    }
}
