//! Router installation and wiring

use super::patch::{apply_rules, PatchOutcome, PatchRule};
use super::{read_file, write_file, ProjectContext, StepOutcome};
use crate::choices::{Framework, Language};
use crate::resolver;
use crate::runtime::CommandRunner;
use anyhow::Result;

/// Router config file plus the rules that hook it into the entry module
#[derive(Debug, Clone)]
pub struct RouterWiring {
    pub router_file: String,
    pub router_source: &'static str,
    pub entry_file: String,
    pub rules: &'static [PatchRule],
}

const REACT_ROUTER: &str = r#"import { createBrowserRouter } from 'react-router-dom'
import App from '../App'

export const router = createBrowserRouter([
  {
    path: '/',
    element: <App />,
  },
])
"#;

const REACT_RULES: &[PatchRule] = &[
    PatchRule {
        name: "App import",
        find: &[
            "import App from './App.tsx'",
            "import App from './App.jsx'",
            "import App from './App'",
            "import App from \"./App.tsx\"",
            "import App from \"./App.jsx\"",
            "import App from \"./App\"",
        ],
        replace: "import { RouterProvider } from 'react-router-dom'\nimport { router } from './router'",
    },
    PatchRule {
        name: "<App /> root element",
        find: &["<App />", "<App/>"],
        replace: "<RouterProvider router={router} />",
    },
];

const VUE_ROUTER: &str = r#"import { createRouter, createWebHistory } from 'vue-router'

const router = createRouter({
  history: createWebHistory(import.meta.env.BASE_URL),
  routes: [
    {
      path: '/',
      name: 'home',
      component: () => import('../components/HelloWorld.vue'),
    },
  ],
})

export default router
"#;

const VUE_RULES: &[PatchRule] = &[
    PatchRule {
        name: "App import",
        find: &["import App from './App.vue'", "import App from \"./App.vue\""],
        replace: "import App from './App.vue'\nimport router from './router'",
    },
    PatchRule {
        name: "createApp(App).mount",
        find: &["createApp(App).mount("],
        replace: "createApp(App).use(router).mount(",
    },
];

/// How the router is wired for a framework, if the entry module is patched at all
pub fn router_wiring(framework: Framework, language: Language) -> Option<RouterWiring> {
    match framework {
        Framework::React => Some(RouterWiring {
            router_file: format!(
                "src/router/index.{}",
                resolver::file_extension(framework, language)
            ),
            router_source: REACT_ROUTER,
            entry_file: resolver::entry_file(framework, language),
            rules: REACT_RULES,
        }),
        Framework::Vue => Some(RouterWiring {
            router_file: format!("src/router/index.{}", resolver::script_extension(language)),
            router_source: VUE_ROUTER,
            entry_file: resolver::entry_file(framework, language),
            rules: VUE_RULES,
        }),
        // svelte-routing is used from components, nothing to patch
        Framework::Svelte | Framework::Preact | Framework::Lit | Framework::Vanilla => None,
    }
}

pub async fn run<R: CommandRunner>(ctx: &ProjectContext, runner: &R) -> Result<StepOutcome> {
    let framework = ctx.choices.framework;
    let package = ctx
        .binding
        .router_package
        .ok_or_else(|| anyhow::anyhow!("{} has no router package", framework))?;

    runner
        .run(&ctx.package_manager.add(&ctx.root, &[package], false))
        .await?;

    let Some(wiring) = router_wiring(framework, ctx.choices.language) else {
        return Ok(StepOutcome::Success(format!(
            "Latest {} installed!",
            resolver::router_display_name(framework).unwrap_or(package)
        )));
    };

    // The router file is only written once the entry is known to accept it
    let entry = read_file(ctx, &wiring.entry_file).await?;
    match apply_rules(&entry, wiring.rules) {
        PatchOutcome::Applied(patched) => {
            write_file(ctx, &wiring.router_file, wiring.router_source).await?;
            write_file(ctx, &wiring.entry_file, &patched).await?;
            Ok(StepOutcome::Success(format!(
                "Latest {} installed and wired into {}",
                package, wiring.entry_file
            )))
        }
        PatchOutcome::Unmatched(missed) => Ok(StepOutcome::Warning {
            message: format!(
                "{} installed, but {} did not match the expected layout ({})",
                package,
                wiring.entry_file,
                missed.join(", ")
            ),
            hint: Some(format!(
                "Create {} and register it in {} manually ({})",
                wiring.router_file,
                wiring.entry_file,
                resolver::router_docs_url(framework).unwrap_or(package)
            )),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::choices::Features;
    use crate::materializer::testing::{scaffolded, FakeRunner};

    fn router() -> Features {
        Features {
            router: true,
            ..Features::default()
        }
    }

    #[tokio::test]
    async fn test_react_entry_is_patched() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = scaffolded(dir.path(), Framework::React, Language::JavaScript, router());
        let runner = FakeRunner::new();

        let outcome = run(&ctx, &runner).await.unwrap();
        assert!(!outcome.is_warning());

        assert!(runner.ran(|c| c.args == ["install", "react-router-dom@latest"]));
        assert!(ctx.path("src/router/index.jsx").is_file());

        let main = std::fs::read_to_string(ctx.path("src/main.jsx")).unwrap();
        assert!(main.contains("import { router } from './router'"));
        assert!(main.contains("<RouterProvider router={router} />"));
        assert!(!main.contains("import App from"));
        assert!(main.contains("<StrictMode>"));
    }

    #[tokio::test]
    async fn test_vue_entry_uses_router() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = scaffolded(dir.path(), Framework::Vue, Language::TypeScript, router());
        let runner = FakeRunner::new();

        run(&ctx, &runner).await.unwrap();

        assert!(ctx.path("src/router/index.ts").is_file());
        let main = std::fs::read_to_string(ctx.path("src/main.ts")).unwrap();
        assert!(main.contains("createApp(App).use(router).mount('#app')"));
        assert!(main.contains("import router from './router'"));
    }

    #[tokio::test]
    async fn test_svelte_installs_without_patching() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = scaffolded(dir.path(), Framework::Svelte, Language::TypeScript, router());
        let runner = FakeRunner::new();

        let outcome = run(&ctx, &runner).await.unwrap();
        assert!(!outcome.is_warning());
        assert!(runner.ran(|c| c.has_args(&["svelte-routing@latest"])));
        assert!(!ctx.path("src/router").exists());
    }

    #[tokio::test]
    async fn test_unrecognized_entry_is_left_alone() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = scaffolded(dir.path(), Framework::React, Language::TypeScript, router());
        let custom = "import Root from './Root'\nrender(<Root />)\n";
        std::fs::write(ctx.path("src/main.tsx"), custom).unwrap();

        let outcome = run(&ctx, &FakeRunner::new()).await.unwrap();
        match outcome {
            StepOutcome::Warning { message, hint } => {
                assert!(message.contains("App import"));
                assert!(message.contains("<App /> root element"));
                let hint = hint.unwrap();
                assert!(hint.contains("src/main.tsx"));
                assert!(hint.contains("src/router/index.tsx"));
            }
            other => panic!("expected warning, got {:?}", other),
        }
        assert_eq!(
            std::fs::read_to_string(ctx.path("src/main.tsx")).unwrap(),
            custom
        );
        assert!(!ctx.path("src/router").exists());
    }

    #[test]
    fn test_router_and_showcase_never_share_a_file() {
        for framework in Framework::ALL {
            for language in [Language::TypeScript, Language::JavaScript] {
                let Some(wiring) = router_wiring(framework, language) else {
                    continue;
                };
                let component = resolver::main_component(framework, language);
                assert_ne!(Some(wiring.entry_file.clone()), component);
                assert_ne!(Some(wiring.router_file.clone()), component);
            }
        }
    }
}
