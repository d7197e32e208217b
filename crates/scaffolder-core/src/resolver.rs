//! Framework/language → generator artifacts
//!
//! Every lookup is an exhaustive match over the choice enums, so adding a
//! framework fails to compile until each table has an entry for it.

use crate::choices::{Framework, Language};

/// Artifact identifiers derived from a (framework, language) pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateBinding {
    pub generator_template_id: &'static str,
    pub file_extension: &'static str,
    pub router_package: Option<&'static str>,
    pub styling_glob: &'static str,
}

impl TemplateBinding {
    pub fn resolve(framework: Framework, language: Language) -> Self {
        Self {
            generator_template_id: generator_template(framework, language),
            file_extension: file_extension(framework, language),
            router_package: router_package(framework),
            styling_glob: styling_glob(framework),
        }
    }
}

/// Template id understood by `create-vite`
pub fn generator_template(framework: Framework, language: Language) -> &'static str {
    match (framework, language) {
        (Framework::React, Language::TypeScript) => "react-ts",
        (Framework::React, Language::JavaScript) => "react",
        (Framework::Vue, Language::TypeScript) => "vue-ts",
        (Framework::Vue, Language::JavaScript) => "vue",
        (Framework::Svelte, Language::TypeScript) => "svelte-ts",
        (Framework::Svelte, Language::JavaScript) => "svelte",
        (Framework::Preact, Language::TypeScript) => "preact-ts",
        (Framework::Preact, Language::JavaScript) => "preact",
        (Framework::Lit, Language::TypeScript) => "lit-ts",
        (Framework::Lit, Language::JavaScript) => "lit",
        (Framework::Vanilla, Language::TypeScript) => "vanilla-ts",
        (Framework::Vanilla, Language::JavaScript) => "vanilla",
    }
}

/// Extension of component/script files (JSX-capable frameworks get tsx/jsx)
pub fn file_extension(framework: Framework, language: Language) -> &'static str {
    let jsx = matches!(framework, Framework::React | Framework::Preact);
    match (jsx, language) {
        (true, Language::TypeScript) => "tsx",
        (true, Language::JavaScript) => "jsx",
        (false, Language::TypeScript) => "ts",
        (false, Language::JavaScript) => "js",
    }
}

/// Extension of plain script modules such as the Vue router file
pub fn script_extension(language: Language) -> &'static str {
    match language {
        Language::TypeScript => "ts",
        Language::JavaScript => "js",
    }
}

pub fn router_package(framework: Framework) -> Option<&'static str> {
    match framework {
        Framework::React => Some("react-router-dom"),
        Framework::Vue => Some("vue-router"),
        Framework::Svelte => Some("svelte-routing"),
        Framework::Preact | Framework::Lit | Framework::Vanilla => None,
    }
}

pub fn router_display_name(framework: Framework) -> Option<&'static str> {
    match framework {
        Framework::React => Some("React Router"),
        Framework::Vue => Some("Vue Router"),
        Framework::Svelte => Some("Svelte Routing"),
        Framework::Preact | Framework::Lit | Framework::Vanilla => None,
    }
}

pub fn router_docs_url(framework: Framework) -> Option<&'static str> {
    match framework {
        Framework::React => Some("https://reactrouter.com"),
        Framework::Vue => Some("https://router.vuejs.org"),
        Framework::Svelte => Some("https://github.com/EmilTholin/svelte-routing"),
        Framework::Preact | Framework::Lit | Framework::Vanilla => None,
    }
}

/// Content glob for the Tailwind config
pub fn styling_glob(framework: Framework) -> &'static str {
    match framework {
        Framework::Vue => "./src/**/*.{vue,js,ts,jsx,tsx}",
        Framework::Svelte => "./src/**/*.{svelte,js,ts,jsx,tsx}",
        Framework::React | Framework::Preact | Framework::Lit | Framework::Vanilla => {
            "./src/**/*.{js,jsx,ts,tsx}"
        }
    }
}

pub fn docs_url(framework: Framework) -> &'static str {
    match framework {
        Framework::React => "https://react.dev",
        Framework::Vue => "https://vuejs.org",
        Framework::Svelte => "https://svelte.dev",
        Framework::Preact => "https://preactjs.com",
        Framework::Lit => "https://lit.dev",
        Framework::Vanilla => "https://vitejs.dev",
    }
}

/// Entry module the generator writes (`src/main.*`)
pub fn entry_file(framework: Framework, language: Language) -> String {
    match framework {
        Framework::React | Framework::Preact => {
            format!("src/main.{}", file_extension(framework, language))
        }
        Framework::Vue | Framework::Svelte | Framework::Lit | Framework::Vanilla => {
            format!("src/main.{}", script_extension(language))
        }
    }
}

/// Root component the generator writes, if the template has one
pub fn main_component(framework: Framework, language: Language) -> Option<String> {
    let ext = file_extension(framework, language);
    match framework {
        Framework::React => Some(format!("src/App.{}", ext)),
        Framework::Preact => Some(format!("src/app.{}", ext)),
        Framework::Vue => Some("src/App.vue".to_string()),
        Framework::Svelte => Some("src/App.svelte".to_string()),
        Framework::Lit | Framework::Vanilla => None,
    }
}

/// Stylesheets the generator may have produced, in lookup order
pub const STYLESHEET_CANDIDATES: [&str; 3] = ["src/index.css", "src/style.css", "src/app.css"];

/// Subdirectories of `src/` created by the folder-structure step
pub fn folder_layout(framework: Framework) -> [&'static str; 4] {
    match framework {
        Framework::Vue => ["components", "views", "composables", "assets"],
        Framework::Svelte => ["components", "routes", "stores", "assets"],
        Framework::React | Framework::Preact | Framework::Lit | Framework::Vanilla => {
            ["components", "pages", "hooks", "assets"]
        }
    }
}

/// One-line description written into each layout folder
pub fn folder_description(folder: &str) -> &'static str {
    match folder {
        "components" => "Put your reusable components here!",
        "pages" | "views" | "routes" => "Put your page/route components here!",
        "hooks" | "composables" => "Put your custom hooks/composables here!",
        "stores" => "Put your Svelte stores here!",
        _ => "Put your images, fonts, and other files here!",
    }
}
