//! Test doubles for the materializer

use super::ProjectContext;
use crate::choices::{ChoiceModel, Features, Framework, Language, NamePolicy, ProjectName};
use crate::resolver;
use crate::runtime::{CommandRunner, CommandSpec, PackageManager, ProcessError};
use std::cell::RefCell;
use std::path::Path;

pub(crate) const PROJECT_NAME: &str = "demo-app";

pub(crate) fn context(
    parent: &Path,
    framework: Framework,
    language: Language,
    features: Features,
) -> ProjectContext {
    let name = ProjectName::parse(PROJECT_NAME, NamePolicy::Strict).unwrap();
    let choices = ChoiceModel::new(name, framework, language, features);
    ProjectContext::new(choices, parent, PackageManager::default())
}

/// Context whose project directory already holds a generator-like scaffold
pub(crate) fn scaffolded(
    parent: &Path,
    framework: Framework,
    language: Language,
    features: Features,
) -> ProjectContext {
    let ctx = context(parent, framework, language, features);
    write_scaffold(&ctx.root, ctx.binding.generator_template_id);
    ctx
}

type Predicate = Box<dyn Fn(&CommandSpec) -> bool>;

/// Records commands instead of running them
///
/// `create` commands lay down a minimal create-vite style scaffold so later
/// steps have files to work with.
pub(crate) struct FakeRunner {
    commands: RefCell<Vec<CommandSpec>>,
    failures: Vec<Predicate>,
}

impl FakeRunner {
    pub(crate) fn new() -> Self {
        Self {
            commands: RefCell::new(Vec::new()),
            failures: Vec::new(),
        }
    }

    /// Make every command matching `predicate` exit with code 1
    pub(crate) fn fail_when(mut self, predicate: impl Fn(&CommandSpec) -> bool + 'static) -> Self {
        self.failures.push(Box::new(predicate));
        self
    }

    pub(crate) fn commands(&self) -> Vec<CommandSpec> {
        self.commands.borrow().clone()
    }

    pub(crate) fn ran(&self, predicate: impl Fn(&CommandSpec) -> bool) -> bool {
        self.commands.borrow().iter().any(predicate)
    }
}

impl CommandRunner for FakeRunner {
    async fn run(&self, command: &CommandSpec) -> Result<(), ProcessError> {
        self.commands.borrow_mut().push(command.clone());

        if self.failures.iter().any(|fails| fails(command)) {
            return Err(ProcessError::Exit {
                command: command.to_string(),
                code: 1,
                stderr: "simulated failure".to_string(),
            });
        }

        if command.has_args(&["create"]) {
            let name = &command.args[2];
            let template = command.args.last().cloned().unwrap_or_default();
            write_scaffold(&command.cwd.join(name), &template);
        }

        Ok(())
    }
}

/// Lay down the handful of files create-vite produces for `template`
pub(crate) fn write_scaffold(root: &Path, template: &str) {
    let typescript = template.ends_with("-ts");
    let framework_id = template.trim_end_matches("-ts");
    let framework: Framework = framework_id.parse().unwrap();
    let language = if typescript {
        Language::TypeScript
    } else {
        Language::JavaScript
    };
    let ext = resolver::file_extension(framework, language);

    let mut files: Vec<(String, String)> = vec![
        (
            "package.json".to_string(),
            format!(
                "{{\n  \"name\": \"{}\",\n  \"private\": true,\n  \"scripts\": {{\n    \"dev\": \"vite\",\n    \"build\": \"vite build\"\n  }}\n}}\n",
                root.file_name().unwrap().to_string_lossy()
            ),
        ),
        (".gitignore".to_string(), "node_modules\ndist\n*.local\n".to_string()),
        ("index.html".to_string(), "<div id=\"root\"></div>\n".to_string()),
    ];

    match framework {
        Framework::React => {
            files.push((
                format!("src/main.{}", ext),
                format!(
                    "import {{ StrictMode }} from 'react'\n\
                     import {{ createRoot }} from 'react-dom/client'\n\
                     import './index.css'\n\
                     import App from './App.{ext}'\n\
                     \n\
                     createRoot(document.getElementById('root')!).render(\n  <StrictMode>\n    <App />\n  </StrictMode>,\n)\n"
                ),
            ));
            files.push((format!("src/App.{}", ext), "export default function App() {}\n".to_string()));
            files.push(("src/index.css".to_string(), ":root {}\n".to_string()));
        }
        Framework::Preact => {
            files.push((format!("src/main.{}", ext), "render(<App />, root)\n".to_string()));
            files.push((format!("src/app.{}", ext), "export function App() {}\n".to_string()));
            files.push(("src/index.css".to_string(), ":root {}\n".to_string()));
        }
        Framework::Vue => {
            let script = resolver::script_extension(language);
            files.push((
                format!("src/main.{}", script),
                "import { createApp } from 'vue'\nimport './style.css'\nimport App from './App.vue'\n\ncreateApp(App).mount('#app')\n".to_string(),
            ));
            files.push(("src/App.vue".to_string(), "<template></template>\n".to_string()));
            files.push(("src/style.css".to_string(), ":root {}\n".to_string()));
        }
        Framework::Svelte => {
            let script = resolver::script_extension(language);
            files.push((format!("src/main.{}", script), "import './app.css'\n".to_string()));
            files.push(("src/App.svelte".to_string(), "<main></main>\n".to_string()));
            files.push(("src/app.css".to_string(), ":root {}\n".to_string()));
        }
        Framework::Lit | Framework::Vanilla => {
            let script = resolver::script_extension(language);
            files.push((format!("src/main.{}", script), "import './style.css'\n".to_string()));
            files.push(("src/style.css".to_string(), ":root {}\n".to_string()));
        }
    }

    for (relative, contents) in files {
        let path = root.join(relative);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, contents).unwrap();
    }
}
