//! Project materialization: choices in, files and installed packages out
//!
//! A run is a fixed, ordered plan of [`Step`]s. Each step either succeeds,
//! succeeds with a warning, or fails. A failing mandatory step aborts the
//! whole run with [`MaterializeError::Fatal`]; a failing optional step is
//! downgraded to [`StepOutcome::Warning`] and the plan continues. Nothing is
//! rolled back.

pub mod env_files;
pub mod layout;
pub mod linting;
pub mod patch;
pub mod readme;
pub mod routing;
pub mod scaffold;
pub mod showcase;
pub mod styling;

#[cfg(test)]
pub(crate) mod testing;

use crate::choices::{ChoiceModel, Features};
use crate::resolver::TemplateBinding;
use crate::runtime::{CommandRunner, PackageManager};
use anyhow::{Context, Result};
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;

/// A single materialization step, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    Scaffold,
    Install,
    Styling,
    Routing,
    FolderStructure,
    Linting,
    EnvFiles,
    Readme,
    Showcase,
}

impl Step {
    pub const ORDER: [Step; 9] = [
        Step::Scaffold,
        Step::Install,
        Step::Styling,
        Step::Routing,
        Step::FolderStructure,
        Step::Linting,
        Step::EnvFiles,
        Step::Readme,
        Step::Showcase,
    ];

    /// Failure of a mandatory step aborts the run
    pub fn is_mandatory(&self) -> bool {
        matches!(self, Step::Scaffold | Step::Install | Step::Readme)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Step::Scaffold => "Project generation",
            Step::Install => "Dependency installation",
            Step::Styling => "Tailwind CSS setup",
            Step::Routing => "Router setup",
            Step::FolderStructure => "Folder structure",
            Step::Linting => "Prettier setup",
            Step::EnvFiles => "Environment files",
            Step::Readme => "README",
            Step::Showcase => "Showcase content",
        }
    }

    /// Whether the step belongs in the plan for these choices
    fn enabled(&self, features: &Features, binding: &TemplateBinding) -> bool {
        match self {
            Step::Scaffold | Step::Install | Step::Readme => true,
            Step::Styling => features.styling,
            Step::Routing => features.router && binding.router_package.is_some(),
            Step::FolderStructure => features.folder_structure,
            Step::Linting => features.linting,
            Step::EnvFiles => features.env_files,
            Step::Showcase => features.showcase,
        }
    }

    /// Manual follow-up suggested when an optional step fails
    fn remediation_hint(&self, ctx: &ProjectContext) -> Option<String> {
        match self {
            Step::Styling => Some(
                "You can set up Tailwind manually later with: npx tailwindcss init -p".to_string(),
            ),
            Step::Routing => ctx.binding.router_package.map(|package| {
                format!(
                    "Install the router manually with: {}",
                    ctx.package_manager
                        .add(&ctx.root, &[package], false)
                )
            }),
            Step::Linting => Some(format!(
                "Install Prettier manually with: {}",
                ctx.package_manager
                    .add(&ctx.root, linting::packages(ctx.choices.framework), true)
            )),
            _ => None,
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Result of a step that did not abort the run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Success(String),
    Warning {
        message: String,
        hint: Option<String>,
    },
}

impl StepOutcome {
    pub fn is_warning(&self) -> bool {
        matches!(self, StepOutcome::Warning { .. })
    }
}

#[derive(Debug, Error)]
pub enum MaterializeError {
    #[error("{step} failed: {error:#}")]
    Fatal { step: Step, error: anyhow::Error },
}

impl MaterializeError {
    pub fn step(&self) -> Step {
        match self {
            MaterializeError::Fatal { step, .. } => *step,
        }
    }
}

/// Everything a step needs to know about the project being built
#[derive(Debug, Clone)]
pub struct ProjectContext {
    pub choices: ChoiceModel,
    pub binding: TemplateBinding,
    pub package_manager: PackageManager,
    /// Directory the generator runs in
    pub parent_dir: PathBuf,
    /// `<parent_dir>/<project name>`
    pub root: PathBuf,
}

impl ProjectContext {
    pub fn new(choices: ChoiceModel, parent_dir: &Path, package_manager: PackageManager) -> Self {
        let binding = TemplateBinding::resolve(choices.framework, choices.language);
        let root = parent_dir.join(choices.project_name.as_str());
        Self {
            choices,
            binding,
            package_manager,
            parent_dir: parent_dir.to_path_buf(),
            root,
        }
    }

    /// Absolute path of a project-relative file
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    /// The ordered list of steps this run will execute
    pub fn plan(&self) -> Vec<Step> {
        Step::ORDER
            .into_iter()
            .filter(|step| step.enabled(&self.choices.features, &self.binding))
            .collect()
    }
}

/// Progress callbacks, implemented by the terminal UI
pub trait StepObserver {
    fn step_started(&mut self, _step: Step, _ctx: &ProjectContext) {}
    fn step_finished(&mut self, _step: Step, _outcome: &StepOutcome) {}
    fn step_failed(&mut self, _step: Step, _error: &anyhow::Error) {}
}

/// Observer that ignores every event
impl StepObserver for () {}

/// Outcomes of every step that ran
#[derive(Debug, Clone, Default)]
pub struct MaterializeReport {
    pub outcomes: Vec<(Step, StepOutcome)>,
}

impl MaterializeReport {
    pub fn ran(&self, step: Step) -> bool {
        self.outcomes.iter().any(|(s, _)| *s == step)
    }

    pub fn outcome(&self, step: Step) -> Option<&StepOutcome> {
        self.outcomes
            .iter()
            .find(|(s, _)| *s == step)
            .map(|(_, outcome)| outcome)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &(Step, StepOutcome)> {
        self.outcomes.iter().filter(|(_, o)| o.is_warning())
    }
}

/// Execute the plan for `ctx`, one step at a time
pub async fn materialize<R, O>(
    ctx: &ProjectContext,
    runner: &R,
    observer: &mut O,
) -> Result<MaterializeReport, MaterializeError>
where
    R: CommandRunner,
    O: StepObserver,
{
    let mut report = MaterializeReport::default();

    for step in ctx.plan() {
        observer.step_started(step, ctx);

        let outcome = match run_step(step, ctx, runner).await {
            Ok(outcome) => outcome,
            Err(error) if step.is_mandatory() => {
                observer.step_failed(step, &error);
                return Err(MaterializeError::Fatal { step, error });
            }
            Err(error) => StepOutcome::Warning {
                message: format!("{} failed: {:#}", step, error),
                hint: step.remediation_hint(ctx),
            },
        };

        observer.step_finished(step, &outcome);
        report.outcomes.push((step, outcome));
    }

    Ok(report)
}

async fn run_step<R: CommandRunner>(
    step: Step,
    ctx: &ProjectContext,
    runner: &R,
) -> Result<StepOutcome> {
    match step {
        Step::Scaffold => scaffold::generate(ctx, runner).await,
        Step::Install => scaffold::install(ctx, runner).await,
        Step::Styling => styling::run(ctx, runner).await,
        Step::Routing => routing::run(ctx, runner).await,
        Step::FolderStructure => layout::run(ctx).await,
        Step::Linting => linting::run(ctx, runner).await,
        Step::EnvFiles => env_files::run(ctx).await,
        Step::Readme => readme::run(ctx).await,
        Step::Showcase => showcase::run(ctx).await,
    }
}

/// Write a project-relative file, creating parent directories
pub(crate) async fn write_file(ctx: &ProjectContext, relative: &str, contents: &str) -> Result<()> {
    let path = ctx.path(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(&path, contents)
        .await
        .with_context(|| format!("Failed to write file: {}", path.display()))
}

pub(crate) async fn read_file(ctx: &ProjectContext, relative: &str) -> Result<String> {
    let path = ctx.path(relative);
    fs::read_to_string(&path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))
}

/// Count files under the project root, skipping `node_modules`
pub fn count_project_files(root: &Path) -> usize {
    walkdir::WalkDir::new(root)
        .into_iter()
        .filter_entry(|e| e.file_name() != "node_modules" && e.file_name() != ".git")
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .count()
}

#[cfg(test)]
mod tests {
    use super::testing::{context, FakeRunner};
    use super::*;
    use crate::choices::{Framework, Language};

    fn all_features() -> Features {
        Features {
            styling: true,
            router: true,
            folder_structure: true,
            linting: true,
            env_files: true,
            showcase: true,
        }
    }

    #[test]
    fn test_plan_keeps_fixed_order() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context(dir.path(), Framework::React, Language::TypeScript, all_features());
        assert_eq!(ctx.plan(), Step::ORDER.to_vec());
    }

    #[test]
    fn test_plan_minimal() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context(
            dir.path(),
            Framework::Vanilla,
            Language::JavaScript,
            Features::default(),
        );
        assert_eq!(ctx.plan(), vec![Step::Scaffold, Step::Install, Step::Readme]);
    }

    #[test]
    fn test_plan_never_routes_without_router_package() {
        let dir = tempfile::tempdir().unwrap();
        for framework in [Framework::Preact, Framework::Lit, Framework::Vanilla] {
            let ctx = context(dir.path(), framework, Language::TypeScript, all_features());
            assert!(!ctx.plan().contains(&Step::Routing), "{}", framework);
        }
    }

    #[tokio::test]
    async fn test_full_react_typescript_run() {
        let dir = tempfile::tempdir().unwrap();
        let features = Features {
            styling: true,
            router: true,
            folder_structure: true,
            ..Features::default()
        };
        let ctx = context(dir.path(), Framework::React, Language::TypeScript, features);
        let runner = FakeRunner::new();

        let report = materialize(&ctx, &runner, &mut ()).await.unwrap();
        assert_eq!(report.warnings().count(), 0, "{:?}", report.outcomes);

        let tailwind = std::fs::read_to_string(ctx.path("tailwind.config.js")).unwrap();
        assert!(tailwind.contains("./src/**/*.{js,jsx,ts,tsx}"));

        assert!(runner.ran(|c| c.has_args(&["install", "react-router-dom@latest"])));
        assert!(ctx.path("src/router/index.tsx").is_file());
        let main = std::fs::read_to_string(ctx.path("src/main.tsx")).unwrap();
        assert!(main.contains("<RouterProvider router={router} />"));

        for folder in ["components", "pages", "hooks", "assets"] {
            assert!(ctx.path(&format!("src/{}/README.md", folder)).is_file());
        }

        let readme = std::fs::read_to_string(ctx.path("README.md")).unwrap();
        assert!(readme.contains("TypeScript"));
        assert!(readme.contains("REACT"));
    }

    #[tokio::test]
    async fn test_install_failure_halts_before_styling() {
        let dir = tempfile::tempdir().unwrap();
        let features = Features {
            styling: true,
            ..Features::default()
        };
        let ctx = context(dir.path(), Framework::Vue, Language::JavaScript, features);
        let runner = FakeRunner::new().fail_when(|c| c.args == ["install"]);

        let err = materialize(&ctx, &runner, &mut ()).await.unwrap_err();
        assert_eq!(err.step(), Step::Install);
        assert!(!runner.ran(|c| c.has_args(&["tailwindcss@latest"])));
        assert!(!ctx.path("tailwind.config.js").exists());
        assert!(!ctx.path("README.md").exists());
    }

    #[tokio::test]
    async fn test_scaffold_failure_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context(
            dir.path(),
            Framework::Svelte,
            Language::TypeScript,
            Features::default(),
        );
        let runner = FakeRunner::new().fail_when(|c| c.has_args(&["create"]));

        let err = materialize(&ctx, &runner, &mut ()).await.unwrap_err();
        assert_eq!(err.step(), Step::Scaffold);
        assert_eq!(runner.commands().len(), 1);
    }

    #[tokio::test]
    async fn test_styling_failure_is_soft() {
        let dir = tempfile::tempdir().unwrap();
        let features = Features {
            styling: true,
            router: true,
            folder_structure: true,
            ..Features::default()
        };
        let ctx = context(dir.path(), Framework::React, Language::JavaScript, features);
        let runner = FakeRunner::new().fail_when(|c| c.has_args(&["tailwindcss@latest"]));

        let report = materialize(&ctx, &runner, &mut ()).await.unwrap();

        match report.outcome(Step::Styling) {
            Some(StepOutcome::Warning { hint, .. }) => {
                assert!(hint.as_deref().unwrap().contains("npx tailwindcss init -p"));
            }
            other => panic!("expected styling warning, got {:?}", other),
        }
        assert!(report.ran(Step::Routing));
        assert!(report.ran(Step::FolderStructure));
        assert!(report.ran(Step::Readme));
        assert!(ctx.path("README.md").is_file());
    }

    #[derive(Default)]
    struct Recorder {
        started: Vec<Step>,
        finished: Vec<Step>,
        failed: Vec<Step>,
    }

    impl StepObserver for Recorder {
        fn step_started(&mut self, step: Step, _ctx: &ProjectContext) {
            self.started.push(step);
        }
        fn step_finished(&mut self, step: Step, _outcome: &StepOutcome) {
            self.finished.push(step);
        }
        fn step_failed(&mut self, step: Step, _error: &anyhow::Error) {
            self.failed.push(step);
        }
    }

    #[tokio::test]
    async fn test_observer_sees_every_step() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context(
            dir.path(),
            Framework::Lit,
            Language::TypeScript,
            Features::default(),
        );
        let runner = FakeRunner::new().fail_when(|c| c.args == ["install"]);
        let mut recorder = Recorder::default();

        let _ = materialize(&ctx, &runner, &mut recorder).await;
        assert_eq!(recorder.started, vec![Step::Scaffold, Step::Install]);
        assert_eq!(recorder.finished, vec![Step::Scaffold]);
        assert_eq!(recorder.failed, vec![Step::Install]);
    }

    #[test]
    fn test_count_project_files_skips_node_modules() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("node_modules/pkg")).unwrap();
        std::fs::write(dir.path().join("node_modules/pkg/index.js"), "").unwrap();
        std::fs::write(dir.path().join("index.html"), "").unwrap();
        assert_eq!(count_project_files(dir.path()), 1);
    }
}
