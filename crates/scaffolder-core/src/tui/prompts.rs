//! Charm-style CLI prompts using cliclack

use super::observer::CliclackObserver;
use crate::choices::{ChoiceModel, Feature, Features, Framework, Language, ProjectName};
use crate::config::Preset;
use crate::materializer::{self, ProjectContext};
use crate::product::ProductConfig;
use crate::runtime::{self, check, PackageManager, SystemRunner};
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};

const DEFAULT_PROJECT_NAME: &str = "my-app";
const NODE_DOWNLOAD_URL: &str = "https://nodejs.org";

/// CLI arguments for the create command
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Project name (prompted when missing)
    pub name: Option<String>,

    /// Framework to scaffold
    pub framework: Option<Framework>,

    /// Source language
    pub language: Option<Language>,

    /// YAML file with pre-filled answers
    pub preset: Option<PathBuf>,

    /// Accept defaults for every unanswered prompt (non-interactive mode)
    pub yes: bool,
}

/// Run the CLI with interactive prompts
pub async fn run<C: ProductConfig>(config: &C, args: CreateArgs, cli_version: &str) -> Result<()> {
    cliclack::intro(format!("{} v{}", config.display_name(), cli_version))?;
    cliclack::log::remark(config.tagline())?;

    let package_manager = PackageManager::from_env(config.package_manager_env());

    // Step 1: Make sure Node.js and the package manager are reachable
    check_toolchain(&package_manager, &args)?;

    // Step 2: Gather answers (preset values first, then flags, then prompts)
    let preset = match &args.preset {
        Some(path) => {
            let preset = Preset::load(path)?;
            cliclack::log::info(format!("Using preset from {}", path.display()))?;
            preset
        }
        None => Preset::default(),
    };
    let preset = preset.with_overrides(args.name.clone(), args.framework, args.language);

    let project_name = select_name(config, &preset, &args)?;
    let framework = select_framework(&preset, &args)?;
    let language = select_language(&preset, &args)?;
    let features = select_features(config, framework, &preset, &args)?;

    let choices = ChoiceModel::new(project_name, framework, language, features);
    print_summary(&choices)?;

    // Step 3: Check the target directory
    let parent_dir = std::env::current_dir().context("Failed to read the current directory")?;
    confirm_target(&parent_dir.join(choices.project_name.as_str()), &args)?;

    // Step 4: Build the project
    let ctx = ProjectContext::new(choices, &parent_dir, package_manager);
    let mut observer = CliclackObserver::new();
    let report = materializer::materialize(&ctx, &SystemRunner, &mut observer).await?;

    let warnings = report.warnings().count();
    let files = materializer::count_project_files(&ctx.root);
    if warnings > 0 {
        cliclack::log::warning(format!(
            "Created {} files in {} ({} optional step(s) need attention)",
            files,
            ctx.root.display(),
            warnings
        ))?;
    } else {
        cliclack::log::success(format!("Created {} files in {}", files, ctx.root.display()))?;
    }

    // Step 5: Show next steps
    print_next_steps(config, &ctx)?;

    Ok(())
}

fn check_toolchain(package_manager: &PackageManager, args: &CreateArgs) -> Result<()> {
    let spinner = cliclack::spinner();
    spinner.start("Checking Node.js...");

    match check::check_toolchain(package_manager.program()) {
        Ok(found) => {
            let info: Vec<String> = found
                .iter()
                .map(|r| format!("{} ({})", r.name, r.version.as_deref().unwrap_or("unknown")))
                .collect();
            spinner.stop(format!("Detected: {}", info.join(", ")));

            let node_version = found
                .iter()
                .find(|r| r.name == "Node.js")
                .and_then(|r| r.version.as_deref());
            if let Some(warning) = node_version.and_then(|v| {
                runtime::check_node_compatibility(v, runtime::MIN_NODE_VERSION)
            }) {
                cliclack::log::warning(warning)?;
            }
            Ok(())
        }
        Err(e) => {
            spinner.error("Missing toolchain");
            cliclack::log::error(format!("{}", e))?;

            if args.yes {
                anyhow::bail!("Please install Node.js and try again.");
            }

            let action: &str = cliclack::select("What would you like to do?")
                .item("docs", format!("Open the Node.js download page ({})", NODE_DOWNLOAD_URL), "")
                .item("continue", "Continue anyway", "The generator will likely fail")
                .item("cancel", "Cancel", "")
                .interact()?;

            match action {
                "docs" => {
                    open::that(NODE_DOWNLOAD_URL)?;
                    cliclack::outro("After installing Node.js, run this command again.")?;
                    std::process::exit(0);
                }
                "continue" => Ok(()),
                _ => anyhow::bail!("Setup cancelled."),
            }
        }
    }
}

fn select_name<C: ProductConfig>(
    config: &C,
    preset: &Preset,
    args: &CreateArgs,
) -> Result<ProjectName> {
    let policy = config.name_policy();

    if let Some(name) = &preset.name {
        match ProjectName::parse(name, policy) {
            Ok(name) => {
                cliclack::log::info(format!("Project name: {}", name))?;
                return Ok(name);
            }
            Err(e) if args.yes => anyhow::bail!("Invalid project name '{}': {}", name, e),
            Err(e) => cliclack::log::warning(format!("Invalid project name '{}': {}", name, e))?,
        }
    } else if args.yes {
        return Ok(ProjectName::parse(DEFAULT_PROJECT_NAME, policy)?);
    }

    let input: String = cliclack::input("What is your project name?")
        .placeholder(DEFAULT_PROJECT_NAME)
        .default_input(DEFAULT_PROJECT_NAME)
        .validate(move |input: &String| policy.validate(input.trim()).map_err(|e| e.to_string()))
        .interact()?;

    Ok(ProjectName::parse(input.trim(), policy)?)
}

fn select_framework(preset: &Preset, args: &CreateArgs) -> Result<Framework> {
    let framework = match preset.framework {
        Some(framework) => framework,
        None if args.yes => Framework::React,
        None => {
            let mut select = cliclack::select("Choose your framework");
            for framework in Framework::ALL {
                select = select.item(
                    framework,
                    format!("{}  {}", framework.emoji(), framework.display_name()),
                    framework.description(),
                );
            }
            select.initial_value(Framework::React).interact()?
        }
    };

    cliclack::log::success(format!(
        "Selected: {} {}",
        framework.emoji(),
        framework.as_str().to_uppercase()
    ))?;
    Ok(framework)
}

fn select_language(preset: &Preset, args: &CreateArgs) -> Result<Language> {
    match preset.language {
        Some(language) => Ok(language),
        None if args.yes => Ok(Language::JavaScript),
        None => Ok(cliclack::select("Choose your language")
            .item(Language::TypeScript, "TypeScript", "Type-safe JavaScript")
            .item(Language::JavaScript, "JavaScript", "Classic and flexible")
            .initial_value(Language::JavaScript)
            .interact()?),
    }
}

/// Ask only about features this variant offers and the framework supports
fn select_features<C: ProductConfig>(
    config: &C,
    framework: Framework,
    preset: &Preset,
    args: &CreateArgs,
) -> Result<Features> {
    let mut features = Features::default();

    for feature in Feature::ALL {
        if !config.offers(feature) || !framework.supports(feature) {
            continue;
        }
        let enabled = match preset.feature(feature) {
            Some(enabled) => enabled,
            None if args.yes => feature.default_enabled(),
            None => {
                let (prompt, hint) = feature_prompt(feature, framework);
                cliclack::confirm(format!("{} ({})", prompt, hint))
                    .initial_value(feature.default_enabled())
                    .interact()?
            }
        };
        features.set(feature, enabled);
    }

    Ok(features)
}

fn feature_prompt(feature: Feature, framework: Framework) -> (String, &'static str) {
    let (prompt, hint) = feature.prompt();
    match feature {
        Feature::Router => (format!("Include {} router?", framework.as_str()), hint),
        _ => (prompt.to_string(), hint),
    }
}

fn print_summary(choices: &ChoiceModel) -> Result<()> {
    let enabled: Vec<&str> = Feature::ALL
        .into_iter()
        .filter(|f| choices.features.get(*f))
        .map(|f| match f {
            Feature::Styling => "Tailwind CSS",
            Feature::Router => "Router",
            Feature::FolderStructure => "Folder structure",
            Feature::Linting => "Prettier",
            Feature::EnvFiles => ".env files",
            Feature::Showcase => "Showcase",
        })
        .collect();

    let features = if enabled.is_empty() {
        "none".to_string()
    } else {
        enabled.join(", ")
    };

    cliclack::note(
        "Project summary",
        format!(
            "Name:      {}\nFramework: {} {}\nLanguage:  {}\nFeatures:  {}",
            choices.project_name,
            choices.framework.emoji(),
            choices.framework,
            choices.language,
            features
        ),
    )?;
    Ok(())
}

fn confirm_target(root: &Path, args: &CreateArgs) -> Result<()> {
    if !root.is_dir() {
        return Ok(());
    }

    let count = std::fs::read_dir(root).map(|entries| entries.count()).unwrap_or(0);
    if count == 0 {
        return Ok(());
    }

    cliclack::log::warning(format!(
        "{} already exists and has {} items",
        root.display(),
        count
    ))?;

    // Auto-confirm with --yes flag
    let confirm = if args.yes {
        true
    } else {
        cliclack::confirm("Continue anyway?")
            .initial_value(false)
            .interact()?
    };

    if !confirm {
        anyhow::bail!("Setup cancelled.");
    }
    Ok(())
}

fn print_next_steps<C: ProductConfig>(config: &C, ctx: &ProjectContext) -> Result<()> {
    let steps = config.next_steps(&ctx.choices, &ctx.package_manager);

    println!();
    println!("  Next steps");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    let tips = config.tips(&ctx.choices);
    if !tips.is_empty() {
        println!();
        for tip in tips {
            println!("  {} {}", "tip:".cyan(), tip);
        }
    }
    println!();

    cliclack::outro("Happy coding!")?;

    Ok(())
}

/// Print a fatal error with troubleshooting hints
pub fn print_failure<C: ProductConfig>(config: &C, error: &anyhow::Error) {
    let rule = "═".repeat(60);

    println!();
    println!("{}", rule.red());
    println!("  {}", "ERROR".red().bold());
    println!("{}", rule.red());
    println!("  {:#}", error);
    println!();
    println!("  {}", "Troubleshooting:".yellow().bold());
    for hint in config.troubleshooting() {
        println!("    • {}", hint);
    }
    println!("    • Run `{} --help` to see every option", config.name());
    println!("{}", rule.red());
}
