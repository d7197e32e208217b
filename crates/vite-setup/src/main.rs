//! vite-setup - Interactive setup for Vite frontend projects

use clap::Parser;
use scaffolder_core::tui::{self, CreateArgs};
use scaffolder_core::{Feature, Framework, Language, NamePolicy, ProductConfig};
use std::path::PathBuf;

/// CLI version
pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");

/// vite-setup product configuration
#[derive(Clone)]
pub struct ViteSetupConfig;

impl ProductConfig for ViteSetupConfig {
    fn name(&self) -> &'static str {
        "vite-setup"
    }

    fn display_name(&self) -> &'static str {
        "Vite Setup"
    }

    fn tagline(&self) -> &'static str {
        "Create a Vite project with Tailwind, routing, Prettier and more"
    }

    fn name_policy(&self) -> NamePolicy {
        NamePolicy::Strict
    }

    fn offered_features(&self) -> &'static [Feature] {
        &Feature::ALL
    }

    fn package_manager_env(&self) -> &'static str {
        "VITE_SETUP_NPM"
    }
}

#[derive(Parser, Debug)]
#[command(name = "vite-setup")]
#[command(about = "Interactive setup for Vite projects with Tailwind, routing, Prettier and more")]
#[command(version)]
pub struct Args {
    /// Project name
    pub name: Option<String>,

    /// Framework to scaffold
    #[arg(short, long, value_enum)]
    pub framework: Option<Framework>,

    /// Source language (typescript/ts or javascript/js)
    #[arg(short, long, value_enum)]
    pub language: Option<Language>,

    /// YAML file with pre-filled answers
    #[arg(short, long)]
    pub preset: Option<PathBuf>,

    /// Accept defaults for every unanswered prompt (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,
}

impl From<Args> for CreateArgs {
    fn from(args: Args) -> Self {
        CreateArgs {
            name: args.name,
            framework: args.framework,
            language: args.language,
            preset: args.preset,
            yes: args.yes,
        }
    }
}

#[tokio::main]
async fn main() {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    let config = ViteSetupConfig;

    let result = scaffolder_core::run(&config, args.into(), CLI_VERSION).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    if let Err(error) = result {
        tui::print_failure(&config, &error);
        std::process::exit(1);
    }
}
