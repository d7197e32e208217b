//! react-setup - Quick setup for Vite frontend projects
//!
//! The older, smaller variant: permissive project names and only the
//! styling, router and folder structure add-ons.

use clap::Parser;
use scaffolder_core::tui::{self, CreateArgs};
use scaffolder_core::{Feature, Framework, Language, NamePolicy, ProductConfig};

/// CLI version
pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");

const OFFERED_FEATURES: [Feature; 3] = [Feature::Styling, Feature::Router, Feature::FolderStructure];

/// react-setup product configuration
#[derive(Clone)]
pub struct ReactSetupConfig;

impl ProductConfig for ReactSetupConfig {
    fn name(&self) -> &'static str {
        "react-setup"
    }

    fn display_name(&self) -> &'static str {
        "React Setup"
    }

    fn tagline(&self) -> &'static str {
        "Create a Vite project with Tailwind CSS and routing"
    }

    fn name_policy(&self) -> NamePolicy {
        NamePolicy::Legacy
    }

    fn offered_features(&self) -> &'static [Feature] {
        &OFFERED_FEATURES
    }

    fn package_manager_env(&self) -> &'static str {
        "REACT_SETUP_NPM"
    }
}

#[derive(Parser, Debug)]
#[command(name = "react-setup")]
#[command(about = "Quick setup for Vite frontend projects with Tailwind and routing")]
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
            preset: None,
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

    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    let config = ReactSetupConfig;

    let result = scaffolder_core::run(&config, args.into(), CLI_VERSION).await;
    let _ = console::Term::stderr().show_cursor();

    if let Err(error) = result {
        tui::print_failure(&config, &error);
        std::process::exit(1);
    }
}
