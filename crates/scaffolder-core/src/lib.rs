//! Scaffolder Core - Shared library for Vite project setup CLIs
//!
//! This library turns a set of stack choices (framework, language, optional
//! features) into a ready-to-run frontend project. It is used by multiple CLI
//! binaries (`vite-setup`, `react-setup`) that share the same materialization
//! logic but differ in name rules and the features they offer.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Choice model, template resolution, toolchain detection, process execution
//! - **Layer 2: Workflow Orchestration** - `ProductConfig` trait and the step-by-step materializer
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use scaffolder_core::choices::{ChoiceModel, Features, Framework, Language, NamePolicy, ProjectName};
//! use scaffolder_core::materializer::{materialize, ProjectContext};
//! use scaffolder_core::runtime::{PackageManager, SystemRunner};
//!
//! let name = ProjectName::parse("my-app", NamePolicy::Strict)?;
//! let choices = ChoiceModel::new(name, Framework::Vue, Language::TypeScript, Features::default());
//! let ctx = ProjectContext::new(choices, &std::env::current_dir()?, PackageManager::default());
//! let report = materialize(&ctx, &SystemRunner, &mut ()).await?;
//! ```

pub mod choices;
pub mod config;
pub mod materializer;
pub mod product;
pub mod resolver;
pub mod runtime;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use choices::{ChoiceModel, Feature, Features, Framework, Language, NamePolicy, ProjectName};
pub use materializer::{materialize, MaterializeError, MaterializeReport, ProjectContext, Step, StepOutcome};
pub use product::ProductConfig;
pub use resolver::TemplateBinding;
pub use runtime::{check_toolchain, CommandRunner, PackageManager, RuntimeInfo};

#[cfg(feature = "tui")]
pub use tui::run;
