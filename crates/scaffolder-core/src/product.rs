//! Product configuration trait for CLI binaries
//!
//! Each binary (vite-setup, react-setup) implements this trait to pick its
//! name policy, the optional features it offers, and its user-facing text.

use crate::choices::{ChoiceModel, Feature, NamePolicy};
use crate::resolver;
use crate::runtime::PackageManager;

/// Configuration trait for the scaffolder variants
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name (binary name)
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// One-line tagline shown under the intro
    fn tagline(&self) -> &'static str;

    /// Rules applied to the project name prompt
    fn name_policy(&self) -> NamePolicy;

    /// Optional features this variant offers, in prompt order
    fn offered_features(&self) -> &'static [Feature];

    /// Environment variable overriding the package manager binary
    fn package_manager_env(&self) -> &'static str;

    /// Hints printed after a fatal failure
    fn troubleshooting(&self) -> Vec<String> {
        vec![
            "Check your internet connection".to_string(),
            "Make sure Node.js is installed (node --version)".to_string(),
            "Try running the command again".to_string(),
        ]
    }

    /// Generate the "next steps" instructions after project creation
    fn next_steps(&self, choices: &ChoiceModel, package_manager: &PackageManager) -> Vec<String> {
        vec![
            format!("cd {}", choices.project_name),
            package_manager.run_script("dev"),
            "Open http://localhost:5173".to_string(),
        ]
    }

    /// Extra tips keyed on the chosen features
    fn tips(&self, choices: &ChoiceModel) -> Vec<String> {
        let mut tips = Vec::new();
        if choices.features.styling {
            tips.push(
                "Tailwind: try className=\"bg-blue-500 text-white p-4 rounded-lg\"".to_string(),
            );
        }
        if choices.features.router {
            if let Some(url) = resolver::router_docs_url(choices.framework) {
                tips.push(format!("Router docs: {}", url));
            }
        }
        tips
    }

    /// Whether this variant offers `feature` at all
    fn offers(&self, feature: Feature) -> bool {
        self.offered_features().contains(&feature)
    }
}
