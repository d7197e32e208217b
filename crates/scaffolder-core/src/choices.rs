//! User choices: project name, framework, language and optional features

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Maximum accepted project name length
pub const MAX_NAME_LEN: usize = 50;

/// Supported frontend frameworks
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Framework {
    React,
    Vue,
    Svelte,
    Preact,
    Lit,
    Vanilla,
}

impl Framework {
    pub const ALL: [Framework; 6] = [
        Framework::React,
        Framework::Vue,
        Framework::Svelte,
        Framework::Preact,
        Framework::Lit,
        Framework::Vanilla,
    ];

    /// Lowercase identifier, as used by the generator
    pub fn as_str(&self) -> &'static str {
        match self {
            Framework::React => "react",
            Framework::Vue => "vue",
            Framework::Svelte => "svelte",
            Framework::Preact => "preact",
            Framework::Lit => "lit",
            Framework::Vanilla => "vanilla",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Framework::React => "React",
            Framework::Vue => "Vue",
            Framework::Svelte => "Svelte",
            Framework::Preact => "Preact",
            Framework::Lit => "Lit",
            Framework::Vanilla => "Vanilla",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Framework::React => "⚛️",
            Framework::Vue => "💚",
            Framework::Svelte => "🔺",
            Framework::Preact => "🔷",
            Framework::Lit => "🔶",
            Framework::Vanilla => "⚡",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Framework::React => "The most popular library for building user interfaces",
            Framework::Vue => "Progressive framework that's easy to learn and powerful",
            Framework::Svelte => "Truly reactive framework with no virtual DOM",
            Framework::Preact => "Fast 3KB alternative to React with the same API",
            Framework::Lit => "Simple, fast, and lightweight web components",
            Framework::Vanilla => "Pure JavaScript with no framework overhead",
        }
    }

    pub fn supports(&self, feature: Feature) -> bool {
        match feature {
            Feature::Styling | Feature::Showcase => matches!(
                self,
                Framework::React | Framework::Vue | Framework::Svelte | Framework::Preact
            ),
            Feature::Router => {
                matches!(self, Framework::React | Framework::Vue | Framework::Svelte)
            }
            Feature::FolderStructure | Feature::Linting | Feature::EnvFiles => true,
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Framework {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Framework::ALL
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown framework: {}", s))
    }
}

/// Source language of the generated project
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[value(name = "typescript", alias = "ts")]
    #[serde(alias = "ts")]
    TypeScript,
    #[value(name = "javascript", alias = "js")]
    #[serde(alias = "js")]
    JavaScript,
}

impl Language {
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::TypeScript => "TypeScript",
            Language::JavaScript => "JavaScript",
        }
    }

    pub fn is_typescript(&self) -> bool {
        matches!(self, Language::TypeScript)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Optional add-ons gating the optional materialization steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    Styling,
    Router,
    FolderStructure,
    Linting,
    EnvFiles,
    Showcase,
}

impl Feature {
    pub const ALL: [Feature; 6] = [
        Feature::Styling,
        Feature::Router,
        Feature::FolderStructure,
        Feature::Linting,
        Feature::EnvFiles,
        Feature::Showcase,
    ];

    /// Prompt text and hint shown next to it
    pub fn prompt(&self) -> (&'static str, &'static str) {
        match self {
            Feature::Styling => ("Add Tailwind CSS?", "Utility-first CSS framework"),
            Feature::Router => ("Include router?", "For multi-page navigation"),
            Feature::FolderStructure => ("Create organized folder structure?", "Recommended"),
            Feature::Linting => ("Add Prettier formatting?", "Consistent code style"),
            Feature::EnvFiles => ("Create .env files?", "Environment variables"),
            Feature::Showcase => ("Replace the starter page with a showcase?", "Demo content"),
        }
    }

    /// Answer used when the user accepts defaults
    pub fn default_enabled(&self) -> bool {
        match self {
            Feature::Styling | Feature::FolderStructure => true,
            Feature::Router | Feature::Linting | Feature::EnvFiles | Feature::Showcase => false,
        }
    }
}

/// Feature flags chosen for a project
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Features {
    pub styling: bool,
    pub router: bool,
    pub folder_structure: bool,
    pub linting: bool,
    pub env_files: bool,
    pub showcase: bool,
}

impl Features {
    pub fn get(&self, feature: Feature) -> bool {
        match feature {
            Feature::Styling => self.styling,
            Feature::Router => self.router,
            Feature::FolderStructure => self.folder_structure,
            Feature::Linting => self.linting,
            Feature::EnvFiles => self.env_files,
            Feature::Showcase => self.showcase,
        }
    }

    pub fn set(&mut self, feature: Feature, enabled: bool) {
        match feature {
            Feature::Styling => self.styling = enabled,
            Feature::Router => self.router = enabled,
            Feature::FolderStructure => self.folder_structure = enabled,
            Feature::Linting => self.linting = enabled,
            Feature::EnvFiles => self.env_files = enabled,
            Feature::Showcase => self.showcase = enabled,
        }
    }

    /// Drop every flag the framework cannot honor
    pub fn normalized_for(mut self, framework: Framework) -> Self {
        for feature in Feature::ALL {
            if !framework.supports(feature) {
                self.set(feature, false);
            }
        }
        self
    }
}

/// Project name validation rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamePolicy {
    /// Letter first, then letters, digits, `-` and `_`
    Strict,
    /// Letters, digits, `-` and `_` in any position
    Legacy,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    #[error("Project name cannot be empty")]
    Empty,
    #[error("Project name must be at most 50 characters")]
    TooLong,
    #[error("Project name must start with a letter")]
    InvalidStart,
    #[error("Project name can only contain letters, numbers, dashes and underscores")]
    InvalidCharacter,
}

impl NamePolicy {
    pub fn validate(&self, input: &str) -> Result<(), NameError> {
        if input.is_empty() {
            return Err(NameError::Empty);
        }
        if input.chars().count() > MAX_NAME_LEN {
            return Err(NameError::TooLong);
        }
        let allowed = |c: char| c.is_ascii_alphanumeric() || c == '-' || c == '_';
        if !input.chars().all(allowed) {
            return Err(NameError::InvalidCharacter);
        }
        if *self == NamePolicy::Strict && !input.starts_with(|c: char| c.is_ascii_alphabetic()) {
            return Err(NameError::InvalidStart);
        }
        Ok(())
    }
}

/// A project name that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectName(String);

impl ProjectName {
    pub fn parse(input: &str, policy: NamePolicy) -> Result<Self, NameError> {
        policy.validate(input)?;
        Ok(Self(input.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Everything the user decided, fixed for the rest of the run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceModel {
    pub project_name: ProjectName,
    pub framework: Framework,
    pub language: Language,
    pub features: Features,
}

impl ChoiceModel {
    pub fn new(
        project_name: ProjectName,
        framework: Framework,
        language: Language,
        features: Features,
    ) -> Self {
        Self {
            project_name,
            framework,
            language,
            features: features.normalized_for(framework),
        }
    }
}
