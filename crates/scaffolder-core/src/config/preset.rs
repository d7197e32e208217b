//! Pre-filled answers for the prompts
//!
//! ```yaml
//! name: my-app
//! framework: vue
//! language: ts
//! styling: true
//! router: true
//! ```
//!
//! Any field may be omitted; missing answers are prompted for (or defaulted
//! with `--yes`).

use crate::choices::{Feature, Framework, Language};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Preset {
    pub name: Option<String>,
    pub framework: Option<Framework>,
    pub language: Option<Language>,
    pub styling: Option<bool>,
    pub router: Option<bool>,
    pub folder_structure: Option<bool>,
    pub linting: Option<bool>,
    pub env_files: Option<bool>,
    pub showcase: Option<bool>,
}

impl Preset {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read preset {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Failed to parse preset {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Apply command-line values on top of the preset
    pub fn with_overrides(
        mut self,
        name: Option<String>,
        framework: Option<Framework>,
        language: Option<Language>,
    ) -> Self {
        if name.is_some() {
            self.name = name;
        }
        if framework.is_some() {
            self.framework = framework;
        }
        if language.is_some() {
            self.language = language;
        }
        self
    }

    pub fn feature(&self, feature: Feature) -> Option<bool> {
        match feature {
            Feature::Styling => self.styling,
            Feature::Router => self.router,
            Feature::FolderStructure => self.folder_structure,
            Feature::Linting => self.linting,
            Feature::EnvFiles => self.env_files,
            Feature::Showcase => self.showcase,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_preset() {
        let preset = Preset::parse(
            "name: shop\nframework: svelte\nlanguage: ts\nstyling: true\nrouter: false\n",
        )
        .unwrap();
        assert_eq!(preset.name.as_deref(), Some("shop"));
        assert_eq!(preset.framework, Some(Framework::Svelte));
        assert_eq!(preset.language, Some(Language::TypeScript));
        assert_eq!(preset.feature(Feature::Styling), Some(true));
        assert_eq!(preset.feature(Feature::Router), Some(false));
        assert_eq!(preset.feature(Feature::Linting), None);
    }

    #[test]
    fn test_empty_preset() {
        assert_eq!(Preset::parse("").unwrap(), Preset::default());
    }

    #[test]
    fn test_unknown_fields_rejected() {
        assert!(Preset::parse("tailwind: true\n").is_err());
        assert!(Preset::parse("framework: angular\n").is_err());
    }

    #[test]
    fn test_overrides_win() {
        let preset = Preset::parse("name: a\nframework: vue\n")
            .unwrap()
            .with_overrides(Some("b".to_string()), None, Some(Language::JavaScript));
        assert_eq!(preset.name.as_deref(), Some("b"));
        assert_eq!(preset.framework, Some(Framework::Vue));
        assert_eq!(preset.language, Some(Language::JavaScript));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preset.yaml");
        std::fs::write(&path, "framework: react\nshowcase: true\n").unwrap();

        let preset = Preset::load(&path).unwrap();
        assert_eq!(preset.framework, Some(Framework::React));
        assert_eq!(preset.showcase, Some(true));
        assert!(Preset::load(&dir.path().join("missing.yaml")).is_err());
    }
}
