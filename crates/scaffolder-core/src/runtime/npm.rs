//! Command builders for the generator and the package installer

use crate::runtime::process::CommandSpec;
use std::path::Path;

/// Package manager used when no override is set
pub const DEFAULT_PACKAGE_MANAGER: &str = "npm";

/// The package manager binary and the commands built from it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageManager {
    program: String,
}

impl PackageManager {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Read the binary from `env_var`, falling back to npm
    pub fn from_env(env_var: &str) -> Self {
        match std::env::var(env_var) {
            Ok(program) if !program.trim().is_empty() => Self::new(program.trim()),
            _ => Self::new(DEFAULT_PACKAGE_MANAGER),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// `npm create vite@latest <name> -- --template <id>`, run in the parent directory
    pub fn create_vite(&self, parent: &Path, project_name: &str, template_id: &str) -> CommandSpec {
        CommandSpec::new(
            &self.program,
            [
                "create",
                "vite@latest",
                project_name,
                "--",
                "--template",
                template_id,
            ],
            parent,
        )
        .inherit_output()
    }

    /// Install everything listed in the manifest
    pub fn install_all(&self, project_root: &Path) -> CommandSpec {
        CommandSpec::new(&self.program, ["install"], project_root)
    }

    /// Add named packages at their latest version
    pub fn add(&self, project_root: &Path, packages: &[&str], dev: bool) -> CommandSpec {
        let mut args = vec!["install".to_string()];
        if dev {
            args.push("-D".to_string());
        }
        args.extend(packages.iter().map(|p| format!("{}@latest", p)));
        CommandSpec::new(&self.program, args, project_root)
    }

    /// Command the user should run to start the dev server
    pub fn run_script(&self, script: &str) -> String {
        format!("{} run {}", self.program, script)
    }
}

impl Default for PackageManager {
    fn default() -> Self {
        Self::new(DEFAULT_PACKAGE_MANAGER)
    }
}
