//! Toolchain detection for Node.js and the package manager

use anyhow::Result;
use std::process::Command;

/// Runtime detection result
#[derive(Debug, Clone)]
pub struct RuntimeInfo {
    pub name: &'static str,
    pub version: Option<String>,
    pub available: bool,
}

/// Run `<program> --version` and record the result
fn probe(name: &'static str, program: &str) -> RuntimeInfo {
    #[cfg(windows)]
    let output = Command::new("cmd")
        .args(["/C", program, "--version"])
        .output();
    #[cfg(not(windows))]
    let output = Command::new(program).arg("--version").output();

    match output {
        Ok(out) if out.status.success() => {
            let version = String::from_utf8_lossy(&out.stdout).trim().to_string();
            RuntimeInfo {
                name,
                version: Some(version),
                available: true,
            }
        }
        _ => RuntimeInfo {
            name,
            version: None,
            available: false,
        },
    }
}

/// Check if Node.js is available
pub fn check_node() -> RuntimeInfo {
    probe("Node.js", "node")
}

/// Check if the package manager binary is available
pub fn check_package_manager(program: &str) -> RuntimeInfo {
    probe("Package manager", program)
}

/// Detect Node.js and the package manager; fail listing whatever is missing
pub fn check_toolchain(package_manager: &str) -> Result<Vec<RuntimeInfo>> {
    let node = check_node();
    let pm = check_package_manager(package_manager);

    let mut missing = Vec::new();
    if !node.available {
        missing.push("Node.js (install from https://nodejs.org)".to_string());
    }
    if !pm.available {
        missing.push(format!("{} (ships with Node.js)", package_manager));
    }

    if !missing.is_empty() {
        anyhow::bail!(
            "Missing required tools:\n{}",
            missing
                .iter()
                .map(|m| format!("  - {}", m))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    Ok(vec![node, pm])
}
