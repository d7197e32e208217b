//! Node.js version compatibility

use anyhow::Result;
use semver::Version;

/// Oldest Node.js release current Vite supports
pub const MIN_NODE_VERSION: &str = "20.19.0";

/// Compare the installed Node.js version against the minimum
/// Returns a warning message if Node.js is older than required
pub fn check_node_compatibility(node_version: &str, minimum: &str) -> Option<String> {
    let installed = match parse_version(node_version) {
        Ok(v) => v,
        Err(_) => return None, // Can't compare, skip warning
    };

    let required = match parse_version(minimum) {
        Ok(v) => v,
        Err(_) => return None,
    };

    if installed < required {
        Some(format!(
            "Node.js {} is older than {}, which the latest Vite requires.\n\
             Upgrade from https://nodejs.org if the generator fails.",
            installed, required
        ))
    } else {
        None
    }
}

/// Parse version string, handling a leading `v` (as printed by `node --version`)
pub fn parse_version(version_str: &str) -> Result<Version> {
    let trimmed = version_str.trim();
    let cleaned = trimmed.strip_prefix('v').unwrap_or(trimmed);
    Version::parse(cleaned).map_err(|e| anyhow::anyhow!("Invalid version '{}': {}", version_str, e))
}
