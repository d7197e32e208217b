//! Toolchain detection and external process execution
//!
//! This module provides:
//! - Node.js / package manager detection and version advisories
//! - Command builders for `create-vite` and the installer
//! - The `CommandRunner` capability injected into the materializer

pub mod check;
pub mod npm;
pub mod process;
pub mod version;

pub use check::{check_node, check_package_manager, check_toolchain, RuntimeInfo};
pub use npm::PackageManager;
pub use version::{check_node_compatibility, MIN_NODE_VERSION};
pub use process::{CommandRunner, CommandSpec, OutputMode, ProcessError, SystemRunner};
