//! CLI prompts using cliclack (Charm-style inline prompts)
//!
//! This module is optional and only available when the `tui` feature is enabled.

mod observer;
mod prompts;

pub use observer::CliclackObserver;
pub use prompts::{print_failure, run, CreateArgs};
