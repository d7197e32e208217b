//! Answer presets loaded from YAML

pub mod preset;

pub use preset::Preset;
