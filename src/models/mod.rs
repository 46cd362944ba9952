pub mod config;

pub use config::{AppConfig, FilterOverrides, FilterSettings, PresetConfig};
