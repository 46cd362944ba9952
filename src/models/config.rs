use crate::error::FilterError;
use milk_remap::{FilterParameters, Milkifier, Style};
use serde::{Deserialize, Deserializer};
use std::collections::HashMap;
use std::path::Path;

/// Application configuration loaded from a YAML file
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct AppConfig {
    /// Named filter presets
    #[serde(default)]
    pub presets: HashMap<String, PresetConfig>,

    /// Preset applied when the command line does not name one
    #[serde(default)]
    pub default_preset: Option<String>,
}

/// A stored set of filter parameters. Unset fields fall through to the
/// built-in defaults.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct PresetConfig {
    /// `outside` or `inside`
    #[serde(default, deserialize_with = "deserialize_style")]
    pub style: Option<Style>,

    /// Enable puntilism dithering
    #[serde(default)]
    pub dither: Option<bool>,

    /// Fixed dither seed for reproducible output
    #[serde(default)]
    pub seed: Option<u64>,

    /// Process rows in parallel
    #[serde(default)]
    pub parallel: Option<bool>,
}

fn deserialize_style<'de, D>(deserializer: D) -> Result<Option<Style>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    raw.map(|s| s.parse::<Style>().map_err(serde::de::Error::custom))
        .transpose()
}

/// Per-invocation overrides, usually straight from the command line
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterOverrides {
    pub preset: Option<String>,
    pub style: Option<Style>,
    pub dither: Option<bool>,
    pub seed: Option<u64>,
    pub parallel: Option<bool>,
}

/// Fully resolved filter settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSettings {
    pub style: Style,
    pub dither: bool,
    pub seed: Option<u64>,
    pub parallel: bool,
}

impl Default for FilterSettings {
    fn default() -> Self {
        Self {
            style: Style::Outside,
            dither: false,
            seed: None,
            parallel: true,
        }
    }
}

impl FilterSettings {
    /// The style/dither pair handed to the remapper
    pub fn parameters(&self) -> FilterParameters {
        FilterParameters {
            style: self.style,
            dither: self.dither,
        }
    }

    /// Build a configured remapper
    pub fn milkifier(&self) -> Milkifier {
        let milkifier = Milkifier::with_parameters(self.parameters()).parallel(self.parallel);
        match self.seed {
            Some(seed) => milkifier.seed(seed),
            None => milkifier,
        }
    }

    fn apply_preset(mut self, preset: &PresetConfig) -> Self {
        if let Some(style) = preset.style {
            self.style = style;
        }
        if let Some(dither) = preset.dither {
            self.dither = dither;
        }
        if preset.seed.is_some() {
            self.seed = preset.seed;
        }
        if let Some(parallel) = preset.parallel {
            self.parallel = parallel;
        }
        self
    }
}

impl AppConfig {
    /// Parse configuration from YAML text
    pub fn from_yaml_str(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Load configuration from a file, falling back to defaults
    ///
    /// A missing path, an unreadable file or invalid YAML all log a warning
    /// and yield the built-in defaults.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml_str(&content) {
                Ok(config) => {
                    tracing::info!(
                        path = %path.display(),
                        presets = config.presets.len(),
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, path = %path.display(), "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Get a preset by name
    pub fn get_preset(&self, name: &str) -> Option<&PresetConfig> {
        self.presets.get(name)
    }

    /// Sorted preset names
    pub fn preset_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.presets.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Resolve the effective settings
    ///
    /// Precedence: explicit overrides, then the named preset (or the
    /// configured default preset), then built-in defaults. Naming an
    /// unknown preset explicitly is an error; a dangling `default_preset`
    /// only logs a warning.
    pub fn resolve(&self, overrides: &FilterOverrides) -> Result<FilterSettings, FilterError> {
        let mut settings = FilterSettings::default();

        if let Some(name) = overrides.preset.as_deref() {
            let preset = self
                .get_preset(name)
                .ok_or_else(|| FilterError::UnknownPreset(name.to_string()))?;
            settings = settings.apply_preset(preset);
        } else if let Some(name) = self.default_preset.as_deref() {
            match self.get_preset(name) {
                Some(preset) => settings = settings.apply_preset(preset),
                None => tracing::warn!(preset = name, "Default preset not found, ignoring"),
            }
        }

        if let Some(style) = overrides.style {
            settings.style = style;
        }
        if let Some(dither) = overrides.dither {
            settings.dither = dither;
        }
        if overrides.seed.is_some() {
            settings.seed = overrides.seed;
        }
        if let Some(parallel) = overrides.parallel {
            settings.parallel = parallel;
        }

        Ok(settings)
    }
}
