use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use hex_gradient::{Gradient, Preset, SectionSplit, SCORE_LEVELS};
use log::debug;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawConfig {
    length: Option<usize>,
    default: Option<String>,
    legacy_split: bool,
    gradients: BTreeMap<String, Vec<String>>,
}

/// Settings loaded from the optional TOML file.
#[derive(Debug, Clone)]
pub struct Config {
    pub length: usize,
    pub default: String,
    pub split: SectionSplit,
    gradients: BTreeMap<String, Gradient>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            length: SCORE_LEVELS,
            default: Preset::Ranking.name().to_owned(),
            split: SectionSplit::Even,
            gradients: BTreeMap::new(),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {:?}", path))?;
        let config =
            Self::from_toml(&text).with_context(|| format!("failed to load config {:?}", path))?;
        debug!("Loaded {} gradients from {:?}", config.gradients.len(), path);
        Ok(config)
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        let raw: RawConfig = toml::from_str(text).context("invalid TOML")?;

        let mut gradients = BTreeMap::new();
        for (name, anchors) in raw.gradients {
            let gradient = Gradient::parse(&anchors)
                .with_context(|| format!("invalid gradient {:?}", name))?;
            gradients.insert(name, gradient);
        }

        let defaults = Self::default();
        let length = match raw.length {
            Some(0) => anyhow::bail!("length must be at least 1"),
            Some(length) => length,
            None => defaults.length,
        };
        let split = if raw.legacy_split { SectionSplit::Legacy } else { SectionSplit::Even };

        Ok(Self { length, default: raw.default.unwrap_or(defaults.default), split, gradients })
    }

    /// Look `name` up in the file first, then among the built-in presets.
    pub fn gradient(&self, name: &str) -> Option<Gradient> {
        if let Some(gradient) = self.gradients.get(name) {
            return Some(gradient.clone());
        }
        Preset::from_name(name).and_then(|preset| preset.gradient().ok())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.gradients.keys().map(String::as_str)
    }
}
