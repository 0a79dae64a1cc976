// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Rendering configuration system

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// File picked up from the working directory by [`RenderConfig::load`]
pub const CONFIG_FILE: &str = "scadforge.toml";

/// Global curve approximation settings.
///
/// Passed through verbatim as `$fa`, `$fs` and `$fn` assignments ahead of the
/// first statement; values are never interpreted here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Resolution {
    /// Maximum angle per fragment, in degrees
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fa: Option<f64>,
    /// Maximum fragment size
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fs: Option<f64>,
    /// Fixed fragment count
    #[serde(rename = "fn", skip_serializing_if = "Option::is_none")]
    pub fn_: Option<f64>,
}

impl Resolution {
    pub fn new(fa: f64, fs: f64) -> Self {
        Self {
            fa: Some(fa),
            fs: Some(fs),
            fn_: None,
        }
    }

    /// Assignments to emit, in output order
    pub fn assignments(&self) -> impl Iterator<Item = (&'static str, f64)> {
        [("$fa", self.fa), ("$fs", self.fs), ("$fn", self.fn_)]
            .into_iter()
            .filter_map(|(name, value)| value.map(|v| (name, v)))
    }

    pub fn is_empty(&self) -> bool {
        self.fa.is_none() && self.fs.is_none() && self.fn_.is_none()
    }
}

/// How a transform with exactly one child is written
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransformStyle {
    /// Always `translate(...) { child }`
    #[default]
    Block,
    /// `translate(...)` followed by the child statement, no braces
    Statement,
}

impl FromStr for TransformStyle {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "block" => Ok(TransformStyle::Block),
            "statement" => Ok(TransformStyle::Statement),
            other => anyhow::bail!("unknown transform style: {other}"),
        }
    }
}

/// Rendering configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Spaces per nesting level
    pub indent: usize,
    pub transform_style: TransformStyle,
    pub resolution: Resolution,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            indent: 2,
            transform_style: TransformStyle::Block,
            resolution: Resolution::default(),
        }
    }
}

impl RenderConfig {
    /// Load configuration from file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        let config: RenderConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path.as_ref()))?;
        Ok(config)
    }

    /// Load configuration with environment variable overrides
    pub fn load() -> Result<Self> {
        let mut config = if PathBuf::from(CONFIG_FILE).exists() {
            Self::from_file(CONFIG_FILE)?
        } else {
            Self::default()
        };
        config.apply_env(|name| std::env::var(name).ok());
        Ok(config)
    }

    /// Apply `SCADFORGE_*` overrides; unparsable values are logged and ignored
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(fa) = parse_var(&lookup, "SCADFORGE_FA") {
            self.resolution.fa = Some(fa);
        }
        if let Some(fs) = parse_var(&lookup, "SCADFORGE_FS") {
            self.resolution.fs = Some(fs);
        }
        if let Some(fn_) = parse_var(&lookup, "SCADFORGE_FN") {
            self.resolution.fn_ = Some(fn_);
        }
        if let Some(indent) = parse_var(&lookup, "SCADFORGE_INDENT") {
            self.indent = indent;
        }
        if let Some(style) = parse_var(&lookup, "SCADFORGE_TRANSFORM_STYLE") {
            self.transform_style = style;
        }
    }

    /// Save configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path.as_ref(), content)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))?;
        Ok(())
    }

    pub fn with_resolution(mut self, resolution: Resolution) -> Self {
        self.resolution = resolution;
        self
    }

    pub fn with_fa(mut self, fa: f64) -> Self {
        self.resolution.fa = Some(fa);
        self
    }

    pub fn with_fs(mut self, fs: f64) -> Self {
        self.resolution.fs = Some(fs);
        self
    }

    pub fn with_fn(mut self, fn_: f64) -> Self {
        self.resolution.fn_ = Some(fn_);
        self
    }

    pub fn with_transform_style(mut self, style: TransformStyle) -> Self {
        self.transform_style = style;
        self
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Option<T> {
    let raw = lookup(name)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(variable = name, value = %raw, "ignoring unparsable override");
            None
        }
    }
}
