// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Document writer
//!
//! Records a composition, hoists its references and writes the rendered
//! script to a sink.

use super::emitter::Emitter;
use crate::ast::{collect_references, ModuleReference, Node};
use crate::config::RenderConfig;
use crate::error::Result;
use crate::recorder::Recorder;
use std::io::Write;
use tracing::{debug, instrument};

/// A recorded tree paired with the configuration used to render it
#[derive(Debug, Clone)]
pub struct Document {
    config: RenderConfig,
    roots: Vec<Node>,
}

impl Document {
    /// Run `compose` against a fresh recorder and keep the finished tree
    pub fn record(config: RenderConfig, compose: impl FnOnce(&mut Recorder)) -> Result<Self> {
        debug!("recording session started");
        let mut recorder = Recorder::new();
        compose(&mut recorder);
        Ok(Self::from_roots(config, recorder.finish()?))
    }

    /// Like [`Document::record`] for compositions that can fail; nothing is
    /// kept when `compose` returns an error
    pub fn try_record<E>(
        config: RenderConfig,
        compose: impl FnOnce(&mut Recorder) -> std::result::Result<(), E>,
    ) -> std::result::Result<Self, E>
    where
        E: From<crate::error::ScadError>,
    {
        debug!("recording session started");
        let mut recorder = Recorder::new();
        compose(&mut recorder)?;
        Ok(Self::from_roots(config, recorder.finish()?))
    }

    pub fn from_roots(config: RenderConfig, roots: Vec<Node>) -> Self {
        Self { config, roots }
    }

    pub fn roots(&self) -> &[Node] {
        &self.roots
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Distinct external references in first-encounter order
    pub fn references(&self) -> Vec<ModuleReference> {
        collect_references(&self.roots)
    }

    /// Total number of recorded nodes, nested ones included
    pub fn node_count(&self) -> usize {
        fn count(nodes: &[Node]) -> usize {
            nodes.iter().map(|n| 1 + count(n.children())).sum()
        }
        count(&self.roots)
    }

    /// Render the whole script in memory
    #[instrument(skip(self), fields(roots = self.roots.len()))]
    pub fn render(&self) -> Result<String> {
        let references = self.references();
        debug!(references = references.len(), "hoisted external references");
        Emitter::new(&self.config).emit(&references, &self.roots)
    }

    /// Render and write to `sink`, returning the number of bytes written.
    /// The sink is untouched if rendering fails.
    pub fn write_to<W: Write>(&self, sink: &mut W) -> Result<usize> {
        let script = self.render()?;
        sink.write_all(script.as_bytes())?;
        sink.flush()?;
        debug!(bytes = script.len(), "script written");
        Ok(script.len())
    }
}

/// Record `compose` and write the resulting script to `sink`
pub fn write_scad<W: Write>(
    sink: &mut W,
    config: &RenderConfig,
    compose: impl FnOnce(&mut Recorder),
) -> Result<()> {
    Document::record(config.clone(), compose)?.write_to(sink)?;
    Ok(())
}

/// Record `compose` and return the resulting script
pub fn render_to_string(config: &RenderConfig, compose: impl FnOnce(&mut Recorder)) -> Result<String> {
    Document::record(config.clone(), compose)?.render()
}
