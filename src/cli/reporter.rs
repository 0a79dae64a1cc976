// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! CLI output reporter with colored formatting

use crate::config::RenderConfig;
use crate::io::Document;
use colored::*;
use std::time::Duration;

/// Figures reported after a script has been written
#[derive(Debug, Clone, PartialEq)]
pub struct EmitSummary {
    pub nodes: usize,
    pub references: usize,
    pub bytes: usize,
    pub duration: Duration,
}

impl EmitSummary {
    pub fn new(document: &Document, bytes: usize, duration: Duration) -> Self {
        Self {
            nodes: document.node_count(),
            references: document.references().len(),
            bytes,
            duration,
        }
    }
}

/// CLI reporter for formatted output
pub struct Reporter;

impl Reporter {
    /// Report an emitted script. Goes to stderr so stdout can carry the script.
    pub fn report_emit(input: &str, output: &str, summary: &EmitSummary) {
        eprintln!("\n{}", "━".repeat(60).bright_black());
        eprintln!("{} {} {} {}", "Emitted:".bold(), input.cyan(), "→".bright_black(), output.cyan());
        eprintln!("{}", "━".repeat(60).bright_black());
        eprintln!(
            "  {} {}",
            "Nodes:".bright_black(),
            summary.nodes.to_string().cyan()
        );
        eprintln!(
            "  {} {}",
            "References:".bright_black(),
            summary.references.to_string().cyan()
        );
        eprintln!(
            "  {} {}",
            "Bytes:".bright_black(),
            summary.bytes.to_string().cyan()
        );
        eprintln!(
            "  {} {}",
            "Time:".bright_black(),
            Self::format_duration(summary.duration).yellow()
        );
        eprintln!("{}", "━".repeat(60).bright_black());
    }

    /// Print the effective configuration as TOML
    pub fn report_config(config: &RenderConfig, source: &str) -> anyhow::Result<()> {
        println!("{} {}", "# Configuration:".bold(), source.cyan());
        print!("{}", toml::to_string_pretty(config)?);
        Ok(())
    }

    /// Report error
    pub fn report_error(message: &str) {
        eprintln!("\n{} {}", "❌ Error:".red().bold(), message);
    }

    /// Report warning
    pub fn report_warning(message: &str) {
        eprintln!("\n{} {}", "⚠️  Warning:".yellow().bold(), message);
    }

    /// Print success message
    pub fn success(message: &str) {
        eprintln!("{} {}", "✅".green(), message.green());
    }

    /// Format duration for display
    fn format_duration(duration: Duration) -> String {
        let micros = duration.as_micros();

        if micros < 1_000 {
            format!("{}µs", micros)
        } else if micros < 1_000_000 {
            format!("{:.2}ms", micros as f64 / 1_000.0)
        } else {
            format!("{:.2}s", micros as f64 / 1_000_000.0)
        }
    }
}
