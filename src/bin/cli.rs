// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Scadforge CLI

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use scadforge::cli::{EmitSummary, Reporter};
use scadforge::config::CONFIG_FILE;
use scadforge::{load_tree, Document, RenderConfig, TransformStyle};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "scadforge")]
#[command(about = "Scadforge - OpenSCAD script generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Emit a script from a JSON tree
    Emit {
        /// Input JSON tree
        input: PathBuf,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file (defaults to ./scadforge.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Global $fa
        #[arg(long)]
        fa: Option<f64>,

        /// Global $fs
        #[arg(long)]
        fs: Option<f64>,

        /// Global $fn
        #[arg(long = "fn")]
        fn_: Option<f64>,

        /// Write single-child transforms without braces
        #[arg(long)]
        statement_form: bool,
    },

    /// Show the effective configuration
    Config {
        /// Write the default configuration to FILE
        #[arg(long, value_name = "FILE")]
        init: Option<PathBuf>,
    },

    /// Show version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Emit {
            input,
            output,
            config,
            fa,
            fs,
            fn_,
            statement_form,
        } => {
            let mut config = load_config(config.as_deref())?;
            if let Some(fa) = fa {
                config = config.with_fa(fa);
            }
            if let Some(fs) = fs {
                config = config.with_fs(fs);
            }
            if let Some(fn_) = fn_ {
                config = config.with_fn(fn_);
            }
            if statement_form {
                config = config.with_transform_style(TransformStyle::Statement);
            }
            if let Err(e) = emit_command(&input, output.as_deref(), config, cli.verbose) {
                Reporter::report_error(&format!("{e:#}"));
                std::process::exit(1);
            }
        }
        Commands::Config { init } => config_command(init.as_deref())?,
        Commands::Version => {
            println!("Scadforge v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "scadforge=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&Path>) -> Result<RenderConfig> {
    match path {
        Some(path) => {
            let mut config = RenderConfig::from_file(path)?;
            config.apply_env(|name| std::env::var(name).ok());
            Ok(config)
        }
        None => RenderConfig::load(),
    }
}

fn emit_command(
    input: &Path,
    output: Option<&Path>,
    config: RenderConfig,
    verbose: bool,
) -> Result<()> {
    if !input.exists() {
        anyhow::bail!("Input file not found: {}", input.display());
    }

    let start = Instant::now();
    let roots = load_tree(input)?;
    let document = Document::record(config, |s| {
        for node in roots {
            s.record(node);
        }
    })?;

    let bytes = match output {
        Some(path) => {
            let mut file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            document.write_to(&mut file)?
        }
        None => document.write_to(&mut std::io::stdout().lock())?,
    };

    let target = output
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "stdout".to_string());
    if verbose {
        let summary = EmitSummary::new(&document, bytes, start.elapsed());
        Reporter::report_emit(&input.display().to_string(), &target, &summary);
    } else if output.is_some() {
        Reporter::success(&format!("Emitted {} -> {}", input.display(), target));
    }

    Ok(())
}

fn config_command(init: Option<&Path>) -> Result<()> {
    match init {
        Some(path) => {
            if path.exists() {
                Reporter::report_warning(&format!("{} already exists, leaving it", path.display()));
                return Ok(());
            }
            RenderConfig::default().save(path)?;
            Reporter::success(&format!("Wrote {}", path.display()));
        }
        None => {
            let source = if Path::new(CONFIG_FILE).exists() {
                CONFIG_FILE
            } else {
                "defaults"
            };
            Reporter::report_config(&RenderConfig::load()?, source)?;
        }
    }
    Ok(())
}
