// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! I/O module - script emission and tree loading

mod emitter;
mod importer;
mod number;
mod writer;

#[cfg(test)]
mod syntax;

pub use emitter::{is_identifier, quote, Emitter};
pub use importer::{load_tree, parse_tree};
pub use number::{format_number, NonFiniteNumber, FRACTION_DIGITS};
pub use writer::{render_to_string, write_scad, Document};
