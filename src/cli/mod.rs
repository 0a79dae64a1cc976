// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! CLI subsystem for Scadforge

pub mod reporter;

pub use reporter::{EmitSummary, Reporter};
