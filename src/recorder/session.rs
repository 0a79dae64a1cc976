// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Recording session: the stack of attachment targets behind the nested API

use crate::ast::Node;
use crate::error::{Result, ScadError};
use std::ops::{Deref, DerefMut};

/// Result of running a nested body.
///
/// Bodies may return `()` or any `Result`; a failed body leaves nothing
/// attached and its error is handed back to the caller.
pub trait Outcome {
    fn is_failure(&self) -> bool;
}

impl Outcome for () {
    fn is_failure(&self) -> bool {
        false
    }
}

impl<T, E> Outcome for Result<T, E> {
    fn is_failure(&self) -> bool {
        self.is_err()
    }
}

/// Builds a CSG tree from ordinary nested calls.
///
/// Each nesting call pushes a fresh child list, runs its body against it, pops
/// it and attaches the finished composite to the enclosing list. A recorder is
/// one session: it is created empty, filled by client code, and consumed by
/// [`Recorder::finish`].
#[derive(Debug, Default)]
pub struct Recorder {
    roots: Vec<Node>,
    scopes: Vec<Vec<Node>>,
    unbalanced: usize,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `node` to the innermost open child list
    pub fn record(&mut self, node: Node) {
        match self.scopes.last_mut() {
            Some(target) => target.push(node),
            None => self.roots.push(node),
        }
    }

    /// Run `body` against a fresh child list and attach `build(children)`.
    ///
    /// The list is popped on every exit path. If `body` reports failure or
    /// panics, the partial children are discarded and nothing is attached.
    pub fn scoped<R: Outcome>(
        &mut self,
        build: impl FnOnce(Vec<Node>) -> Node,
        body: impl FnOnce(&mut Recorder) -> R,
    ) -> R {
        let mut scope = Scope::open(self);
        let outcome = body(&mut *scope);
        if outcome.is_failure() {
            return outcome;
        }
        let children = scope.close();
        self.record(build(children));
        outcome
    }

    /// Number of currently open nested scopes
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// End the session and hand back the root statements
    pub fn finish(self) -> Result<Vec<Node>> {
        let open = self.scopes.len() + self.unbalanced;
        if open > 0 {
            return Err(ScadError::UnbalancedScope { open });
        }
        tracing::debug!(roots = self.roots.len(), "recording session finished");
        Ok(self.roots)
    }
}

/// Guard owning one pushed child list.
///
/// Dropping it without [`Scope::close`] truncates the stack back to where it
/// was when the scope opened.
struct Scope<'a> {
    recorder: &'a mut Recorder,
    base: usize,
    closed: bool,
}

impl<'a> Scope<'a> {
    fn open(recorder: &'a mut Recorder) -> Self {
        let base = recorder.scopes.len();
        recorder.scopes.push(Vec::new());
        Self {
            recorder,
            base,
            closed: false,
        }
    }

    fn close(mut self) -> Vec<Node> {
        self.closed = true;
        let scopes = &mut self.recorder.scopes;
        if scopes.len() != self.base + 1 {
            // An inner frame outlived its body; keep the session poisoned.
            self.recorder.unbalanced += scopes.len().saturating_sub(self.base + 1);
            scopes.truncate(self.base + 1);
        }
        scopes.pop().unwrap_or_default()
    }
}

impl Deref for Scope<'_> {
    type Target = Recorder;

    fn deref(&self) -> &Recorder {
        self.recorder
    }
}

impl DerefMut for Scope<'_> {
    fn deref_mut(&mut self) -> &mut Recorder {
        self.recorder
    }
}

impl Drop for Scope<'_> {
    fn drop(&mut self) {
        if !self.closed {
            self.recorder.scopes.truncate(self.base);
        }
    }
}
