// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Render port that records every batch it receives.

use navpoint_core::{Primitive, RenderPort};

/// Keeps the current batch and a history of every replacement.
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderPort {
    batches: Vec<Vec<Primitive>>,
}

impl RecordingRenderPort {
    /// Empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// What is currently displayed (empty before the first batch).
    pub fn current(&self) -> &[Primitive] {
        self.batches.last().map(Vec::as_slice).unwrap_or_default()
    }

    /// Every batch received, oldest first.
    pub fn batches(&self) -> &[Vec<Primitive>] {
        &self.batches
    }

    /// Number of replacements received.
    pub fn replace_count(&self) -> usize {
        self.batches.len()
    }
}

impl RenderPort for RecordingRenderPort {
    fn replace_primitives(&mut self, batch: &[Primitive]) {
        self.batches.push(batch.to_vec());
    }
}
