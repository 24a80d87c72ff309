// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Render port: the host layer that displays the overlay's primitives.

use crate::primitives::Primitive;

/// Replaceable primitive batch on the host's vector layer.
///
/// Implementations are expected to be best-effort: drop the previous batch,
/// show the new one. Failures stay inside the adapter.
pub trait RenderPort {
    /// Replace everything previously drawn with `batch`.
    fn replace_primitives(&mut self, batch: &[Primitive]);

    /// Remove everything previously drawn.
    fn clear(&mut self) {
        self.replace_primitives(&[]);
    }
}

impl<R> RenderPort for &mut R
where
    R: RenderPort + ?Sized,
{
    fn replace_primitives(&mut self, batch: &[Primitive]) {
        (**self).replace_primitives(batch);
    }
}
