//! Borrowed view of the scene being rendered.

use crate::{Light, Primitive};

/// Read-only view of a caller-owned scene.
///
/// Rendering never mutates the scene, so the view is `Copy` and can be
/// shared across rayon workers without locking.
#[derive(Debug, Clone, Copy)]
pub struct Scene<'a> {
    pub primitives: &'a [Primitive],
    pub lights: &'a [Light],
}

impl<'a> Scene<'a> {
    pub fn new(primitives: &'a [Primitive], lights: &'a [Light]) -> Self {
        Self { primitives, lights }
    }
}
