//! Hierarchical transform stack mirroring the skeleton (torso → limbs/head → hair/eyes).

use std::ops::{Deref, DerefMut};

use crate::foundation::core::{Canvas, Vec2};
use crate::foundation::error::{BrenError, BrenResult};
use crate::foundation::matrix::Matrix;
use crate::registry::ids::{AttachPoint, Character};
use crate::registry::tables::{OVERSIZED_HAIR_HEAD, Registry};

/// Transform aligning `child`'s artwork onto `parent`'s anchor `point`.
///
/// Maps child native pixels into parent native pixels. [`AttachPoint::GhostTail`] dispatches to
/// [`ghost_tail_transform`].
pub fn attach_transform(
    parent: Character,
    child: Character,
    point: AttachPoint,
) -> BrenResult<Matrix> {
    if point == AttachPoint::GhostTail {
        return ghost_tail_transform(parent, child);
    }

    let parent_info = Registry::attach_info(parent, point)?;
    let child_info = Registry::attach_info(child, point)?;

    let mut m = Matrix::IDENTITY.translate_vector(parent_info.position);
    if !(point == AttachPoint::Hair && parent == OVERSIZED_HAIR_HEAD) {
        m = m.scale_uniform(parent_info.local_scale / child_info.local_scale);
    }
    Ok(m
        .scale_uniform(Registry::scale_factor(parent) / Registry::scale_factor(child))
        .translate_vector(-child_info.position))
}

/// Stretch a ghost tail so the child's leg span covers the parent's.
///
/// The vertical scale averages the character scale ratio with the horizontal stretch.
pub fn ghost_tail_transform(parent: Character, child: Character) -> BrenResult<Matrix> {
    let parent_front = Registry::attach_info(parent, AttachPoint::LegFront)?.position;
    let parent_back = Registry::attach_info(parent, AttachPoint::LegBack)?.position;
    let child_front = Registry::attach_info(child, AttachPoint::LegFront)?.position;
    let child_back = Registry::attach_info(child, AttachPoint::LegBack)?.position;

    stretch_between(
        parent_front,
        parent_back,
        child_front,
        child_back,
        Registry::scale_factor(parent) / Registry::scale_factor(child),
    )
}

pub(crate) fn stretch_between(
    parent_front: Vec2,
    parent_back: Vec2,
    child_front: Vec2,
    child_back: Vec2,
    scale_ratio: f64,
) -> BrenResult<Matrix> {
    let child_span = child_back.x - child_front.x;
    if child_span == 0.0 {
        return Err(BrenError::registry(
            "child leg span is zero, ghost tail cannot be stretched",
        ));
    }
    let scale_x = (parent_back.x - parent_front.x) / child_span;
    let scale_y = (scale_ratio + scale_x) / 2.0;

    Ok(Matrix::IDENTITY
        .translate_vector(parent_front)
        .scale(scale_x, scale_y)
        .translate_vector(-child_front))
}

/// Root placement: centers the torso anchor on the canvas and normalizes the torso's scale.
///
/// `intensity` is the event progress when the intensity event is active.
pub fn center_transform(
    canvas: Canvas,
    torso: Character,
    intensity: Option<f64>,
) -> BrenResult<Matrix> {
    let center = canvas.center();
    let mut m = Matrix::IDENTITY.translate_vector(center);
    if let Some(progress) = intensity {
        m = m.scale_uniform(1.0 + 0.2 * progress);
    }
    let anchor = Registry::attach_info(torso, AttachPoint::Torso)?.position;
    Ok(m
        .scale_uniform(0.9 / Registry::scale_factor(torso))
        .translate_vector(-anchor))
}

/// Stack of accumulated transforms, never empty: index 0 is the identity root.
#[derive(Clone, Debug)]
pub struct TransformStack {
    stack: Vec<Matrix>,
    pushes: usize,
}

impl Default for TransformStack {
    fn default() -> Self {
        Self::new()
    }
}

impl TransformStack {
    /// Stack holding only the identity root.
    pub fn new() -> Self {
        Self {
            stack: vec![Matrix::IDENTITY],
            pushes: 0,
        }
    }

    /// Current accumulated transform.
    pub fn top(&self) -> Matrix {
        self.stack.last().copied().unwrap_or(Matrix::IDENTITY)
    }

    /// Number of entries, including the root.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Pushes performed since construction or the last [`reset`](Self::reset).
    pub fn push_count(&self) -> usize {
        self.pushes
    }

    /// Append `top ∘ m`.
    pub fn push(&mut self, m: Matrix) {
        let next = self.top().transform_matrix(m);
        self.stack.push(next);
        self.pushes += 1;
    }

    /// Remove the most recent push. The root is never removed.
    pub fn pop(&mut self) -> Option<Matrix> {
        if self.stack.len() > 1 {
            self.stack.pop()
        } else {
            None
        }
    }

    /// Drop everything above the root and clear the push counter.
    pub fn reset(&mut self) {
        self.stack.truncate(1);
        self.pushes = 0;
    }

    /// Push `m` for the lifetime of the returned guard.
    pub fn push_scoped(&mut self, m: Matrix) -> AttachGuard<'_> {
        self.push(m);
        AttachGuard { stack: self }
    }

    /// Push the alignment of `child` onto `parent`'s anchor `point` for the guard's lifetime.
    pub fn push_attach(
        &mut self,
        parent: Character,
        child: Character,
        point: AttachPoint,
    ) -> BrenResult<AttachGuard<'_>> {
        let m = attach_transform(parent, child, point)?;
        Ok(self.push_scoped(m))
    }
}

/// Scope guard for one push; pops it on drop.
///
/// Dereferences to the stack so nested attachments can be pushed through it.
#[derive(Debug)]
pub struct AttachGuard<'a> {
    stack: &'a mut TransformStack,
}

impl Deref for AttachGuard<'_> {
    type Target = TransformStack;

    fn deref(&self) -> &Self::Target {
        self.stack
    }
}

impl DerefMut for AttachGuard<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.stack
    }
}

impl Drop for AttachGuard<'_> {
    fn drop(&mut self) {
        self.stack.pop();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/rig/stack.rs"]
mod tests;
