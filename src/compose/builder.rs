//! Skeleton traversal: places every selected part under its attachment and collects the queue.

use crate::assets::image::PartImageSource;
use crate::compose::queue::{DrawQueue, DrawQueueEntry};
use crate::foundation::core::Canvas;
use crate::foundation::error::BrenResult;
use crate::foundation::matrix::Matrix;
use crate::registry::depth::DepthOrder;
use crate::registry::ids::{AttachPoint, BodyPartType, Character};
use crate::registry::tables::{NO_FACE_HAIR, Registry};
use crate::rig::bounds::{BoundsCache, ExtentTracker, VerticalExtent};
use crate::rig::stack::{TransformStack, center_transform};
use crate::scene::state::Selection;

/// Depth-sorted queue and extent of one build.
#[derive(Clone, Debug)]
pub struct BuiltFigure {
    /// Entries sorted back to front.
    pub queue: DrawQueue,
    /// Vertical extent of every placed part with bounds.
    pub extent: Option<VerticalExtent>,
    /// Transform pushes made during the traversal, the root included.
    pub pushes: usize,
}

struct Placer<'a> {
    source: &'a dyn PartImageSource,
    bounds: &'a mut BoundsCache,
    extent: ExtentTracker,
    queue: DrawQueue,
    no_face: bool,
}

impl Placer<'_> {
    fn place(&mut self, top: Matrix, part: BodyPartType, character: Character) {
        if !Registry::part_exists(character, part) {
            return;
        }
        let Some(set) = self.source.images(part, character) else {
            tracing::debug!(%part, %character, "no artwork loaded, part skipped");
            return;
        };

        let bounds = self.bounds.bounds_of(part, character, self.source);
        if let Some(b) = &bounds {
            self.extent.record_placement(top, b);
        }

        let image = if self.no_face {
            set.no_face_or_main()
        } else {
            set.main()
        };
        self.queue.push(DrawQueueEntry {
            part,
            character,
            image: image.clone(),
            transform: top,
            bounds,
        });
    }
}

/// Walk the skeleton for `selection` and produce the depth-sorted queue.
///
/// `intensity_zoom` is the intensity progress while that event is active.
pub fn build_figure(
    selection: &Selection,
    canvas: Canvas,
    intensity_zoom: Option<f64>,
    source: &dyn PartImageSource,
    bounds: &mut BoundsCache,
) -> BrenResult<BuiltFigure> {
    let mut placer = Placer {
        source,
        bounds,
        extent: ExtentTracker::new(),
        queue: DrawQueue::new(),
        no_face: selection.hair == Some(NO_FACE_HAIR),
    };

    let torso = selection.torso;
    let mut stack = TransformStack::new();
    {
        let mut root =
            stack.push_scoped(center_transform(canvas, torso, intensity_zoom)?);

        for part in [
            BodyPartType::Torso,
            BodyPartType::TorsoFront,
            BodyPartType::TorsoBack,
            BodyPartType::TorsoUnder,
            BodyPartType::Tail,
        ] {
            placer.place(root.top(), part, torso);
        }

        if let Some(legs) = selection.legs {
            for (point, part) in [
                (AttachPoint::GhostTail, BodyPartType::GhostTail),
                (AttachPoint::LegBack, BodyPartType::LegBack),
                (AttachPoint::LegFront, BodyPartType::LegFront),
            ] {
                let limb = root.push_attach(torso, legs, point)?;
                placer.place(limb.top(), part, legs);
            }
        }

        if let Some(arms) = selection.arms {
            {
                let limb = root.push_attach(torso, arms, AttachPoint::ArmBack)?;
                placer.place(limb.top(), BodyPartType::ArmBack, arms);
            }
            {
                let limb = root.push_attach(torso, arms, AttachPoint::ArmFront)?;
                placer.place(limb.top(), BodyPartType::ArmFront, arms);
            }
            if arms == torso {
                let limb = root.push_attach(torso, arms, AttachPoint::ArmBack)?;
                placer.place(limb.top(), BodyPartType::ArmBSameOL, arms);
            }
        }

        let head = selection.head;
        let mut neck = root.push_attach(torso, head, AttachPoint::Head)?;
        for part in [
            BodyPartType::HeadBack,
            BodyPartType::Head,
            BodyPartType::HeadFront,
        ] {
            placer.place(neck.top(), part, head);
        }
        if !placer.no_face {
            placer.place(neck.top(), BodyPartType::EyeOverHair, head);
        }

        if let Some(hair) = selection.hair {
            let point = if hair == NO_FACE_HAIR {
                AttachPoint::Eyes
            } else {
                AttachPoint::Hair
            };
            let scalp = neck.push_attach(head, hair, point)?;
            placer.place(scalp.top(), BodyPartType::HairBack, hair);
            placer.place(scalp.top(), BodyPartType::HairFront, hair);
        }
    }

    let mut queue = placer.queue;
    queue.sort_by_depth(DepthOrder::for_character(torso));
    Ok(BuiltFigure {
        queue,
        extent: placer.extent.vertical_extent(),
        pushes: stack.push_count(),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/compose/builder.rs"]
mod tests;
