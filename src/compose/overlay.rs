//! Debug drawings: attach-point markers and part bounding boxes in canvas space.

use crate::compose::frame::Frame;
use crate::foundation::core::{Point, Vec2};
use crate::foundation::error::BrenResult;
use crate::registry::ids::{AttachPoint, BodyPartType};
use crate::registry::tables::Registry;
use crate::scene::settings::DebugOverlays;

/// Radius of an attach-point marker in canvas pixels.
pub const MARKER_RADIUS: f64 = 7.5;
/// Line width of a bounds box in canvas pixels.
pub const BOX_LINE_WIDTH: f64 = 3.0;

/// Markers and boxes are drawn in these straight RGBA colours.
pub const MARKER_RGBA: [u8; 4] = [255, 0, 0, 255];
/// Bounds box colour.
pub const BOX_RGBA: [u8; 4] = [255, 255, 0, 255];

const TORSO_POINTS: [AttachPoint; 6] = [
    AttachPoint::Torso,
    AttachPoint::ArmFront,
    AttachPoint::ArmBack,
    AttachPoint::LegFront,
    AttachPoint::LegBack,
    AttachPoint::Head,
];
const HEAD_POINTS: [AttachPoint; 2] = [AttachPoint::Hair, AttachPoint::Eyes];

/// One debug shape, already transformed into canvas pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OverlayShape {
    /// Filled dot on an attach point.
    Marker {
        /// Dot center.
        center: Point,
    },
    /// Outline of a transformed bounds rectangle, corners in winding order.
    BoundsBox {
        /// Corners.
        corners: [Point; 4],
    },
}

/// Collect the enabled overlays for `frame`, boxes first so markers draw on top.
pub fn overlay_shapes(frame: &Frame, debug: DebugOverlays) -> BrenResult<Vec<OverlayShape>> {
    let mut shapes = Vec::new();

    if debug.part_bounds {
        for cmd in frame.commands() {
            let Some(b) = cmd.bounds else { continue };
            let corners = [
                Point::new(b.x_min, b.y_min),
                Point::new(b.x_max, b.y_min),
                Point::new(b.x_max, b.y_max),
                Point::new(b.x_min, b.y_max),
            ]
            .map(|p| cmd.transform.apply(p));
            shapes.push(OverlayShape::BoundsBox { corners });
        }
    }

    if debug.attach_points {
        for cmd in frame.commands() {
            let points: &[AttachPoint] = match cmd.part {
                BodyPartType::Torso => &TORSO_POINTS,
                BodyPartType::Head => &HEAD_POINTS,
                _ => continue,
            };
            for &point in points {
                let pos = Registry::attach_info(cmd.character, point)?.position;
                shapes.push(OverlayShape::Marker {
                    center: cmd.transform.apply(pos.to_point()),
                });
            }
        }
    }

    Ok(shapes)
}

/// Outline of the segment `a → b` as a quad of the given width.
pub(crate) fn segment_quad(a: Point, b: Point, width: f64) -> Option<[Point; 4]> {
    let dir = b - a;
    let len = dir.hypot();
    if len <= f64::EPSILON {
        return None;
    }
    let n = Vec2::new(-dir.y, dir.x) * (width / 2.0 / len);
    Some([a + n, b + n, b - n, a - n])
}

#[cfg(test)]
#[path = "../../tests/unit/compose/overlay.rs"]
mod tests;
