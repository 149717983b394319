use crate::foundation::core::Canvas;
use crate::foundation::matrix::Matrix;
use crate::registry::ids::Character;
use crate::registry::tables::UNFIT_LEGS;
use crate::rig::bounds::VerticalExtent;

/// Default gap kept between the figure and the canvas edges.
pub const FIT_MARGIN: f64 = 15.0;

/// Uniform scale about the horizontal center that pulls an overflowing figure back on canvas.
///
/// Identity when nothing was recorded or the figure already fits. Figures standing on the
/// exempt legs never shrink for bottom overflow. A zero-height figure, or one lying wholly
/// inside the top margin, is translated onto the margin line instead of scaled.
pub fn fit_to_frame(
    extent: Option<VerticalExtent>,
    canvas: Canvas,
    margin: f64,
    legs: Option<Character>,
) -> Matrix {
    let Some(VerticalExtent {
        top: built_top,
        bottom: built_bottom,
    }) = extent
    else {
        return Matrix::IDENTITY;
    };

    let height = canvas.height_f64();
    let half_width = canvas.width_f64() / 2.0;

    let top = built_top - margin;
    let bottom = built_bottom + margin;
    let top_overflow = top < 0.0;
    let bottom_overflow = bottom > height;
    let shrink_bottom = bottom_overflow && legs != Some(UNFIT_LEGS);

    if !top_overflow && !shrink_bottom {
        return Matrix::IDENTITY;
    }

    let top_pivot = if top_overflow { margin } else { built_top };
    let bottom_pivot = if bottom_overflow {
        height - margin
    } else {
        built_bottom
    };

    let span = built_bottom - built_top;
    let mut m = Matrix::IDENTITY.translate(half_width, 0.0);
    if top_overflow && shrink_bottom {
        if span <= 0.0 || height <= 2.0 * margin {
            return Matrix::IDENTITY.translate(0.0, margin - built_top);
        }
        m = m
            .translate(0.0, margin)
            .scale_uniform((height - 2.0 * margin) / span)
            .translate(0.0, -built_top);
    } else if shrink_bottom {
        let divisor = bottom - top_pivot - margin;
        if top_pivot >= height - margin || divisor <= 0.0 {
            return Matrix::IDENTITY.translate(0.0, height - margin - built_bottom);
        }
        m = m
            .translate(0.0, top_pivot)
            .scale_uniform((height - top_pivot - margin) / divisor)
            .translate(0.0, -top_pivot);
    } else {
        let divisor = bottom_pivot - top - margin;
        if bottom_pivot <= margin || divisor <= 0.0 {
            return Matrix::IDENTITY.translate(0.0, margin - built_top);
        }
        m = m
            .translate(0.0, bottom_pivot)
            .scale_uniform((bottom_pivot - margin) / divisor)
            .translate(0.0, -bottom_pivot);
    }
    m.translate(-half_width, 0.0)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/fit.rs"]
mod tests;
