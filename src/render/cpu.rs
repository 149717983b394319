use std::collections::HashMap;
use std::sync::Arc;

use kurbo::Shape;

use crate::assets::image::PartImage;
use crate::compose::frame::Frame;
use crate::compose::overlay::{
    BOX_LINE_WIDTH, BOX_RGBA, MARKER_RADIUS, MARKER_RGBA, OverlayShape, segment_quad,
};
use crate::effects::outline::outline_rgba8_premul;
use crate::foundation::core::{Affine, BezPath, Canvas, Point};
use crate::foundation::error::{BrenError, BrenResult};
use crate::render::backend::{FrameRGBA, FrameRenderer, FrameStyle, RenderSettings};

/// Software renderer built on `vello_cpu`.
///
/// The figure is drawn onto its own transparent layer so the outline filter only sees the
/// figure, then composited over the background.
pub struct CpuRenderer {
    canvas: Canvas,
    settings: RenderSettings,
    image_cache: HashMap<usize, (Arc<PartImage>, vello_cpu::Image)>,
}

impl CpuRenderer {
    /// Renderer for `canvas`.
    pub fn new(canvas: Canvas, settings: RenderSettings) -> BrenResult<Self> {
        let canvas = Canvas::new(canvas.width, canvas.height)?;
        Ok(Self {
            canvas,
            settings,
            image_cache: HashMap::new(),
        })
    }

    /// Backend settings.
    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    fn size_u16(&self) -> BrenResult<(u16, u16)> {
        let w: u16 = self
            .canvas
            .width
            .try_into()
            .map_err(|_| BrenError::render("canvas width exceeds u16"))?;
        let h: u16 = self
            .canvas
            .height
            .try_into()
            .map_err(|_| BrenError::render("canvas height exceeds u16"))?;
        Ok((w, h))
    }

    fn image_paint_for(&mut self, image: &Arc<PartImage>) -> BrenResult<vello_cpu::Image> {
        let key = Arc::as_ptr(image) as usize;
        if let Some((_, paint)) = self.image_cache.get(&key) {
            return Ok(paint.clone());
        }

        let pixmap = image_premul_bytes_to_pixmap(image.data(), image.width(), image.height())?;
        let paint = vello_cpu::Image {
            image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
            sampler: pixel_sampler(),
        };
        self.image_cache
            .insert(key, (Arc::clone(image), paint.clone()));
        Ok(paint)
    }

    fn render_figure_layer(&mut self, frame: &Frame, w: u16, h: u16) -> BrenResult<Vec<u8>> {
        let mut pixmap = vello_cpu::Pixmap::new(w, h);
        let mut ctx = vello_cpu::RenderContext::new(w, h);
        ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);

        for cmd in frame.commands() {
            if cmd.image.width() == 0 || cmd.image.height() == 0 {
                continue;
            }
            let paint = self.image_paint_for(&cmd.image)?;
            ctx.set_transform(affine_to_cpu(cmd.transform.affine()));
            ctx.set_paint(paint);
            ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                0.0,
                0.0,
                f64::from(cmd.image.width()),
                f64::from(cmd.image.height()),
            ));
        }
        ctx.flush();
        ctx.render_to_pixmap(&mut pixmap);

        let layer = pixmap.data_as_u8_slice().to_vec();
        if self.settings.outline {
            outline_rgba8_premul(&layer, u32::from(w), u32::from(h))
        } else {
            Ok(layer)
        }
    }
}

impl FrameRenderer for CpuRenderer {
    #[tracing::instrument(skip_all, fields(commands = frame.commands().len()))]
    fn render(&mut self, frame: &Frame, style: &FrameStyle) -> BrenResult<FrameRGBA> {
        let (w, h) = self.size_u16()?;
        let full = vello_cpu::kurbo::Rect::new(0.0, 0.0, f64::from(w), f64::from(h));

        let figure = self.render_figure_layer(frame, w, h)?;
        let figure_paint = vello_cpu::Image {
            image: vello_cpu::ImageSource::Pixmap(Arc::new(image_premul_bytes_to_pixmap(
                &figure,
                u32::from(w),
                u32::from(h),
            )?)),
            sampler: pixel_sampler(),
        };

        let mut pixmap = vello_cpu::Pixmap::new(w, h);
        let mut ctx = vello_cpu::RenderContext::new(w, h);
        ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);

        if let Some([r, g, b, a]) = self.settings.clear_rgba {
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
            ctx.fill_rect(&full);
        }
        let darkness = (style.background_darkness.clamp(0.0, 1.0) * 255.0).round() as u8;
        if darkness > 0 {
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(0, 0, 0, darkness));
            ctx.fill_rect(&full);
        }

        ctx.set_paint(figure_paint);
        ctx.fill_rect(&full);

        for shape in &style.overlays {
            let (path, [r, g, b, a]) = overlay_path(shape);
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
            ctx.fill_path(&bezpath_to_cpu(&path));
        }

        ctx.flush();
        ctx.render_to_pixmap(&mut pixmap);

        Ok(FrameRGBA {
            width: u32::from(w),
            height: u32::from(h),
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        })
    }
}

/// Nearest-neighbour sampling keeps hard pixel-art edges under scale.
fn pixel_sampler() -> vello_cpu::peniko::ImageSampler {
    use vello_cpu::peniko::{ImageQuality, ImageSampler};

    ImageSampler::default().with_quality(ImageQuality::Low)
}

fn overlay_path(shape: &OverlayShape) -> (BezPath, [u8; 4]) {
    match *shape {
        OverlayShape::Marker { center } => (
            kurbo::Circle::new(center, MARKER_RADIUS).to_path(0.1),
            MARKER_RGBA,
        ),
        OverlayShape::BoundsBox { corners } => {
            let mut path = BezPath::new();
            for i in 0..corners.len() {
                let a = corners[i];
                let b = corners[(i + 1) % corners.len()];
                let Some(quad) = segment_quad(a, b, BOX_LINE_WIDTH) else {
                    continue;
                };
                polygon(&mut path, &quad);
            }
            (path, BOX_RGBA)
        }
    }
}

fn polygon(path: &mut BezPath, points: &[Point]) {
    let Some((first, rest)) = points.split_first() else {
        return;
    };
    path.move_to(*first);
    for p in rest {
        path.line_to(*p);
    }
    path.close_path();
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

fn image_premul_bytes_to_pixmap(
    rgba8_premul: &[u8],
    width: u32,
    height: u32,
) -> BrenResult<vello_cpu::Pixmap> {
    let w: u16 = width
        .try_into()
        .map_err(|_| BrenError::render("image width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| BrenError::render("image height exceeds u16"))?;
    if rgba8_premul.len() != width as usize * height as usize * 4 {
        return Err(BrenError::render("image byte length mismatch"));
    }

    let mut may_have_opacities = false;
    let mut pixels = Vec::with_capacity(width as usize * height as usize);
    for px in rgba8_premul.chunks_exact(4) {
        let a = px[3];
        may_have_opacities |= a != 255;
        pixels.push(vello_cpu::peniko::color::PremulRgba8 {
            r: px[0],
            g: px[1],
            b: px[2],
            a,
        });
    }

    Ok(vello_cpu::Pixmap::from_parts_with_opacity(
        pixels,
        w,
        h,
        may_have_opacities,
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
