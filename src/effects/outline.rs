//! Outline and drop-shadow post-filter over a premultiplied RGBA8 raster.

use crate::foundation::error::{BrenError, BrenResult};

/// Neighbourhood summed to detect edges, relative to the sampled pixel.
pub const RING: [(i32, i32); 12] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (2, 0),
    (-2, 0),
    (0, 2),
    (0, -2),
    (1, 1),
    (-1, 1),
    (1, -1),
    (-1, -1),
];

/// Where the shadow samples from, in raster pixels (+x right, +y down).
pub const SHADOW_OFFSET: (i32, i32) = (10, -10);

/// Apply the outline/shadow filter, returning a new buffer.
///
/// Per pixel: `E(dx, dy) = min(1, Σ alpha(p + (dx, dy) + r))` over [`RING`];
/// `base = mix((0,0,0,E_shadow), (E,E,E,E), E)`, `out = mix(base, color, color.a)`.
/// Samples outside the raster are transparent.
pub fn outline_rgba8_premul(src: &[u8], width: u32, height: u32) -> BrenResult<Vec<u8>> {
    let expected_len = (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(4))
        .ok_or_else(|| BrenError::render("outline buffer size overflow"))?;
    if src.len() != expected_len {
        return Err(BrenError::render(
            "outline_rgba8_premul expects src matching width*height*4",
        ));
    }

    let w = width as i32;
    let h = height as i32;
    let alpha: Vec<f32> = src.chunks_exact(4).map(|px| f32::from(px[3]) / 255.0).collect();
    let alpha_at = |x: i32, y: i32| -> f32 {
        if x < 0 || y < 0 || x >= w || y >= h {
            0.0
        } else {
            alpha[(y * w + x) as usize]
        }
    };
    let edge = |x: i32, y: i32| -> f32 {
        RING.iter()
            .map(|(rx, ry)| alpha_at(x + rx, y + ry))
            .sum::<f32>()
            .min(1.0)
    };

    let mut out = vec![0u8; expected_len];
    for y in 0..h {
        for x in 0..w {
            let i = ((y * w + x) as usize) * 4;
            let outline = edge(x, y);
            let shadow = edge(x + SHADOW_OFFSET.0, y + SHADOW_OFFSET.1);

            let base = [
                outline * outline,
                outline * outline,
                outline * outline,
                mix(shadow, outline, outline),
            ];
            let color = &src[i..i + 4];
            let ca = f32::from(color[3]) / 255.0;
            for c in 0..4 {
                let v = mix(base[c], f32::from(color[c]) / 255.0, ca);
                out[i + c] = (v * 255.0).round().clamp(0.0, 255.0) as u8;
            }
        }
    }
    Ok(out)
}

fn mix(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[cfg(test)]
#[path = "../../tests/unit/effects/outline.rs"]
mod tests;
