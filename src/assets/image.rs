//! Part artwork held in memory and the lookup seam the compositor reads it through.

use std::collections::HashMap;
use std::sync::Arc;

use crate::assets::decode::premultiply_rgba8_in_place;
use crate::foundation::core::Rgba8Premul;
use crate::foundation::error::{BrenError, BrenResult};
use crate::registry::ids::{BodyPartType, Character};

/// Premultiplied RGBA8 raster of one part in its character's native pixel space.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PartImage {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PartImage {
    /// Wrap premultiplied RGBA8 bytes.
    pub fn from_premul_rgba8(width: u32, height: u32, data: Vec<u8>) -> BrenResult<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(4))
            .ok_or_else(|| BrenError::asset("part image dimensions overflow"))?;
        if data.len() != expected {
            return Err(BrenError::asset(format!(
                "part image buffer has {} bytes, expected {expected} for {width}x{height}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Take ownership of a straight-alpha image and premultiply it.
    pub fn from_rgba_image(img: image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        let mut data = img.into_raw();
        premultiply_rgba8_in_place(&mut data);
        Self {
            width,
            height,
            data,
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw premultiplied RGBA8 bytes, row-major.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Alpha at `(x, y)`; callers stay in bounds.
    pub fn alpha_at(&self, x: u32, y: u32) -> u8 {
        self.data[((y as usize * self.width as usize) + x as usize) * 4 + 3]
    }

    /// Pixel at `(x, y)`, or `None` outside the raster.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba8Premul> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize * self.width as usize) + x as usize) * 4;
        Some(Rgba8Premul {
            r: self.data[i],
            g: self.data[i + 1],
            b: self.data[i + 2],
            a: self.data[i + 3],
        })
    }
}

/// Artwork for one (part, character): the regular image plus an optional face-less variant.
#[derive(Clone, Debug)]
pub struct PartImageSet {
    main: Arc<PartImage>,
    no_face: Option<Arc<PartImage>>,
}

impl PartImageSet {
    /// Set with only the regular image.
    pub fn new(main: PartImage) -> Self {
        Self {
            main: Arc::new(main),
            no_face: None,
        }
    }

    /// Attach a face-less variant.
    pub fn with_no_face(mut self, no_face: PartImage) -> Self {
        self.no_face = Some(Arc::new(no_face));
        self
    }

    /// Regular image.
    pub fn main(&self) -> &Arc<PartImage> {
        &self.main
    }

    /// Face-less variant if present.
    pub fn no_face(&self) -> Option<&Arc<PartImage>> {
        self.no_face.as_ref()
    }

    /// Face-less variant, falling back to the regular image.
    pub fn no_face_or_main(&self) -> &Arc<PartImage> {
        self.no_face.as_ref().unwrap_or(&self.main)
    }
}

/// Provides part artwork to the compositor. Absent entries are skipped, never awaited.
pub trait PartImageSource {
    /// Artwork for `part` of `character`, if loaded.
    fn images(&self, part: BodyPartType, character: Character) -> Option<&PartImageSet>;
}

/// Map-backed image source, filled programmatically or by the directory loader.
#[derive(Clone, Debug, Default)]
pub struct InMemoryStore {
    sets: HashMap<(BodyPartType, Character), PartImageSet>,
}

impl InMemoryStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the artwork for `(part, character)`.
    pub fn insert(&mut self, part: BodyPartType, character: Character, set: PartImageSet) {
        self.sets.insert((part, character), set);
    }

    /// Number of loaded (part, character) entries.
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    /// Whether nothing is loaded.
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}

impl PartImageSource for InMemoryStore {
    fn images(&self, part: BodyPartType, character: Character) -> Option<&PartImageSet> {
        self.sets.get(&(part, character))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/image.rs"]
mod tests;
