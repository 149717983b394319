use super::*;
use crate::assets::image::{InMemoryStore, PartImageSet};
use crate::compose::frame::{FrameMotion, build_frame};
use crate::registry::ids::{BodyPartType, Character};
use crate::rig::bounds::BoundsCache;
use crate::scene::settings::StageSettings;
use crate::scene::state::Selection;

fn settings(w: u32, h: u32) -> StageSettings {
    StageSettings {
        canvas: Canvas::new(w, h).unwrap(),
        margin: 1.0,
        ..StageSettings::default()
    }
}

fn empty_frame(stage: &StageSettings) -> Frame {
    build_frame(
        &Selection::default(),
        stage,
        FrameMotion::default(),
        None,
        &InMemoryStore::new(),
        &mut BoundsCache::new(),
    )
    .unwrap()
}

#[test]
fn empty_frame_shows_background() {
    let stage = settings(8, 6);
    let mut r = CpuRenderer::new(stage.canvas, RenderSettings::from(&stage)).unwrap();
    let out = r.render(&empty_frame(&stage), &FrameStyle::default()).unwrap();
    assert_eq!((out.width, out.height), (8, 6));
    assert!(out.premultiplied);
    assert!(out.data.chunks_exact(4).all(|px| px == [255, 255, 255, 255]));
}

#[test]
fn full_darkness_blacks_out_background() {
    let stage = settings(4, 4);
    let mut r = CpuRenderer::new(stage.canvas, RenderSettings::from(&stage)).unwrap();
    let style = FrameStyle {
        background_darkness: 1.0,
        overlays: Vec::new(),
    };
    let out = r.render(&empty_frame(&stage), &style).unwrap();
    assert!(out.data.chunks_exact(4).all(|px| px == [0, 0, 0, 255]));
}

#[test]
fn transparent_background_without_clear() {
    let stage = StageSettings {
        background_rgba: None,
        ..settings(4, 4)
    };
    let mut r = CpuRenderer::new(stage.canvas, RenderSettings::from(&stage)).unwrap();
    let out = r.render(&empty_frame(&stage), &FrameStyle::default()).unwrap();
    assert!(out.data.iter().all(|&b| b == 0));
}

#[test]
fn figure_pixels_reach_the_output() {
    let stage = StageSettings {
        background_rgba: None,
        outline: false,
        ..settings(64, 64)
    };
    let mut store = InMemoryStore::new();
    store.insert(
        BodyPartType::Torso,
        Character::Test1,
        PartImageSet::new(PartImage::from_rgba_image(image::RgbaImage::from_pixel(
            400,
            400,
            image::Rgba([200, 0, 0, 255]),
        ))),
    );
    let sel = Selection {
        hair: None,
        arms: None,
        legs: None,
        ..Selection::uniform(Character::Test1)
    };
    let frame = build_frame(
        &sel,
        &stage,
        FrameMotion::default(),
        None,
        &store,
        &mut BoundsCache::new(),
    )
    .unwrap();
    let mut r = CpuRenderer::new(stage.canvas, RenderSettings::from(&stage)).unwrap();
    let out = r.render(&frame, &FrameStyle::default()).unwrap();
    let center = ((32 * 64 + 32) * 4) as usize;
    assert_eq!(out.data[center + 3], 255);
    assert!(out.data[center] > 150);
}

#[test]
fn renderer_rejects_zero_canvas() {
    let canvas = Canvas {
        width: 0,
        height: 4,
    };
    assert!(CpuRenderer::new(canvas, RenderSettings::default()).is_err());
}

#[test]
fn scaled_parts_are_sampled_without_smoothing() {
    let stage = StageSettings {
        background_rgba: None,
        outline: false,
        ..settings(64, 64)
    };
    let split = image::RgbaImage::from_fn(40, 400, |x, _| {
        if x < 20 {
            image::Rgba([200, 0, 0, 255])
        } else {
            image::Rgba([0, 0, 200, 255])
        }
    });
    let mut store = InMemoryStore::new();
    store.insert(
        BodyPartType::Torso,
        Character::Test1,
        PartImageSet::new(PartImage::from_rgba_image(split)),
    );
    let sel = Selection {
        hair: None,
        arms: None,
        legs: None,
        ..Selection::uniform(Character::Test1)
    };
    let frame = build_frame(
        &sel,
        &stage,
        FrameMotion::default(),
        None,
        &store,
        &mut BoundsCache::new(),
    )
    .unwrap();
    let mut r = CpuRenderer::new(stage.canvas, RenderSettings::from(&stage)).unwrap();
    let out = r.render(&frame, &FrameStyle::default()).unwrap();

    let covered = out.data.chunks_exact(4).filter(|p| p[3] > 0).count();
    assert!(covered > 0);
    // A smoothing filter would blend the two halves along their shared column.
    assert!(out.data.chunks_exact(4).all(|p| p[0] == 0 || p[2] == 0));
}
