use super::*;
use crate::assets::image::{InMemoryStore, PartImageSet};
use crate::foundation::core::Point;

fn tall_store() -> InMemoryStore {
    let mut store = InMemoryStore::new();
    // A torso far taller than the canvas forces both fits.
    let tall = image::RgbaImage::from_pixel(20, 2000, image::Rgba([1, 2, 3, 255]));
    store.insert(
        BodyPartType::Torso,
        Character::Heather,
        PartImageSet::new(PartImage::from_rgba_image(tall)),
    );
    store
}

#[test]
fn commands_apply_fit_around_entry() {
    let store = tall_store();
    let mut cache = BoundsCache::new();
    let settings = StageSettings::default();
    let frame = build_frame(
        &Selection::default(),
        &settings,
        FrameMotion::default(),
        None,
        &store,
        &mut cache,
    )
    .unwrap();

    assert_eq!(frame.commands().len(), 1);
    assert_ne!(frame.fit(), Matrix::IDENTITY);

    let cmd = &frame.commands()[0];
    let top = cmd.transform.apply(Point::new(0.0, 0.0)).y;
    let bottom = cmd.transform.apply(Point::new(0.0, 1999.0)).y;
    assert!((top - 15.0).abs() < 1e-6, "top {top}");
    assert!((bottom - 465.0).abs() < 1e-6, "bottom {bottom}");
}

#[test]
fn motion_wraps_outside_the_fit() {
    let store = tall_store();
    let mut cache = BoundsCache::new();
    let settings = StageSettings::default();
    let still = build_frame(
        &Selection::default(),
        &settings,
        FrameMotion::default(),
        None,
        &store,
        &mut cache,
    )
    .unwrap();
    let moved = build_frame(
        &Selection::default(),
        &settings,
        FrameMotion {
            dance: Matrix::IDENTITY,
            float: Matrix::IDENTITY.translate(0.0, -7.0),
        },
        None,
        &store,
        &mut cache,
    )
    .unwrap();
    let a = still.commands()[0].transform.apply(Point::new(3.0, 4.0));
    let b = moved.commands()[0].transform.apply(Point::new(3.0, 4.0));
    assert!((b.y - (a.y - 7.0)).abs() < 1e-9);
    assert!((b.x - a.x).abs() < 1e-9);
    assert_eq!(still.vertical_extent(), moved.vertical_extent());
}

#[test]
fn empty_store_yields_empty_frame() {
    let store = InMemoryStore::new();
    let mut cache = BoundsCache::new();
    let frame = build_frame(
        &Selection::default(),
        &StageSettings::default(),
        FrameMotion::default(),
        None,
        &store,
        &mut cache,
    )
    .unwrap();
    assert!(frame.is_empty());
    assert_eq!(frame.vertical_extent(), None);
    assert_eq!(frame.fit(), Matrix::IDENTITY);
    assert_eq!(frame.push_count(), 9);
}

#[test]
fn single_row_part_keeps_a_finite_transform() {
    let mut img = image::RgbaImage::new(40, 2);
    for x in 0..40 {
        img.put_pixel(x, 0, image::Rgba([9, 9, 9, 255]));
    }
    let mut store = InMemoryStore::new();
    store.insert(
        BodyPartType::Torso,
        Character::Heather,
        PartImageSet::new(PartImage::from_rgba_image(img)),
    );
    let frame = build_frame(
        &Selection::default(),
        &StageSettings::default(),
        FrameMotion::default(),
        None,
        &store,
        &mut BoundsCache::new(),
    )
    .unwrap();

    let extent = frame.vertical_extent().unwrap();
    assert_eq!(extent.height(), 0.0);
    assert!(frame.fit().coeffs().iter().all(|c| c.is_finite()));
    assert_eq!(frame.commands().len(), 1);
    let cmd = &frame.commands()[0];
    assert!(cmd.transform.coeffs().iter().all(|c| c.is_finite()));
    let y = cmd.transform.apply(Point::new(0.0, 0.0)).y;
    assert!((15.0..=465.0).contains(&y), "row lands at {y}");
}
