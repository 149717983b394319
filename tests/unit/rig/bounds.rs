use super::*;
use crate::assets::image::{InMemoryStore, PartImageSet};

fn image_with_opaque_block(w: u32, h: u32, block: (u32, u32, u32, u32), alpha: u8) -> PartImage {
    let mut img = image::RgbaImage::new(w, h);
    for y in block.1..=block.3 {
        for x in block.0..=block.2 {
            img.put_pixel(x, y, image::Rgba([255, 255, 255, alpha]));
        }
    }
    PartImage::from_rgba_image(img)
}

#[test]
fn scan_finds_opaque_block() {
    let img = image_with_opaque_block(10, 8, (2, 3, 6, 5), 255);
    let b = PartBounds::scan(&img).unwrap();
    assert_eq!(b, PartBounds::new(2.0, 3.0, 6.0, 5.0));
    assert_eq!(b.width, 4.0);
    assert_eq!(b.height, 2.0);
}

#[test]
fn scan_threshold_is_127() {
    let faint = image_with_opaque_block(4, 4, (1, 1, 2, 2), 126);
    assert_eq!(PartBounds::scan(&faint), None);
    let just = image_with_opaque_block(4, 4, (1, 1, 1, 1), 127);
    assert_eq!(PartBounds::scan(&just), Some(PartBounds::new(1.0, 1.0, 1.0, 1.0)));
}

#[test]
fn cache_scans_each_key_once() {
    let mut store = InMemoryStore::new();
    store.insert(
        BodyPartType::Torso,
        Character::Heather,
        PartImageSet::new(image_with_opaque_block(8, 8, (0, 0, 3, 7), 255)),
    );
    store.insert(
        BodyPartType::Head,
        Character::Heather,
        PartImageSet::new(image_with_opaque_block(8, 8, (0, 0, 0, 0), 0)),
    );

    let mut cache = BoundsCache::new();
    let first = cache.bounds_of(BodyPartType::Torso, Character::Heather, &store);
    let second = cache.bounds_of(BodyPartType::Torso, Character::Heather, &store);
    assert_eq!(first, second);
    assert_eq!(cache.scan_count(), 1);

    assert_eq!(cache.bounds_of(BodyPartType::Head, Character::Heather, &store), None);
    assert_eq!(cache.bounds_of(BodyPartType::Head, Character::Heather, &store), None);
    assert_eq!(cache.scan_count(), 2);

    assert_eq!(cache.bounds_of(BodyPartType::Tail, Character::Heather, &store), None);
    assert_eq!(cache.scan_count(), 2);
    assert_eq!(cache.len(), 3);
}

#[test]
fn empty_tracker_has_no_extent() {
    let tracker = ExtentTracker::new();
    assert_eq!(tracker.vertical_extent(), None);
}

#[test]
fn tracker_accumulates_scaled_bounds() {
    let mut tracker = ExtentTracker::new();
    let b = PartBounds::new(0.0, 10.0, 5.0, 20.0);
    tracker.record_placement(Matrix::IDENTITY.translate(0.0, 100.0).scale(1.0, 2.0), &b);
    tracker.record_placement(Matrix::IDENTITY.translate(0.0, 50.0), &b);
    let extent = tracker.vertical_extent().unwrap();
    assert_eq!(
        extent,
        VerticalExtent {
            top: 60.0,
            bottom: 140.0
        }
    );
    assert_eq!(extent.height(), 80.0);

    tracker.reset();
    assert_eq!(tracker.vertical_extent(), None);
}
