use super::*;

fn solid(w: u32, h: u32, a: u8) -> PartImage {
    PartImage::from_rgba_image(image::RgbaImage::from_pixel(w, h, image::Rgba([200, 100, 0, a])))
}

#[test]
fn from_premul_checks_buffer_length() {
    assert!(PartImage::from_premul_rgba8(2, 2, vec![0; 16]).is_ok());
    let err = PartImage::from_premul_rgba8(2, 2, vec![0; 15]).unwrap_err();
    assert!(matches!(err, BrenError::Asset(_)));
}

#[test]
fn rgba_image_is_premultiplied() {
    let img = solid(1, 1, 0);
    assert_eq!(img.pixel(0, 0), Some(Rgba8Premul::transparent()));
    let img = solid(3, 2, 255);
    assert_eq!(img.alpha_at(2, 1), 255);
    assert_eq!(img.pixel(3, 0), None);
}

#[test]
fn no_face_falls_back_to_main() {
    let set = PartImageSet::new(solid(1, 1, 255));
    assert!(set.no_face().is_none());
    assert!(Arc::ptr_eq(set.no_face_or_main(), set.main()));

    let set = set.with_no_face(solid(2, 2, 255));
    assert_eq!(set.no_face_or_main().width(), 2);
    assert_eq!(set.main().width(), 1);
}

#[test]
fn in_memory_store_lookup() {
    let mut store = InMemoryStore::new();
    assert!(store.is_empty());
    store.insert(BodyPartType::Torso, Character::Heather, PartImageSet::new(solid(4, 4, 255)));
    assert_eq!(store.len(), 1);
    assert!(store.images(BodyPartType::Torso, Character::Heather).is_some());
    assert!(store.images(BodyPartType::Head, Character::Heather).is_none());
}
