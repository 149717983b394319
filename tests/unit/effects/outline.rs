use super::*;

fn px(buf: &[u8], w: u32, x: u32, y: u32) -> [u8; 4] {
    let i = ((y * w + x) * 4) as usize;
    [buf[i], buf[i + 1], buf[i + 2], buf[i + 3]]
}

fn single_opaque(w: u32, h: u32, x: u32, y: u32, rgba: [u8; 4]) -> Vec<u8> {
    let mut buf = vec![0u8; (w * h * 4) as usize];
    let i = ((y * w + x) * 4) as usize;
    buf[i..i + 4].copy_from_slice(&rgba);
    buf
}

#[test]
fn rejects_mismatched_buffer() {
    let err = outline_rgba8_premul(&[0; 7], 1, 2).unwrap_err();
    assert!(matches!(err, BrenError::Render(_)));
}

#[test]
fn empty_raster_stays_empty() {
    let out = outline_rgba8_premul(&[0; 64], 4, 4).unwrap();
    assert!(out.iter().all(|&b| b == 0));
}

#[test]
fn opaque_pixels_are_kept() {
    let src = single_opaque(5, 5, 2, 2, [10, 20, 30, 255]);
    let out = outline_rgba8_premul(&src, 5, 5).unwrap();
    assert_eq!(px(&out, 5, 2, 2), [10, 20, 30, 255]);
}

#[test]
fn neighbours_get_white_outline() {
    let src = single_opaque(7, 7, 3, 3, [0, 0, 0, 255]);
    let out = outline_rgba8_premul(&src, 7, 7).unwrap();
    for (dx, dy) in RING {
        let p = px(&out, 7, (3 + dx) as u32, (3 + dy) as u32);
        assert_eq!(p, [255, 255, 255, 255], "ring offset ({dx}, {dy})");
    }
    // Diagonal distance 2 is outside the ring.
    assert_eq!(px(&out, 7, 5, 5), [0, 0, 0, 0]);
}

#[test]
fn shadow_falls_down_and_left() {
    let (w, h) = (32u32, 32u32);
    let src = single_opaque(w, h, 20, 5, [0, 0, 0, 255]);
    let out = outline_rgba8_premul(&src, w, h).unwrap();
    // Pixel (x, y) samples its shadow around (x + 10, y - 10), so (11, 15) sees the
    // ring neighbour (21, 5).
    assert_eq!(px(&out, w, 11, 15), [0, 0, 0, 255]);
    assert_eq!(px(&out, w, 29, 0), [0, 0, 0, 0]);
}
