use super::*;

fn close(a: Vec2, b: Vec2) -> bool {
    (a - b).magnitude() < 1e-9
}

#[test]
fn move_towards_clamps_only_upper_bound() {
    let a = Vec2::new(0.0, 0.0);
    let b = Vec2::new(10.0, 20.0);
    assert!(close(a.move_towards(b, 0.5), Vec2::new(5.0, 10.0)));
    assert!(close(a.move_towards(b, 3.0), b));
    assert!(close(a.move_towards(b, -1.0), Vec2::new(-10.0, -20.0)));
}

#[test]
fn normalize_handles_zero_and_regular_vectors() {
    assert_eq!(Vec2::ZERO.normalize_or_zero(), Vec2::ZERO);
    assert_eq!(Vec2::new(1e-12, 0.0).normalize_or_zero(), Vec2::ZERO);
    let n = Vec2::new(3.0, 4.0).normalize_or_zero();
    assert!(close(n, Vec2::new(0.6, 0.8)));
    assert!((n.magnitude() - 1.0).abs() < 1e-12);
}

#[test]
fn dot_multiplies_both_components() {
    let a = Vec2::new(2.0, 3.0);
    let b = Vec2::new(4.0, 5.0);
    assert_eq!(a.dot(b), 23.0);
}

#[test]
fn distances_and_magnitudes() {
    let a = Vec2::new(1.0, 1.0);
    let b = Vec2::new(4.0, 5.0);
    assert_eq!(a.distance_sqr_to(b), 25.0);
    assert_eq!(a.distance_to(b), 5.0);
    assert_eq!(Vec2::new(3.0, 4.0).magnitude_sqr(), 25.0);
}

#[test]
fn rotate_and_angle_agree() {
    let v = Vec2::new(1.0, 0.0).rotate_by(std::f64::consts::FRAC_PI_2);
    assert!(close(v, Vec2::new(0.0, 1.0)));
    assert!((v.angle_rad() - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
}
