use super::*;

#[test]
fn defaults_match_stage() {
    let s = StageSettings::default();
    assert_eq!(
        s.canvas,
        Canvas {
            width: 640,
            height: 480
        }
    );
    assert_eq!(s.margin, 15.0);
    assert!(s.outline);
    assert!(!s.debug.any());
    s.validate().unwrap();
}

#[test]
fn validate_rejects_bad_margin_and_canvas() {
    let mut s = StageSettings {
        margin: -1.0,
        ..StageSettings::default()
    };
    assert!(s.validate().is_err());
    s.margin = 240.0;
    assert!(s.validate().is_err());
    s.margin = 15.0;
    s.canvas.width = 0;
    assert!(s.validate().is_err());
}

#[test]
fn json_overrides_only_given_fields() {
    let s = StageSettings::from_json_str(
        r#"{ "outline": false, "debug": { "part_bounds": true } }"#,
    )
    .unwrap();
    assert!(!s.outline);
    assert!(s.debug.part_bounds);
    assert!(!s.debug.attach_points);
    assert_eq!(s.canvas, Canvas::default());
}
