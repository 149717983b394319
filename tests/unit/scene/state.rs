use super::*;

#[test]
fn default_selection_is_all_heather() {
    let sel = Selection::default();
    assert!(sel.is_all(Character::Heather));
    assert!(!sel.is_all(Character::Boomhauer));
}

#[test]
fn is_all_requires_every_optional_slot() {
    let mut sel = Selection::uniform(Character::Boomhauer);
    assert!(sel.is_all(Character::Boomhauer));
    sel.legs = None;
    assert!(!sel.is_all(Character::Boomhauer));
}

#[test]
fn randomized_picks_are_selectable_and_seeded() {
    let a = Selection::randomized(&mut Rng64::new(42));
    let b = Selection::randomized(&mut Rng64::new(42));
    assert_eq!(a, b);

    let mut rng = Rng64::new(9);
    for _ in 0..200 {
        let s = Selection::randomized(&mut rng);
        for c in [Some(s.head), s.hair, Some(s.torso), s.arms, s.legs] {
            assert!(c.unwrap().is_selectable());
        }
    }
}

#[test]
fn scene_json_uses_defaults_for_missing_fields() {
    let scene = SceneState::from_json_str(
        r#"{ "selection": { "head": "kiwi", "hair": null, "torso": "cate", "arms": "rac", "legs": null }, "dancing": true }"#,
    )
    .unwrap();
    assert_eq!(scene.selection.head, Character::Kiwi);
    assert_eq!(scene.selection.hair, None);
    assert_eq!(scene.selection.torso, Character::Cate);
    assert!(scene.dancing);
    assert_eq!(scene.fade_in, FadeIn::default());
}

#[test]
fn scene_json_rejects_unknown_characters() {
    let err = SceneState::from_json_str(r#"{ "selection": { "head": "nobody" } }"#).unwrap_err();
    assert!(matches!(err, BrenError::Validation(_)));
}

#[test]
fn scene_round_trips_through_json() {
    let scene = SceneState::settled(Selection::uniform(Character::Violet));
    let text = scene.to_json_pretty().unwrap();
    assert_eq!(SceneState::from_json_str(&text).unwrap(), scene);
}

#[test]
fn set_selection_arms_and_resets_intensity() {
    let mut scene = SceneState::default();
    scene.set_selection(Selection::uniform(Character::Boomhauer));
    assert!(scene.intensity.ticks_remaining().is_some());
    scene.set_selection(Selection::default());
    assert_eq!(scene.intensity, IntensityEvent::default());
}

#[test]
fn from_path_reports_missing_file() {
    assert!(SceneState::from_path("/definitely/not/here/scene.json").is_err());
}

#[test]
fn randomize_hits_jackpot_only_after_warmup() {
    let mut scene = SceneState::settled(Selection::default());
    let mut rng = Rng64::new(7);
    for _ in 0..=JACKPOT_WARMUP {
        assert_eq!(scene.randomize(&mut rng), RandomizeOutcome::Picked);
        assert!(!scene.intensity.is_active());
    }
    assert_eq!(scene.randomizer.hits(), JACKPOT_WARMUP + 1);

    let mut jackpot = false;
    for _ in 0..3000 {
        if scene.randomize(&mut rng) == RandomizeOutcome::Jackpot {
            jackpot = true;
            break;
        }
    }
    assert!(jackpot);
    assert!(scene.selection.is_all(INTENSITY_CHARACTER));
    assert_eq!(scene.intensity, IntensityEvent::full());
    assert_eq!(scene.intensity.zoom_progress(), Some(1.0));
    // A first jackpot never imposes a cooldown.
    assert_eq!(scene.randomizer.breaks_remaining(), 0);
    assert_ne!(scene.randomize(&mut rng), RandomizeOutcome::Skipped);
}

#[test]
fn cooldown_swallows_randomizes_without_touching_picks() {
    let mut scene = SceneState::settled(Selection::uniform(Character::Kiwi));
    scene.randomizer = Randomizer {
        hits: 3,
        breaks: 2,
        jackpot_seen: true,
    };
    let mut rng = Rng64::new(1);
    assert_eq!(scene.randomize(&mut rng), RandomizeOutcome::Skipped);
    assert_eq!(scene.randomize(&mut rng), RandomizeOutcome::Skipped);
    assert_eq!(scene.selection, Selection::uniform(Character::Kiwi));
    assert_eq!(scene.randomizer.hits(), 3);
    assert_eq!(scene.randomize(&mut rng), RandomizeOutcome::Picked);
    assert_eq!(scene.randomizer.hits(), 4);
}

#[test]
fn repeat_jackpots_draw_cooldowns_from_weighted_table() {
    let mut scene = SceneState::settled(Selection::default());
    let mut rng = Rng64::new(2024);
    let mut jackpots = 0;
    for _ in 0..20_000 {
        if scene.randomize(&mut rng) == RandomizeOutcome::Jackpot {
            jackpots += 1;
            assert!(JACKPOT_BREAKS.contains(&scene.randomizer.breaks_remaining()));
            if jackpots == 1 {
                assert_eq!(scene.randomizer.breaks_remaining(), 0);
            }
        }
    }
    assert!(jackpots > 1);
}
