use super::*;

#[test]
fn builtin_tables_validate() {
    Registry::validate().unwrap();
}

#[test]
fn attach_lookup_reads_heather_row() {
    let head = Registry::attach_info(Character::Heather, AttachPoint::Head).unwrap();
    assert_eq!(head.position, Vec2::new(266.0, 223.0));
    assert_eq!(head.local_scale, 0.7);

    let torso = Registry::attach_info(Character::Heather, AttachPoint::Torso).unwrap();
    assert_eq!(torso.position, Vec2::new(265.0, 363.0));
    assert_eq!(torso.local_scale, 1.0);
}

#[test]
fn ghost_tail_has_no_table_entry() {
    let err = Registry::attach_info(Character::Hazel, AttachPoint::GhostTail).unwrap_err();
    assert!(matches!(err, BrenError::Registry(_)));
}

#[test]
fn scale_factors_follow_registry_order() {
    assert_eq!(Registry::scale_factor(Character::Test1), 1.0);
    assert_eq!(Registry::scale_factor(Character::Boomhauer), 0.6);
    assert_eq!(Registry::scale_factor(Character::Heather), 1.33);
    assert_eq!(Registry::scale_factor(Character::Brick), 0.92);
}

#[test]
fn part_existence_samples() {
    assert!(Registry::part_exists(Character::Hazel, BodyPartType::GhostTail));
    assert!(!Registry::part_exists(Character::Hazel, BodyPartType::LegFront));
    assert!(Registry::part_exists(Character::Cate, BodyPartType::TorsoUnder));
    assert!(Registry::part_exists(Character::Roxy, BodyPartType::EyeOverHair));
    assert!(!Registry::part_exists(Character::Ware, BodyPartType::HairFront));
    assert!(!Registry::part_exists(Character::Iron, BodyPartType::ArmBack));
    for c in Character::ALL {
        assert!(Registry::part_exists(c, BodyPartType::Torso));
        assert!(Registry::part_exists(c, BodyPartType::Head));
    }
}
