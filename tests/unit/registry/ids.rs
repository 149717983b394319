use super::*;

#[test]
fn part_ordinals_match_default_depth() {
    for (i, part) in BodyPartType::ALL.iter().enumerate() {
        assert_eq!(part.index(), i);
    }
    assert_eq!(BodyPartType::Torso.index(), 8);
    assert_eq!(BodyPartType::TorsoFront.index(), 16);
}

#[test]
fn character_ordinals_and_selectable_range() {
    for (i, c) in Character::ALL.iter().enumerate() {
        assert_eq!(c.index(), i);
    }
    assert_eq!(Character::selectable().len(), 24);
    assert_eq!(Character::selectable()[0], Character::Bekzii);
    assert!(!Character::Test2.is_selectable());
    assert!(Character::Brick.is_selectable());
}

#[test]
fn character_parses_display_and_asset_names() {
    assert_eq!("cate".parse::<Character>().unwrap(), Character::Cate);
    assert_eq!("snip".parse::<Character>().unwrap(), Character::Cate);
    assert_eq!("Bek".parse::<Character>().unwrap(), Character::Bekzii);
    assert_eq!(" heather ".parse::<Character>().unwrap(), Character::Heather);
    assert!("nobody".parse::<Character>().is_err());
}

#[test]
fn serde_names_are_snake_case() {
    assert_eq!(
        serde_json::to_string(&Character::Boomhauer).unwrap(),
        "\"boomhauer\""
    );
    assert_eq!(
        serde_json::to_string(&BodyPartType::ArmBSameOL).unwrap(),
        "\"arm_b_same_o_l\""
    );
    let c: Character = serde_json::from_str("\"test1\"").unwrap();
    assert_eq!(c, Character::Test1);
}

#[test]
fn only_ghost_tail_lacks_a_table_slot() {
    for (i, p) in AttachPoint::TABLE.iter().enumerate() {
        assert_eq!(p.table_slot(), Some(i));
    }
    assert_eq!(AttachPoint::GhostTail.table_slot(), None);
}
