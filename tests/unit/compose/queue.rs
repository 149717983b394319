use super::*;

fn entry(part: BodyPartType, character: Character, tag: f64) -> DrawQueueEntry {
    DrawQueueEntry {
        part,
        character,
        image: Arc::new(PartImage::from_premul_rgba8(1, 1, vec![0; 4]).unwrap()),
        transform: Matrix::IDENTITY.translate(tag, 0.0),
        bounds: None,
    }
}

#[test]
fn default_sort_orders_by_ordinal() {
    let mut q = DrawQueue::new();
    q.push(entry(BodyPartType::Torso, Character::Heather, 0.0));
    q.push(entry(BodyPartType::HairFront, Character::Heather, 1.0));
    q.push(entry(BodyPartType::LegBack, Character::Heather, 2.0));
    q.sort_by_depth(DepthOrder::DEFAULT);
    let parts: Vec<_> = q.entries().iter().map(|e| e.part).collect();
    assert_eq!(
        parts,
        vec![BodyPartType::LegBack, BodyPartType::Torso, BodyPartType::HairFront]
    );
}

#[test]
fn equal_ranks_keep_insertion_order() {
    let mut q = DrawQueue::new();
    q.push(entry(BodyPartType::Head, Character::Heather, 0.0));
    q.push(entry(BodyPartType::Torso, Character::Kiwi, 1.0));
    q.push(entry(BodyPartType::Torso, Character::Rac, 2.0));
    q.push(entry(BodyPartType::Torso, Character::Ash, 3.0));
    q.sort_by_depth(DepthOrder::DEFAULT);
    let tags: Vec<_> = q.entries().iter().map(|e| e.transform.translation().x).collect();
    assert_eq!(tags, vec![1.0, 2.0, 3.0, 0.0]);
}

#[test]
fn override_order_is_applied() {
    let mut q = DrawQueue::new();
    q.push(entry(BodyPartType::Torso, Character::Austrol, 0.0));
    q.push(entry(BodyPartType::LegFront, Character::Austrol, 1.0));
    q.sort_by_depth(DepthOrder::for_character(Character::Austrol));
    assert_eq!(q.entries()[0].part, BodyPartType::LegFront);
    assert_eq!(q.len(), 2);
}
