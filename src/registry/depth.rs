//! Draw-depth orders, with per-character overrides keyed by the torso pick.

use crate::foundation::error::{BrenError, BrenResult};
use crate::registry::ids::{BodyPartType, Character};

use BodyPartType::*;

const AUSTROL_ORDER: [BodyPartType; BodyPartType::COUNT] = [
    HeadBack, HairBack, TorsoBack, Tail, ArmBack, LegBack, LegFront, GhostTail, TorsoUnder, Torso,
    ArmBSameOL, ArmFront, Head, HairFront, EyeOverHair, HeadFront, TorsoFront,
];

const CATE_ORDER: [BodyPartType; BodyPartType::COUNT] = [
    HeadBack, HairBack, TorsoBack, Tail, ArmBack, LegBack, GhostTail, TorsoUnder, LegFront, Head,
    Torso, ArmBSameOL, ArmFront, HairFront, EyeOverHair, HeadFront, TorsoFront,
];

const RAC_ORDER: [BodyPartType; BodyPartType::COUNT] = [
    HeadBack, HairBack, TorsoBack, Tail, ArmBack, LegBack, GhostTail, LegFront, TorsoUnder, Torso,
    ArmBSameOL, ArmFront, Head, HairFront, EyeOverHair, HeadFront, TorsoFront,
];

/// Back-to-front ordering of part kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DepthOrder {
    parts: &'static [BodyPartType; BodyPartType::COUNT],
}

impl DepthOrder {
    /// Ordinal order used by every character without an override.
    pub const DEFAULT: Self = Self {
        parts: &BodyPartType::ALL,
    };

    /// Order for a figure whose torso comes from `torso`.
    pub fn for_character(torso: Character) -> Self {
        match torso {
            Character::Austrol | Character::Herman | Character::June => Self {
                parts: &AUSTROL_ORDER,
            },
            Character::Cate => Self { parts: &CATE_ORDER },
            Character::Rac => Self { parts: &RAC_ORDER },
            _ => Self::DEFAULT,
        }
    }

    /// Part kinds from back to front.
    pub fn parts(self) -> &'static [BodyPartType] {
        self.parts
    }

    /// Position of `part` in this order (0 = drawn first).
    pub fn rank(self, part: BodyPartType) -> usize {
        self.parts
            .iter()
            .position(|p| *p == part)
            .unwrap_or(self.parts.len())
    }

    /// Check that the order is a permutation of every part kind.
    pub fn validate(self) -> BrenResult<()> {
        let mut seen = [false; BodyPartType::COUNT];
        for part in self.parts {
            if std::mem::replace(&mut seen[part.index()], true) {
                return Err(BrenError::registry(format!(
                    "depth order lists {part} more than once"
                )));
            }
        }
        Ok(())
    }
}

impl Default for DepthOrder {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
#[path = "../../tests/unit/registry/depth.rs"]
mod tests;
