//! Identifiers for body-part layers, source characters and skeletal attach points.

use std::fmt;
use std::str::FromStr;

use crate::foundation::error::BrenError;

/// Anatomical layer kinds.
///
/// Declaration order is the default draw depth: lower ordinals are drawn first (behind).
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum BodyPartType {
    /// Head layer behind everything else (e.g. back of a hood).
    HeadBack,
    /// Hair drawn behind the torso.
    HairBack,
    /// Torso layer behind the limbs.
    TorsoBack,
    /// Tail attached to the torso.
    Tail,
    /// Back arm.
    ArmBack,
    /// Back leg.
    LegBack,
    /// Ghost tail stretched between the leg attach points.
    GhostTail,
    /// Torso layer under the main torso.
    TorsoUnder,
    /// Main torso.
    Torso,
    /// Back-arm outline overlay drawn only when arms and torso come from the same character.
    ArmBSameOL,
    /// Front leg.
    LegFront,
    /// Front arm.
    ArmFront,
    /// Main head.
    Head,
    /// Hair drawn over the head.
    HairFront,
    /// Eyes drawn over the hair.
    EyeOverHair,
    /// Head layer in front of the hair.
    HeadFront,
    /// Torso layer in front of everything.
    TorsoFront,
}

impl BodyPartType {
    /// Number of part kinds.
    pub const COUNT: usize = 17;

    /// All part kinds in default depth order.
    pub const ALL: [BodyPartType; Self::COUNT] = [
        Self::HeadBack,
        Self::HairBack,
        Self::TorsoBack,
        Self::Tail,
        Self::ArmBack,
        Self::LegBack,
        Self::GhostTail,
        Self::TorsoUnder,
        Self::Torso,
        Self::ArmBSameOL,
        Self::LegFront,
        Self::ArmFront,
        Self::Head,
        Self::HairFront,
        Self::EyeOverHair,
        Self::HeadFront,
        Self::TorsoFront,
    ];

    /// Ordinal, equal to the default draw depth.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Short name used in artwork file names.
    pub fn asset_name(self) -> &'static str {
        match self {
            Self::HeadBack => "headb",
            Self::HairBack => "hairb",
            Self::TorsoBack => "torsob",
            Self::Tail => "tail",
            Self::ArmBack => "armb",
            Self::LegBack => "legb",
            Self::GhostTail => "ghosttail",
            Self::TorsoUnder => "torsou",
            Self::Torso => "torso",
            Self::ArmBSameOL => "armbsameol",
            Self::LegFront => "legf",
            Self::ArmFront => "armf",
            Self::Head => "head",
            Self::HairFront => "hairf",
            Self::EyeOverHair => "eyeoverhair",
            Self::HeadFront => "headf",
            Self::TorsoFront => "torsof",
        }
    }
}

impl fmt::Display for BodyPartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.asset_name())
    }
}

/// Source character templates, each with its own native pixel space.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Character {
    /// Calibration template.
    Test1,
    /// Calibration template.
    Test2,
    /// Bekzii.
    Bekzii,
    /// Austrol.
    Austrol,
    /// Herman.
    Herman,
    /// June.
    June,
    /// Boomhauer.
    Boomhauer,
    /// Hazel.
    Hazel,
    /// Moth.
    Moth,
    /// Heather.
    Heather,
    /// Leeby.
    Leeby,
    /// Cate.
    Cate,
    /// Sherm.
    Sherm,
    /// Sean.
    Sean,
    /// Violet.
    Violet,
    /// Boots.
    Boots,
    /// Ollie.
    Ollie,
    /// Kiwi.
    Kiwi,
    /// Ware.
    Ware,
    /// Iron.
    Iron,
    /// Soda.
    Soda,
    /// Roxy.
    Roxy,
    /// Justo.
    Justo,
    /// Ash.
    Ash,
    /// Rac.
    Rac,
    /// Brick.
    Brick,
}

impl Character {
    /// Number of registered templates, including the two calibration templates.
    pub const COUNT: usize = 26;

    /// All templates in registry order.
    pub const ALL: [Character; Self::COUNT] = [
        Self::Test1,
        Self::Test2,
        Self::Bekzii,
        Self::Austrol,
        Self::Herman,
        Self::June,
        Self::Boomhauer,
        Self::Hazel,
        Self::Moth,
        Self::Heather,
        Self::Leeby,
        Self::Cate,
        Self::Sherm,
        Self::Sean,
        Self::Violet,
        Self::Boots,
        Self::Ollie,
        Self::Kiwi,
        Self::Ware,
        Self::Iron,
        Self::Soda,
        Self::Roxy,
        Self::Justo,
        Self::Ash,
        Self::Rac,
        Self::Brick,
    ];

    /// Registry ordinal.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Templates with shipped artwork (everything after the calibration templates).
    pub fn selectable() -> &'static [Character] {
        &Self::ALL[Self::Bekzii.index()..]
    }

    /// Whether the template has shipped artwork.
    pub fn is_selectable(self) -> bool {
        self >= Self::Bekzii
    }

    /// Short name used in artwork file names.
    pub fn asset_name(self) -> &'static str {
        match self {
            Self::Test1 => "test1",
            Self::Test2 => "test2",
            Self::Bekzii => "bek",
            Self::Austrol => "austrol",
            Self::Herman => "herman",
            Self::June => "june",
            Self::Boomhauer => "boomhauer",
            Self::Hazel => "hazel",
            Self::Moth => "moth",
            Self::Heather => "heather",
            Self::Leeby => "leeby",
            Self::Cate => "snip",
            Self::Sherm => "sherm",
            Self::Sean => "sean",
            Self::Violet => "violet",
            Self::Boots => "boots",
            Self::Ollie => "ollie",
            Self::Kiwi => "kiwi",
            Self::Ware => "ware",
            Self::Iron => "iron",
            Self::Soda => "soda",
            Self::Roxy => "roxy",
            Self::Justo => "justo",
            Self::Ash => "ash",
            Self::Rac => "rac",
            Self::Brick => "brick",
        }
    }

    /// Lower-case display name (the serde name).
    pub fn display_name(self) -> String {
        format!("{self:?}").to_ascii_lowercase()
    }
}

impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name())
    }
}

impl FromStr for Character {
    type Err = BrenError;

    /// Accepts either the display name (`"cate"`) or the artwork name (`"snip"`), any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.display_name() == needle || c.asset_name() == needle)
            .ok_or_else(|| BrenError::validation(format!("unknown character '{s}'")))
    }
}

/// Named skeletal anchors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttachPoint {
    /// Left top of the front leg.
    LegFront,
    /// Right top of the back leg.
    LegBack,
    /// Shoulder of the front arm.
    ArmFront,
    /// Shoulder of the back arm.
    ArmBack,
    /// Neck point of the head.
    Head,
    /// Center of the torso, used to center the whole figure.
    Torso,
    /// Top of the hair.
    Hair,
    /// Bottom of the eyes, used by eye-replacing hair picks.
    Eyes,
    /// Synthetic anchor stretching a tail from `LegFront` to `LegBack`; has no table entry.
    GhostTail,
}

impl AttachPoint {
    /// Number of anchors backed by per-character table data.
    pub const TABLE_COUNT: usize = 8;

    /// Anchors backed by per-character table data, in table order.
    pub const TABLE: [AttachPoint; Self::TABLE_COUNT] = [
        Self::LegFront,
        Self::LegBack,
        Self::ArmFront,
        Self::ArmBack,
        Self::Head,
        Self::Torso,
        Self::Hair,
        Self::Eyes,
    ];

    /// Column in the per-character attach table, `None` for synthetic anchors.
    pub fn table_slot(self) -> Option<usize> {
        match self {
            Self::GhostTail => None,
            other => Some(other as usize),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/registry/ids.rs"]
mod tests;
