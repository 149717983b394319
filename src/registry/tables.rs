//! Static per-character skeleton data: attach points, scale factors and part availability.
//!
//! Every table is a fixed-size array indexed by enum ordinal, so lookups are total by
//! construction. [`Registry::validate`] still checks the numeric contents once at startup.

use crate::foundation::core::Vec2;
use crate::foundation::error::{BrenError, BrenResult};
use crate::registry::depth::DepthOrder;
use crate::registry::ids::{AttachPoint, BodyPartType, Character};

/// Hair pick that replaces the eyes: attaches at [`AttachPoint::Eyes`], forces no-face heads
/// and hides [`BodyPartType::EyeOverHair`].
pub const NO_FACE_HAIR: Character = Character::Herman;

/// Parent whose hair artwork is already drawn at full size, so the hair local scale is skipped.
pub const OVERSIZED_HAIR_HEAD: Character = Character::Boomhauer;

/// Leg pick exempt from the bottom-overflow fit.
pub const UNFIT_LEGS: Character = Character::Boomhauer;

/// Character whose full selection triggers the intensity event.
pub const INTENSITY_CHARACTER: Character = Character::Boomhauer;

/// Native-pixel anchor plus the local scale applied when attaching through it.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AttachPointInfo {
    /// Anchor position in the character's native image pixels.
    pub position: Vec2,
    /// Extra uniform scale for artwork attached at this point.
    pub local_scale: f64,
}

const fn p(x: f64, y: f64) -> AttachPointInfo {
    ps(x, y, 1.0)
}

const fn ps(x: f64, y: f64, local_scale: f64) -> AttachPointInfo {
    AttachPointInfo {
        position: Vec2::new(x, y),
        local_scale,
    }
}

// Columns: LegFront, LegBack, ArmFront, ArmBack, Head, Torso, Hair, Eyes.
#[rustfmt::skip]
static ATTACH_POINTS: [[AttachPointInfo; AttachPoint::TABLE_COUNT]; Character::COUNT] = [
    // Test1
    [p(145.0, 303.0), p(260.0, 301.0), p(161.0, 182.0), p(228.0, 190.0), p(204.0, 163.0), p(203.0, 244.0), p(203.0, 34.0), p(212.0, 138.0)],
    // Test2
    [p(70.0, 183.0), p(144.0, 181.0), p(81.0, 138.0), p(127.0, 146.0), p(104.0, 122.0), p(109.0, 160.0), p(105.0, 22.0), p(110.0, 105.0)],
    // Bekzii
    [p(94.0, 281.0), p(206.0, 285.0), p(111.0, 201.0), p(184.0, 195.0), p(153.0, 179.0), p(160.0, 200.0), p(148.0, 53.0), p(162.0, 145.0)],
    // Austrol
    [p(169.0, 357.0), p(281.0, 361.0), p(186.0, 277.0), p(259.0, 271.0), p(228.0, 255.0), p(235.0, 276.0), p(223.0, 129.0), p(231.0, 230.0)],
    // Herman
    [p(123.0, 253.0), p(215.0, 251.0), p(139.0, 151.0), p(194.0, 151.0), p(177.0, 129.0), p(170.0, 211.0), p(174.0, 31.0), p(177.0, 121.0)],
    // June
    [p(177.0, 452.0), p(276.0, 450.0), p(192.0, 264.0), p(255.0, 262.0), p(225.0, 241.0), p(218.0, 347.0), p(225.0, 88.0), p(250.0, 215.0)],
    // Boomhauer
    [p(163.0, 213.0), p(224.0, 215.0), p(171.0, 108.0), p(224.0, 106.0), p(198.0, 92.0), p(193.0, 155.0), ps(198.0, 17.0, 0.5), ps(205.0, 65.0, 0.7)],
    // Hazel
    [ps(116.0, 337.0, 0.7), ps(209.0, 338.0, 0.7), p(136.0, 278.0), p(182.0, 277.0), p(163.0, 267.0), p(160.0, 233.0), ps(151.0, 59.0, 1.2), ps(175.0, 220.0, 1.5)],
    // Moth
    [ps(130.0, 287.0, 1.05), ps(255.0, 290.0, 1.05), ps(152.0, 187.0, 0.9), ps(228.0, 190.0, 0.9), ps(190.0, 164.0, 0.9), ps(194.0, 233.0, 0.9), ps(188.0, 73.0, 0.9), ps(196.0, 148.0, 0.9)],
    // Heather
    [p(214.0, 361.0), p(332.0, 367.0), ps(234.0, 250.0, 0.9), ps(290.0, 255.0, 0.9), ps(266.0, 223.0, 0.7), p(265.0, 363.0), ps(259.0, 90.0, 0.6), ps(281.0, 167.0, 0.7)],
    // Leeby
    [ps(242.0, 366.0, 1.33), ps(360.0, 366.0, 1.33), p(262.0, 221.0), p(333.0, 224.0), p(301.0, 186.0), p(315.0, 351.0), ps(303.0, 102.0, 0.85), p(308.0, 171.0)],
    // Cate
    [ps(237.0, 356.0, 1.33), ps(362.0, 363.0, 1.33), ps(256.0, 197.0, 1.33), ps(320.0, 197.0, 1.33), ps(296.0, 151.0, 1.1), p(300.0, 343.0), p(292.0, 22.0), p(306.0, 110.0)],
    // Sherm
    [p(200.0, 421.0), p(365.0, 418.0), p(235.0, 264.0), p(364.0, 260.0), ps(316.0, 206.0, 0.85), p(298.0, 356.0), ps(309.0, 45.0, 0.8), p(320.0, 176.0)],
    // Sean
    [p(180.0, 528.0), p(294.0, 525.0), p(176.0, 344.0), p(266.0, 344.0), p(243.0, 311.0), p(229.0, 345.0), ps(246.0, 123.0, 1.02), p(248.0, 267.0)],
    // Violet
    [ps(147.0, 345.0, 1.42), ps(274.0, 343.0, 1.42), p(164.0, 176.0), p(261.0, 177.0), ps(212.0, 129.0, 0.75), p(214.0, 349.0), ps(210.0, 63.0, 0.65), ps(217.0, 113.0, 0.75)],
    // Boots
    [ps(174.0, 412.0, 1.2), ps(332.0, 413.0, 1.2), p(200.0, 257.0), p(317.0, 254.0), ps(263.0, 198.0, 0.9), p(250.0, 336.0), ps(253.0, 60.0, 0.9), ps(264.0, 170.0, 1.05)],
    // Ollie
    [ps(172.0, 376.0, 0.95), ps(253.0, 377.0, 0.95), p(176.0, 247.0), p(249.0, 246.0), ps(232.0, 217.0, 0.9), p(214.0, 346.0), ps(238.0, 118.0, 0.8), p(249.0, 195.0)],
    // Kiwi
    [ps(160.0, 397.0, 1.25), ps(295.0, 397.0, 1.25), p(180.0, 208.0), p(277.0, 207.0), p(230.0, 161.0), p(227.0, 333.0), p(227.0, 45.0), ps(234.0, 137.0, 1.15)],
    // Ware
    [p(340.0, 436.0), p(477.0, 436.0), p(306.0, 257.0), p(408.0, 256.0), ps(352.0, 240.0, 1.1), p(364.0, 347.0), ps(345.0, 56.0, 1.2), ps(360.0, 203.0, 1.4)],
    // Iron
    [ps(179.0, 337.0, 1.2), ps(271.0, 339.0, 1.2), p(157.0, 199.0), p(276.0, 194.0), ps(210.0, 157.0, 0.8), p(221.0, 320.0), ps(214.0, 58.0, 0.85), p(227.0, 144.0)],
    // Soda
    [ps(167.0, 229.0, 1.2), ps(298.0, 228.0, 1.2), ps(193.0, 138.0, 1.2), ps(266.0, 136.0, 1.2), p(232.0, 120.0), p(232.0, 175.0), p(227.0, 40.0), ps(230.0, 107.0, 1.15)],
    // Roxy
    [p(170.0, 397.0), p(294.0, 394.0), p(159.0, 244.0), p(246.0, 247.0), p(207.0, 215.0), p(215.0, 350.0), ps(203.0, 93.0, 0.95), ps(209.0, 195.0, 1.1)],
    // Justo
    [ps(282.0, 443.0, 1.6), ps(459.0, 442.0, 1.6), ps(328.0, 318.0, 1.2), ps(425.0, 318.0, 1.2), p(389.0, 282.0), p(371.0, 353.0), p(380.0, 150.0), ps(394.0, 255.0, 1.1)],
    // Ash
    [ps(85.0, 263.0, 1.1), ps(194.0, 260.0, 1.1), ps(99.0, 164.0, 1.1), ps(180.0, 164.0, 1.1), p(147.0, 137.0), p(140.0, 182.0), p(146.0, 24.0), ps(159.0, 117.0, 1.2)],
    // Rac
    [ps(200.0, 328.0, 1.3), ps(381.0, 317.0, 1.3), p(200.0, 203.0), p(330.0, 198.0), p(273.0, 167.0), p(283.0, 353.0), p(265.0, 35.0), ps(283.0, 137.0, 1.1)],
    // Brick
    [ps(352.0, 346.0, 1.6), ps(477.0, 345.0, 1.6), ps(375.0, 263.0, 1.2), ps(454.0, 263.0, 1.2), p(415.0, 225.0), p(415.0, 351.0), p(402.0, 95.0), ps(421.0, 203.0, 1.1)],
];

static SCALE_FACTORS: [f64; Character::COUNT] = [
    1.0,   // Test1
    0.783, // Test2
    0.91,  // Bekzii
    0.91,  // Austrol
    0.76,  // Herman
    1.18,  // June
    0.6,   // Boomhauer
    1.2,   // Hazel
    0.9,   // Moth
    1.33,  // Heather
    0.75,  // Leeby
    0.89,  // Cate
    1.36,  // Sherm
    1.24,  // Sean
    0.76,  // Violet
    1.12,  // Boots
    0.94,  // Ollie
    0.82,  // Kiwi
    1.19,  // Ware
    0.93,  // Iron
    0.63,  // Soda
    1.01,  // Roxy
    0.94,  // Justo
    0.79,  // Ash
    1.02,  // Rac
    0.92,  // Brick
];

/// Decode a `'0'`/`'1'` string in [`BodyPartType::ALL`] order.
const fn bits(s: &str) -> [bool; BodyPartType::COUNT] {
    let bytes = s.as_bytes();
    assert!(bytes.len() == BodyPartType::COUNT);
    let mut out = [false; BodyPartType::COUNT];
    let mut i = 0;
    while i < BodyPartType::COUNT {
        out[i] = bytes[i] == b'1';
        i += 1;
    }
    out
}

static PART_EXISTS: [[bool; BodyPartType::COUNT]; Character::COUNT] = [
    bits("01001100101111010"), // Test1
    bits("11001100101111000"), // Test2
    bits("11011100101111000"), // Bekzii
    bits("11011100101111000"), // Austrol
    bits("00001100101111000"), // Herman
    bits("11011100101111000"), // June
    bits("00001100101111000"), // Boomhauer
    bits("01001010110111000"), // Hazel
    bits("00011100101111001"), // Moth
    bits("11011100101111000"), // Heather
    bits("01011100101111000"), // Leeby
    bits("11011101101111000"), // Cate
    bits("10011100101111000"), // Sherm
    bits("10011100101111000"), // Sean
    bits("11011100101111001"), // Violet
    bits("11011100101111000"), // Boots
    bits("10001100101111000"), // Ollie
    bits("11011100101111000"), // Kiwi
    bits("01011100101110000"), // Ware
    bits("00100100101111000"), // Iron
    bits("00001100101111000"), // Soda
    bits("11011100101111100"), // Roxy
    bits("11011100101111000"), // Justo
    bits("11001100101111000"), // Ash
    bits("11111100101111010"), // Rac
    bits("11011100101111000"), // Brick
];

/// Read-only view over the built-in character tables.
#[derive(Clone, Copy, Debug, Default)]
pub struct Registry;

impl Registry {
    /// Attach-point data for `character`.
    ///
    /// [`AttachPoint::GhostTail`] is synthetic and has no table entry; asking for it is an error.
    pub fn attach_info(character: Character, point: AttachPoint) -> BrenResult<AttachPointInfo> {
        let slot = point.table_slot().ok_or_else(|| {
            BrenError::registry(format!(
                "attach point {point:?} has no table entry (character {character})"
            ))
        })?;
        Ok(ATTACH_POINTS[character.index()][slot])
    }

    /// Native-to-normalized scale factor of `character`.
    pub fn scale_factor(character: Character) -> f64 {
        SCALE_FACTORS[character.index()]
    }

    /// Whether `character` ships artwork for `part`.
    pub fn part_exists(character: Character, part: BodyPartType) -> bool {
        PART_EXISTS[character.index()][part.index()]
    }

    /// Check the numeric contents of every table.
    pub fn validate() -> BrenResult<()> {
        for character in Character::ALL {
            let sf = Self::scale_factor(character);
            if !sf.is_finite() || sf <= 0.0 {
                return Err(BrenError::registry(format!(
                    "scale factor of {character} must be finite and > 0, got {sf}"
                )));
            }

            for point in AttachPoint::TABLE {
                let info = Self::attach_info(character, point)?;
                if !info.position.x.is_finite() || !info.position.y.is_finite() {
                    return Err(BrenError::registry(format!(
                        "attach point {point:?} of {character} is not finite"
                    )));
                }
                if !info.local_scale.is_finite() || info.local_scale <= 0.0 {
                    return Err(BrenError::registry(format!(
                        "local scale of {point:?} on {character} must be finite and > 0"
                    )));
                }
            }

            let legs_front = Self::attach_info(character, AttachPoint::LegFront)?.position.x;
            let legs_back = Self::attach_info(character, AttachPoint::LegBack)?.position.x;
            if legs_back == legs_front {
                return Err(BrenError::registry(format!(
                    "leg attach points of {character} share an x coordinate"
                )));
            }

            for part in [BodyPartType::Torso, BodyPartType::Head] {
                if !Self::part_exists(character, part) {
                    return Err(BrenError::registry(format!(
                        "{character} has no {part} artwork"
                    )));
                }
            }

            DepthOrder::for_character(character).validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/registry/tables.rs"]
mod tests;
