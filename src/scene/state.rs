//! The five body-part picks and the per-tick animation state that travels with them.

use std::path::Path;

use anyhow::Context;

use crate::animation::motion::{DanceSway, FadeIn, IdleFloat, IntensityEvent};
use crate::foundation::error::{BrenError, BrenResult};
use crate::foundation::rng::Rng64;
use crate::registry::ids::Character;
use crate::registry::tables::INTENSITY_CHARACTER;

/// Which character each body region comes from.
///
/// Head and torso are mandatory; `None` hides hair, arms or legs entirely.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Selection {
    /// Head pick.
    pub head: Character,
    /// Hair pick.
    pub hair: Option<Character>,
    /// Torso pick; also selects the depth order.
    pub torso: Character,
    /// Arms pick.
    pub arms: Option<Character>,
    /// Legs pick.
    pub legs: Option<Character>,
}

impl Default for Selection {
    fn default() -> Self {
        Self::uniform(Character::Heather)
    }
}

impl Selection {
    /// Every region from `character`.
    pub fn uniform(character: Character) -> Self {
        Self {
            head: character,
            hair: Some(character),
            torso: character,
            arms: Some(character),
            legs: Some(character),
        }
    }

    /// Whether all five regions are picked and come from `character`.
    pub fn is_all(&self, character: Character) -> bool {
        self.head == character
            && self.torso == character
            && self.hair == Some(character)
            && self.arms == Some(character)
            && self.legs == Some(character)
    }

    /// Independent uniform picks among the selectable characters.
    pub fn randomized(rng: &mut Rng64) -> Self {
        let pool = Character::selectable();
        let mut pick = || pool[rng.next_index(pool.len())];
        Self {
            head: pick(),
            hair: Some(pick()),
            torso: pick(),
            arms: Some(pick()),
            legs: Some(pick()),
        }
    }
}

/// Plain randomizes needed before the jackpot can hit.
const JACKPOT_WARMUP: u32 = 10;
/// Jackpot fires when a roll in `0..JACKPOT_ODDS` lands on [`JACKPOT_FACE`].
const JACKPOT_ODDS: usize = 41;
const JACKPOT_FACE: usize = 5;
/// Randomizes swallowed after a repeat jackpot, weighted by repetition.
const JACKPOT_BREAKS: [u32; 21] = [0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 4];

/// What a call to [`SceneState::randomize`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RandomizeOutcome {
    /// Swallowed by a jackpot cooldown; the picks are unchanged.
    Skipped,
    /// Fresh uniform picks.
    Picked,
    /// All picks set to the intensity character with the event at full strength.
    Jackpot,
}

/// Counters behind [`SceneState::randomize`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Randomizer {
    hits: u32,
    breaks: u32,
    jackpot_seen: bool,
}

impl Randomizer {
    /// Randomizes that changed the picks so far.
    pub fn hits(&self) -> u32 {
        self.hits
    }

    /// Upcoming randomizes that will be skipped.
    pub fn breaks_remaining(&self) -> u32 {
        self.breaks
    }
}

/// Everything that changes between ticks: picks, dance toggle and animation phases.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SceneState {
    /// Current picks.
    pub selection: Selection,
    /// Dance toggle.
    pub dancing: bool,
    /// All-same-character event state.
    pub intensity: IntensityEvent,
    /// Intro fade.
    pub fade_in: FadeIn,
    /// Dance phase.
    pub dance: DanceSway,
    /// Idle float phase.
    pub float: IdleFloat,
    /// Randomize counters.
    pub randomizer: Randomizer,
}

impl SceneState {
    /// Scene with `selection` and the intro fade already finished.
    pub fn settled(selection: Selection) -> Self {
        let mut scene = Self {
            fade_in: FadeIn::done(),
            ..Self::default()
        };
        scene.set_selection(selection);
        scene
    }

    /// Replace the picks and re-evaluate the intensity event.
    pub fn set_selection(&mut self, selection: Selection) {
        self.selection = selection;
        self.intensity.on_selection_changed(&self.selection);
    }

    /// Replace the picks with a seeded random selection.
    ///
    /// After ten plain picks, one roll in 41 picks the intensity character for every slot and
    /// starts its event at full strength. A repeat jackpot may swallow the next few
    /// randomizes.
    pub fn randomize(&mut self, rng: &mut Rng64) -> RandomizeOutcome {
        let r = &mut self.randomizer;
        if r.breaks > 0 {
            r.breaks -= 1;
            return RandomizeOutcome::Skipped;
        }

        if r.hits > JACKPOT_WARMUP && rng.next_index(JACKPOT_ODDS) == JACKPOT_FACE {
            r.breaks = if r.jackpot_seen {
                JACKPOT_BREAKS[rng.next_index(JACKPOT_BREAKS.len())]
            } else {
                0
            };
            r.jackpot_seen = true;
            r.hits += 1;
            self.selection = Selection::uniform(INTENSITY_CHARACTER);
            self.intensity = IntensityEvent::full();
            tracing::debug!(breaks = self.randomizer.breaks, "randomize jackpot");
            return RandomizeOutcome::Jackpot;
        }

        r.hits += 1;
        self.set_selection(Selection::randomized(rng));
        RandomizeOutcome::Picked
    }

    /// Parse a scene from JSON. Missing fields take their defaults.
    pub fn from_json_str(s: &str) -> BrenResult<Self> {
        serde_json::from_str(s).map_err(|e| BrenError::validation(format!("scene json: {e}")))
    }

    /// Read and parse a JSON scene file.
    pub fn from_path(path: impl AsRef<Path>) -> BrenResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read scene file '{}'", path.display()))?;
        Self::from_json_str(&text)
    }

    /// Serialize to pretty JSON.
    pub fn to_json_pretty(&self) -> BrenResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| BrenError::Other(anyhow::Error::new(e).context("serialize scene")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/state.rs"]
mod tests;
