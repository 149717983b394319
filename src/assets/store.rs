use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::assets::decode::decode_part_image;
use crate::assets::image::{InMemoryStore, PartImage, PartImageSet};
use crate::foundation::error::{BrenError, BrenResult};
use crate::registry::ids::{BodyPartType, Character};
use crate::registry::tables::Registry;

/// Sub-directory of the asset root holding character artwork.
pub const CHARACTER_DIR: &str = "char";

/// File name of a part image: `{part}[_noface]_{character}.png`.
pub fn part_file_name(part: BodyPartType, character: Character, no_face: bool) -> String {
    let variant = if no_face { "_noface" } else { "" };
    format!(
        "{}{variant}_{}.png",
        part.asset_name(),
        character.asset_name()
    )
}

/// Loads part artwork from an asset directory laid out as `<root>/char/<file>`.
#[derive(Clone, Debug)]
pub struct DirectoryStore {
    root: PathBuf,
}

impl DirectoryStore {
    /// Store rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Asset root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Full path of a part image.
    pub fn part_path(&self, part: BodyPartType, character: Character, no_face: bool) -> PathBuf {
        self.root
            .join(CHARACTER_DIR)
            .join(part_file_name(part, character, no_face))
    }

    /// Preload every existing part of every selectable character.
    pub fn load(&self) -> BrenResult<InMemoryStore> {
        self.load_characters(Character::selectable())
    }

    /// Preload every existing part of `characters`.
    ///
    /// Files that are not on disk are skipped; files that fail to decode are errors.
    /// Head parts additionally pick up their face-less variant when one exists.
    #[tracing::instrument(skip(self, characters), fields(root = %self.root.display()))]
    pub fn load_characters(&self, characters: &[Character]) -> BrenResult<InMemoryStore> {
        if !self.root.is_dir() {
            return Err(BrenError::asset(format!(
                "asset root '{}' is not a directory",
                self.root.display()
            )));
        }

        let mut store = InMemoryStore::new();
        for &character in characters {
            for part in BodyPartType::ALL {
                if !Registry::part_exists(character, part) {
                    continue;
                }
                let Some(main) = self.read_optional(part, character, false)? else {
                    tracing::debug!(%part, %character, "part artwork missing, skipping");
                    continue;
                };
                let mut set = PartImageSet::new(main);
                if part == BodyPartType::Head
                    && let Some(no_face) = self.read_optional(part, character, true)?
                {
                    set = set.with_no_face(no_face);
                }
                store.insert(part, character, set);
            }
        }
        tracing::debug!(loaded = store.len(), "part artwork loaded");
        Ok(store)
    }

    fn read_optional(
        &self,
        part: BodyPartType,
        character: Character,
        no_face: bool,
    ) -> BrenResult<Option<PartImage>> {
        let path = self.part_path(part, character, no_face);
        if !path.is_file() {
            return Ok(None);
        }
        let bytes = std::fs::read(&path)
            .with_context(|| format!("read part image '{}'", path.display()))?;
        let img = decode_part_image(&bytes).map_err(|e| {
            BrenError::asset(format!("decode part image '{}': {e}", path.display()))
        })?;
        Ok(Some(img))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/store.rs"]
mod tests;
