use std::collections::BTreeMap;

use crate::error::VetoError;
use crate::model::{GameTitle, SubMode};

pub static HARDPOINT_MAPS: &[&str] = &["Hacienda", "Red Card", "Rewind", "Skyline", "Vault"];
pub static SEARCH_AND_DESTROY_MAPS: &[&str] =
    &["Dealership", "Hacienda", "Protocol", "Red Card", "Rewind"];
pub static CONTROL_MAPS: &[&str] = &["Hacienda", "Protocol", "Vault"];
pub static VALORANT_MAPS: &[&str] = &[
    "Abyss", "Ascent", "Bind", "Corrode", "Haven", "Lotus", "Sunset",
];

/// The candidate maps of a title, grouped by sub-mode.
///
/// Holds the canonical contents alongside the live remainder. Entries are
/// unique per sub-mode.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MapPool {
    canonical: BTreeMap<SubMode, Vec<String>>,
    remaining: BTreeMap<SubMode, Vec<String>>,
}

impl MapPool {
    pub fn for_title(title: GameTitle) -> Self {
        let lists: &[(SubMode, &[&str])] = match title {
            GameTitle::CallOfDuty => &[
                (SubMode::Hardpoint, HARDPOINT_MAPS),
                (SubMode::SearchAndDestroy, SEARCH_AND_DESTROY_MAPS),
                (SubMode::Control, CONTROL_MAPS),
            ],
            GameTitle::Valorant => &[(SubMode::Standard, VALORANT_MAPS)],
        };

        let canonical: BTreeMap<SubMode, Vec<String>> = lists
            .iter()
            .map(|(mode, maps)| (*mode, maps.iter().map(|m| (*m).to_owned()).collect()))
            .collect();

        Self {
            remaining: canonical.clone(),
            canonical,
        }
    }

    /// Restores every sub-mode to its canonical contents and order.
    pub fn reset(&mut self) {
        self.remaining = self.canonical.clone();
    }

    pub fn modes(&self) -> impl Iterator<Item = SubMode> + '_ {
        self.canonical.keys().copied()
    }

    pub fn canonical(&self, mode: SubMode) -> &[String] {
        self.canonical.get(&mode).map(|v| v.as_slice()).unwrap_or(&[])
    }

    pub fn remaining(&self, mode: SubMode) -> &[String] {
        self.remaining.get(&mode).map(|v| v.as_slice()).unwrap_or(&[])
    }

    pub fn contains(&self, mode: SubMode, map: &str) -> bool {
        self.remaining(mode).iter().any(|m| m == map)
    }

    pub fn total_remaining(&self) -> usize {
        self.remaining.values().map(|maps| maps.len()).sum()
    }

    pub fn remove(&mut self, mode: SubMode, map: &str) -> Result<(), VetoError> {
        let not_found = || VetoError::NotFound {
            mode,
            map: map.to_owned(),
        };

        let maps = self.remaining.get_mut(&mode).ok_or_else(not_found)?;
        let position = maps.iter().position(|m| m == map).ok_or_else(not_found)?;
        maps.remove(position);

        Ok(())
    }

    /// Puts a map back at the end of its sub-mode's list. Its previous
    /// position is not restored.
    pub fn add(&mut self, mode: SubMode, map: &str) -> Result<(), VetoError> {
        let maps = self.remaining.get_mut(&mode).ok_or_else(|| VetoError::NotFound {
            mode,
            map: map.to_owned(),
        })?;

        if maps.iter().any(|m| m == map) {
            return Err(VetoError::InvalidState(format!(
                "{map:?} is already in the {mode} pool"
            )));
        }

        maps.push(map.to_owned());
        Ok(())
    }
}
