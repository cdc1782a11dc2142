//! Per-title step scripts.
//!
//! Each title's veto is a fixed table of steps. The acting roster, the legal
//! action and the pool a step draws from are all looked up by step index, so
//! rewinding the index is enough to rewind the turn order.

use crate::model::{GameTitle, Side, SubMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ActionKind {
    Ban,
    Pick,
    Side,
}

impl core::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Ban => f.write_str("ban"),
            Self::Pick => f.write_str("pick"),
            Self::Side => f.write_str("side"),
        }
    }
}

/// Roster position assigned before the veto starts (usually from the coin flip).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Roster {
    A,
    B,
}

impl Roster {
    pub fn other(&self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }
}

impl core::fmt::Display for Roster {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::A => f.write_str("Roster A"),
            Self::B => f.write_str("Roster B"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub kind: ActionKind,
    pub mode: SubMode,
    pub actor: Roster,
    /// Zero-based result slot written by picks and side choices.
    pub slot: Option<usize>,
    pub prompt: &'static str,
}

const fn ban(mode: SubMode, actor: Roster, prompt: &'static str) -> Step {
    Step {
        kind: ActionKind::Ban,
        mode,
        actor,
        slot: None,
        prompt,
    }
}

const fn pick(mode: SubMode, actor: Roster, slot: usize, prompt: &'static str) -> Step {
    Step {
        kind: ActionKind::Pick,
        mode,
        actor,
        slot: Some(slot),
        prompt,
    }
}

const fn side(mode: SubMode, actor: Roster, slot: usize, prompt: &'static str) -> Step {
    Step {
        kind: ActionKind::Side,
        mode,
        actor,
        slot: Some(slot),
        prompt,
    }
}

use Roster::{A, B};
use SubMode::{Control, Hardpoint, SearchAndDestroy, Standard};

pub static CALL_OF_DUTY_SCRIPT: [Step; 15] = [
    ban(Hardpoint, A, "HP: Roster A ban"),
    ban(Hardpoint, B, "HP: Roster B ban"),
    pick(Hardpoint, A, 0, "HP: Roster A pick Map1"),
    side(Hardpoint, B, 0, "HP: Roster B choose side M1"),
    pick(Hardpoint, B, 3, "HP: Roster B pick Map4"),
    side(Hardpoint, A, 3, "HP: Roster A choose side M4"),
    ban(SearchAndDestroy, B, "SnD: Roster B ban"),
    ban(SearchAndDestroy, A, "SnD: Roster A ban"),
    pick(SearchAndDestroy, B, 1, "SnD: Roster B pick Map2"),
    side(SearchAndDestroy, A, 1, "SnD: Roster A side M2"),
    pick(SearchAndDestroy, A, 4, "SnD: Roster A pick Map5"),
    side(SearchAndDestroy, B, 4, "SnD: Roster B side M5"),
    ban(Control, A, "Control: Roster A ban"),
    pick(Control, B, 2, "Control: Roster B pick Map3"),
    side(Control, A, 2, "Control: Roster A side M3"),
];

pub static VALORANT_SCRIPT: [Step; 10] = [
    ban(Standard, A, "Team A ban map"),
    ban(Standard, B, "Team B ban map"),
    pick(Standard, A, 0, "Team A pick map 1"),
    side(Standard, B, 0, "Team B pick side for map 1"),
    pick(Standard, B, 1, "Team B pick map 2"),
    side(Standard, A, 1, "Team A pick side for map 2"),
    ban(Standard, A, "Team A ban map"),
    ban(Standard, B, "Team B ban map"),
    pick(Standard, A, 2, "Last map is map 3"),
    side(Standard, A, 2, "Team A pick side for map 3"),
];

pub const DONE_PROMPT: &str = "Done";

impl GameTitle {
    pub fn script(&self) -> &'static [Step] {
        match self {
            Self::CallOfDuty => &CALL_OF_DUTY_SCRIPT,
            Self::Valorant => &VALORANT_SCRIPT,
        }
    }

    /// Number of map slots a full veto fills.
    pub fn slot_count(&self) -> usize {
        match self {
            Self::CallOfDuty => 5,
            Self::Valorant => 3,
        }
    }

    pub fn default_best_of(&self) -> u32 {
        match self {
            Self::CallOfDuty => 5,
            Self::Valorant => 3,
        }
    }

    pub fn side_options(&self) -> [Side; 2] {
        match self {
            Self::CallOfDuty => [Side::Team1, Side::Team2],
            Self::Valorant => [Side::Attack, Side::Defense],
        }
    }

    /// Roster acting at `index`, or `None` outside the script.
    pub fn actor_at(&self, index: usize) -> Option<Roster> {
        self.script().get(index).map(|step| step.actor)
    }

    /// Sides of roster A and roster B after `chooser` picked `chosen`.
    ///
    /// `Team 1`/`Team 2` are lobby slots listed in roster order, so the chosen
    /// slot always lands on roster A. Attack/Defense go to the chooser.
    pub fn assign_sides(&self, chosen: Side, chooser: Roster) -> (Side, Side) {
        match (self, chooser) {
            (Self::CallOfDuty, _) => (chosen, chosen.opposite()),
            (Self::Valorant, Roster::A) => (chosen, chosen.opposite()),
            (Self::Valorant, Roster::B) => (chosen.opposite(), chosen),
        }
    }
}
