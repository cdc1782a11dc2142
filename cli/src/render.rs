//! Converts engine state into the shared `common` types and into text.

use common::veto_session::{PoolSnapshot, SlotSnapshot, VetoSnapshot};
use common::{CoinFlipSummary, MatchMap, MatchSummary};
use veto::{CoinFlip, GameTitle, Match, VetoEngine};

pub fn snapshot(engine: &VetoEngine) -> VetoSnapshot {
    let pool = engine.pool();

    VetoSnapshot {
        title: engine.title().to_string(),
        step: engine.step(),
        prompt: engine.current_prompt().to_owned(),
        actor: engine.current_team().map(|team| team.name.clone()),
        complete: engine.is_complete(),
        pools: pool
            .modes()
            .map(|mode| PoolSnapshot {
                mode: mode.to_string(),
                remaining: pool.remaining(mode).to_vec(),
            })
            .collect(),
        slots: engine
            .slots()
            .iter()
            .enumerate()
            .map(|(index, slot)| SlotSnapshot {
                number: index + 1,
                map: slot.map.as_ref().map(|m| m.map.clone()),
                mode: slot.map.as_ref().map(|m| m.mode.to_string()),
                sides: engine.sides_display(index),
            })
            .collect(),
        bans: engine.bans().map(|b| b.to_owned()).collect(),
    }
}

pub fn coin_flip(flip: &CoinFlip) -> CoinFlipSummary {
    CoinFlipSummary {
        winner: flip.winner.name.clone(),
        loser: flip.loser.name.clone(),
        winner_side: flip.winner_side.to_string(),
        loser_side: flip.loser_side.to_string(),
    }
}

pub fn summary(engine: &VetoEngine, built: &Match, flip: Option<&CoinFlip>) -> MatchSummary {
    let maps = match built {
        Match::CallOfDuty(m) => m
            .rotation()
            .iter()
            .enumerate()
            .map(|(index, mm)| MatchMap {
                number: index + 1,
                map: mm.map.clone(),
                mode: Some(mm.mode.to_string()),
                sides: engine.sides_display(index),
            })
            .collect(),
        Match::Valorant(m) => m
            .maps()
            .iter()
            .enumerate()
            .map(|(index, map)| MatchMap {
                number: index + 1,
                map: map.clone(),
                mode: None,
                sides: engine.sides_display(index),
            })
            .collect(),
    };

    MatchSummary {
        id: built.id().to_string(),
        title: built.title().to_string(),
        scheduled_time: built.scheduled_time().to_rfc3339(),
        best_of: built.best_of(),
        teams: built.teams().iter().map(|t| t.name.clone()).collect(),
        maps,
        bans: engine.bans().map(|b| b.to_owned()).collect(),
        coin_flip: flip.map(coin_flip),
    }
}

/// One line describing the pending step, e.g. `[Alpha] HP: Roster A ban (Hacienda, Vault)`.
pub fn prompt_line(engine: &VetoEngine) -> String {
    let snapshot = snapshot(engine);
    let legal = engine.legal_actions();

    let actor = snapshot.actor.unwrap_or_default();
    if legal.candidates.is_empty() {
        return format!("[{}] {}", actor, snapshot.prompt);
    }

    format!("[{}] {} ({})", actor, snapshot.prompt, legal.candidates.join(", "))
}

pub fn summary_lines(summary: &MatchSummary) -> Vec<String> {
    let mut lines = Vec::with_capacity(summary.maps.len() * 2 + 3);

    lines.push(format!(
        "{} ({}, best of {}) scheduled for {}",
        summary.teams.join(" vs "),
        summary.title,
        summary.best_of,
        summary.scheduled_time
    ));

    for map in summary.maps.iter() {
        match &map.mode {
            Some(mode) => lines.push(format!("Map {}: {} ({})", map.number, map.map, mode)),
            None => lines.push(format!("Map {}: {}", map.number, map.map)),
        }
        if let Some(sides) = &map.sides {
            lines.push(format!("  {}", sides));
        }
    }

    if !summary.bans.is_empty() {
        lines.push(format!("Bans: {}", summary.bans.join(", ")));
    }

    lines
}

/// Map label used when reporting an automatic pick.
pub fn auto_pick_line(title: GameTitle, map: &veto::MapMode) -> String {
    match title {
        GameTitle::CallOfDuty => format!("Only {} was left, picked automatically", map),
        GameTitle::Valorant => format!("Only {} was left, picked automatically", map.map),
    }
}
