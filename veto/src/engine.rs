//! The veto sequence engine.
//!
//! A [`VetoEngine`] owns one session: the two rosters, the live [`MapPool`],
//! the per-slot results and the append-only action log. Every command either
//! runs to completion or is rejected without touching any of that state.
//!
//! Turn order and legality come from the title's step script (see
//! [`crate::script`]), looked up by the current step index. Undo pops the log
//! and moves the index back to the undone step; nothing is replayed.

use crate::builder::{build_match, Match};
use crate::command::Command;
use crate::error::{BuildError, VetoError};
use crate::model::{GameTitle, MapMode, Side, SubMode, Team};
use crate::pool::MapPool;
use crate::script::{ActionKind, Roster, Step, DONE_PROMPT};

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Subject {
    Map(String),
    Side(Side),
}

impl core::fmt::Display for Subject {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Map(map) => f.write_str(map),
            Self::Side(side) => f.write_str(side.label()),
        }
    }
}

/// One entry of the action log.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Action {
    pub kind: ActionKind,
    pub subject: Subject,
    pub step: usize,
    pub actor: Roster,
    pub team: String,
    /// Set when the engine filled a single-candidate pick by itself.
    pub automatic: bool,
}

/// Outcome for one map of the series.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Slot {
    pub map: Option<MapMode>,
    pub side: Option<Side>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegalActions {
    /// `None` before the start and once the sequence is complete.
    pub kind: Option<ActionKind>,
    pub candidates: Vec<String>,
    /// The map assigned automatically right before the current step, if any.
    pub auto_picked: Option<MapMode>,
}

/// The realized maps in play order, in the shape each title's match expects.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Rotation {
    CallOfDuty(Vec<MapMode>),
    Valorant(Vec<String>),
}

impl Rotation {
    pub fn title(&self) -> GameTitle {
        match self {
            Self::CallOfDuty(_) => GameTitle::CallOfDuty,
            Self::Valorant(_) => GameTitle::Valorant,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::CallOfDuty(r) => r.len(),
            Self::Valorant(m) => m.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone)]
pub struct VetoEngine {
    title: GameTitle,
    rosters: Option<[Team; 2]>,
    step: Option<usize>,
    pool: MapPool,
    slots: Vec<Slot>,
    log: Vec<Action>,
}

impl VetoEngine {
    pub fn new(title: GameTitle) -> Self {
        Self {
            title,
            rosters: None,
            step: None,
            pool: MapPool::for_title(title),
            slots: vec![Slot::default(); title.slot_count()],
            log: Vec::new(),
        }
    }

    /// Starts (or restarts) the sequence with `team_a` as roster A.
    #[tracing::instrument(
        skip_all,
        fields(title = %self.title, team_a = %team_a.name, team_b = %team_b.name)
    )]
    pub fn start(&mut self, team_a: Team, team_b: Team) -> Result<(), VetoError> {
        if team_a.name.trim().is_empty() || team_b.name.trim().is_empty() {
            tracing::warn!("Missing team name");
            return Err(VetoError::InvalidState(
                "two named teams are required".to_owned(),
            ));
        }
        if team_a.name == team_b.name {
            tracing::warn!("Same team on both rosters");
            return Err(VetoError::InvalidState(format!(
                "{:?} cannot be both roster A and roster B",
                team_a.name
            )));
        }

        self.reset();
        self.rosters = Some([team_a, team_b]);
        self.step = Some(0);

        tracing::info!("Starting veto");
        self.settle();

        Ok(())
    }

    /// Back to the not-started state with canonical pools. Rosters are kept.
    pub fn reset(&mut self) {
        self.step = None;
        self.log.clear();
        self.pool.reset();
        self.slots = vec![Slot::default(); self.title.slot_count()];
    }

    /// Starts a fresh engine and applies `commands` in order, stopping at the
    /// first rejected one.
    pub fn replay<'c, I>(
        title: GameTitle,
        team_a: Team,
        team_b: Team,
        commands: I,
    ) -> Result<Self, VetoError>
    where
        I: IntoIterator<Item = &'c Command>,
    {
        let mut engine = Self::new(title);
        engine.start(team_a, team_b)?;
        for command in commands {
            engine.apply(command)?;
        }

        Ok(engine)
    }

    pub fn apply(&mut self, command: &Command) -> Result<(), VetoError> {
        match command {
            Command::Ban(map) => self.ban(map),
            Command::Pick(map) => self.pick(map),
            Command::Side(side) => self.choose_side(*side),
            Command::Undo => self.undo().map(|_| ()),
        }
    }

    pub fn can_ban(&self, map: &str) -> bool {
        self.expect_map_step(ActionKind::Ban, map).is_ok()
    }

    #[tracing::instrument(skip(self), fields(title = %self.title, step = ?self.step))]
    pub fn ban(&mut self, map: &str) -> Result<(), VetoError> {
        let (index, step) = self
            .expect_map_step(ActionKind::Ban, map)
            .inspect_err(|e| tracing::warn!("Rejected ban: {}", e))?;

        self.commit(index, step, Subject::Map(map.to_owned()), false)?;
        tracing::debug!("Banned {} from {}", map, step.mode);

        self.settle();
        Ok(())
    }

    pub fn can_pick(&self, map: &str) -> bool {
        self.expect_map_step(ActionKind::Pick, map).is_ok()
    }

    #[tracing::instrument(skip(self), fields(title = %self.title, step = ?self.step))]
    pub fn pick(&mut self, map: &str) -> Result<(), VetoError> {
        let (index, step) = self
            .expect_map_step(ActionKind::Pick, map)
            .inspect_err(|e| tracing::warn!("Rejected pick: {}", e))?;

        self.commit(index, step, Subject::Map(map.to_owned()), false)?;
        tracing::debug!("Picked {} for slot {:?}", map, step.slot);

        self.settle();
        Ok(())
    }

    pub fn can_choose_side(&self, side: Side) -> bool {
        self.expect_side_step(side).is_ok()
    }

    #[tracing::instrument(skip(self), fields(title = %self.title, step = ?self.step))]
    pub fn choose_side(&mut self, side: Side) -> Result<(), VetoError> {
        let (index, step) = self
            .expect_side_step(side)
            .inspect_err(|e| tracing::warn!("Rejected side choice: {}", e))?;

        self.commit(index, step, Subject::Side(side), false)?;
        tracing::debug!("Chose {} for slot {:?}", side, step.slot);

        self.settle();
        Ok(())
    }

    /// Reverts the last caller action and returns it. An automatic pick is
    /// reverted together with the action that triggered it. Returns `Ok(None)`
    /// when there is nothing to undo.
    #[tracing::instrument(skip(self), fields(title = %self.title, step = ?self.step))]
    pub fn undo(&mut self) -> Result<Option<Action>, VetoError> {
        let (pool, slots, step) = (self.pool.clone(), self.slots.clone(), self.step);
        let mut popped = Vec::new();

        while let Some(action) = self.log.pop() {
            if let Err(e) = self.revert(&action) {
                tracing::error!("Reverting {:?}: {}", action, e);

                // Restore the whole chain, including automatic entries already reverted
                popped.push(action);
                self.log.extend(popped.into_iter().rev());
                self.pool = pool;
                self.slots = slots;
                self.step = step;
                return Err(e);
            }

            tracing::debug!(
                step = action.step,
                automatic = action.automatic,
                "Undid {} of {}",
                action.kind,
                action.subject
            );

            let automatic = action.automatic;
            popped.push(action);
            if !automatic {
                break;
            }
        }

        Ok(popped.pop())
    }

    pub fn title(&self) -> GameTitle {
        self.title
    }

    /// Current step index, `None` before the sequence starts.
    pub fn step(&self) -> Option<usize> {
        self.step
    }

    pub fn is_started(&self) -> bool {
        self.step.is_some()
    }

    pub fn is_complete(&self) -> bool {
        self.step
            .map(|index| index >= self.title.script().len())
            .unwrap_or(false)
    }

    pub fn current_step(&self) -> Option<&'static Step> {
        self.pending().map(|(_, step)| step)
    }

    pub fn current_actor(&self) -> Option<Roster> {
        self.step.and_then(|index| self.title.actor_at(index))
    }

    pub fn current_team(&self) -> Option<&Team> {
        self.current_actor().and_then(|roster| self.roster(roster))
    }

    /// Sub-mode pool the current step belongs to.
    pub fn current_phase(&self) -> Option<SubMode> {
        self.current_step().map(|step| step.mode)
    }

    pub fn current_prompt(&self) -> &'static str {
        match self.step {
            None => "",
            Some(index) => self
                .title
                .script()
                .get(index)
                .map(|step| step.prompt)
                .unwrap_or(DONE_PROMPT),
        }
    }

    pub fn roster(&self, roster: Roster) -> Option<&Team> {
        self.rosters.as_ref().map(|[a, b]| match roster {
            Roster::A => a,
            Roster::B => b,
        })
    }

    pub fn teams(&self) -> Vec<Team> {
        self.rosters
            .as_ref()
            .map(|teams| teams.to_vec())
            .unwrap_or_default()
    }

    pub fn pool(&self) -> &MapPool {
        &self.pool
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn actions(&self) -> &[Action] {
        &self.log
    }

    /// Banned maps in the order they were banned.
    pub fn bans(&self) -> impl Iterator<Item = &str> + '_ {
        self.log.iter().filter_map(|action| match (&action.kind, &action.subject) {
            (ActionKind::Ban, Subject::Map(map)) => Some(map.as_str()),
            _ => None,
        })
    }

    pub fn legal_actions(&self) -> LegalActions {
        let auto_picked = self
            .log
            .last()
            .filter(|action| action.automatic)
            .and_then(|action| {
                let step = self.title.script().get(action.step)?;
                match &action.subject {
                    Subject::Map(map) => Some(MapMode::new(map.clone(), step.mode)),
                    Subject::Side(_) => None,
                }
            });

        let step = match self.current_step() {
            Some(s) => s,
            None => {
                return LegalActions {
                    kind: None,
                    candidates: Vec::new(),
                    auto_picked,
                };
            }
        };

        let candidates = match step.kind {
            ActionKind::Ban | ActionKind::Pick => self.pool.remaining(step.mode).to_vec(),
            ActionKind::Side => self
                .title
                .side_options()
                .iter()
                .map(|side| side.label().to_owned())
                .collect(),
        };

        LegalActions {
            kind: Some(step.kind),
            candidates,
            auto_picked,
        }
    }

    /// Picked maps in play order (Map 1, Map 2, ...), stopping at the first
    /// slot that is still empty.
    pub fn rotation(&self) -> Rotation {
        let maps = self.slots.iter().map_while(|slot| slot.map.clone());
        match self.title {
            GameTitle::CallOfDuty => Rotation::CallOfDuty(maps.collect()),
            GameTitle::Valorant => Rotation::Valorant(maps.map(|m| m.map).collect()),
        }
    }

    /// `"<roster A>: <side> | <roster B>: <side>"` for a slot whose side has
    /// been chosen.
    pub fn sides_display(&self, slot: usize) -> Option<String> {
        let [a, b] = self.rosters.as_ref()?;
        let chosen = self.slots.get(slot)?.side?;
        let chooser = self
            .title
            .script()
            .iter()
            .find(|step| step.kind == ActionKind::Side && step.slot == Some(slot))?
            .actor;

        let (a_side, b_side) = self.title.assign_sides(chosen, chooser);
        Some(format!("{}: {} | {}: {}", a.name, a_side, b.name, b_side))
    }

    /// Builds the match from the rosters and the current rotation.
    pub fn build_match(&self, best_of: u32) -> Result<Match, BuildError> {
        build_match(&self.teams(), best_of, self.rotation())
    }

    fn pending(&self) -> Option<(usize, &'static Step)> {
        let index = self.step?;
        self.title.script().get(index).map(|step| (index, step))
    }

    fn expect_step(&self, kind: ActionKind) -> Result<(usize, &'static Step), VetoError> {
        let index = self
            .step
            .ok_or_else(|| VetoError::InvalidState("the veto has not started".to_owned()))?;
        let step = self
            .title
            .script()
            .get(index)
            .ok_or_else(|| VetoError::InvalidAction("the veto is already complete".to_owned()))?;

        if step.kind != kind {
            return Err(VetoError::InvalidAction(format!(
                "step {} expects a {}, not a {}",
                index, step.kind, kind
            )));
        }

        Ok((index, step))
    }

    fn expect_map_step(
        &self,
        kind: ActionKind,
        map: &str,
    ) -> Result<(usize, &'static Step), VetoError> {
        let (index, step) = self.expect_step(kind)?;
        if !self.pool.contains(step.mode, map) {
            return Err(VetoError::InvalidAction(format!(
                "{:?} is not available in the {} pool",
                map, step.mode
            )));
        }

        Ok((index, step))
    }

    fn expect_side_step(&self, side: Side) -> Result<(usize, &'static Step), VetoError> {
        let (index, step) = self.expect_step(ActionKind::Side)?;
        if !self.title.side_options().contains(&side) {
            return Err(VetoError::InvalidAction(format!(
                "{} is not a {} side",
                side, self.title
            )));
        }

        Ok((index, step))
    }

    /// Applies an already validated action, logs it and moves to the next step.
    fn commit(
        &mut self,
        index: usize,
        step: &'static Step,
        subject: Subject,
        automatic: bool,
    ) -> Result<(), VetoError> {
        match (step.kind, &subject) {
            (ActionKind::Ban, Subject::Map(map)) => {
                self.pool.remove(step.mode, map)?;
            }
            (ActionKind::Pick, Subject::Map(map)) => {
                self.pool.remove(step.mode, map)?;
                if let Some(slot) = step.slot.and_then(|s| self.slots.get_mut(s)) {
                    slot.map = Some(MapMode::new(map.clone(), step.mode));
                }
            }
            (ActionKind::Side, Subject::Side(side)) => {
                if let Some(slot) = step.slot.and_then(|s| self.slots.get_mut(s)) {
                    slot.side = Some(*side);
                }
            }
            (kind, subject) => {
                return Err(VetoError::InvalidAction(format!(
                    "{subject} cannot be used for a {kind}"
                )));
            }
        }

        let team = self
            .roster(step.actor)
            .map(|team| team.name.clone())
            .unwrap_or_default();

        self.log.push(Action {
            kind: step.kind,
            subject,
            step: index,
            actor: step.actor,
            team,
            automatic,
        });
        self.step = Some(index + 1);

        Ok(())
    }

    fn revert(&mut self, action: &Action) -> Result<(), VetoError> {
        let step = self.title.script().get(action.step).ok_or_else(|| {
            VetoError::InvalidState(format!("logged step {} is outside the script", action.step))
        })?;

        if let Subject::Map(map) = &action.subject {
            self.pool.add(step.mode, map)?;
        }

        if let Some(slot) = step.slot.and_then(|s| self.slots.get_mut(s)) {
            match action.kind {
                ActionKind::Pick => slot.map = None,
                ActionKind::Side => slot.side = None,
                ActionKind::Ban => {}
            }
        }

        self.step = Some(action.step);
        Ok(())
    }

    /// Fills pick steps that have a single candidate left, then reports
    /// completion.
    fn settle(&mut self) {
        while let Some((index, step)) = self.pending() {
            if step.kind != ActionKind::Pick {
                break;
            }

            let last = match self.pool.remaining(step.mode) {
                [only] => only.clone(),
                _ => break,
            };

            tracing::debug!(step = index, "Only {} left, picking it automatically", last);
            if let Err(e) = self.commit(index, step, Subject::Map(last), true) {
                tracing::error!("Automatic pick at step {}: {}", index, e);
                break;
            }
        }

        if self.is_complete() {
            tracing::info!("Veto complete");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_undo_keeps_automatic_pick() {
        let mut engine = VetoEngine::new(GameTitle::Valorant);
        engine.start(Team::new("Alpha"), Team::new("Beta")).unwrap();
        for map in ["Abyss", "Ascent"] {
            engine.ban(map).unwrap();
        }
        engine.pick("Bind").unwrap();
        engine.choose_side(Side::Attack).unwrap();
        engine.pick("Corrode").unwrap();
        engine.choose_side(Side::Defense).unwrap();
        for map in ["Haven", "Lotus"] {
            engine.ban(map).unwrap();
        }
        assert_eq!(Some(9), engine.step());

        // Reverting the Lotus ban fails once Lotus is already back in the pool
        engine.pool.add(SubMode::Standard, "Lotus").unwrap();
        let (log, pool, slots) = (engine.log.clone(), engine.pool.clone(), engine.slots.clone());

        assert!(matches!(engine.undo(), Err(VetoError::InvalidState(_))));

        assert_eq!(Some(9), engine.step());
        assert_eq!(log, engine.log);
        assert_eq!(pool, engine.pool);
        assert_eq!(slots, engine.slots);
        assert!(engine.log.last().map(|a| a.automatic).unwrap_or(false));
    }
}
