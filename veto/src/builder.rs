//! Assembling finished matches.
//!
//! Each title has its own match type and fluent builder. Both run the same
//! checks in the same order: team count, then best-of, then map count.

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::engine::Rotation;
use crate::error::BuildError;
use crate::model::{GameTitle, MapMode, Team};

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CdlRuleSet {
    pub enable_gentleman: bool,
    pub allow_snipers: bool,
}

impl Default for CdlRuleSet {
    fn default() -> Self {
        Self {
            enable_gentleman: true,
            allow_snipers: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ValorantRuleSet {
    pub enable_time_outs: bool,
    pub max_pause_minutes: u32,
}

impl Default for ValorantRuleSet {
    fn default() -> Self {
        Self {
            enable_time_outs: true,
            max_pause_minutes: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CallOfDutyMatch {
    id: Uuid,
    scheduled_time: DateTime<Utc>,
    best_of: u32,
    teams: [Team; 2],
    rotation: Vec<MapMode>,
    rules: CdlRuleSet,
}

impl CallOfDutyMatch {
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn scheduled_time(&self) -> DateTime<Utc> {
        self.scheduled_time
    }

    pub fn best_of(&self) -> u32 {
        self.best_of
    }

    pub fn teams(&self) -> &[Team; 2] {
        &self.teams
    }

    pub fn rotation(&self) -> &[MapMode] {
        &self.rotation
    }

    pub fn rules(&self) -> &CdlRuleSet {
        &self.rules
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ValorantMatch {
    id: Uuid,
    scheduled_time: DateTime<Utc>,
    best_of: u32,
    teams: [Team; 2],
    maps: Vec<String>,
    rules: ValorantRuleSet,
}

impl ValorantMatch {
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn scheduled_time(&self) -> DateTime<Utc> {
        self.scheduled_time
    }

    pub fn best_of(&self) -> u32 {
        self.best_of
    }

    pub fn teams(&self) -> &[Team; 2] {
        &self.teams
    }

    pub fn maps(&self) -> &[String] {
        &self.maps
    }

    pub fn rules(&self) -> &ValorantRuleSet {
        &self.rules
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Match {
    CallOfDuty(CallOfDutyMatch),
    Valorant(ValorantMatch),
}

impl Match {
    pub fn id(&self) -> Uuid {
        match self {
            Self::CallOfDuty(m) => m.id,
            Self::Valorant(m) => m.id,
        }
    }

    pub fn title(&self) -> GameTitle {
        match self {
            Self::CallOfDuty(_) => GameTitle::CallOfDuty,
            Self::Valorant(_) => GameTitle::Valorant,
        }
    }

    pub fn scheduled_time(&self) -> DateTime<Utc> {
        match self {
            Self::CallOfDuty(m) => m.scheduled_time,
            Self::Valorant(m) => m.scheduled_time,
        }
    }

    pub fn best_of(&self) -> u32 {
        match self {
            Self::CallOfDuty(m) => m.best_of,
            Self::Valorant(m) => m.best_of,
        }
    }

    pub fn teams(&self) -> &[Team; 2] {
        match self {
            Self::CallOfDuty(m) => &m.teams,
            Self::Valorant(m) => &m.teams,
        }
    }

    /// Map names in play order.
    pub fn map_names(&self) -> Vec<&str> {
        match self {
            Self::CallOfDuty(m) => m.rotation.iter().map(|mm| mm.map.as_str()).collect(),
            Self::Valorant(m) => m.maps.iter().map(|map| map.as_str()).collect(),
        }
    }
}

fn default_schedule() -> DateTime<Utc> {
    Utc::now() + Duration::days(1)
}

fn validate(teams: &[Team], best_of: u32, available: usize) -> Result<[Team; 2], BuildError> {
    let pair: [Team; 2] = match teams {
        [a, b] if a.name != b.name => [a.clone(), b.clone()],
        _ => return Err(BuildError::InvalidTeamCount(distinct_names(teams))),
    };

    if best_of == 0 || best_of % 2 == 0 {
        return Err(BuildError::InvalidBestOf(best_of));
    }

    if available < best_of as usize {
        return Err(BuildError::InsufficientMaps { best_of, available });
    }

    Ok(pair)
}

fn distinct_names(teams: &[Team]) -> usize {
    let mut names: Vec<&str> = teams.iter().map(|t| t.name.as_str()).collect();
    names.sort_unstable();
    names.dedup();
    names.len()
}

#[derive(Debug, Clone)]
pub struct CallOfDutyMatchBuilder {
    scheduled_time: DateTime<Utc>,
    best_of: u32,
    teams: Vec<Team>,
    rotation: Vec<MapMode>,
    rules: CdlRuleSet,
}

impl Default for CallOfDutyMatchBuilder {
    fn default() -> Self {
        Self {
            scheduled_time: default_schedule(),
            best_of: GameTitle::CallOfDuty.default_best_of(),
            teams: Vec::new(),
            rotation: Vec::new(),
            rules: CdlRuleSet::default(),
        }
    }
}

impl CallOfDutyMatchBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scheduled(mut self, time: DateTime<Utc>) -> Self {
        self.scheduled_time = time;
        self
    }

    pub fn with_best_of(mut self, best_of: u32) -> Self {
        self.best_of = best_of;
        self
    }

    /// Ignored once two teams are set.
    pub fn add_team(mut self, team: Team) -> Self {
        if self.teams.len() >= 2 {
            tracing::warn!("Ignoring third team {:?}", team.name);
            return self;
        }

        self.teams.push(team);
        self
    }

    pub fn with_rotation(mut self, rotation: Vec<MapMode>) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_rules(mut self, rules: CdlRuleSet) -> Self {
        self.rules = rules;
        self
    }

    pub fn build(&self) -> Result<CallOfDutyMatch, BuildError> {
        let teams = validate(&self.teams, self.best_of, self.rotation.len())?;

        Ok(CallOfDutyMatch {
            id: Uuid::now_v7(),
            scheduled_time: self.scheduled_time,
            best_of: self.best_of,
            teams,
            rotation: self.rotation[..self.best_of as usize].to_vec(),
            rules: self.rules.clone(),
        })
    }
}

#[derive(Debug, Clone)]
pub struct ValorantMatchBuilder {
    scheduled_time: DateTime<Utc>,
    best_of: u32,
    teams: Vec<Team>,
    maps: Vec<String>,
    rules: ValorantRuleSet,
}

impl Default for ValorantMatchBuilder {
    fn default() -> Self {
        Self {
            scheduled_time: default_schedule(),
            best_of: GameTitle::Valorant.default_best_of(),
            teams: Vec::new(),
            maps: Vec::new(),
            rules: ValorantRuleSet::default(),
        }
    }
}

impl ValorantMatchBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scheduled(mut self, time: DateTime<Utc>) -> Self {
        self.scheduled_time = time;
        self
    }

    pub fn with_best_of(mut self, best_of: u32) -> Self {
        self.best_of = best_of;
        self
    }

    /// Ignored once two teams are set.
    pub fn add_team(mut self, team: Team) -> Self {
        if self.teams.len() >= 2 {
            tracing::warn!("Ignoring third team {:?}", team.name);
            return self;
        }

        self.teams.push(team);
        self
    }

    pub fn with_maps(mut self, maps: Vec<String>) -> Self {
        self.maps = maps;
        self
    }

    pub fn with_rules(mut self, rules: ValorantRuleSet) -> Self {
        self.rules = rules;
        self
    }

    pub fn build(&self) -> Result<ValorantMatch, BuildError> {
        let teams = validate(&self.teams, self.best_of, self.maps.len())?;

        Ok(ValorantMatch {
            id: Uuid::now_v7(),
            scheduled_time: self.scheduled_time,
            best_of: self.best_of,
            teams,
            maps: self.maps[..self.best_of as usize].to_vec(),
            rules: self.rules.clone(),
        })
    }
}

/// Builds a match with default schedule and rules from exactly two teams and
/// a finished rotation. The rotation is truncated to `best_of` entries.
#[tracing::instrument(
    skip(teams, rotation),
    fields(title = %rotation.title(), maps = rotation.len())
)]
pub fn build_match(teams: &[Team], best_of: u32, rotation: Rotation) -> Result<Match, BuildError> {
    validate(teams, best_of, rotation.len())
        .inspect_err(|e| tracing::warn!("Rejected match: {}", e))?;

    let built = match rotation {
        Rotation::CallOfDuty(rotation) => Match::CallOfDuty(
            teams
                .iter()
                .cloned()
                .fold(CallOfDutyMatchBuilder::new(), |b, team| b.add_team(team))
                .with_best_of(best_of)
                .with_rotation(rotation)
                .build()?,
        ),
        Rotation::Valorant(maps) => Match::Valorant(
            teams
                .iter()
                .cloned()
                .fold(ValorantMatchBuilder::new(), |b, team| b.add_team(team))
                .with_best_of(best_of)
                .with_maps(maps)
                .build()?,
        ),
    };

    tracing::info!(id = %built.id(), "Built match");
    Ok(built)
}
