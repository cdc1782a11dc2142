//! Teams, players and the units a veto selects from.

use crate::error::ParseError;

/// Longest team name accepted from user input, counted in characters.
pub const MAX_TEAM_NAME_LEN: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum GameTitle {
    CallOfDuty,
    Valorant,
}

static TITLE_NAMES: phf::Map<&'static str, GameTitle> = phf::phf_map! {
    "cod" => GameTitle::CallOfDuty,
    "callofduty" => GameTitle::CallOfDuty,
    "call-of-duty" => GameTitle::CallOfDuty,
    "call of duty" => GameTitle::CallOfDuty,
    "val" => GameTitle::Valorant,
    "valorant" => GameTitle::Valorant,
};

impl core::str::FromStr for GameTitle {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TITLE_NAMES
            .get(s.trim().to_lowercase().as_str())
            .copied()
            .ok_or_else(|| ParseError::UnknownTitle(s.to_owned()))
    }
}

impl core::fmt::Display for GameTitle {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::CallOfDuty => f.write_str("Call of Duty"),
            Self::Valorant => f.write_str("Valorant"),
        }
    }
}

/// A partition of the map pool. Call of Duty splits its pool by game mode,
/// Valorant draws every map from a single `Standard` pool.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum SubMode {
    Hardpoint,
    SearchAndDestroy,
    Control,
    Standard,
}

impl SubMode {
    pub fn short_name(&self) -> &'static str {
        match self {
            Self::Hardpoint => "HP",
            Self::SearchAndDestroy => "SnD",
            Self::Control => "Control",
            Self::Standard => "Standard",
        }
    }
}

impl core::fmt::Display for SubMode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Hardpoint => f.write_str("Hardpoint"),
            Self::SearchAndDestroy => f.write_str("Search & Destroy"),
            Self::Control => f.write_str("Control"),
            Self::Standard => f.write_str("Standard"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct MapMode {
    pub map: String,
    pub mode: SubMode,
}

impl MapMode {
    pub fn new<S>(map: S, mode: SubMode) -> Self
    where
        S: Into<String>,
    {
        Self {
            map: map.into(),
            mode,
        }
    }
}

impl core::fmt::Display for MapMode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} - {}", self.map, self.mode)
    }
}

/// Starting side for a single map.
///
/// Call of Duty uses the lobby slots `Team 1`/`Team 2`, Valorant uses the
/// `Attack`/`Defense` roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Side {
    Team1,
    Team2,
    Attack,
    Defense,
}

static SIDE_LABELS: phf::Map<&'static str, Side> = phf::phf_map! {
    "team 1" => Side::Team1,
    "team1" => Side::Team1,
    "team 2" => Side::Team2,
    "team2" => Side::Team2,
    "attack" => Side::Attack,
    "defense" => Side::Defense,
    "defence" => Side::Defense,
};

impl Side {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Team1 => "Team 1",
            Self::Team2 => "Team 2",
            Self::Attack => "Attack",
            Self::Defense => "Defense",
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Self::Team1 => Self::Team2,
            Self::Team2 => Self::Team1,
            Self::Attack => Self::Defense,
            Self::Defense => Self::Attack,
        }
    }
}

impl core::str::FromStr for Side {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SIDE_LABELS
            .get(s.trim().to_lowercase().as_str())
            .copied()
            .ok_or_else(|| ParseError::UnknownSide(s.to_owned()))
    }
}

impl core::fmt::Display for Side {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Player {
    pub id: uuid::Uuid,
    pub handle: String,
    pub in_game_id: Option<String>,
    pub role: Option<String>,
}

impl Player {
    pub fn new<S>(handle: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            id: uuid::Uuid::now_v7(),
            handle: handle.into(),
            in_game_id: None,
            role: None,
        }
    }

    pub fn with_in_game_id<S>(mut self, id: S) -> Self
    where
        S: Into<String>,
    {
        self.in_game_id = Some(id.into());
        self
    }

    pub fn with_role<S>(mut self, role: S) -> Self
    where
        S: Into<String>,
    {
        self.role = Some(role.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Team {
    pub name: String,
    pub roster: Vec<Player>,
}

impl Team {
    pub fn new<S>(name: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            name: name.into(),
            roster: Vec::new(),
        }
    }

    /// Builds a team from a user-entered name. Returns `None` if nothing is
    /// left after sanitizing.
    pub fn from_input(raw: &str) -> Option<Self> {
        let name = sanitize_team_name(raw);
        if name.is_empty() {
            return None;
        }

        Some(Self::new(name))
    }

    pub fn with_player(mut self, player: Player) -> Self {
        self.roster.push(player);
        self
    }
}

impl core::fmt::Display for Team {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.name)
    }
}

/// Trims, caps the length at [`MAX_TEAM_NAME_LEN`] characters and strips
/// control characters plus `< > & " ' /`.
pub fn sanitize_team_name(input: &str) -> String {
    let cleaned: String = input
        .trim()
        .chars()
        .take(MAX_TEAM_NAME_LEN)
        .filter(|c| !c.is_control() && !matches!(c, '<' | '>' | '&' | '"' | '\'' | '/'))
        .collect();

    cleaned.trim().to_owned()
}
