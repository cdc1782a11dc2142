pub mod veto_session;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CoinFlipSummary {
    pub winner: String,
    pub loser: String,
    pub winner_side: String,
    pub loser_side: String,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MatchSummary {
    pub id: String,
    pub title: String,
    /// RFC 3339, UTC
    pub scheduled_time: String,
    pub best_of: u32,
    pub teams: Vec<String>,
    pub maps: Vec<MatchMap>,
    pub bans: Vec<String>,
    pub coin_flip: Option<CoinFlipSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MatchMap {
    pub number: usize,
    pub map: String,
    pub mode: Option<String>,
    pub sides: Option<String>,
}
