#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct VetoSnapshot {
    pub title: String,
    pub step: Option<usize>,
    pub prompt: String,
    pub actor: Option<String>,
    pub complete: bool,
    pub pools: Vec<PoolSnapshot>,
    pub slots: Vec<SlotSnapshot>,
    pub bans: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PoolSnapshot {
    pub mode: String,
    pub remaining: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SlotSnapshot {
    pub number: usize,
    pub map: Option<String>,
    pub mode: Option<String>,
    pub sides: Option<String>,
}
