use crate::error::VetoError;
use crate::model::{Side, Team};
use crate::script::Roster;

/// Outcome of a coin flip between two teams.
///
/// The winner gets the declared side preference, the loser its complement.
/// The winner also becomes roster A of the veto.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CoinFlip {
    pub winner: Team,
    pub loser: Team,
    pub winner_side: Side,
    pub loser_side: Side,
}

impl CoinFlip {
    /// Resolves a flip from a single fair bit. `heads` means `first` wins.
    pub fn resolve(
        heads: bool,
        first: Team,
        second: Team,
        preference: Side,
    ) -> Result<Self, VetoError> {
        if first.name.trim().is_empty() || second.name.trim().is_empty() {
            return Err(VetoError::InvalidState(
                "a coin flip needs two named teams".to_owned(),
            ));
        }
        if first.name == second.name {
            return Err(VetoError::InvalidState(format!(
                "{:?} cannot flip against itself",
                first.name
            )));
        }

        let (winner, loser) = if heads { (first, second) } else { (second, first) };
        tracing::debug!("{} won the coin flip", winner.name);

        Ok(Self {
            winner,
            loser,
            winner_side: preference,
            loser_side: preference.opposite(),
        })
    }

    pub fn flip<R>(
        rng: &mut R,
        first: Team,
        second: Team,
        preference: Side,
    ) -> Result<Self, VetoError>
    where
        R: rand::Rng + ?Sized,
    {
        Self::resolve(rng.gen::<bool>(), first, second, preference)
    }

    pub fn side_of(&self, roster: Roster) -> Side {
        match roster {
            Roster::A => self.winner_side,
            Roster::B => self.loser_side,
        }
    }

    /// `(roster A, roster B)` for starting the veto.
    pub fn rosters(&self) -> (Team, Team) {
        (self.winner.clone(), self.loser.clone())
    }
}
