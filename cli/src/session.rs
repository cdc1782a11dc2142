use std::io::{BufRead, Write};

use rand::SeedableRng;
use veto::{BuildError, CoinFlip, Command, GameTitle, Side, Team, VetoEngine, VetoError};

use crate::args::Args;
use crate::exitcodes;
use crate::render;

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("no usable team name in {0:?}")]
    InvalidTeam(String),
    #[error("{side} is not a {title} side")]
    InvalidPreference { side: Side, title: GameTitle },
    #[error(transparent)]
    Veto(#[from] VetoError),
    #[error(transparent)]
    Build(#[from] BuildError),
    #[error("input ended before the veto was complete, waiting on {0:?}")]
    Incomplete(String),
    #[error("i/o: {0}")]
    Io(#[from] std::io::Error),
}

impl SessionError {
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::InvalidTeam(_)
            | Self::InvalidPreference { .. }
            | Self::Veto(_)
            | Self::Build(_) => exitcodes::VALIDATION,
            Self::Incomplete(_) => exitcodes::INCOMPLETE,
            Self::Io(_) => exitcodes::IO,
        }
    }
}

/// A single veto driven from line-based input.
#[derive(Debug)]
pub struct Session {
    engine: VetoEngine,
    coin_flip: Option<CoinFlip>,
    best_of: u32,
}

impl Session {
    /// Sanitizes the team names, runs the optional coin flip and starts the veto.
    #[tracing::instrument(skip_all, fields(title = %args.title))]
    pub fn prepare(args: &Args) -> Result<Self, SessionError> {
        let team_a = Team::from_input(&args.team_a)
            .ok_or_else(|| SessionError::InvalidTeam(args.team_a.clone()))?;
        let team_b = Team::from_input(&args.team_b)
            .ok_or_else(|| SessionError::InvalidTeam(args.team_b.clone()))?;

        let coin_flip = if args.coin_flip {
            let preference = args.preference();
            if !args.title.side_options().contains(&preference) {
                return Err(SessionError::InvalidPreference {
                    side: preference,
                    title: args.title,
                });
            }

            let mut rng: Box<dyn rand::RngCore> = match args.seed {
                Some(seed) => Box::new(rand_chacha::ChaCha8Rng::seed_from_u64(seed)),
                None => Box::new(rand::thread_rng()),
            };

            Some(CoinFlip::flip(&mut *rng, team_a.clone(), team_b.clone(), preference)?)
        } else {
            None
        };

        let (roster_a, roster_b) = match &coin_flip {
            Some(flip) => flip.rosters(),
            None => (team_a, team_b),
        };

        let mut engine = VetoEngine::new(args.title);
        engine.start(roster_a, roster_b)?;

        Ok(Self {
            engine,
            coin_flip,
            best_of: args.best_of(),
        })
    }

    pub fn engine(&self) -> &VetoEngine {
        &self.engine
    }

    pub fn coin_flip(&self) -> Option<&CoinFlip> {
        self.coin_flip.as_ref()
    }

    /// Feeds commands from `input` until the veto completes. Rejected
    /// commands are reported on `out` and the session carries on.
    pub fn run<R, W>(&mut self, input: R, out: &mut W) -> Result<(), SessionError>
    where
        R: BufRead,
        W: Write,
    {
        if let Some(flip) = &self.coin_flip {
            writeln!(
                out,
                "{} won the coin flip and takes {}",
                flip.winner.name, flip.winner_side
            )?;
        }
        writeln!(out, "{}", render::prompt_line(&self.engine))?;

        for line in input.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let applied = line
                .parse::<Command>()
                .map_err(|e| e.to_string())
                .and_then(|command| self.engine.apply(&command).map_err(|e| e.to_string()));

            match applied {
                Ok(()) => {
                    let last_automatic = self
                        .engine
                        .actions()
                        .last()
                        .map(|a| a.automatic)
                        .unwrap_or(false);
                    let auto_picked = self.engine.legal_actions().auto_picked;
                    if let Some(map) = auto_picked.filter(|_| last_automatic) {
                        writeln!(out, "{}", render::auto_pick_line(self.engine.title(), &map))?;
                    }
                }
                Err(e) => {
                    tracing::debug!("Rejected {:?}", line);
                    writeln!(out, "! {}", e)?;
                }
            }

            if self.engine.is_complete() {
                writeln!(out, "Veto complete")?;
                break;
            }
            writeln!(out, "{}", render::prompt_line(&self.engine))?;
        }

        if !self.engine.is_complete() {
            return Err(SessionError::Incomplete(self.engine.current_prompt().to_owned()));
        }

        Ok(())
    }

    pub fn finish(&self) -> Result<common::MatchSummary, SessionError> {
        let built = self.engine.build_match(self.best_of)?;
        Ok(render::summary(&self.engine, &built, self.coin_flip.as_ref()))
    }
}
