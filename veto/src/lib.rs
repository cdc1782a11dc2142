//! Map veto engine for best-of-N esports series.
//!
//! A [`VetoEngine`] walks a title's fixed ban/pick/side script, consuming a
//! [`MapPool`] as it goes. Once complete, the realized [`Rotation`] plus both
//! teams are turned into a [`Match`] by the builders in [`builder`].

pub mod builder;
pub mod coinflip;
pub mod command;
pub mod engine;
pub mod error;
pub mod model;
pub mod pool;
pub mod script;

pub use builder::{build_match, Match};
pub use coinflip::CoinFlip;
pub use command::Command;
pub use engine::{Action, LegalActions, Rotation, Slot, Subject, VetoEngine};
pub use error::{BuildError, ParseError, VetoError};
pub use model::{GameTitle, MapMode, Player, Side, SubMode, Team};
pub use pool::MapPool;
pub use script::{ActionKind, Roster, Step};
