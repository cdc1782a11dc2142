use crate::error::ParseError;
use crate::model::Side;

/// A single caller instruction, as typed by a user or stored in a script.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Command {
    Ban(String),
    Pick(String),
    Side(Side),
    Undo,
}

impl core::str::FromStr for Command {
    type Err = ParseError;

    /// Parses `ban <map>`, `pick <map>`, `side <label>` and `undo`. Map names
    /// may contain spaces, everything after the verb is the argument.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        match verb.to_lowercase().as_str() {
            "ban" if rest.is_empty() => Err(ParseError::MissingArgument("ban")),
            "ban" => Ok(Self::Ban(rest.to_owned())),
            "pick" if rest.is_empty() => Err(ParseError::MissingArgument("pick")),
            "pick" => Ok(Self::Pick(rest.to_owned())),
            "side" if rest.is_empty() => Err(ParseError::MissingArgument("side")),
            "side" => Ok(Self::Side(rest.parse()?)),
            "undo" => Ok(Self::Undo),
            _ => Err(ParseError::UnknownCommand(line.to_owned())),
        }
    }
}

impl core::fmt::Display for Command {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Ban(map) => write!(f, "ban {map}"),
            Self::Pick(map) => write!(f, "pick {map}"),
            Self::Side(side) => write!(f, "side {side}"),
            Self::Undo => f.write_str("undo"),
        }
    }
}
