use veto::model::sanitize_team_name;
use veto::{Command, GameTitle, ParseError, Side, Team};

use pretty_assertions::assert_eq;

#[test]
fn parse_commands() {
    assert_eq!(Ok(Command::Ban("Red Card".to_owned())), "ban Red Card".parse::<Command>());
    assert_eq!(Ok(Command::Pick("Sunset".to_owned())), "  PICK   Sunset ".parse::<Command>());
    assert_eq!(Ok(Command::Side(Side::Team1)), "side team 1".parse::<Command>());
    assert_eq!(Ok(Command::Side(Side::Defense)), "side Defense".parse::<Command>());
    assert_eq!(Ok(Command::Undo), "undo".parse::<Command>());
}

#[test]
fn parse_errors() {
    assert_eq!(Err(ParseError::MissingArgument("ban")), "ban".parse::<Command>());
    assert_eq!(
        Err(ParseError::UnknownSide("left".to_owned())),
        "side left".parse::<Command>()
    );
    assert_eq!(
        Err(ParseError::UnknownCommand("veto Bind".to_owned())),
        "veto Bind".parse::<Command>()
    );
}

#[test]
fn display_parses_back() {
    for command in [
        Command::Ban("Red Card".to_owned()),
        Command::Side(Side::Team2),
        Command::Undo,
    ] {
        assert_eq!(Ok(command.clone()), command.to_string().parse::<Command>());
    }
}

#[test]
fn titles() {
    assert_eq!(Ok(GameTitle::CallOfDuty), "CoD".parse::<GameTitle>());
    assert_eq!(Ok(GameTitle::CallOfDuty), "call of duty".parse::<GameTitle>());
    assert_eq!(Ok(GameTitle::Valorant), "Valorant".parse::<GameTitle>());
    assert_eq!(
        Err(ParseError::UnknownTitle("cs2".to_owned())),
        "cs2".parse::<GameTitle>()
    );
}

#[test]
fn team_name_sanitizing() {
    assert_eq!("Alpha", sanitize_team_name("  <Alpha>  "));
    assert_eq!("Tom  Jerry", sanitize_team_name("Tom & Jerry"));
    assert_eq!("ab", sanitize_team_name("a\u{7}b"));
    assert_eq!(50, sanitize_team_name(&"x".repeat(80)).chars().count());
    assert_eq!(None, Team::from_input(" /'\" "));
    assert_eq!(Some(Team::new("Beta")), Team::from_input(" Beta\n"));
}
