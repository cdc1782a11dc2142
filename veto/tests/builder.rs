use veto::builder::{
    build_match, CallOfDutyMatchBuilder, CdlRuleSet, Match, ValorantMatchBuilder, ValorantRuleSet,
};
use veto::{BuildError, GameTitle, MapMode, Rotation, SubMode, Team};

use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;

fn rotation() -> Vec<MapMode> {
    vec![
        MapMode::new("Hacienda", SubMode::Hardpoint),
        MapMode::new("Rewind", SubMode::SearchAndDestroy),
        MapMode::new("Protocol", SubMode::Control),
        MapMode::new("Rewind", SubMode::Hardpoint),
        MapMode::new("Hacienda", SubMode::SearchAndDestroy),
    ]
}

fn teams() -> Vec<Team> {
    vec![Team::new("Alpha"), Team::new("Beta")]
}

#[test]
fn single_team() {
    let result = build_match(&[Team::new("Alpha")], 5, Rotation::CallOfDuty(rotation()));

    assert_eq!(Err(BuildError::InvalidTeamCount(1)), result);
}

#[test]
fn duplicate_team_names() {
    let result = build_match(
        &[Team::new("Alpha"), Team::new("Alpha")],
        5,
        Rotation::CallOfDuty(rotation()),
    );

    assert_eq!(Err(BuildError::InvalidTeamCount(1)), result);
}

#[test]
fn even_best_of() {
    let result = build_match(&teams(), 4, Rotation::CallOfDuty(rotation()));

    assert_eq!(Err(BuildError::InvalidBestOf(4)), result);
    assert_eq!(
        Err(BuildError::InvalidBestOf(0)),
        build_match(&teams(), 0, Rotation::CallOfDuty(rotation()))
    );
}

#[test]
fn insufficient_maps() {
    let result = build_match(
        &teams(),
        3,
        Rotation::Valorant(vec!["Bind".to_owned(), "Haven".to_owned()]),
    );

    assert_eq!(
        Err(BuildError::InsufficientMaps {
            best_of: 3,
            available: 2
        }),
        result
    );
}

#[test]
fn team_count_checked_first() {
    let result = build_match(&[], 4, Rotation::Valorant(Vec::new()));

    assert_eq!(Err(BuildError::InvalidTeamCount(0)), result);
}

#[test]
fn truncates_to_best_of() {
    let built = build_match(&teams(), 3, Rotation::CallOfDuty(rotation())).unwrap();

    let cod = match built {
        Match::CallOfDuty(m) => m,
        other => panic!("Expected a Call of Duty match, got {:?}", other),
    };

    assert_eq!(3, cod.best_of());
    assert_eq!(&rotation()[..3], cod.rotation());
    assert_eq!(&CdlRuleSet::default(), cod.rules());
}

#[test]
fn builds_are_equal_but_distinct() {
    let scheduled = Utc.with_ymd_and_hms(2026, 11, 2, 18, 0, 0).unwrap();
    let builder = ValorantMatchBuilder::new()
        .with_scheduled(scheduled)
        .add_team(Team::new("Alpha"))
        .add_team(Team::new("Beta"))
        .with_maps(vec!["Bind".to_owned(), "Corrode".to_owned(), "Sunset".to_owned()]);

    let first = builder.build().unwrap();
    let second = builder.build().unwrap();

    assert_ne!(first.id(), second.id());
    assert_eq!(first.scheduled_time(), second.scheduled_time());
    assert_eq!(first.teams(), second.teams());
    assert_eq!(first.best_of(), second.best_of());
    assert_eq!(first.maps(), second.maps());
    assert_eq!(first.rules(), second.rules());
}

#[test]
fn add_team_keeps_two() {
    let built = CallOfDutyMatchBuilder::new()
        .add_team(Team::new("Alpha"))
        .add_team(Team::new("Beta"))
        .add_team(Team::new("Gamma"))
        .with_rotation(rotation())
        .build()
        .unwrap();

    assert_eq!(
        vec!["Alpha", "Beta"],
        built.teams().iter().map(|t| t.name.as_str()).collect::<Vec<_>>()
    );
}

#[test]
fn defaults() {
    let before = Utc::now();
    let built = ValorantMatchBuilder::new()
        .add_team(Team::new("Alpha"))
        .add_team(Team::new("Beta"))
        .with_maps(vec!["Bind".to_owned(), "Corrode".to_owned(), "Sunset".to_owned()])
        .build()
        .unwrap();

    assert_eq!(3, built.best_of());
    assert_eq!(
        &ValorantRuleSet {
            enable_time_outs: true,
            max_pause_minutes: 10
        },
        built.rules()
    );
    assert!(built.scheduled_time() > before + chrono::Duration::hours(23));
    assert_eq!(GameTitle::Valorant, Match::Valorant(built).title());
}

#[test]
fn custom_rules() {
    let rules = CdlRuleSet {
        enable_gentleman: false,
        allow_snipers: true,
    };

    let built = CallOfDutyMatchBuilder::new()
        .add_team(Team::new("Alpha"))
        .add_team(Team::new("Beta"))
        .with_best_of(1)
        .with_rotation(rotation())
        .with_rules(rules.clone())
        .build()
        .unwrap();

    assert_eq!(&rules, built.rules());
    assert_eq!(&rotation()[..1], built.rotation());
}
