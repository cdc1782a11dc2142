use veto::{CoinFlip, Roster, Side, Team, VetoError};

use pretty_assertions::assert_eq;
use rand::SeedableRng;

#[test]
fn heads_first_wins() {
    let flip =
        CoinFlip::resolve(true, Team::new("Alpha"), Team::new("Beta"), Side::Attack).unwrap();

    assert_eq!("Alpha", flip.winner.name);
    assert_eq!("Beta", flip.loser.name);
    assert_eq!(Side::Attack, flip.winner_side);
    assert_eq!(Side::Defense, flip.loser_side);
    assert_eq!(Side::Defense, flip.side_of(Roster::B));
}

#[test]
fn tails_second_wins() {
    let flip =
        CoinFlip::resolve(false, Team::new("Alpha"), Team::new("Beta"), Side::Team2).unwrap();

    let (a, b) = flip.rosters();
    assert_eq!("Beta", a.name);
    assert_eq!("Alpha", b.name);
    assert_eq!(Side::Team2, flip.side_of(Roster::A));
    assert_eq!(Side::Team1, flip.loser_side);
}

#[test]
fn needs_two_distinct_teams() {
    assert!(matches!(
        CoinFlip::resolve(true, Team::new("Alpha"), Team::new("Alpha"), Side::Attack),
        Err(VetoError::InvalidState(_))
    ));
    assert!(matches!(
        CoinFlip::resolve(true, Team::new(" "), Team::new("Beta"), Side::Attack),
        Err(VetoError::InvalidState(_))
    ));
}

#[test]
fn seeded_flip_is_deterministic() {
    let run = || {
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(42);
        (0..16)
            .map(|_| {
                CoinFlip::flip(&mut rng, Team::new("Alpha"), Team::new("Beta"), Side::Attack)
                    .unwrap()
                    .winner
                    .name
            })
            .collect::<Vec<_>>()
    };

    assert_eq!(run(), run());
}

#[test]
fn roughly_fair() {
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(7);

    let alpha_wins = (0..10_000)
        .filter(|_| {
            CoinFlip::flip(&mut rng, Team::new("Alpha"), Team::new("Beta"), Side::Attack)
                .unwrap()
                .winner
                .name
                == "Alpha"
        })
        .count();

    assert!((4_500..=5_500).contains(&alpha_wins), "Alpha won {} of 10000", alpha_wins);
}
