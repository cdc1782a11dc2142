use veto::{GameTitle, MapPool, SubMode, VetoError};

use pretty_assertions::assert_eq;

#[test]
fn canonical_pools() {
    let pool = MapPool::for_title(GameTitle::CallOfDuty);

    assert_eq!(
        vec![SubMode::Hardpoint, SubMode::SearchAndDestroy, SubMode::Control],
        pool.modes().collect::<Vec<_>>()
    );
    assert_eq!(13, pool.total_remaining());
    assert_eq!(
        vec!["Hacienda", "Protocol", "Vault"],
        pool.remaining(SubMode::Control)
    );

    let pool = MapPool::for_title(GameTitle::Valorant);
    assert_eq!(vec![SubMode::Standard], pool.modes().collect::<Vec<_>>());
    assert_eq!(7, pool.total_remaining());
    assert!(pool.remaining(SubMode::Hardpoint).is_empty());
}

#[test]
fn remove_and_add() {
    let mut pool = MapPool::for_title(GameTitle::CallOfDuty);

    pool.remove(SubMode::Hardpoint, "Red Card").unwrap();
    assert!(!pool.contains(SubMode::Hardpoint, "Red Card"));
    assert!(pool.contains(SubMode::SearchAndDestroy, "Red Card"));

    pool.add(SubMode::Hardpoint, "Red Card").unwrap();
    assert_eq!(
        vec!["Hacienda", "Rewind", "Skyline", "Vault", "Red Card"],
        pool.remaining(SubMode::Hardpoint)
    );
}

#[test]
fn remove_missing() {
    let mut pool = MapPool::for_title(GameTitle::Valorant);

    assert_eq!(
        Err(VetoError::NotFound {
            mode: SubMode::Standard,
            map: "Dust2".to_owned()
        }),
        pool.remove(SubMode::Standard, "Dust2")
    );
    assert!(matches!(
        pool.remove(SubMode::Control, "Vault"),
        Err(VetoError::NotFound { .. })
    ));
}

#[test]
fn add_duplicate() {
    let mut pool = MapPool::for_title(GameTitle::Valorant);

    assert!(matches!(
        pool.add(SubMode::Standard, "Bind"),
        Err(VetoError::InvalidState(_))
    ));
    assert_eq!(7, pool.total_remaining());
}

#[test]
fn reset() {
    let mut pool = MapPool::for_title(GameTitle::Valorant);
    pool.remove(SubMode::Standard, "Abyss").unwrap();
    pool.remove(SubMode::Standard, "Lotus").unwrap();
    pool.add(SubMode::Standard, "Abyss").unwrap();

    pool.reset();

    assert_eq!(MapPool::for_title(GameTitle::Valorant), pool);
}
