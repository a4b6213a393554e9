use piccolo_core::{pick_distinct, resolve_target, split_teams, Category, RngState, TargetPayload};

fn roster(size: usize) -> Vec<String> {
    (0..size).map(|idx| format!("P{idx}")).collect()
}

#[test]
fn single_picks_someone_from_the_roster() {
    let players = roster(4);
    let mut rng = RngState::from_seed(1);
    for _ in 0..50 {
        match resolve_target(Category::Single, &players, &mut rng) {
            TargetPayload::Player(name) => assert!(players.contains(&name)),
            other => panic!("unexpected {other:?}"),
        }
    }
}

#[test]
fn single_eventually_hits_every_player() {
    let players = roster(3);
    let mut rng = RngState::from_seed(2);
    let mut seen = std::collections::HashSet::new();
    for _ in 0..200 {
        if let TargetPayload::Player(name) = resolve_target(Category::Single, &players, &mut rng) {
            seen.insert(name);
        }
    }
    assert_eq!(seen.len(), 3);
}

#[test]
fn duel_players_are_distinct() {
    let players = roster(2);
    let mut rng = RngState::from_seed(3);
    for _ in 0..50 {
        match resolve_target(Category::Duel1v1, &players, &mut rng) {
            TargetPayload::Duel {
                first,
                second: Some(second),
            } => assert_ne!(first, second),
            other => panic!("unexpected {other:?}"),
        }
    }
}

#[test]
fn timed_cards_have_no_target() {
    let mut rng = RngState::from_seed(4);
    assert_eq!(
        resolve_target(Category::TimeBased, &roster(4), &mut rng),
        TargetPayload::None
    );
}

#[test]
fn empty_roster_degrades_to_no_target() {
    let mut rng = RngState::from_seed(5);
    assert_eq!(resolve_target(Category::Single, &[], &mut rng), TargetPayload::None);
    assert_eq!(resolve_target(Category::Duel1v1, &[], &mut rng), TargetPayload::None);
    assert_eq!(
        resolve_target(Category::GroupDuel, &[], &mut rng),
        TargetPayload::Teams {
            team1: Vec::new(),
            team2: Vec::new(),
        }
    );
}

#[test]
fn teams_split_at_ceiling_half() {
    let mut rng = RngState::from_seed(6);
    for size in 1..=7 {
        let players = roster(size);
        let (team1, team2) = split_teams(&players, &mut rng);
        assert_eq!(team1.len(), size.div_ceil(2), "size {size}");
        assert_eq!(team2.len(), size / 2, "size {size}");
        let mut all: Vec<String> = team1.into_iter().chain(team2).collect();
        all.sort();
        assert_eq!(all, players);
    }
}

#[test]
fn pick_distinct_caps_at_roster_size() {
    let mut rng = RngState::from_seed(7);
    let players = roster(3);
    let picked = pick_distinct(&players, 5, &mut rng);
    assert_eq!(picked.len(), 3);
    let picked = pick_distinct(&players, 2, &mut rng);
    assert_eq!(picked.len(), 2);
    assert_ne!(picked[0], picked[1]);
}
