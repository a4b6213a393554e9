use piccolo_core::{
    select_balanced, BalancedSelector, Card, Category, RngState, SelectionWarning,
};

fn make_pool(single: usize, timed: usize, duel: usize, group: usize) -> Vec<Card> {
    let mut pool = Vec::new();
    for idx in 0..single {
        pool.push(Card::new(format!("Bois {idx} gorgées"), 1));
    }
    for idx in 0..timed {
        pool.push(Card::new(format!("Danse pendant {} secondes", idx + 10), 2));
    }
    for idx in 0..duel {
        pool.push(Card::new(format!("Duel numéro {idx}"), 3));
    }
    for idx in 0..group {
        pool.push(Card::new(format!("Tout le monde boit {idx}"), 4));
    }
    pool
}

fn count(cards: &[Card], category: Category) -> usize {
    cards.iter().filter(|card| card.category() == category).count()
}

fn assert_drawn_from(pool: &[Card], drawn: &[Card]) {
    let mut remaining = pool.to_vec();
    for card in drawn {
        let idx = remaining
            .iter()
            .position(|candidate| candidate == card)
            .unwrap_or_else(|| panic!("card not in pool: {card:?}"));
        remaining.swap_remove(idx);
    }
}

#[test]
fn quota_is_ten_percent_rounded_up_with_floor_of_one() {
    let selector = BalancedSelector::default();
    assert_eq!(selector.quota(0), 0);
    assert_eq!(selector.quota(1), 1);
    assert_eq!(selector.quota(5), 1);
    assert_eq!(selector.quota(10), 1);
    assert_eq!(selector.quota(20), 2);
    assert_eq!(selector.quota(21), 3);
}

#[test]
fn balanced_deck_for_four_player_scenario() {
    let pool = make_pool(20, 5, 5, 5);
    for seed in 0..64 {
        let mut rng = RngState::from_seed(seed);
        let deck = select_balanced(&pool, 20, &mut rng);
        assert_eq!(deck.len(), 20);
        for category in Category::MINORITY {
            assert!(
                count(&deck, category) >= 2,
                "seed {seed}: {category} under quota"
            );
        }
        assert_drawn_from(&pool, &deck);
    }
}

#[test]
fn length_is_min_of_request_and_pool() {
    let pool = make_pool(6, 2, 2, 2);
    for requested in [0usize, 1, 2, 3, 5, 11, 12, 13, 50] {
        let mut rng = RngState::from_seed(requested as u64);
        let deck = select_balanced(&pool, requested, &mut rng);
        assert_eq!(deck.len(), requested.min(pool.len()), "requested {requested}");
        assert_drawn_from(&pool, &deck);
    }
}

#[test]
fn whole_pool_returned_when_request_exceeds_it() {
    let pool = make_pool(3, 1, 1, 1);
    let mut rng = RngState::from_seed(9);
    let selection = BalancedSelector::default().select(&pool, 40, &mut rng);
    let mut drawn = selection.cards.clone();
    let mut expected = pool.clone();
    drawn.sort_by(|a, b| a.text.cmp(&b.text));
    expected.sort_by(|a, b| a.text.cmp(&b.text));
    assert_eq!(drawn, expected);
    assert!(selection.warnings.contains(&SelectionWarning::PoolTooSmall {
        requested: 40,
        available: 6,
    }));
}

#[test]
fn missing_category_degrades_without_failing() {
    let pool = make_pool(15, 4, 4, 0);
    let mut rng = RngState::from_seed(3);
    let selection = BalancedSelector::default().select(&pool, 20, &mut rng);
    assert_eq!(selection.cards.len(), 20);
    assert_eq!(count(&selection.cards, Category::GroupDuel), 0);
    assert!(count(&selection.cards, Category::TimeBased) >= 2);
    assert!(count(&selection.cards, Category::Duel1v1) >= 2);
    assert_eq!(
        selection.warnings,
        vec![SelectionWarning::QuotaShort {
            category: Category::GroupDuel,
            wanted: 2,
            available: 0,
        }]
    );
}

#[test]
fn tiny_target_never_overshoots() {
    let pool = make_pool(4, 4, 4, 4);
    for seed in 0..32 {
        let mut rng = RngState::from_seed(seed);
        assert_eq!(select_balanced(&pool, 1, &mut rng).len(), 1);
        assert_eq!(select_balanced(&pool, 2, &mut rng).len(), 2);
    }
}

#[test]
fn duplicate_cards_are_distinct_draws() {
    let pool = vec![Card::new("Bois", 1); 3];
    let mut rng = RngState::from_seed(1);
    let deck = select_balanced(&pool, 3, &mut rng);
    assert_eq!(deck, pool);
}

#[test]
fn same_seed_same_deck() {
    let pool = make_pool(20, 5, 5, 5);
    let first = select_balanced(&pool, 20, &mut RngState::from_seed(42));
    let second = select_balanced(&pool, 20, &mut RngState::from_seed(42));
    assert_eq!(first, second);
}

#[test]
fn custom_ratio_raises_quota() {
    let pool = make_pool(30, 10, 10, 10);
    let selector = BalancedSelector::new(0.25);
    assert_eq!(selector.quota(20), 5);
    for seed in 0..16 {
        let deck = selector.select(&pool, 20, &mut RngState::from_seed(seed)).cards;
        for category in Category::MINORITY {
            assert!(count(&deck, category) >= 5);
        }
    }
}
