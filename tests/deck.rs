//! Deck integration tests.

use core::ptr;
use std::collections::{HashMap, HashSet};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use cardeck::{
    BackColor, Card, CardAssets, CardId, DECK_SIZE, Deck, DeckOptions, InvalidArgument,
    MemoryAssets, Suit,
};

fn assets() -> CardAssets<MemoryAssets> {
    CardAssets::new(MemoryAssets::standard())
}

fn deck(assets: &CardAssets<MemoryAssets>, color: BackColor, seed: u64) -> Deck {
    Deck::new(assets, DeckOptions::default().with_color(color), seed).unwrap()
}

fn deal_all(deck: &mut Deck) -> Vec<CardId> {
    let mut ids = Vec::new();
    while let Some(card) = deck.deal() {
        ids.push(card.id());
    }
    ids
}

fn assert_complete(ids: &[CardId]) {
    assert_eq!(ids.len(), DECK_SIZE);
    let distinct: HashSet<CardId> = ids.iter().copied().collect();
    assert_eq!(distinct.len(), DECK_SIZE);
    for id in CardId::all() {
        assert!(distinct.contains(&id), "missing {id}");
    }
}

#[test]
fn red_deck_deals_every_card_once_then_reshuffles() {
    let assets = assets();
    let mut deck = deck(&assets, BackColor::Red, 42);

    let mut dealt: HashSet<Card> = HashSet::new();
    for _ in 0..DECK_SIZE {
        let card = deck.deal().cloned().unwrap();
        assert!(dealt.insert(card));
    }

    assert_eq!(dealt.len(), 52);
    for suit in Suit::ALL {
        for rank in 1..=13 {
            assert!(dealt.contains(deck.lookup(suit, rank).unwrap()));
        }
    }

    assert!(deck.deal().is_none());
    deck.shuffle();
    assert_eq!(deck.remaining(), 52);
}

#[test]
fn new_deck_is_complete() {
    let assets = assets();
    let mut deck = deck(&assets, BackColor::Blue, 1);

    assert_eq!(deck.remaining(), DECK_SIZE);
    assert_eq!(deck.dealt(), 0);
    assert_complete(&deal_all(&mut deck));
}

#[test]
fn shuffle_keeps_deck_complete() {
    let assets = assets();
    let mut deck = deck(&assets, BackColor::Blue, 2);

    for dealt_before in [0, 1, 20, 52] {
        for _ in 0..dealt_before {
            deck.deal();
        }
        deck.shuffle();
        assert_eq!(deck.dealt(), 0);
        assert_complete(&deal_all(&mut deck));
    }
}

#[test]
fn exhausted_deck_stays_empty() {
    let assets = assets();
    let mut deck = deck(&assets, BackColor::Red, 3);

    for expected in (0..DECK_SIZE).rev() {
        assert!(deck.deal().is_some());
        assert_eq!(deck.remaining(), expected);
    }

    assert!(deck.is_empty());
    for _ in 0..3 {
        assert!(deck.deal().is_none());
        assert_eq!(deck.remaining(), 0);
        assert_eq!(deck.dealt(), DECK_SIZE);
    }
}

#[test]
fn partial_deal_then_shuffle_restores_all_cards() {
    let assets = assets();
    let mut deck = deck(&assets, BackColor::Red, 4);

    for _ in 0..10 {
        deck.deal();
    }
    assert_eq!(deck.remaining(), 42);

    deck.shuffle();
    assert_eq!(deck.remaining(), 52);
    assert_complete(&deal_all(&mut deck));
}

#[test]
fn lookup_is_identity_stable() {
    let assets = assets();
    let mut deck = deck(&assets, BackColor::Blue, 5);

    let ace: *const Card = deck.lookup(Suit::Spades, 1).unwrap();
    assert!(ptr::eq(ace, deck.lookup(Suit::Spades, 1).unwrap()));

    for _ in 0..30 {
        deck.deal();
    }
    assert!(ptr::eq(ace, deck.lookup(Suit::Spades, 1).unwrap()));

    deck.shuffle();
    deck.shuffle();
    assert!(ptr::eq(ace, deck.lookup(Suit::Spades, 1).unwrap()));
}

#[test]
fn dealt_cards_are_the_lookup_instances() {
    let assets = assets();
    let mut deck = deck(&assets, BackColor::Red, 6);

    for _ in 0..DECK_SIZE {
        let card = deck.deal().unwrap();
        let dealt: *const Card = card;
        let id = card.id();
        assert!(ptr::eq(dealt, deck.card(id)));
    }
}

#[test]
fn lookup_matches_requested_identity() {
    let assets = assets();
    let deck = deck(&assets, BackColor::Red, 7);

    for suit in Suit::ALL {
        for rank in 1..=13 {
            let card = deck.lookup(suit, rank).unwrap();
            assert_eq!(card.suit(), suit);
            assert_eq!(card.rank().get(), rank);
        }
    }

    let ids: Vec<CardId> = deck.cards().map(Card::id).collect();
    assert_eq!(ids, CardId::all().collect::<Vec<_>>());
}

#[test]
fn lookup_rejects_out_of_range_ranks() {
    let assets = assets();
    let deck = deck(&assets, BackColor::Red, 8);

    assert_eq!(
        deck.lookup(Suit::Clubs, 0).unwrap_err(),
        InvalidArgument::Rank(0)
    );
    assert_eq!(
        deck.lookup(Suit::Clubs, 14).unwrap_err(),
        InvalidArgument::Rank(14)
    );
    assert_eq!(
        deck.lookup(Suit::Hearts, u8::MAX).unwrap_err(),
        InvalidArgument::Rank(u8::MAX)
    );
}

#[test]
fn cards_from_different_decks_are_equal() {
    let assets = assets();
    let red = deck(&assets, BackColor::Red, 9);
    let blue = deck(&assets, BackColor::Blue, 10);

    for suit in Suit::ALL {
        for rank in 1..=13 {
            let a = red.lookup(suit, rank).unwrap();
            let b = blue.lookup(suit, rank).unwrap();
            assert_eq!(a, b);
            assert_ne!(a.back_image(), b.back_image());
        }
    }

    let reds: HashSet<Card> = red.cards().cloned().collect();
    assert!(blue.cards().all(|card| reds.contains(card)));
}

#[test]
fn each_suit_has_thirteen_ranks() {
    let assets = assets();
    let mut deck = deck(&assets, BackColor::Blue, 11);
    deck.shuffle();

    let mut suits: HashMap<Suit, HashSet<u8>> = HashMap::new();
    while let Some(card) = deck.deal() {
        suits.entry(card.suit()).or_default().insert(card.rank().get());
    }

    assert_eq!(suits.len(), 4);
    for ranks in suits.values() {
        assert_eq!(ranks.len(), 13);
        assert!((1..=13).all(|rank| ranks.contains(&rank)));
    }
}

#[test]
fn full_deal_has_thirteen_hearts() {
    let assets = assets();
    let mut deck = deck(&assets, BackColor::Blue, 12);
    deck.shuffle();

    let mut hearts = 0;
    for _ in 0..DECK_SIZE {
        if Suit::Hearts.contains(deck.deal().unwrap()) {
            hearts += 1;
        }
    }

    assert_eq!(deck.remaining(), 0);
    assert_eq!(hearts, 13);
}

#[test]
fn same_seed_gives_same_order() {
    let assets = assets();
    let mut a = deck(&assets, BackColor::Red, 1234);
    let mut b = deck(&assets, BackColor::Blue, 1234);
    assert_eq!(deal_all(&mut a), deal_all(&mut b));

    a.shuffle();
    b.shuffle();
    assert_eq!(deal_all(&mut a), deal_all(&mut b));
}

#[test]
fn different_seeds_give_different_orders() {
    let assets = assets();
    let mut a = deck(&assets, BackColor::Red, 1);
    let mut b = deck(&assets, BackColor::Red, 2);
    assert_ne!(deal_all(&mut a), deal_all(&mut b));
}

#[test]
fn shuffle_changes_order() {
    let assets = assets();
    let mut deck = deck(&assets, BackColor::Red, 13);

    let first = deal_all(&mut deck);
    deck.shuffle();
    let second = deal_all(&mut deck);

    assert_ne!(first, second);
}

#[test]
fn shuffle_positions_are_roughly_uniform() {
    const ROUNDS: usize = 5200;

    let assets = assets();
    let mut deck = deck(&assets, BackColor::Blue, 2024);
    let mut counts = vec![[0_u32; DECK_SIZE]; DECK_SIZE];

    for _ in 0..ROUNDS {
        deck.shuffle();
        for (position, id) in deal_all(&mut deck).into_iter().enumerate() {
            counts[id.index()][position] += 1;
        }
    }

    // Expected count per cell is 100.
    for card in &counts {
        for &count in card {
            assert!((40..=165).contains(&count), "count {count} out of range");
        }
    }
}

#[test]
fn initial_order_is_roughly_uniform() {
    const DECKS: u64 = 2600;

    let assets = assets();
    let mut first = [0_u32; DECK_SIZE];

    for seed in 0..DECKS {
        let mut deck = deck(&assets, BackColor::Red, seed);
        first[deck.deal().unwrap().id().index()] += 1;
    }

    // Expected count per card is 50.
    for &count in &first {
        assert!((15..=90).contains(&count), "count {count} out of range");
    }
}

/// Replays the deck's draws: one inside-out pass while building, then one
/// descending Fisher-Yates pass per shuffle.
fn expected_orders(seed: u64, shuffles: usize) -> Vec<Vec<usize>> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut order: Vec<usize> = Vec::with_capacity(DECK_SIZE);
    for k in 0..DECK_SIZE {
        let r = rng.random_range(0..=k);
        order.push(k);
        order[k] = order[r];
        order[r] = k;
    }

    let mut orders = vec![order.clone()];
    for _ in 0..shuffles {
        for i in (1..DECK_SIZE).rev() {
            let j = rng.random_range(0..=i);
            order.swap(i, j);
        }
        orders.push(order.clone());
    }
    orders
}

#[test]
fn deal_order_follows_fisher_yates_draws() {
    let assets = assets();

    for seed in [0, 7, 42, 2024] {
        let expected = expected_orders(seed, 3);
        let mut deck = deck(&assets, BackColor::Red, seed);

        for (round, order) in expected.iter().enumerate() {
            if round > 0 {
                deck.shuffle();
            }
            let dealt: Vec<usize> = deal_all(&mut deck).iter().map(|id| id.index()).collect();
            assert_eq!(&dealt, order, "seed {seed}, round {round}");
        }
    }
}

#[test]
fn partial_deal_does_not_consume_draws() {
    let assets = assets();
    let expected = expected_orders(5, 1);
    let mut deck = deck(&assets, BackColor::Blue, 5);

    for _ in 0..17 {
        deck.deal();
    }
    deck.shuffle();

    let dealt: Vec<usize> = deal_all(&mut deck).iter().map(|id| id.index()).collect();
    assert_eq!(dealt, expected[1]);
}

#[test]
fn from_entropy_builds_complete_deck() {
    let assets = assets();
    let mut deck =
        Deck::from_entropy(&assets, DeckOptions::default().with_color(BackColor::Red)).unwrap();
    assert_complete(&deal_all(&mut deck));
}
