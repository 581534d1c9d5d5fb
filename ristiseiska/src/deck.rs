use rand::Rng;

use crate::{Card, CardId, DealtCard, GameError, Hand, Player, Rank, Suit};

pub const DECK_SIZE: usize = 52;

/// A full deck in canonical order: hearts, diamonds, clubs, spades, each ace to king.
pub fn build_deck() -> Vec<Card> {
    Suit::ALL
        .iter()
        .flat_map(|&suit| Rank::ALL.iter().map(move |&rank| Card { suit, rank }))
        .collect()
}

/// Returns a uniformly shuffled copy of `deck` (Fisher–Yates).
pub fn shuffle<R: Rng + ?Sized>(deck: &[Card], rng: &mut R) -> Vec<Card> {
    let mut shuffled = deck.to_vec();
    for i in (1..shuffled.len()).rev() {
        let j = rng.gen_range(0..=i);
        shuffled.swap(i, j);
    }
    shuffled
}

/// Deals `deck` round-robin, card `i` going to player `i % players.len()`.
///
/// Each card's [`CardId`] is its position in `deck`. Hands are sorted for display,
/// and replace whatever the players held before.
pub fn deal(players: &[Player], deck: &[Card]) -> Result<Vec<Player>, GameError> {
    if players.is_empty() {
        return Err(GameError::EmptyPlayerSet);
    }
    let mut hands: Vec<Vec<DealtCard>> = vec![Vec::new(); players.len()];
    for (idx, (&card, id)) in deck.iter().zip(0..).enumerate() {
        hands[idx % players.len()].push(DealtCard {
            id: CardId(id),
            card,
        });
    }

    Ok(players
        .iter()
        .zip(hands)
        .map(|(player, cards)| {
            let mut hand = Hand::from_iter(cards);
            hand.sort();
            Player {
                hand,
                ..player.clone()
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use quickcheck::quickcheck;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::seat_players;

    #[test]
    fn deck_has_52_distinct_cards() {
        let deck = build_deck();
        assert_eq!(deck.len(), DECK_SIZE);
        assert_eq!(BTreeSet::from_iter(deck.iter().copied()).len(), DECK_SIZE);
        assert_eq!(deck[0], Card::new(Suit::Hearts, Rank::Ace));
        assert_eq!(deck[51], Card::new(Suit::Spades, Rank::King));
    }

    quickcheck! {
        fn shuffle_is_a_permutation(seed: u64) -> bool {
            let deck = build_deck();
            let mut shuffled = shuffle(&deck, &mut StdRng::seed_from_u64(seed));
            shuffled.sort();
            let mut sorted = deck;
            sorted.sort();
            shuffled == sorted
        }

        fn deal_is_even(num_players: u8, seed: u64) -> bool {
            let num_players = usize::from(num_players % 52) + 1;
            let deck = shuffle(&build_deck(), &mut StdRng::seed_from_u64(seed));
            let players = deal(&seat_players(num_players, 0), &deck).unwrap();
            let sizes: Vec<usize> = players.iter().map(|p| p.hand.len()).collect();
            let min = sizes.iter().min().copied().unwrap();
            let max = sizes.iter().max().copied().unwrap();
            sizes.iter().sum::<usize>() == DECK_SIZE && max - min <= 1
        }
    }

    #[test]
    fn shuffle_does_not_touch_input_and_varies() {
        let deck = build_deck();
        let mut rng = StdRng::seed_from_u64(7);
        let first = shuffle(&deck, &mut rng);
        let second = shuffle(&deck, &mut rng);
        assert_eq!(deck, build_deck());
        assert_ne!(first, second);
        assert_ne!(first, deck);
    }

    #[test]
    fn deal_round_robin_and_sorted() {
        let deck = build_deck();
        let players = deal(&seat_players(3, 1), &deck).unwrap();
        assert_eq!(players.len(), 4);
        for player in &players {
            assert_eq!(player.hand.len(), 13);
            let cards: Vec<Card> = player.hand.cards().collect();
            let mut sorted = cards.clone();
            sorted.sort();
            assert_eq!(cards, sorted);
        }
        // Card i went to player i % 4, and its id is its deck position
        let first = players[1].hand.find(deck[1]).unwrap();
        assert_eq!(first.id, CardId(1));
        assert!(players[0].hand.find(deck[4]).is_some());
    }

    #[test]
    fn deal_to_nobody_fails() {
        assert_eq!(deal(&[], &build_deck()), Err(GameError::EmptyPlayerSet));
    }
}
