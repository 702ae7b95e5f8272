//! Deck module - the shuffled board of paired cards
//!
//! Cards are stored row-major; the card at index `i` has `CardId(i)`.
//! Every value in `1..=n_pairs` appears on exactly two cards.

use crate::card::Card;
use crate::rng::DeckRng;
use crate::types::{CardId, MAX_PAIRS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
    n_pairs: u8,
}

impl Deck {
    /// Deal `2 * n_pairs` cards in uniformly shuffled order.
    ///
    /// `n_pairs` is clamped to `1..=MAX_PAIRS`.
    pub fn build(n_pairs: u8, rng: &mut DeckRng) -> Self {
        let n_pairs = n_pairs.clamp(1, MAX_PAIRS);
        let mut values = paired_values(n_pairs);
        rng.shuffle(&mut values);
        let deck = Self::with_values(&values, n_pairs);
        debug_assert!(is_paired(&values));
        deck
    }

    /// Lay out an explicit value sequence.
    ///
    /// Returns `None` unless every value in `1..=len/2` appears exactly twice.
    pub fn from_values(values: &[u8]) -> Option<Self> {
        if !is_paired(values) {
            return None;
        }
        Some(Self::with_values(values, (values.len() / 2) as u8))
    }

    fn with_values(values: &[u8], n_pairs: u8) -> Self {
        let cards = values
            .iter()
            .enumerate()
            .map(|(i, &value)| Card::new(CardId(i as u8), value))
            .collect();
        Self { cards, n_pairs }
    }

    pub fn n_pairs(&self) -> u8 {
        self.n_pairs
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.get(id.index())
    }

    pub fn get_mut(&mut self, id: CardId) -> Option<&mut Card> {
        self.cards.get_mut(id.index())
    }

    /// Values in grid order.
    pub fn values(&self) -> impl Iterator<Item = u8> + '_ {
        self.cards.iter().map(Card::value)
    }

    /// Reshuffle in place for a new round; every card ends up face down.
    pub fn redeal(&mut self, rng: &mut DeckRng) {
        let mut values = paired_values(self.n_pairs);
        rng.shuffle(&mut values);
        for (card, value) in self.cards.iter_mut().zip(values) {
            card.deal(value);
        }
    }

    pub fn all_matched(&self) -> bool {
        self.cards.iter().all(Card::is_matched)
    }
}

/// `1, 1, 2, 2, ..., n, n`
pub fn paired_values(n_pairs: u8) -> Vec<u8> {
    (1..=n_pairs).flat_map(|v| [v, v]).collect()
}

/// Check the pairing invariant: each of `1..=len/2` exactly twice.
pub fn is_paired(values: &[u8]) -> bool {
    if values.is_empty() || values.len() % 2 != 0 {
        return false;
    }
    let n_pairs = values.len() / 2;
    if n_pairs > MAX_PAIRS as usize {
        return false;
    }

    let mut counts = [0u8; MAX_PAIRS as usize + 1];
    for &v in values {
        if v == 0 || v as usize > n_pairs {
            return false;
        }
        counts[v as usize] += 1;
    }
    counts[1..=n_pairs].iter().all(|&c| c == 2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CardState, N_PAIRS};

    #[test]
    fn test_build_default_deck() {
        let mut rng = DeckRng::new(1);
        let deck = Deck::build(N_PAIRS, &mut rng);

        assert_eq!(deck.len(), 16);
        assert_eq!(deck.n_pairs(), 8);
        assert!(deck.cards().iter().all(|c| c.state() == CardState::Hidden));
        assert!(is_paired(&deck.values().collect::<Vec<_>>()));
    }

    #[test]
    fn test_ids_are_grid_indices() {
        let deck = Deck::build(N_PAIRS, &mut DeckRng::new(5));
        for (i, card) in deck.cards().iter().enumerate() {
            assert_eq!(card.id(), CardId(i as u8));
        }
    }

    #[test]
    fn test_same_seed_same_deal() {
        let a = Deck::build(N_PAIRS, &mut DeckRng::new(77));
        let b = Deck::build(N_PAIRS, &mut DeckRng::new(77));
        assert_eq!(a, b);
    }

    #[test]
    fn test_from_values_accepts_pairs() {
        let deck = Deck::from_values(&[1, 2, 2, 1]).unwrap();
        assert_eq!(deck.n_pairs(), 2);
        assert_eq!(deck.get(CardId(3)).unwrap().value(), 1);
    }

    #[test]
    fn test_from_values_rejects_bad_multisets() {
        assert!(Deck::from_values(&[]).is_none());
        assert!(Deck::from_values(&[1, 1, 2]).is_none());
        assert!(Deck::from_values(&[1, 1, 1, 2]).is_none());
        assert!(Deck::from_values(&[1, 1, 3, 3]).is_none());
        assert!(Deck::from_values(&[0, 0]).is_none());
    }

    #[test]
    fn test_get_out_of_range() {
        let deck = Deck::from_values(&[1, 1]).unwrap();
        assert!(deck.get(CardId(2)).is_none());
    }

    #[test]
    fn test_build_clamps_pair_count() {
        let mut rng = DeckRng::new(1);

        let empty = Deck::build(0, &mut rng);
        assert_eq!(empty.n_pairs(), 1);
        assert_eq!(empty.len(), 2);
        assert!(is_paired(&empty.values().collect::<Vec<_>>()));

        let oversized = Deck::build(MAX_PAIRS + 1, &mut rng);
        assert_eq!(oversized.n_pairs(), MAX_PAIRS);
        assert_eq!(oversized.len(), MAX_PAIRS as usize * 2);
        assert!(is_paired(&oversized.values().collect::<Vec<_>>()));

        let huge = Deck::build(u8::MAX, &mut rng);
        assert_eq!(huge.n_pairs(), MAX_PAIRS);
    }

    #[test]
    fn test_redeal_hides_every_card() {
        let mut rng = DeckRng::new(3);
        let mut deck = Deck::from_values(&[1, 2, 2, 1, 3, 3]).unwrap();
        deck.get_mut(CardId(0)).unwrap().reveal();
        deck.get_mut(CardId(1)).unwrap().mark_matched();

        deck.redeal(&mut rng);

        assert_eq!(deck.len(), 6);
        assert_eq!(deck.n_pairs(), 3);
        assert!(deck.cards().iter().all(Card::is_hidden));
        assert!(is_paired(&deck.values().collect::<Vec<_>>()));
        for (i, card) in deck.cards().iter().enumerate() {
            assert_eq!(card.id(), CardId(i as u8));
        }
    }

    #[test]
    fn test_all_matched() {
        let mut deck = Deck::from_values(&[1, 2, 2, 1]).unwrap();
        deck.get_mut(CardId(0)).unwrap().mark_matched();
        deck.get_mut(CardId(3)).unwrap().mark_matched();
        assert!(!deck.all_matched());

        deck.get_mut(CardId(1)).unwrap().mark_matched();
        deck.get_mut(CardId(2)).unwrap().mark_matched();
        assert!(deck.all_matched());
    }

    #[test]
    fn test_paired_values() {
        assert_eq!(paired_values(3), vec![1, 1, 2, 2, 3, 3]);
    }
}
