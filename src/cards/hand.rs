//! The hand: a fixed-capacity row of card slots.
//!
//! Slot positions are meaningful (adjacency and "leftmost" traits read
//! them), so removing a card leaves a gap instead of shifting the row.
//! The capacity is fixed when the hand is created.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::card::Card;
use crate::core::{CardId, HandError};

/// Fixed-size row of optional cards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    slots: Vector<Option<Card>>,
}

impl Hand {
    /// Create an empty hand with `capacity` slots.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: std::iter::repeat(None).take(capacity).collect(),
        }
    }

    /// Number of slots.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Card in a slot.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// Iterate slots left to right, gaps included.
    pub fn slots(&self) -> impl Iterator<Item = Option<&Card>> + '_ {
        self.slots.iter().map(Option::as_ref)
    }

    /// Iterate occupied slots left to right.
    pub fn cards(&self) -> impl Iterator<Item = &Card> + '_ {
        self.slots.iter().flatten()
    }

    /// Slot index holding a card.
    #[must_use]
    pub fn position(&self, id: CardId) -> Option<usize> {
        self.slots
            .iter()
            .position(|slot| slot.as_ref().is_some_and(|c| c.id == id))
    }

    /// Look up a card by id.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.position(id).and_then(|i| self.get(i))
    }

    /// Index of the leftmost empty slot.
    #[must_use]
    pub fn first_empty(&self) -> Option<usize> {
        self.slots.iter().position(Option::is_none)
    }

    /// Index of the leftmost occupied slot.
    #[must_use]
    pub fn first_occupied(&self) -> Option<usize> {
        self.slots.iter().position(Option::is_some)
    }

    /// Number of empty slots.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_none()).count()
    }

    /// Number of cards held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.capacity() - self.empty_count()
    }

    /// Check if no card is held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check if every slot is occupied.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.first_empty().is_none()
    }

    /// Put a card into the leftmost empty slot, returning the slot index.
    pub fn place(&mut self, card: Card) -> Result<usize, HandError> {
        let index = self.first_empty().ok_or(HandError::Full {
            capacity: self.capacity(),
        })?;
        self.slots.set(index, Some(card));
        Ok(index)
    }

    /// Overwrite a slot, returning its previous content.
    pub fn set_slot(&mut self, index: usize, card: Option<Card>) -> Result<Option<Card>, HandError> {
        if index >= self.capacity() {
            return Err(HandError::SlotOutOfRange {
                index,
                capacity: self.capacity(),
            });
        }
        Ok(self.slots.set(index, card))
    }

    /// Take a card out of its slot, leaving a gap.
    pub fn remove(&mut self, id: CardId) -> Result<Card, HandError> {
        let index = self.position(id).ok_or(HandError::NotFound(id))?;
        self.slots
            .set(index, None)
            .ok_or(HandError::NotFound(id))
    }

    /// Apply `f` to the card with `id`. Returns false if it is not held.
    pub fn update(&mut self, id: CardId, f: impl FnOnce(&mut Card)) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };
        if let Some(Some(card)) = self.slots.get_mut(index) {
            f(card);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::UnitType;

    fn card(id: u32) -> Card {
        Card::new(CardId::new(id), "c_test", UnitType::Melee)
    }

    #[test]
    fn test_new_hand_is_empty() {
        let hand = Hand::new(3);
        assert_eq!(hand.capacity(), 3);
        assert!(hand.is_empty());
        assert_eq!(hand.first_empty(), Some(0));
    }

    #[test]
    fn test_place_until_full() {
        let mut hand = Hand::new(2);
        assert_eq!(hand.place(card(1)), Ok(0));
        assert_eq!(hand.place(card(2)), Ok(1));
        assert!(hand.is_full());
        assert_eq!(hand.place(card(3)), Err(HandError::Full { capacity: 2 }));
    }

    #[test]
    fn test_remove_leaves_gap() {
        let mut hand = Hand::new(3);
        hand.place(card(1)).unwrap();
        hand.place(card(2)).unwrap();

        let removed = hand.remove(CardId::new(1)).unwrap();
        assert_eq!(removed.id, CardId::new(1));
        assert_eq!(hand.capacity(), 3);
        assert_eq!(hand.position(CardId::new(2)), Some(1));
        assert_eq!(hand.first_empty(), Some(0));
        assert_eq!(hand.first_occupied(), Some(1));
        assert_eq!(hand.remove(CardId::new(1)), Err(HandError::NotFound(CardId::new(1))));
    }

    #[test]
    fn test_update() {
        let mut hand = Hand::new(2);
        hand.place(card(1)).unwrap();

        assert!(hand.update(CardId::new(1), |c| c.unit_count += 4));
        assert_eq!(hand.card(CardId::new(1)).map(|c| c.unit_count), Some(5));
        assert!(!hand.update(CardId::new(9), |c| c.unit_count = 0));
    }

    #[test]
    fn test_set_slot_bounds() {
        let mut hand = Hand::new(1);
        assert!(hand.set_slot(0, Some(card(1))).is_ok());
        assert_eq!(
            hand.set_slot(1, None),
            Err(HandError::SlotOutOfRange { index: 1, capacity: 1 })
        );
    }
}
