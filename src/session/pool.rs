use rand::Rng;

use crate::session::error::SessionError;
use crate::session::item::{Item, ItemSet};

/// Not-yet-mastered items of a quiz session. Drawing never removes; only
/// confirmed mastery does.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ItemPool {
    items: Vec<Item>,
}

impl ItemPool {
    /// Builds the pool deduplicated by display form, first occurrence wins.
    pub fn initialize(set: &ItemSet) -> Result<Self, SessionError> {
        let mut items: Vec<Item> = Vec::with_capacity(set.len());
        for item in set.items() {
            if !items.iter().any(|existing| existing.display == item.display) {
                items.push(item.clone());
            }
        }
        if items.is_empty() {
            return Err(SessionError::EmptySet);
        }
        Ok(Self { items })
    }

    /// Uniform draw over what is left. `PoolExhausted` doubles as the
    /// completion signal.
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&Item, SessionError> {
        if self.items.is_empty() {
            return Err(SessionError::PoolExhausted);
        }
        let idx = rng.gen_range(0..self.items.len());
        Ok(&self.items[idx])
    }

    /// Removes the item with this display form. Returns false (and does
    /// nothing) if it was already gone.
    pub fn remove(&mut self, display: &str) -> bool {
        match self.items.iter().position(|item| item.display == display) {
            Some(pos) => {
                self.items.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, display: &str) -> bool {
        self.items.iter().any(|item| item.display == display)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;

    fn kana_set() -> ItemSet {
        ItemSet::new(
            "hiragana:test",
            "Test",
            vec![
                Item::new("あ", "a"),
                Item::new("い", "i"),
                Item::new("う", "u"),
            ],
        )
    }

    #[test]
    fn test_initialize_dedupes_first_occurrence_wins() {
        let set = ItemSet::new(
            "mixed",
            "Mixed",
            vec![
                Item::new("は", "ha"),
                Item::new("の", "no"),
                Item::new("は", "wa"),
            ],
        );
        let pool = ItemPool::initialize(&set).unwrap();
        assert_eq!(pool.len(), 2);
        let ha = pool.iter().find(|i| i.display == "は").unwrap();
        assert_eq!(ha.answer, "ha");
    }

    #[test]
    fn test_initialize_empty_set_fails() {
        let set = ItemSet::new("empty", "Empty", Vec::new());
        assert_eq!(ItemPool::initialize(&set), Err(SessionError::EmptySet));
    }

    #[test]
    fn test_draw_does_not_remove() {
        let pool = ItemPool::initialize(&kana_set()).unwrap();
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..20 {
            let item = pool.draw(&mut rng).unwrap();
            assert!(pool.contains(&item.display));
        }
        assert_eq!(pool.len(), 3);
    }

    #[test]
    fn test_draw_reaches_every_item() {
        let pool = ItemPool::initialize(&kana_set()).unwrap();
        let mut rng = SmallRng::seed_from_u64(42);
        let seen: HashSet<String> = (0..200)
            .map(|_| pool.draw(&mut rng).unwrap().display.clone())
            .collect();
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_draw_from_empty_pool_is_exhausted() {
        let mut pool = ItemPool::initialize(&kana_set()).unwrap();
        for d in ["あ", "い", "う"] {
            pool.remove(d);
        }
        let mut rng = SmallRng::seed_from_u64(1);
        assert_eq!(pool.draw(&mut rng), Err(SessionError::PoolExhausted));
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut once = ItemPool::initialize(&kana_set()).unwrap();
        let mut twice = once.clone();

        assert!(once.remove("い"));
        assert!(twice.remove("い"));
        assert!(!twice.remove("い"));

        assert_eq!(once, twice);
        assert_eq!(twice.len(), 2);
        assert!(!twice.contains("い"));
    }

    #[test]
    fn test_remove_unknown_display_is_noop() {
        let mut pool = ItemPool::initialize(&kana_set()).unwrap();
        assert!(!pool.remove("ん"));
        assert_eq!(pool.len(), 3);
    }
}
