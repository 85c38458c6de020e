pub mod kana;
pub mod multiply;

use crate::session::item::{Item, ItemSet};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContentGroup {
    Multiplication,
    Hiragana,
    Katakana,
}

impl ContentGroup {
    pub fn as_str(self) -> &'static str {
        match self {
            ContentGroup::Multiplication => "multiply",
            ContentGroup::Hiragana => "hiragana",
            ContentGroup::Katakana => "katakana",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ContentGroup::Multiplication => "Multiplication",
            ContentGroup::Hiragana => "Hiragana",
            ContentGroup::Katakana => "Katakana",
        }
    }
}

/// A selectable content set. `key` is namespaced by group (`hiragana:ka`,
/// `multiply:7`) and is what gets recorded on completion.
#[derive(Clone, Debug)]
pub struct ContentSet {
    pub key: String,
    pub title: String,
    pub group: ContentGroup,
    pub learnable: bool,
    pub items: Vec<Item>,
}

impl ContentSet {
    fn new(group: ContentGroup, id: &str, title: String, learnable: bool, items: Vec<Item>) -> Self {
        Self {
            key: format!("{}:{id}", group.as_str()),
            title,
            group,
            learnable,
            items,
        }
    }

    pub fn item_set(&self) -> ItemSet {
        ItemSet::new(self.key.clone(), self.title.clone(), self.items.clone())
    }
}

fn to_items(chars: &[(&str, &str)]) -> Vec<Item> {
    chars.iter().map(|(g, r)| Item::new(*g, *r)).collect()
}

fn kana_sets(group: ContentGroup, rows: &[kana::KanaRow]) -> Vec<ContentSet> {
    let mut sets: Vec<ContentSet> = rows
        .iter()
        .map(|(row, chars)| {
            let title = if *row == "special" {
                format!("{} special", group.label())
            } else {
                format!("{} {} row", group.label(), row.to_uppercase())
            };
            ContentSet::new(group, row, title, true, to_items(chars))
        })
        .collect();

    let all: Vec<Item> = rows.iter().flat_map(|(_, chars)| to_items(chars)).collect();
    sets.push(ContentSet::new(
        group,
        "all",
        format!("All {}", group.label()),
        true,
        all,
    ));
    sets
}

/// Every content set in menu order.
pub fn catalog() -> Vec<ContentSet> {
    let mut sets: Vec<ContentSet> = multiply::TABLES
        .map(|t| {
            ContentSet::new(
                ContentGroup::Multiplication,
                &t.to_string(),
                format!("{t} times table"),
                false,
                multiply::table_items(t),
            )
        })
        .collect();

    sets.extend(kana_sets(ContentGroup::Hiragana, kana::HIRAGANA_ROWS));
    sets.push(ContentSet::new(
        ContentGroup::Hiragana,
        "frequent",
        "Frequent hiragana words".to_string(),
        true,
        to_items(kana::FREQUENT_WORDS),
    ));
    sets.push(ContentSet::new(
        ContentGroup::Hiragana,
        "everyday",
        "Everyday hiragana words".to_string(),
        true,
        to_items(kana::EVERYDAY_WORDS),
    ));
    sets.extend(kana_sets(ContentGroup::Katakana, kana::KATAKANA_ROWS));
    sets
}

pub fn find(key: &str) -> Option<ContentSet> {
    catalog().into_iter().find(|s| s.key == key)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_catalog_keys_are_unique() {
        let sets = catalog();
        let keys: HashSet<&str> = sets.iter().map(|s| s.key.as_str()).collect();
        assert_eq!(keys.len(), sets.len());
    }

    #[test]
    fn test_no_empty_sets_are_offered() {
        assert!(catalog().iter().all(|s| !s.items.is_empty()));
    }

    #[test]
    fn test_find_known_keys() {
        let ka = find("hiragana:ka").unwrap();
        assert_eq!(ka.title, "Hiragana KA row");
        assert_eq!(ka.items.len(), 5);

        let seven = find("multiply:7").unwrap();
        assert!(!seven.learnable);
        assert_eq!(seven.items.len(), 10);

        assert!(find("multiply:12").is_none());
    }

    #[test]
    fn test_all_set_flattens_rows() {
        let all = find("katakana:all").unwrap();
        assert_eq!(all.items.len(), 46);
        assert_eq!(all.item_set().unique_count(), 46);
        assert_eq!(all.items[0].display, "ア");
    }

    #[test]
    fn test_frequent_words_set() {
        let freq = find("hiragana:frequent").unwrap();
        assert_eq!(freq.items.len(), 10);
        assert!(freq.items.iter().any(|i| i.display == "は" && i.answer == "wa"));
    }

    #[test]
    fn test_everyday_words_set() {
        let everyday = find("hiragana:everyday").unwrap();
        assert!(everyday.learnable);
        assert_eq!(everyday.items.len(), 76);
        // Glossed and plain でんわ are different prompts with one reading.
        assert_eq!(everyday.item_set().unique_count(), everyday.items.len());
        let denwa = everyday.items.iter().filter(|i| i.answer == "denwa").count();
        assert_eq!(denwa, 2);
    }

    #[test]
    fn test_item_set_carries_key_and_title() {
        let set = find("hiragana:special").unwrap().item_set();
        assert_eq!(set.key, "hiragana:special");
        assert_eq!(set.title, "Hiragana special");
        assert_eq!(set.len(), 1);
    }
}
