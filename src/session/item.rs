use serde::{Deserialize, Serialize};

/// One learnable question/answer pair. Identity for mastery tracking is the
/// display form alone.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub display: String,
    pub answer: String,
}

impl Item {
    pub fn new(display: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            display: display.into(),
            answer: answer.into(),
        }
    }

    pub fn accepts(&self, text: &str) -> bool {
        normalize_answer(text) == normalize_answer(&self.answer)
    }
}

pub fn normalize_answer(text: &str) -> String {
    text.trim().to_lowercase()
}

/// The fixed universe of items for one session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemSet {
    pub key: String,
    pub title: String,
    items: Vec<Item>,
}

impl ItemSet {
    pub fn new(key: impl Into<String>, title: impl Into<String>, items: Vec<Item>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            items,
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn unique_count(&self) -> usize {
        let mut seen: Vec<&str> = Vec::with_capacity(self.items.len());
        for item in &self.items {
            if !seen.contains(&item.display.as_str()) {
                seen.push(&item.display);
            }
        }
        seen.len()
    }
}
