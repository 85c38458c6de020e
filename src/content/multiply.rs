use crate::session::item::Item;

pub const TABLES: std::ops::RangeInclusive<u32> = 2..=9;
pub const FACTORS: std::ops::RangeInclusive<u32> = 1..=10;

/// `n × table` for every factor, answered with the product.
pub fn table_items(table: u32) -> Vec<Item> {
    FACTORS
        .map(|n| Item::new(format!("{n} × {table}"), (n * table).to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_has_ten_distinct_questions() {
        let items = table_items(7);
        assert_eq!(items.len(), 10);
        assert_eq!(items[0].display, "1 × 7");
        assert_eq!(items[9].answer, "70");
    }

    #[test]
    fn test_products_are_plain_decimal() {
        for item in table_items(9) {
            assert!(item.answer.chars().all(|c| c.is_ascii_digit()));
        }
        assert!(table_items(3).iter().any(|i| i.display == "4 × 3" && i.accepts(" 12")));
    }
}
