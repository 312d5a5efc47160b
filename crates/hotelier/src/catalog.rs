//! Fixed price lists offered to guests.
//!
//! These are presentation-side data: the front desk accepts any description
//! and price the caller supplies, and the CLI resolves what a guest typed
//! against these lists. Lookups are case-insensitive and return the
//! canonical name, so `pizza=2` is recorded as `Pizza`.

use rust_decimal::Decimal;

/// The food menu with per-item prices.
pub const FOOD_MENU: &[(&str, u32)] = &[
    ("Breakfast Combo", 250),
    ("Lunch Thali", 350),
    ("Dinner Combo", 400),
    ("Sandwich", 150),
    ("Pizza", 450),
    ("Pasta", 300),
    ("Biryani", 350),
    ("Chinese Combo", 400),
    ("South Indian", 200),
    ("Dessert", 150),
];

/// The non-food item list with per-item prices.
pub const ITEM_CATALOG: &[(&str, u32)] = &[
    ("Extra Towels", 50),
    ("Toiletries Kit", 100),
    ("Mineral Water (1L)", 30),
    ("Newspaper", 10),
    ("Laundry Bag", 20),
    ("Iron", 100),
    ("Hair Dryer", 100),
    ("Extra Pillows", 80),
    ("Blanket", 150),
    ("Room Slippers", 120),
];

/// The housekeeping services with flat costs.
pub const HOUSEKEEPING_SERVICES: &[(&str, u32)] = &[
    ("Room Cleaning", 200),
    ("Bed Sheet Change", 150),
    ("Towel Replacement", 150),
    ("Bathroom Cleaning", 400),
    ("Full Service", 700),
];

fn find(entries: &'static [(&'static str, u32)], name: &str) -> Option<(&'static str, Decimal)> {
    let wanted = name.trim().to_lowercase();
    entries
        .iter()
        .find(|(entry, _)| entry.to_lowercase() == wanted)
        .map(|&(entry, price)| (entry, Decimal::from(price)))
}

/// Look up a food item by name. Returns the canonical name and price.
#[must_use]
pub fn find_food(name: &str) -> Option<(&'static str, Decimal)> {
    find(FOOD_MENU, name)
}

/// Look up a non-food item by name. Returns the canonical name and price.
#[must_use]
pub fn find_item(name: &str) -> Option<(&'static str, Decimal)> {
    find(ITEM_CATALOG, name)
}

/// Look up a housekeeping service by name. Returns the canonical name and cost.
#[must_use]
pub fn find_service(name: &str) -> Option<(&'static str, Decimal)> {
    find(HOUSEKEEPING_SERVICES, name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_lookup_is_case_insensitive_and_canonical() {
        let (name, price) = find_food("pizza").unwrap();
        assert_eq!(name, "Pizza");
        assert_eq!(price, dec!(450));

        assert_eq!(find_food(" LUNCH THALI "), Some(("Lunch Thali", dec!(350))));
        assert!(find_food("sushi").is_none());
    }

    #[test]
    fn test_catalogs_are_distinct() {
        assert!(find_item("Iron").is_some());
        assert!(find_food("Iron").is_none());
        assert_eq!(find_service("full service").unwrap().1, dec!(700));
    }
}
