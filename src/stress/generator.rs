use chrono::{Duration, NaiveDate};
use rand::Rng;

use crate::models::Item;

/// A small pool so generated catalogs regularly contain duplicate names.
const NAMES: [&str; 12] = [
    "Algodao",
    "Atadura",
    "Cateter",
    "Esparadrapo",
    "Gaze",
    "Luva",
    "Mascara",
    "Seringa",
    "Soro",
    "Sonda",
    "Termometro",
    "Touca",
];

const CATEGORIES: [&str; 4] = ["Curativos", "EPI", "Fluidos", "Instrumentos"];

/// Random item list of `0..=max_items` records.
///
/// Roughly a third of the items are undated, prices are whole cents and
/// quantities straddle the ideal so both critical and healthy items appear.
pub fn random_catalog(rng: &mut impl Rng, max_items: usize) -> Vec<Item> {
    let count = rng.gen_range(0..=max_items);
    let base = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap_or_default();

    (0..count)
        .map(|i| {
            let ideal = rng.gen_range(1..=50u32);
            let quantity = rng.gen_range(0..=ideal + 5);
            let cents = rng.gen_range(0..=2_000u32);
            let expiry_date = if rng.gen_bool(0.35) {
                None
            } else {
                Some(base + Duration::days(rng.gen_range(0..=1_500)))
            };

            Item {
                id: i as u32 + 1,
                name: NAMES[rng.gen_range(0..NAMES.len())].to_string(),
                category: CATEGORIES[rng.gen_range(0..CATEGORIES.len())].to_string(),
                quantity,
                location: format!("Shelf {}", rng.gen_range(1..=9)),
                expiry_date,
                unit_price: f64::from(cents) / 100.0,
                ideal_quantity: ideal,
            }
        })
        .collect()
}

/// Budget in `[0, max_budget]`, sometimes exactly zero, in whole cents.
pub fn random_budget(rng: &mut impl Rng, max_budget: f64) -> f64 {
    if max_budget <= 0.0 || rng.gen_bool(0.1) {
        return 0.0;
    }
    let cents = rng.gen_range(0.0..=max_budget * 100.0).floor();
    cents / 100.0
}
