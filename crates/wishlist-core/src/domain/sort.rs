//! Wish Ordering
//!
//! The list view is ordered by price first and creation date second. Date
//! direction only decides between wishes that cost the same.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::wish::Wish;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortByDate {
    #[default]
    Newest,
    Oldest,
}

impl SortByDate {
    pub const ALL: [SortByDate; 2] = [SortByDate::Newest, SortByDate::Oldest];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortByDate::Newest => "newest",
            SortByDate::Oldest => "oldest",
        }
    }

    /// Unknown values fall back to the default
    pub fn from_str(s: &str) -> Self {
        match s {
            "oldest" => SortByDate::Oldest,
            _ => SortByDate::Newest,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortByDate::Newest => "Newest",
            SortByDate::Oldest => "Oldest",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortByPrice {
    #[default]
    HighToLow,
    LowToHigh,
}

impl SortByPrice {
    pub const ALL: [SortByPrice; 2] = [SortByPrice::HighToLow, SortByPrice::LowToHigh];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortByPrice::HighToLow => "high-to-low",
            SortByPrice::LowToHigh => "low-to-high",
        }
    }

    /// Unknown values fall back to the default
    pub fn from_str(s: &str) -> Self {
        match s {
            "low-to-high" => SortByPrice::LowToHigh,
            _ => SortByPrice::HighToLow,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortByPrice::HighToLow => "Price: High to Low",
            SortByPrice::LowToHigh => "Price: Low to High",
        }
    }
}

/// Price per `by_price`, then creation time per `by_date`.
///
/// Unparseable timestamps count as older than any parseable one.
pub fn compare_wishes(a: &Wish, b: &Wish, by_date: SortByDate, by_price: SortByPrice) -> Ordering {
    let price = match by_price {
        SortByPrice::HighToLow => b.price.total_cmp(&a.price),
        SortByPrice::LowToHigh => a.price.total_cmp(&b.price),
    };
    price.then_with(|| {
        let (a_at, b_at) = (a.timestamp(), b.timestamp());
        match by_date {
            SortByDate::Newest => b_at.cmp(&a_at),
            SortByDate::Oldest => a_at.cmp(&b_at),
        }
    })
}

/// Sorted copy of `wishes`. Full ties keep collection order.
pub fn sorted_view(wishes: &[Wish], by_date: SortByDate, by_price: SortByPrice) -> Vec<Wish> {
    let mut sorted = wishes.to_vec();
    sorted.sort_by(|a, b| compare_wishes(a, b, by_date, by_price));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::WishId;

    fn make_wish(id: &str, price: f64, created_at: &str) -> Wish {
        Wish {
            id: WishId::new(id),
            title: format!("Wish {}", id),
            description: "desc".to_string(),
            price,
            image_url: "https://img.test/x.jpg".to_string(),
            created_at: created_at.to_string(),
        }
    }

    fn ids(wishes: &[Wish]) -> Vec<&str> {
        wishes.iter().map(|w| w.id.as_str()).collect()
    }

    #[test]
    fn test_price_dominates_date() {
        let a = make_wish("A", 10.0, "2026-01-01T00:00:00.000Z");
        let b = make_wish("B", 20.0, "2026-02-01T00:00:00.000Z");
        let wishes = vec![a, b];

        for by_date in SortByDate::ALL {
            let sorted = sorted_view(&wishes, by_date, SortByPrice::HighToLow);
            assert_eq!(ids(&sorted), vec!["B", "A"]);
        }
        for by_date in SortByDate::ALL {
            let sorted = sorted_view(&wishes, by_date, SortByPrice::LowToHigh);
            assert_eq!(ids(&sorted), vec!["A", "B"]);
        }
    }

    #[test]
    fn test_date_breaks_price_ties() {
        let wishes = vec![
            make_wish("old", 50.0, "2025-06-01T00:00:00.000Z"),
            make_wish("new", 50.0, "2026-06-01T00:00:00.000Z"),
            make_wish("cheap", 5.0, "2026-09-01T00:00:00.000Z"),
        ];

        let newest = sorted_view(&wishes, SortByDate::Newest, SortByPrice::HighToLow);
        assert_eq!(ids(&newest), vec!["new", "old", "cheap"]);

        let oldest = sorted_view(&wishes, SortByDate::Oldest, SortByPrice::HighToLow);
        assert_eq!(ids(&oldest), vec!["old", "new", "cheap"]);
    }

    #[test]
    fn test_full_ties_keep_collection_order() {
        let wishes = vec![
            make_wish("first", 10.0, "2026-01-01"),
            make_wish("second", 10.0, "2026-01-01"),
            make_wish("third", 10.0, "2026-01-01"),
        ];
        let sorted = sorted_view(&wishes, SortByDate::Newest, SortByPrice::LowToHigh);
        assert_eq!(ids(&sorted), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_unparseable_dates_sort_oldest() {
        let wishes = vec![
            make_wish("broken", 10.0, "not a date"),
            make_wish("valid", 10.0, "2020-01-01"),
        ];
        let newest = sorted_view(&wishes, SortByDate::Newest, SortByPrice::HighToLow);
        assert_eq!(ids(&newest), vec!["valid", "broken"]);
        let oldest = sorted_view(&wishes, SortByDate::Oldest, SortByPrice::HighToLow);
        assert_eq!(ids(&oldest), vec!["broken", "valid"]);
    }

    #[test]
    fn test_sorted_view_is_idempotent() {
        let wishes = vec![
            make_wish("1", 3.0, "2026-01-03"),
            make_wish("2", 1.0, "2026-01-01"),
            make_wish("3", 3.0, "2026-01-02"),
        ];
        let once = sorted_view(&wishes, SortByDate::Oldest, SortByPrice::HighToLow);
        let twice = sorted_view(&wishes, SortByDate::Oldest, SortByPrice::HighToLow);
        assert_eq!(once, twice);
        assert_eq!(ids(&wishes), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_sort_preference_names() {
        assert_eq!(SortByPrice::HighToLow.as_str(), "high-to-low");
        assert_eq!(SortByPrice::from_str("low-to-high"), SortByPrice::LowToHigh);
        assert_eq!(SortByDate::from_str("oldest"), SortByDate::Oldest);
        assert_eq!(SortByDate::from_str("garbage"), SortByDate::Newest);
        assert_eq!(
            serde_json::to_string(&SortByPrice::LowToHigh).unwrap(),
            "\"low-to-high\""
        );
    }
}
