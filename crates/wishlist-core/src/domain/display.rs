//! Display helpers for prices, dates and images.

use chrono::{Local, TimeZone};

use super::wish::parse_timestamp;

pub const FALLBACK_CARD_IMAGE: &str =
    "https://images.unsplash.com/photo-1533090161767-e6ffed986c88?w=400";
pub const FALLBACK_DETAIL_IMAGE: &str =
    "https://images.unsplash.com/photo-1533090161767-e6ffed986c88?w=800";

const INVALID_DATE: &str = "Invalid Date";

/// en-US grouping with up to three fraction digits: `1234.5` -> `1,234.5`
pub fn format_price(price: f64) -> String {
    if !price.is_finite() {
        return price.to_string();
    }
    let rounded = (price.abs() * 1000.0).round() / 1000.0;
    let fixed = format!("{:.3}", rounded);
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some(parts) => parts,
        None => (fixed.as_str(), ""),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let frac = frac_part.trim_end_matches('0');
    let sign = if price < 0.0 && rounded != 0.0 { "-" } else { "" };
    if frac.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{}", sign, grouped, frac)
    }
}

const CARD_DATE: &str = "%b %-d";
const DETAIL_DATE: &str = "%b %-d, %Y";

/// `Oct 15`, in the user's local time zone
pub fn format_card_date(created_at: &str) -> String {
    format_date_in(created_at, &Local, CARD_DATE)
}

/// `Oct 15, 2026`, in the user's local time zone
pub fn format_detail_date(created_at: &str) -> String {
    format_date_in(created_at, &Local, DETAIL_DATE)
}

fn format_date_in<Tz>(created_at: &str, zone: &Tz, pattern: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    parse_timestamp(created_at)
        .map(|at| at.with_timezone(zone).format(pattern).to_string())
        .unwrap_or_else(|| INVALID_DATE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(0.5), "0.5");
        assert_eq!(format_price(25.0), "25");
        assert_eq!(format_price(1234.5), "1,234.5");
        assert_eq!(format_price(1_000_000.0), "1,000,000");
        assert_eq!(format_price(0.12345), "0.123");
        assert_eq!(format_price(999.9999), "1,000");
        assert_eq!(format_price(-4321.0), "-4,321");
    }

    use chrono::{FixedOffset, Utc};

    #[test]
    fn test_format_dates() {
        let stamp = "2026-10-05T12:00:00.000Z";
        assert_eq!(format_date_in(stamp, &Utc, CARD_DATE), "Oct 5");
        assert_eq!(format_date_in(stamp, &Utc, DETAIL_DATE), "Oct 5, 2026");
        assert_eq!(format_card_date("soon"), "Invalid Date");
        assert_eq!(format_detail_date("soon"), "Invalid Date");
    }

    #[test]
    fn test_dates_follow_the_time_zone() {
        let late_evening = "2026-10-05T23:30:00.000Z";
        let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
        let los_angeles = FixedOffset::west_opt(7 * 3600).unwrap();
        assert_eq!(format_date_in(late_evening, &tokyo, DETAIL_DATE), "Oct 6, 2026");
        assert_eq!(format_date_in(late_evening, &los_angeles, DETAIL_DATE), "Oct 5, 2026");
        assert_eq!(format_date_in("2026-01-01T02:00:00Z", &los_angeles, CARD_DATE), "Dec 31");

        // Local rendering matches converting by hand
        let local = parse_timestamp(late_evening).unwrap().with_timezone(&Local);
        assert_eq!(format_card_date(late_evening), local.format(CARD_DATE).to_string());
    }
}
