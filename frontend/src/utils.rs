use chrono::{DateTime, Utc};

pub fn format_date(iso_date: &str) -> String {
    iso_date
        .parse::<DateTime<Utc>>()
        .map(|datetime| datetime.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|_| iso_date.to_string())
}

/// Full counter with thousands separators, for the analytics tables.
pub fn format_number(number: u64) -> String {
    let mut grouped = String::new();
    for (i, digit) in number.to_string().chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped.chars().rev().collect()
}

/// Compact counter for cards: 1.2M, 345K, 999.
pub fn format_compact(number: u64) -> String {
    if number >= 1_000_000 {
        format!("{:.1}M", number as f64 / 1_000_000.0)
    } else if number >= 1_000 {
        format!("{}K", number / 1_000)
    } else {
        number.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_are_grouped_by_thousands() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(1234567), "1,234,567");
        assert_eq!(format_number(12_345_678), "12,345,678");
    }

    #[test]
    fn compact_counters_scale_units() {
        assert_eq!(format_compact(999), "999");
        assert_eq!(format_compact(12_345), "12K");
        assert_eq!(format_compact(1_250_000), "1.2M");
    }

    #[test]
    fn dates_render_as_day_precision() {
        assert_eq!(format_date("2026-08-01T10:30:00Z"), "2026-08-01");
        assert_eq!(format_date("not a date"), "not a date");
    }
}
