/// Format the platform's ISO-8601 interval notation (PT1H2M3S) as a clock
/// string: `H:MM:SS` when hours are present, `M:SS` otherwise.
pub fn format_duration(interval: &str) -> String {
    if !interval.starts_with("PT") {
        return "0:00".to_string();
    }

    let mut hours = 0u32;
    let mut minutes = 0u32;
    let mut seconds = 0u32;
    let mut current_number = String::new();

    for ch in interval[2..].chars() {
        if ch.is_ascii_digit() {
            current_number.push(ch);
        } else {
            let num = current_number.parse::<u32>().unwrap_or(0);
            match ch {
                'H' => hours = num,
                'M' => minutes = num,
                'S' => seconds = num,
                _ => {}
            }
            current_number.clear();
        }
    }

    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes}:{seconds:02}")
    }
}

/// Parse a string statistics field; missing or non-numeric values count as 0.
pub fn parse_count(value: Option<&str>) -> u64 {
    value.and_then(|v| v.parse::<u64>().ok()).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_notation_round_trips_to_clock_format() {
        assert_eq!(format_duration("PT1H2M3S"), "1:02:03");
        assert_eq!(format_duration("PT5M9S"), "5:09");
        assert_eq!(format_duration("PT45S"), "0:45");
        assert_eq!(format_duration("PT2H5S"), "2:00:05");
        assert_eq!(format_duration("PT12M"), "12:00");
    }

    #[test]
    fn unparseable_intervals_become_zero() {
        assert_eq!(format_duration(""), "0:00");
        assert_eq!(format_duration("garbage"), "0:00");
        assert_eq!(format_duration("PT"), "0:00");
    }

    #[test]
    fn missing_or_non_numeric_counts_normalize_to_zero() {
        assert_eq!(parse_count(Some("12345")), 12345);
        assert_eq!(parse_count(Some("12.5")), 0);
        assert_eq!(parse_count(Some("n/a")), 0);
        assert_eq!(parse_count(None), 0);
    }
}
