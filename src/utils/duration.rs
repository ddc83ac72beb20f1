//! Human duration parsing for command-line values

use std::time::Duration;

const FORMAT_HINT: &str = "Use formats like: 45m, 13s, 1h30m, 1m30s";

/// Parse a duration such as `25m`, `30s`, `1h30m` or `1m30s`.
///
/// A bare number is read as minutes. Zero durations are rejected.
pub fn parse_duration(input: &str) -> Result<Duration, String> {
    let input = input.trim().to_lowercase();

    if input.is_empty() {
        return Err(format!("Duration is empty. {}", FORMAT_HINT));
    }

    if let Ok(minutes) = input.parse::<u64>() {
        return non_zero(minutes.saturating_mul(60));
    }

    let mut total_seconds = 0u64;
    let mut current_number = String::new();

    for ch in input.chars() {
        if ch.is_ascii_digit() {
            current_number.push(ch);
        } else if matches!(ch, 'h' | 'm' | 's') {
            if current_number.is_empty() {
                return Err(format!("Invalid duration format. {}", FORMAT_HINT));
            }

            let number: u64 = current_number
                .parse()
                .map_err(|_| "Invalid number in duration".to_string())?;

            let unit = match ch {
                'h' => 3600,
                'm' => 60,
                _ => 1,
            };
            total_seconds = total_seconds.saturating_add(number.saturating_mul(unit));
            current_number.clear();
        } else if !ch.is_whitespace() {
            return Err(format!("Invalid character '{}' in duration. {}", ch, FORMAT_HINT));
        }
    }

    if !current_number.is_empty() {
        return Err("Duration must end with 'h', 'm' or 's'".to_string());
    }

    non_zero(total_seconds)
}

fn non_zero(seconds: u64) -> Result<Duration, String> {
    if seconds == 0 {
        return Err("Duration must be greater than 0".to_string());
    }
    Ok(Duration::from_secs(seconds))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_unit_suffixes() {
        assert_eq!(parse_duration("45m"), Ok(Duration::from_secs(2700)));
        assert_eq!(parse_duration("13s"), Ok(Duration::from_secs(13)));
        assert_eq!(parse_duration("1h30m"), Ok(Duration::from_secs(5400)));
        assert_eq!(parse_duration("1m 30s"), Ok(Duration::from_secs(90)));
        assert_eq!(parse_duration(" 2H "), Ok(Duration::from_secs(7200)));
    }

    #[test]
    fn bare_number_is_minutes() {
        assert_eq!(parse_duration("25"), Ok(Duration::from_secs(1500)));
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(parse_duration("").is_err());
        assert!(parse_duration("m").is_err());
        assert!(parse_duration("10x").is_err());
        assert!(parse_duration("1m30").is_err());
        assert!(parse_duration("0").is_err());
        assert!(parse_duration("0m0s").is_err());
    }
}
