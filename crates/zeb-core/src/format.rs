//! Display helpers for transfer records
//!
//! All inputs come from an untrusted API, so nothing here panics on bad data.

use chrono::Utc;

/// Decimals assumed when the explorer omits or garbles `tokenDecimal`
pub const DEFAULT_TOKEN_DECIMALS: u32 = 18;

/// Shorten an address to `0x1234...5678`
pub fn format_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 10 {
        return address.to_string();
    }
    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}

/// Parse the explorer's decimals field, falling back to 18
pub fn parse_decimals(decimals: &str) -> u32 {
    match decimals.trim().parse::<u32>() {
        // f64 tops out around 1e308
        Ok(d) if d > 0 && d <= 300 => d,
        _ => DEFAULT_TOKEN_DECIMALS,
    }
}

/// Convert a raw integer amount into whole tokens
pub fn token_amount(raw_value: &str, decimals: &str) -> f64 {
    let dec = parse_decimals(decimals);
    let raw = raw_value.trim().parse::<f64>().ok().filter(|v| v.is_finite()).unwrap_or(0.0);
    raw / 10f64.powi(dec as i32)
}

/// Format a raw token amount with K/M suffixes
pub fn format_token_amount(raw_value: &str, decimals: &str) -> String {
    let num = token_amount(raw_value, decimals);
    if num >= 1_000_000.0 {
        format!("{:.2}M", num / 1_000_000.0)
    } else if num >= 1_000.0 {
        format!("{:.2}K", num / 1_000.0)
    } else {
        format!("{:.2}", num)
    }
}

/// Render how long ago `timestamp` (unix seconds) was, relative to `now`
pub fn format_relative_time_at(timestamp: &str, now: i64) -> String {
    let Ok(then) = timestamp.trim().parse::<i64>() else {
        return "0m ago".to_string();
    };

    let diff = now.saturating_sub(then).max(0);
    let hours = diff / 3600;
    let minutes = (diff % 3600) / 60;

    if hours > 24 {
        return format!("{}d ago", hours / 24);
    }
    if hours > 0 {
        return format!("{}h ago", hours);
    }
    format!("{}m ago", minutes)
}

/// Render how long ago `timestamp` (unix seconds) was, relative to the wall clock
pub fn format_relative_time(timestamp: &str) -> String {
    format_relative_time_at(timestamp, Utc::now().timestamp())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_address() {
        assert_eq!(
            format_address("0x1234567890abcdef1234567890abcdef12345678"),
            "0x1234...5678"
        );
        assert_eq!(format_address("0x12345678"), "0x12345678");
        assert_eq!(format_address(""), "");
    }

    #[test]
    fn test_format_token_amount_suffixes() {
        assert_eq!(format_token_amount("50000000000000000000000", "18"), "50.00K");
        assert_eq!(format_token_amount("1500000000000000000000000", "18"), "1.50M");
        assert_eq!(format_token_amount("999000000000000000000", "18"), "999.00");
        assert_eq!(format_token_amount("1000000", "6"), "1.00");
    }

    #[test]
    fn test_format_token_amount_bad_input() {
        // Bad decimals fall back to 18
        assert_eq!(format_token_amount("50000000000000000000000", "abc"), "50.00K");
        assert_eq!(format_token_amount("50000000000000000000000", ""), "50.00K");
        assert_eq!(format_token_amount("garbage", "18"), "0.00");
        assert_eq!(format_token_amount("", ""), "0.00");
    }

    #[test]
    fn test_parse_decimals() {
        assert_eq!(parse_decimals("6"), 6);
        assert_eq!(parse_decimals("0"), 18);
        assert_eq!(parse_decimals("-3"), 18);
        assert_eq!(parse_decimals("99999"), 18);
    }

    #[test]
    fn test_relative_time() {
        let now = 1_800_000_000;
        assert_eq!(format_relative_time_at(&(now - 3600).to_string(), now), "1h ago");
        assert_eq!(format_relative_time_at(&(now - 90_000).to_string(), now), "1d ago");
        assert_eq!(format_relative_time_at(&(now - 600).to_string(), now), "10m ago");
        assert_eq!(format_relative_time_at(&(now - 30).to_string(), now), "0m ago");
    }

    #[test]
    fn test_relative_time_day_boundary() {
        let now = 1_800_000_000;
        // Exactly 24h still reads in hours
        assert_eq!(format_relative_time_at(&(now - 86_400).to_string(), now), "24h ago");
        assert_eq!(format_relative_time_at(&(now - 25 * 3600).to_string(), now), "1d ago");
    }

    #[test]
    fn test_relative_time_bad_input() {
        let now = 1_800_000_000;
        assert_eq!(format_relative_time_at("soon", now), "0m ago");
        assert_eq!(format_relative_time_at(&(now + 500).to_string(), now), "0m ago");
    }

    #[test]
    fn test_relative_time_wall_clock() {
        let an_hour_ago = Utc::now().timestamp() - 3600;
        assert_eq!(format_relative_time(&an_hour_ago.to_string()), "1h ago");
    }
}
