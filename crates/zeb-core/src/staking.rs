//! Staking reward estimator
//!
//! Rewards are simple interest: linear in the lock period, never compounded.

/// A fixed lock period with its annual yield
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StakingTier {
    pub lock_days: u32,
    /// Annual percentage yield as a fraction (0.12 = 12%)
    pub apy: f64,
    pub label: &'static str,
}

impl StakingTier {
    /// APY as a whole percentage for display
    pub fn apy_percent(&self) -> f64 {
        self.apy * 100.0
    }
}

pub static STAKING_TIERS: [StakingTier; 4] = [
    StakingTier {
        lock_days: 30,
        apy: 0.12,
        label: "30 Days",
    },
    StakingTier {
        lock_days: 90,
        apy: 0.18,
        label: "90 Days",
    },
    StakingTier {
        lock_days: 180,
        apy: 0.25,
        label: "180 Days",
    },
    StakingTier {
        lock_days: 365,
        apy: 0.35,
        label: "365 Days",
    },
];

/// Index into `STAKING_TIERS` selected when the calculator first renders
pub const DEFAULT_TIER_INDEX: usize = 1;

/// Look up a tier by its lock period
pub fn tier_for_days(lock_days: u32) -> Option<&'static StakingTier> {
    STAKING_TIERS.iter().find(|t| t.lock_days == lock_days)
}

/// Result of a staking estimate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StakingQuote {
    pub lock_days: u32,
    pub apy: f64,
    pub reward: f64,
    pub total: f64,
}

/// Estimate the reward for staking `principal` in `tier`
pub fn estimate(principal: f64, tier: &StakingTier) -> StakingQuote {
    let principal = sanitize(principal);
    let daily_rate = tier.apy / 365.0;
    let reward = principal * daily_rate * f64::from(tier.lock_days);

    StakingQuote {
        lock_days: tier.lock_days,
        apy: tier.apy,
        reward,
        total: principal + reward,
    }
}

/// Parse user input into a principal. Commas and underscores are digit
/// separators. Returns `None` for anything that is not a finite, non-negative number.
pub fn try_parse_principal(input: &str) -> Option<f64> {
    let cleaned: String = input.trim().chars().filter(|c| *c != ',' && *c != '_').collect();
    cleaned
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
}

/// Parse user input into a principal; anything unusable becomes 0
pub fn parse_principal(input: &str) -> f64 {
    try_parse_principal(input).map(sanitize).unwrap_or(0.0)
}

fn sanitize(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 { value } else { 0.0 }
}

/// Format a token quantity with thousands separators and at most two decimals
pub fn format_quantity(value: f64) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    let cents = (value.abs() * 100.0).round() as u128;
    let whole = cents / 100;
    let frac = cents % 100;

    // Simple comma formatting
    let s = whole.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }

    if frac > 0 {
        let digits = format!("{:02}", frac);
        result.push('.');
        result.push_str(digits.trim_end_matches('0'));
    }
    if value < 0.0 && cents > 0 {
        result.insert(0, '-');
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_thousand_for_thirty_days() {
        let quote = estimate(1000.0, &STAKING_TIERS[0]);
        assert!(approx(quote.reward, 1000.0 * 0.12 / 365.0 * 30.0));
        assert_eq!(format!("{:.2}", quote.reward), "9.86");
        assert!(approx(quote.total, 1000.0 + quote.reward));
        assert_eq!(quote.lock_days, 30);
    }

    #[test]
    fn test_zero_principal() {
        for tier in &STAKING_TIERS {
            let quote = estimate(0.0, tier);
            assert_eq!(quote.reward, 0.0);
            assert_eq!(quote.total, 0.0);
        }
    }

    #[test]
    fn test_formula_holds_for_every_tier() {
        for principal in [1.0, 250.5, 1000.0, 123_456.78] {
            for tier in &STAKING_TIERS {
                let quote = estimate(principal, tier);
                let expected = principal * (tier.apy / 365.0) * f64::from(tier.lock_days);
                assert!(approx(quote.reward, expected));
                assert!(approx(quote.total, principal + expected));
                assert!(quote.total >= principal);
            }
        }
    }

    #[test]
    fn test_reward_is_linear_not_compounded() {
        // A full year at 35% is exactly 35% under simple interest
        let quote = estimate(1000.0, &STAKING_TIERS[3]);
        assert!(approx(quote.reward, 350.0));

        let tier = StakingTier {
            lock_days: 60,
            apy: 0.12,
            label: "",
        };
        let double = estimate(1000.0, &tier);
        let single = estimate(1000.0, &STAKING_TIERS[0]);
        assert!(approx(double.reward, single.reward * 2.0));
    }

    #[test]
    fn test_invalid_principal_degrades_to_zero() {
        assert_eq!(estimate(f64::NAN, &STAKING_TIERS[1]).total, 0.0);
        assert_eq!(estimate(-50.0, &STAKING_TIERS[1]).total, 0.0);
        assert_eq!(estimate(f64::INFINITY, &STAKING_TIERS[1]).total, 0.0);
    }

    #[test]
    fn test_parse_principal() {
        assert_eq!(parse_principal("1000"), 1000.0);
        assert_eq!(parse_principal(" 2,500.5 "), 2500.5);
        assert_eq!(parse_principal(""), 0.0);
        assert_eq!(parse_principal("abc"), 0.0);
        assert_eq!(parse_principal("-10"), 0.0);
        assert_eq!(parse_principal("NaN"), 0.0);
        assert_eq!(parse_principal("inf"), 0.0);
    }

    #[test]
    fn test_try_parse_principal() {
        assert_eq!(try_parse_principal("1_000"), Some(1000.0));
        assert_eq!(try_parse_principal("1,000"), Some(1000.0));
        assert_eq!(try_parse_principal("0.0"), Some(0.0));
        assert_eq!(try_parse_principal("abc"), None);
        assert_eq!(try_parse_principal("-5"), None);
        assert_eq!(try_parse_principal("inf"), None);
        assert_eq!(parse_principal("1_000"), 1000.0);
    }

    #[test]
    fn test_tier_lookup() {
        assert_eq!(tier_for_days(180).map(|t| t.apy), Some(0.25));
        assert!(tier_for_days(7).is_none());
        assert_eq!(STAKING_TIERS[DEFAULT_TIER_INDEX].lock_days, 90);
    }

    #[test]
    fn test_format_quantity() {
        assert_eq!(format_quantity(0.0), "0");
        assert_eq!(format_quantity(9.863), "9.86");
        assert_eq!(format_quantity(1044.3836), "1,044.38");
        assert_eq!(format_quantity(10986.3013), "10,986.3");
        assert_eq!(format_quantity(1_000_000.0), "1,000,000");
        assert_eq!(format_quantity(f64::NAN), "0");
    }
}
