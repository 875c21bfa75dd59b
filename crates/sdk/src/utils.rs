use once_cell::sync::Lazy;
use regex::Regex;

/// Smallest units per whole coin.
pub const WEI_PER_UNIT: f64 = 1e18;

static ADDRESS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^0x[a-fA-F0-9]{40}$").expect("address pattern is valid")
});

/// Whether `address` is `0x` followed by exactly 40 hex digits, in any case.
pub fn is_valid_address(address: &str) -> bool {
    ADDRESS_REGEX.is_match(address)
}

/// Converts a coin amount to its smallest-unit integer, truncating toward zero.
///
/// Not an exact inverse of [`from_wei`]: `f64` only carries ~15-17 significant digits,
/// so amounts with more precision than that lose their low digits at this scale.
/// Out-of-range values saturate and NaN becomes 0.
pub fn to_wei(amount: f64) -> i128 {
    (amount * WEI_PER_UNIT) as i128
}

pub fn from_wei(wei: i128) -> f64 {
    wei as f64 / WEI_PER_UNIT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_validation() {
        assert!(is_valid_address("0x1234567890abcdef1234567890abcdef12345678"));
        assert!(is_valid_address("0xABCDEF7890ABCDEF1234567890ABCDEF12345678"));
        assert!(is_valid_address("0xaBcDeF7890abcdef1234567890ABCDEF12345678"));

        assert!(!is_valid_address("invalid"));
        assert!(!is_valid_address(""));
        assert!(!is_valid_address("0x"));
        assert!(!is_valid_address("1234567890abcdef1234567890abcdef12345678"));
        assert!(!is_valid_address("0x1234567890abcdef1234567890abcdef1234567"));
        assert!(!is_valid_address("0x1234567890abcdef1234567890abcdef123456789"));
        assert!(!is_valid_address("0x1234567890abcdef1234567890abcdef1234567g"));
        assert!(!is_valid_address("0X1234567890abcdef1234567890abcdef12345678"));
        assert!(!is_valid_address(" 0x1234567890abcdef1234567890abcdef12345678"));
        assert!(!is_valid_address("0x1234567890abcdef1234567890abcdef12345678\n"));
    }

    #[test]
    fn test_wei_conversion() {
        assert_eq!(to_wei(1.0), 1_000_000_000_000_000_000);
        assert_eq!(to_wei(1.5), 1_500_000_000_000_000_000);
        assert_eq!(to_wei(0.0), 0);
        assert_eq!(from_wei(1_000_000_000_000_000_000), 1.0);
        assert_eq!(from_wei(0), 0.0);
    }

    #[test]
    fn test_to_wei_truncates_toward_zero() {
        assert_eq!(to_wei(-1.5), -1_500_000_000_000_000_000);
        assert_eq!(to_wei(1e-19), 0);
        assert_eq!(to_wei(-1e-19), 0);
        assert_eq!(to_wei(f64::NAN), 0);
    }

    #[test]
    fn test_wei_round_trip_within_tolerance() {
        for amount in [0.1, 0.25, 1.0, 3.14159, 42.000001, 1234.5678, 1_000_000.0] {
            let recovered = from_wei(to_wei(amount));
            assert!(
                (recovered - amount).abs() <= amount.abs() * 1e-12,
                "{} came back as {}",
                amount,
                recovered
            );
        }
    }
}
