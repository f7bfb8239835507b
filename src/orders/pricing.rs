//! Banner tier pricing.

/// Lamports per SOL.
pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

/// Price of a banner in SOL.
///
/// The rule is a two-way branch, not a three-way switch: anything that is
/// not exactly "basic" is priced at the premium rate. Unrecognized tiers
/// therefore quote as premium.
pub fn price_sol(banner_type: &str) -> f64 {
    if banner_type == "basic" {
        0.1
    } else {
        0.2
    }
}

/// Price of a banner in lamports, for comparison against on-chain amounts.
pub fn price_lamports(banner_type: &str) -> u64 {
    (price_sol(banner_type) * LAMPORTS_PER_SOL as f64) as u64
}

/// Price formatted for email and display text ("0.1" / "0.2").
pub fn price_display(banner_type: &str) -> &'static str {
    if banner_type == "basic" {
        "0.1"
    } else {
        "0.2"
    }
}

/// Whether screenshot uploads apply to this tier.
///
/// Distinct from pricing: only the exact string "premium" carries
/// screenshots, while any non-"basic" string gets premium pricing.
pub fn is_premium(banner_type: &str) -> bool {
    banner_type == "premium"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_price() {
        assert_eq!(price_sol("basic"), 0.1);
        assert_eq!(price_display("basic"), "0.1");
        assert_eq!(price_lamports("basic"), 100_000_000);
    }

    #[test]
    fn test_premium_price() {
        assert_eq!(price_sol("premium"), 0.2);
        assert_eq!(price_display("premium"), "0.2");
        assert_eq!(price_lamports("premium"), 200_000_000);
    }

    #[test]
    fn test_unrecognized_tier_prices_as_premium() {
        assert_eq!(price_sol("gold"), 0.2);
        assert_eq!(price_sol(""), 0.2);
        assert_eq!(price_display("BASIC"), "0.2");
    }

    #[test]
    fn test_screenshots_only_for_exact_premium() {
        assert!(is_premium("premium"));
        assert!(!is_premium("basic"));
        assert!(!is_premium("gold"));
        assert!(!is_premium("PREMIUM"));
    }
}
