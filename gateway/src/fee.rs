//! Protocol fee curve and withholding computation.
//!
//! The fee has two components:
//! - a rate-based part in parts per million, with a two-tier threshold
//!   curve: amounts below the token's `max_amount` pay `min_fee_ppm`,
//!   amounts at or above it pay `max_fee_ppm`
//! - the token's fixed `claim_reward` carve, reserved to reimburse whoever
//!   submits the claim on the recipient's behalf
//!
//! The sum of both is what the fee ledger accrues on every transfer and what
//! the emitted transfer amount nets out.

use cosmwasm_std::Uint128;

use crate::error::ContractError;
use crate::state::TokenConfig;

/// Parts-per-million denominator for the fee rate
pub const FEE_DENOMINATOR: u128 = 1_000_000;

/// Breakdown of what a transfer withholds.
#[derive(Debug, Clone, PartialEq)]
pub struct Withholding {
    /// Rate-based fee component
    pub curve_fee: Uint128,
    /// Fixed claim-reward carve from the token config
    pub reward_carve: Uint128,
    /// `curve_fee + reward_carve`; accrued into the fee ledger
    pub total: Uint128,
    /// `amount - total`; credited to the balance ledger and emitted
    pub net_amount: Uint128,
}

/// Compute the withholding for a transfer of `amount`.
///
/// `requested_reward` is the caller's earmarked gasless-claim reward; it is
/// validated against the amount here but paid out at claim time, not
/// withheld at transfer time.
pub fn compute_withholding(
    config: &TokenConfig,
    amount: Uint128,
    requested_reward: Uint128,
) -> Result<Withholding, ContractError> {
    if requested_reward > amount {
        return Err(ContractError::RewardExceedsAmount);
    }

    let rate_ppm = if amount < config.max_amount {
        config.min_fee_ppm
    } else {
        config.max_fee_ppm
    };

    let curve_fee = amount.multiply_ratio(rate_ppm as u128, FEE_DENOMINATOR);
    let total = curve_fee + config.claim_reward;

    // Strict bound: the reward must leave the recipient a nonzero payout
    // after the withholding, so equality is rejected too
    if total + requested_reward >= amount {
        return Err(ContractError::FeeExceedsAmount);
    }

    Ok(Withholding {
        curve_fee,
        reward_carve: config.claim_reward,
        total,
        net_amount: amount - total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(min_fee_ppm: u64, max_fee_ppm: u64, claim_reward: u128, max_amount: u128) -> TokenConfig {
        TokenConfig {
            symbol: "TST".to_string(),
            min_amount: Uint128::new(500_000),
            claim_reward: Uint128::new(claim_reward),
            max_amount: Uint128::new(max_amount),
            min_fee_ppm,
            max_fee_ppm,
            enabled: true,
            wrapped: false,
        }
    }

    /// Reference fixture: 1.0 transferred at 1000 ppm with a 0.1 carve
    /// withholds 0.101 and nets 0.899 (micro units).
    #[test]
    fn test_floor_rate_below_threshold() {
        let cfg = token(1000, 2000, 100_000, 2_000_000);
        let w = compute_withholding(&cfg, Uint128::new(1_000_000), Uint128::new(100_000)).unwrap();

        assert_eq!(w.curve_fee, Uint128::new(1_000));
        assert_eq!(w.total, Uint128::new(101_000));
        assert_eq!(w.net_amount, Uint128::new(899_000));
    }

    /// At or above the threshold the ceiling rate applies.
    #[test]
    fn test_ceiling_rate_at_threshold() {
        let cfg = token(1000, 2000, 100_000, 2_000_000);
        let w = compute_withholding(&cfg, Uint128::new(10_000_000), Uint128::new(100_000)).unwrap();

        assert_eq!(w.curve_fee, Uint128::new(20_000));
        assert_eq!(w.total, Uint128::new(120_000));
        assert_eq!(w.net_amount, Uint128::new(9_880_000));
    }

    /// Zero-rate token: only the fixed carve is withheld.
    #[test]
    fn test_zero_rate_fixed_carve_only() {
        let cfg = token(0, 0, 1_000_000, 2_000_000);
        let w = compute_withholding(&cfg, Uint128::new(5_000_000), Uint128::new(2_000_000)).unwrap();

        assert_eq!(w.curve_fee, Uint128::zero());
        assert_eq!(w.total, Uint128::new(1_000_000));
        assert_eq!(w.net_amount, Uint128::new(4_000_000));
    }

    #[test]
    fn test_reward_exceeding_amount_rejected() {
        let cfg = token(1000, 2000, 100_000, 2_000_000);
        let err =
            compute_withholding(&cfg, Uint128::new(1_000_000), Uint128::new(1_000_001)).unwrap_err();
        assert_eq!(err, ContractError::RewardExceedsAmount);
    }

    #[test]
    fn test_fee_plus_reward_exceeding_amount_rejected() {
        // Carve of 0.5 plus a 0.6 reward cannot come out of a 1.0 transfer
        let cfg = token(0, 0, 500_000, 2_000_000);
        let err =
            compute_withholding(&cfg, Uint128::new(1_000_000), Uint128::new(600_000)).unwrap_err();
        assert_eq!(err, ContractError::FeeExceedsAmount);

        // One below the carve-plus-reward boundary is the largest that fits
        let w = compute_withholding(&cfg, Uint128::new(1_000_000), Uint128::new(499_999)).unwrap();
        assert_eq!(w.net_amount, Uint128::new(500_000));
    }

    /// A reward consuming the entire net amount is rejected: a 1.0 carve and
    /// a 1.0 reward exactly exhaust a 2.0 transfer, which would net the
    /// eventual claim recipient zero.
    #[test]
    fn test_reward_consuming_net_amount_rejected() {
        let cfg = token(0, 0, 1_000_000, 2_000_000);
        let err =
            compute_withholding(&cfg, Uint128::new(2_000_000), Uint128::new(1_000_000)).unwrap_err();
        assert_eq!(err, ContractError::FeeExceedsAmount);
    }

    /// Withholding plus requested reward never exceeds the amount.
    #[test]
    fn test_boundedness() {
        let cfg = token(1000, 2000, 100_000, 2_000_000);
        for amount in [500_000u128, 1_000_000, 1_999_999, 2_000_000, 50_000_000] {
            let w = compute_withholding(&cfg, Uint128::new(amount), Uint128::zero()).unwrap();
            assert!(w.total <= Uint128::new(amount));
            assert_eq!(w.net_amount + w.total, Uint128::new(amount));
        }
    }
}
