use crate::constants::{BPS_DENOMINATOR, RATE_PER_PERIOD_BPS};
use crate::errors::KdoError;
use anchor_lang::prelude::*;

/// Whole accrual periods elapsed between two timestamps. Partial periods
/// are floored away; the remainder stays attached to `last` until a full
/// period has passed.
pub fn elapsed_periods(last: i64, now: i64, period_secs: i64) -> u64 {
    if now <= last || period_secs <= 0 {
        return 0;
    }
    ((now - last) / period_secs) as u64
}

/// Periodic compounding: `principal * (1 + rate)^periods`, with the rate
/// expressed in basis points. All intermediate math is u128 and each step
/// truncates, so the result never exceeds the exact real-valued balance.
pub fn compound(principal: u64, rate_bps: u64, periods: u64) -> Result<u64> {
    let factor_num = (BPS_DENOMINATOR + rate_bps) as u128;
    let mut value = principal as u128;
    for _ in 0..periods {
        value = value
            .checked_mul(factor_num)
            .ok_or(KdoError::MathOverflow)?
            / BPS_DENOMINATOR as u128;
    }
    u64::try_from(value).map_err(|_| KdoError::MathOverflow.into())
}

/// Convenience wrapper using the protocol rate.
pub fn compound_at_protocol_rate(principal: u64, periods: u64) -> Result<u64> {
    compound(principal, RATE_PER_PERIOD_BPS, periods)
}

/// One pool's truncated share of an accrued yield:
/// `accrued * weight / total_weight`. Summed over all pools the shares
/// never exceed `accrued`; the truncation remainder is carried by the
/// caller, not distributed.
pub fn prorata_share(accrued: u64, weight: u64, total_weight: u64) -> Result<u64> {
    if total_weight == 0 {
        return Ok(0);
    }
    let share = (accrued as u128)
        .checked_mul(weight as u128)
        .ok_or(KdoError::MathOverflow)?
        / total_weight as u128;
    u64::try_from(share).map_err(|_| KdoError::MathOverflow.into())
}

/// Cumulative-weight-threshold selection over `[0, total_weight)`.
///
/// `entries` is a list of `(id, weight)` pairs; the returned id is the one
/// whose cumulative range contains `seed % total_weight`, so each entry is
/// selected with probability proportional to its weight. Returns `None`
/// when every weight is zero.
pub fn weighted_pick(seed: u64, entries: &[(u64, u64)]) -> Option<u64> {
    let total: u128 = entries.iter().map(|(_, w)| *w as u128).sum();
    if total == 0 {
        return None;
    }
    let target = seed as u128 % total;
    let mut cumulative: u128 = 0;
    for (id, weight) in entries {
        cumulative += *weight as u128;
        if target < cumulative {
            return Some(*id);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::ACCRUAL_PERIOD_SECS;

    const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

    #[test]
    fn partial_periods_do_not_accrue() {
        assert_eq!(elapsed_periods(0, ACCRUAL_PERIOD_SECS - 1, ACCRUAL_PERIOD_SECS), 0);
        assert_eq!(elapsed_periods(0, ACCRUAL_PERIOD_SECS, ACCRUAL_PERIOD_SECS), 1);
        assert_eq!(
            elapsed_periods(100, 100 + 4 * ACCRUAL_PERIOD_SECS + 5, ACCRUAL_PERIOD_SECS),
            4
        );
        assert_eq!(elapsed_periods(500, 400, ACCRUAL_PERIOD_SECS), 0);
    }

    #[test]
    fn compound_matches_daily_rate() {
        // 1 SOL at 10%/day: 1.1 after one day, 1.4641 after four.
        let one_sol = LAMPORTS_PER_SOL;
        assert_eq!(compound(one_sol, 1_000, 1).unwrap(), 1_100_000_000);
        assert_eq!(compound(one_sol, 1_000, 4).unwrap(), 1_464_100_000);
        assert_eq!(compound(one_sol, 1_000, 0).unwrap(), one_sol);
        assert_eq!(compound(0, 1_000, 10).unwrap(), 0);
    }

    #[test]
    fn compound_overflow_is_reported() {
        assert!(compound(u64::MAX, 1_000, 4).is_err());
    }

    #[test]
    fn prorata_shares_are_proportional_and_bounded() {
        let a = 10 * LAMPORTS_PER_SOL;
        let b = 25 * LAMPORTS_PER_SOL;
        let total = a + b;
        let accrued = 3_500_000_000u64;

        let share_a = prorata_share(accrued, a, total).unwrap();
        let share_b = prorata_share(accrued, b, total).unwrap();

        assert!(share_a + share_b <= accrued);
        // (A' - A)/(B' - B) == A/B within one lamport of truncation.
        let lhs = share_a as u128 * b as u128;
        let rhs = share_b as u128 * a as u128;
        let diff = lhs.abs_diff(rhs);
        assert!(diff <= total as u128);
    }

    #[test]
    fn prorata_share_empty_total() {
        assert_eq!(prorata_share(1_000, 0, 0).unwrap(), 0);
    }

    #[test]
    fn weighted_pick_is_deterministic() {
        // Weights 10 and 25.68 out of 35.68, as observed in the draw tests.
        let entries = [(0u64, 10_000_000_000u64), (1u64, 25_680_000_000u64)];
        let seed = 0xDEAD_BEEF_CAFE_F00Du64;
        let first = weighted_pick(seed, &entries);
        for _ in 0..10 {
            assert_eq!(weighted_pick(seed, &entries), first);
        }
    }

    #[test]
    fn weighted_pick_respects_ranges() {
        let entries = [(3u64, 10u64), (7u64, 25u64)];
        // Targets 0..10 land in pool 3, 10..35 in pool 7.
        assert_eq!(weighted_pick(0, &entries), Some(3));
        assert_eq!(weighted_pick(9, &entries), Some(3));
        assert_eq!(weighted_pick(10, &entries), Some(7));
        assert_eq!(weighted_pick(34, &entries), Some(7));
        assert_eq!(weighted_pick(35, &entries), Some(3));
    }

    #[test]
    fn weighted_pick_frequency_converges() {
        let entries = [(0u64, 1_000u64), (1u64, 2_568u64)];
        let total = 3_568u64;

        // Simple LCG over many seeds; hit rate should approach the
        // weight fraction.
        let mut seed = 42u64;
        let mut wins_low = 0u64;
        let iterations = 200_000u64;
        for _ in 0..iterations {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            if weighted_pick(seed, &entries) == Some(0) {
                wins_low += 1;
            }
        }
        let expected = iterations * 1_000 / total;
        let tolerance = iterations / 50;
        assert!(wins_low.abs_diff(expected) < tolerance);
    }

    #[test]
    fn weighted_pick_all_zero_weights() {
        assert_eq!(weighted_pick(123, &[(0, 0), (1, 0)]), None);
        assert_eq!(weighted_pick(123, &[]), None);
    }
}
