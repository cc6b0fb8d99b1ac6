use crate::constants::ACCRUAL_PERIOD_SECS;
use crate::errors::KdoError;
use crate::utils::math::{compound_at_protocol_rate, elapsed_periods};
use anchor_lang::prelude::*;

/// The yield-bearing holding behind all prize pools. Every donated
/// lamport lands here; the balance compounds at the protocol rate once
/// per whole accrual period, standing in for the external wrapped-token
/// gateway the funds would be parked in.
///
/// Every unit of `principal` and `reserve` is backed by a lamport held
/// by this account: donations credit `principal`, authority deposits
/// credit `reserve`, and accrual only moves value from `reserve` into
/// `principal`. Yield is never minted out of thin air; once the reserve
/// is exhausted the balance stops growing.
#[account]
#[derive(InitSpace)]
pub struct Vault {
    pub bump: u8,

    /// The only signer allowed to deposit into or withdraw from the vault.
    pub authority: Pubkey,

    /// Settled balance attributed to pools: donated principal plus all
    /// yield realized up to `last_accrual_ts`.
    pub principal: u64,

    /// Authority-funded lamports backing future yield. Accrual draws
    /// down this reserve; it is never distributed directly.
    pub reserve: u64,

    /// Last settlement, aligned to whole accrual periods.
    pub last_accrual_ts: i64,
}

impl Vault {
    /// The compounded balance as of `now`, without mutating state.
    /// Partial periods do not accrue, and yield due beyond what the
    /// reserve can back is not recognized.
    pub fn supply_at(&self, now: i64) -> Result<u64> {
        let periods = elapsed_periods(self.last_accrual_ts, now, ACCRUAL_PERIOD_SECS);
        let target = compound_at_protocol_rate(self.principal, periods)?;
        let yield_due = target
            .checked_sub(self.principal)
            .ok_or(KdoError::MathOverflow)?;
        Ok(self.principal + yield_due.min(self.reserve))
    }

    /// Settles all whole periods elapsed before `now`: `principal`
    /// becomes `supply_at(now)` and the realized yield is debited from
    /// `reserve`, so `principal + reserve` is conserved.
    /// `last_accrual_ts` advances by exactly the consumed periods,
    /// carrying the sub-period remainder forward. Returns the number of
    /// periods settled.
    pub fn accrue(&mut self, now: i64) -> Result<u64> {
        let periods = elapsed_periods(self.last_accrual_ts, now, ACCRUAL_PERIOD_SECS);
        if periods > 0 {
            let settled = self.supply_at(now)?;
            let realized = settled
                .checked_sub(self.principal)
                .ok_or(KdoError::MathOverflow)?;
            self.principal = settled;
            self.reserve = self
                .reserve
                .checked_sub(realized)
                .ok_or(KdoError::MathOverflow)?;
            self.last_accrual_ts += periods as i64 * ACCRUAL_PERIOD_SECS;
        }
        Ok(periods)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE_SOL: u64 = 1_000_000_000;

    fn vault_with(principal: u64, reserve: u64, last_accrual_ts: i64) -> Vault {
        Vault {
            bump: 255,
            authority: Pubkey::new_unique(),
            principal,
            reserve,
            last_accrual_ts,
        }
    }

    #[test]
    fn supply_compounds_daily() {
        let vault = vault_with(ONE_SOL, 10 * ONE_SOL, 0);
        assert_eq!(vault.supply_at(0).unwrap(), ONE_SOL);
        assert_eq!(vault.supply_at(ACCRUAL_PERIOD_SECS - 1).unwrap(), ONE_SOL);
        assert_eq!(vault.supply_at(ACCRUAL_PERIOD_SECS).unwrap(), 1_100_000_000);
        assert_eq!(vault.supply_at(4 * ACCRUAL_PERIOD_SECS).unwrap(), 1_464_100_000);
    }

    #[test]
    fn supply_is_capped_by_the_reserve() {
        let vault = vault_with(ONE_SOL, 50_000_000, 0);
        assert_eq!(vault.supply_at(ACCRUAL_PERIOD_SECS).unwrap(), 1_050_000_000);

        let unbacked = vault_with(ONE_SOL, 0, 0);
        assert_eq!(unbacked.supply_at(ACCRUAL_PERIOD_SECS).unwrap(), ONE_SOL);
    }

    #[test]
    fn accrue_consumes_whole_periods_and_carries_remainder() {
        let mut vault = vault_with(ONE_SOL, 10 * ONE_SOL, 100);

        let now = 100 + ACCRUAL_PERIOD_SECS + 500;
        assert_eq!(vault.accrue(now).unwrap(), 1);
        assert_eq!(vault.principal, 1_100_000_000);
        assert_eq!(vault.last_accrual_ts, 100 + ACCRUAL_PERIOD_SECS);

        // Same period again: no-op.
        assert_eq!(vault.accrue(now).unwrap(), 0);
        assert_eq!(vault.principal, 1_100_000_000);

        // The 500s remainder counts toward the next period boundary.
        let later = 100 + 2 * ACCRUAL_PERIOD_SECS;
        assert_eq!(vault.accrue(later).unwrap(), 1);
        assert_eq!(vault.principal, 1_210_000_000);
        assert_eq!(vault.last_accrual_ts, later);
    }

    #[test]
    fn accrue_settles_to_supply_at() {
        let vault = vault_with(ONE_SOL, 3 * ONE_SOL, 0);
        let now = 5 * ACCRUAL_PERIOD_SECS + 123;
        let expected = vault.supply_at(now).unwrap();

        let mut settled = vault;
        settled.accrue(now).unwrap();
        assert_eq!(settled.principal, expected);
    }

    #[test]
    fn reserve_deposit_is_not_recognized_as_yield() {
        // 1 SOL of pool principal and a 10 SOL reserve top-up: one
        // period accrues 0.1 SOL, not the whole reserve.
        let mut vault = vault_with(ONE_SOL, 10 * ONE_SOL, 0);
        vault.accrue(ACCRUAL_PERIOD_SECS).unwrap();
        assert_eq!(vault.principal, 1_100_000_000);
        assert_eq!(vault.reserve, 9_900_000_000);
    }

    #[test]
    fn accrue_conserves_backing_lamports() {
        let mut vault = vault_with(7 * ONE_SOL, 2 * ONE_SOL, 0);
        let backing = vault.principal + vault.reserve;
        vault.accrue(9 * ACCRUAL_PERIOD_SECS).unwrap();
        assert_eq!(vault.principal + vault.reserve, backing);
    }

    #[test]
    fn accrue_exhausts_the_reserve_then_stops_growing() {
        let mut vault = vault_with(ONE_SOL, 150_000_000, 0);

        vault.accrue(2 * ACCRUAL_PERIOD_SECS).unwrap();
        assert_eq!(vault.principal, 1_150_000_000);
        assert_eq!(vault.reserve, 0);

        vault.accrue(3 * ACCRUAL_PERIOD_SECS).unwrap();
        assert_eq!(vault.principal, 1_150_000_000);
    }
}
