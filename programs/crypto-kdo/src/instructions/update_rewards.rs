use crate::constants::{ACCRUAL_PERIOD_SECS, SEED_GIFT_REGISTRY, SEED_VAULT};
use crate::errors::KdoError;
use crate::events::RewardsDistributed;
use crate::state::{GiftRegistry, PrizePool, Vault};
use crate::utils::math::{elapsed_periods, prorata_share};
use anchor_lang::prelude::*;

/// Accounts required to distribute accrued yield. Every open prize pool
/// must be passed as a writable remaining account, sorted by id.
#[derive(Accounts)]
pub struct UpdateRewards<'info> {
    pub payer: Signer<'info>,

    #[account(
        mut,
        seeds = [SEED_GIFT_REGISTRY],
        bump = gift_registry.bump,
    )]
    pub gift_registry: Account<'info, GiftRegistry>,

    #[account(
        mut,
        seeds = [SEED_VAULT],
        bump = vault.bump,
    )]
    pub vault: Account<'info, Vault>,
}

/// Distributes yield accrued since the last update across all open pools,
/// pro rata to each pool's share of the managed supply.
///
/// Callable by anyone. A call within the same accrual period as the last
/// update is a no-op, so there is no double accrual. The yield handed out
/// is only what the vault has realized from its lamport-backed reserve.
/// Each pool's share is truncated; the rounding remainder stays in the
/// vault and is picked up by a later distribution.
pub fn process_update_rewards<'info>(
    ctx: Context<'_, '_, '_, 'info, UpdateRewards<'info>>,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let registry = &mut ctx.accounts.gift_registry;

    let periods = elapsed_periods(registry.last_update_ts, now, ACCRUAL_PERIOD_SECS);
    if periods == 0 {
        msg!("No whole accrual period elapsed, nothing to distribute");
        return Ok(());
    }

    let vault = &mut ctx.accounts.vault;
    vault.accrue(now)?;
    registry.last_update_ts += periods as i64 * ACCRUAL_PERIOD_SECS;

    let total_supply = registry.total_supply;
    let accrued = vault
        .principal
        .checked_sub(total_supply)
        .ok_or(KdoError::MathOverflow)?;
    if accrued == 0 || total_supply == 0 {
        return Ok(());
    }

    require!(
        ctx.remaining_accounts.len() as u64 == registry.open_pools,
        KdoError::PoolListMismatch
    );

    let mut distributed: u64 = 0;
    let mut previous_id: Option<u64> = None;
    for pool_info in ctx.remaining_accounts.iter() {
        require!(pool_info.owner == &crate::ID, KdoError::PoolNotFound);
        let mut pool_data = pool_info.try_borrow_mut_data()?;
        let mut pool = PrizePool::try_deserialize(&mut &pool_data[..])
            .map_err(|_| KdoError::PoolNotFound)?;

        // Strictly increasing ids rule out duplicates in the list.
        if let Some(prev) = previous_id {
            require!(pool.id > prev, KdoError::PoolListMismatch);
        }
        previous_id = Some(pool.id);

        let share = prorata_share(accrued, pool.amount, total_supply)?;
        if share == 0 {
            continue;
        }
        pool.amount = pool.amount.checked_add(share).ok_or(KdoError::MathOverflow)?;
        distributed = distributed
            .checked_add(share)
            .ok_or(KdoError::MathOverflow)?;

        let mut serialized: Vec<u8> = Vec::new();
        pool.try_serialize(&mut serialized)?;
        pool_data[..serialized.len()].copy_from_slice(&serialized);
    }

    registry.total_supply = registry
        .total_supply
        .checked_add(distributed)
        .ok_or(KdoError::MathOverflow)?;

    msg!("Distributed {} of {} accrued over {} periods", distributed, accrued, periods);

    emit!(RewardsDistributed {
        periods,
        accrued,
        distributed,
        timestamp: now,
    });

    Ok(())
}
