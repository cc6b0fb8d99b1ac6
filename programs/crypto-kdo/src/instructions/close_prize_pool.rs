use crate::constants::{SEED_GIFT_REGISTRY, SEED_PRIZE_POOL, SEED_VAULT};
use crate::errors::KdoError;
use crate::events::PrizePoolClosed;
use crate::state::{GiftRegistry, PrizePool, Vault};
use anchor_lang::prelude::*;

/// Accounts required to close a prize pool and pay out its receiver.
#[derive(Accounts)]
#[instruction(pool_id: u64)]
pub struct ClosePrizePool<'info> {
    /// The pool owner; receives the rent of the closed pool account.
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [SEED_GIFT_REGISTRY],
        bump = gift_registry.bump,
    )]
    pub gift_registry: Account<'info, GiftRegistry>,

    #[account(
        mut,
        seeds = [SEED_PRIZE_POOL, pool_id.to_le_bytes().as_ref()],
        bump = prize_pool.bump,
        constraint = prize_pool.owner == owner.key() @ KdoError::NotOwner,
        close = owner,
    )]
    pub prize_pool: Account<'info, PrizePool>,

    #[account(
        mut,
        seeds = [SEED_VAULT],
        bump = vault.bump,
    )]
    pub vault: Account<'info, Vault>,

    /// The pool's designated receiver, paid the full pool balance.
    /// CHECK: Enforced to match the pool record; only credited lamports.
    #[account(
        mut,
        constraint = receiver.key() == prize_pool.receiver @ KdoError::ReceiverMismatch,
    )]
    pub receiver: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

/// Closes pool `pool_id`, transferring its full balance to the receiver
/// and hard-deleting the pool account. The id is never reused; later
/// lookups of it fail.
///
/// Balances are debited before lamports move, and the pool PDA stops
/// existing in the same transaction.
pub fn process_close_prize_pool(ctx: Context<ClosePrizePool>, pool_id: u64) -> Result<()> {
    let pool = &ctx.accounts.prize_pool;
    let amount = pool.amount;

    let now = Clock::get()?.unix_timestamp;
    let vault = &mut ctx.accounts.vault;
    vault.accrue(now)?;
    vault.principal = vault
        .principal
        .checked_sub(amount)
        .ok_or(KdoError::InsufficientFunds)?;

    let registry = &mut ctx.accounts.gift_registry;
    registry.total_supply = registry
        .total_supply
        .checked_sub(amount)
        .ok_or(KdoError::MathOverflow)?;
    registry.open_pools = registry
        .open_pools
        .checked_sub(1)
        .ok_or(KdoError::MathOverflow)?;

    {
        let vault_info = vault.to_account_info();
        let mut vault_lamports = vault_info.try_borrow_mut_lamports()?;
        **vault_lamports = vault_lamports
            .checked_sub(amount)
            .ok_or(KdoError::InsufficientFunds)?;
    }
    {
        let mut receiver_lamports = ctx.accounts.receiver.try_borrow_mut_lamports()?;
        **receiver_lamports = receiver_lamports
            .checked_add(amount)
            .ok_or(KdoError::MathOverflow)?;
    }

    emit!(PrizePoolClosed {
        pool_id,
        owner: pool.owner,
        receiver: pool.receiver,
        title: pool.title.clone(),
        amount,
    });

    Ok(())
}
