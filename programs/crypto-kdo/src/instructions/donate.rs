use crate::constants::{MIN_DONATION_LAMPORTS, SEED_GIFT_REGISTRY, SEED_PRIZE_POOL, SEED_VAULT};
use crate::errors::KdoError;
use crate::events::DonationDone;
use crate::state::{GiftRegistry, PrizePool, Vault};
use anchor_lang::prelude::*;
use anchor_lang::system_program;

/// Accounts required to donate into a prize pool.
#[derive(Accounts)]
#[instruction(pool_id: u64)]
pub struct Donate<'info> {
    /// The donor; must belong to the pool's giver set.
    #[account(mut)]
    pub giver: Signer<'info>,

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
    )]
    pub prize_pool: Account<'info, PrizePool>,

    /// The vault receiving the donated lamports.
    #[account(
        mut,
        seeds = [SEED_VAULT],
        bump = vault.bump,
    )]
    pub vault: Account<'info, Vault>,

    pub system_program: Program<'info, System>,
}

/// Donates `amount` lamports into pool `pool_id`.
///
/// Steps:
/// 1. Check the donor is an authorized giver and the amount meets the
///    minimum.
/// 2. Transfer the lamports into the vault.
/// 3. Settle vault accrual, then credit pool, registry, and vault
///    principal by exactly `amount`.
pub fn process_donate(ctx: Context<Donate>, pool_id: u64, amount: u64) -> Result<()> {
    let pool = &mut ctx.accounts.prize_pool;
    require!(pool.is_giver(&ctx.accounts.giver.key()), KdoError::NotGiver);
    require!(amount >= MIN_DONATION_LAMPORTS, KdoError::LowDonation);

    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.giver.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
            },
        ),
        amount,
    )?;

    let now = Clock::get()?.unix_timestamp;
    let vault = &mut ctx.accounts.vault;
    vault.accrue(now)?;
    vault.principal = vault
        .principal
        .checked_add(amount)
        .ok_or(KdoError::MathOverflow)?;

    pool.amount = pool.amount.checked_add(amount).ok_or(KdoError::MathOverflow)?;

    let registry = &mut ctx.accounts.gift_registry;
    registry.total_supply = registry
        .total_supply
        .checked_add(amount)
        .ok_or(KdoError::MathOverflow)?;

    emit!(DonationDone {
        pool_id,
        giver: ctx.accounts.giver.key(),
        amount,
    });

    Ok(())
}
