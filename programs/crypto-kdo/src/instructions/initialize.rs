use crate::constants::{SEED_GIFT_REGISTRY, SEED_VAULT};
use crate::events::RegistryInitialized;
use crate::state::{DrawStatus, GiftRegistry, Vault};
use anchor_lang::prelude::*;

/// Accounts required to initialize the registry and its vault.
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// The account paying for account creation; becomes the authority.
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        init,
        payer = payer,
        space = 8 + GiftRegistry::INIT_SPACE,
        seeds = [SEED_GIFT_REGISTRY],
        bump
    )]
    pub gift_registry: Account<'info, GiftRegistry>,

    #[account(
        init,
        payer = payer,
        space = 8 + Vault::INIT_SPACE,
        seeds = [SEED_VAULT],
        bump
    )]
    pub vault: Account<'info, Vault>,

    pub system_program: Program<'info, System>,
}

/// Creates the singleton registry and vault. The payer becomes the
/// administrative authority for vault operations and draw triggers;
/// accrual clocks start at the current timestamp.
pub fn process_initialize(ctx: Context<Initialize>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;

    let registry = &mut ctx.accounts.gift_registry;
    registry.bump = ctx.bumps.gift_registry;
    registry.authority = ctx.accounts.payer.key();
    registry.next_pool_id = 0;
    registry.open_pools = 0;
    registry.total_supply = 0;
    registry.last_update_ts = now;
    registry.draw_status = DrawStatus::Idle;
    registry.randomness_account = Pubkey::default();
    registry.winning_pool_id = 0;

    let vault = &mut ctx.accounts.vault;
    vault.bump = ctx.bumps.vault;
    vault.authority = ctx.accounts.payer.key();
    vault.principal = 0;
    vault.reserve = 0;
    vault.last_accrual_ts = now;

    emit!(RegistryInitialized {
        authority: registry.authority,
        vault: vault.key(),
    });

    Ok(())
}
