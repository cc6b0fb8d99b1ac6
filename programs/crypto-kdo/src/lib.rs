use anchor_lang::prelude::*;

/// Program-wide constants: PDA seeds, donation minimum, and the accrual
/// rate parameters.
pub mod constants;

/// Custom error types returned via the Anchor framework when
/// instructions fail.
pub mod errors;

/// Events emitted on every state transition.
pub mod events;

/// Instruction handlers: registry initialization, pool lifecycle,
/// donations, reward distribution, the lottery draw, and vault ops.
pub mod instructions;

/// On-chain state: the gift registry, prize pools, and the vault.
pub mod state;

/// Accrual, distribution, and draw arithmetic.
pub mod utils;

use instructions::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod crypto_kdo {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        process_initialize(ctx)
    }

    pub fn create_prize_pool(
        ctx: Context<CreatePrizePool>,
        receiver: Pubkey,
        givers: Vec<Pubkey>,
        title: String,
        description: String,
    ) -> Result<()> {
        process_create_prize_pool(ctx, receiver, givers, title, description)
    }

    pub fn donate(ctx: Context<Donate>, pool_id: u64, amount: u64) -> Result<()> {
        process_donate(ctx, pool_id, amount)
    }

    pub fn update_rewards<'info>(
        ctx: Context<'_, '_, '_, 'info, UpdateRewards<'info>>,
    ) -> Result<()> {
        process_update_rewards(ctx)
    }

    pub fn commit_draw(ctx: Context<CommitDraw>) -> Result<()> {
        process_commit_draw(ctx)
    }

    pub fn finalize_draw<'info>(
        ctx: Context<'_, '_, '_, 'info, FinalizeDraw<'info>>,
    ) -> Result<()> {
        process_finalize_draw(ctx)
    }

    pub fn close_prize_pool(ctx: Context<ClosePrizePool>, pool_id: u64) -> Result<()> {
        process_close_prize_pool(ctx, pool_id)
    }

    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
        process_deposit(ctx, amount)
    }

    pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
        process_withdraw(ctx, amount)
    }
}
