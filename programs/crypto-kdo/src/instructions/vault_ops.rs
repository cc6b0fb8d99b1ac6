use crate::constants::SEED_VAULT;
use crate::errors::KdoError;
use crate::events::{DepositDone, WithdrawDone};
use crate::state::Vault;
use anchor_lang::prelude::*;
use anchor_lang::system_program;

/// Accounts required for an authority deposit into the vault.
#[derive(Accounts)]
pub struct Deposit<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [SEED_VAULT],
        bump = vault.bump,
        constraint = vault.authority == authority.key() @ KdoError::Unauthorized,
    )]
    pub vault: Account<'info, Vault>,

    pub system_program: Program<'info, System>,
}

/// Accounts required for an authority withdrawal from the vault.
#[derive(Accounts)]
pub struct Withdraw<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [SEED_VAULT],
        bump = vault.bump,
        constraint = vault.authority == authority.key() @ KdoError::Unauthorized,
    )]
    pub vault: Account<'info, Vault>,

    pub system_program: Program<'info, System>,
}

/// Deposits lamports into the vault's yield reserve, the counterpart of
/// the pre-funded gateway in the original deployment. The reserve backs
/// future accrual; it is drawn down by `Vault::accrue` and never
/// distributed directly.
pub fn process_deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.authority.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
            },
        ),
        amount,
    )?;

    let now = Clock::get()?.unix_timestamp;
    let vault = &mut ctx.accounts.vault;
    vault.accrue(now)?;
    vault.reserve = vault
        .reserve
        .checked_add(amount)
        .ok_or(KdoError::MathOverflow)?;

    emit!(DepositDone { amount });

    Ok(())
}

/// Withdraws lamports from the vault. Settles accrued yield first; only
/// the unrealized reserve may leave. Pool principal and realized yield
/// stay put, so a withdrawal can never strand a pool payout.
pub fn process_withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let vault = &mut ctx.accounts.vault;
    vault.accrue(now)?;

    require!(amount <= vault.reserve, KdoError::InsufficientFunds);
    vault.reserve -= amount;

    {
        let vault_info = vault.to_account_info();
        let mut vault_lamports = vault_info.try_borrow_mut_lamports()?;
        **vault_lamports = vault_lamports
            .checked_sub(amount)
            .ok_or(KdoError::InsufficientFunds)?;
    }
    {
        let mut authority_lamports = ctx.accounts.authority.try_borrow_mut_lamports()?;
        **authority_lamports = authority_lamports
            .checked_add(amount)
            .ok_or(KdoError::MathOverflow)?;
    }

    emit!(WithdrawDone { amount });

    Ok(())
}
