use crate::constants::SEED_GIFT_REGISTRY;
use crate::errors::KdoError;
use crate::events::DrawCommitted;
use crate::state::{DrawStatus, GiftRegistry};
use anchor_lang::prelude::*;
use switchboard_on_demand::accounts::RandomnessAccountData;

/// Accounts required to commit a randomness request for a draw.
///
/// Ensures:
/// 1. Only the registry authority can start a draw.
/// 2. No other randomness request is outstanding.
/// 3. The randomness account has not been revealed already.
#[derive(Accounts)]
pub struct CommitDraw<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        mut,
        seeds = [SEED_GIFT_REGISTRY],
        bump = gift_registry.bump,
    )]
    pub gift_registry: Account<'info, GiftRegistry>,

    /// Randomness account from Switchboard.
    /// CHECK: The account's data is validated manually within the handler.
    pub randomness_account_data: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn process_commit_draw(ctx: Context<CommitDraw>) -> Result<()> {
    let clock = Clock::get()?;
    let registry = &mut ctx.accounts.gift_registry;

    require!(
        ctx.accounts.payer.key() == registry.authority,
        KdoError::Unauthorized
    );
    require!(
        registry.draw_status != DrawStatus::Pending,
        KdoError::DrawAlreadyPending
    );
    require!(registry.open_pools > 0, KdoError::NoOpenPools);

    let randomness_data =
        RandomnessAccountData::parse(ctx.accounts.randomness_account_data.data.borrow())
            .map_err(|_| KdoError::IncorrectRandomnessAccount)?;
    require!(
        seed_slot_is_fresh(randomness_data.seed_slot, clock.slot),
        KdoError::RandomnessAlreadyRevealed
    );

    registry.randomness_account = ctx.accounts.randomness_account_data.key();
    registry.draw_status = DrawStatus::Pending;

    emit!(DrawCommitted {
        randomness_account: registry.randomness_account,
    });

    Ok(())
}

/// A committed randomness account must have been seeded in the
/// immediately previous slot; anything older may already be revealed.
/// Slot 0 has no previous slot, so nothing is fresh there.
fn seed_slot_is_fresh(seed_slot: u64, current_slot: u64) -> bool {
    current_slot
        .checked_sub(1)
        .map_or(false, |previous| seed_slot == previous)
}

#[cfg(test)]
mod tests {
    use super::seed_slot_is_fresh;

    #[test]
    fn seed_slot_must_be_the_previous_slot() {
        assert!(seed_slot_is_fresh(9, 10));
        assert!(!seed_slot_is_fresh(8, 10));
        assert!(!seed_slot_is_fresh(10, 10));
    }

    #[test]
    fn slot_zero_has_no_fresh_seed() {
        assert!(!seed_slot_is_fresh(0, 0));
        assert!(!seed_slot_is_fresh(u64::MAX, 0));
    }
}
