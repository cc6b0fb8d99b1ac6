use crate::constants::{
    MAX_DESCRIPTION_LEN, MAX_GIVERS, MAX_TITLE_LEN, SEED_GIFT_REGISTRY, SEED_PRIZE_POOL,
};
use crate::errors::KdoError;
use crate::events::PrizePoolCreated;
use crate::state::{GiftRegistry, PrizePool};
use anchor_lang::prelude::*;

/// Accounts required to create a new prize pool. Anyone may create a
/// pool; the creator becomes its owner.
#[derive(Accounts)]
pub struct CreatePrizePool<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [SEED_GIFT_REGISTRY],
        bump = gift_registry.bump,
    )]
    pub gift_registry: Account<'info, GiftRegistry>,

    /// The new pool, derived from the next unused registry id.
    #[account(
        init,
        payer = owner,
        space = 8 + PrizePool::INIT_SPACE,
        seeds = [SEED_PRIZE_POOL, gift_registry.next_pool_id.to_le_bytes().as_ref()],
        bump
    )]
    pub prize_pool: Account<'info, PrizePool>,

    pub system_program: Program<'info, System>,
}

/// Creates an empty prize pool.
///
/// Validation:
/// 1. `receiver` must not be the default address.
/// 2. At least one giver, at most `MAX_GIVERS`.
/// 3. Non-empty title within the length limits.
pub fn process_create_prize_pool(
    ctx: Context<CreatePrizePool>,
    receiver: Pubkey,
    givers: Vec<Pubkey>,
    title: String,
    description: String,
) -> Result<()> {
    require!(receiver != Pubkey::default(), KdoError::EmptyReceiver);
    require!(!givers.is_empty(), KdoError::EmptyGiver);
    require!(givers.len() <= MAX_GIVERS, KdoError::TooManyGivers);
    require!(!title.is_empty(), KdoError::EmptyTitle);
    require!(title.len() <= MAX_TITLE_LEN, KdoError::TitleTooLong);
    require!(
        description.len() <= MAX_DESCRIPTION_LEN,
        KdoError::DescriptionTooLong
    );

    let registry = &mut ctx.accounts.gift_registry;
    let pool = &mut ctx.accounts.prize_pool;

    pool.bump = ctx.bumps.prize_pool;
    pool.id = registry.next_pool_id;
    pool.owner = ctx.accounts.owner.key();
    pool.receiver = receiver;
    pool.givers = givers.clone();
    pool.title = title.clone();
    pool.description = description.clone();
    pool.amount = 0;

    registry.next_pool_id = registry
        .next_pool_id
        .checked_add(1)
        .ok_or(KdoError::MathOverflow)?;
    registry.open_pools += 1;

    emit!(PrizePoolCreated {
        pool_id: pool.id,
        owner: pool.owner,
        receiver,
        givers,
        title,
        description,
    });

    Ok(())
}
