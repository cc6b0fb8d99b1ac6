use crate::constants::SEED_GIFT_REGISTRY;
use crate::errors::KdoError;
use crate::events::WinnerDrawn;
use crate::state::{DrawStatus, GiftRegistry, PrizePool};
use crate::utils::math::weighted_pick;
use anchor_lang::prelude::*;
use switchboard_on_demand::accounts::RandomnessAccountData;

/// Accounts required to finalize a draw once the committed randomness has
/// been revealed. Every open prize pool must be passed as a remaining
/// account, sorted by id; the weights are snapshotted at fulfillment time.
#[derive(Accounts)]
pub struct FinalizeDraw<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        mut,
        seeds = [SEED_GIFT_REGISTRY],
        bump = gift_registry.bump,
    )]
    pub gift_registry: Account<'info, GiftRegistry>,

    /// The randomness oracle account providing verifiable randomness.
    /// CHECK: The account's data is validated manually within the handler.
    pub randomness_account_data: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

/// Resolves the pending draw into a winning pool id.
///
/// The revealed random value is mapped onto `[0, sum(amounts))` and the
/// winner is the pool whose cumulative-weight range contains it, so each
/// pool wins with probability proportional to its balance. An unknown or
/// stale randomness account is rejected outright.
pub fn process_finalize_draw<'info>(
    ctx: Context<'_, '_, '_, 'info, FinalizeDraw<'info>>,
) -> Result<()> {
    let clock = Clock::get()?;
    let registry = &mut ctx.accounts.gift_registry;

    require!(
        ctx.accounts.payer.key() == registry.authority,
        KdoError::Unauthorized
    );
    require!(
        registry.draw_status == DrawStatus::Pending,
        KdoError::DrawNotPending
    );
    require!(
        ctx.accounts.randomness_account_data.key() == registry.randomness_account,
        KdoError::IncorrectRandomnessAccount
    );
    require!(
        ctx.remaining_accounts.len() as u64 == registry.open_pools,
        KdoError::PoolListMismatch
    );

    let randomness_data =
        RandomnessAccountData::parse(ctx.accounts.randomness_account_data.data.borrow())
            .map_err(|_| KdoError::IncorrectRandomnessAccount)?;
    let revealed = randomness_data
        .get_value(&clock)
        .map_err(|_| KdoError::RandomnessNotResolved)?;
    let seed = u64::from_le_bytes(
        revealed[..8]
            .try_into()
            .map_err(|_| KdoError::RandomnessNotResolved)?,
    );

    let mut entries: Vec<(u64, u64)> = Vec::with_capacity(ctx.remaining_accounts.len());
    let mut previous_id: Option<u64> = None;
    for pool_info in ctx.remaining_accounts.iter() {
        require!(pool_info.owner == &crate::ID, KdoError::PoolNotFound);
        let pool_data = pool_info.try_borrow_data()?;
        let pool = PrizePool::try_deserialize(&mut &pool_data[..])
            .map_err(|_| KdoError::PoolNotFound)?;
        if let Some(prev) = previous_id {
            require!(pool.id > prev, KdoError::PoolListMismatch);
        }
        previous_id = Some(pool.id);
        entries.push((pool.id, pool.amount));
    }

    let total_weight: u64 = entries.iter().map(|(_, w)| *w).sum();
    let winner = weighted_pick(seed, &entries).ok_or(KdoError::NoOpenPools)?;

    msg!("Randomness result: {}", seed);
    msg!("Winning prize pool: {}", winner);

    registry.winning_pool_id = winner;
    registry.draw_status = DrawStatus::Fulfilled;
    registry.randomness_account = Pubkey::default();

    emit!(WinnerDrawn {
        pool_id: winner,
        total_weight,
    });

    Ok(())
}
