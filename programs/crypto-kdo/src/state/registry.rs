use anchor_lang::prelude::*;

/// Lifecycle of a lottery draw. At most one randomness request is
/// outstanding at a time.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Default, InitSpace)]
pub enum DrawStatus {
    /// No request in flight; a new draw may be committed.
    #[default]
    Idle,
    /// A randomness account has been committed and awaits its reveal.
    Pending,
    /// The last draw resolved; `winning_pool_id` is valid.
    Fulfilled,
}

#[account]
#[derive(InitSpace)]
pub struct GiftRegistry {
    /// The bump seed used for deriving the PDA address of this account.
    pub bump: u8,

    /// Administrative signer: vault deposits/withdrawals and draw triggers.
    pub authority: Pubkey,

    /// Next pool id to assign. Monotonic; ids of closed pools are never
    /// reused, so an id stays meaningful after other pools are removed.
    pub next_pool_id: u64,

    /// Number of currently open prize pools.
    pub open_pools: u64,

    /// Lamports under management attributed to pools: donated principal
    /// plus distributed yield. Never exceeds the vault's compounded
    /// principal; equal to it right after a full distribution.
    pub total_supply: u64,

    /// Last reward distribution, aligned to whole accrual periods. The
    /// remainder of elapsed time is carried forward, not discarded.
    pub last_update_ts: i64,

    /// Current draw lifecycle state.
    pub draw_status: DrawStatus,

    /// The committed switchboard randomness account, correlating the
    /// in-flight request with its reveal. Default when no draw is pending.
    pub randomness_account: Pubkey,

    /// The last finalized lottery winner. Valid only while
    /// `draw_status` is `Fulfilled`.
    pub winning_pool_id: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draw_state_starts_idle() {
        assert!(DrawStatus::default() == DrawStatus::Idle);
    }
}
