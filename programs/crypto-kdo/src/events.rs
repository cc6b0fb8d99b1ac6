use anchor_lang::prelude::*;

#[event]
pub struct RegistryInitialized {
    pub authority: Pubkey,
    pub vault: Pubkey,
}

#[event]
pub struct PrizePoolCreated {
    pub pool_id: u64,
    pub owner: Pubkey,
    pub receiver: Pubkey,
    pub givers: Vec<Pubkey>,
    pub title: String,
    pub description: String,
}

#[event]
pub struct DonationDone {
    pub pool_id: u64,
    pub giver: Pubkey,
    pub amount: u64,
}

#[event]
pub struct RewardsDistributed {
    pub periods: u64,
    pub accrued: u64,
    pub distributed: u64,
    pub timestamp: i64,
}

#[event]
pub struct DrawCommitted {
    pub randomness_account: Pubkey,
}

#[event]
pub struct WinnerDrawn {
    pub pool_id: u64,
    pub total_weight: u64,
}

#[event]
pub struct PrizePoolClosed {
    pub pool_id: u64,
    pub owner: Pubkey,
    pub receiver: Pubkey,
    pub title: String,
    pub amount: u64,
}

#[event]
pub struct DepositDone {
    pub amount: u64,
}

#[event]
pub struct WithdrawDone {
    pub amount: u64,
}
