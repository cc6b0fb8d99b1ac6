use crate::constants::{MAX_DESCRIPTION_LEN, MAX_GIVERS, MAX_TITLE_LEN};
use anchor_lang::prelude::*;

/// A named gift pool. Created empty, grown by donations and reward
/// distributions, destroyed on close (the PDA is hard-deleted; the id is
/// never reassigned).
#[account]
#[derive(InitSpace)]
pub struct PrizePool {
    pub bump: u8,

    /// Stable id assigned at creation from the registry counter.
    pub id: u64,

    /// The creator; the only address allowed to close the pool.
    pub owner: Pubkey,

    /// Paid the full pool balance on close.
    pub receiver: Pubkey,

    /// Addresses authorized to donate into this pool.
    #[max_len(MAX_GIVERS)]
    pub givers: Vec<Pubkey>,

    #[max_len(MAX_TITLE_LEN)]
    pub title: String,

    #[max_len(MAX_DESCRIPTION_LEN)]
    pub description: String,

    /// Accumulated lamports: donations plus distributed yield.
    pub amount: u64,
}

impl PrizePool {
    pub fn is_giver(&self, key: &Pubkey) -> bool {
        self.givers.contains(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool_with_givers(givers: Vec<Pubkey>) -> PrizePool {
        PrizePool {
            bump: 255,
            id: 0,
            owner: Pubkey::new_unique(),
            receiver: Pubkey::new_unique(),
            givers,
            title: "anniversaire".to_string(),
            description: String::new(),
            amount: 0,
        }
    }

    #[test]
    fn is_giver_checks_membership() {
        let giver1 = Pubkey::new_unique();
        let giver2 = Pubkey::new_unique();
        let other = Pubkey::new_unique();
        let pool = pool_with_givers(vec![giver1, giver2]);

        assert!(pool.is_giver(&giver1));
        assert!(pool.is_giver(&giver2));
        assert!(!pool.is_giver(&other));
    }
}
