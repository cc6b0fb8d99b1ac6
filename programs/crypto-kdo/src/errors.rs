use anchor_lang::prelude::*;

#[error_code]
pub enum KdoError {
    #[msg("Caller is not authorized for this operation.")]
    Unauthorized,
    #[msg("Caller is not a giver of this prize pool.")]
    NotGiver,
    #[msg("Caller is not the owner of this prize pool.")]
    NotOwner,
    #[msg("Receiver address must not be the default address.")]
    EmptyReceiver,
    #[msg("At least one giver is required.")]
    EmptyGiver,
    #[msg("Too many givers for a single prize pool.")]
    TooManyGivers,
    #[msg("Prize pool title must not be empty.")]
    EmptyTitle,
    #[msg("Prize pool title is too long.")]
    TitleTooLong,
    #[msg("Prize pool description is too long.")]
    DescriptionTooLong,
    #[msg("Donation is below the minimum amount.")]
    LowDonation,
    #[msg("Prize pool does not exist.")]
    PoolNotFound,
    #[msg("Account does not match the pool's designated receiver.")]
    ReceiverMismatch,
    #[msg("A randomness request is already pending.")]
    DrawAlreadyPending,
    #[msg("No randomness request is pending.")]
    DrawNotPending,
    #[msg("There is no open prize pool to draw from.")]
    NoOpenPools,
    #[msg("The pool accounts do not match the registry.")]
    PoolListMismatch,
    #[msg("Randomness account does not match the committed request.")]
    IncorrectRandomnessAccount,
    #[msg("Randomness was already revealed when committed.")]
    RandomnessAlreadyRevealed,
    #[msg("Randomness value has not been resolved yet.")]
    RandomnessNotResolved,
    #[msg("Amount exceeds the available vault balance.")]
    InsufficientFunds,
    #[msg("Math operation overflow.")]
    MathOverflow,
}
