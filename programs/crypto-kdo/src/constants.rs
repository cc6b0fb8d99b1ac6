/// PDA seed for the singleton registry account.
pub const SEED_GIFT_REGISTRY: &[u8] = b"gift_registry";

/// PDA seed prefix for prize pool accounts; the pool id (LE bytes) follows.
pub const SEED_PRIZE_POOL: &[u8] = b"prize_pool";

/// PDA seed for the vault holding all pooled lamports.
pub const SEED_VAULT: &[u8] = b"vault";

/// Minimum accepted donation: 0.003 SOL.
pub const MIN_DONATION_LAMPORTS: u64 = 3_000_000;

/// Length of one accrual period in seconds (one day). Partial periods
/// never accrue; elapsed time is floored to whole periods.
pub const ACCRUAL_PERIOD_SECS: i64 = 86_400;

/// Yield rate per accrual period, in basis points (10% per day).
pub const RATE_PER_PERIOD_BPS: u64 = 1_000;

/// Basis-point denominator.
pub const BPS_DENOMINATOR: u64 = 10_000;

pub const MAX_GIVERS: usize = 16;
pub const MAX_TITLE_LEN: usize = 64;
pub const MAX_DESCRIPTION_LEN: usize = 256;
