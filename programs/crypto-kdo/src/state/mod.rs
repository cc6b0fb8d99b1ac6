/// The singleton registry tracking pool ids, managed supply, and the
/// draw lifecycle.
pub mod registry;

/// Individual prize pool accounts.
pub mod prize_pool;

/// The yield-bearing vault that holds all pooled lamports.
pub mod vault;

pub use prize_pool::*;
pub use registry::*;
pub use vault::*;
