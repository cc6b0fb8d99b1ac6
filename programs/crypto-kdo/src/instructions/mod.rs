pub mod close_prize_pool;
pub mod commit_draw;
pub mod create_prize_pool;
pub mod donate;
pub mod finalize_draw;
pub mod initialize;
pub mod update_rewards;
pub mod vault_ops;

pub use close_prize_pool::*;
pub use commit_draw::*;
pub use create_prize_pool::*;
pub use donate::*;
pub use finalize_draw::*;
pub use initialize::*;
pub use update_rewards::*;
pub use vault_ops::*;
