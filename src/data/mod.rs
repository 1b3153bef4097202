//! Game data: drop pools, duelists, and the shared read-only provider.
//!
//! ## Key Types
//!
//! - `Pool`: Weighted card table sampled with one `rand()` draw
//! - `PoolType`: Deck construction or one of three drop ranks
//! - `Duelist` / `DuelistName`: A duelist and its four pools
//! - `GameData`: Cards and duelists, built once and passed by reference

pub mod database;
pub mod duelist;
pub mod pool;

pub use database::{GameData, PoolRow};
pub use duelist::{Duelist, DuelistName};
pub use pool::{Pool, PoolEntry, PoolType, POOL_TOTAL};
