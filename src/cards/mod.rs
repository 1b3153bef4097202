//! Card system: records, Guardian Stars, and the registry.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier for a card
//! - `Card`: Immutable card record with stats and sort keys
//! - `SortKeys`: Per-locale ordinal positions used by deck sorts
//! - `GuardianStar`: The ten Guardian Stars
//! - `CardRegistry`: Card lookup by id

pub mod definition;
pub mod guardian;
pub mod registry;

pub use definition::{Card, CardId, SortKeys};
pub use guardian::GuardianStar;
pub use registry::CardRegistry;
