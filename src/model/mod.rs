//! Pure data structures: the [`User`] entity, its shared handle and the
//! [`UserStatistics`] snapshot.

pub mod shared;
pub mod statistics;
pub mod user;

pub use shared::*;
pub use statistics::*;
pub use user::*;
