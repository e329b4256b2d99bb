//! In-memory location store and its data sources

mod error;
mod locations;
pub mod mock;
pub mod seed;

pub use error::StoreError;
pub use locations::{ListScope, LocationStore, Snapshot, StoreEvent, DEFAULT_RECENT_LIMIT};
