//! Adapters - Implementations of port interfaces.
//!
//! - `memory` - process-local stores for progress, preferences, members and chapter text
//! - `http` - the axum REST surface

pub mod http;
pub mod memory;

pub use http::{app_router, AppState};
pub use memory::{
    InMemoryMemberDirectory, InMemoryPreferencesStore, InMemoryProgressStore,
    InMemoryScriptureStore, SeedData,
};
