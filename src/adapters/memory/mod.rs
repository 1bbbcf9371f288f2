//! In-memory adapters.
//!
//! Back the ports with process-local maps. They are what the binary runs on
//! until real stores are wired in, and what the handler tests use. State is
//! lost on restart.

mod member_directory;
mod preferences_store;
mod progress_store;
mod scripture_store;
mod seed;

pub use member_directory::InMemoryMemberDirectory;
pub use preferences_store::InMemoryPreferencesStore;
pub use progress_store::InMemoryProgressStore;
pub use scripture_store::InMemoryScriptureStore;
pub use seed::{SeedChapter, SeedData};
