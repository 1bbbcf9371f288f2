//! Reader preference handlers.

mod get_preferences;
mod update_preferences;

pub use get_preferences::GetPreferencesHandler;
pub use update_preferences::{UpdatePreferencesCommand, UpdatePreferencesHandler};
